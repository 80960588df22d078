//! Numeric extraction from free-text feed fields.
//!
//! Prize and salary fields arrive as display strings ("$10,000 in prizes",
//! "Up to $25/hr", "12,50 €"). Absence of a number is data, not an error:
//! every function here returns `0.0` when nothing usable is found.

use regex::Regex;
use std::sync::OnceLock;

fn number_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(?:[.,]\d+)*").expect("number pattern is valid"))
}

/// First number in `text`, with grouping separators removed.
///
/// Separator rules:
/// - a comma followed by exactly three digits groups thousands (`10,000`)
/// - a single comma followed by any other digit count is a decimal comma (`12,5`)
/// - when both `.` and `,` appear, the last one is the decimal mark
///
/// Returns `0.0` for `None`, empty input, or input without digits. The result
/// is always finite and non-negative.
pub fn extract_leading_number(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return 0.0;
    };

    number_run()
        .find(text)
        .and_then(|run| normalize_run(run.as_str()))
        .and_then(|digits| digits.parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(0.0)
}

/// Lower bound of an hourly pay string (`"$18 - $22 an hour"` -> `18`)
pub fn extract_hourly_rate(text: Option<&str>) -> f64 {
    extract_leading_number(text)
}

/// Rewrites a matched run into something `f64::from_str` accepts
fn normalize_run(run: &str) -> Option<String> {
    let last_dot = run.rfind('.');
    let last_comma = run.rfind(',');

    let normalized = match (last_dot, last_comma) {
        (None, None) => run.to_string(),
        (Some(dot), Some(comma)) => {
            let decimal_at = dot.max(comma);
            let (int_part, frac_part) = run.split_at(decimal_at);
            let int_digits: String = int_part.chars().filter(char::is_ascii_digit).collect();
            format!("{}.{}", int_digits, &frac_part[1..])
        }
        (None, Some(_)) => resolve_single_separator(run, ','),
        (Some(_), None) => resolve_single_separator(run, '.'),
    };

    (!normalized.is_empty()).then_some(normalized)
}

/// Only one kind of separator is present: decide grouping vs decimal
fn resolve_single_separator(run: &str, sep: char) -> String {
    let groups: Vec<&str> = run.split(sep).collect();
    let all_thousands = groups[1..].iter().all(|g| g.len() == 3);

    if groups.len() == 2 {
        // "10,000" groups, "12,5" and "3.14" are decimals. A lone dot is
        // always a decimal point.
        if sep == ',' && all_thousands {
            groups.concat()
        } else {
            format!("{}.{}", groups[0], groups[1])
        }
    } else if all_thousands {
        groups.concat()
    } else {
        // Version-like runs ("1.2.3"): keep the first decimal only
        format!("{}.{}", groups[0], groups[1])
    }
}
