/// Derived numeric fields a listing can be ranged or ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Prize,
    Participants,
    Salary,
    Rating,
}

/// Half-open interval `[min, max)`; an open end is unbounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub name: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bucket {
    pub const fn new(name: &'static str, min: Option<f64>, max: Option<f64>) -> Self {
        Self { name, min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value < max)
    }
}

/// Hourly pay, in dollars
pub const SALARY_BUCKETS: &[Bucket] = &[
    Bucket::new("low", None, Some(15.0)),
    Bucket::new("medium", Some(15.0), Some(25.0)),
    Bucket::new("high", Some(25.0), None),
];

pub const PRIZE_BUCKETS: &[Bucket] = &[
    Bucket::new("under_1k", None, Some(1_000.0)),
    Bucket::new("1k_to_10k", Some(1_000.0), Some(10_000.0)),
    Bucket::new("over_10k", Some(10_000.0), None),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterKind {
    /// Equality on a scalar field, membership on a set field
    Categorical,
    /// Bucket selection over a derived numeric field
    Range {
        metric: Metric,
        buckets: &'static [Bucket],
    },
}

/// A filter a category accepts, addressed by `key`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterDef {
    pub key: &'static str,
    pub kind: FilterKind,
}

impl FilterDef {
    pub const fn categorical(key: &'static str) -> Self {
        Self {
            key,
            kind: FilterKind::Categorical,
        }
    }

    pub const fn range(key: &'static str, metric: Metric, buckets: &'static [Bucket]) -> Self {
        Self {
            key,
            kind: FilterKind::Range { metric, buckets },
        }
    }

    pub fn bucket(&self, name: &str) -> Option<&'static Bucket> {
        match self.kind {
            FilterKind::Range { buckets, .. } => buckets.iter().find(|b| b.name == name),
            FilterKind::Categorical => None,
        }
    }
}

/// Value of a categorical field on one listing
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Scalar(&'a str),
    Set(Vec<&'a str>),
}

impl<'a> FieldValue<'a> {
    /// Case-insensitive equality, or membership for sets
    pub fn matches(&self, wanted: &str) -> bool {
        let wanted = wanted.to_lowercase();
        match self {
            FieldValue::Scalar(value) => value.to_lowercase() == wanted,
            FieldValue::Set(values) => values.iter().any(|v| v.to_lowercase() == wanted),
        }
    }

    pub fn values(&self) -> Vec<&'a str> {
        match self {
            FieldValue::Scalar(value) => vec![*value],
            FieldValue::Set(values) => values.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_bucket_edges() {
        let [low, medium, high] = [SALARY_BUCKETS[0], SALARY_BUCKETS[1], SALARY_BUCKETS[2]];
        assert!(low.contains(0.0));
        assert!(low.contains(14.99));
        assert!(!low.contains(15.0));
        assert!(medium.contains(15.0));
        assert!(!medium.contains(25.0));
        assert!(high.contains(25.0));
    }

    #[test]
    fn test_bucket_lookup() {
        let prize = FilterDef::range("prize", Metric::Prize, PRIZE_BUCKETS);
        assert_eq!(prize.bucket("over_10k").map(|b| b.min), Some(Some(10_000.0)));
        assert!(prize.bucket("huge").is_none());
        assert!(FilterDef::categorical("status").bucket("low").is_none());
    }

    #[test]
    fn test_field_value_matching() {
        assert!(FieldValue::Scalar("Open").matches("open"));
        assert!(FieldValue::Set(vec!["Internship", "Part-time"]).matches("part-time"));
        assert!(!FieldValue::Set(vec![]).matches("Internship"));
    }

    #[test]
    fn test_field_value_matching_non_ascii() {
        assert!(FieldValue::Scalar("Zürich").matches("zürich"));
        assert!(FieldValue::Scalar("ÉCOLE").matches("école"));
        assert!(FieldValue::Set(vec!["Süd", "Nord"]).matches("SÜD"));
        assert!(!FieldValue::Scalar("Zurich").matches("zürich"));
    }
}
