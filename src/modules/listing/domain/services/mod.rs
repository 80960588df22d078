pub mod dates;
pub mod description;
pub mod extractors;

pub use dates::{days_left_label, is_within_days, parse_event_period, parse_posting_date};
pub use description::{extract_prize_text, extract_themes};
pub use extractors::{extract_hourly_rate, extract_leading_number};
