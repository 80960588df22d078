use super::models::LabLabHackathon;
use crate::modules::listing::domain::{
    entities::Hackathon,
    services::{
        days_left_label, extract_leading_number, extract_prize_text, extract_themes,
        parse_event_period, parse_posting_date,
    },
    value_objects::{EventStatus, HackathonSource, ListingId},
};
use crate::modules::provider::domain::value_objects::NormalizeContext;
use crate::modules::provider::infrastructure::adapters::mapper::{
    clean_text, text_or, ListingMapper,
};

const DEFAULT_HOST: &str = "LabLab.ai";
const DEFAULT_LOCATION: &str = "Online";
const DEFAULT_PERIOD: &str = "TBA";

/// LabLab.ai specific mapper implementation
#[derive(Debug, Clone, Default)]
pub struct LabLabMapper;

impl LabLabMapper {
    pub fn new() -> Self {
        Self
    }

    /// Prize text from the dedicated field, else mined from the description
    fn resolve_prize_text(raw: &LabLabHackathon) -> String {
        raw.prize_amount
            .as_deref()
            .map(clean_text)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .or_else(|| extract_prize_text(&raw.description))
            .unwrap_or_default()
    }

    fn resolve_themes(raw: &LabLabHackathon) -> Vec<String> {
        if raw.themes.is_empty() {
            extract_themes(&raw.description)
        } else {
            raw.themes.clone()
        }
    }

    /// Countdown recomputed from the end date when one can be recovered;
    /// otherwise the scraped label, otherwise derived from status alone
    fn resolve_days_left(
        raw: &LabLabHackathon,
        status: EventStatus,
        ctx: &NormalizeContext,
    ) -> String {
        let today = ctx.today();
        let end = parse_posting_date(raw.end_date.as_deref())
            .map(|dt| dt.date_naive())
            .or_else(|| parse_event_period(&raw.submission_period, today).map(|(_, end)| end));

        if end.is_some() || status == EventStatus::Ended {
            return days_left_label(status, end, today);
        }

        match raw.days_left.as_deref().map(clean_text) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => days_left_label(status, None, today),
        }
    }
}

impl ListingMapper for LabLabMapper {
    type Raw = LabLabHackathon;
    type Output = Hackathon;

    fn source_tag(&self) -> &str {
        HackathonSource::LabLab.as_str()
    }

    fn map_record(&self, raw: LabLabHackathon, index: usize, ctx: &NormalizeContext) -> Hackathon {
        let status = EventStatus::from(raw.status.as_str());
        let prize_text = Self::resolve_prize_text(&raw);
        let prize_amount = extract_leading_number(Some(&prize_text));
        let themes = Self::resolve_themes(&raw);
        let days_left = Self::resolve_days_left(&raw, status, ctx);

        Hackathon {
            id: ListingId::resolve(
                self.source_tag(),
                raw.id.as_deref(),
                &raw.link,
                &raw.title,
                index,
            ),
            title: raw.title,
            link: raw.link,
            source: HackathonSource::LabLab,
            host: DEFAULT_HOST.to_string(),
            status,
            location: text_or(&raw.location, DEFAULT_LOCATION),
            prize_text,
            prize_amount,
            themes,
            submission_period: text_or(&raw.submission_period, DEFAULT_PERIOD),
            participants: raw.participants,
            days_left,
            image_url: raw.image_url,
        }
    }
}
