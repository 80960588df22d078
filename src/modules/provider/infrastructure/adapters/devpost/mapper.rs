use super::models::DevpostHackathon;
use crate::modules::listing::domain::{
    entities::Hackathon,
    services::extract_leading_number,
    value_objects::{EventStatus, HackathonSource, ListingId},
};
use crate::modules::provider::domain::value_objects::NormalizeContext;
use crate::modules::provider::infrastructure::adapters::mapper::{
    clean_text, text_or, ListingMapper,
};

const DEFAULT_HOST: &str = "Devpost";
const DEFAULT_LOCATION: &str = "Online";
const DEFAULT_PERIOD: &str = "TBA";
const DEFAULT_DAYS_LEFT: &str = "TBA";

#[derive(Debug, Clone, Default)]
pub struct DevpostMapper;

impl DevpostMapper {
    pub fn new() -> Self {
        Self
    }

    /// Explicit status when the tile has one, otherwise read off the countdown
    fn resolve_status(raw: &DevpostHackathon) -> EventStatus {
        match EventStatus::from(clean_text(&raw.status)) {
            EventStatus::Unknown => EventStatus::from_countdown_label(&raw.days_left),
            status => status,
        }
    }
}

impl ListingMapper for DevpostMapper {
    type Raw = DevpostHackathon;
    type Output = Hackathon;

    fn source_tag(&self) -> &str {
        HackathonSource::Devpost.as_str()
    }

    fn map_record(&self, raw: DevpostHackathon, index: usize, _ctx: &NormalizeContext) -> Hackathon {
        let status = Self::resolve_status(&raw);
        let prize_text = clean_text(&raw.prize_amount).to_string();
        let prize_amount = extract_leading_number(Some(&prize_text));

        Hackathon {
            id: ListingId::resolve(
                self.source_tag(),
                raw.id.as_deref(),
                &raw.link,
                &raw.title,
                index,
            ),
            host: text_or(&raw.host, DEFAULT_HOST),
            location: text_or(&raw.location, DEFAULT_LOCATION),
            submission_period: text_or(&raw.submission_period, DEFAULT_PERIOD),
            days_left: text_or(&raw.days_left, DEFAULT_DAYS_LEFT),
            themes: raw
                .themes
                .iter()
                .map(|t| clean_text(t))
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            title: raw.title,
            link: raw.link,
            source: HackathonSource::Devpost,
            status,
            prize_text,
            prize_amount,
            participants: raw.participants,
            image_url: String::new(),
        }
    }
}
