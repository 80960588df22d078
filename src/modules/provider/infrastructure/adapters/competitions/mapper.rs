use super::models::RawCompetition;
use crate::modules::listing::domain::{
    entities::Competition,
    services::{extract_leading_number, extract_prize_text},
    value_objects::{CompetitionSource, EventStatus, ListingId},
};
use crate::modules::provider::domain::value_objects::NormalizeContext;
use crate::modules::provider::infrastructure::adapters::mapper::{
    clean_text, text_or, ListingMapper,
};

const SOURCE_TAG: &str = "competition";
const DEFAULT_LOCATION: &str = "Online";
const DEFAULT_DAYS_LEFT: &str = "TBA";

#[derive(Debug, Clone, Default)]
pub struct CompetitionMapper;

impl CompetitionMapper {
    pub fn new() -> Self {
        Self
    }
}

impl ListingMapper for CompetitionMapper {
    type Raw = RawCompetition;
    type Output = Competition;

    fn source_tag(&self) -> &str {
        SOURCE_TAG
    }

    fn map_record(&self, raw: RawCompetition, index: usize, _ctx: &NormalizeContext) -> Competition {
        let source = CompetitionSource::from_link(&raw.link);
        let status = match EventStatus::from(clean_text(&raw.status)) {
            EventStatus::Unknown => EventStatus::from_countdown_label(&raw.days_left),
            status => status,
        };
        let prize_text = match clean_text(&raw.prize_amount) {
            "" => extract_prize_text(&raw.description).unwrap_or_default(),
            text => text.to_string(),
        };
        let prize_amount = extract_leading_number(Some(&prize_text));

        Competition {
            id: ListingId::resolve(
                SOURCE_TAG,
                raw.id.as_deref(),
                &raw.link,
                &raw.title,
                index,
            ),
            host: text_or(&raw.host, source_host(source)),
            location: text_or(&raw.location, DEFAULT_LOCATION),
            days_left: text_or(&raw.days_left, DEFAULT_DAYS_LEFT),
            title: raw.title,
            link: raw.link,
            source,
            description: raw.description,
            status,
            prize_text,
            prize_amount,
            participants: raw.participants,
        }
    }
}

fn source_host(source: CompetitionSource) -> &'static str {
    match source {
        CompetitionSource::LabLab => "LabLab.ai",
        CompetitionSource::Devpost => "Devpost",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_from_link() {
        let mapper = CompetitionMapper::new();
        let ctx = NormalizeContext::new();
        let rows = mapper.map_batch(
            vec![
                json!({"title": "Agents Cup", "link": "https://lablab.ai/event/agents-cup"}),
                json!({"title": "Data Derby", "link": "https://data-derby.devpost.com"}),
            ],
            &ctx,
        );
        assert_eq!(rows[0].source, CompetitionSource::LabLab);
        assert_eq!(rows[0].host, "LabLab.ai");
        assert_eq!(rows[1].source, CompetitionSource::Devpost);
    }

    #[test]
    fn test_prize_from_description() {
        let raw = RawCompetition {
            description: "Compete for 5,000 USD and cloud credits".to_string(),
            ..Default::default()
        };
        let competition = CompetitionMapper::new().map_record(raw, 0, &NormalizeContext::new());
        assert_eq!(competition.prize_amount, 5000.0);
        assert_eq!(competition.status, EventStatus::Unknown);
        assert_eq!(competition.days_left, "TBA");
    }
}
