use serde_json::Value;

use super::devpost::{DevpostHackathon, DevpostMapper};
use super::lablab::{LabLabHackathon, LabLabMapper};
use super::mapper::{decode_record, ListingMapper};
use crate::modules::listing::domain::{entities::Hackathon, value_objects::HackathonSource};
use crate::modules::provider::domain::value_objects::NormalizeContext;

/// A hackathon record in one of the two feed shapes
#[derive(Debug, Clone, PartialEq)]
pub enum RawHackathon {
    LabLab(LabLabHackathon),
    Devpost(DevpostHackathon),
}

impl RawHackathon {
    /// Decode a raw value as the given feed's shape
    pub fn decode(source: HackathonSource, value: Value, index: usize) -> Self {
        match source {
            HackathonSource::LabLab => {
                RawHackathon::LabLab(decode_record(value, source.as_str(), index))
            }
            HackathonSource::Devpost => {
                RawHackathon::Devpost(decode_record(value, source.as_str(), index))
            }
        }
    }

    pub fn source(&self) -> HackathonSource {
        match self {
            RawHackathon::LabLab(_) => HackathonSource::LabLab,
            RawHackathon::Devpost(_) => HackathonSource::Devpost,
        }
    }

    /// Dispatch to the feed's mapper
    pub fn normalize(self, index: usize, ctx: &NormalizeContext) -> Hackathon {
        match self {
            RawHackathon::LabLab(raw) => LabLabMapper::new().map_record(raw, index, ctx),
            RawHackathon::Devpost(raw) => DevpostMapper::new().map_record(raw, index, ctx),
        }
    }
}
