// Whole-feed normalization. Feeds are concatenated in a fixed order and ids
// are made unique per category afterwards; nothing here reorders records.

use serde_json::Value;

use super::competitions::CompetitionMapper;
use super::courses::CourseMapper;
use super::hackathon::RawHackathon;
use super::internships::InternshipMapper;
use super::mapper::ListingMapper;
use crate::modules::listing::domain::{
    entities::{Competition, Course, Hackathon, Internship},
    value_objects::{Category, HackathonSource, ListingId},
};
use crate::modules::provider::domain::value_objects::NormalizeContext;
use crate::shared::utils::LogContext;

/// LabLab records first, then Devpost
pub fn normalize_hackathons(
    lablab: Vec<Value>,
    devpost: Vec<Value>,
    ctx: &NormalizeContext,
) -> Vec<Hackathon> {
    let mut hackathons = Vec::with_capacity(lablab.len() + devpost.len());

    for (source, records) in [
        (HackathonSource::LabLab, lablab),
        (HackathonSource::Devpost, devpost),
    ] {
        let count = records.len();
        hackathons.extend(
            records
                .into_iter()
                .enumerate()
                .map(|(index, value)| RawHackathon::decode(source, value, index).normalize(index, ctx)),
        );
        LogContext::normalized(Category::Hackathons.as_str(), source.as_str(), count);
    }

    ListingId::make_unique(hackathons.iter_mut().map(|h| &mut h.id));
    hackathons
}

pub fn normalize_internships(records: Vec<Value>, ctx: &NormalizeContext) -> Vec<Internship> {
    let mapper = InternshipMapper::new();
    let mut internships = mapper.map_batch(records, ctx);
    LogContext::normalized(Category::Internships.as_str(), mapper.source_tag(), internships.len());

    ListingId::make_unique(internships.iter_mut().map(|i| &mut i.id));
    internships
}

/// One `(provider feed, records)` pair per configured provider, in order
pub fn normalize_courses(feeds: Vec<(String, Vec<Value>)>, ctx: &NormalizeContext) -> Vec<Course> {
    let mut courses = Vec::new();

    for (feed, records) in feeds {
        let mapper = CourseMapper::for_feed(&feed);
        let batch = mapper.map_batch(records, ctx);
        LogContext::normalized(Category::Courses.as_str(), mapper.source_tag(), batch.len());
        courses.extend(batch);
    }

    ListingId::make_unique(courses.iter_mut().map(|c| &mut c.id));
    courses
}

pub fn normalize_competitions(records: Vec<Value>, ctx: &NormalizeContext) -> Vec<Competition> {
    let mapper = CompetitionMapper::new();
    let mut competitions = mapper.map_batch(records, ctx);
    LogContext::normalized(
        Category::Competitions.as_str(),
        mapper.source_tag(),
        competitions.len(),
    );

    ListingId::make_unique(competitions.iter_mut().map(|c| &mut c.id));
    competitions
}
