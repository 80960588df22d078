pub mod modules;
pub mod shared;

pub use modules::listing::{
    Category, Competition, CompetitionSource, Course, CourseSource, EventStatus, Hackathon,
    HackathonSource, Internship, InternshipSource, ListingId,
};
pub use modules::provider::{
    BundledRecordSource, Endpoint, HttpRecordSource, ListingLoader, NormalizeContext,
    RecordSource,
};
pub use modules::query::{
    evaluate, CategoryView, ListingBoard, ListingStats, LoadOutcome, Query, QueryController,
    Queryable, SortKey,
};
pub use shared::{AppConfig, AppError, AppResult, DataMode, FreshnessConfig};

use std::sync::Arc;

use shared::utils::init_logger;

/// Builds a board from `OPPORTUNITIES_*` configuration and loads every
/// category once.
pub async fn run() -> AppResult<ListingBoard> {
    init_logger();

    let config = AppConfig::from_env()?;
    let loader = ListingLoader::from_config(&config)?;
    let board = ListingBoard::new(loader);
    board.mount_all().await;

    log::info!(
        "Listings ready: {} hackathons, {} internships, {} courses, {} competitions",
        board.hackathons.stats().await.total,
        board.internships.stats().await.total,
        board.courses.stats().await.total,
        board.competitions.stats().await.total,
    );

    Ok(board)
}

/// Board over the bundled snapshot, without touching the environment
pub fn bundled_board() -> ListingBoard {
    let config = AppConfig::default();
    ListingBoard::new(ListingLoader::new(
        Arc::new(BundledRecordSource::bundled()),
        config.course_providers,
    ))
}
