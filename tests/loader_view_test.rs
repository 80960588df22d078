/// Loader and view behavior against a mocked record source
mod utils;

use opportunities_lib::{
    CategoryView, Competition, Course, CourseSource, Endpoint, Hackathon, ListingBoard,
    LoadOutcome, SortKey,
};
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;
use utils::{
    factories::{self, RawRecordFactory},
    helpers::{loader_for, mock_source, MockSource},
};

#[tokio::test]
async fn hackathon_load_fetches_both_feeds() {
    let mut source = MockSource::new();
    source.expect_name().return_const("mock".to_string());
    source
        .expect_fetch()
        .withf(|endpoint| *endpoint == Endpoint::LabLabHackathons)
        .times(1)
        .returning(|_| factories::two_lablab_records());
    source
        .expect_fetch()
        .withf(|endpoint| *endpoint == Endpoint::DevpostHackathons)
        .times(1)
        .returning(|_| factories::three_devpost_records());

    let hackathons = loader_for(source).load_hackathons().await;
    assert_eq!(hackathons.len(), 5);
}

#[tokio::test]
async fn unavailable_feed_degrades_to_empty() {
    let source = mock_source(HashMap::from([(
        Endpoint::DevpostHackathons,
        factories::three_devpost_records(),
    )]));
    let loader = loader_for(source);

    assert_eq!(loader.load_hackathons().await.len(), 3);
    assert!(loader.load_internships().await.is_empty());
    assert!(loader.load_competitions().await.is_empty());
}

#[tokio::test]
async fn course_providers_merge_in_configured_order() {
    let source = mock_source(HashMap::from([
        (
            Endpoint::courses("udemy"),
            vec![RawRecordFactory::course("Rust Bootcamp").build()],
        ),
        (
            Endpoint::courses("coursera"),
            vec![
                RawRecordFactory::course("Machine Learning")
                    .set("provider", "Stanford University")
                    .build(),
                RawRecordFactory::course("Cloud Basics").build(),
            ],
        ),
    ]));

    let courses = loader_for(source).load_courses().await;
    let summary: Vec<(&str, &str, &CourseSource)> = courses
        .iter()
        .map(|c| (c.title.as_str(), c.provider.as_str(), &c.source))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Machine Learning", "Stanford University", &CourseSource::Coursera),
            ("Cloud Basics", "Coursera", &CourseSource::Coursera),
            ("Rust Bootcamp", "Udemy", &CourseSource::Udemy),
        ]
    );
}

#[tokio::test]
async fn second_mount_does_not_fetch_again() {
    let mut source = MockSource::new();
    source.expect_name().return_const("mock".to_string());
    source
        .expect_fetch()
        .times(1)
        .returning(|_| vec![json!({"title": "Cup"})]);

    let loader = loader_for(source);
    let view = CategoryView::<Competition>::new();

    let handle = view.mount(loader.clone()).expect("first mount loads");
    handle.await.unwrap();
    assert!(view.mount(loader).is_none());
    assert!(view.is_mounted());
    assert_eq!(view.results().await.len(), 1);
}

#[tokio::test]
async fn queries_before_the_load_resolves_apply_to_the_loaded_collection() {
    let source = mock_source(HashMap::from([(
        Endpoint::courses("coursera"),
        vec![
            RawRecordFactory::course("Rust").set("provider", "Mozilla").build(),
            RawRecordFactory::course("Go").set("provider", "Google").build(),
        ],
    )]));
    let view = CategoryView::<Course>::new();
    view.set_filter("provider", "Google").await;

    let handle = view.mount(loader_for(source)).unwrap();
    handle.await.unwrap();

    let results = view.results().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Go");
    assert_eq!(view.stats().await.total, 2);
}

#[tokio::test]
async fn dropped_view_never_receives_the_result() {
    let source = mock_source(HashMap::from([(
        Endpoint::LabLabHackathons,
        factories::two_lablab_records(),
    )]));
    let view = CategoryView::<Hackathon>::new();
    let weak = std::sync::Arc::downgrade(&view);

    let handle = view.mount(loader_for(source)).unwrap();
    drop(view);

    let outcome = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("load task finishes")
        .expect("load task does not panic");
    assert_eq!(outcome, LoadOutcome::Discarded(2));
    assert!(weak.upgrade().is_none());
}

#[tokio::test]
async fn live_view_receives_the_result() {
    let source = mock_source(HashMap::from([(
        Endpoint::LabLabHackathons,
        factories::two_lablab_records(),
    )]));
    let view = CategoryView::<Hackathon>::new();

    let handle = view.mount(loader_for(source)).unwrap();
    let outcome = handle.await.expect("load task does not panic");

    assert_eq!(outcome, LoadOutcome::Applied(2));
    assert_eq!(view.results().await.len(), 2);
}

#[tokio::test]
async fn board_keeps_query_state_per_category() {
    let source = mock_source(HashMap::from([
        (Endpoint::LabLabHackathons, factories::two_lablab_records()),
        (Endpoint::DevpostHackathons, factories::three_devpost_records()),
        (
            Endpoint::Competitions,
            vec![RawRecordFactory::devpost("Data Derby").build()],
        ),
    ]));
    let board = ListingBoard::new(loader_for(source));
    board.mount_all().await;

    board.hackathons.set_filter("source", "lablab").await;
    board.hackathons.set_sort(SortKey::PrizeDesc).await;

    assert_eq!(board.hackathons.results().await.len(), 2);
    assert_eq!(board.competitions.results().await.len(), 1);
    assert!(board.competitions.query().await.filters.is_empty());
    assert_eq!(board.competitions.query().await.sort_key, SortKey::TitleAsc);
    assert!(board.internships.results().await.is_empty());
}

#[tokio::test]
async fn bundled_board_loads_every_category() {
    let board = opportunities_lib::bundled_board();
    board.mount_all().await;

    assert!(!board.hackathons.results().await.is_empty());
    assert!(!board.internships.results().await.is_empty());
    assert!(!board.courses.results().await.is_empty());
    assert!(!board.competitions.results().await.is_empty());
    assert_eq!(board.courses.filter_options("source").await, vec!["coursera", "udemy"]);
}
