use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::controller::QueryController;
use crate::modules::listing::domain::entities::{Competition, Course, Hackathon, Internship};
use crate::modules::provider::ListingLoader;
use crate::modules::query::domain::{ListingStats, Query, Queryable, SortKey};

/// A category whose listings the loader knows how to produce
#[async_trait]
pub trait LoadCategory: Queryable {
    async fn load(loader: &ListingLoader) -> Vec<Self>;
}

#[async_trait]
impl LoadCategory for Hackathon {
    async fn load(loader: &ListingLoader) -> Vec<Self> {
        loader.load_hackathons().await
    }
}

#[async_trait]
impl LoadCategory for Internship {
    async fn load(loader: &ListingLoader) -> Vec<Self> {
        loader.load_internships().await
    }
}

#[async_trait]
impl LoadCategory for Course {
    async fn load(loader: &ListingLoader) -> Vec<Self> {
        loader.load_courses().await
    }
}

#[async_trait]
impl LoadCategory for Competition {
    async fn load(loader: &ListingLoader) -> Vec<Self> {
        loader.load_competitions().await
    }
}

/// What happened to a finished load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Listings installed into the view
    Applied(usize),
    /// The view was gone by the time the fetch resolved
    Discarded(usize),
}

/// One category's view session: a controller plus a single load.
///
/// The load task only holds a weak reference, so a view dropped before its
/// fetch resolves never receives the result.
pub struct CategoryView<L: LoadCategory> {
    controller: RwLock<QueryController<L>>,
    mounted: AtomicBool,
}

impl<L: LoadCategory> CategoryView<L> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            controller: RwLock::new(QueryController::empty()),
            mounted: AtomicBool::new(false),
        })
    }

    /// Start the category's only load. Returns `None` when already mounted.
    pub fn mount(self: &Arc<Self>, loader: ListingLoader) -> Option<JoinHandle<LoadOutcome>> {
        if self
            .mounted
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::debug!("{} view already mounted", L::CATEGORY);
            return None;
        }

        let view = Arc::downgrade(self);
        Some(tokio::spawn(async move {
            let listings = L::load(&loader).await;
            let count = listings.len();

            match view.upgrade() {
                Some(view) => {
                    log::info!("{}: {} listings loaded", L::CATEGORY, count);
                    view.controller
                        .write()
                        .await
                        .replace_collection(Arc::new(listings));
                    LoadOutcome::Applied(count)
                }
                None => {
                    log::debug!(
                        "{} view dropped before load finished, discarding {} listings",
                        L::CATEGORY,
                        count
                    );
                    LoadOutcome::Discarded(count)
                }
            }
        }))
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    pub async fn set_filter(&self, key: &str, value: &str) {
        self.controller.write().await.set_filter(key, value);
    }

    pub async fn set_sort(&self, sort_key: SortKey) {
        self.controller.write().await.set_sort(sort_key);
    }

    pub async fn clear(&self) {
        self.controller.write().await.clear();
    }

    pub async fn results(&self) -> Vec<L> {
        self.controller.read().await.results().to_vec()
    }

    pub async fn query(&self) -> Query {
        self.controller.read().await.query().clone()
    }

    pub async fn filter_options(&self, key: &str) -> Vec<String> {
        self.controller.read().await.filter_options(key)
    }

    pub async fn stats(&self) -> ListingStats {
        self.controller.read().await.stats()
    }
}

/// The four category views, each with its own query state
pub struct ListingBoard {
    loader: ListingLoader,
    pub hackathons: Arc<CategoryView<Hackathon>>,
    pub internships: Arc<CategoryView<Internship>>,
    pub courses: Arc<CategoryView<Course>>,
    pub competitions: Arc<CategoryView<Competition>>,
}

impl ListingBoard {
    pub fn new(loader: ListingLoader) -> Self {
        Self {
            loader,
            hackathons: CategoryView::new(),
            internships: CategoryView::new(),
            courses: CategoryView::new(),
            competitions: CategoryView::new(),
        }
    }

    /// Mount every view and wait for the loads to settle
    pub async fn mount_all(&self) {
        let handles = [
            self.hackathons.mount(self.loader.clone()),
            self.internships.mount(self.loader.clone()),
            self.courses.mount(self.loader.clone()),
            self.competitions.mount(self.loader.clone()),
        ];

        for handle in handles.into_iter().flatten() {
            if let Err(e) = handle.await {
                log::error!("Listing load task failed: {}", e);
            }
        }
    }
}
