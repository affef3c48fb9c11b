use crate::config::Config;
use crate::courses::service::CourseService;
use crate::recommendation::service::RecommendationService;
use crate::store::Stores;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Built once in `main` from explicitly constructed store handles; nothing here
/// reaches for a global client.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub recommendations: RecommendationService,
    pub courses: CourseService,
}

impl AppState {
    pub fn new(config: Config, stores: Stores) -> Self {
        Self {
            recommendations: RecommendationService::new(stores.clone()),
            courses: CourseService::new(stores, config.seed_courses),
            config,
        }
    }
}
