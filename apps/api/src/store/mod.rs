//! Persistence boundary: the document-store collaborators the rule engine
//! hands its results to.
//!
//! Every call is an independent request with no transaction spanning
//! entities. Concurrent writes to the same profile are last-write-wins.
//!
//! `AppState` carries these as `Arc<dyn Trait>`; the backend is chosen at
//! startup via `STORE_BACKEND`.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::engine::quiz::QuizResult;
use crate::engine::roadmap::RoadmapMilestone;
use crate::models::course::{Course, Enrollment};
use crate::models::profile::{ProfileUpdate, QuizResultRecord, UserProfile};

use self::memory::MemoryStore;
use self::postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt record: {0}")]
    Corrupt(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definitions
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, user_id: Uuid) -> Result<Option<UserProfile>, StoreError>;

    /// Creates the profile if missing; otherwise merges the present fields.
    async fn upsert(&self, user_id: Uuid, update: ProfileUpdate) -> Result<(), StoreError>;

    /// Stores `roadmap` only when the profile has none yet, creating the
    /// profile if missing. Returns the roadmap that is stored afterwards, so a
    /// concurrent writer's roadmap wins over a late first generation.
    async fn init_roadmap(
        &self,
        user_id: Uuid,
        roadmap: Vec<RoadmapMilestone>,
    ) -> Result<Vec<RoadmapMilestone>, StoreError>;
}

#[async_trait]
pub trait QuizResultStore: Send + Sync {
    async fn append(&self, user_id: Uuid, result: &QuizResult) -> Result<Uuid, StoreError>;

    /// Newest first.
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<QuizResultRecord>, StoreError>;
}

#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// Idempotent upsert keyed by (user_id, course_id).
    async fn set(&self, enrollment: &Enrollment) -> Result<(), StoreError>;

    async fn get(&self, user_id: Uuid, course_id: &str) -> Result<Option<Enrollment>, StoreError>;

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Enrollment>, StoreError>;
}

#[async_trait]
pub trait CourseCatalog: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Course>, StoreError>;

    async fn add(&self, course: &Course) -> Result<(), StoreError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Bundle
// ────────────────────────────────────────────────────────────────────────────

/// The four collaborators, constructed once at startup and passed down.
#[derive(Clone)]
pub struct Stores {
    pub profiles: Arc<dyn ProfileStore>,
    pub quiz_results: Arc<dyn QuizResultStore>,
    pub enrollments: Arc<dyn EnrollmentStore>,
    pub courses: Arc<dyn CourseCatalog>,
}

impl Stores {
    pub fn postgres(pool: PgPool) -> Self {
        Self::from_backend(Arc::new(PgStore::new(pool)))
    }

    pub fn memory() -> Self {
        Self::from_backend(Arc::new(MemoryStore::default()))
    }

    /// Uses one backend for all four collaborators.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: ProfileStore + QuizResultStore + EnrollmentStore + CourseCatalog + 'static,
    {
        Self {
            profiles: backend.clone(),
            quiz_results: backend.clone(),
            enrollments: backend.clone(),
            courses: backend,
        }
    }
}
