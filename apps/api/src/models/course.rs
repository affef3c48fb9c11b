use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::engine::roadmap::Difficulty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub benefit: String,
    pub hours_per_week: i32,
    pub duration: String,
    pub level: Difficulty,
    pub category: String,
    pub skills: Vec<String>,
    pub instructor: String,
    pub rating: f64,
    pub students_enrolled: i32,
    pub price: i32,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
}

/// A user's enrollment in one course. Keyed by (user_id, course_id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    pub user_id: Uuid,
    pub course_id: String,
    /// 0 – 100
    pub progress: i32,
    pub completed: bool,
    pub enrolled_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}
