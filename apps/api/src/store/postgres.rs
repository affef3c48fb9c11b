//! PostgreSQL-backed store. Roadmaps and quiz results are JSONB documents.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::{debug, info};
use uuid::Uuid;

use crate::engine::quiz::QuizResult;
use crate::engine::roadmap::{Difficulty, RoadmapMilestone};
use crate::models::course::{Course, Enrollment};
use crate::models::profile::{ProfileUpdate, QuizResultRecord, UserProfile};
use crate::store::{CourseCatalog, EnrollmentStore, ProfileStore, QuizResultStore, StoreError};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Row types
// ────────────────────────────────────────────────────────────────────────────

#[derive(FromRow)]
struct ProfileRow {
    user_id: Uuid,
    email: Option<String>,
    display_name: Option<String>,
    skills: Vec<String>,
    quiz_result: Option<Json<QuizResult>>,
    roadmap: Option<Json<Vec<RoadmapMilestone>>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        UserProfile {
            user_id: row.user_id,
            email: row.email,
            display_name: row.display_name,
            skills: row.skills,
            quiz_result: row.quiz_result.map(|j| j.0),
            roadmap: row.roadmap.map(|j| j.0),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(FromRow)]
struct QuizResultRow {
    id: Uuid,
    user_id: Uuid,
    result: Json<QuizResult>,
    completed_at: DateTime<Utc>,
}

impl From<QuizResultRow> for QuizResultRecord {
    fn from(row: QuizResultRow) -> Self {
        QuizResultRecord {
            id: row.id,
            user_id: row.user_id,
            result: row.result.0,
            completed_at: row.completed_at,
        }
    }
}

#[derive(FromRow)]
struct CourseRow {
    id: String,
    title: String,
    description: String,
    benefit: String,
    hours_per_week: i32,
    duration: String,
    level: String,
    category: String,
    skills: Vec<String>,
    instructor: String,
    rating: f64,
    students_enrolled: i32,
    price: i32,
    image_url: Option<String>,
    tags: Vec<String>,
}

impl TryFrom<CourseRow> for Course {
    type Error = StoreError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let level = row
            .level
            .parse::<Difficulty>()
            .map_err(|e| StoreError::Corrupt(format!("course {}: {e}", row.id)))?;
        Ok(Course {
            id: row.id,
            title: row.title,
            description: row.description,
            benefit: row.benefit,
            hours_per_week: row.hours_per_week,
            duration: row.duration,
            level,
            category: row.category,
            skills: row.skills,
            instructor: row.instructor,
            rating: row.rating,
            students_enrolled: row.students_enrolled,
            price: row.price,
            image_url: row.image_url,
            tags: row.tags,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait implementations
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ProfileStore for PgStore {
    async fn get(&self, user_id: Uuid) -> Result<Option<UserProfile>, StoreError> {
        let row: Option<ProfileRow> =
            sqlx::query_as("SELECT * FROM user_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(UserProfile::from))
    }

    async fn upsert(&self, user_id: Uuid, update: ProfileUpdate) -> Result<(), StoreError> {
        let ProfileUpdate {
            email,
            display_name,
            skills,
            quiz_result,
            roadmap,
        } = update;

        // COALESCE keeps the stored value for every field the update leaves out.
        sqlx::query(
            r#"
            INSERT INTO user_profiles
                (user_id, email, display_name, skills, quiz_result, roadmap)
            VALUES ($1, $2, $3, COALESCE($4, '{}'::text[]), $5, $6)
            ON CONFLICT (user_id) DO UPDATE SET
                email        = COALESCE($2, user_profiles.email),
                display_name = COALESCE($3, user_profiles.display_name),
                skills       = COALESCE($4, user_profiles.skills),
                quiz_result  = COALESCE($5, user_profiles.quiz_result),
                roadmap      = COALESCE($6, user_profiles.roadmap),
                updated_at   = NOW()
            "#,
        )
        .bind(user_id)
        .bind(email)
        .bind(display_name)
        .bind(skills)
        .bind(quiz_result.map(Json))
        .bind(roadmap.map(Json))
        .execute(&self.pool)
        .await?;

        debug!("Upserted profile for user {user_id}");
        Ok(())
    }

    async fn init_roadmap(
        &self,
        user_id: Uuid,
        roadmap: Vec<RoadmapMilestone>,
    ) -> Result<Vec<RoadmapMilestone>, StoreError> {
        // Single statement so a roadmap written in between is never replaced.
        let (stored,): (Json<Vec<RoadmapMilestone>>,) = sqlx::query_as(
            r#"
            INSERT INTO user_profiles (user_id, roadmap)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET
                roadmap    = COALESCE(user_profiles.roadmap, EXCLUDED.roadmap),
                updated_at = CASE
                    WHEN user_profiles.roadmap IS NULL THEN NOW()
                    ELSE user_profiles.updated_at
                END
            RETURNING roadmap
            "#,
        )
        .bind(user_id)
        .bind(Json(roadmap))
        .fetch_one(&self.pool)
        .await?;

        Ok(stored.0)
    }
}

#[async_trait]
impl QuizResultStore for PgStore {
    async fn append(&self, user_id: Uuid, result: &QuizResult) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO quiz_results (id, user_id, result, completed_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(user_id)
        .bind(Json(result))
        .bind(result.completed_at)
        .execute(&self.pool)
        .await?;

        info!("Stored quiz result {id} for user {user_id}");
        Ok(id)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<QuizResultRecord>, StoreError> {
        let rows: Vec<QuizResultRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, result, completed_at
            FROM quiz_results
            WHERE user_id = $1
            ORDER BY completed_at DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(QuizResultRecord::from).collect())
    }
}

#[async_trait]
impl EnrollmentStore for PgStore {
    async fn set(&self, enrollment: &Enrollment) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO course_enrollments
                (user_id, course_id, progress, completed, enrolled_at, last_accessed_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, course_id) DO UPDATE SET
                progress         = EXCLUDED.progress,
                completed        = EXCLUDED.completed,
                enrolled_at      = EXCLUDED.enrolled_at,
                last_accessed_at = EXCLUDED.last_accessed_at
            "#,
        )
        .bind(enrollment.user_id)
        .bind(&enrollment.course_id)
        .bind(enrollment.progress)
        .bind(enrollment.completed)
        .bind(enrollment.enrolled_at)
        .bind(enrollment.last_accessed_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, user_id: Uuid, course_id: &str) -> Result<Option<Enrollment>, StoreError> {
        Ok(sqlx::query_as::<_, Enrollment>(
            "SELECT * FROM course_enrollments WHERE user_id = $1 AND course_id = $2",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Enrollment>, StoreError> {
        Ok(sqlx::query_as::<_, Enrollment>(
            "SELECT * FROM course_enrollments WHERE user_id = $1 ORDER BY enrolled_at ASC, course_id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }
}

#[async_trait]
impl CourseCatalog for PgStore {
    async fn list_all(&self) -> Result<Vec<Course>, StoreError> {
        let rows: Vec<CourseRow> = sqlx::query_as(
            r#"
            SELECT id, title, description, benefit, hours_per_week, duration, level,
                   category, skills, instructor, rating, students_enrolled, price,
                   image_url, tags
            FROM courses
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Course::try_from).collect()
    }

    async fn add(&self, course: &Course) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO courses
                (id, title, description, benefit, hours_per_week, duration, level,
                 category, skills, instructor, rating, students_enrolled, price,
                 image_url, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                benefit = EXCLUDED.benefit,
                hours_per_week = EXCLUDED.hours_per_week,
                duration = EXCLUDED.duration,
                level = EXCLUDED.level,
                category = EXCLUDED.category,
                skills = EXCLUDED.skills,
                instructor = EXCLUDED.instructor,
                rating = EXCLUDED.rating,
                students_enrolled = EXCLUDED.students_enrolled,
                price = EXCLUDED.price,
                image_url = EXCLUDED.image_url,
                tags = EXCLUDED.tags,
                updated_at = NOW()
            "#,
        )
        .bind(&course.id)
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.benefit)
        .bind(course.hours_per_week)
        .bind(&course.duration)
        .bind(course.level.as_str())
        .bind(&course.category)
        .bind(&course.skills)
        .bind(&course.instructor)
        .bind(course.rating)
        .bind(course.students_enrolled)
        .bind(course.price)
        .bind(&course.image_url)
        .bind(&course.tags)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
