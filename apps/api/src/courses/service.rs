//! Catalog loading and enrollment progress over the injected stores.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::courses::catalog::sample_courses;
use crate::courses::search::{categories, filter_courses, recommend_courses, CourseQuery};
use crate::errors::AppError;
use crate::models::course::{Course, Enrollment};
use crate::store::Stores;

#[derive(Clone)]
pub struct CourseService {
    stores: Stores,
    seed_courses: bool,
}

impl CourseService {
    pub fn new(stores: Stores, seed_courses: bool) -> Self {
        Self {
            stores,
            seed_courses,
        }
    }

    /// Full catalog. An empty catalog is seeded with the sample courses when
    /// seeding is enabled; a failed read falls back to the samples.
    pub async fn catalog(&self) -> Vec<Course> {
        match self.stores.courses.list_all().await {
            Ok(courses) if !courses.is_empty() => courses,
            Ok(_) => {
                let samples = sample_courses();
                if self.seed_courses {
                    self.seed(&samples).await;
                }
                samples
            }
            Err(e) => {
                warn!("Failed to load course catalog, using sample courses: {e}");
                sample_courses()
            }
        }
    }

    async fn seed(&self, courses: &[Course]) {
        info!("Seeding course catalog with {} sample courses", courses.len());
        for course in courses {
            if let Err(e) = self.stores.courses.add(course).await {
                warn!("Failed to seed course {}: {e}", course.id);
                return;
            }
        }
    }

    pub async fn search(&self, query: &CourseQuery) -> Result<Vec<Course>, AppError> {
        filter_courses(self.catalog().await, query).map_err(AppError::Validation)
    }

    pub async fn categories(&self) -> Vec<String> {
        categories(&self.catalog().await)
    }

    /// Top courses for the stored skills. A user without a profile gets none.
    pub async fn recommended(&self, user_id: Uuid) -> Result<Vec<Course>, AppError> {
        let skills = self
            .stores
            .profiles
            .get(user_id)
            .await?
            .map(|p| p.skills)
            .unwrap_or_default();
        Ok(recommend_courses(self.catalog().await, &skills))
    }

    /// (Re-)enrolls the user, resetting progress to 0.
    pub async fn enroll(&self, user_id: Uuid, course_id: &str) -> Result<Enrollment, AppError> {
        if !self.catalog().await.iter().any(|c| c.id == course_id) {
            return Err(AppError::NotFound(format!("course {course_id}")));
        }

        let now = Utc::now();
        let enrollment = Enrollment {
            user_id,
            course_id: course_id.to_string(),
            progress: 0,
            completed: false,
            enrolled_at: now,
            last_accessed_at: now,
        };
        self.stores.enrollments.set(&enrollment).await?;
        info!("User {user_id} enrolled in course {course_id}");
        Ok(enrollment)
    }

    pub async fn update_progress(
        &self,
        user_id: Uuid,
        course_id: &str,
        progress: i32,
    ) -> Result<Enrollment, AppError> {
        if !(0..=100).contains(&progress) {
            return Err(AppError::Validation(format!(
                "progress must be between 0 and 100, got {progress}"
            )));
        }

        let mut enrollment = self
            .stores
            .enrollments
            .get(user_id, course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("enrollment of user {user_id} in course {course_id}"))
            })?;

        enrollment.progress = progress;
        enrollment.completed = progress >= 100;
        enrollment.last_accessed_at = Utc::now();
        self.stores.enrollments.set(&enrollment).await?;
        Ok(enrollment)
    }

    pub async fn enrollments(&self, user_id: Uuid) -> Result<Vec<Enrollment>, AppError> {
        Ok(self.stores.enrollments.list_by_user(user_id).await?)
    }
}
