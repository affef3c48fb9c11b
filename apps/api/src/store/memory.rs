//! In-memory store for tests and local development (`STORE_BACKEND=memory`).
//! State lives for the lifetime of the process.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::engine::quiz::QuizResult;
use crate::engine::roadmap::RoadmapMilestone;
use crate::models::course::{Course, Enrollment};
use crate::models::profile::{ProfileUpdate, QuizResultRecord, UserProfile};
use crate::store::{CourseCatalog, EnrollmentStore, ProfileStore, QuizResultStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    profiles: RwLock<HashMap<Uuid, UserProfile>>,
    quiz_results: RwLock<Vec<QuizResultRecord>>,
    enrollments: RwLock<HashMap<(Uuid, String), Enrollment>>,
    courses: RwLock<Vec<Course>>,
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get(&self, user_id: Uuid) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn upsert(&self, user_id: Uuid, update: ProfileUpdate) -> Result<(), StoreError> {
        let now = Utc::now();
        let mut profiles = self.profiles.write().await;
        profiles
            .entry(user_id)
            .or_insert_with(|| UserProfile::new(user_id, now))
            .apply(update, now);
        Ok(())
    }

    async fn init_roadmap(
        &self,
        user_id: Uuid,
        roadmap: Vec<RoadmapMilestone>,
    ) -> Result<Vec<RoadmapMilestone>, StoreError> {
        let now = Utc::now();
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .entry(user_id)
            .or_insert_with(|| UserProfile::new(user_id, now));
        if profile.roadmap.is_none() {
            profile.apply(ProfileUpdate::roadmap(roadmap), now);
        }
        Ok(profile.roadmap.clone().unwrap_or_default())
    }
}

#[async_trait]
impl QuizResultStore for MemoryStore {
    async fn append(&self, user_id: Uuid, result: &QuizResult) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.quiz_results.write().await.push(QuizResultRecord {
            id,
            user_id,
            result: result.clone(),
            completed_at: result.completed_at,
        });
        Ok(id)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<QuizResultRecord>, StoreError> {
        // Reverse insertion order first so equal timestamps stay newest-first.
        let mut records: Vec<QuizResultRecord> = self
            .quiz_results
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(records)
    }
}

#[async_trait]
impl EnrollmentStore for MemoryStore {
    async fn set(&self, enrollment: &Enrollment) -> Result<(), StoreError> {
        self.enrollments.write().await.insert(
            (enrollment.user_id, enrollment.course_id.clone()),
            enrollment.clone(),
        );
        Ok(())
    }

    async fn get(&self, user_id: Uuid, course_id: &str) -> Result<Option<Enrollment>, StoreError> {
        Ok(self
            .enrollments
            .read()
            .await
            .get(&(user_id, course_id.to_string()))
            .cloned())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Enrollment>, StoreError> {
        let mut enrollments: Vec<Enrollment> = self
            .enrollments
            .read()
            .await
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        enrollments.sort_by(|a, b| {
            a.enrolled_at
                .cmp(&b.enrolled_at)
                .then_with(|| a.course_id.cmp(&b.course_id))
        });
        Ok(enrollments)
    }
}

#[async_trait]
impl CourseCatalog for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Course>, StoreError> {
        Ok(self.courses.read().await.clone())
    }

    async fn add(&self, course: &Course) -> Result<(), StoreError> {
        let mut courses = self.courses.write().await;
        match courses.iter_mut().find(|c| c.id == course.id) {
            Some(existing) => *existing = course.clone(),
            None => courses.push(course.clone()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::roadmap::{build_track, Track};
    use chrono::Duration;

    #[tokio::test]
    async fn test_upsert_creates_then_merges() {
        let store = MemoryStore::default();
        let user_id = Uuid::new_v4();

        assert!(ProfileStore::get(&store, user_id).await.unwrap().is_none());

        store
            .upsert(user_id, ProfileUpdate::skills(vec!["SQL".to_string()]))
            .await
            .unwrap();
        store
            .upsert(
                user_id,
                ProfileUpdate {
                    display_name: Some("Ada".to_string()),
                    ..ProfileUpdate::default()
                },
            )
            .await
            .unwrap();

        let profile = ProfileStore::get(&store, user_id).await.unwrap().unwrap();
        assert_eq!(profile.skills, vec!["SQL"]);
        assert_eq!(profile.display_name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_init_roadmap_keeps_existing_roadmap() {
        let store = MemoryStore::default();
        let user_id = Uuid::new_v4();

        let mut progressed = build_track(Track::GeneralTech);
        progressed[0].completed = true;
        let stored = store
            .init_roadmap(user_id, progressed.clone())
            .await
            .unwrap();
        assert_eq!(stored, progressed);

        // a late first-generation write must not reset the completed milestone
        let stored = store
            .init_roadmap(user_id, build_track(Track::DataProfessional))
            .await
            .unwrap();
        assert_eq!(stored, progressed);
        let profile = ProfileStore::get(&store, user_id).await.unwrap().unwrap();
        assert_eq!(profile.roadmap, Some(progressed));
    }

    #[tokio::test]
    async fn test_quiz_history_is_newest_first() {
        let store = MemoryStore::default();
        let user_id = Uuid::new_v4();
        let older = QuizResult::new(Default::default(), Utc::now() - Duration::days(1));
        let newer = QuizResult::new(Default::default(), Utc::now());

        store.append(user_id, &older).await.unwrap();
        store.append(user_id, &newer).await.unwrap();
        store.append(Uuid::new_v4(), &newer).await.unwrap();

        let history = QuizResultStore::list_by_user(&store, user_id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].completed_at, newer.completed_at);
    }

    #[tokio::test]
    async fn test_enrollment_set_is_keyed_by_user_and_course() {
        let store = MemoryStore::default();
        let user_id = Uuid::new_v4();
        let now = Utc::now();
        let mut enrollment = Enrollment {
            user_id,
            course_id: "1".to_string(),
            progress: 0,
            completed: false,
            enrolled_at: now,
            last_accessed_at: now,
        };
        store.set(&enrollment).await.unwrap();
        enrollment.progress = 40;
        store.set(&enrollment).await.unwrap();

        let all = EnrollmentStore::list_by_user(&store, user_id).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].progress, 40);
    }
}
