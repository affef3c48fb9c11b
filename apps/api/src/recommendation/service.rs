//! Stateful side of the facade: reads and writes the profile, quiz history
//! and roadmap through the injected stores.
//!
//! Store failures on the "save for later" path are degraded, not fatal: the
//! computed value is still returned with `saved` / `persisted` set to false.

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::quiz::{validate_answers, QuizAnswers, QuizResult};
use crate::engine::roadmap::{self, RoadmapMilestone, RoadmapProgress};
use crate::engine::taxonomy::normalize_skills;
use crate::errors::AppError;
use crate::models::profile::{ProfileUpdate, QuizResultRecord, UserProfile};
use crate::recommendation::facade::{recommend, recommend_from_scores, Recommendation};
use crate::store::Stores;

#[derive(Debug, Clone, Serialize)]
pub struct QuizSubmission {
    pub result: QuizResult,
    /// Id of the quiz-history entry, when it was written.
    pub result_id: Option<Uuid>,
    pub saved: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoadmapView {
    pub milestones: Vec<RoadmapMilestone>,
    pub progress: RoadmapProgress,
    /// False when a freshly generated roadmap could not be written back.
    pub persisted: bool,
}

impl RoadmapView {
    fn new(milestones: Vec<RoadmapMilestone>, persisted: bool) -> Self {
        let progress = RoadmapProgress::compute(&milestones, Utc::now().date_naive());
        Self {
            milestones,
            progress,
            persisted,
        }
    }
}

#[derive(Clone)]
pub struct RecommendationService {
    stores: Stores,
}

impl RecommendationService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// Pure preview. Skills are normalized and answers validated, nothing is stored.
    pub fn preview(
        &self,
        skills: &[String],
        answers: Option<&QuizAnswers>,
    ) -> Result<Recommendation, AppError> {
        if let Some(answers) = answers {
            validate_answers(answers).map_err(|e| AppError::Validation(e.to_string()))?;
        }
        Ok(recommend(&normalize_skills(skills), answers))
    }

    pub async fn profile(&self, user_id: Uuid) -> Result<UserProfile, AppError> {
        self.stores
            .profiles
            .get(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("profile for user {user_id}")))
    }

    /// Replaces the stored skill list. Other profile fields are untouched.
    pub async fn update_skills(
        &self,
        user_id: Uuid,
        skills: &[String],
    ) -> Result<UserProfile, AppError> {
        let skills = normalize_skills(skills);
        info!("Updating {} skills for user {user_id}", skills.len());
        self.stores
            .profiles
            .upsert(user_id, ProfileUpdate::skills(skills))
            .await?;
        self.profile(user_id).await
    }

    pub async fn submit_quiz(
        &self,
        user_id: Uuid,
        answers: QuizAnswers,
    ) -> Result<QuizSubmission, AppError> {
        validate_answers(&answers).map_err(|e| AppError::Validation(e.to_string()))?;
        let result = QuizResult::new(answers, Utc::now());

        let result_id = match self.stores.quiz_results.append(user_id, &result).await {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("Failed to append quiz result for user {user_id}: {e}");
                None
            }
        };

        let profile_saved = match self
            .stores
            .profiles
            .upsert(user_id, ProfileUpdate::quiz_result(result.clone()))
            .await
        {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to store quiz result on profile of user {user_id}: {e}");
                false
            }
        };

        Ok(QuizSubmission {
            saved: result_id.is_some() && profile_saved,
            result_id,
            result,
        })
    }

    pub async fn quiz_history(&self, user_id: Uuid) -> Result<Vec<QuizResultRecord>, AppError> {
        Ok(self.stores.quiz_results.list_by_user(user_id).await?)
    }

    /// Recommendation for the stored profile. A stored roadmap is returned as
    /// is; otherwise a preview roadmap is generated but not written.
    pub async fn career(&self, user_id: Uuid) -> Result<Recommendation, AppError> {
        let profile = self.stores.profiles.get(user_id).await?;
        let Some(profile) = profile else {
            return Ok(recommend(&[], None));
        };

        let scores = profile.quiz_result.map(|q| q.category_scores);
        let mut recommendation = recommend_from_scores(&profile.skills, scores);
        if let Some(stored) = profile.roadmap {
            recommendation.roadmap = stored;
        }
        Ok(recommendation)
    }

    /// Get-or-generate. Once a roadmap is stored it is never regenerated.
    pub async fn roadmap(&self, user_id: Uuid) -> Result<RoadmapView, AppError> {
        let profile = self.stores.profiles.get(user_id).await?;

        if let Some(stored) = profile.as_ref().and_then(|p| p.roadmap.clone()) {
            return Ok(RoadmapView::new(stored, true));
        }

        let skills = profile.as_ref().map(|p| p.skills.as_slice()).unwrap_or_default();
        let quiz = profile
            .as_ref()
            .and_then(|p| p.quiz_result.as_ref())
            .map(|q| q.category_scores.as_slice());
        let generated = roadmap::generate(skills, quiz);
        info!(
            "Generated roadmap for user {user_id}: {} milestones",
            generated.len()
        );

        match self
            .stores
            .profiles
            .init_roadmap(user_id, generated.clone())
            .await
        {
            Ok(stored) => Ok(RoadmapView::new(stored, true)),
            Err(e) => {
                warn!("Failed to persist generated roadmap for user {user_id}: {e}");
                Ok(RoadmapView::new(generated, false))
            }
        }
    }

    pub async fn complete_milestone(
        &self,
        user_id: Uuid,
        milestone_id: &str,
    ) -> Result<RoadmapView, AppError> {
        let mut milestones = self.stored_roadmap(user_id).await?;
        if roadmap::complete_milestone(&mut milestones, milestone_id, Utc::now())? {
            self.write_roadmap(user_id, &milestones).await?;
            info!("User {user_id} completed milestone {milestone_id}");
        }
        Ok(RoadmapView::new(milestones, true))
    }

    pub async fn complete_checkpoint(
        &self,
        user_id: Uuid,
        milestone_id: &str,
        checkpoint_id: &str,
    ) -> Result<RoadmapView, AppError> {
        let mut milestones = self.stored_roadmap(user_id).await?;
        if roadmap::complete_checkpoint(&mut milestones, milestone_id, checkpoint_id)? {
            self.write_roadmap(user_id, &milestones).await?;
        }
        Ok(RoadmapView::new(milestones, true))
    }

    async fn stored_roadmap(&self, user_id: Uuid) -> Result<Vec<RoadmapMilestone>, AppError> {
        self.stores
            .profiles
            .get(user_id)
            .await?
            .and_then(|p| p.roadmap)
            .ok_or_else(|| AppError::NotFound(format!("roadmap for user {user_id}")))
    }

    async fn write_roadmap(
        &self,
        user_id: Uuid,
        milestones: &[RoadmapMilestone],
    ) -> Result<(), AppError> {
        self.stores
            .profiles
            .upsert(user_id, ProfileUpdate::roadmap(milestones.to_vec()))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::{ProfileStore, QuizResultStore, StoreError};

    fn service() -> RecommendationService {
        RecommendationService::new(Stores::memory())
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    /// Reads succeed against an inner memory store; every write fails.
    struct ReadOnlyStore {
        inner: MemoryStore,
    }

    #[async_trait]
    impl ProfileStore for ReadOnlyStore {
        async fn get(&self, user_id: Uuid) -> Result<Option<UserProfile>, StoreError> {
            ProfileStore::get(&self.inner, user_id).await
        }

        async fn upsert(&self, _user_id: Uuid, _update: ProfileUpdate) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("read-only".to_string()))
        }

        async fn init_roadmap(
            &self,
            _user_id: Uuid,
            _roadmap: Vec<RoadmapMilestone>,
        ) -> Result<Vec<RoadmapMilestone>, StoreError> {
            Err(StoreError::Unavailable("read-only".to_string()))
        }
    }

    #[async_trait]
    impl QuizResultStore for ReadOnlyStore {
        async fn append(&self, _user_id: Uuid, _result: &QuizResult) -> Result<Uuid, StoreError> {
            Err(StoreError::Unavailable("read-only".to_string()))
        }

        async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<QuizResultRecord>, StoreError> {
            QuizResultStore::list_by_user(&self.inner, user_id).await
        }
    }

    fn degraded_service() -> RecommendationService {
        let backend = Arc::new(ReadOnlyStore {
            inner: MemoryStore::default(),
        });
        RecommendationService::new(Stores {
            profiles: backend.clone(),
            quiz_results: backend,
            ..Stores::memory()
        })
    }

    /// Profile reads always miss, as if another request stored the roadmap
    /// right after this one looked.
    struct StaleReadStore {
        inner: MemoryStore,
    }

    #[async_trait]
    impl ProfileStore for StaleReadStore {
        async fn get(&self, _user_id: Uuid) -> Result<Option<UserProfile>, StoreError> {
            Ok(None)
        }

        async fn upsert(&self, user_id: Uuid, update: ProfileUpdate) -> Result<(), StoreError> {
            self.inner.upsert(user_id, update).await
        }

        async fn init_roadmap(
            &self,
            user_id: Uuid,
            roadmap: Vec<RoadmapMilestone>,
        ) -> Result<Vec<RoadmapMilestone>, StoreError> {
            self.inner.init_roadmap(user_id, roadmap).await
        }
    }

    #[tokio::test]
    async fn test_late_generation_does_not_overwrite_progress() {
        let user = Uuid::new_v4();
        let inner = MemoryStore::default();
        let mut progressed = roadmap::build_track(roadmap::Track::WebDeveloper);
        roadmap::complete_milestone(&mut progressed, "1", Utc::now()).unwrap();
        inner
            .upsert(user, ProfileUpdate::roadmap(progressed.clone()))
            .await
            .unwrap();

        let svc = RecommendationService::new(Stores {
            profiles: Arc::new(StaleReadStore { inner }),
            ..Stores::memory()
        });
        let view = svc.roadmap(user).await.unwrap();
        assert!(view.persisted);
        assert_eq!(view.milestones, progressed);
        assert_eq!(view.progress.completed_milestones, 1);
    }

    #[tokio::test]
    async fn test_roadmap_is_generated_once() {
        let svc = service();
        let user = Uuid::new_v4();
        svc.update_skills(user, &skills(&["Figma", "React"]))
            .await
            .unwrap();

        let first = svc.roadmap(user).await.unwrap();
        assert!(first.persisted);
        assert_eq!(first.milestones.len(), 4);

        // changing skills afterwards must not regenerate the stored roadmap
        svc.update_skills(user, &skills(&["Python", "SQL"]))
            .await
            .unwrap();
        let second = svc.roadmap(user).await.unwrap();
        assert_eq!(first.milestones, second.milestones);
    }

    #[tokio::test]
    async fn test_roadmap_for_unknown_user_uses_general_track() {
        let svc = service();
        let view = svc.roadmap(Uuid::new_v4()).await.unwrap();
        assert_eq!(view.milestones.len(), 4);
        assert!(view.milestones.iter().all(|m| !m.completed));
        assert_eq!(view.progress.completed_milestones, 0);
    }

    #[tokio::test]
    async fn test_complete_milestone_persists_and_is_monotonic() {
        let svc = service();
        let user = Uuid::new_v4();
        let view = svc.roadmap(user).await.unwrap();
        let id = view.milestones[0].id.clone();

        let done = svc.complete_milestone(user, &id).await.unwrap();
        assert!(done.milestones[0].completed);
        let stamp = done.milestones[0].completed_at;
        assert!(stamp.is_some());
        assert_eq!(done.progress.completed_milestones, 1);

        let again = svc.complete_milestone(user, &id).await.unwrap();
        assert_eq!(again.milestones[0].completed_at, stamp);

        let reloaded = svc.roadmap(user).await.unwrap();
        assert!(reloaded.milestones[0].completed);
    }

    #[tokio::test]
    async fn test_complete_checkpoint() {
        let svc = service();
        let user = Uuid::new_v4();
        let view = svc.roadmap(user).await.unwrap();
        let milestone = &view.milestones[1];
        let checkpoint = milestone.checkpoints[0].id.clone();

        let done = svc
            .complete_checkpoint(user, &milestone.id, &checkpoint)
            .await
            .unwrap();
        assert!(done.milestones[1].checkpoints[0].completed);
        assert!(!done.milestones[1].completed);
    }

    #[tokio::test]
    async fn test_completion_without_roadmap_is_not_found() {
        let svc = service();
        let err = svc
            .complete_milestone(Uuid::new_v4(), "1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_milestone_is_not_found() {
        let svc = service();
        let user = Uuid::new_v4();
        svc.roadmap(user).await.unwrap();
        let err = svc.complete_milestone(user, "missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_submit_quiz_saves_history_and_profile() {
        let svc = service();
        let user = Uuid::new_v4();
        let answers: QuizAnswers = (0..8).map(|q| (q, 0)).collect();

        let submission = svc.submit_quiz(user, answers).await.unwrap();
        assert!(submission.saved);
        assert!(submission.result_id.is_some());

        let history = svc.quiz_history(user).await.unwrap();
        assert_eq!(history.len(), 1);
        let profile = svc.profile(user).await.unwrap();
        assert_eq!(profile.quiz_result, Some(submission.result));
    }

    #[tokio::test]
    async fn test_submit_quiz_rejects_invalid_answers() {
        let svc = service();
        let answers: QuizAnswers = [(9, 0)].into_iter().collect();
        let err = svc.submit_quiz(Uuid::new_v4(), answers).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_submit_quiz_degrades_when_store_fails() {
        let svc = degraded_service();
        let answers: QuizAnswers = [(0, 1)].into_iter().collect();
        let submission = svc.submit_quiz(Uuid::new_v4(), answers).await.unwrap();
        assert!(!submission.saved);
        assert!(submission.result_id.is_none());
        assert_eq!(submission.result.category_scores.len(), 5);
    }

    #[tokio::test]
    async fn test_roadmap_degrades_when_write_fails() {
        let svc = degraded_service();
        let view = svc.roadmap(Uuid::new_v4()).await.unwrap();
        assert!(!view.persisted);
        assert_eq!(view.milestones.len(), 4);
    }

    #[tokio::test]
    async fn test_update_skills_normalizes_input() {
        let svc = service();
        let user = Uuid::new_v4();
        let profile = svc
            .update_skills(user, &skills(&[" React ", "React", ""]))
            .await
            .unwrap();
        assert_eq!(profile.skills, vec!["React"]);
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        let err = service().profile(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_career_uses_stored_skills_and_quiz() {
        let svc = service();
        let user = Uuid::new_v4();
        svc.update_skills(user, &skills(&["Python", "SQL"]))
            .await
            .unwrap();
        svc.submit_quiz(user, [(0, 0)].into_iter().collect())
            .await
            .unwrap();

        let career = svc.career(user).await.unwrap();
        assert_eq!(career.advice.title, "Data Professional");
        assert!(career.category_scores.is_some());
    }

    #[test]
    fn test_preview_rejects_bad_option() {
        let answers: QuizAnswers = [(0, 7)].into_iter().collect();
        let err = service()
            .preview(&skills(&["Go"]), Some(&answers))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
