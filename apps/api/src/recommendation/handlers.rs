//! Axum route handlers for skills, quiz, profile, career and roadmap.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::quiz::{Category, Question, QuizAnswers, QUESTIONS};
use crate::engine::taxonomy::SUGGESTED_SKILLS;
use crate::errors::AppError;
use crate::models::profile::{QuizResultRecord, UserProfile};
use crate::recommendation::facade::Recommendation;
use crate::recommendation::service::{QuizSubmission, RoadmapView};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UserIdBody {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub answers: Option<QuizAnswers>,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub user_id: Uuid,
    pub answers: QuizAnswers,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSkillsRequest {
    pub user_id: Uuid,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestedSkillsResponse {
    pub skills: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub category: Category,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub total: usize,
    pub questions: &'static [Question],
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Serialize)]
pub struct QuizHistoryResponse {
    pub results: Vec<QuizResultRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills/suggested
pub async fn handle_suggested_skills() -> Json<SuggestedSkillsResponse> {
    Json(SuggestedSkillsResponse {
        skills: SUGGESTED_SKILLS,
    })
}

/// POST /api/v1/recommendations
///
/// Stateless preview: scores, roles, roadmap and advice for the posted input.
pub async fn handle_preview(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<Json<Recommendation>, AppError> {
    let Json(request) = payload?;
    let recommendation = state
        .recommendations
        .preview(&request.skills, request.answers.as_ref())?;
    Ok(Json(recommendation))
}

/// GET /api/v1/quiz/questions
pub async fn handle_quiz_questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        total: QUESTIONS.len(),
        questions: &QUESTIONS,
        categories: Category::ALL
            .iter()
            .map(|&category| CategoryInfo {
                category,
                label: category.label(),
            })
            .collect(),
    })
}

/// POST /api/v1/quiz
pub async fn handle_submit_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizSubmission>, AppError> {
    let Json(request) = payload?;
    let submission = state
        .recommendations
        .submit_quiz(request.user_id, request.answers)
        .await?;
    Ok(Json(submission))
}

/// GET /api/v1/quiz/results?user_id=
pub async fn handle_quiz_history(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<QuizHistoryResponse>, AppError> {
    let results = state.recommendations.quiz_history(params.user_id).await?;
    Ok(Json(QuizHistoryResponse { results }))
}

/// GET /api/v1/profile?user_id=
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<UserProfile>, AppError> {
    Ok(Json(state.recommendations.profile(params.user_id).await?))
}

/// PUT /api/v1/profile/skills
pub async fn handle_update_skills(
    State(state): State<AppState>,
    payload: Result<Json<UpdateSkillsRequest>, JsonRejection>,
) -> Result<Json<UserProfile>, AppError> {
    let Json(request) = payload?;
    let profile = state
        .recommendations
        .update_skills(request.user_id, &request.skills)
        .await?;
    Ok(Json(profile))
}

/// GET /api/v1/career?user_id=
pub async fn handle_career(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Recommendation>, AppError> {
    Ok(Json(state.recommendations.career(params.user_id).await?))
}

/// GET /api/v1/roadmap?user_id=
///
/// Returns the stored roadmap, generating and storing one on first request.
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RoadmapView>, AppError> {
    Ok(Json(state.recommendations.roadmap(params.user_id).await?))
}

/// POST /api/v1/roadmap/milestones/:id/complete
pub async fn handle_complete_milestone(
    State(state): State<AppState>,
    Path(milestone_id): Path<String>,
    payload: Result<Json<UserIdBody>, JsonRejection>,
) -> Result<Json<RoadmapView>, AppError> {
    let Json(body) = payload?;
    let view = state
        .recommendations
        .complete_milestone(body.user_id, &milestone_id)
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/roadmap/milestones/:id/checkpoints/:cid/complete
pub async fn handle_complete_checkpoint(
    State(state): State<AppState>,
    Path((milestone_id, checkpoint_id)): Path<(String, String)>,
    payload: Result<Json<UserIdBody>, JsonRejection>,
) -> Result<Json<RoadmapView>, AppError> {
    let Json(body) = payload?;
    let view = state
        .recommendations
        .complete_checkpoint(body.user_id, &milestone_id, &checkpoint_id)
        .await?;
    Ok(Json(view))
}
