pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::courses::handlers as courses;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Skills and recommendations
        .route(
            "/api/v1/skills/suggested",
            get(recommendation::handle_suggested_skills),
        )
        .route(
            "/api/v1/recommendations",
            post(recommendation::handle_preview),
        )
        // Quiz
        .route(
            "/api/v1/quiz/questions",
            get(recommendation::handle_quiz_questions),
        )
        .route("/api/v1/quiz", post(recommendation::handle_submit_quiz))
        .route(
            "/api/v1/quiz/results",
            get(recommendation::handle_quiz_history),
        )
        // Profile, career and roadmap
        .route("/api/v1/profile", get(recommendation::handle_get_profile))
        .route(
            "/api/v1/profile/skills",
            put(recommendation::handle_update_skills),
        )
        .route("/api/v1/career", get(recommendation::handle_career))
        .route("/api/v1/roadmap", get(recommendation::handle_get_roadmap))
        .route(
            "/api/v1/roadmap/milestones/:id/complete",
            post(recommendation::handle_complete_milestone),
        )
        .route(
            "/api/v1/roadmap/milestones/:id/checkpoints/:cid/complete",
            post(recommendation::handle_complete_checkpoint),
        )
        // Courses
        .route("/api/v1/courses", get(courses::handle_list_courses))
        .route(
            "/api/v1/courses/categories",
            get(courses::handle_categories),
        )
        .route(
            "/api/v1/courses/recommended",
            get(courses::handle_recommended_courses),
        )
        .route("/api/v1/courses/:id/enroll", post(courses::handle_enroll))
        .route(
            "/api/v1/courses/:id/progress",
            patch(courses::handle_update_progress),
        )
        .route(
            "/api/v1/enrollments",
            get(courses::handle_list_enrollments),
        )
        .with_state(state)
}
