//! Axum route handlers for the course catalog and enrollments.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::courses::search::CourseQuery;
use crate::errors::AppError;
use crate::models::course::{Course, Enrollment};
use crate::recommendation::handlers::{UserIdBody, UserIdQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub user_id: Uuid,
    pub progress: i32,
}

#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub total: usize,
    pub courses: Vec<Course>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EnrollmentListResponse {
    pub enrollments: Vec<Enrollment>,
}

/// GET /api/v1/courses?q=&category=&level=
pub async fn handle_list_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseQuery>,
) -> Result<Json<CourseListResponse>, AppError> {
    let courses = state.courses.search(&query).await?;
    Ok(Json(CourseListResponse {
        total: courses.len(),
        courses,
    }))
}

/// GET /api/v1/courses/categories
pub async fn handle_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.courses.categories().await,
    })
}

/// GET /api/v1/courses/recommended?user_id=
pub async fn handle_recommended_courses(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CourseListResponse>, AppError> {
    let courses = state.courses.recommended(params.user_id).await?;
    Ok(Json(CourseListResponse {
        total: courses.len(),
        courses,
    }))
}

/// POST /api/v1/courses/:id/enroll
pub async fn handle_enroll(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    payload: Result<Json<UserIdBody>, JsonRejection>,
) -> Result<Json<Enrollment>, AppError> {
    let Json(body) = payload?;
    Ok(Json(state.courses.enroll(body.user_id, &course_id).await?))
}

/// PATCH /api/v1/courses/:id/progress
pub async fn handle_update_progress(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    payload: Result<Json<ProgressRequest>, JsonRejection>,
) -> Result<Json<Enrollment>, AppError> {
    let Json(body) = payload?;
    let enrollment = state
        .courses
        .update_progress(body.user_id, &course_id, body.progress)
        .await?;
    Ok(Json(enrollment))
}

/// GET /api/v1/enrollments?user_id=
pub async fn handle_list_enrollments(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<EnrollmentListResponse>, AppError> {
    let enrollments = state.courses.enrollments(params.user_id).await?;
    Ok(Json(EnrollmentListResponse { enrollments }))
}
