//! Course handlers
//!
//! Endpoints for course management.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Course, CourseId};
use crate::error::AppError;
use crate::AppState;
use super::extract::{AppJson, AppPath};

/// Course as returned by the API
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: u64,
    pub name: String,
    pub instructor: String,
    pub created_at: String,
}

impl From<Course> for CourseResponse {
    fn from(c: Course) -> Self {
        Self {
            id: c.id.0,
            name: c.name,
            instructor: c.instructor,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

/// Request to create a new course
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub instructor: String,
}

/// Request to update a course; omitted fields stay unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub instructor: Option<String>,
}

/// GET /courses
///
/// List all courses in creation order.
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let courses = state.course_service.list().await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// GET /courses/:id
pub async fn get_course(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = state.course_service.get(&CourseId(id)).await?;
    Ok(Json(course.into()))
}

/// POST /courses
///
/// Create a new course. Responds 201 with the stored course.
pub async fn create_course(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    let course = state
        .course_service
        .create(&request.name, &request.instructor)
        .await?;

    Ok((StatusCode::CREATED, Json(course.into())))
}

/// PUT /courses/:id
pub async fn update_course(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
    AppJson(request): AppJson<UpdateCourseRequest>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = state
        .course_service
        .update(
            &CourseId(id),
            request.name.as_deref(),
            request.instructor.as_deref(),
        )
        .await?;

    Ok(Json(course.into()))
}

/// DELETE /courses/:id
///
/// Responds 204 on success. A course that still has participants is either
/// refused (409) or removed together with them, depending on configuration.
pub async fn delete_course(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
) -> Result<StatusCode, AppError> {
    state.course_service.delete(&CourseId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
