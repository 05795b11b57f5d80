//! Participant handlers
//!
//! Endpoints for enrolling participants in courses.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CourseId, Participant, ParticipantId};
use crate::error::AppError;
use crate::AppState;
use super::extract::{empty_as_none, AppJson, AppPath, AppQuery};

/// Query parameters for listing participants
#[derive(Debug, Deserialize)]
pub struct ListParticipantsQuery {
    /// Only return participants of this course; empty means no filter
    #[serde(default, deserialize_with = "empty_as_none")]
    pub course_id: Option<u64>,
}

/// Participant as returned by the API
#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub id: u64,
    pub name: String,
    pub course_id: u64,
    pub created_at: String,
}

impl From<Participant> for ParticipantResponse {
    fn from(p: Participant) -> Self {
        Self {
            id: p.id.0,
            name: p.name,
            course_id: p.course_id.0,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// Request to enroll a participant
#[derive(Debug, Deserialize)]
pub struct CreateParticipantRequest {
    pub name: String,
    pub course_id: u64,
}

/// Request to update a participant; omitted fields stay unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateParticipantRequest {
    pub name: Option<String>,
    pub course_id: Option<u64>,
}

/// GET /participants?course_id=
pub async fn list_participants(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListParticipantsQuery>,
) -> Result<Json<Vec<ParticipantResponse>>, AppError> {
    let participants = state
        .participant_service
        .list(query.course_id.map(CourseId))
        .await?;

    Ok(Json(
        participants
            .into_iter()
            .map(ParticipantResponse::from)
            .collect(),
    ))
}

/// GET /participants/:id
pub async fn get_participant(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
) -> Result<Json<ParticipantResponse>, AppError> {
    let participant = state.participant_service.get(&ParticipantId(id)).await?;
    Ok(Json(participant.into()))
}

/// POST /participants
///
/// Enroll a participant in an existing course. Responds 201.
pub async fn create_participant(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateParticipantRequest>,
) -> Result<(StatusCode, Json<ParticipantResponse>), AppError> {
    let participant = state
        .participant_service
        .create(&request.name, CourseId(request.course_id))
        .await?;

    Ok((StatusCode::CREATED, Json(participant.into())))
}

/// PUT /participants/:id
pub async fn update_participant(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
    AppJson(request): AppJson<UpdateParticipantRequest>,
) -> Result<Json<ParticipantResponse>, AppError> {
    let participant = state
        .participant_service
        .update(
            &ParticipantId(id),
            request.name.as_deref(),
            request.course_id.map(CourseId),
        )
        .await?;

    Ok(Json(participant.into()))
}

/// DELETE /participants/:id
pub async fn delete_participant(
    State(state): State<AppState>,
    AppPath(id): AppPath<u64>,
) -> Result<StatusCode, AppError> {
    state.participant_service.delete(&ParticipantId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
