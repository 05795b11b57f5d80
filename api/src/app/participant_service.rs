//! Participant service
//!
//! Validates participant input and assigns participants to courses.

use std::sync::Arc;

use crate::app::validation::{optional_text, required_text};
use crate::domain::entities::{
    CourseId, NewParticipant, Participant, ParticipantId, ParticipantUpdate,
};
use crate::domain::ports::ParticipantRepository;
use crate::error::{AppError, DomainError};

/// Service for managing participants
pub struct ParticipantService<PR>
where
    PR: ParticipantRepository,
{
    participants: Arc<PR>,
}

impl<PR> ParticipantService<PR>
where
    PR: ParticipantRepository,
{
    pub fn new(participants: Arc<PR>) -> Self {
        Self { participants }
    }

    /// List participants, optionally only those enrolled in `course_id`
    pub async fn list(&self, course_id: Option<CourseId>) -> Result<Vec<Participant>, AppError> {
        Ok(self.participants.find_all(course_id.as_ref()).await?)
    }

    /// Get a single participant
    pub async fn get(&self, id: &ParticipantId) -> Result<Participant, AppError> {
        self.participants
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Participant {} not found", id)).into())
    }

    /// Enroll a new participant in an existing course
    pub async fn create(&self, name: &str, course_id: CourseId) -> Result<Participant, AppError> {
        let new_participant = NewParticipant {
            name: required_text("name", name)?,
            course_id,
        };

        let participant = self
            .participants
            .create(&new_participant)
            .await
            .map_err(|e| {
                tracing::debug!(course_id = %course_id, "Participant rejected: {}", e);
                e
            })?;

        tracing::info!(
            participant_id = %participant.id,
            course_id = %participant.course_id,
            "Participant created"
        );
        Ok(participant)
    }

    /// Rename a participant and/or move them to another course
    pub async fn update(
        &self,
        id: &ParticipantId,
        name: Option<&str>,
        course_id: Option<CourseId>,
    ) -> Result<Participant, AppError> {
        let update = ParticipantUpdate {
            name: optional_text("name", name)?,
            course_id,
        };
        if update.name.is_none() && update.course_id.is_none() {
            return Err(AppError::BadRequest(
                "At least one of name or course_id must be provided".to_string(),
            ));
        }

        let participant = self
            .participants
            .update(id, &update)
            .await
            .map_err(|e| {
                tracing::debug!(participant_id = %id, "Participant update rejected: {}", e);
                e
            })?;

        tracing::info!(
            participant_id = %participant.id,
            course_id = %participant.course_id,
            "Participant updated"
        );
        Ok(participant)
    }

    /// Remove a participant
    pub async fn delete(&self, id: &ParticipantId) -> Result<(), AppError> {
        self.participants.delete(id).await?;
        tracing::info!(participant_id = %id, "Participant deleted");
        Ok(())
    }
}
