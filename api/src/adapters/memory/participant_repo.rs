//! In-memory adapter for ParticipantRepository

use async_trait::async_trait;
use chrono::Utc;

use super::store::MemoryStore;
use crate::domain::entities::{
    CourseId, NewParticipant, Participant, ParticipantId, ParticipantUpdate,
};
use crate::domain::ports::ParticipantRepository;
use crate::error::DomainError;

/// In-memory implementation of ParticipantRepository
pub struct MemoryParticipantRepository {
    store: MemoryStore,
}

impl MemoryParticipantRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

fn duplicate_enrollment(name: &str, course_id: CourseId) -> DomainError {
    DomainError::AlreadyExists(format!(
        "Participant '{}' is already enrolled in course {}",
        name, course_id
    ))
}

fn course_not_found(course_id: CourseId) -> DomainError {
    DomainError::NotFound(format!("Course {} not found", course_id))
}

#[async_trait]
impl ParticipantRepository for MemoryParticipantRepository {
    async fn find_all(
        &self,
        course_id: Option<&CourseId>,
    ) -> Result<Vec<Participant>, DomainError> {
        let tables = self.store.read().await;
        Ok(tables
            .participants
            .values()
            .filter(|p| course_id.map_or(true, |id| p.course_id == *id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &ParticipantId) -> Result<Option<Participant>, DomainError> {
        let tables = self.store.read().await;
        Ok(tables.participants.get(id).cloned())
    }

    async fn create(&self, participant: &NewParticipant) -> Result<Participant, DomainError> {
        let mut tables = self.store.write().await;

        if !tables.courses.contains_key(&participant.course_id) {
            return Err(course_not_found(participant.course_id));
        }
        if tables.enrollment_taken(&participant.name, participant.course_id, None) {
            return Err(duplicate_enrollment(
                &participant.name,
                participant.course_id,
            ));
        }

        let participant = Participant {
            id: tables.next_participant_id()?,
            name: participant.name.clone(),
            course_id: participant.course_id,
            created_at: Utc::now(),
        };
        tables
            .participants
            .insert(participant.id, participant.clone());

        Ok(participant)
    }

    async fn update(
        &self,
        id: &ParticipantId,
        update: &ParticipantUpdate,
    ) -> Result<Participant, DomainError> {
        let mut tables = self.store.write().await;

        let mut updated = tables
            .participants
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("Participant {} not found", id)))?;
        updated.apply(update);

        if !tables.courses.contains_key(&updated.course_id) {
            return Err(course_not_found(updated.course_id));
        }
        if tables.enrollment_taken(&updated.name, updated.course_id, Some(*id)) {
            return Err(duplicate_enrollment(&updated.name, updated.course_id));
        }

        tables.participants.insert(*id, updated.clone());

        Ok(updated)
    }

    async fn delete(&self, id: &ParticipantId) -> Result<(), DomainError> {
        let mut tables = self.store.write().await;
        tables
            .participants
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Participant {} not found", id)))
    }
}
