//! Mock implementations of port traits
//!
//! Repositories that fail every call, for exercising internal error paths.

use async_trait::async_trait;

use crate::domain::entities::{
    Course, CourseId, CourseUpdate, DeletePolicy, NewCourse, NewParticipant, Participant,
    ParticipantId, ParticipantUpdate,
};
use crate::domain::ports::{CourseRepository, ParticipantRepository};
use crate::error::DomainError;

fn unavailable() -> DomainError {
    DomainError::Internal("store unavailable".to_string())
}

// ============================================================================
// Failing Course Repository
// ============================================================================

pub struct FailingCourseRepository;

#[async_trait]
impl CourseRepository for FailingCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &CourseId) -> Result<Option<Course>, DomainError> {
        Err(unavailable())
    }

    async fn create(&self, _course: &NewCourse) -> Result<Course, DomainError> {
        Err(unavailable())
    }

    async fn update(&self, _id: &CourseId, _update: &CourseUpdate) -> Result<Course, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: &CourseId, _policy: DeletePolicy) -> Result<usize, DomainError> {
        Err(unavailable())
    }
}

// ============================================================================
// Failing Participant Repository
// ============================================================================

pub struct FailingParticipantRepository;

#[async_trait]
impl ParticipantRepository for FailingParticipantRepository {
    async fn find_all(
        &self,
        _course_id: Option<&CourseId>,
    ) -> Result<Vec<Participant>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &ParticipantId) -> Result<Option<Participant>, DomainError> {
        Err(unavailable())
    }

    async fn create(&self, _participant: &NewParticipant) -> Result<Participant, DomainError> {
        Err(unavailable())
    }

    async fn update(
        &self,
        _id: &ParticipantId,
        _update: &ParticipantUpdate,
    ) -> Result<Participant, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: &ParticipantId) -> Result<(), DomainError> {
        Err(unavailable())
    }
}
