//! Repository port traits
//!
//! These traits define the interface for data storage.
//! Implementations are provided by adapters (e.g., the in-memory store).
//!
//! Implementations enforce the storage-level invariants themselves, the way
//! unique and foreign key constraints would in a database:
//! - course names are unique
//! - a (participant name, course) pair exists at most once
//! - a participant always references an existing course

use async_trait::async_trait;

use crate::domain::entities::{
    Course, CourseId, CourseUpdate, DeletePolicy, NewCourse, NewParticipant, Participant,
    ParticipantId, ParticipantUpdate,
};
use crate::error::DomainError;

/// Repository for Course entities
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// List all courses in creation order
    async fn find_all(&self) -> Result<Vec<Course>, DomainError>;

    /// Find a course by ID
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError>;

    /// Create a new course with a freshly generated ID
    async fn create(&self, course: &NewCourse) -> Result<Course, DomainError>;

    /// Update name and/or instructor of a course
    async fn update(&self, id: &CourseId, update: &CourseUpdate) -> Result<Course, DomainError>;

    /// Delete a course, applying `policy` to its participants.
    ///
    /// Returns the number of participants removed along with the course.
    async fn delete(&self, id: &CourseId, policy: DeletePolicy) -> Result<usize, DomainError>;
}

/// Repository for Participant entities
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// List participants in creation order, optionally only those of one course
    async fn find_all(&self, course_id: Option<&CourseId>)
        -> Result<Vec<Participant>, DomainError>;

    /// Find a participant by ID
    async fn find_by_id(&self, id: &ParticipantId) -> Result<Option<Participant>, DomainError>;

    /// Create a new participant with a freshly generated ID
    async fn create(&self, participant: &NewParticipant) -> Result<Participant, DomainError>;

    /// Rename a participant and/or move it to another course
    async fn update(
        &self,
        id: &ParticipantId,
        update: &ParticipantUpdate,
    ) -> Result<Participant, DomainError>;

    /// Delete a participant
    async fn delete(&self, id: &ParticipantId) -> Result<(), DomainError>;
}
