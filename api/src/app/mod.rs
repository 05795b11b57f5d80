//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services validate input and coordinate between domain entities and ports.

pub mod course_service;
pub mod participant_service;
pub mod validation;

pub use course_service::CourseService;
pub use participant_service::ParticipantService;
