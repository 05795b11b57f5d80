//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod course;
pub mod participant;

pub use course::{Course, CourseId, CourseUpdate, DeletePolicy, NewCourse};
pub use participant::{NewParticipant, Participant, ParticipantId, ParticipantUpdate};
