//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod courses;
pub mod extract;
pub mod participants;

pub use courses::{create_course, delete_course, get_course, list_courses, update_course};
pub use participants::{
    create_participant, delete_participant, get_participant, list_participants,
    update_participant,
};
