//! In-memory adapters
//!
//! Implementations of repository traits backed by a shared in-process store.
//! All state is lost when the process exits.

pub mod course_repo;
pub mod participant_repo;
pub mod store;

pub use course_repo::MemoryCourseRepository;
pub use participant_repo::MemoryParticipantRepository;
pub use store::MemoryStore;
