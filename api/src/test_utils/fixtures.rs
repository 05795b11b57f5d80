//! Test fixtures
//!
//! Factory functions that put valid data into a store or build app state.

use crate::adapters::memory::{MemoryCourseRepository, MemoryParticipantRepository, MemoryStore};
use crate::domain::entities::{
    Course, CourseId, DeletePolicy, NewCourse, NewParticipant, Participant,
};
use crate::domain::ports::{CourseRepository, ParticipantRepository};
use crate::AppState;

/// Insert a course taught by "Dr. Lee" directly through the repository
pub async fn seed_course(store: &MemoryStore, name: &str) -> Course {
    MemoryCourseRepository::new(store.clone())
        .create(&NewCourse {
            name: name.to_string(),
            instructor: "Dr. Lee".to_string(),
        })
        .await
        .expect("seed course")
}

/// Insert a participant directly through the repository
pub async fn enroll(store: &MemoryStore, name: &str, course_id: CourseId) -> Participant {
    MemoryParticipantRepository::new(store.clone())
        .create(&NewParticipant {
            name: name.to_string(),
            course_id,
        })
        .await
        .expect("enroll participant")
}

/// App state over a fresh store with the given course deletion policy
pub fn test_state(delete_policy: DeletePolicy) -> AppState {
    AppState::new(MemoryStore::new(), delete_policy)
}
