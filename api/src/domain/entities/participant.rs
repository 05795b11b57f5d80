//! Participant domain entity
//!
//! A person enrolled in exactly one course at a time.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::course::CourseId;

/// Unique identifier for a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ParticipantId(pub u64);

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant assigned to a course
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub course_id: CourseId,
    pub created_at: DateTime<Utc>,
}

impl Participant {
    /// Whether this participant occupies the given (name, course) slot
    pub fn is_enrolled_as(&self, name: &str, course_id: CourseId) -> bool {
        self.course_id == course_id && self.name == name
    }

    /// Apply an update in place. `id` and `created_at` are never touched.
    pub fn apply(&mut self, update: &ParticipantUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(course_id) = update.course_id {
            self.course_id = course_id;
        }
    }
}

/// Data needed to create a new participant
#[derive(Debug, Clone)]
pub struct NewParticipant {
    pub name: String,
    pub course_id: CourseId,
}

/// Partial update of a participant; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct ParticipantUpdate {
    pub name: Option<String>,
    pub course_id: Option<CourseId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_participant() -> Participant {
        Participant {
            id: ParticipantId(7),
            name: "Alice".to_string(),
            course_id: CourseId(1),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn is_enrolled_as_matches_name_and_course() {
        let participant = make_participant();
        assert!(participant.is_enrolled_as("Alice", CourseId(1)));
        assert!(!participant.is_enrolled_as("Alice", CourseId(2)));
        assert!(!participant.is_enrolled_as("Bob", CourseId(1)));
    }

    #[test]
    fn apply_moves_participant_to_new_course() {
        let mut participant = make_participant();
        participant.apply(&ParticipantUpdate {
            name: None,
            course_id: Some(CourseId(3)),
        });

        assert_eq!(participant.id, ParticipantId(7));
        assert_eq!(participant.name, "Alice");
        assert_eq!(participant.course_id, CourseId(3));
    }

    #[test]
    fn participant_serializes_course_id_as_number() {
        let json = serde_json::to_value(make_participant()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["course_id"], 1);
    }
}
