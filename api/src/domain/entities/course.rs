//! Course domain entity
//!
//! A named offering taught by an instructor.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Unique identifier for a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What happens to participants when their course is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Refuse to delete a course that still has participants
    #[default]
    Reject,
    /// Delete the course together with its participants
    Cascade,
}

impl std::fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeletePolicy::Reject => write!(f, "reject"),
            DeletePolicy::Cascade => write!(f, "cascade"),
        }
    }
}

impl std::str::FromStr for DeletePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(DeletePolicy::Reject),
            "cascade" => Ok(DeletePolicy::Cascade),
            _ => Err(format!("Unknown delete policy: {}", s)),
        }
    }
}

/// A course participants can be assigned to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub instructor: String,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Apply an update in place. `id` and `created_at` are never touched.
    pub fn apply(&mut self, update: &CourseUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(instructor) = &update.instructor {
            self.instructor = instructor.clone();
        }
    }
}

/// Data needed to create a new course
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub instructor: String,
}

/// Partial update of a course; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct CourseUpdate {
    pub name: Option<String>,
    pub instructor: Option<String>,
}

impl CourseUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.instructor.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_course() -> Course {
        Course {
            id: CourseId(1),
            name: "Math101".to_string(),
            instructor: "Dr. Lee".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn apply_updates_only_provided_fields() {
        let mut course = make_course();
        let created_at = course.created_at;

        course.apply(&CourseUpdate {
            name: None,
            instructor: Some("Dr. Kim".to_string()),
        });

        assert_eq!(course.id, CourseId(1));
        assert_eq!(course.name, "Math101");
        assert_eq!(course.instructor, "Dr. Kim");
        assert_eq!(course.created_at, created_at);
    }

    #[test]
    fn empty_update_is_empty() {
        assert!(CourseUpdate::default().is_empty());
        assert!(!CourseUpdate {
            name: Some("Physics".to_string()),
            instructor: None,
        }
        .is_empty());
    }

    #[test]
    fn delete_policy_display() {
        assert_eq!(DeletePolicy::Reject.to_string(), "reject");
        assert_eq!(DeletePolicy::Cascade.to_string(), "cascade");
    }

    #[test]
    fn delete_policy_from_str() {
        assert_eq!(
            "reject".parse::<DeletePolicy>().unwrap(),
            DeletePolicy::Reject
        );
        assert_eq!(
            "CASCADE".parse::<DeletePolicy>().unwrap(),
            DeletePolicy::Cascade
        );
        assert!("restrict".parse::<DeletePolicy>().is_err());
        assert_eq!(DeletePolicy::default(), DeletePolicy::Reject);
    }

    #[test]
    fn course_id_display() {
        assert_eq!(CourseId(42).to_string(), "42");
    }

    #[test]
    fn course_serializes_id_as_number() {
        let json = serde_json::to_value(make_course()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Math101");
    }
}
