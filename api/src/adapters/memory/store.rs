//! Shared in-memory store
//!
//! Both repositories hold a handle to the same store so that checks spanning
//! courses and participants run under a single lock.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::{Course, CourseId, Participant, ParticipantId};
use crate::error::DomainError;

/// Handle to the process-wide course and participant tables
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(super) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}

/// Rows keyed by id. Ids grow monotonically, so key order is creation order.
#[derive(Debug, Default)]
pub(super) struct Tables {
    pub courses: BTreeMap<CourseId, Course>,
    pub participants: BTreeMap<ParticipantId, Participant>,
    last_course_id: u64,
    last_participant_id: u64,
}

impl Tables {
    /// Allocate the next course id. Ids are never handed out twice.
    pub fn next_course_id(&mut self) -> Result<CourseId, DomainError> {
        self.last_course_id = next_id(self.last_course_id, "course")?;
        Ok(CourseId(self.last_course_id))
    }

    /// Allocate the next participant id. Ids are never handed out twice.
    pub fn next_participant_id(&mut self) -> Result<ParticipantId, DomainError> {
        self.last_participant_id = next_id(self.last_participant_id, "participant")?;
        Ok(ParticipantId(self.last_participant_id))
    }

    /// Whether a course other than `except` already uses `name`
    pub fn course_name_taken(&self, name: &str, except: Option<CourseId>) -> bool {
        self.courses
            .values()
            .any(|c| c.name == name && Some(c.id) != except)
    }

    /// Whether a participant other than `except` already holds (name, course)
    pub fn enrollment_taken(
        &self,
        name: &str,
        course_id: CourseId,
        except: Option<ParticipantId>,
    ) -> bool {
        self.participants
            .values()
            .any(|p| p.is_enrolled_as(name, course_id) && Some(p.id) != except)
    }

    pub fn participant_count(&self, course_id: CourseId) -> usize {
        self.participants
            .values()
            .filter(|p| p.course_id == course_id)
            .count()
    }
}

fn next_id(last: u64, kind: &str) -> Result<u64, DomainError> {
    last.checked_add(1)
        .ok_or_else(|| DomainError::Internal(format!("{} id space exhausted", kind)))
}
