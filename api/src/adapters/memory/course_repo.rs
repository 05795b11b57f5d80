//! In-memory adapter for CourseRepository

use async_trait::async_trait;
use chrono::Utc;

use super::store::MemoryStore;
use crate::domain::entities::{Course, CourseId, CourseUpdate, DeletePolicy, NewCourse};
use crate::domain::ports::CourseRepository;
use crate::error::DomainError;

/// In-memory implementation of CourseRepository
pub struct MemoryCourseRepository {
    store: MemoryStore,
}

impl MemoryCourseRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CourseRepository for MemoryCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, DomainError> {
        let tables = self.store.read().await;
        Ok(tables.courses.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        let tables = self.store.read().await;
        Ok(tables.courses.get(id).cloned())
    }

    async fn create(&self, course: &NewCourse) -> Result<Course, DomainError> {
        let mut tables = self.store.write().await;

        if tables.course_name_taken(&course.name, None) {
            return Err(DomainError::AlreadyExists(format!(
                "Course with name '{}' already exists",
                course.name
            )));
        }

        let course = Course {
            id: tables.next_course_id()?,
            name: course.name.clone(),
            instructor: course.instructor.clone(),
            created_at: Utc::now(),
        };
        tables.courses.insert(course.id, course.clone());

        Ok(course)
    }

    async fn update(&self, id: &CourseId, update: &CourseUpdate) -> Result<Course, DomainError> {
        let mut tables = self.store.write().await;

        if !tables.courses.contains_key(id) {
            return Err(DomainError::NotFound(format!("Course {} not found", id)));
        }

        if let Some(name) = &update.name {
            if tables.course_name_taken(name, Some(*id)) {
                return Err(DomainError::AlreadyExists(format!(
                    "Course with name '{}' already exists",
                    name
                )));
            }
        }

        let course = tables
            .courses
            .get_mut(id)
            .ok_or_else(|| DomainError::NotFound(format!("Course {} not found", id)))?;
        course.apply(update);

        Ok(course.clone())
    }

    async fn delete(&self, id: &CourseId, policy: DeletePolicy) -> Result<usize, DomainError> {
        let mut tables = self.store.write().await;

        if !tables.courses.contains_key(id) {
            return Err(DomainError::NotFound(format!("Course {} not found", id)));
        }

        let enrolled = tables.participant_count(*id);
        if enrolled > 0 && policy == DeletePolicy::Reject {
            return Err(DomainError::Conflict(format!(
                "Course {} still has {} participant(s)",
                id, enrolled
            )));
        }

        tables.participants.retain(|_, p| p.course_id != *id);
        tables.courses.remove(id);

        Ok(enrolled)
    }
}
