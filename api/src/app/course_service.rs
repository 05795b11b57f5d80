//! Course service
//!
//! Validates course input and applies the configured deletion policy.

use std::sync::Arc;

use crate::app::validation::{optional_text, required_text};
use crate::domain::entities::{Course, CourseId, CourseUpdate, DeletePolicy, NewCourse};
use crate::domain::ports::CourseRepository;
use crate::error::{AppError, DomainError};

/// Service for managing courses
pub struct CourseService<CR>
where
    CR: CourseRepository,
{
    courses: Arc<CR>,
    delete_policy: DeletePolicy,
}

impl<CR> CourseService<CR>
where
    CR: CourseRepository,
{
    pub fn new(courses: Arc<CR>, delete_policy: DeletePolicy) -> Self {
        Self {
            courses,
            delete_policy,
        }
    }

    /// List all courses in creation order
    pub async fn list(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.courses.find_all().await?)
    }

    /// Get a single course
    pub async fn get(&self, id: &CourseId) -> Result<Course, AppError> {
        self.courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Course {} not found", id)).into())
    }

    /// Create a course
    ///
    /// Fails with a validation error on an empty name or instructor and with
    /// `AlreadyExists` when another course already uses the name.
    pub async fn create(&self, name: &str, instructor: &str) -> Result<Course, AppError> {
        let new_course = NewCourse {
            name: required_text("name", name)?,
            instructor: required_text("instructor", instructor)?,
        };

        let course = self.courses.create(&new_course).await.map_err(|e| {
            tracing::debug!(name = %new_course.name, "Course rejected: {}", e);
            e
        })?;

        tracing::info!(course_id = %course.id, name = %course.name, "Course created");
        Ok(course)
    }

    /// Update name and/or instructor of a course
    pub async fn update(
        &self,
        id: &CourseId,
        name: Option<&str>,
        instructor: Option<&str>,
    ) -> Result<Course, AppError> {
        let update = CourseUpdate {
            name: optional_text("name", name)?,
            instructor: optional_text("instructor", instructor)?,
        };
        if update.is_empty() {
            return Err(AppError::BadRequest(
                "At least one of name or instructor must be provided".to_string(),
            ));
        }

        let course = self.courses.update(id, &update).await.map_err(|e| {
            tracing::debug!(course_id = %id, "Course update rejected: {}", e);
            e
        })?;

        tracing::info!(course_id = %course.id, "Course updated");
        Ok(course)
    }

    /// Delete a course
    ///
    /// Participants still enrolled are handled according to the service's
    /// [`DeletePolicy`].
    pub async fn delete(&self, id: &CourseId) -> Result<(), AppError> {
        let removed = self.courses.delete(id, self.delete_policy).await?;

        tracing::info!(
            course_id = %id,
            policy = %self.delete_policy,
            removed_participants = removed,
            "Course deleted"
        );
        Ok(())
    }
}
