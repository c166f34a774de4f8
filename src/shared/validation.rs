//! Field-level validation of a candidate task record.
//!
//! Pure functions, no store access. The validator reports the first failing
//! field only, in declaration order: taskId, title, description, status.

use serde_json::{json, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::{task_status::TaskStatus, task_write_request::TaskWriteRequest};

const TITLE_BOUNDS: (usize, usize) = (10, 50);
const DESCRIPTION_BOUNDS: (usize, usize) = (10, 200);

/// A record as it arrived on the wire, with the identifier merged in
/// (generated on Create, taken from the path on Update).
#[derive(Debug)]
pub struct TaskCandidate {
    pub task_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl TaskCandidate {
    pub fn new(task_id: String, body: TaskWriteRequest) -> Self {
        TaskCandidate {
            task_id,
            title: body.title,
            description: body.description,
            status: body.status,
        }
    }
}

/// The typed record a candidate becomes once every check passes.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTask {
    pub task_id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError { field, message: message.into() }
    }

    /// Structured detail array for the 400 body.
    pub fn details(&self) -> Value {
        json!([{ "field": self.field, "message": self.message }])
    }
}

/// Check a candidate against the field constraints. First failure wins.
pub fn validate(candidate: &TaskCandidate) -> Result<ValidatedTask, ValidationError> {
    let task_id = Uuid::parse_str(&candidate.task_id)
        .map_err(|_| ValidationError::new("taskId", "must be a valid UUID"))?;

    let title = required(&candidate.title, "title")?;
    check_length(title, "title", TITLE_BOUNDS)?;

    let description = required(&candidate.description, "description")?;
    check_length(description, "description", DESCRIPTION_BOUNDS)?;

    let status_literal = required(&candidate.status, "status")?;
    let status = TaskStatus::parse(status_literal).ok_or_else(|| {
        ValidationError::new(
            "status",
            format!("must be one of {}", TaskStatus::ALLOWED.join(", ")),
        )
    })?;

    Ok(ValidatedTask {
        task_id,
        title: title.to_string(),
        description: description.to_string(),
        status,
    })
}

fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    value
        .as_deref()
        .ok_or_else(|| ValidationError::new(field, "is required"))
}

fn check_length(
    value: &str,
    field: &'static str,
    (min, max): (usize, usize),
) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length < min || length > max {
        return Err(ValidationError::new(
            field,
            format!("length must be between {min} and {max} characters"),
        ));
    }
    Ok(())
}
