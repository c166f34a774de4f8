use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::data_access::task_store::{StoreError, TaskStore};
use crate::{
    app_state::SharedState,
    task::{Task, TaskUpdate},
    task_write_request::TaskWriteRequest,
    validation::{self, TaskCandidate, ValidationError},
};

// Each operation is a plain async function over (store, input) returning a
// tagged outcome; TaskController maps outcomes to HTTP. Validation and
// not-found are expected outcomes, never errors propagated past this layer.

#[derive(Debug)]
pub enum CreateOutcome {
    Created(Task),
    Invalid(ValidationError),
}

#[derive(Debug)]
pub enum ReadOutcome {
    Found(Task),
    Missing,
}

#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(TaskUpdate),
    Invalid(ValidationError),
    Missing,
    StoreFailed(StoreError),
}

/// Create: generate a fresh identifier (any client-supplied one is ignored),
/// validate the merged record, stamp createdAt, write unconditionally.
pub async fn create_task(
    store: &dyn TaskStore,
    body: TaskWriteRequest,
) -> Result<CreateOutcome, StoreError> {
    let task_id = Uuid::new_v4();
    let candidate = TaskCandidate::new(task_id.to_string(), body);
    let validated = match validation::validate(&candidate) {
        Ok(validated) => validated,
        Err(e) => return Ok(CreateOutcome::Invalid(e)),
    };

    let task = Task {
        task_id,
        title: validated.title,
        description: validated.description,
        status: validated.status,
        created_at: Utc::now(),
        updated_at: None,
    };
    store.put(&task).await?;
    Ok(CreateOutcome::Created(task))
}

pub async fn read_task(store: &dyn TaskStore, task_id: &str) -> Result<ReadOutcome, StoreError> {
    // A key no record could carry is simply not found.
    let Ok(id) = Uuid::parse_str(task_id) else {
        return Ok(ReadOutcome::Missing);
    };
    match store.get(id).await? {
        Some(task) => Ok(ReadOutcome::Found(task)),
        None => Ok(ReadOutcome::Missing),
    }
}

/// Update: merge the path identifier into the body, validate, stamp
/// updatedAt, then write the mutable fields only if the record exists.
pub async fn update_task(
    store: &dyn TaskStore,
    task_id: String,
    body: TaskWriteRequest,
) -> UpdateOutcome {
    let candidate = TaskCandidate::new(task_id, body);
    let validated = match validation::validate(&candidate) {
        Ok(validated) => validated,
        Err(e) => return UpdateOutcome::Invalid(e),
    };

    let update = TaskUpdate {
        title: validated.title,
        description: validated.description,
        status: validated.status,
        updated_at: Utc::now(),
    };
    match store.update(validated.task_id, &update).await {
        Ok(()) => UpdateOutcome::Updated(update),
        Err(StoreError::NotFound) => UpdateOutcome::Missing,
        Err(e) => UpdateOutcome::StoreFailed(e),
    }
}

/// Delete: unconditional and idempotent. A malformed identifier names no
/// record, so there is nothing to delete and the outcome is the same.
pub async fn delete_task(store: &dyn TaskStore, task_id: &str) -> Result<(), StoreError> {
    match Uuid::parse_str(task_id) {
        Ok(id) => store.delete(id).await,
        Err(_) => Ok(()),
    }
}

pub struct TaskController {}

impl TaskController {
    pub async fn create(
        State(state): State<SharedState>,
        Json(body): Json<TaskWriteRequest>,
    ) -> Response {
        match create_task(state.store.as_ref(), body).await {
            Ok(CreateOutcome::Created(task)) => (StatusCode::CREATED, Json(task)).into_response(),
            Ok(CreateOutcome::Invalid(e)) => invalid(e),
            Err(e) => store_fault("create", e),
        }
    }

    pub async fn get(State(state): State<SharedState>, Path(task_id): Path<String>) -> Response {
        match read_task(state.store.as_ref(), &task_id).await {
            Ok(ReadOutcome::Found(task)) => (StatusCode::OK, Json(task)).into_response(),
            Ok(ReadOutcome::Missing) => StatusCode::NOT_FOUND.into_response(),
            Err(e) => store_fault("read", e),
        }
    }

    pub async fn update(
        State(state): State<SharedState>,
        Path(task_id): Path<String>,
        Json(body): Json<TaskWriteRequest>,
    ) -> Response {
        match update_task(state.store.as_ref(), task_id, body).await {
            UpdateOutcome::Updated(update) => (StatusCode::OK, Json(update)).into_response(),
            UpdateOutcome::Invalid(e) => invalid(e),
            UpdateOutcome::Missing => StatusCode::NOT_FOUND.into_response(),
            UpdateOutcome::StoreFailed(e) => {
                error!("Error updating task: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "error": e.to_string() })),
                )
                    .into_response()
            }
        }
    }

    pub async fn delete(State(state): State<SharedState>, Path(task_id): Path<String>) -> Response {
        match delete_task(state.store.as_ref(), &task_id).await {
            Ok(()) => StatusCode::NO_CONTENT.into_response(),
            Err(e) => store_fault("delete", e),
        }
    }

    /// Shared fallback for unrecognized methods and paths.
    pub async fn method_not_found() -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "msg": "HTTP Method Not Found" })),
        )
            .into_response()
    }
}

fn invalid(e: ValidationError) -> Response {
    (StatusCode::BAD_REQUEST, Json(e.details())).into_response()
}

fn store_fault(operation: &str, e: StoreError) -> Response {
    error!("Store failure during {}: {}", operation, e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_access::memory_store::MemoryStore;
    use crate::task_status::TaskStatus;

    fn valid_body() -> TaskWriteRequest {
        TaskWriteRequest {
            title: Some("Write the design doc".to_string()),
            description: Some("Draft the full specification document".to_string()),
            status: Some("pending".to_string()),
        }
    }

    #[tokio::test]
    async fn create_then_read_round_trip() {
        let store = MemoryStore::new();

        let created = match create_task(&store, valid_body()).await.unwrap() {
            CreateOutcome::Created(task) => task,
            other => panic!("expected Created, got {other:?}"),
        };
        assert_eq!(created.status, TaskStatus::Pending);
        assert!(created.updated_at.is_none());

        match read_task(&store, &created.task_id.to_string()).await.unwrap() {
            ReadOutcome::Found(task) => assert_eq!(task, created),
            ReadOutcome::Missing => panic!("created task must be readable"),
        }
    }

    #[tokio::test]
    async fn create_rejects_invalid_input() {
        let store = MemoryStore::new();

        let mut body = valid_body();
        body.title = Some("short".to_string());
        match create_task(&store, body).await.unwrap() {
            CreateOutcome::Invalid(e) => assert_eq!(e.field, "title"),
            other => panic!("expected Invalid, got {other:?}"),
        }

        let mut body = valid_body();
        body.status = Some("archived".to_string());
        match create_task(&store, body).await.unwrap() {
            CreateOutcome::Invalid(e) => assert_eq!(e.field, "status"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn read_of_unknown_or_malformed_id_is_missing() {
        let store = MemoryStore::new();

        let unknown = Uuid::new_v4().to_string();
        assert!(matches!(
            read_task(&store, &unknown).await.unwrap(),
            ReadOutcome::Missing
        ));
        assert!(matches!(
            read_task(&store, "not-a-uuid").await.unwrap(),
            ReadOutcome::Missing
        ));
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_missing_even_with_a_valid_body() {
        let store = MemoryStore::new();

        let unknown = Uuid::new_v4().to_string();
        assert!(matches!(
            update_task(&store, unknown, valid_body()).await,
            UpdateOutcome::Missing
        ));
    }

    #[tokio::test]
    async fn update_validates_before_touching_the_store() {
        let store = MemoryStore::new();

        let mut body = valid_body();
        body.description = None;
        match update_task(&store, Uuid::new_v4().to_string(), body).await {
            UpdateOutcome::Invalid(e) => assert_eq!(e.field, "description"),
            other => panic!("expected Invalid, got {other:?}"),
        }

        // A malformed path id is a validation failure on update.
        match update_task(&store, "bogus".to_string(), valid_body()).await {
            UpdateOutcome::Invalid(e) => assert_eq!(e.field, "taskId"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_changes_only_the_mutable_fields() {
        let store = MemoryStore::new();

        let created = match create_task(&store, valid_body()).await.unwrap() {
            CreateOutcome::Created(task) => task,
            other => panic!("expected Created, got {other:?}"),
        };

        let mut body = valid_body();
        body.title = Some("Review the design doc".to_string());
        body.status = Some("in-progress".to_string());
        let updated = match update_task(&store, created.task_id.to_string(), body).await {
            UpdateOutcome::Updated(update) => update,
            other => panic!("expected Updated, got {other:?}"),
        };

        let stored = store.get(created.task_id).await.unwrap().unwrap();
        assert_eq!(stored.task_id, created.task_id);
        assert_eq!(stored.created_at, created.created_at);
        assert_eq!(stored.title, "Review the design doc");
        assert_eq!(stored.status, TaskStatus::InProgress);
        assert_eq!(stored.updated_at, Some(updated.updated_at));
        assert!(updated.updated_at > created.created_at);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new();

        let created = match create_task(&store, valid_body()).await.unwrap() {
            CreateOutcome::Created(task) => task,
            other => panic!("expected Created, got {other:?}"),
        };
        let id = created.task_id.to_string();

        delete_task(&store, &id).await.unwrap();
        delete_task(&store, &id).await.unwrap();
        delete_task(&store, "not-a-uuid").await.unwrap();

        assert!(matches!(
            read_task(&store, &id).await.unwrap(),
            ReadOutcome::Missing
        ));
    }
}
