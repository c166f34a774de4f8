use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    task::{Task, TaskUpdate},
    task_status::TaskStatus,
};

/// Store failure kinds, decided by the adapter. Call sites branch on the
/// variant, never on error text.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("store failure: {0}")]
    Transient(String),
    #[error("corrupt record: {0}")]
    Fatal(String),
}

// redb 2.x has many error types. Blanket them all into Transient.
macro_rules! from_redb {
    ($($t:ty),*) => {
        $(impl From<$t> for StoreError {
            fn from(e: $t) -> Self { StoreError::Transient(e.to_string()) }
        })*
    };
}

from_redb!(
    redb::Error,
    redb::DatabaseError,
    redb::TableError,
    redb::TransactionError,
    redb::StorageError,
    redb::CommitError
);

/// The single shared mutable resource. Implementations keep the status
/// grouping consistent with the task table on every mutation.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Unconditional write, overwrite-if-exists.
    async fn put(&self, task: &Task) -> Result<(), StoreError>;

    /// Fetch by identifier.
    async fn get(&self, task_id: Uuid) -> Result<Option<Task>, StoreError>;

    /// Write the mutable fields of an existing record. Fails with
    /// [`StoreError::NotFound`] when no record carries this identifier;
    /// an update never fabricates a record.
    async fn update(&self, task_id: Uuid, update: &TaskUpdate) -> Result<(), StoreError>;

    /// Idempotent delete; succeeds whether or not the record existed.
    async fn delete(&self, task_id: Uuid) -> Result<(), StoreError>;

    /// Identifiers currently grouped under the given status.
    async fn ids_by_status(&self, status: TaskStatus) -> Result<Vec<Uuid>, StoreError>;
}
