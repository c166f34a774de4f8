use async_trait::async_trait;
use redb::{
    Database, MultimapTableDefinition, ReadableMultimapTable, ReadableTable,
    TableDefinition,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::data_access::task_store::{StoreError, TaskStore};
use crate::{
    task::{Task, TaskUpdate},
    task_status::TaskStatus,
};

const TASKS_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("tasks");
// Secondary grouping of task ids by status literal. Not queried by any
// current operation, but kept consistent on every mutation.
const STATUS_INDEX: MultimapTableDefinition<&str, &[u8]> =
    MultimapTableDefinition::new("task_status_index");

#[derive(Clone)]
pub struct DataContext {
    db: Arc<Database>,
}

impl DataContext {
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let db = Database::create(path)?;
        let write_txn = db.begin_write()?;
        let _ = write_txn.open_table(TASKS_TABLE)?;
        let _ = write_txn.open_multimap_table(STATUS_INDEX)?;
        write_txn.commit()?;
        Ok(DataContext { db: Arc::new(db) })
    }

    pub fn put_task(&self, task: &Task) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let mut status_index = write_txn.open_multimap_table(STATUS_INDEX)?;
            let id_bytes = task.task_id.as_bytes();

            // An overwrite may move the record to another status group.
            let previous = match tasks_table.get(id_bytes.as_slice())? {
                Some(data) => Some(decode(data.value())?),
                None => None,
            };
            if let Some(previous) = previous {
                status_index.remove(previous.status.as_str(), id_bytes.as_slice())?;
            }

            let task_bytes = encode(task)?;
            tasks_table.insert(id_bytes.as_slice(), task_bytes.as_slice())?;
            status_index.insert(task.status.as_str(), id_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn get_task(&self, id: Uuid) -> Result<Option<Task>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;

        let id_bytes = id.as_bytes();
        match tasks_table.get(id_bytes.as_slice())? {
            Some(data) => Ok(Some(decode(data.value())?)),
            None => Ok(None),
        }
    }

    /// Existence-conditioned write of the mutable fields, all inside one
    /// transaction. Nothing is committed when the record is absent.
    pub fn update_task(&self, id: Uuid, update: &TaskUpdate) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let mut status_index = write_txn.open_multimap_table(STATUS_INDEX)?;
            let id_bytes = id.as_bytes();

            let mut task = match tasks_table.get(id_bytes.as_slice())? {
                Some(data) => decode(data.value())?,
                // Dropping the transaction aborts it.
                None => return Err(StoreError::NotFound),
            };

            if task.status != update.status {
                status_index.remove(task.status.as_str(), id_bytes.as_slice())?;
                status_index.insert(update.status.as_str(), id_bytes.as_slice())?;
            }

            task.apply(update);
            let task_bytes = encode(&task)?;
            tasks_table.insert(id_bytes.as_slice(), task_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn delete_task(&self, id: Uuid) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            let mut status_index = write_txn.open_multimap_table(STATUS_INDEX)?;
            let id_bytes = id.as_bytes();

            let removed = match tasks_table.remove(id_bytes.as_slice())? {
                Some(data) => Some(decode(data.value())?),
                None => None,
            };
            if let Some(task) = removed {
                status_index.remove(task.status.as_str(), id_bytes.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn tasks_by_status(&self, status: TaskStatus) -> Result<Vec<Uuid>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let status_index = read_txn.open_multimap_table(STATUS_INDEX)?;

        let mut ids = Vec::new();
        for entry in status_index.get(status.as_str())? {
            let data = entry?;
            let id = Uuid::from_slice(data.value())
                .map_err(|e| StoreError::Fatal(e.to_string()))?;
            ids.push(id);
        }
        Ok(ids)
    }
}

fn encode(task: &Task) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(task).map_err(|e| StoreError::Fatal(e.to_string()))
}

fn decode(bytes: &[u8]) -> Result<Task, StoreError> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Fatal(e.to_string()))
}

#[async_trait]
impl TaskStore for DataContext {
    async fn put(&self, task: &Task) -> Result<(), StoreError> {
        self.put_task(task)
    }

    async fn get(&self, task_id: Uuid) -> Result<Option<Task>, StoreError> {
        self.get_task(task_id)
    }

    async fn update(&self, task_id: Uuid, update: &TaskUpdate) -> Result<(), StoreError> {
        self.update_task(task_id, update)
    }

    async fn delete(&self, task_id: Uuid) -> Result<(), StoreError> {
        self.delete_task(task_id)
    }

    async fn ids_by_status(&self, status: TaskStatus) -> Result<Vec<Uuid>, StoreError> {
        self.tasks_by_status(status)
    }
}

// ── Tests ──────────────────────────────────────────────────────
