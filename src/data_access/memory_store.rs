use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::data_access::task_store::{StoreError, TaskStore};
use crate::{
    task::{Task, TaskUpdate},
    task_status::TaskStatus,
};

/// In-memory [`TaskStore`], substituted for the redb store in tests.
pub struct MemoryStore {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn put(&self, task: &Task) -> Result<(), StoreError> {
        let mut tasks = self.tasks.write().await;
        tasks.insert(task.task_id, task.clone());
        Ok(())
    }

    async fn get(&self, task_id: Uuid) -> Result<Option<Task>, StoreError> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&task_id).cloned())
    }

    async fn update(&self, task_id: Uuid, update: &TaskUpdate) -> Result<(), StoreError> {
        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(&task_id) {
            Some(task) => {
                task.apply(update);
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, task_id: Uuid) -> Result<(), StoreError> {
        let mut tasks = self.tasks.write().await;
        tasks.remove(&task_id);
        Ok(())
    }

    async fn ids_by_status(&self, status: TaskStatus) -> Result<Vec<Uuid>, StoreError> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .values()
            .filter(|task| task.status == status)
            .map(|task| task.task_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_task(status: TaskStatus) -> Task {
        Task {
            task_id: Uuid::new_v4(),
            title: "Write the design doc".to_string(),
            description: "Draft the full specification document".to_string(),
            status,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn behaves_like_the_redb_store() {
        let store = MemoryStore::new();

        let task = sample_task(TaskStatus::Pending);
        store.put(&task).await.unwrap();
        assert_eq!(store.get(task.task_id).await.unwrap(), Some(task.clone()));
        assert_eq!(
            store.ids_by_status(TaskStatus::Pending).await.unwrap(),
            vec![task.task_id]
        );

        let update = TaskUpdate {
            title: "Review the design doc".to_string(),
            description: "Second pass over the specification document".to_string(),
            status: TaskStatus::Completed,
            updated_at: Utc::now(),
        };
        store.update(task.task_id, &update).await.unwrap();
        let stored = store.get(task.task_id).await.unwrap().unwrap();
        assert_eq!(stored.status, TaskStatus::Completed);
        assert_eq!(stored.created_at, task.created_at);
        assert!(store.ids_by_status(TaskStatus::Pending).await.unwrap().is_empty());

        store.delete(task.task_id).await.unwrap();
        store.delete(task.task_id).await.unwrap();
        assert_eq!(store.get(task.task_id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_of_a_missing_record_is_not_found() {
        let store = MemoryStore::new();
        let update = TaskUpdate {
            title: "Review the design doc".to_string(),
            description: "Second pass over the specification document".to_string(),
            status: TaskStatus::Pending,
            updated_at: Utc::now(),
        };
        let result = store.update(Uuid::new_v4(), &update).await;
        assert!(matches!(result, Err(StoreError::NotFound)));
    }
}
