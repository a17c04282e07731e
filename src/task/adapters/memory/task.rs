//! In-memory repository for maintenance tasks.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::device::domain::DeviceId;
use crate::task::{
    domain::{NewTask, Task, TaskId, TaskSeverity, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Device references are not checked; callers verify them against the device
/// catalogue before writing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i64,
}

impl InMemoryTaskState {
    fn insert(&mut self, task: &NewTask) -> Task {
        self.last_id += 1;
        let stored = task.clone().into_task(TaskId::new(self.last_id));
        self.tasks.insert(stored.id(), stored.clone());
        stored
    }

    fn select(&self, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
        let mut matched: Vec<Task> = self
            .tasks
            .values()
            .filter(|task| predicate(task))
            .cloned()
            .collect();
        matched.sort_by_key(|task| (task.severity(), task.registered(), task.id()));
        matched
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn select(&self, predicate: impl Fn(&Task) -> bool) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.select(predicate))
    }
}

fn poisoned(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_all_ordered(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.select(|_| true)
    }

    async fn find_by_device(&self, device_id: DeviceId) -> TaskRepositoryResult<Vec<Task>> {
        self.select(|task| task.device_id() == device_id)
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        self.select(|task| task.status() == status)
    }

    async fn find_by_severity(&self, severity: TaskSeverity) -> TaskRepositoryResult<Vec<Task>> {
        self.select(|task| task.severity() == severity)
    }

    async fn find_by_device_and_status(
        &self,
        device_id: DeviceId,
        status: TaskStatus,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.select(|task| task.device_id() == device_id && task.status() == status)
    }

    async fn find_by_device_and_severity(
        &self,
        device_id: DeviceId,
        severity: TaskSeverity,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.select(|task| task.device_id() == device_id && task.severity() == severity)
    }

    async fn find_by_status_and_severity(
        &self,
        status: TaskStatus,
        severity: TaskSeverity,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.select(|task| task.status() == status && task.severity() == severity)
    }

    async fn find_by_device_and_status_and_severity(
        &self,
        device_id: DeviceId,
        status: TaskStatus,
        severity: TaskSeverity,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.select(|task| {
            task.device_id() == device_id
                && task.status() == status
                && task.severity() == severity
        })
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.contains_key(&id))
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(state.tasks.remove(&id).is_some())
    }

    async fn delete_many(&self, ids: &[TaskId]) -> TaskRepositoryResult<usize> {
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(ids
            .iter()
            .filter(|id| state.tasks.remove(*id).is_some())
            .count())
    }

    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(state.insert(task))
    }

    async fn insert_many(&self, tasks: &[NewTask]) -> TaskRepositoryResult<Vec<Task>> {
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(tasks.iter().map(|task| state.insert(task)).collect())
    }

    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;
        let slot = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(task.clone())
    }
}
