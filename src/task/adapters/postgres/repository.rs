//! `PostgreSQL` repository implementation for maintenance task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::maintenance_tasks,
};
use crate::device::domain::DeviceId;
use crate::task::{
    domain::{
        NewTask, PersistedTaskData, Task, TaskDescription, TaskId, TaskSeverity, TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

/// Column filters for one listing query; `None` leaves a column unconstrained.
#[derive(Debug, Clone, Copy, Default)]
struct TaskCriteria {
    device_id: Option<DeviceId>,
    status: Option<TaskStatus>,
    severity: Option<TaskSeverity>,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }

    async fn find_matching(&self, criteria: TaskCriteria) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| load_ordered(connection, criteria))
            .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_all_ordered(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.find_matching(TaskCriteria::default()).await
    }

    async fn find_by_device(&self, device_id: DeviceId) -> TaskRepositoryResult<Vec<Task>> {
        self.find_matching(TaskCriteria {
            device_id: Some(device_id),
            ..TaskCriteria::default()
        })
        .await
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        self.find_matching(TaskCriteria {
            status: Some(status),
            ..TaskCriteria::default()
        })
        .await
    }

    async fn find_by_severity(&self, severity: TaskSeverity) -> TaskRepositoryResult<Vec<Task>> {
        self.find_matching(TaskCriteria {
            severity: Some(severity),
            ..TaskCriteria::default()
        })
        .await
    }

    async fn find_by_device_and_status(
        &self,
        device_id: DeviceId,
        status: TaskStatus,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.find_matching(TaskCriteria {
            device_id: Some(device_id),
            status: Some(status),
            severity: None,
        })
        .await
    }

    async fn find_by_device_and_severity(
        &self,
        device_id: DeviceId,
        severity: TaskSeverity,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.find_matching(TaskCriteria {
            device_id: Some(device_id),
            status: None,
            severity: Some(severity),
        })
        .await
    }

    async fn find_by_status_and_severity(
        &self,
        status: TaskStatus,
        severity: TaskSeverity,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.find_matching(TaskCriteria {
            device_id: None,
            status: Some(status),
            severity: Some(severity),
        })
        .await
    }

    async fn find_by_device_and_status_and_severity(
        &self,
        device_id: DeviceId,
        status: TaskStatus,
        severity: TaskSeverity,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.find_matching(TaskCriteria {
            device_id: Some(device_id),
            status: Some(status),
            severity: Some(severity),
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = maintenance_tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(maintenance_tasks::table.find(id.value())))
                .get_result::<bool>(connection)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(maintenance_tasks::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }

    async fn delete_many(&self, ids: &[TaskId]) -> TaskRepositoryResult<usize> {
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.value()).collect();
        self.run_blocking(move |connection| {
            diesel::delete(maintenance_tasks::table.filter(maintenance_tasks::id.eq_any(raw_ids)))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let device_id = task.device_id();
        let new_row = to_new_row(task);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(maintenance_tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(|err| map_write_error(err, device_id))?;
            row_to_task(row)
        })
        .await
    }

    async fn insert_many(&self, tasks: &[NewTask]) -> TaskRepositoryResult<Vec<Task>> {
        let new_rows: Vec<NewTaskRow> = tasks.iter().map(to_new_row).collect();
        self.run_blocking(move |connection| {
            let rows = diesel::insert_into(maintenance_tasks::table)
                .values(&new_rows)
                .returning(TaskRow::as_returning())
                .get_results::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let task_id = task.id();
        let device_id = task.device_id();
        let changeset = to_changeset(task);
        self.run_blocking(move |connection| {
            let row = diesel::update(maintenance_tasks::table.find(task_id.value()))
                .set(&changeset)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(|err| map_write_error(err, device_id))?
                .ok_or(TaskRepositoryError::NotFound(task_id))?;
            row_to_task(row)
        })
        .await
    }
}

fn load_ordered(
    connection: &mut PgConnection,
    criteria: TaskCriteria,
) -> TaskRepositoryResult<Vec<Task>> {
    let mut query = maintenance_tasks::table
        .select(TaskRow::as_select())
        .into_boxed();
    if let Some(device_id) = criteria.device_id {
        query = query.filter(maintenance_tasks::device_id.eq(device_id.value()));
    }
    if let Some(status) = criteria.status {
        query = query.filter(maintenance_tasks::status.eq(status.ordinal()));
    }
    if let Some(severity) = criteria.severity {
        query = query.filter(maintenance_tasks::severity.eq(severity.rank()));
    }
    let rows = query
        .order((
            maintenance_tasks::severity.asc(),
            maintenance_tasks::registered.asc(),
            maintenance_tasks::id.asc(),
        ))
        .load::<TaskRow>(connection)
        .map_err(TaskRepositoryError::persistence)?;
    rows.into_iter().map(row_to_task).collect()
}

fn map_write_error(err: DieselError, device_id: DeviceId) -> TaskRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            TaskRepositoryError::UnknownDevice(device_id)
        }
        other => TaskRepositoryError::persistence(other),
    }
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        device_id: task.device_id().value(),
        severity: task.severity().rank(),
        status: task.status().ordinal(),
        description: task.description().as_str().to_owned(),
        registered: task.registered(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        device_id: task.device_id().value(),
        severity: task.severity().rank(),
        status: task.status().ordinal(),
        description: task.description().as_str().to_owned(),
        registered: task.registered(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        device_id,
        severity,
        status,
        description,
        registered,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::new(id),
        device_id: DeviceId::new(device_id),
        severity: TaskSeverity::from_rank(severity).map_err(TaskRepositoryError::persistence)?,
        status: TaskStatus::from_ordinal(status).map_err(TaskRepositoryError::persistence)?,
        description: TaskDescription::from_persisted(description),
        registered,
    };
    Ok(Task::from_persisted(data))
}
