//! The task store: every persisted-task operation in one place.
//!
//! All operations take an internal lock so concurrent callers cannot
//! interleave writes on the same database file; the store is the only
//! shared mutable state in the application.

use crate::db::background::{self, Subscription};
use crate::db::initialize::{self, SQL_CREATE_TASKS, SQL_DROP_TASKS};
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::models::task::Task;
use crate::ui::messages::warning;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

pub struct TaskStore {
    conn: Mutex<Connection>,
}

impl TaskStore {
    /// Open (and if necessary create) the task database at the passed path.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        initialize::init_db(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize::init_db(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock only means another thread panicked mid-operation;
        // the connection itself is still usable.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Saves or updates the passed task and returns the effective row id.
    /// Transient tasks are inserted; persisted tasks are updated by id, and
    /// an update that affects zero rows is an error.
    pub fn save(&self, task: &Task) -> AppResult<i64> {
        let conn = self.lock();

        if task.is_transient() {
            return queries::insert_task(&conn, task);
        }

        match queries::update_task(&conn, task)? {
            1 => Ok(task.id),
            _ => Err(AppError::TaskNotFound(task.id)),
        }
    }

    /// Saves and/or updates all passed tasks inside a single transaction.
    /// The first failing row rolls the whole batch back.
    pub fn save_all(&self, tasks: &[Task]) -> AppResult<()> {
        if tasks.is_empty() {
            return Err(AppError::EmptyBatch);
        }

        let mut conn = self.lock();
        let tx = conn.transaction()?;

        for task in tasks {
            if task.is_transient() {
                queries::insert_task(&tx, task)?;
            } else if queries::update_task(&tx, task)? != 1 {
                return Err(AppError::TaskNotFound(task.id));
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Returns the task with the passed id, or None if no such row exists.
    /// Non-positive ids are rejected outright.
    pub fn get_task(&self, id: i64) -> AppResult<Option<Task>> {
        if id < 1 {
            return Err(AppError::InvalidId(id));
        }
        queries::select_task(&self.lock(), id)
    }

    /// All tasks, ordered by list position ascending.
    pub fn get_all(&self) -> AppResult<Vec<Task>> {
        queries::select_all(&self.lock())
    }

    /// Deletes the task with the passed id and returns the number of
    /// deleted rows. Deleting a transient id is a no-op.
    pub fn delete_task(&self, id: i64) -> AppResult<usize> {
        if id == Task::TRANSIENT {
            warning(format!("The requested task to delete was transient, id: {id}"));
            return Ok(0);
        }
        queries::delete_task(&self.lock(), id)
    }

    /// Deletes all tasks by dropping and recreating the table.
    pub fn delete_all(&self) -> AppResult<()> {
        self.lock()
            .execute_batch(&format!("{SQL_DROP_TASKS}{SQL_CREATE_TASKS}"))?;
        Ok(())
    }

    /// Write an audit line into the internal log table.
    pub fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::audit(&self.lock(), operation, target, message)
    }

    /// Read the audit log, newest first.
    pub fn read_log(&self) -> AppResult<Vec<(String, String, String)>> {
        log::read_log(&self.lock())
    }

    /// Fetch all tasks on a background thread. The result is delivered on
    /// the calling thread through [`Subscription::wait`].
    pub fn get_all_async(self: Arc<Self>) -> Subscription<Vec<Task>> {
        background::spawn(move || self.get_all())
    }

    /// Save the passed tasks on a background thread. Unsubscribing
    /// suppresses delivery but does not abort an in-flight write.
    pub fn save_all_async(self: Arc<Self>, tasks: Vec<Task>) -> Subscription<()> {
        background::spawn(move || self.save_all(&tasks))
    }
}
