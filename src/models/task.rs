use super::detail::Detail;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,                           // ⇔ tasks.id (INTEGER PRIMARY KEY)
    pub title: String,                     // ⇔ tasks.title (TEXT NOT NULL)
    pub list_position: i32,                // ⇔ tasks.listpos (INT, default 0)
    pub reminder: Option<DateTime<Local>>, // ⇔ tasks.duedate (epoch millis, 0 = none)
    pub done: bool,                        // ⇔ tasks.done (0/1)
    pub details: Detail,                   // ⇔ tasks.details (TEXT, JSON blob)
}

impl Task {
    /// Sentinel id of a task that was not persisted yet.
    pub const TRANSIENT: i64 = -1;

    /// Creates a transient task with the passed title. The id is assigned
    /// by the store on first save.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Self::TRANSIENT,
            title: title.into(),
            list_position: 0,
            reminder: None,
            done: false,
            details: Detail::default(),
        }
    }

    pub fn is_transient(&self) -> bool {
        self.id == Self::TRANSIENT
    }

    /// Epoch milliseconds for the `duedate` column, 0 when no reminder is
    /// set.
    pub fn reminder_millis(&self) -> i64 {
        self.reminder.map(|r| r.timestamp_millis()).unwrap_or(0)
    }

    /// True if the reminder should produce a wake-up: set, in the future
    /// and the task is not done.
    pub fn wants_notification(&self, now: DateTime<Local>) -> bool {
        match self.reminder {
            Some(r) => r > now && !self.done,
            None => false,
        }
    }
}

/// Renumber the list positions of the passed tasks to be contiguous
/// 0..N-1 in slice order. Callers that reorder the list run this before
/// saving the whole list back.
pub fn renumber_positions(tasks: &mut [Task]) {
    for (pos, task) in tasks.iter_mut().enumerate() {
        task.list_position = pos as i32;
    }
}
