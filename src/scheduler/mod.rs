//! Reminder scheduling.
//!
//! Tasks with a future reminder get exactly one registered alarm, keyed by
//! the task id. The registry is a trait so the scheduling rules can run
//! against the production SQLite-backed registry or a test substitute; the
//! alarm subsystem is a collaborator, not part of the store.

pub mod alarms;

use crate::errors::AppResult;
use crate::models::task::Task;
use crate::utils::date;
use chrono::{DateTime, Local};

/// One scheduled wake-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    pub task_id: i64,
    /// Epoch milliseconds at which the reminder fires.
    pub fire_at: i64,
    /// Carried along so the fired notification can show the task title
    /// without another store read.
    pub title: String,
}

pub trait AlarmRegistry {
    /// Register an alarm, replacing any existing one for the same task id.
    fn register(&self, alarm: &Alarm) -> AppResult<()>;

    /// Remove the alarm for the passed task id. Idempotent.
    fn cancel(&self, task_id: i64) -> AppResult<()>;

    /// Remove and return every alarm due at or before `now_millis`.
    /// Each alarm is delivered at most once.
    fn take_due(&self, now_millis: i64) -> AppResult<Vec<Alarm>>;

    /// The active alarm for a task id, if any.
    fn active(&self, task_id: i64) -> AppResult<Option<Alarm>>;

    /// Drop every registered alarm.
    fn clear(&self) -> AppResult<()>;
}

/// Bring the registered alarm for a task in line with its current state.
///
/// Any previously scheduled wake-up for this id is cancelled first; a new
/// one is registered only if the reminder is set, lies in the future and
/// the task is not done. The id is passed separately because a freshly
/// inserted task may still carry the transient sentinel while the store
/// already assigned its row id. Returns true if an alarm was registered.
pub fn update_notification<R: AlarmRegistry>(
    registry: &R,
    task: &Task,
    task_id: i64,
) -> AppResult<bool> {
    if task_id <= 0 {
        // Nothing can be keyed by a transient id.
        return Ok(false);
    }

    registry.cancel(task_id)?;

    if !task.wants_notification(date::now()) {
        return Ok(false);
    }

    registry.register(&Alarm {
        task_id,
        fire_at: task.reminder_millis(),
        title: task.title.clone(),
    })?;
    Ok(true)
}

/// Re-register alarms for every stored task. Run after a restart, when the
/// registry state can no longer be trusted. Returns the number of alarms
/// scheduled.
pub fn reschedule_all<R: AlarmRegistry>(registry: &R, tasks: &[Task]) -> AppResult<usize> {
    registry.clear()?;

    let mut scheduled = 0;
    for task in tasks {
        if update_notification(registry, task, task.id)? {
            scheduled += 1;
        }
    }
    Ok(scheduled)
}

/// Drain and return the alarms that are due at `now`.
pub fn fire_due<R: AlarmRegistry>(registry: &R, now: DateTime<Local>) -> AppResult<Vec<Alarm>> {
    registry.take_due(now.timestamp_millis())
}
