use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::TaskStore;
use crate::errors::{AppError, AppResult};
use crate::scheduler;
use crate::scheduler::alarms::SqliteAlarms;
use crate::ui::messages::success;

/// Toggle the done flag of a task. Marking a task done cancels its
/// scheduled reminder; undoing re-registers it if still in the future.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Done { id, undo } = cmd {
        let store = TaskStore::open(&cfg.database)?;

        let mut task = store
            .get_task(*id)?
            .ok_or(AppError::TaskNotFound(*id))?;

        task.done = !undo;
        store.save(&task)?;

        let alarms = SqliteAlarms::open(&cfg.database)?;
        scheduler::update_notification(&alarms, &task, task.id)?;

        if task.done {
            store.audit("done", &id.to_string(), &format!("Completed task '{}'", task.title))?;
            success(format!("Marked task #{} '{}' as done", task.id, task.title));
        } else {
            store.audit("undone", &id.to_string(), &format!("Reopened task '{}'", task.title))?;
            success(format!("Marked task #{} '{}' as not done", task.id, task.title));
        }
    }

    Ok(())
}
