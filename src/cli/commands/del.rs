use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::TaskStore;
use crate::errors::AppResult;
use crate::scheduler::AlarmRegistry;
use crate::scheduler::alarms::SqliteAlarms;
use crate::ui::messages::{success, warning};

/// Delete a task by id and cancel its reminder.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let store = TaskStore::open(&cfg.database)?;

        let deleted = store.delete_task(*id)?;
        if deleted == 0 {
            warning(format!("No task found with id {}", id));
            return Ok(());
        }

        let alarms = SqliteAlarms::open(&cfg.database)?;
        alarms.cancel(*id)?;

        store.audit("delete", &id.to_string(), &format!("Deleted task {}", id))?;

        success(format!("Deleted task #{}", id));
    }

    Ok(())
}
