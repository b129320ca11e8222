use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::TaskStore;
use crate::errors::AppResult;
use crate::scheduler;
use crate::scheduler::alarms::SqliteAlarms;
use crate::ui::messages::{info, notify};
use crate::utils::date;

/// Fire the reminders that are due now. Each fired alarm produces exactly
/// one notification line and is removed from the registry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Due) {
        let alarms = SqliteAlarms::open(&cfg.database)?;

        let due = scheduler::fire_due(&alarms, date::now())?;

        if due.is_empty() {
            info("No reminders due.");
            return Ok(());
        }

        for alarm in &due {
            notify(format!("Reminder: {} (task #{})", alarm.title, alarm.task_id));
        }
        info("Open the task list with: simplistic list");

        let store = TaskStore::open(&cfg.database)?;
        store.audit("due", "alarms", &format!("Fired {} reminder(s)", due.len()))?;
    }

    Ok(())
}
