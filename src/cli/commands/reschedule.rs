use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::TaskStore;
use crate::errors::AppResult;
use crate::scheduler;
use crate::scheduler::alarms::SqliteAlarms;
use crate::ui::messages::success;

/// Re-register the reminder alarms for every stored task. The registry is
/// rebuilt from scratch, so stale alarms of deleted tasks disappear too.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Reschedule) {
        let store = TaskStore::open(&cfg.database)?;
        let tasks = store.get_all()?;

        let alarms = SqliteAlarms::open(&cfg.database)?;
        let scheduled = scheduler::reschedule_all(&alarms, &tasks)?;

        store.audit(
            "reschedule",
            "alarms",
            &format!("Rescheduled {} reminder(s)", scheduled),
        )?;

        success(format!(
            "Rescheduled {} reminder(s) for {} task(s).",
            scheduled,
            tasks.len()
        ));
    }

    Ok(())
}
