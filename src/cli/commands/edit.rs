use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::TaskStore;
use crate::errors::{AppError, AppResult};
use crate::scheduler;
use crate::scheduler::alarms::SqliteAlarms;
use crate::ui::messages::success;
use crate::utils::date;

/// Edit the title, notes or reminder of an existing task.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        notes,
        remind,
        no_remind,
    } = cmd
    {
        let store = TaskStore::open(&cfg.database)?;

        let mut task = store
            .get_task(*id)?
            .ok_or(AppError::TaskNotFound(*id))?;

        if let Some(t) = title {
            if t.trim().is_empty() {
                return Err(AppError::EmptyTitle);
            }
            task.title = t.trim().to_string();
        }

        if let Some(n) = notes {
            task.details.notes = n.clone();
        }

        if *no_remind {
            task.reminder = None;
        } else if let Some(s) = remind {
            let parsed =
                date::parse_reminder(s).ok_or_else(|| AppError::InvalidReminder(s.clone()))?;
            task.reminder = Some(parsed);
        }

        store.save(&task)?;

        // Keep the registered alarm in line with the edited state.
        let alarms = SqliteAlarms::open(&cfg.database)?;
        scheduler::update_notification(&alarms, &task, task.id)?;

        store.audit("edit", &id.to_string(), &format!("Edited task '{}'", task.title))?;

        success(format!("Updated task #{} '{}'", task.id, task.title));
    }

    Ok(())
}
