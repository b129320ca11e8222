use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::TaskStore;
use crate::errors::{AppError, AppResult};
use crate::models::detail::Detail;
use crate::models::task::Task;
use crate::scheduler;
use crate::scheduler::alarms::SqliteAlarms;
use crate::ui::messages::success;
use crate::utils::date;

/// Add a new task at the end of the list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        notes,
        remind,
    } = cmd
    {
        //
        // 1. Validate the title (the store itself accepts anything)
        //
        if title.trim().is_empty() {
            return Err(AppError::EmptyTitle);
        }

        //
        // 2. Parse the reminder (optional)
        //
        let reminder = match remind {
            Some(s) => Some(
                date::parse_reminder(s).ok_or_else(|| AppError::InvalidReminder(s.clone()))?,
            ),
            None => None,
        };

        //
        // 3. Build the task, appended at the end of the list
        //
        let store = TaskStore::open(&cfg.database)?;
        let next_position = store.get_all()?.len() as i32;

        let mut task = Task::new(title.trim());
        task.list_position = next_position;
        task.reminder = reminder;
        if let Some(n) = notes {
            task.details = Detail::new(n.clone());
        }

        //
        // 4. Persist and schedule
        //
        let id = store.save(&task)?;

        let alarms = SqliteAlarms::open(&cfg.database)?;
        let scheduled = scheduler::update_notification(&alarms, &task, id)?;

        store.audit("add", &id.to_string(), &format!("Added task '{}'", task.title))?;

        if scheduled {
            let when = task.reminder.as_ref().map(date::format_reminder);
            success(format!(
                "Added task #{} '{}' (reminder at {})",
                id,
                task.title,
                when.unwrap_or_default()
            ));
        } else {
            success(format!("Added task #{} '{}'", id, task.title));
        }
    }

    Ok(())
}
