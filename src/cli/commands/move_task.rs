use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::TaskStore;
use crate::errors::{AppError, AppResult};
use crate::models::task::renumber_positions;
use crate::ui::messages::success;
use std::sync::Arc;

/// Move a task to a new position. The whole list is renumbered to stay
/// contiguous and saved back through the bulk path.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Move { id, position } = cmd {
        let store = Arc::new(TaskStore::open(&cfg.database)?);

        let mut tasks = store.get_all()?;

        let from = tasks
            .iter()
            .position(|t| t.id == *id)
            .ok_or(AppError::TaskNotFound(*id))?;

        if *position < 1 || *position > tasks.len() {
            return Err(AppError::InvalidListPosition(*position));
        }
        let to = position - 1;

        let task = tasks.remove(from);
        let title = task.title.clone();
        tasks.insert(to, task);
        renumber_positions(&mut tasks);

        match Arc::clone(&store).save_all_async(tasks).wait() {
            Some(result) => result?,
            None => return Ok(()),
        }

        store.audit(
            "move",
            &id.to_string(),
            &format!("Moved task '{}' to position {}", title, position),
        )?;

        success(format!("Moved task #{} '{}' to position {}", id, title, position));
    }

    Ok(())
}
