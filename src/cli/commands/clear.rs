use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::TaskStore;
use crate::errors::AppResult;
use crate::scheduler::AlarmRegistry;
use crate::scheduler::alarms::SqliteAlarms;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Delete every task and every registered reminder.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !yes && !ask_confirmation("Delete ALL tasks? This action is irreversible.") {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = TaskStore::open(&cfg.database)?;
        store.delete_all()?;

        let alarms = SqliteAlarms::open(&cfg.database)?;
        alarms.clear()?;

        store.audit("clear", "tasks", "Deleted all tasks")?;

        success("All tasks have been deleted.");
    }

    Ok(())
}
