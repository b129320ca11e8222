use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::TaskStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let store = TaskStore::open(&cfg.database)?;

        let rows = store.read_log()?;
        if rows.is_empty() {
            println!("The internal log is empty.");
            return Ok(());
        }

        for (date, operation, message) in rows {
            println!("{}  [{}]  {}", date, operation, message);
        }
    }

    Ok(())
}
