use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// View or edit the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        hide_done,
    } = cmd
    {
        if let Some(hide) = hide_done {
            // Reload from disk so a --db override is not persisted.
            let mut on_disk = Config::load();
            on_disk.hide_done_tasks = *hide;
            on_disk.save()?;

            if *hide {
                success("Done tasks are now hidden in `list` (use --all to show them).");
            } else {
                success("Done tasks are now shown in `list`.");
            }
        }

        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("# {}", Config::config_file().display());
            print!("{}", yaml);
        }
    }

    Ok(())
}
