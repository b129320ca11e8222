use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::TaskStore;
use crate::errors::AppResult;
use crate::models::task::Task;
use crate::utils::date;
use std::sync::Arc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { all } = cmd {
        // The list screen loads in the background and renders on the
        // calling thread, like every other consumer of the store.
        let store = Arc::new(TaskStore::open(&cfg.database)?);

        let tasks = match store.get_all_async().wait() {
            Some(result) => result?,
            None => return Ok(()),
        };

        let hide_done = cfg.hide_done_tasks && !all;

        // Positions are counted over the full ordered list, so the numbers
        // stay valid as `move` targets even while done tasks are hidden.
        let visible: Vec<(usize, &Task)> = tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| !(hide_done && t.done))
            .collect();

        if visible.is_empty() {
            println!("No tasks.");
            return Ok(());
        }

        let hidden = tasks.len() - visible.len();

        println!("{:>4}  {:>5}  {:^4}  {:<32}  {}", "POS", "ID", "DONE", "TITLE", "REMINDER");
        for (index, task) in visible {
            print_task(index + 1, task);
        }

        if hidden > 0 {
            println!("({hidden} done task(s) hidden — use --all to show them)");
        }
    }

    Ok(())
}

fn print_task(position: usize, task: &Task) {
    let done_mark = if task.done { "✔" } else { " " };
    let reminder = task
        .reminder
        .as_ref()
        .map(date::format_reminder)
        .unwrap_or_default();

    println!(
        "{:>4}  {:>5}  {:^4}  {:<32}  {}",
        position, task.id, done_mark, task.title, reminder
    );

    if !task.details.notes.is_empty() {
        println!("{:>4}  {:>5}  {:^4}  └ {}", "", "", "", task.details.notes);
    }
}
