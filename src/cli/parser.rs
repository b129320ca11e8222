use clap::{Parser, Subcommand};

/// Command-line interface definition for simplistic
/// CLI application to manage a single to-do list with SQLite
#[derive(Parser)]
#[command(
    name = "simplistic",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple to-do list CLI: tasks, notes and reminders backed by SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Add a new task at the end of the list
    Add {
        /// Title of the task
        title: String,

        /// Free-text notes attached to the task
        #[arg(long, help = "Free-text notes attached to the task")]
        notes: Option<String>,

        /// Reminder timestamp.
        ///
        /// Supported formats:
        /// - YYYY-MM-DD HH:MM    → exact local timestamp
        /// - tomorrow            → tomorrow at 09:00
        #[arg(
            long = "remind",
            value_name = "WHEN",
            help = "Reminder: 'YYYY-MM-DD HH:MM' or 'tomorrow' (tomorrow 09:00)"
        )]
        remind: Option<String>,
    },

    /// List tasks in their manual order
    List {
        /// Also show done tasks when the hide-done preference is active
        #[arg(long, help = "Show done tasks even if they are hidden by default")]
        all: bool,
    },

    /// Edit a task's title, notes or reminder
    Edit {
        /// Id of the task to edit
        id: i64,

        /// New title
        #[arg(long, help = "Replace the task title")]
        title: Option<String>,

        /// New notes
        #[arg(long, help = "Replace the task notes")]
        notes: Option<String>,

        /// New reminder ('YYYY-MM-DD HH:MM' or 'tomorrow')
        #[arg(
            long = "remind",
            value_name = "WHEN",
            conflicts_with = "no_remind",
            help = "Set the reminder: 'YYYY-MM-DD HH:MM' or 'tomorrow'"
        )]
        remind: Option<String>,

        /// Remove the reminder
        #[arg(long = "no-remind", help = "Remove the reminder")]
        no_remind: bool,
    },

    /// Mark a task as done (cancels its reminder)
    Done {
        /// Id of the task
        id: i64,

        /// Mark the task as not done again
        #[arg(long, help = "Mark the task as not done again")]
        undo: bool,
    },

    /// Move a task to a new position in the list
    Move {
        /// Id of the task to move
        id: i64,

        /// Target position (1-based, as shown by `list`)
        position: usize,
    },

    /// Delete a task by id
    Del {
        /// Id of the task to delete
        id: i64,
    },

    /// Delete ALL tasks and reminders
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Fire reminders that are due now
    Due,

    /// Re-register reminders for every stored task (run after a restart)
    Reschedule,

    /// Manage the configuration file
    Config {
        /// Print the current configuration
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Hide done tasks in `list` by default
        #[arg(
            long = "hide-done",
            value_name = "BOOL",
            help = "Hide done tasks in `list` by default (true/false)"
        )]
        hide_done: Option<bool>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
