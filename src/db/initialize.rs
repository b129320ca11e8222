use crate::errors::AppResult;
use rusqlite::Connection;

/// The tasks table. Upgrades are no-ops by design: structural changes are
/// expected to live inside the schema-less `details` JSON blob, so there is
/// no migration engine.
pub const SQL_CREATE_TASKS: &str = r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        title    TEXT NOT NULL,
        listpos  INTEGER DEFAULT 0,
        duedate  INTEGER DEFAULT 0,
        done     INTEGER DEFAULT 0,
        details  TEXT
    );
"#;

pub const SQL_DROP_TASKS: &str = "DROP TABLE IF EXISTS tasks;";

/// One row per scheduled reminder, keyed by the full task id.
pub const SQL_CREATE_ALARMS: &str = r#"
    CREATE TABLE IF NOT EXISTS alarms (
        task_id  INTEGER PRIMARY KEY,
        fire_at  INTEGER NOT NULL,
        title    TEXT NOT NULL
    );
"#;

pub const SQL_CREATE_LOG: &str = r#"
    CREATE TABLE IF NOT EXISTS log (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        date      TEXT NOT NULL,
        operation TEXT NOT NULL,
        target    TEXT DEFAULT '',
        message   TEXT NOT NULL
    );
"#;

/// Initialize the database schema. Idempotent; the store runs this on every
/// open so a fresh database is usable without a separate setup step.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(&format!(
        "{SQL_CREATE_TASKS}{SQL_CREATE_ALARMS}{SQL_CREATE_LOG}"
    ))?;
    Ok(())
}
