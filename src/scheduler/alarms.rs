//! SQLite-backed alarm registry.

use super::{Alarm, AlarmRegistry};
use crate::db::initialize;
use crate::errors::AppResult;
use rusqlite::{Connection, Result, Row, params};
use std::sync::{Mutex, MutexGuard};

pub struct SqliteAlarms {
    conn: Mutex<Connection>,
}

impl SqliteAlarms {
    /// Open the registry stored in the task database at the passed path.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        initialize::init_db(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory registry, used by tests.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize::init_db(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn map_alarm(row: &Row) -> Result<Alarm> {
    Ok(Alarm {
        task_id: row.get("task_id")?,
        fire_at: row.get("fire_at")?,
        title: row.get("title")?,
    })
}

impl AlarmRegistry for SqliteAlarms {
    fn register(&self, alarm: &Alarm) -> AppResult<()> {
        self.lock().execute(
            "INSERT OR REPLACE INTO alarms (task_id, fire_at, title)
             VALUES (?1, ?2, ?3)",
            params![alarm.task_id, alarm.fire_at, alarm.title],
        )?;
        Ok(())
    }

    fn cancel(&self, task_id: i64) -> AppResult<()> {
        self.lock()
            .execute("DELETE FROM alarms WHERE task_id = ?1", [task_id])?;
        Ok(())
    }

    fn take_due(&self, now_millis: i64) -> AppResult<Vec<Alarm>> {
        let conn = self.lock();

        let due: Vec<Alarm> = {
            let mut stmt = conn.prepare_cached(
                "SELECT task_id, fire_at, title FROM alarms
                 WHERE fire_at <= ?1
                 ORDER BY fire_at ASC",
            )?;
            let rows = stmt.query_map([now_millis], map_alarm)?;

            let mut out = Vec::new();
            for r in rows {
                out.push(r?);
            }
            out
        };

        // One-shot delivery: a fired alarm never fires again.
        conn.execute("DELETE FROM alarms WHERE fire_at <= ?1", [now_millis])?;

        Ok(due)
    }

    fn active(&self, task_id: i64) -> AppResult<Option<Alarm>> {
        let conn = self.lock();
        let mut stmt = conn
            .prepare_cached("SELECT task_id, fire_at, title FROM alarms WHERE task_id = ?1")?;

        match stmt.query_row([task_id], map_alarm) {
            Ok(alarm) => Ok(Some(alarm)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> AppResult<()> {
        self.lock().execute("DELETE FROM alarms", [])?;
        Ok(())
    }
}
