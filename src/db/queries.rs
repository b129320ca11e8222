use crate::errors::AppResult;
use crate::models::detail::Detail;
use crate::models::task::Task;
use crate::utils::date;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Task> {
    let duedate: i64 = row.get("duedate")?;
    let done: i64 = row.get("done")?;

    let details_json: Option<String> = row.get("details")?;
    let details = Detail::from_json(details_json.as_deref().unwrap_or("")).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        list_position: row.get("listpos")?,
        reminder: date::from_millis(duedate),
        done: done == 1,
        details,
    })
}

/// Insert a transient task and return the new row id.
pub fn insert_task(conn: &Connection, task: &Task) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO tasks (title, listpos, duedate, done, details)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            task.title,
            task.list_position,
            task.reminder_millis(),
            if task.done { 1 } else { 0 },
            task.details.to_json()?,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update an existing task by id. Returns the number of updated rows.
pub fn update_task(conn: &Connection, task: &Task) -> AppResult<usize> {
    let count = conn.execute(
        "UPDATE tasks
         SET title = ?1, listpos = ?2, duedate = ?3, done = ?4, details = ?5
         WHERE id = ?6",
        params![
            task.title,
            task.list_position,
            task.reminder_millis(),
            if task.done { 1 } else { 0 },
            task.details.to_json()?,
            task.id,
        ],
    )?;
    Ok(count)
}

pub fn select_task(conn: &Connection, id: i64) -> AppResult<Option<Task>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, title, listpos, duedate, done, details FROM tasks WHERE id = ?1",
    )?;

    match stmt.query_row([id], map_row) {
        Ok(task) => Ok(Some(task)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All tasks, ordered by list position ascending.
pub fn select_all(conn: &Connection) -> AppResult<Vec<Task>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, title, listpos, duedate, done, details
         FROM tasks
         ORDER BY listpos ASC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Delete a task by id. Returns the number of deleted rows.
pub fn delete_task(conn: &Connection, id: i64) -> AppResult<usize> {
    let count = conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?;
    Ok(count)
}
