//! Library-level tests for the task store contract.

use simplistic::db::store::TaskStore;
use simplistic::errors::AppError;
use simplistic::models::detail::Detail;
use simplistic::models::task::{Task, renumber_positions};
use std::sync::Arc;

fn store() -> TaskStore {
    TaskStore::open_in_memory().expect("open in-memory store")
}

#[test]
fn save_assigns_positive_id_to_transient_task() {
    let store = store();

    let task = Task::new("Buy milk");
    assert!(task.is_transient());

    let id = store.save(&task).expect("save");
    assert!(id > 0);
}

#[test]
fn save_updates_existing_task_without_changing_id() {
    let store = store();

    let mut task = Task::new("Buy milk");
    task.id = store.save(&task).expect("insert");

    task.title = "Buy oat milk".to_string();
    task.details = Detail::new("the barista kind");
    let id = store.save(&task).expect("update");
    assert_eq!(id, task.id);

    let loaded = store
        .get_task(task.id)
        .expect("get")
        .expect("task exists");
    assert_eq!(loaded.title, "Buy oat milk");
    assert_eq!(loaded.details.notes, "the barista kind");
}

#[test]
fn save_with_unknown_id_is_an_error() {
    let store = store();

    let mut task = Task::new("Ghost");
    task.id = 42;

    match store.save(&task) {
        Err(AppError::TaskNotFound(42)) => {}
        other => panic!("expected TaskNotFound(42), got {:?}", other.map(|_| ())),
    }
}

#[test]
fn get_task_rejects_non_positive_ids() {
    let store = store();

    assert!(matches!(store.get_task(0), Err(AppError::InvalidId(0))));
    assert!(matches!(store.get_task(-1), Err(AppError::InvalidId(-1))));
}

#[test]
fn get_task_returns_none_for_missing_row() {
    let store = store();
    assert!(store.get_task(999).expect("get").is_none());
}

#[test]
fn get_all_orders_by_list_position() {
    let store = store();

    for (title, pos) in [("third", 2), ("first", 0), ("second", 1)] {
        let mut task = Task::new(title);
        task.list_position = pos;
        store.save(&task).expect("save");
    }

    let titles: Vec<String> = store
        .get_all()
        .expect("get_all")
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[test]
fn delete_transient_id_is_a_noop() {
    let store = store();
    let deleted = store.delete_task(Task::TRANSIENT).expect("delete");
    assert_eq!(deleted, 0);
}

#[test]
fn delete_existing_task_reports_one_row() {
    let store = store();

    let id = store.save(&Task::new("Buy milk")).expect("save");
    assert_eq!(store.delete_task(id).expect("delete"), 1);
    assert!(store.get_task(id).expect("get").is_none());
}

#[test]
fn delete_all_resets_the_table() {
    let store = store();

    store.save(&Task::new("one")).expect("save");
    store.save(&Task::new("two")).expect("save");
    store.delete_all().expect("delete_all");

    assert!(store.get_all().expect("get_all").is_empty());

    // The table is recreated, so new saves start over.
    let id = store.save(&Task::new("three")).expect("save");
    assert!(id > 0);
}

#[test]
fn save_all_rejects_an_empty_batch() {
    let store = store();
    assert!(matches!(store.save_all(&[]), Err(AppError::EmptyBatch)));
}

#[test]
fn save_all_persists_a_reordered_list() {
    let store = store();

    for title in ["a", "b", "c"] {
        let mut task = Task::new(title);
        task.list_position = store.get_all().expect("count").len() as i32;
        store.save(&task).expect("save");
    }

    let mut tasks = store.get_all().expect("get_all");
    tasks.reverse();
    renumber_positions(&mut tasks);
    store.save_all(&tasks).expect("save_all");

    let titles: Vec<String> = store
        .get_all()
        .expect("get_all")
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, ["c", "b", "a"]);
}

#[test]
fn save_all_rolls_back_the_whole_batch_on_failure() {
    let store = store();

    let mut kept = Task::new("kept");
    kept.id = store.save(&kept).expect("insert");

    let mut renamed = kept.clone();
    renamed.title = "renamed".to_string();

    let mut missing = Task::new("missing");
    missing.id = 77;

    let result = store.save_all(&[renamed, missing]);
    assert!(matches!(result, Err(AppError::TaskNotFound(77))));

    // The first update must not survive the failed batch.
    let loaded = store
        .get_task(kept.id)
        .expect("get")
        .expect("task exists");
    assert_eq!(loaded.title, "kept");
}

#[test]
fn reminder_round_trips_through_the_duedate_column() {
    use chrono::{Local, TimeZone};

    let store = store();

    let mut task = Task::new("Call mom");
    task.reminder = Local.timestamp_millis_opt(4_102_444_800_000).single();
    task.id = store.save(&task).expect("save");

    let loaded = store
        .get_task(task.id)
        .expect("get")
        .expect("task exists");
    assert_eq!(loaded.reminder_millis(), 4_102_444_800_000);
}

#[test]
fn get_all_async_delivers_on_the_calling_thread() {
    let store = Arc::new(store());
    store.save(&Task::new("Buy milk")).expect("save");

    let tasks = store
        .get_all_async()
        .wait()
        .expect("delivered")
        .expect("no error");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Buy milk");
}

#[test]
fn save_all_async_reports_errors() {
    let store = Arc::new(store());

    let mut missing = Task::new("missing");
    missing.id = 5;

    let result = store
        .save_all_async(vec![missing])
        .wait()
        .expect("delivered");
    assert!(matches!(result, Err(AppError::TaskNotFound(5))));
}

#[test]
fn unsubscribe_suppresses_delivery() {
    let store = Arc::new(store());
    store.save(&Task::new("Buy milk")).expect("save");

    let subscription = store.get_all_async();
    subscription.unsubscribe();
    assert!(subscription.is_unsubscribed());
    assert!(subscription.wait().is_none());
}
