//! Scheduling invariants: a task has an active alarm exactly when its
//! reminder is set, in the future and the task is not done.

use chrono::{Duration, Local};
use simplistic::models::task::Task;
use simplistic::scheduler::alarms::SqliteAlarms;
use simplistic::scheduler::{self, Alarm, AlarmRegistry};

fn registry() -> SqliteAlarms {
    SqliteAlarms::open_in_memory().expect("open in-memory registry")
}

fn task_with_reminder(id: i64, title: &str, offset: Duration) -> Task {
    let mut task = Task::new(title);
    task.id = id;
    task.reminder = Some(Local::now() + offset);
    task
}

#[test]
fn future_reminder_registers_exactly_one_alarm() {
    let registry = registry();
    let task = task_with_reminder(1, "Buy milk", Duration::hours(1));

    let scheduled = scheduler::update_notification(&registry, &task, task.id).expect("update");
    assert!(scheduled);

    let alarm = registry.active(1).expect("query").expect("alarm active");
    assert_eq!(alarm.task_id, 1);
    assert_eq!(alarm.fire_at, task.reminder_millis());
    assert_eq!(alarm.title, "Buy milk");
}

#[test]
fn update_replaces_the_previous_alarm_for_the_same_id() {
    let registry = registry();

    let first = task_with_reminder(1, "Buy milk", Duration::hours(1));
    scheduler::update_notification(&registry, &first, first.id).expect("update");

    let second = task_with_reminder(1, "Buy milk", Duration::hours(2));
    scheduler::update_notification(&registry, &second, second.id).expect("update");

    let alarm = registry.active(1).expect("query").expect("alarm active");
    assert_eq!(alarm.fire_at, second.reminder_millis());
}

#[test]
fn past_reminder_cancels_without_rescheduling() {
    let registry = registry();

    // A previously scheduled alarm exists, then the reminder moves into
    // the past (e.g. the task was edited after the fact).
    let future = task_with_reminder(1, "Buy milk", Duration::hours(1));
    scheduler::update_notification(&registry, &future, future.id).expect("update");

    let past = task_with_reminder(1, "Buy milk", Duration::hours(-1));
    let scheduled = scheduler::update_notification(&registry, &past, past.id).expect("update");

    assert!(!scheduled);
    assert!(registry.active(1).expect("query").is_none());
}

#[test]
fn done_task_never_keeps_an_alarm() {
    let registry = registry();

    let mut task = task_with_reminder(1, "Buy milk", Duration::hours(1));
    scheduler::update_notification(&registry, &task, task.id).expect("update");

    task.done = true;
    let scheduled = scheduler::update_notification(&registry, &task, task.id).expect("update");

    assert!(!scheduled);
    assert!(registry.active(1).expect("query").is_none());
}

#[test]
fn absent_reminder_means_no_alarm() {
    let registry = registry();

    let mut task = Task::new("Buy milk");
    task.id = 1;

    let scheduled = scheduler::update_notification(&registry, &task, task.id).expect("update");
    assert!(!scheduled);
    assert!(registry.active(1).expect("query").is_none());
}

#[test]
fn transient_id_is_a_guarded_noop() {
    let registry = registry();

    let task = task_with_reminder(Task::TRANSIENT, "Unsaved", Duration::hours(1));
    let scheduled =
        scheduler::update_notification(&registry, &task, Task::TRANSIENT).expect("update");

    assert!(!scheduled);
}

#[test]
fn fire_due_delivers_each_alarm_once() {
    let registry = registry();

    registry
        .register(&Alarm {
            task_id: 1,
            fire_at: (Local::now() - Duration::minutes(5)).timestamp_millis(),
            title: "Buy milk".to_string(),
        })
        .expect("register");
    registry
        .register(&Alarm {
            task_id: 2,
            fire_at: (Local::now() + Duration::hours(1)).timestamp_millis(),
            title: "Walk the dog".to_string(),
        })
        .expect("register");

    let fired = scheduler::fire_due(&registry, Local::now()).expect("fire");
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].title, "Buy milk");

    // One-shot: the fired alarm is gone, the future one stays.
    let fired_again = scheduler::fire_due(&registry, Local::now()).expect("fire");
    assert!(fired_again.is_empty());
    assert!(registry.active(2).expect("query").is_some());
}

#[test]
fn reschedule_all_rebuilds_the_registry() {
    let registry = registry();

    // Stale alarm for a task that no longer exists.
    registry
        .register(&Alarm {
            task_id: 99,
            fire_at: (Local::now() + Duration::hours(1)).timestamp_millis(),
            title: "Deleted task".to_string(),
        })
        .expect("register");

    let future = task_with_reminder(1, "Buy milk", Duration::hours(1));
    let past = task_with_reminder(2, "Walk the dog", Duration::hours(-1));
    let mut done = task_with_reminder(3, "Water plants", Duration::hours(1));
    done.done = true;
    let plain = {
        let mut t = Task::new("Read a book");
        t.id = 4;
        t
    };

    let scheduled =
        scheduler::reschedule_all(&registry, &[future, past, done, plain]).expect("reschedule");

    assert_eq!(scheduled, 1);
    assert!(registry.active(1).expect("query").is_some());
    assert!(registry.active(2).expect("query").is_none());
    assert!(registry.active(3).expect("query").is_none());
    assert!(registry.active(4).expect("query").is_none());
    assert!(registry.active(99).expect("query").is_none());
}
