//! Background execution of store operations.
//!
//! A job runs to completion on a worker thread and its result is handed
//! back over a channel; the subscriber receives it on its own thread via
//! [`Subscription::wait`]. Unsubscribing only suppresses delivery, it
//! never aborts a write that is already in flight.

use crate::errors::AppResult;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread;

pub struct Subscription<T> {
    rx: Receiver<AppResult<T>>,
    unsubscribed: Arc<AtomicBool>,
}

/// Run the passed job on a new worker thread.
pub fn spawn<T, F>(job: F) -> Subscription<T>
where
    T: Send + 'static,
    F: FnOnce() -> AppResult<T> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let unsubscribed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&unsubscribed);

    thread::spawn(move || {
        let result = job();
        if !flag.load(Ordering::SeqCst) {
            let _ = tx.send(result);
        }
    });

    Subscription { rx, unsubscribed }
}

impl<T> Subscription<T> {
    /// Block until the job result arrives and deliver it on the calling
    /// thread. Returns None if the subscription was cancelled.
    pub fn wait(self) -> Option<AppResult<T>> {
        if self.is_unsubscribed() {
            return None;
        }
        self.rx.recv().ok()
    }

    /// Stop delivery of the result. The job itself keeps running.
    pub fn unsubscribe(&self) {
        self.unsubscribed.store(true, Ordering::SeqCst);
    }

    pub fn is_unsubscribed(&self) -> bool {
        self.unsubscribed.load(Ordering::SeqCst)
    }
}
