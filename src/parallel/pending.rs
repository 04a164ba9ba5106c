use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use parking_lot::{Condvar, Mutex};

/// Counter of documents submitted but not yet indexed.
///
/// Works like a reusable wait-group: `wait` returns once the count reaches
/// zero, and later `add` calls start a new round.
#[derive(Debug, Default)]
pub struct PendingCounter {
    count: AtomicUsize,
    lock: Mutex<()>,
    zero: Condvar,
}

impl PendingCounter {
    pub fn new() -> Self {
        PendingCounter::default()
    }

    pub fn add(&self, n: usize) {
        self.count.fetch_add(n, Ordering::AcqRel);
    }

    pub fn done(&self) {
        let previous = self.count.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(previous > 0, "pending counter underflow");
        if previous == 1 {
            // Taking the lock orders this notify after any waiter's check.
            let _guard = self.lock.lock();
            self.zero.notify_all();
        }
    }

    pub fn get(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }

    pub fn wait(&self) {
        let mut guard = self.lock.lock();
        while self.get() != 0 {
            self.zero.wait(&mut guard);
        }
    }

    /// Returns `true` if the counter reached zero before `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut guard = self.lock.lock();
        while self.get() != 0 {
            if self.zero.wait_until(&mut guard, deadline).timed_out() {
                return self.get() == 0;
            }
        }
        true
    }
}
