//! The deferred worker servicing the stack's low-priority processing
//!
//! The worker is the only task context allowed to call the stack's
//! low-priority processing entry point, which prevents re-entrancy races in
//! the vendor library. It is created exactly once, by the init sequencer,
//! after the rest of the bring-up succeeded, and runs for the lifetime of the
//! process on whatever task context the host gives it.

use crate::lock;
use crate::lock::StackLock;
use crate::signal::PendingSignal;
use crate::stack;
use crate::stack::traits::RadioStack;

/// Handle of the deferred worker loop
///
/// Move-only: the init sequencer constructs it once and hands it to the
/// caller, who runs [`run`](Worker::run) on a dedicated task.
pub struct Worker<'a> {
    signal: &'a PendingSignal,
    lock: &'a lock::Lock,
    stack: &'a stack::RadioStack,
}

impl<'a> Worker<'a> {
    pub(crate) fn new(
        signal: &'a PendingSignal,
        lock: &'a lock::Lock,
        stack: &'a stack::RadioStack,
    ) -> Self {
        Self {
            signal,
            lock,
            stack,
        }
    }

    /// Performs one worker iteration
    ///
    /// Suspends until the wake signal is raised, then performs exactly one
    /// bounded low-priority processing call under the stack lock. The stack
    /// drains whatever is pending at that moment; which hardware event caused
    /// the wake is not meaningful.
    ///
    /// Acquiring the lock is expected to always succeed, because no lock
    /// holder blocks while holding it. A failed acquisition means the locking
    /// protocol was violated and the stack state can no longer be trusted, so
    /// the worker halts instead of continuing.
    pub fn run_once(&self) {
        self.signal.wait();

        let acquired = self.lock.acquire();
        assert!(
            acquired.is_ok(),
            "deferred worker could not acquire the stack lock"
        );

        self.stack.process_low_priority_work();
        self.lock.release();
    }

    /// Runs the worker loop forever
    ///
    /// The loop's only suspension point is the wake signal wait inside
    /// [`run_once`](Worker::run_once). There is no shutdown path; the worker
    /// lives as long as the process.
    pub fn run(&self) -> ! {
        info!("deferred worker running");

        loop {
            self.run_once();
        }
    }
}
