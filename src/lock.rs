//! Mutual exclusion lock guarding every task-context call into the vendor stack
//!
//! The lock is shared with peer subsystems outside this crate which also call
//! into the stack from task context. Rules the callers follow:
//!
//! * every call into the stack's task-level entry points happens while holding
//!   the lock,
//! * the lock is held for the minimal span needed for one call,
//! * no holder blocks while holding it,
//! * the lock is never acquired from interrupt context.
//!
//! Because no holder blocks while holding the lock, acquisition from the
//! deferred worker is expected to always succeed; the worker treats a failed
//! acquisition as an unrecoverable error.

use crate::error::Error;
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(test)]
use mockall::*;

/// Capability of mutually excluding task-context callers of the vendor stack
#[cfg_attr(test, automock)]
pub trait StackLock: Sync {
    /// Tries to acquire the lock without blocking
    ///
    /// Returns [`Error::WouldBlock`] if another task-context caller currently
    /// holds the lock.
    fn acquire(&self) -> Result<(), Error>;

    /// Releases the lock acquired by [`acquire`](StackLock::acquire)
    fn release(&self);
}

/// Type of the stack lock used in this build
///
/// This type must implement the [`StackLock`] trait.
#[cfg(not(test))]
pub type Lock = AtomicStackLock;
#[cfg(test)]
pub type Lock = MockStackLock;

/// Lock implementation based on an atomic ownership flag
///
/// # Examples
///
/// ```
/// use nrf_multiproto::lock::{AtomicStackLock, StackLock};
///
/// static LOCK: AtomicStackLock = AtomicStackLock::new();
///
/// assert!(LOCK.acquire().is_ok());
/// assert!(LOCK.acquire().is_err());
/// LOCK.release();
/// assert!(LOCK.acquire().is_ok());
/// ```
pub struct AtomicStackLock {
    held: AtomicBool,
}

impl AtomicStackLock {
    /// Creates a released lock
    pub const fn new() -> Self {
        Self {
            held: AtomicBool::new(false),
        }
    }
}

impl Default for AtomicStackLock {
    fn default() -> Self {
        Self::new()
    }
}

impl StackLock for AtomicStackLock {
    fn acquire(&self) -> Result<(), Error> {
        self.held
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .map_or(Err(Error::WouldBlock), |_| Ok(()))
    }

    fn release(&self) {
        let was_held = self
            .held
            .compare_exchange(true, false, Ordering::Release, Ordering::Relaxed);
        debug_assert!(was_held.is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_released_lock() {
        let lock = AtomicStackLock::new();

        assert_eq!(lock.acquire(), Ok(()));
    }

    #[test]
    fn test_acquire_held_lock_fails() {
        let lock = AtomicStackLock::new();

        assert_eq!(lock.acquire(), Ok(()));
        assert_eq!(lock.acquire(), Err(Error::WouldBlock));
    }

    #[test]
    fn test_release_makes_lock_available_again() {
        let lock = AtomicStackLock::new();

        assert_eq!(lock.acquire(), Ok(()));
        lock.release();
        assert_eq!(lock.acquire(), Ok(()));
    }

    #[test]
    fn test_mutual_exclusion_under_concurrent_stress() {
        use core::sync::atomic::AtomicUsize;

        static LOCK: AtomicStackLock = AtomicStackLock::new();
        static IN_SECTION: AtomicUsize = AtomicUsize::new(0);

        let threads: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    for _ in 0..1000 {
                        while LOCK.acquire().is_err() {
                            std::thread::yield_now();
                        }

                        let concurrent = IN_SECTION.fetch_add(1, Ordering::SeqCst);
                        assert_eq!(concurrent, 0);
                        IN_SECTION.fetch_sub(1, Ordering::SeqCst);

                        LOCK.release();
                    }
                })
            })
            .collect();

        for thread in threads {
            thread.join().unwrap();
        }
    }
}
