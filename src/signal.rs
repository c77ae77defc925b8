//! Count-capped wake signal connecting the relay IRQ with the deferred worker
//!
//! The relay IRQ raises the signal, the worker consumes it. Redundant raises
//! collapse into a single pending wake, so a burst of hardware events costs a
//! bounded number of worker iterations. A raise is never lost between being
//! raised and being observed (at-least-once delivery), but the signal does not
//! count how many raises produced one wake.

use core::sync::atomic::{AtomicU32, Ordering};

/// A wake signal raised from IRQ context and awaited by a single task
///
/// # Examples
///
/// ```
/// use nrf_multiproto::signal::PendingSignal;
///
/// static SIGNAL: PendingSignal = PendingSignal::new();
///
/// SIGNAL.raise();
/// SIGNAL.raise();
///
/// // Both raises collapsed into one pending wake
/// SIGNAL.wait();
/// assert!(!SIGNAL.is_raised());
/// ```
pub struct PendingSignal {
    pending: AtomicU32,
}

impl PendingSignal {
    /// Creates a signal with no pending wake
    pub const fn new() -> Self {
        Self {
            pending: AtomicU32::new(0),
        }
    }

    /// Raises the signal without blocking
    ///
    /// Callable from any context, including the relay IRQ. Raising an already
    /// raised signal has no additional effect.
    pub fn raise(&self) {
        self.pending.store(1, Ordering::Release);

        // Wake a waiter suspended in WFE
        #[cfg(feature = "nrf52840")]
        cortex_m::asm::sev();
    }

    /// Suspends the caller until the signal is raised, then consumes the wake
    ///
    /// Only the deferred worker calls this; it is its sole suspension point.
    pub fn wait(&self) {
        loop {
            if self.pending.swap(0, Ordering::Acquire) != 0 {
                return;
            }

            Self::pause();
        }
    }

    /// Checks whether a wake is pending without consuming it
    pub fn is_raised(&self) -> bool {
        self.pending.load(Ordering::Acquire) != 0
    }

    #[cfg(feature = "nrf52840")]
    fn pause() {
        // WFE returns on any event, including the SEV from raise(); spurious
        // returns only loop once more
        cortex_m::asm::wfe();
    }

    #[cfg(feature = "mocked_platform")]
    fn pause() {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_signal_is_not_raised() {
        let signal = PendingSignal::new();

        assert!(!signal.is_raised());
    }

    #[test]
    fn test_wait_consumes_a_single_raise() {
        let signal = PendingSignal::new();

        signal.raise();
        assert!(signal.is_raised());

        signal.wait();
        assert!(!signal.is_raised());
    }

    #[test]
    fn test_burst_of_raises_collapses_to_one_wake() {
        let signal = PendingSignal::new();

        signal.raise();
        signal.raise();
        signal.raise();

        signal.wait();
        assert!(!signal.is_raised());
    }

    #[test]
    fn test_raise_from_another_thread_wakes_waiter() {
        static SIGNAL: PendingSignal = PendingSignal::new();

        let raiser = std::thread::spawn(|| {
            std::thread::sleep(std::time::Duration::from_millis(10));
            SIGNAL.raise();
        });

        SIGNAL.wait();

        raiser.join().unwrap();
        assert!(!SIGNAL.is_raised());
    }

    #[test]
    fn test_raise_after_wait_is_not_lost() {
        let signal = PendingSignal::new();

        signal.raise();
        signal.wait();

        signal.raise();
        assert!(signal.is_raised());
    }
}
