//! Static memory pool for timeslot sessions
//!
//! Timeslot sessions let multiple protocol users share exclusive access to
//! the radio in disjoint time windows. The vendor stack needs one context
//! region per concurrent session, provided by the host as a single static
//! memory block registered exactly once before any timeslot request.

use crate::error::Error;
use crate::stack;
use crate::stack::traits::RadioStack;
use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicBool, Ordering};

/// Size of one session context region in bytes, fixed by the vendor stack
pub const SESSION_CONTEXT_SIZE: usize = 48;

/// Maximum number of concurrent sessions supported by the platform
pub const MAX_SESSIONS: usize = 8;

/// Memory pool sized for `N` concurrent timeslot sessions
///
/// The pool is written once by registration and read only by the vendor
/// stack afterwards; it is never resized at runtime. A pool larger than
/// [`MAX_SESSIONS`] cannot be constructed; the check fails the build.
///
/// # Examples
///
/// ```
/// use nrf_multiproto::timeslot::{SessionPool, SESSION_CONTEXT_SIZE};
///
/// static POOL: SessionPool<2> = SessionPool::new();
///
/// assert_eq!(SessionPool::<2>::size_bytes(), 2 * SESSION_CONTEXT_SIZE);
/// ```
#[repr(align(4))]
pub struct SessionPool<const N: usize> {
    mem: UnsafeCell<[[u8; SESSION_CONTEXT_SIZE]; N]>,
    registered: AtomicBool,
}

// Safety: the memory block is handed over to the vendor stack exactly once,
// guarded by the `registered` flag; this crate never accesses it afterwards
unsafe impl<const N: usize> Sync for SessionPool<N> {}

impl<const N: usize> SessionPool<N> {
    const WITHIN_PLATFORM_LIMIT: () = assert!(N <= MAX_SESSIONS, "Too many timeslot sessions");

    /// Reserves memory for `N` sessions
    pub const fn new() -> Self {
        // Referencing the check makes an oversized pool a build error
        let _: () = Self::WITHIN_PLATFORM_LIMIT;

        Self {
            mem: UnsafeCell::new([[0; SESSION_CONTEXT_SIZE]; N]),
            registered: AtomicBool::new(false),
        }
    }

    /// Size of the reserved region in bytes
    pub const fn size_bytes() -> usize {
        N * SESSION_CONTEXT_SIZE
    }

    /// Registers the pool with the vendor stack
    ///
    /// With zero configured sessions no memory is reserved and the stack is
    /// not called. Registration happens at most once; repeating it reports
    /// [`Error::AlreadyInitialized`].
    pub fn register(&'static self, stack: &stack::RadioStack) -> Result<(), Error> {
        if N == 0 {
            return Ok(());
        }

        self.registered
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::AlreadyInitialized)?;

        stack.register_session_pool(self.mem.get() as *mut u8, N as u8)?;

        info!("timeslot session pool registered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::traits::MockRadioStack;

    #[test]
    fn test_empty_pool_is_never_registered_with_the_stack() {
        static POOL: SessionPool<0> = SessionPool::new();

        let mut stack = MockRadioStack::new();
        stack.expect_register_session_pool().times(0);

        assert_eq!(POOL.register(&stack), Ok(()));
        // Registering again is also a no-op
        assert_eq!(POOL.register(&stack), Ok(()));
    }

    #[test]
    fn test_pool_registers_its_memory_exactly_once() {
        static POOL: SessionPool<2> = SessionPool::new();

        let expected_mem = POOL.mem.get() as usize;
        let mut stack = MockRadioStack::new();
        stack
            .expect_register_session_pool()
            .withf(move |&mem, &count| mem as usize == expected_mem && count == 2)
            .times(1)
            .returning(|_, _| Ok(()));

        assert_eq!(POOL.register(&stack), Ok(()));
        assert_eq!(POOL.register(&stack), Err(Error::AlreadyInitialized));
    }

    #[test]
    fn test_stack_failure_propagates() {
        static POOL: SessionPool<3> = SessionPool::new();

        let mut stack = MockRadioStack::new();
        stack
            .expect_register_session_pool()
            .times(1)
            .returning(|_, _| Err(Error::StackError(-12)));

        assert_eq!(POOL.register(&stack), Err(Error::StackError(-12)));
    }

    #[test]
    fn test_pool_size_follows_session_count() {
        assert_eq!(SessionPool::<0>::size_bytes(), 0);
        assert_eq!(SessionPool::<4>::size_bytes(), 4 * SESSION_CONTEXT_SIZE);
    }

    #[test]
    fn test_platform_maximum_is_constructible() {
        static POOL: SessionPool<MAX_SESSIONS> = SessionPool::new();

        assert_eq!(
            SessionPool::<MAX_SESSIONS>::size_bytes(),
            MAX_SESSIONS * SESSION_CONTEXT_SIZE
        );
        assert!(!POOL.registered.load(Ordering::Acquire));
    }
}
