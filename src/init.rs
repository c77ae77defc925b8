//! Ordered bring-up of the multiprotocol stack glue
//!
//! The sequence has two entry points, matching the two phases of system boot:
//!
//! 1. [`init`] runs before radio interrupts are live: clock selection, vendor
//!    library initialization, timeslot pool registration, zero-latency vector
//!    arming, front-end module configuration. Each stage is gated on the
//!    prior one succeeding; a failing stage aborts the whole bring-up and no
//!    later stage leaves any observable effect.
//! 2. [`start_worker`] runs once kernel services are available: it arms the
//!    relay interrupt and hands out the single [`Worker`] handle.
//!
//! There is no shutdown path. Failures after bring-up (a vendor stack
//! assertion, a violated locking protocol) are unrecoverable: they are logged
//! and the system halts, because continuing with a radio stack in an unknown
//! state risks protocol-level corruption.

use crate::board;
use crate::clock::LfClockConfig;
use crate::dispatch;
use crate::error::Error;
use crate::fem::FemConfig;
use crate::hw::irq;
use crate::hw::irq::traits::{HighPrioSource, IrqCtrl};
use crate::lock;
use crate::signal::PendingSignal;
use crate::stack;
use crate::stack::traits::RadioStack;
use crate::timeslot::SessionPool;
use crate::worker::Worker;
use core::sync::atomic::{AtomicU8, Ordering};

const STAGE_UNINIT: u8 = 0;
const STAGE_INITIALIZING: u8 = 1;
const STAGE_LIB_READY: u8 = 2;
const STAGE_WORKER_RUNNING: u8 = 3;

// One-shot guard; the bring-up must not be repeatable
static STAGE: AtomicU8 = AtomicU8::new(STAGE_UNINIT);

// The wake signal is owned by the relay/worker pair wired here
static PENDING_SIGNAL: PendingSignal = PendingSignal::new();

fn assert_handler(file: &str, line: u32) {
    error!("vendor stack assertion failed: {=str}:{=u32}", file, line);

    // The stack is in an unknown state; halting is the only safe option
    panic!("vendor stack assertion");
}

/// Runs the pre-interrupt part of the bring-up
///
/// Call once, before radio interrupts are live. The passed references must
/// point at the singleton stack binding, interrupt controller, and session
/// pool of this build. Any stack status error aborts the sequence and is
/// propagated; the caller must treat it as a failed system start rather than
/// retry.
pub fn init(
    stack: &'static stack::RadioStack,
    irq: &'static irq::IrqCtrl,
    pool: &'static SessionPool<{ board::TIMESLOT_SESSION_COUNT }>,
) -> Result<(), Error> {
    STAGE
        .compare_exchange(
            STAGE_UNINIT,
            STAGE_INITIALIZING,
            Ordering::AcqRel,
            Ordering::Acquire,
        )
        .map_err(|_| Error::AlreadyInitialized)?;

    let clock = LfClockConfig::from_board();
    stack.init(&clock, board::RELAY_IRQ_NUMBER, assert_handler)?;

    pool.register(stack)?;

    // Handler data goes in before any vector is armed, so an armed vector can
    // never observe missing data
    dispatch::install(stack, irq, &PENDING_SIGNAL);
    irq.wire_zero_latency(HighPrioSource::Timer);
    irq.wire_zero_latency(HighPrioSource::Rtc);
    irq.wire_zero_latency(HighPrioSource::Radio);

    FemConfig::from_board().configure(stack)?;

    STAGE.store(STAGE_LIB_READY, Ordering::Release);
    info!("multiprotocol stack initialized");
    Ok(())
}

/// Runs the post-kernel part of the bring-up
///
/// Call once, after [`init`] succeeded and kernel services are available.
/// Arms the relay interrupt and returns the worker handle; the caller gives
/// the handle a dedicated task context and calls [`Worker::run`] on it.
pub fn start_worker(
    stack: &'static stack::RadioStack,
    irq: &'static irq::IrqCtrl,
    lock: &'static lock::Lock,
) -> Result<Worker<'static>, Error> {
    match STAGE.compare_exchange(
        STAGE_LIB_READY,
        STAGE_WORKER_RUNNING,
        Ordering::AcqRel,
        Ordering::Acquire,
    ) {
        Ok(_) => {}
        Err(stage) if stage == STAGE_WORKER_RUNNING => return Err(Error::AlreadyInitialized),
        Err(_) => return Err(Error::NotInitialized),
    }

    irq.wire_relay();

    Ok(Worker::new(&PENDING_SIGNAL, lock, stack))
}

/// Reset module
///
/// This function is intended to be used between unit tests
#[doc(hidden)]
pub fn reset() {
    STAGE.store(STAGE_UNINIT, Ordering::Release);
    dispatch::reset();

    if PENDING_SIGNAL.is_raised() {
        PENDING_SIGNAL.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::irq::traits::MockIrqCtrl;
    use crate::lock::MockStackLock;
    use crate::stack::traits::MockRadioStack;
    use mockall::{predicate, Sequence};
    use serial_test::serial;

    fn leak<T>(value: T) -> &'static T {
        Box::leak(Box::new(value))
    }

    // Safety: pass only references obtained from leak(), after no static
    // holds them anymore. Dropping the mock verifies its expectations.
    unsafe fn unleak<T>(reference: &'static T) {
        drop(Box::from_raw(reference as *const T as *mut T));
    }

    #[test]
    #[serial]
    #[cfg_attr(miri, ignore)]
    fn test_happy_path_runs_stages_in_order() {
        reset();
        static POOL: SessionPool<{ board::TIMESLOT_SESSION_COUNT }> = SessionPool::new();

        let mut seq = Sequence::new();
        let mut stack = MockRadioStack::new();
        let mut irq = MockIrqCtrl::new();

        stack
            .expect_init()
            .withf(|clock, &low_prio_irq, _| {
                clock.source == board::LF_CLOCK_SOURCE
                    && clock.accuracy_ppm == board::LF_CLOCK_ACCURACY_PPM
                    && low_prio_irq == board::RELAY_IRQ_NUMBER
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));
        stack
            .expect_register_session_pool()
            .withf(|_, &count| count as usize == board::TIMESLOT_SESSION_COUNT)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        irq.expect_wire_zero_latency()
            .with(predicate::eq(HighPrioSource::Timer))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        irq.expect_wire_zero_latency()
            .with(predicate::eq(HighPrioSource::Rtc))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        irq.expect_wire_zero_latency()
            .with(predicate::eq(HighPrioSource::Radio))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        #[cfg(feature = "fem")]
        stack
            .expect_submit_front_end_config()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        #[cfg(not(feature = "fem"))]
        stack.expect_submit_front_end_config().times(0);

        let stack = leak(stack);
        let irq = leak(irq);

        assert_eq!(init(stack, irq, &POOL), Ok(()));

        reset();
        unsafe {
            unleak(stack);
            unleak(irq);
        }
    }

    #[test]
    #[serial]
    #[cfg_attr(miri, ignore)]
    fn test_failed_library_init_wires_nothing() {
        reset();
        static POOL: SessionPool<{ board::TIMESLOT_SESSION_COUNT }> = SessionPool::new();

        let mut stack = MockRadioStack::new();
        stack
            .expect_init()
            .times(1)
            .returning(|_, _, _| Err(Error::StackError(-1)));
        stack.expect_register_session_pool().times(0);
        stack.expect_submit_front_end_config().times(0);

        let mut irq = MockIrqCtrl::new();
        irq.expect_wire_zero_latency().times(0);
        irq.expect_wire_relay().times(0);

        let stack = leak(stack);
        let irq = leak(irq);

        assert_eq!(init(stack, irq, &POOL), Err(Error::StackError(-1)));

        // No worker can be created after an aborted bring-up
        let lock = leak(MockStackLock::new());
        assert!(matches!(
            start_worker(stack, irq, lock),
            Err(Error::NotInitialized)
        ));

        reset();
        unsafe {
            unleak(stack);
            unleak(irq);
            unleak(lock);
        }
    }

    #[test]
    #[serial]
    #[cfg_attr(miri, ignore)]
    fn test_failed_pool_registration_aborts_before_wiring() {
        reset();
        static POOL: SessionPool<{ board::TIMESLOT_SESSION_COUNT }> = SessionPool::new();

        let mut stack = MockRadioStack::new();
        stack.expect_init().times(1).returning(|_, _, _| Ok(()));
        stack
            .expect_register_session_pool()
            .times(1)
            .returning(|_, _| Err(Error::StackError(-8)));
        stack.expect_submit_front_end_config().times(0);

        let mut irq = MockIrqCtrl::new();
        irq.expect_wire_zero_latency().times(0);
        irq.expect_wire_relay().times(0);

        let stack = leak(stack);
        let irq = leak(irq);

        assert_eq!(init(stack, irq, &POOL), Err(Error::StackError(-8)));

        reset();
        unsafe {
            unleak(stack);
            unleak(irq);
        }
    }

    #[test]
    #[serial]
    #[cfg_attr(miri, ignore)]
    fn test_bring_up_is_one_shot() {
        reset();
        static POOL: SessionPool<{ board::TIMESLOT_SESSION_COUNT }> = SessionPool::new();

        let mut stack = MockRadioStack::new();
        stack.expect_init().times(1).returning(|_, _, _| Ok(()));
        stack
            .expect_register_session_pool()
            .times(1)
            .returning(|_, _| Ok(()));
        #[cfg(feature = "fem")]
        stack
            .expect_submit_front_end_config()
            .times(1)
            .returning(|_| Ok(()));

        let mut irq = MockIrqCtrl::new();
        irq.expect_wire_zero_latency().times(3).return_const(());

        let stack = leak(stack);
        let irq = leak(irq);

        assert_eq!(init(stack, irq, &POOL), Ok(()));
        assert_eq!(init(stack, irq, &POOL), Err(Error::AlreadyInitialized));

        reset();
        unsafe {
            unleak(stack);
            unleak(irq);
        }
    }

    #[test]
    #[serial]
    #[cfg_attr(miri, ignore)]
    fn test_worker_starts_once_after_successful_bring_up() {
        reset();
        static POOL: SessionPool<{ board::TIMESLOT_SESSION_COUNT }> = SessionPool::new();

        let mut stack = MockRadioStack::new();
        stack.expect_init().returning(|_, _, _| Ok(()));
        stack
            .expect_register_session_pool()
            .returning(|_, _| Ok(()));
        #[cfg(feature = "fem")]
        stack
            .expect_submit_front_end_config()
            .returning(|_| Ok(()));

        let mut irq = MockIrqCtrl::new();
        irq.expect_wire_zero_latency().times(3).return_const(());
        irq.expect_wire_relay().times(1).return_const(());

        let stack = leak(stack);
        let irq = leak(irq);
        let lock = leak(MockStackLock::new());

        assert_eq!(init(stack, irq, &POOL), Ok(()));

        let worker = start_worker(stack, irq, lock);
        assert!(worker.is_ok());

        assert!(matches!(
            start_worker(stack, irq, lock),
            Err(Error::AlreadyInitialized)
        ));

        drop(worker);
        reset();
        unsafe {
            unleak(stack);
            unleak(irq);
            unleak(lock);
        }
    }

    #[test]
    #[serial]
    fn test_worker_cannot_start_before_bring_up() {
        reset();

        let mut irq = MockIrqCtrl::new();
        irq.expect_wire_relay().times(0);

        let stack = MockRadioStack::new();
        let lock = MockStackLock::new();

        let result = start_worker(leak(stack), leak(irq), leak(lock));
        assert!(matches!(result, Err(Error::NotInitialized)));
    }

    #[test]
    #[should_panic(expected = "vendor stack assertion")]
    fn test_vendor_stack_assertion_is_fatal() {
        assert_handler("ble_controller.c", 1248);
    }
}
