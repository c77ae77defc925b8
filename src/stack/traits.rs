//! Call contract of the vendor multiprotocol stack
//!
//! The one implementation of the trait is selected in the [`stack`](super)
//! module.

use crate::clock::LfClockConfig;
use crate::error::Error;
use crate::fem::FemConfig;

#[cfg(test)]
use mockall::*;

/// Function called when the vendor stack hits an internal assertion
///
/// The stack is in an unknown state afterwards; the handler must not return
/// control to normal operation.
pub type AssertHandler = fn(file: &str, line: u32);

/// Entry points of the vendor multiprotocol stack
#[cfg_attr(test, automock)]
pub trait RadioStack: Sync {
    /// Initializes the stack library
    ///
    /// `low_prio_irq` is the number of the interrupt the stack may pend to
    /// request low-priority processing in addition to the relay maintained by
    /// this crate.
    fn init(
        &self,
        clock: &LfClockConfig,
        low_prio_irq: u16,
        assert_handler: AssertHandler,
    ) -> Result<(), Error>;

    /// Services a timer event; called only from the timer top half
    fn on_timer_event(&self);

    /// Services an RTC event; called only from the RTC top half
    fn on_rtc_event(&self);

    /// Services a radio event; called only from the radio top half
    fn on_radio_event(&self);

    /// Performs one bounded unit of low-priority processing
    ///
    /// Called only by the deferred worker, only while holding the
    /// [`StackLock`](crate::lock::StackLock).
    fn process_low_priority_work(&self);

    /// Registers the timeslot session memory pool
    ///
    /// Called at most once, before any timeslot request can occur.
    fn register_session_pool(&self, mem: *mut u8, count: u8) -> Result<(), Error>;

    /// Submits the front-end module resource configuration
    ///
    /// Called at most once, before radio interrupts are armed. The passed
    /// config is never [`FemConfig::None`].
    fn submit_front_end_config(&self, config: &FemConfig) -> Result<(), Error>;
}
