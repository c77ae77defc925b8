//! Traits used for interrupt wiring portability
//!
//! Each port of the interrupt wiring to another platform shall implement the
//! traits described in this module. The one implementation of the traits is
//! selected in the [`irq`](super) module.

#[cfg(test)]
use mockall::*;

/// One of the three hardware interrupt sources owned by the vendor stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "nrf52840", derive(defmt::Format))]
pub enum HighPrioSource {
    /// The timer peripheral reserved for the stack
    Timer,
    /// The RTC peripheral reserved for the stack
    Rtc,
    /// The radio peripheral
    Radio,
}

/// Capability of arming and pending the interrupts used by the glue layer
#[cfg_attr(test, automock)]
pub trait IrqCtrl: Sync {
    /// Arms one hardware source at the zero-latency priority
    ///
    /// The source's vector must already dispatch into
    /// [`dispatch`](crate::dispatch) before this is called.
    fn wire_zero_latency(&self, source: HighPrioSource);

    /// Arms the relay interrupt at the relay priority
    fn wire_relay(&self);

    /// Sets the relay interrupt pending
    ///
    /// Callable from any context. Pending an already pending relay collapses
    /// into a single relay run.
    fn pend_relay(&self);
}
