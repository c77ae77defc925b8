//! Interrupt top halves of the vendor stack and the relay handler
//!
//! The three hardware sources (timer, RTC, radio) are serviced at the
//! zero-latency priority: each top half runs the matching vendor event
//! handler, pends the relay interrupt, and reports whether the host scheduler
//! needs re-evaluation after the interrupt returns. The relay handler runs at
//! a lower priority and only raises the worker's wake signal, so a burst of
//! hardware events collapses into a bounded number of worker wake-ups.
//!
//! Top halves never block, never allocate, and never fail. The host platform
//! routes its interrupt vectors into these functions; the handlers' shared
//! data is installed by the init sequencer before any vector is armed.

use crate::hw::irq;
use crate::hw::irq::traits::IrqCtrl;
use crate::mutex::Mutex;
use crate::signal::PendingSignal;
use crate::stack;
use crate::stack::traits::RadioStack;

/// Verdict of a top half about the host scheduler
///
/// Returned to the host's vector shim, which translates it to the platform's
/// interrupt-exit convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "nrf52840", derive(defmt::Format))]
pub enum RescheduleRequest {
    /// The event was fully contained within the interrupt domain
    NoRescheduleNeeded,
    /// The event may have unblocked primitives the scheduler reasons about
    RescheduleNeeded,
}

struct IsrData {
    stack: &'static stack::RadioStack,
    irq: &'static irq::IrqCtrl,
    signal: &'static PendingSignal,
}

// Handlers are called from IRQs. That's why they require static data
static ISR_DATA: Mutex<Option<IsrData>> = Mutex::new(None);

pub(crate) fn install(
    stack: &'static stack::RadioStack,
    irq: &'static irq::IrqCtrl,
    signal: &'static PendingSignal,
) {
    crate::crit_sect::locked(|cs| {
        let prev = ISR_DATA.borrow_mut(cs).replace(IsrData { stack, irq, signal });
        assert!(prev.is_none());
    });
}

/// Reset module
///
/// This function is intended to be used between unit tests
#[doc(hidden)]
pub fn reset() {
    crate::crit_sect::locked(|cs| {
        ISR_DATA.borrow_mut(cs).take();
    });
}

fn use_isr_data<F, R>(func: F) -> R
where
    F: FnOnce(&IsrData) -> R,
{
    crate::crit_sect::locked(|cs| {
        let isr_data_option = ISR_DATA.borrow(cs);
        func(isr_data_option.as_ref().unwrap())
    })
}

/// Top half of the timer interrupt reserved for the vendor stack
///
/// Call only from the timer vector, armed at the zero-latency priority.
pub fn on_timer_irq() -> RescheduleRequest {
    use_isr_data(|d| {
        d.stack.on_timer_event();
        d.irq.pend_relay();
    });

    // A radio timeslot callback may have accessed scheduler primitives
    RescheduleRequest::RescheduleNeeded
}

/// Top half of the RTC interrupt reserved for the vendor stack
///
/// Call only from the RTC vector, armed at the zero-latency priority.
pub fn on_rtc_irq() -> RescheduleRequest {
    use_isr_data(|d| {
        d.stack.on_rtc_event();
        d.irq.pend_relay();
    });

    // The RTC event handler does not access scheduler primitives
    RescheduleRequest::NoRescheduleNeeded
}

/// Top half of the radio interrupt
///
/// Call only from the radio vector, armed at the zero-latency priority.
pub fn on_radio_irq() -> RescheduleRequest {
    use_isr_data(|d| {
        d.stack.on_radio_event();
        d.irq.pend_relay();
    });

    // A radio timeslot callback may have accessed scheduler primitives
    RescheduleRequest::RescheduleNeeded
}

/// Handler of the relay interrupt
///
/// Call only from the relay vector, armed at the relay priority. Wakes the
/// deferred worker.
pub fn on_relay_irq() {
    use_isr_data(|d| d.signal.raise());
}
