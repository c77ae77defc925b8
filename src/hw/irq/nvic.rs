//! Interrupt wiring through the NVIC of nRF52 series SoCs

use super::traits::{HighPrioSource, IrqCtrl};
use crate::board;
use cortex_m::interrupt::InterruptNumber;
use cortex_m::peripheral::NVIC;
use nrf52840_hal::pac::Interrupt;

// nRF52 implements 3 of the 8 priority bits
const PRIO_BITS: u8 = 3;

// Relay vector; board::RELAY_IRQ_NUMBER carries the same interrupt number for
// the vendor stack init call
const RELAY_IRQ: Interrupt = Interrupt::SWI5_EGU5;

/// Interrupt controller of nRF52 series SoCs
pub struct NvicIrqCtrl {}

impl NvicIrqCtrl {
    /// Creates a new controller wrapper
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use nrf_multiproto::hw::irq::nvic::NvicIrqCtrl;
    ///
    /// static IRQ_CTRL: NvicIrqCtrl = NvicIrqCtrl::new();
    /// ```
    pub const fn new() -> Self {
        Self {}
    }

    fn arm(irq: Interrupt, priority: u8) {
        // Safety: the priority is written before the vector is unmasked, and
        // the vectors dispatch into handlers installed by the init sequencer
        // before any arming happens
        unsafe {
            (*NVIC::PTR).ipr[irq.number() as usize].write(priority << (8 - PRIO_BITS));
            NVIC::unmask(irq);
        }
    }
}

impl Default for NvicIrqCtrl {
    fn default() -> Self {
        Self::new()
    }
}

impl IrqCtrl for NvicIrqCtrl {
    fn wire_zero_latency(&self, source: HighPrioSource) {
        let irq = match source {
            HighPrioSource::Timer => Interrupt::TIMER0,
            HighPrioSource::Rtc => Interrupt::RTC0,
            HighPrioSource::Radio => Interrupt::RADIO,
        };

        Self::arm(irq, board::ZERO_LATENCY_IRQ_PRIO);
    }

    fn wire_relay(&self) {
        Self::arm(RELAY_IRQ, board::RELAY_IRQ_PRIO);
    }

    fn pend_relay(&self) {
        NVIC::pend(RELAY_IRQ);
    }
}
