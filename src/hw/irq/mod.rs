//! Portable interrupt wiring abstraction
//!
//! The init sequencer arms the three zero-latency radio stack interrupt
//! sources and the low-priority relay interrupt through this module. Top
//! halves also use it to pend the relay. Pending an already pending relay has
//! no effect, which is what collapses event bursts into one wake.

pub mod traits;

#[cfg(any(all(feature = "mocked_platform", not(test)), feature = "nrf52840"))]
pub mod nvic;
/// Type of interrupt controller used in this build.
///
/// This type must implement [`IrqCtrl`](traits::IrqCtrl) trait.
#[cfg(any(all(feature = "mocked_platform", not(test)), feature = "nrf52840"))]
pub type IrqCtrl = nvic::NvicIrqCtrl;
#[cfg(all(test, feature = "mocked_platform"))]
pub type IrqCtrl = traits::MockIrqCtrl;
