//! Build-time board configuration
//!
//! This module plays the role the build configuration system plays on a full
//! platform port: it provides the compile-time constants the bring-up
//! sequence consumes. Values which depend on the selected front-end module
//! variant are gated by the matching build feature, so a build selecting a
//! variant without its hardware description cannot compile.

use crate::clock::LfClockSource;

/// Source of the low frequency clock driving the radio stack timing
pub const LF_CLOCK_SOURCE: LfClockSource = LfClockSource::Xtal;

/// Accuracy of the selected low frequency clock source in ppm
pub const LF_CLOCK_ACCURACY_PPM: u16 = 50;

/// Number of timeslot sessions requested by protocols sharing the radio
pub const TIMESLOT_SESSION_COUNT: usize = 2;

/// Priority of the three zero-latency radio stack IRQs
pub const ZERO_LATENCY_IRQ_PRIO: u8 = 0;

/// Priority of the relay IRQ waking the deferred worker
///
/// Below the three zero-latency sources, above every application task, so a
/// burst of hardware events collapses into a bounded number of wake-ups.
pub const RELAY_IRQ_PRIO: u8 = 4;

/// Number of the software interrupt used as the relay (SWI5_EGU5 on nRF52840)
pub const RELAY_IRQ_NUMBER: u16 = 25;

const _: () = assert!(
    RELAY_IRQ_PRIO > ZERO_LATENCY_IRQ_PRIO,
    "Relay must not preempt the zero-latency sources"
);

/// Hardware description of the nRF21540 front-end module wiring
#[cfg(feature = "fem_nrf21540_gpio")]
pub mod fem_nrf21540_gpio {
    /// Settle time of the power amplifier path in microseconds
    pub const TX_EN_SETTLE_TIME_US: u16 = 11;
    /// Settle time of the low noise amplifier path in microseconds
    pub const RX_EN_SETTLE_TIME_US: u16 = 11;
    /// Settle time after leaving power-down in microseconds
    pub const PDN_SETTLE_TIME_US: u16 = 18;
    /// Hold time when switching between TX and RX in microseconds
    pub const TRX_HOLD_TIME_US: u16 = 5;
    /// Gain of the power amplifier path in dB
    pub const TX_GAIN_DB: i8 = 20;
    /// Gain of the low noise amplifier path in dB
    pub const RX_GAIN_DB: i8 = 13;

    /// Pin controlling the TX_EN signal
    pub const TX_EN_PIN: u8 = 23;
    /// Pin controlling the RX_EN signal
    pub const RX_EN_PIN: u8 = 22;
    /// Pin controlling the PDN signal
    pub const PDN_PIN: u8 = 21;

    /// GPIOTE channel driving the TX_EN pin
    pub const GPIOTE_TX_EN: u8 = 0;
    /// GPIOTE channel driving the RX_EN pin
    pub const GPIOTE_RX_EN: u8 = 1;
    /// GPIOTE channel driving the PDN pin
    pub const GPIOTE_PDN: u8 = 2;

    /// PPI channels reserved for exclusive use by the front-end module
    pub const PPI_CHANNELS: [u8; 3] = [14, 15, 16];
}

/// Hardware description of the SKY66112-11 front-end module wiring
#[cfg(feature = "fem_sky66112_11")]
pub mod fem_sky66112_11 {
    /// Settle time of the CTX signal in microseconds
    pub const CTX_SETTLE_TIME_US: u16 = 1;
    /// Settle time of the CRX signal in microseconds
    pub const CRX_SETTLE_TIME_US: u16 = 1;
    /// Gain of the power amplifier path in dB
    pub const TX_GAIN_DB: i8 = 22;
    /// Gain of the low noise amplifier path in dB
    pub const RX_GAIN_DB: i8 = 11;

    /// Pin controlling the CTX signal
    pub const CTX_PIN: u8 = 24;
    /// Pin controlling the CRX signal
    pub const CRX_PIN: u8 = 25;

    /// GPIOTE channel driving the CTX pin
    pub const GPIOTE_CTX: u8 = 0;
    /// GPIOTE channel driving the CRX pin
    pub const GPIOTE_CRX: u8 = 1;

    /// PPI channels reserved for exclusive use by the front-end module
    pub const PPI_CHANNELS: [u8; 2] = [14, 15];
}
