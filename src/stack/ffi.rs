//! Binding to the vendor multiprotocol stack C library
//!
//! The vendor library is linked into the final image; this module only
//! declares its entry points and translates between the crate's types and the
//! C ABI. Non-zero status codes become [`Error::StackError`].

use super::traits::{AssertHandler, RadioStack};
use crate::clock::{LfClockConfig, LfClockSource};
use crate::error::Error;
use crate::fem::{FemConfig, FemPinConfig};
use crate::mutex::Mutex;
use core::ffi::{c_char, c_void, CStr};

#[repr(C)]
struct RawLfClockCfg {
    source: u8,
    rc_ctiv: u8,
    rc_temp_ctiv: u8,
    accuracy_ppm: u16,
}

#[repr(C)]
struct RawFemPinConfig {
    enable: bool,
    active_high: bool,
    gpio_pin: u8,
    gpiote_ch_id: u8,
}

#[repr(C)]
struct RawNrf21540GpioConfig {
    pa_time_gap_us: u32,
    lna_time_gap_us: u32,
    pdn_settle_us: u32,
    trx_hold_us: u32,
    pa_gain_db: i8,
    lna_gain_db: i8,
    pa_pin_config: RawFemPinConfig,
    lna_pin_config: RawFemPinConfig,
    pdn_pin_config: RawFemPinConfig,
    ppi_channels: [u8; 3],
}

#[repr(C)]
struct RawSimpleGpioConfig {
    pa_time_gap_us: u32,
    lna_time_gap_us: u32,
    pa_gain_db: i8,
    lna_gain_db: i8,
    pa_pin_config: RawFemPinConfig,
    lna_pin_config: RawFemPinConfig,
    ppi_channels: [u8; 2],
}

type RawAssertHandler = extern "C" fn(file: *const c_char, line: u32);

extern "C" {
    fn mpsl_init(
        p_clock_config: *const RawLfClockCfg,
        low_prio_irq: i32,
        p_assert_handler: RawAssertHandler,
    ) -> i32;
    fn MPSL_IRQ_TIMER0_Handler();
    fn MPSL_IRQ_RTC0_Handler();
    fn MPSL_IRQ_RADIO_Handler();
    fn mpsl_low_priority_process();
    fn mpsl_timeslot_session_count_set(p_mem: *mut c_void, count: u8) -> i32;
    fn mpsl_fem_nrf21540_gpio_interface_config_set(p_config: *const RawNrf21540GpioConfig) -> i32;
    fn mpsl_fem_simple_gpio_interface_config_set(p_config: *const RawSimpleGpioConfig) -> i32;
}

// The vendor assert callback carries no user context, so the registered
// handler lives in a static. Written once, before the library can assert.
static ASSERT_HANDLER: Mutex<Option<AssertHandler>> = Mutex::new(None);

extern "C" fn assert_shim(file: *const c_char, line: u32) {
    let file = if file.is_null() {
        "<unknown>"
    } else {
        // Safety: the vendor library passes a NUL-terminated source path
        unsafe { CStr::from_ptr(file) }.to_str().unwrap_or("<invalid>")
    };

    let handler = crate::crit_sect::locked(|cs| *ASSERT_HANDLER.borrow(cs));
    if let Some(handler) = handler {
        handler(file, line);
    }
}

fn retval(status: i32) -> Result<(), Error> {
    if status == 0 {
        Ok(())
    } else {
        Err(Error::StackError(status))
    }
}

fn raw_source(source: LfClockSource) -> u8 {
    match source {
        LfClockSource::Rc => 0,
        LfClockSource::Xtal => 1,
        LfClockSource::Synth => 2,
        LfClockSource::ExtLowSwing => 3,
        LfClockSource::ExtFullSwing => 4,
    }
}

fn raw_pin(pin: &FemPinConfig) -> RawFemPinConfig {
    RawFemPinConfig {
        enable: pin.enable,
        active_high: pin.active_high,
        gpio_pin: pin.gpio_pin,
        gpiote_ch_id: pin.gpiote_ch,
    }
}

/// Binding to the linked vendor stack library
pub struct VendorStack {}

impl VendorStack {
    /// Creates the binding
    ///
    /// The underlying library is a singleton; creating multiple bindings is
    /// possible but they all drive the same library instance.
    pub const fn new() -> Self {
        Self {}
    }
}

impl Default for VendorStack {
    fn default() -> Self {
        Self::new()
    }
}

impl RadioStack for VendorStack {
    fn init(
        &self,
        clock: &LfClockConfig,
        low_prio_irq: u16,
        assert_handler: AssertHandler,
    ) -> Result<(), Error> {
        crate::crit_sect::locked(|cs| {
            *ASSERT_HANDLER.borrow_mut(cs) = Some(assert_handler);
        });

        let raw_clock = RawLfClockCfg {
            source: raw_source(clock.source),
            rc_ctiv: clock.rc_calib_interval,
            rc_temp_ctiv: clock.rc_temp_calib_interval,
            accuracy_ppm: clock.accuracy_ppm,
        };

        retval(unsafe { mpsl_init(&raw_clock, low_prio_irq.into(), assert_shim) })
    }

    fn on_timer_event(&self) {
        unsafe { MPSL_IRQ_TIMER0_Handler() };
    }

    fn on_rtc_event(&self) {
        unsafe { MPSL_IRQ_RTC0_Handler() };
    }

    fn on_radio_event(&self) {
        unsafe { MPSL_IRQ_RADIO_Handler() };
    }

    fn process_low_priority_work(&self) {
        unsafe { mpsl_low_priority_process() };
    }

    fn register_session_pool(&self, mem: *mut u8, count: u8) -> Result<(), Error> {
        retval(unsafe { mpsl_timeslot_session_count_set(mem as *mut c_void, count) })
    }

    fn submit_front_end_config(&self, config: &FemConfig) -> Result<(), Error> {
        match config {
            FemConfig::None => Ok(()),
            FemConfig::Nrf21540Gpio(config) => {
                let raw = RawNrf21540GpioConfig {
                    pa_time_gap_us: config.timings.tx_en_settle_us.into(),
                    lna_time_gap_us: config.timings.rx_en_settle_us.into(),
                    pdn_settle_us: config.timings.pdn_settle_us.into(),
                    trx_hold_us: config.timings.trx_hold_us.into(),
                    pa_gain_db: config.timings.tx_gain_db,
                    lna_gain_db: config.timings.rx_gain_db,
                    pa_pin_config: raw_pin(&config.pa_pin),
                    lna_pin_config: raw_pin(&config.lna_pin),
                    pdn_pin_config: raw_pin(&config.pdn_pin),
                    ppi_channels: config.ppi_channels,
                };

                retval(unsafe { mpsl_fem_nrf21540_gpio_interface_config_set(&raw) })
            }
            FemConfig::Sky66112(config) => {
                let raw = RawSimpleGpioConfig {
                    pa_time_gap_us: config.timings.ctx_settle_us.into(),
                    lna_time_gap_us: config.timings.crx_settle_us.into(),
                    pa_gain_db: config.timings.tx_gain_db,
                    lna_gain_db: config.timings.rx_gain_db,
                    pa_pin_config: raw_pin(&config.pa_pin),
                    lna_pin_config: raw_pin(&config.lna_pin),
                    ppi_channels: config.ppi_channels,
                };

                retval(unsafe { mpsl_fem_simple_gpio_interface_config_set(&raw) })
            }
        }
    }
}
