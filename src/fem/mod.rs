//! Front-end module resource configuration
//!
//! A front-end module (FEM) is an external amplifier/switch between the SoC
//! and the antenna. Driving it requires dedicated pins, GPIOTE channels and
//! PPI channels, synchronized with radio activity by the vendor stack. Those
//! resources are scarce and the FEM needs them for exclusive use, so they are
//! assigned once, from build configuration, before radio interrupts are
//! armed, and never reassigned.
//!
//! Exactly one supported variant may be selected at build time. Selecting the
//! umbrella `fem` feature without a variant, or two variants at once, is a
//! build error rather than a runtime fallback.

pub mod nrf21540_gpio;
pub mod sky66112_11;

use crate::error::Error;
use crate::stack;
use crate::stack::traits::RadioStack;

use nrf21540_gpio::Nrf21540GpioConfig;
use sky66112_11::Sky66112Config;

#[cfg(all(
    feature = "fem",
    not(any(feature = "fem_nrf21540_gpio", feature = "fem_sky66112_11"))
))]
compile_error!("Incomplete front-end module configuration. No supported FEM type selected");

#[cfg(all(feature = "fem_nrf21540_gpio", feature = "fem_sky66112_11"))]
compile_error!("Cannot enable multiple front-end module variants simultaneously");

/// Assignment of one FEM control signal to a pin and its GPIOTE channel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "nrf52840", derive(defmt::Format))]
pub struct FemPinConfig {
    /// Whether the signal is driven at all
    pub enable: bool,
    /// Whether the signal is active high
    pub active_high: bool,
    /// GPIO pin number assigned to the signal
    pub gpio_pin: u8,
    /// GPIOTE channel assigned to drive the pin
    pub gpiote_ch: u8,
}

impl FemPinConfig {
    /// Creates an active-high, driven signal assignment
    pub const fn driven(gpio_pin: u8, gpiote_ch: u8) -> Self {
        Self {
            enable: true,
            active_high: true,
            gpio_pin,
            gpiote_ch,
        }
    }
}

/// Front-end module configuration selected for this build
///
/// Closed set of supported variants. The selection happens once, at startup,
/// from build configuration; there is no runtime switching.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "nrf52840", derive(defmt::Format))]
pub enum FemConfig {
    /// No front-end module in use
    None,
    /// nRF21540 controlled through GPIO
    Nrf21540Gpio(Nrf21540GpioConfig),
    /// SKY66112-11 controlled through GPIO
    Sky66112(Sky66112Config),
}

impl FemConfig {
    /// Builds the configuration of the variant selected by the build features
    pub fn from_board() -> Self {
        let config;

        #[cfg(feature = "fem_nrf21540_gpio")]
        {
            config = FemConfig::Nrf21540Gpio(nrf21540_gpio::from_board());
        }
        #[cfg(feature = "fem_sky66112_11")]
        {
            config = FemConfig::Sky66112(sky66112_11::from_board());
        }
        #[cfg(not(any(feature = "fem_nrf21540_gpio", feature = "fem_sky66112_11")))]
        {
            config = FemConfig::None;
        }

        config
    }

    /// Validates that no two signals share an exclusive resource
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            FemConfig::None => Ok(()),
            FemConfig::Nrf21540Gpio(config) => config.validate(),
            FemConfig::Sky66112(config) => config.validate(),
        }
    }

    /// Submits this configuration to the vendor stack
    ///
    /// Runs once during initialization, before radio interrupts are armed.
    /// With no variant selected nothing is submitted and the stack runs
    /// without a front-end module.
    pub fn configure(&self, stack: &stack::RadioStack) -> Result<(), Error> {
        if let FemConfig::None = self {
            return Ok(());
        }

        self.validate()?;
        stack.submit_front_end_config(self)?;

        info!("front-end module configured");
        Ok(())
    }
}

pub(crate) fn all_distinct(values: &[u8]) -> bool {
    values
        .iter()
        .enumerate()
        .all(|(i, value)| !values[..i].contains(value))
}
