//! Low frequency clock selection consumed once by the vendor stack init
//!
//! The stack calibrates its protocol timing against the low frequency clock.
//! The source and its accuracy are board properties, immutable after
//! initialization.

use crate::board;

/// Recommended calibration interval when running from the RC oscillator
///
/// In units of 0.25 s, as expected by the vendor stack.
pub const RECOMMENDED_RC_CALIB_INTERVAL: u8 = 16;

/// Recommended temperature-triggered calibration interval for the RC oscillator
///
/// In units of 0.25 s, as expected by the vendor stack.
pub const RECOMMENDED_RC_TEMP_CALIB_INTERVAL: u8 = 2;

/// Available sources of the low frequency clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "nrf52840", derive(defmt::Format))]
pub enum LfClockSource {
    /// Internal RC oscillator, requires periodic calibration
    Rc,
    /// External 32.768 kHz crystal
    Xtal,
    /// Clock synthesized from the high frequency clock
    Synth,
    /// External low swing signal applied to the XL1 pin
    ExtLowSwing,
    /// External full swing signal applied to the XL1 pin
    ExtFullSwing,
}

/// Full low frequency clock configuration record
///
/// # Examples
///
/// ```
/// use nrf_multiproto::clock::{LfClockConfig, LfClockSource};
///
/// let config = LfClockConfig::from_source(LfClockSource::Xtal, 50);
/// assert_eq!(config.accuracy_ppm, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "nrf52840", derive(defmt::Format))]
pub struct LfClockConfig {
    /// Selected clock source
    pub source: LfClockSource,
    /// Accuracy of the selected source in ppm
    pub accuracy_ppm: u16,
    /// Periodic calibration interval, meaningful only for [`LfClockSource::Rc`]
    pub rc_calib_interval: u8,
    /// Temperature-triggered calibration interval, meaningful only for [`LfClockSource::Rc`]
    pub rc_temp_calib_interval: u8,
}

impl LfClockConfig {
    /// Builds the configuration record for the source selected by the board
    pub fn from_board() -> Self {
        Self::from_source(board::LF_CLOCK_SOURCE, board::LF_CLOCK_ACCURACY_PPM)
    }

    /// Builds the configuration record for an explicitly selected source
    ///
    /// The RC oscillator gets the calibration intervals recommended by the
    /// vendor stack. Other sources do not calibrate.
    pub fn from_source(source: LfClockSource, accuracy_ppm: u16) -> Self {
        let (rc_calib_interval, rc_temp_calib_interval) = match source {
            LfClockSource::Rc => (
                RECOMMENDED_RC_CALIB_INTERVAL,
                RECOMMENDED_RC_TEMP_CALIB_INTERVAL,
            ),
            _ => (0, 0),
        };

        Self {
            source,
            accuracy_ppm,
            rc_calib_interval,
            rc_temp_calib_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rc_source_carries_recommended_calibration_intervals() {
        let config = LfClockConfig::from_source(LfClockSource::Rc, 500);

        assert_eq!(config.source, LfClockSource::Rc);
        assert_eq!(config.accuracy_ppm, 500);
        assert_eq!(config.rc_calib_interval, RECOMMENDED_RC_CALIB_INTERVAL);
        assert_eq!(
            config.rc_temp_calib_interval,
            RECOMMENDED_RC_TEMP_CALIB_INTERVAL
        );
    }

    #[test]
    fn test_non_rc_sources_do_not_calibrate() {
        for source in [
            LfClockSource::Xtal,
            LfClockSource::Synth,
            LfClockSource::ExtLowSwing,
            LfClockSource::ExtFullSwing,
        ] {
            let config = LfClockConfig::from_source(source, 20);

            assert_eq!(config.rc_calib_interval, 0);
            assert_eq!(config.rc_temp_calib_interval, 0);
        }
    }

    #[test]
    fn test_board_configuration_is_complete() {
        let config = LfClockConfig::from_board();

        assert_eq!(config.source, crate::board::LF_CLOCK_SOURCE);
        assert_eq!(config.accuracy_ppm, crate::board::LF_CLOCK_ACCURACY_PPM);
    }
}
