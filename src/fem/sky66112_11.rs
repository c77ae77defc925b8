//! Resource assignment for the SKY66112-11 front-end module

use super::{all_distinct, FemPinConfig};
use crate::error::Error;

/// Timing description of the SKY66112-11 control signals
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "nrf52840", derive(defmt::Format))]
pub struct Sky66112Timings {
    /// Time between asserting CTX and the amplifier being ready, in microseconds
    pub ctx_settle_us: u16,
    /// Time between asserting CRX and the amplifier being ready, in microseconds
    pub crx_settle_us: u16,
    /// Gain of the TX path in dB
    pub tx_gain_db: i8,
    /// Gain of the RX path in dB
    pub rx_gain_db: i8,
}

/// Complete resource assignment for the SKY66112-11
///
/// The SKY66112-11 has no power-down control signal, so it needs one pin and
/// one PPI channel less than the nRF21540.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "nrf52840", derive(defmt::Format))]
pub struct Sky66112Config {
    /// Control signal timing description
    pub timings: Sky66112Timings,
    /// Assignment of the CTX signal (power amplifier path)
    pub pa_pin: FemPinConfig,
    /// Assignment of the CRX signal (low noise amplifier path)
    pub lna_pin: FemPinConfig,
    /// PPI channels assigned for exclusive use by the stack's FEM driver
    pub ppi_channels: [u8; 2],
}

impl Sky66112Config {
    /// Verifies that no two signals share a pin, GPIOTE channel, or PPI channel
    pub fn validate(&self) -> Result<(), Error> {
        let pins = [self.pa_pin.gpio_pin, self.lna_pin.gpio_pin];
        let gpiote_chs = [self.pa_pin.gpiote_ch, self.lna_pin.gpiote_ch];

        if all_distinct(&pins) && all_distinct(&gpiote_chs) && all_distinct(&self.ppi_channels) {
            Ok(())
        } else {
            Err(Error::ResourceConflict)
        }
    }
}

/// Builds the assignment described by the board configuration
#[cfg(feature = "fem_sky66112_11")]
pub fn from_board() -> Sky66112Config {
    use crate::board::fem_sky66112_11 as desc;

    Sky66112Config {
        timings: Sky66112Timings {
            ctx_settle_us: desc::CTX_SETTLE_TIME_US,
            crx_settle_us: desc::CRX_SETTLE_TIME_US,
            tx_gain_db: desc::TX_GAIN_DB,
            rx_gain_db: desc::RX_GAIN_DB,
        },
        pa_pin: FemPinConfig::driven(desc::CTX_PIN, desc::GPIOTE_CTX),
        lna_pin: FemPinConfig::driven(desc::CRX_PIN, desc::GPIOTE_CRX),
        ppi_channels: desc::PPI_CHANNELS,
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub fn complete_config() -> Sky66112Config {
        Sky66112Config {
            timings: Sky66112Timings {
                ctx_settle_us: 1,
                crx_settle_us: 1,
                tx_gain_db: 22,
                rx_gain_db: 11,
            },
            pa_pin: FemPinConfig::driven(24, 0),
            lna_pin: FemPinConfig::driven(25, 1),
            ppi_channels: [14, 15],
        }
    }

    #[test]
    fn test_complete_description_validates() {
        assert_eq!(complete_config().validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_gpio_pin_is_a_conflict() {
        let mut config = complete_config();
        config.lna_pin.gpio_pin = config.pa_pin.gpio_pin;

        assert_eq!(config.validate(), Err(Error::ResourceConflict));
    }

    #[test]
    fn test_duplicate_ppi_channel_is_a_conflict() {
        let mut config = complete_config();
        config.ppi_channels = [15, 15];

        assert_eq!(config.validate(), Err(Error::ResourceConflict));
    }

    #[cfg(feature = "fem_sky66112_11")]
    #[test]
    fn test_board_description_is_valid() {
        assert_eq!(from_board().validate(), Ok(()));
    }
}
