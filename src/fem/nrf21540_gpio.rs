//! Resource assignment for the nRF21540 front-end module in GPIO mode

use super::{all_distinct, FemPinConfig};
use crate::error::Error;

/// Timing description of the nRF21540 control signals
///
/// All six fields must be populated before the configuration is submitted;
/// they come from the static hardware description of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "nrf52840", derive(defmt::Format))]
pub struct Nrf21540GpioTimings {
    /// Time between asserting TX_EN and the amplifier being ready, in microseconds
    pub tx_en_settle_us: u16,
    /// Time between asserting RX_EN and the amplifier being ready, in microseconds
    pub rx_en_settle_us: u16,
    /// Time needed to leave the power-down state, in microseconds
    pub pdn_settle_us: u16,
    /// Hold time when switching between TX and RX, in microseconds
    pub trx_hold_us: u16,
    /// Gain of the TX path in dB
    pub tx_gain_db: i8,
    /// Gain of the RX path in dB
    pub rx_gain_db: i8,
}

/// Complete resource assignment for the nRF21540 in GPIO mode
///
/// # Examples
///
/// ```
/// use nrf_multiproto::fem::nrf21540_gpio::{Nrf21540GpioConfig, Nrf21540GpioTimings};
/// use nrf_multiproto::fem::FemPinConfig;
///
/// let config = Nrf21540GpioConfig {
///     timings: Nrf21540GpioTimings {
///         tx_en_settle_us: 11,
///         rx_en_settle_us: 11,
///         pdn_settle_us: 18,
///         trx_hold_us: 5,
///         tx_gain_db: 20,
///         rx_gain_db: 13,
///     },
///     pa_pin: FemPinConfig::driven(23, 0),
///     lna_pin: FemPinConfig::driven(22, 1),
///     pdn_pin: FemPinConfig::driven(21, 2),
///     ppi_channels: [14, 15, 16],
/// };
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "nrf52840", derive(defmt::Format))]
pub struct Nrf21540GpioConfig {
    /// Control signal timing description
    pub timings: Nrf21540GpioTimings,
    /// Assignment of the TX_EN signal (power amplifier path)
    pub pa_pin: FemPinConfig,
    /// Assignment of the RX_EN signal (low noise amplifier path)
    pub lna_pin: FemPinConfig,
    /// Assignment of the PDN signal (power-down control)
    pub pdn_pin: FemPinConfig,
    /// PPI channels assigned for exclusive use by the stack's FEM driver
    pub ppi_channels: [u8; 3],
}

impl Nrf21540GpioConfig {
    /// Verifies that no two signals share a pin, GPIOTE channel, or PPI channel
    pub fn validate(&self) -> Result<(), Error> {
        let pins = [
            self.pa_pin.gpio_pin,
            self.lna_pin.gpio_pin,
            self.pdn_pin.gpio_pin,
        ];
        let gpiote_chs = [
            self.pa_pin.gpiote_ch,
            self.lna_pin.gpiote_ch,
            self.pdn_pin.gpiote_ch,
        ];

        if all_distinct(&pins) && all_distinct(&gpiote_chs) && all_distinct(&self.ppi_channels) {
            Ok(())
        } else {
            Err(Error::ResourceConflict)
        }
    }
}

/// Builds the assignment described by the board configuration
#[cfg(feature = "fem_nrf21540_gpio")]
pub fn from_board() -> Nrf21540GpioConfig {
    use crate::board::fem_nrf21540_gpio as desc;

    Nrf21540GpioConfig {
        timings: Nrf21540GpioTimings {
            tx_en_settle_us: desc::TX_EN_SETTLE_TIME_US,
            rx_en_settle_us: desc::RX_EN_SETTLE_TIME_US,
            pdn_settle_us: desc::PDN_SETTLE_TIME_US,
            trx_hold_us: desc::TRX_HOLD_TIME_US,
            tx_gain_db: desc::TX_GAIN_DB,
            rx_gain_db: desc::RX_GAIN_DB,
        },
        pa_pin: FemPinConfig::driven(desc::TX_EN_PIN, desc::GPIOTE_TX_EN),
        lna_pin: FemPinConfig::driven(desc::RX_EN_PIN, desc::GPIOTE_RX_EN),
        pdn_pin: FemPinConfig::driven(desc::PDN_PIN, desc::GPIOTE_PDN),
        ppi_channels: desc::PPI_CHANNELS,
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub fn complete_config() -> Nrf21540GpioConfig {
        Nrf21540GpioConfig {
            timings: Nrf21540GpioTimings {
                tx_en_settle_us: 11,
                rx_en_settle_us: 11,
                pdn_settle_us: 18,
                trx_hold_us: 5,
                tx_gain_db: 20,
                rx_gain_db: 13,
            },
            pa_pin: FemPinConfig::driven(23, 0),
            lna_pin: FemPinConfig::driven(22, 1),
            pdn_pin: FemPinConfig::driven(21, 2),
            ppi_channels: [14, 15, 16],
        }
    }

    #[test]
    fn test_complete_description_has_all_assignments() {
        let config = complete_config();

        // All six timing fields populated
        assert!(config.timings.tx_en_settle_us > 0);
        assert!(config.timings.rx_en_settle_us > 0);
        assert!(config.timings.pdn_settle_us > 0);
        assert!(config.timings.trx_hold_us > 0);
        assert!(config.timings.tx_gain_db > 0);
        assert!(config.timings.rx_gain_db > 0);

        // Three driven pin assignments with no collisions
        for pin in [&config.pa_pin, &config.lna_pin, &config.pdn_pin] {
            assert!(pin.enable);
        }
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_gpio_pin_is_a_conflict() {
        let mut config = complete_config();
        config.pdn_pin.gpio_pin = config.lna_pin.gpio_pin;

        assert_eq!(config.validate(), Err(Error::ResourceConflict));
    }

    #[test]
    fn test_duplicate_gpiote_channel_is_a_conflict() {
        let mut config = complete_config();
        config.pa_pin.gpiote_ch = config.pdn_pin.gpiote_ch;

        assert_eq!(config.validate(), Err(Error::ResourceConflict));
    }

    #[test]
    fn test_duplicate_ppi_channel_is_a_conflict() {
        let mut config = complete_config();
        config.ppi_channels = [14, 15, 14];

        assert_eq!(config.validate(), Err(Error::ResourceConflict));
    }

    #[cfg(feature = "fem_nrf21540_gpio")]
    #[test]
    fn test_board_description_is_valid() {
        assert_eq!(from_board().validate(), Ok(()));
    }
}
