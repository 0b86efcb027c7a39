use super::{EncoderType, PinSource, SpeedMode};

/// Configuration of a single encoder slot.
///
/// No field is range-checked: an out-of-range `speed_param` or `pin_position` only has its low three bits honored,
/// which yields odd decoding rather than a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderConfig {
    /// Which quadrature edges are counted; [`EncoderType::Disabled`] switches the slot off.
    pub encoder_type: EncoderType,
    /// How accepted edges become step counts.
    pub speed_mode: SpeedMode,
    /// Parameter of the speed mode, 0..=7. See [`SpeedMode`].
    pub speed_param: u8,
    /// Shift-register byte the pins are scanned from, or [`PinSource::Injected`].
    pub source: PinSource,
    /// Bit offset of the pin pair within the source byte. Even offsets (0, 2, 4, 6) read bits `pos` and `pos + 1`
    /// as they are wired; odd offsets (1, 3, 5, 7) read the pair starting at `pos - 1` with the two pins swapped,
    /// for encoders whose A/B lines were routed the other way around.
    pub pin_position: u8,
}

impl EncoderConfig {
    /// The value of an unconfigured slot, also returned when probing an invalid index.
    pub const DISABLED: Self = Self {
        encoder_type: EncoderType::Disabled,
        speed_mode: SpeedMode::Normal,
        speed_param: 0,
        source: PinSource::Injected,
        pin_position: 0,
    };

    /// Constructs an [`EncoderConfig`] decoded at [`SpeedMode::Normal`].
    pub const fn new(encoder_type: EncoderType, source: PinSource, pin_position: u8) -> Self {
        Self {
            encoder_type,
            speed_mode: SpeedMode::Normal,
            speed_param: 0,
            source,
            pin_position,
        }
    }

    /// Returns the same configuration with a different speed policy.
    pub const fn with_speed(self, speed_mode: SpeedMode, speed_param: u8) -> Self {
        Self {
            speed_mode,
            speed_param,
            ..self
        }
    }

    /// Mask of the two source bits holding this encoder's pins.
    pub fn pin_mask(&self) -> u8 {
        0b11 << (self.pin_position & 0b110)
    }

    /// Extracts this encoder's two-bit pin state from a sampled source byte.
    pub fn read_pins(&self, sample: u8) -> u8 {
        let pins = (sample >> (self.pin_position & 0b110)) & 0b11;
        if self.pin_position & 1 == 0 {
            pins
        } else {
            ((pins & 0b01) << 1) | (pins >> 1)
        }
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::DISABLED
    }
}
