use super::edge::{self, Direction};
use crate::configuration::{EncoderConfig, EncoderType, SpeedMode};

/// An edge against the previous direction is taken for bounce until the accelerator decays below this value.
pub const REVERSAL_THRESHOLD: u8 = 0xe0;

/// How far the speed estimate may rise from one accepted edge to the next.
pub const ACCELERATION_STEP: u8 = 0x40;

/// Bound on the pending increment in [`SpeedMode::Fast`].
pub const FAST_LIMIT: i32 = 70;

/// Transient decoding state of one encoder, mutated every scan cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderState {
    current_pins: u8,
    previous_pins: u8,
    /// true if the last accepted edge was a decrement
    last_direction_dec: bool,
    pending_increment: i32,
    /// decays by one per tick and is rearmed to 255 per accepted edge; larger means faster rotation
    accelerator: u8,
    previous_accelerator: u8,
    slow_divider: u8,
    previous_dec_state: Option<u8>,
    previous_inc_state: Option<u8>,
}

impl Default for EncoderState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl EncoderState {
    /// All pins released, nothing pending, counters at rest.
    pub const NEUTRAL: Self = Self {
        current_pins: 0,
        previous_pins: 0,
        last_direction_dec: false,
        pending_increment: 0,
        accelerator: 0,
        previous_accelerator: 0,
        slow_divider: 0,
        previous_dec_state: None,
        previous_inc_state: None,
    };

    /// The latest two-bit pin sample.
    pub fn current_pins(&self) -> u8 {
        self.current_pins
    }

    /// The pin sample the next edge is measured from.
    pub fn previous_pins(&self) -> u8 {
        self.previous_pins
    }

    /// The 4-bit state nibble, `previous_pins << 2 | current_pins`.
    pub fn state(&self) -> u8 {
        self.previous_pins << 2 | self.current_pins
    }

    /// Steps not yet delivered to the application.
    pub fn pending_increment(&self) -> i32 {
        self.pending_increment
    }

    /// Current rotation speed estimate, 0..=255.
    pub fn accelerator(&self) -> u8 {
        self.accelerator
    }

    /// Direction of the last accepted edge. [`Direction::Increment`] before any edge was accepted.
    pub fn last_direction(&self) -> Direction {
        if self.last_direction_dec {
            Direction::Decrement
        } else {
            Direction::Increment
        }
    }

    /// The 4-bit divider of [`SpeedMode::Slow`].
    pub fn slow_divider(&self) -> u8 {
        self.slow_divider
    }

    pub(crate) fn shift_in(&mut self, pins: u8) {
        self.previous_pins = self.current_pins;
        self.current_pins = pins & 0b11;
    }

    pub(crate) fn take_increment(&mut self) -> i32 {
        core::mem::take(&mut self.pending_increment)
    }

    pub(crate) fn decay(&mut self) {
        self.accelerator = self.accelerator.saturating_sub(1);
    }

    /// Evaluates the edge between the previous and current pins, if any, and returns its direction when accepted.
    ///
    /// The edge is consumed either way, so an unmoved encoder is not evaluated again on the next cycle.
    pub(crate) fn evaluate(&mut self, config: &EncoderConfig) -> Option<Direction> {
        if self.previous_pins == self.current_pins {
            return None;
        }
        let state = self.state();
        self.previous_pins = self.current_pins;

        let (direction, edge) = edge::classify(state)?;
        if !config.encoder_type.edge_mask().contains(edge) {
            return None;
        }

        if direction != self.last_direction() && self.accelerator >= REVERSAL_THRESHOLD {
            trace!(
                "rejecting reversal at state {=u8:#x}, accelerator {}",
                state,
                self.accelerator
            );
            return None;
        }

        let last_trigger = match direction {
            Direction::Decrement => self.previous_dec_state,
            Direction::Increment => self.previous_inc_state,
        };
        if config.encoder_type == EncoderType::NonDetented && last_trigger == Some(state) {
            trace!("rejecting repeated state {=u8:#x}", state);
            return None;
        }

        self.apply_speed(direction, config);

        self.accelerator = u8::MAX;
        match direction {
            Direction::Decrement => {
                self.previous_dec_state = Some(state);
                self.previous_inc_state = None;
            }
            Direction::Increment => {
                self.previous_inc_state = Some(state);
                self.previous_dec_state = None;
            }
        }
        self.last_direction_dec = direction == Direction::Decrement;

        Some(direction)
    }

    fn apply_speed(&mut self, direction: Direction, config: &EncoderConfig) {
        // the estimate may only climb one band per edge, so a single quick flick doesn't jump straight to full speed
        let speed = self
            .accelerator
            .min(self.previous_accelerator.saturating_add(ACCELERATION_STEP));
        self.previous_accelerator = speed;

        let speed_param = config.speed_param & 0b111;
        match config.speed_mode {
            SpeedMode::Normal => {
                self.pending_increment = self.pending_increment.saturating_add(direction.sign());
            }
            SpeedMode::Fast => {
                let magnitude = ((speed & 0xc0) >> (7 - speed_param)).max(1);
                self.pending_increment = self
                    .pending_increment
                    .saturating_add(direction.sign() * i32::from(magnitude))
                    .clamp(-FAST_LIMIT, FAST_LIMIT);
            }
            SpeedMode::Slow => {
                if direction != self.last_direction() {
                    self.slow_divider = match direction {
                        Direction::Decrement => 0x0f,
                        Direction::Increment => 0,
                    };
                }
                let step = speed_param + 1;
                match direction {
                    Direction::Increment => {
                        let divider = self.slow_divider + step;
                        if divider > 0x0f {
                            self.pending_increment = self.pending_increment.saturating_add(1);
                        }
                        self.slow_divider = divider & 0x0f;
                    }
                    Direction::Decrement => match self.slow_divider.checked_sub(step) {
                        Some(divider) => self.slow_divider = divider,
                        None => {
                            self.pending_increment = self.pending_increment.saturating_sub(1);
                            self.slow_divider = self.slow_divider + 0x10 - step;
                        }
                    },
                }
            }
        }
    }
}
