//! The quadrature decoding engine.
//!
//! An [`EncoderBank`] owns the configuration and runtime state of up to `N` encoders. Once per scan cycle the
//! firmware calls [`update_all`][EncoderBank::update_all], which turns the latest pin samples into pending step
//! counts, followed by [`drain_and_dispatch`][EncoderBank::drain_and_dispatch], which hands those counts to the
//! application.
//!
//! # Decoding
//!
//! Each cycle, for every enabled encoder:
//!
//! 1. the accelerator decays by one;
//! 2. encoders fed by a shift register re-read their pins, provided the scanner reports them as changed;
//! 3. a pin change is looked up in the fixed [edge table][classify] and kept only if the
//!    [`EncoderType`][crate::configuration::EncoderType] honors it;
//! 4. a reversal arriving while the accelerator is still above [`REVERSAL_THRESHOLD`] is taken for contact bounce,
//!    and non-detented encoders ignore an edge identical to the last one counted in the same direction;
//! 5. the surviving edge is scaled per [`SpeedMode`][crate::configuration::SpeedMode] and the accelerator is rearmed.
//!
//! Encoders whose pins are injected by the application go through the same steps minus the register read; see
//! [`inject_pin_state`][EncoderBank::inject_pin_state].
//!
//! # Concurrency
//!
//! [`EncoderBank`] relies on `&mut self` for exclusivity. When injection happens in a different execution context
//! than the scan (e.g., an interrupt handler), use [`SharedEncoderBank`], which wraps every read-modify-write in a
//! critical section.

mod edge;
pub use edge::*;

mod shared;
pub use shared::*;

mod state;
pub use state::*;

use crate::{
    Error,
    configuration::{EncoderConfig, PinSource},
    pin_sampler::PinSampler,
};

/// A fixed-capacity set of independently configured rotary encoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderBank<const N: usize> {
    configs: [EncoderConfig; N],
    states: [EncoderState; N],
}

impl<const N: usize> Default for EncoderBank<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EncoderBank<N> {
    /// Constructs an [`EncoderBank`] with every slot disabled and at rest.
    pub const fn new() -> Self {
        Self {
            configs: [EncoderConfig::DISABLED; N],
            states: [EncoderState::NEUTRAL; N],
        }
    }

    /// The number of encoder slots.
    pub const fn capacity(&self) -> usize {
        N
    }

    fn check(index: usize) -> Result<usize, Error> {
        if index < N {
            Ok(index)
        } else {
            warn!("encoder index {} out of range (capacity {})", index, N);
            Err(Error::InvalidIndex)
        }
    }

    /// Replaces the configuration of slot `index`. Runtime state is kept; see [`reset_state`][Self::reset_state].
    pub fn configure(&mut self, index: usize, config: EncoderConfig) -> Result<(), Error> {
        let index = Self::check(index)?;
        debug!("configuring encoder {}: {}", index, config);
        self.configs[index] = config;
        Ok(())
    }

    /// Returns the configuration of slot `index`, or [`EncoderConfig::DISABLED`] for an invalid index.
    pub fn config(&self, index: usize) -> EncoderConfig {
        self.configs
            .get(index)
            .copied()
            .unwrap_or(EncoderConfig::DISABLED)
    }

    /// Stores a new two-bit pin sample for an encoder fed by the application ([`PinSource::Injected`]); the
    /// previous sample becomes the reference the next edge is measured from.
    ///
    /// Only the two low bits of `pins` are used. The sample is picked up by the next
    /// [`update_all`][Self::update_all].
    pub fn inject_pin_state(&mut self, index: usize, pins: u8) -> Result<(), Error> {
        let index = Self::check(index)?;
        self.states[index].shift_in(pins);
        Ok(())
    }

    /// Returns the latest two-bit pin sample of slot `index`, or `0` for an invalid index.
    pub fn pin_state(&self, index: usize) -> u8 {
        self.states
            .get(index)
            .map(EncoderState::current_pins)
            .unwrap_or_default()
    }

    /// Returns the steps of slot `index` not yet dispatched, without draining them; `0` for an invalid index.
    pub fn pending_increment(&self, index: usize) -> i32 {
        self.states
            .get(index)
            .map(EncoderState::pending_increment)
            .unwrap_or_default()
    }

    /// Returns the runtime state of slot `index`, mostly for diagnostics.
    pub fn state(&self, index: usize) -> Option<&EncoderState> {
        self.states.get(index)
    }

    /// Returns slot `index` to [`EncoderState::NEUTRAL`], discarding pending steps. Useful after a live
    /// reconfiguration.
    pub fn reset_state(&mut self, index: usize) -> Result<(), Error> {
        let index = Self::check(index)?;
        self.states[index] = EncoderState::NEUTRAL;
        Ok(())
    }

    /// Advances every enabled encoder by one scan cycle. Must be called exactly once per cycle, after the scanner
    /// has sampled the shift registers.
    pub fn update_all<S: PinSampler + ?Sized>(&mut self, sampler: &S) {
        for (index, (config, state)) in self.configs.iter().zip(self.states.iter_mut()).enumerate() {
            if !config.encoder_type.is_enabled() {
                continue;
            }

            state.decay();

            if let PinSource::Register(register) = config.source {
                if sampler.changed(register, config.pin_mask()) {
                    state.shift_in(config.read_pins(sampler.value(register)));
                }
            }

            if let Some(direction) = state.evaluate(config) {
                trace!(
                    "encoder {} {}, pending {}",
                    index,
                    direction,
                    state.pending_increment()
                );
            }
        }
    }

    pub(crate) fn take_increment(&mut self, index: usize) -> i32 {
        self.states
            .get_mut(index)
            .map(EncoderState::take_increment)
            .unwrap_or_default()
    }

    /// Hands every non-zero pending increment to `handler` as `(index, increment)`, clearing it first.
    ///
    /// Call once per scan cycle, after [`update_all`][Self::update_all]. Draining again without an update in between
    /// calls `handler` zero times.
    pub fn drain_and_dispatch(&mut self, mut handler: impl FnMut(usize, i32)) {
        for index in 0..N {
            let increment = self.take_increment(index);
            if increment != 0 {
                handler(index, increment);
            }
        }
    }
}
