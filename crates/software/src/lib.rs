//! This crate contains the architecture-agnostic rotary encoder engine shared by the firmware of a modular MIDI
//! controller platform. It turns raw two-bit [quadrature](https://en.wikipedia.org/wiki/Incremental_encoder) samples,
//! whether scanned from a shift register or handed over by the application, into signed step counts, filtering
//! mechanical bounce and scaling the result by how fast the knob is being turned.
//!
//! The entry point is [`EncoderBank`][encoder_bank::EncoderBank], or its interrupt-safe sibling
//! [`SharedEncoderBank`][encoder_bank::SharedEncoderBank]. A scan cycle looks like this:
//!
//! ```
//! use knobwork_lib::{
//!     configuration::{EncoderConfig, EncoderType, PinSource},
//!     encoder_bank::EncoderBank,
//!     pin_sampler::ScanSnapshot,
//! };
//!
//! let mut bank = EncoderBank::<8>::new();
//! bank.configure(0, EncoderConfig::new(EncoderType::NonDetented, PinSource::Injected, 0))
//!     .unwrap();
//!
//! bank.inject_pin_state(0, 0b01).unwrap();
//! bank.update_all(&ScanSnapshot::EMPTY);
//! bank.drain_and_dispatch(|index, increment| assert_eq!((0, 1), (index, increment)));
//! ```

#![deny(missing_docs)]
#![no_std]

#[cfg(test)]
extern crate std;

// must come first so the logging macros are visible to the modules below
mod fmt;

mod error;
pub use error::Error;

/// Per-encoder settings: detent handling, speed policy, and where the pins come from.
pub mod configuration;

pub mod encoder_bank;

pub mod pin_sampler;
