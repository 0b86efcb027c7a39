use super::EncoderBank;
use crate::{Error, configuration::EncoderConfig, pin_sampler::PinSampler};
use core::cell::RefCell;
use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};

/// An [`EncoderBank`] that may be shared between the scan routine and other execution contexts, such as an
/// interrupt handler injecting pin states.
///
/// Every operation holds a critical section for the duration of its read-modify-write, so the scan never observes a
/// half-updated pin pair and a drain never races an update of the same pending increment. Being `Sync` and
/// const-constructible, it can live in a `static`:
///
/// ```
/// use knobwork_lib::encoder_bank::SharedEncoderBank;
///
/// static ENCODERS: SharedEncoderBank<16> = SharedEncoderBank::new();
/// ```
pub struct SharedEncoderBank<const N: usize> {
    bank: Mutex<CriticalSectionRawMutex, RefCell<EncoderBank<N>>>,
}

impl<const N: usize> Default for SharedEncoderBank<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SharedEncoderBank<N> {
    /// Constructs a [`SharedEncoderBank`] with every slot disabled and at rest.
    pub const fn new() -> Self {
        Self {
            bank: Mutex::new(RefCell::new(EncoderBank::new())),
        }
    }

    /// See [`EncoderBank::configure`].
    pub fn configure(&self, index: usize, config: EncoderConfig) -> Result<(), Error> {
        self.lock(|bank| bank.configure(index, config))
    }

    /// See [`EncoderBank::config`].
    pub fn config(&self, index: usize) -> EncoderConfig {
        self.lock(|bank| bank.config(index))
    }

    /// See [`EncoderBank::inject_pin_state`].
    pub fn inject_pin_state(&self, index: usize, pins: u8) -> Result<(), Error> {
        self.lock(|bank| bank.inject_pin_state(index, pins))
    }

    /// See [`EncoderBank::pin_state`].
    pub fn pin_state(&self, index: usize) -> u8 {
        self.lock(|bank| bank.pin_state(index))
    }

    /// See [`EncoderBank::pending_increment`].
    pub fn pending_increment(&self, index: usize) -> i32 {
        self.lock(|bank| bank.pending_increment(index))
    }

    /// See [`EncoderBank::reset_state`].
    pub fn reset_state(&self, index: usize) -> Result<(), Error> {
        self.lock(|bank| bank.reset_state(index))
    }

    /// See [`EncoderBank::update_all`]. The whole pass runs in one critical section.
    pub fn update_all<S: PinSampler + ?Sized>(&self, sampler: &S) {
        self.lock(|bank| bank.update_all(sampler))
    }

    /// See [`EncoderBank::drain_and_dispatch`].
    ///
    /// Each increment is taken in its own short critical section and `handler` runs outside of it, so the handler is
    /// free to call back into the bank; the slot being dispatched already reads zero.
    pub fn drain_and_dispatch(&self, mut handler: impl FnMut(usize, i32)) {
        for index in 0..N {
            let increment = self.lock(|bank| bank.take_increment(index));
            if increment != 0 {
                handler(index, increment);
            }
        }
    }

    /// Runs `f` with exclusive access to the underlying bank inside a critical section.
    ///
    /// Keep `f` short; interrupts are masked while it runs on single-core targets.
    pub fn lock<U>(&self, f: impl FnOnce(&mut EncoderBank<N>) -> U) -> U {
        self.bank.lock(|bank| f(&mut bank.borrow_mut()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        configuration::{EncoderType, PinSource},
        pin_sampler::ScanSnapshot,
    };
    use std::vec::Vec;

    fn configured() -> SharedEncoderBank<3> {
        let bank = SharedEncoderBank::new();
        bank.configure(1, EncoderConfig::new(EncoderType::NonDetented, PinSource::Injected, 0))
            .unwrap();
        bank
    }

    #[test]
    fn mirrors_the_plain_bank() {
        let bank = configured();
        assert_eq!(Err(Error::InvalidIndex), bank.inject_pin_state(3, 0b01), "Expected left but got right");
        assert_eq!(EncoderConfig::DISABLED, bank.config(3), "Expected left but got right");

        bank.inject_pin_state(1, 0b01).unwrap();
        bank.update_all(&ScanSnapshot::EMPTY);
        assert_eq!(0b01, bank.pin_state(1), "Expected left but got right");
        assert_eq!(1, bank.pending_increment(1), "Expected left but got right");

        let mut calls = Vec::new();
        bank.drain_and_dispatch(|index, increment| calls.push((index, increment)));
        assert_eq!([(1, 1)].as_slice(), calls.as_slice(), "Expected left but got right");
    }

    #[test]
    fn handler_may_reenter() {
        let bank = configured();
        bank.inject_pin_state(1, 0b01).unwrap();
        bank.update_all(&ScanSnapshot::EMPTY);

        let mut seen_during_dispatch = None;
        bank.drain_and_dispatch(|index, _| {
            seen_during_dispatch = Some(bank.pending_increment(index));
            bank.inject_pin_state(index, 0b11).unwrap();
        });
        assert_eq!(Some(0), seen_during_dispatch, "Expected left but got right");
        assert_eq!(0b11, bank.pin_state(1), "Expected left but got right");
    }

    #[test]
    fn lock_exposes_the_bank() {
        let bank = configured();
        let capacity = bank.lock(|bank| bank.capacity());
        assert_eq!(3, capacity, "Expected left but got right");
    }
}
