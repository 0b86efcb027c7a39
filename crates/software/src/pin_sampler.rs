//! The boundary to the input scanner.
//!
//! Scanning the shift-register chain is not this crate's business: once per scan cycle the firmware hands the
//! freshly sampled bytes to [`EncoderBank::update_all`][crate::encoder_bank::EncoderBank::update_all] through a
//! [`PinSampler`].

/// Source of the sampled shift-register bytes for one scan cycle.
pub trait PinSampler {
    /// Returns the latest sampled byte of `register`.
    fn value(&self, register: u8) -> u8;

    /// Reports whether any bit of `mask` in `register` changed since the previous scan.
    ///
    /// This is purely an optimization hint; unmoved encoders are skipped without re-reading their pins. The default
    /// reports every register as changed, which is always correct but a little slower.
    fn changed(&self, register: u8, mask: u8) -> bool {
        let _ = (register, mask);
        true
    }
}

/// A [`PinSampler`] over the two parallel per-scan arrays produced by the input scanner: the sampled bytes and,
/// optionally, a "changed since last scan" mask per byte.
///
/// Registers beyond the end of either slice read as `0` and as unchanged.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanSnapshot<'a> {
    values: &'a [u8],
    changed: Option<&'a [u8]>,
}

impl ScanSnapshot<'static> {
    /// A snapshot without any registers, for banks whose encoders are all fed through `inject_pin_state`.
    pub const EMPTY: Self = Self {
        values: &[],
        changed: Some(&[]),
    };
}

impl<'a> ScanSnapshot<'a> {
    /// Constructs a [`ScanSnapshot`] from sampled bytes and their per-byte change masks.
    pub const fn new(values: &'a [u8], changed: &'a [u8]) -> Self {
        Self {
            values,
            changed: Some(changed),
        }
    }

    /// Constructs a [`ScanSnapshot`] for a scanner that doesn't track changes; every register is re-read.
    pub const fn without_change_hint(values: &'a [u8]) -> Self {
        Self {
            values,
            changed: None,
        }
    }
}

impl PinSampler for ScanSnapshot<'_> {
    fn value(&self, register: u8) -> u8 {
        self.values
            .get(usize::from(register))
            .copied()
            .unwrap_or_default()
    }

    fn changed(&self, register: u8, mask: u8) -> bool {
        match self.changed {
            Some(changed) => changed
                .get(usize::from(register))
                .is_some_and(|bits| bits & mask != 0),
            None => true,
        }
    }
}
