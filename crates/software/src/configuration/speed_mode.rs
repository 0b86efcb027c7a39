use num_derive::{FromPrimitive, ToPrimitive};

/// Determines how accepted edges are translated into step counts.
///
/// The accompanying `speed_param` of [`EncoderConfig`][super::EncoderConfig] is interpreted per mode.
#[derive(Debug, Default, Copy, Clone, ToPrimitive, FromPrimitive, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedMode {
    /// Every accepted edge is exactly one step.
    #[default]
    Normal,
    /// Accelerated: the faster the knob turns, the larger each step. `speed_param` (0..=7) sets how aggressively the
    /// step grows; 7 is the most aggressive. A single burst is bounded to ±70.
    Fast,
    /// Clock-divided: `speed_param + 1` is added to a 4-bit divider per edge and a step is emitted only when it
    /// wraps. With `speed_param` 0, sixteen edges make one step; with 7, two edges do.
    Slow,
}
impl super::CycleConfig for SpeedMode {}
