//! The fixed quadrature edge table.
//!
//! An edge is identified by the 4-bit "state" nibble `previous_pins << 2 | current_pins`. Turning clockwise walks
//! the pins through `00 → 01 → 11 → 10 → 00`; counter-clockwise walks the same ring backwards. Of the sixteen
//! nibbles, eight are valid single-pin edges: four increments and four decrements. Nibbles where both pins flip at
//! once carry no direction and are ignored.

use bitmask_enum::bitmask;

/// The direction of a quadrature edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Counter-clockwise.
    Decrement,
    /// Clockwise.
    Increment,
}

impl Direction {
    /// `-1` or `+1`.
    pub fn sign(self) -> i32 {
        match self {
            Self::Decrement => -1,
            Self::Increment => 1,
        }
    }
}

/// One flag per valid edge, named after its direction and the pin state it arrives at.
#[bitmask(u8)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeMask {
    /// `01 → 00`
    Dec00,
    /// `00 → 10`
    Dec10,
    /// `10 → 11`
    Dec11,
    /// `11 → 01`
    Dec01,
    /// `10 → 00`
    Inc00,
    /// `00 → 01`
    Inc01,
    /// `01 → 11`
    Inc11,
    /// `11 → 10`
    Inc10,
}

impl EdgeMask {
    /// Both edges (one per direction) ending on the given pin state.
    pub fn arriving_at(pins: u8) -> Self {
        match pins & 0b11 {
            0b00 => Self::Dec00 | Self::Inc00,
            0b01 => Self::Dec01 | Self::Inc01,
            0b10 => Self::Dec10 | Self::Inc10,
            _ => Self::Dec11 | Self::Inc11,
        }
    }
}

/// Looks up the direction and table flag of a state nibble; `None` for nibbles that are not a single-pin edge.
pub fn classify(state: u8) -> Option<(Direction, EdgeMask)> {
    use Direction::*;

    match state & 0x0f {
        0x4 => Some((Decrement, EdgeMask::Dec00)),
        0x2 => Some((Decrement, EdgeMask::Dec10)),
        0xb => Some((Decrement, EdgeMask::Dec11)),
        0xd => Some((Decrement, EdgeMask::Dec01)),
        0x8 => Some((Increment, EdgeMask::Inc00)),
        0x1 => Some((Increment, EdgeMask::Inc01)),
        0x7 => Some((Increment, EdgeMask::Inc11)),
        0xe => Some((Increment, EdgeMask::Inc10)),
        _ => None,
    }
}
