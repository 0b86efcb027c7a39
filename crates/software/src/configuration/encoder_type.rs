use crate::encoder_bank::EdgeMask;
use num_derive::{FromPrimitive, ToPrimitive};

/// Selects which quadrature edges an encoder reacts to.
///
/// Mechanical encoders rest in "detents" (the clicks felt while turning). Depending on the part, a click may land on
/// every electrical edge, on every other edge, or only once per full quadrature cycle; reacting to edges between
/// clicks would make a single click count several times. Each variant therefore maps to an [`EdgeMask`] that honors
/// only the edges ending on a click.
#[derive(Debug, Default, Copy, Clone, ToPrimitive, FromPrimitive, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderType {
    /// The encoder is not decoded at all; scan cycles leave its state untouched.
    #[default]
    Disabled,
    /// Every valid edge counts. Meant for smooth (click-less) encoders and optical wheels.
    NonDetented,
    /// Clicks rest at pin states `00` and `11`: only edges arriving there count.
    Detented1,
    /// Clicks rest at pin states `01` and `10`: only edges arriving there count.
    Detented2,
    /// Offset detents: decrements count when arriving at `00`/`11`, increments when arriving at `01`/`10`.
    Detented3,
}
impl super::CycleConfig for EncoderType {}

impl EncoderType {
    /// Returns the set of edges this type honors.
    pub fn edge_mask(self) -> EdgeMask {
        match self {
            Self::Disabled => EdgeMask::none(),
            Self::NonDetented => {
                EdgeMask::arriving_at(0b00)
                    | EdgeMask::arriving_at(0b01)
                    | EdgeMask::arriving_at(0b10)
                    | EdgeMask::arriving_at(0b11)
            }
            Self::Detented1 => EdgeMask::arriving_at(0b00) | EdgeMask::arriving_at(0b11),
            Self::Detented2 => EdgeMask::arriving_at(0b01) | EdgeMask::arriving_at(0b10),
            Self::Detented3 => {
                EdgeMask::Dec00 | EdgeMask::Dec11 | EdgeMask::Inc01 | EdgeMask::Inc10
            }
        }
    }

    /// Returns false for [`EncoderType::Disabled`] only.
    pub fn is_enabled(self) -> bool {
        self != Self::Disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_detented_honors_every_edge() {
        assert_eq!(
            8,
            EncoderType::NonDetented.edge_mask().bits().count_ones(),
            "Expected left but got right"
        );
    }

    #[test]
    fn detented_variants_honor_distinct_halves() {
        let masks = [
            EncoderType::Detented1.edge_mask(),
            EncoderType::Detented2.edge_mask(),
            EncoderType::Detented3.edge_mask(),
        ];
        for mask in masks {
            assert_eq!(4, mask.bits().count_ones(), "Expected left but got right");
        }
        assert_ne!(masks[0], masks[1]);
        assert_ne!(masks[0], masks[2]);
        assert_ne!(masks[1], masks[2]);
    }

    #[test]
    fn disabled_honors_nothing() {
        assert_eq!(0, EncoderType::Disabled.edge_mask().bits(), "Expected left but got right");
        assert!(!EncoderType::Disabled.is_enabled());
    }
}
