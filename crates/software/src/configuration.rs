mod encoder_config;
pub use encoder_config::*;

mod encoder_type;
pub use encoder_type::*;

mod pin_source;
pub use pin_source::*;

mod speed_mode;
pub use speed_mode::*;

use num_traits::{FromPrimitive, ToPrimitive};

/// A trait which allows infinite cycling of an enum's variants.
///
/// Useful for pushbutton menus on the controller, letting each press advance an encoder's setting (e.g., its
/// [`SpeedMode`]) to the next variant, cycling back to the beginning when all variants have been exhausted.
pub trait CycleConfig {
    /// Return the next variant, cycling back to the beginning as needed.
    fn cycle(self) -> Self
    where
        Self: FromPrimitive + ToPrimitive + Sized,
    {
        let index = self
            .to_u8()
            .expect("enum variants should be castable to u8");
        match <Self as FromPrimitive>::from_u8(index.wrapping_add(1)) {
            Some(new_selection) => new_selection,
            None => FromPrimitive::from_u8(0).expect("enum should not be empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_mode_cycles() {
        let mode = SpeedMode::Normal.cycle();
        assert_eq!(
            SpeedMode::Fast,
            mode,
            "Should advance to next variant; expected left but got right"
        );

        let mode = mode.cycle();
        assert_eq!(
            SpeedMode::Slow,
            mode,
            "Should advance to next variant; expected left but got right"
        );

        let mode = mode.cycle();
        assert_eq!(
            SpeedMode::Normal,
            mode,
            "Should wrap around to first variant; expected left but got right"
        );
    }

    #[test]
    fn encoder_type_cycles_through_disabled() {
        assert_eq!(
            EncoderType::NonDetented,
            EncoderType::Disabled.cycle(),
            "Expected left but got right"
        );
        assert_eq!(
            EncoderType::Disabled,
            EncoderType::Detented3.cycle(),
            "Should wrap around to first variant; expected left but got right"
        );
    }
}
