/// Where an encoder's two pins are read from.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinSource {
    /// The pins live in this shift-register byte of the scanned input chain.
    Register(u8),
    /// The owning application supplies the pins through `inject_pin_state`; no register is scanned.
    #[default]
    Injected,
}

impl PinSource {
    /// Returns the scanned register, if any.
    pub fn register(self) -> Option<u8> {
        match self {
            Self::Register(register) => Some(register),
            Self::Injected => None,
        }
    }
}
