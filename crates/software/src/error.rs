use core::fmt;

/// Errors returned by the index-taking mutators of an encoder bank.
///
/// Read accessors never fail; they fall back to a disabled/neutral value instead so that polling code can treat
/// every index alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The encoder index is not below the capacity of the bank.
    InvalidIndex,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidIndex => write!(f, "encoder index out of range"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn display() {
        assert_eq!(
            "encoder index out of range",
            Error::InvalidIndex.to_string(),
            "Expected left but got right"
        );
    }
}
