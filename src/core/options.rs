use serde::{Deserialize, Serialize};

use crate::encoders::algorithms::errors::ConversionError;

/// Smallest accepted Caesar shift.
pub const MIN_CAESAR_SHIFT: i32 = 1;
/// Largest accepted Caesar shift.
pub const MAX_CAESAR_SHIFT: i32 = 25;
/// Shift used when none is configured.
pub const DEFAULT_CAESAR_SHIFT: i32 = 3;

/// Parameters consulted by the conversion engine.
///
/// Schemes that do not care about a field ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Decode instead of encode
    #[serde(default)]
    pub reverse: bool,
    /// Caesar shift; the engine applies it unchecked, see [`ConversionOptions::validate`]
    #[serde(default = "default_shift")]
    pub caesar_shift: i32,
}

fn default_shift() -> i32 {
    DEFAULT_CAESAR_SHIFT
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            reverse: false,
            caesar_shift: DEFAULT_CAESAR_SHIFT,
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same options, decode direction.
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_caesar_shift(mut self, shift: i32) -> Self {
        self.caesar_shift = shift;
        self
    }

    /// Rejects a Caesar shift outside `1..=25`.
    pub fn validate(&self) -> Result<(), ConversionError> {
        if !(MIN_CAESAR_SHIFT..=MAX_CAESAR_SHIFT).contains(&self.caesar_shift) {
            return Err(ConversionError::InvalidOption {
                option: "caesar_shift",
                value: self.caesar_shift as i64,
                expected: "a shift between 1 and 25",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConversionOptions::default();
        assert!(!options.reverse);
        assert_eq!(options.caesar_shift, 3);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = ConversionOptions::new().reversed().with_caesar_shift(7);
        assert!(options.reverse);
        assert_eq!(options.caesar_shift, 7);
        assert!(!options.with_reverse(false).reverse);
    }

    #[test]
    fn test_shift_bounds() {
        assert!(ConversionOptions::new().with_caesar_shift(1).validate().is_ok());
        assert!(ConversionOptions::new().with_caesar_shift(25).validate().is_ok());

        for bad in [0, 26, -3] {
            let err = ConversionOptions::new()
                .with_caesar_shift(bad)
                .validate()
                .unwrap_err();
            assert!(matches!(
                err,
                ConversionError::InvalidOption { option: "caesar_shift", value, .. } if value == bad as i64
            ));
        }
    }
}
