/// Error types for number construction, glyph translation and naming
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    /// Neither (or both) of an integer and native-script text was supplied
    InvalidInput(String),
    /// A character outside the ten Devanagari digit glyphs
    UnrecognizedGlyph { glyph: char, position: usize },
    /// The value needs a place-value tier beyond the largest named one.
    /// `value` is `None` when the input did not even fit in a `u64`.
    TierOverflow { value: Option<u64> },
    /// A tier-1 lookup with a value that is not a whole decade
    UnrecognizedDecade(u64),
}

impl std::fmt::Display for NumeralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumeralError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            NumeralError::UnrecognizedGlyph { glyph, position } => write!(
                f,
                "Unrecognized glyph '{}' (U+{:04X}) at position {}",
                glyph, *glyph as u32, position
            ),
            NumeralError::TierOverflow { value: Some(value) } => write!(
                f,
                "Tier overflow: {} is too large to name (limit is {})",
                value,
                crate::lexicon::LIMIT - 1
            ),
            NumeralError::TierOverflow { value: None } => write!(
                f,
                "Tier overflow: value is too large to name (limit is {})",
                crate::lexicon::LIMIT - 1
            ),
            NumeralError::UnrecognizedDecade(value) => {
                write!(f, "Unrecognized decade: {}", value)
            }
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            NumeralError::UnrecognizedGlyph {
                glyph: 'x',
                position: 2
            }
            .to_string(),
            "Unrecognized glyph 'x' (U+0078) at position 2"
        );
        assert_eq!(
            NumeralError::TierOverflow {
                value: Some(10_000_000_000_000_000)
            }
            .to_string(),
            "Tier overflow: 10000000000000000 is too large to name (limit is 9999999999999999)"
        );
        assert_eq!(
            NumeralError::UnrecognizedDecade(25).to_string(),
            "Unrecognized decade: 25"
        );
    }
}
