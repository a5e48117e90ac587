use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::decompose::{Decomposition, decompose};
use crate::error::{NumeralError, NumeralResult};
use crate::glyphs::{parse_ascii_digits, to_native_digits, translate_glyphs};
use crate::lexicon::LIMIT;
use crate::namer::{Namer, WordSequence};

/// Where a number comes from: a plain integer or Devanagari numerals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberSource {
    Integer(u64),
    NativeText(String),
}

/// A number that can be spelled out in Sanskrit.
///
/// The value is validated once at construction: it is always below 10^16, so
/// every place-value tier it needs has a name. Native-script input is
/// converted to the integer immediately and not kept.
///
/// # Example
///
/// ```
/// use sankhya::SanskritNumber;
///
/// let number = SanskritNumber::from_native("१२३").unwrap();
/// assert_eq!(number.value(), 123);
/// assert_eq!(number.words().unwrap().phrase(), "त्रि विंशति अधिक एक शत");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SanskritNumber {
    value: u64,
}

impl SanskritNumber {
    /// Build a number from exactly one of an integer or Devanagari text.
    ///
    /// # Errors
    ///
    /// - [`NumeralError::InvalidInput`] when both or neither are given, or the
    ///   text is empty
    /// - [`NumeralError::UnrecognizedGlyph`] for non-digit text
    /// - [`NumeralError::TierOverflow`] for values of 10^16 and above
    pub fn construct(number: Option<u64>, native_text: Option<&str>) -> NumeralResult<Self> {
        match (number, native_text) {
            (Some(_), Some(_)) => Err(NumeralError::InvalidInput(
                "give either an integer or Sanskrit numerals, not both".to_string(),
            )),
            (Some(value), None) => Self::from_source(NumberSource::Integer(value)),
            (None, Some(text)) => Self::from_source(NumberSource::NativeText(text.to_string())),
            (None, None) => Err(NumeralError::InvalidInput(
                "either an integer or Sanskrit numerals should be provided".to_string(),
            )),
        }
    }

    pub fn from_source(source: NumberSource) -> NumeralResult<Self> {
        let value = match source {
            NumberSource::Integer(value) => value,
            NumberSource::NativeText(text) => {
                if text.is_empty() {
                    return Err(NumeralError::InvalidInput(
                        "Sanskrit numerals must not be empty".to_string(),
                    ));
                }
                translate_glyphs(&text)?
            }
        };
        if value >= LIMIT {
            return Err(NumeralError::TierOverflow { value: Some(value) });
        }
        debug!(value, "constructed number");
        Ok(SanskritNumber { value })
    }

    pub fn new(value: u64) -> NumeralResult<Self> {
        Self::from_source(NumberSource::Integer(value))
    }

    pub fn from_native(text: &str) -> NumeralResult<Self> {
        Self::from_source(NumberSource::NativeText(text.to_string()))
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// The value written with Devanagari digits
    pub fn native_digits(&self) -> String {
        to_native_digits(self.value)
    }

    pub fn decompose(&self) -> NumeralResult<Decomposition> {
        decompose(self.value)
    }

    /// Words with the default naming options
    pub fn words(&self) -> NumeralResult<WordSequence> {
        self.words_with(&Namer::new())
    }

    pub fn words_with(&self, namer: &Namer) -> NumeralResult<WordSequence> {
        namer.name(&self.decompose()?)
    }

    /// Sum of two numbers as a new number; neither operand changes.
    ///
    /// # Errors
    ///
    /// [`NumeralError::TierOverflow`] when the sum reaches 10^16.
    pub fn checked_add(&self, other: &SanskritNumber) -> NumeralResult<Self> {
        let sum = self
            .value
            .checked_add(other.value)
            .ok_or(NumeralError::TierOverflow { value: None })?;
        Self::new(sum)
    }
}

/// Add two numbers, see [`SanskritNumber::checked_add`].
pub fn add(a: &SanskritNumber, b: &SanskritNumber) -> NumeralResult<SanskritNumber> {
    a.checked_add(b)
}

impl TryFrom<u64> for SanskritNumber {
    type Error = NumeralError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SanskritNumber> for u64 {
    fn from(number: SanskritNumber) -> Self {
        number.value
    }
}

/// Parses ASCII digits ("123") or Devanagari digits ("१२३").
///
/// Surrounding whitespace is ignored. Glyph positions in errors count chars of
/// the untrimmed input.
impl FromStr for SanskritNumber {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let offset = s.chars().take_while(|c| c.is_whitespace()).count();
        let s = s.trim();
        if s.is_empty() {
            return Err(NumeralError::InvalidInput(
                "expected a number, got an empty string".to_string(),
            ));
        }
        if s.starts_with(|c: char| c.is_ascii_digit()) {
            if let Some((position, glyph)) =
                s.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
            {
                return Err(NumeralError::UnrecognizedGlyph {
                    glyph,
                    position: position + offset,
                });
            }
            return Self::new(parse_ascii_digits(s)?);
        }
        Self::from_native(s).map_err(|e| match e {
            NumeralError::UnrecognizedGlyph { glyph, position } => {
                NumeralError::UnrecognizedGlyph {
                    glyph,
                    position: position + offset,
                }
            }
            other => other,
        })
    }
}

impl fmt::Display for SanskritNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.native_digits())
    }
}
