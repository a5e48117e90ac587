//! Devanagari digit glyphs
//!
//! Translates strings of native-script numerals (०१२३४५६७८९) to integers and
//! back. Every glyph maps 1:1 to an ASCII digit; anything else is rejected
//! with its position instead of being dropped.

use crate::error::{NumeralError, NumeralResult};
use crate::lexicon::LIMIT;

/// Devanagari digits, indexed by their ASCII value
const GLYPHS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Look up the ASCII digit for a single Devanagari glyph.
pub fn glyph_to_digit(glyph: char) -> Option<char> {
    GLYPHS
        .iter()
        .position(|&g| g == glyph)
        .map(|idx| (b'0' + idx as u8) as char)
}

/// Translate a sequence of Devanagari glyphs into an integer.
///
/// Glyphs are read in order, concatenated into an ASCII digit string, and the
/// string is parsed as a base-10 number.
///
/// # Errors
///
/// - [`NumeralError::InvalidInput`] for an empty sequence
/// - [`NumeralError::UnrecognizedGlyph`] at the first glyph outside the set
/// - [`NumeralError::TierOverflow`] when the value is 10^16 or more
///
/// # Example
///
/// ```
/// use sankhya::glyphs::translate_glyphs;
///
/// assert_eq!(translate_glyphs("१२३").unwrap(), 123);
/// ```
pub fn translate_glyphs(text: &str) -> NumeralResult<u64> {
    if text.is_empty() {
        return Err(NumeralError::InvalidInput(
            "no Devanagari digits were given".to_string(),
        ));
    }

    let mut digits = String::with_capacity(text.len());
    for (position, glyph) in text.chars().enumerate() {
        match glyph_to_digit(glyph) {
            Some(digit) => digits.push(digit),
            None => return Err(NumeralError::UnrecognizedGlyph { glyph, position }),
        }
    }

    parse_ascii_digits(&digits)
}

/// Parse a string that is known to contain only ASCII digits.
///
/// Leading zeros are ignored, so "0000123" is 123 and not an overflow.
pub(crate) fn parse_ascii_digits(digits: &str) -> NumeralResult<u64> {
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(0);
    }

    // u64 holds at most 20 digits; anything longer cannot be below LIMIT
    let value = significant
        .parse::<u64>()
        .map_err(|_| NumeralError::TierOverflow { value: None })?;
    if value >= LIMIT {
        return Err(NumeralError::TierOverflow { value: Some(value) });
    }
    Ok(value)
}

/// Render an integer with Devanagari digit glyphs.
pub fn to_native_digits(value: u64) -> String {
    value
        .to_string()
        .bytes()
        .map(|b| GLYPHS[(b - b'0') as usize])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_to_digit() {
        assert_eq!(glyph_to_digit('०'), Some('0'));
        assert_eq!(glyph_to_digit('५'), Some('5'));
        assert_eq!(glyph_to_digit('९'), Some('9'));
        assert_eq!(glyph_to_digit('5'), None);
        assert_eq!(glyph_to_digit('क'), None);
    }

    #[test]
    fn test_translate_glyphs() {
        assert_eq!(translate_glyphs("१२३").unwrap(), 123);
        assert_eq!(translate_glyphs("०").unwrap(), 0);
        assert_eq!(translate_glyphs("१००").unwrap(), 100);
        assert_eq!(translate_glyphs("००४२").unwrap(), 42);
    }

    #[test]
    fn test_translate_rejects_unknown_glyph() {
        assert_eq!(
            translate_glyphs("१२x"),
            Err(NumeralError::UnrecognizedGlyph {
                glyph: 'x',
                position: 2
            })
        );
        // ASCII digits are not native glyphs
        assert_eq!(
            translate_glyphs("1२"),
            Err(NumeralError::UnrecognizedGlyph {
                glyph: '1',
                position: 0
            })
        );
    }

    #[test]
    fn test_translate_empty() {
        assert!(matches!(
            translate_glyphs(""),
            Err(NumeralError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_translate_overflow() {
        // 10^16
        assert_eq!(
            translate_glyphs("१००००००००००००००००"),
            Err(NumeralError::TierOverflow {
                value: Some(10_000_000_000_000_000)
            })
        );
        // 9999999999999999 is the largest nameable value
        assert_eq!(
            translate_glyphs("९९९९९९९९९९९९९९९९").unwrap(),
            9_999_999_999_999_999
        );
        // Does not fit in u64 at all
        assert_eq!(
            translate_glyphs("१२३४५६७८९०१२३४५६७८९०१"),
            Err(NumeralError::TierOverflow { value: None })
        );
    }

    #[test]
    fn test_to_native_digits() {
        assert_eq!(to_native_digits(0), "०");
        assert_eq!(to_native_digits(123), "१२३");
        assert_eq!(to_native_digits(9_876_543_210), "९८७६५४३२१०");
    }
}
