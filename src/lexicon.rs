//! The fixed Sanskrit number-word table
//!
//! Words are grouped by place-value tier:
//!
//! - tier 0: units 0-9
//! - tier 1: decades 10-90
//! - tiers 2-15: one name per power of ten, following the Indian
//!   scale (lakh, crore, ...) rather than thousand-grouping.
//!
//! All lookups are total over their documented domain; anything outside it is
//! an error rather than an empty or missing word.

use crate::error::{NumeralError, NumeralResult};

/// Highest place-value tier with a name
pub const MAX_TIER: usize = 15;

/// First value that cannot be named (10^16)
pub const LIMIT: u64 = 10_u64.pow(MAX_TIER as u32 + 1);

/// Word for the number zero
pub const ZERO_WORD: &str = "शून्य";

/// Connective placed before each higher-order term ("additionally")
pub const CONNECTIVE: &str = "अधिक";

/// Tier 0. The empty entry for 0 means "no word".
const UNITS: [&str; 10] = [
    "",
    "एक",
    "द्वि",
    "त्रि",
    "चतुर्",
    "पञ्च",
    "षट्",
    "सप्त",
    "अष्ट",
    "नव",
];

/// Tier 1, indexed by decade. 60 (षष्टि) is filled in here; older tables
/// omit it.
const DECADES: [&str; 10] = [
    "",
    "दश",
    "विंशति",
    "त्रिंशत्",
    "चत्वारिंशत्",
    "पञ्चाशत्",
    "षष्टि",
    "सप्तति",
    "अशीति",
    "नवति",
];

/// Tiers 2..=15, indexed by `tier - 2`
const POWERS: [&str; MAX_TIER - 1] = [
    "शत",
    "सहस्र",
    "अयुत",
    "लक्ष",
    "प्रयुत",
    "कोटि",
    "दशकोटि",
    "महापद्म",
    "सहस्रकोटि",
    "लक्षकोटि",
    "दशलक्षकोटि",
    "शतलक्षकोटि",
    "सहस्रलक्षकोटि",
    "लक्षलक्षकोटि",
];

/// Word for a single digit (tier 0). Returns `""` for 0.
///
/// Values above 9 are reported as [`NumeralError::InvalidInput`].
pub fn unit_word(digit: u64) -> NumeralResult<&'static str> {
    usize::try_from(digit)
        .ok()
        .and_then(|idx| UNITS.get(idx))
        .copied()
        .ok_or_else(|| NumeralError::InvalidInput(format!("{} is not a single digit", digit)))
}

/// Word for a whole decade value such as 20 or 70 (tier 1). Returns `""` for 0.
pub fn decade_word(value: u64) -> NumeralResult<&'static str> {
    if value % 10 != 0 || value > 90 {
        return Err(NumeralError::UnrecognizedDecade(value));
    }
    Ok(DECADES[(value / 10) as usize])
}

/// Name of a power-of-ten tier (2 = hundred, 3 = thousand, ...)
pub fn tier_name(tier: usize) -> NumeralResult<&'static str> {
    if tier > MAX_TIER {
        return Err(NumeralError::TierOverflow { value: None });
    }
    POWERS.get(tier.wrapping_sub(2)).copied().ok_or_else(|| {
        NumeralError::InvalidInput(format!("tier {} has no standalone name", tier))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit() {
        assert_eq!(LIMIT, 10_000_000_000_000_000);
    }

    #[test]
    fn test_unit_words() {
        assert_eq!(unit_word(0).unwrap(), "");
        assert_eq!(unit_word(3).unwrap(), "त्रि");
        assert_eq!(unit_word(9).unwrap(), "नव");
        assert!(unit_word(10).is_err());
        assert!(unit_word((1 << 32) + 3).is_err());
        assert!(unit_word(u64::MAX).is_err());
    }

    #[test]
    fn test_decade_words() {
        assert_eq!(decade_word(0).unwrap(), "");
        assert_eq!(decade_word(10).unwrap(), "दश");
        assert_eq!(decade_word(20).unwrap(), "विंशति");
        assert_eq!(decade_word(60).unwrap(), "षष्टि");
        assert_eq!(decade_word(90).unwrap(), "नवति");
    }

    #[test]
    fn test_decade_rejects_non_decades() {
        assert_eq!(decade_word(25), Err(NumeralError::UnrecognizedDecade(25)));
        assert_eq!(decade_word(100), Err(NumeralError::UnrecognizedDecade(100)));
    }

    #[test]
    fn test_tier_names() {
        assert_eq!(tier_name(2).unwrap(), "शत");
        assert_eq!(tier_name(3).unwrap(), "सहस्र");
        assert_eq!(tier_name(5).unwrap(), "लक्ष");
        assert_eq!(tier_name(7).unwrap(), "कोटि");
        assert_eq!(tier_name(MAX_TIER).unwrap(), "लक्षलक्षकोटि");
        assert_eq!(
            tier_name(MAX_TIER + 1),
            Err(NumeralError::TierOverflow { value: None })
        );
        assert!(matches!(tier_name(1), Err(NumeralError::InvalidInput(_))));
    }
}
