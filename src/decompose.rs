use serde::Serialize;

use crate::error::{NumeralError, NumeralResult};
use crate::lexicon::LIMIT;

/// A number split into place-value components, least-significant first.
///
/// Each component is `digit * 10^position`, where `position` is its index in
/// the sequence. The components always sum to the original number. Zero is
/// the single sentinel component `[0]`.
///
/// # Example
///
/// ```
/// use sankhya::decompose::decompose;
///
/// let parts = decompose(1203).unwrap();
/// assert_eq!(parts.components(), &[3, 0, 200, 1000]);
/// assert_eq!(parts.sum(), 1203);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Decomposition(Vec<u64>);

impl Decomposition {
    pub fn components(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<u64> {
        self.0.get(position).copied()
    }

    /// True for the zero sentinel
    pub fn is_zero(&self) -> bool {
        self.0 == [0]
    }

    pub fn sum(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Iterate over `(position, component)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

impl IntoIterator for Decomposition {
    type Item = u64;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Decomposition {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Split `number` into its place-value components.
///
/// # Errors
///
/// Returns [`NumeralError::TierOverflow`] for values of 10^16 and above,
/// which would need a tier with no name.
pub fn decompose(number: u64) -> NumeralResult<Decomposition> {
    if number >= LIMIT {
        return Err(NumeralError::TierOverflow {
            value: Some(number),
        });
    }
    if number == 0 {
        return Ok(Decomposition(vec![0]));
    }

    let mut components = Vec::new();
    let mut remaining = number;
    let mut place = 1u64;
    while remaining > 0 {
        let digit = remaining % 10;
        components.push(digit * place);
        remaining /= 10;
        place *= 10;
    }
    Ok(Decomposition(components))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_zero() {
        let parts = decompose(0).unwrap();
        assert_eq!(parts.components(), &[0]);
        assert!(parts.is_zero());
        assert_eq!(parts.sum(), 0);
    }

    #[test]
    fn test_decompose_order() {
        assert_eq!(decompose(123).unwrap().components(), &[3, 20, 100]);
        assert_eq!(decompose(5).unwrap().components(), &[5]);
        assert_eq!(decompose(100).unwrap().components(), &[0, 0, 100]);
        assert_eq!(
            decompose(40_506).unwrap().components(),
            &[6, 0, 500, 0, 40_000]
        );
    }

    #[test]
    fn test_decompose_component_count() {
        for (number, digits) in [(7u64, 1usize), (10, 2), (999, 3), (1000, 4), (LIMIT - 1, 16)] {
            let parts = decompose(number).unwrap();
            assert_eq!(parts.len(), digits, "component count for {}", number);
            // The highest component sits at position digits - 1
            let top = parts.get(digits - 1).unwrap();
            assert!(top >= 10u64.pow(digits as u32 - 1));
        }
    }

    #[test]
    fn test_decompose_sum_round_trip() {
        let mut number = 1u64;
        while number < LIMIT {
            for candidate in [number - 1, number, number + 7, number * 3 + 1] {
                if candidate < LIMIT {
                    assert_eq!(decompose(candidate).unwrap().sum(), candidate);
                }
            }
            number *= 10;
        }
        assert_eq!(decompose(LIMIT - 1).unwrap().sum(), LIMIT - 1);
    }

    #[test]
    fn test_decompose_overflow() {
        assert_eq!(
            decompose(LIMIT),
            Err(NumeralError::TierOverflow { value: Some(LIMIT) })
        );
        assert!(decompose(u64::MAX).is_err());
    }
}
