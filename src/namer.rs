//! Naming of place-value components
//!
//! The namer walks a [`Decomposition`] from the units upwards:
//!
//! 1. **Units and tens** are looked up directly (5 → पञ्च, 20 → विंशति).
//! 2. **Higher tiers** become one compound token made of the digit word and
//!    the tier name (300 → "त्रि शत"), preceded by the connective अधिक.
//! 3. **Zero digits** contribute nothing, except for the number zero itself,
//!    which is the single word शून्य.
//!
//! So 123 reads as `["त्रि", "विंशति", "अधिक", "एक शत"]`, "three, twenty,
//! and one hundred".

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::decompose::Decomposition;
use crate::error::NumeralResult;
use crate::lexicon::{CONNECTIVE, ZERO_WORD, decade_word, tier_name, unit_word};

/// Switches for the two places where the classical reading is ambiguous
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamerOptions {
    /// Emit the connective before every higher-order term, even when nothing
    /// has been emitted yet (100 → `["अधिक", "एक शत"]`). When off, the
    /// connective only joins a term to words already in the sequence.
    pub connective_before_first: bool,
    /// Keep the empty word produced by a zero units or tens digit
    /// (20 → `["", "विंशति"]`) instead of dropping it.
    pub keep_empty_tokens: bool,
}

impl Default for NamerOptions {
    fn default() -> Self {
        NamerOptions {
            connective_before_first: true,
            keep_empty_tokens: false,
        }
    }
}

impl NamerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connective_before_first(mut self, enabled: bool) -> Self {
        self.connective_before_first = enabled;
        self
    }

    pub fn with_empty_tokens(mut self, keep: bool) -> Self {
        self.keep_empty_tokens = keep;
        self
    }
}

/// Ordered word tokens for one number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordSequence(Vec<String>);

impl WordSequence {
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Non-empty tokens joined by single spaces
    pub fn phrase(&self) -> String {
        self.0
            .iter()
            .filter(|token| !token.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for WordSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phrase())
    }
}

impl IntoIterator for WordSequence {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Maps decompositions to word sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct Namer {
    options: NamerOptions,
}

impl Namer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: NamerOptions) -> Self {
        Namer { options }
    }

    pub fn options(&self) -> &NamerOptions {
        &self.options
    }

    /// Name every component of `parts`.
    ///
    /// # Errors
    ///
    /// - [`NumeralError::TierOverflow`](crate::NumeralError::TierOverflow) for
    ///   a component above the highest named tier
    /// - [`NumeralError::UnrecognizedDecade`](crate::NumeralError::UnrecognizedDecade)
    ///   if the tens component is not a whole decade
    pub fn name(&self, parts: &Decomposition) -> NumeralResult<WordSequence> {
        if parts.is_zero() {
            return Ok(WordSequence(vec![ZERO_WORD.to_string()]));
        }

        let mut words: Vec<String> = Vec::with_capacity(parts.len() * 2);
        for (position, component) in parts.iter() {
            trace!(position, component, "naming component");
            match position {
                0 => self.push_word(&mut words, unit_word(component)?),
                1 => self.push_word(&mut words, decade_word(component)?),
                _ => {
                    if component == 0 {
                        continue;
                    }
                    let tier = tier_name(position)?;
                    let digit = component / 10u64.pow(position as u32);
                    let digit_word = unit_word(digit)?;

                    let has_words = words.iter().any(|word| !word.is_empty());
                    if self.options.connective_before_first || has_words {
                        words.push(CONNECTIVE.to_string());
                    }
                    words.push(format!("{} {}", digit_word, tier));
                }
            }
        }

        Ok(WordSequence(words))
    }

    fn push_word(&self, words: &mut Vec<String>, word: &str) {
        if !word.is_empty() || self.options.keep_empty_tokens {
            words.push(word.to_string());
        }
    }
}
