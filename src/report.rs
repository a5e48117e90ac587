//! Serializable summary of a named number
//!
//! Used by the command-line tool for `--json` output and by the web service
//! as its response body.

use serde::{Deserialize, Serialize};

use crate::error::NumeralResult;
use crate::namer::Namer;
use crate::number::SanskritNumber;

/// Everything known about one number, in display-ready form
///
/// # Example
///
/// ```
/// use sankhya::{Namer, NumberReport, SanskritNumber};
///
/// let number = SanskritNumber::new(123).unwrap();
/// let report = NumberReport::new(&number, &Namer::new()).unwrap();
/// assert_eq!(report.value, 123);
/// assert_eq!(report.native, "१२३");
/// assert_eq!(report.components, vec![3, 20, 100]);
/// assert_eq!(report.words, vec!["त्रि", "विंशति", "अधिक", "एक शत"]);
/// assert_eq!(report.phrase, "त्रि विंशति अधिक एक शत");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberReport {
    pub value: u64,
    /// The value in Devanagari digits
    pub native: String,
    /// Place-value components, least-significant first
    pub components: Vec<u64>,
    pub words: Vec<String>,
    pub phrase: String,
}

impl NumberReport {
    pub fn new(number: &SanskritNumber, namer: &Namer) -> NumeralResult<Self> {
        let parts = number.decompose()?;
        let words = namer.name(&parts)?;
        Ok(NumberReport {
            value: number.value(),
            native: number.native_digits(),
            components: parts.components().to_vec(),
            phrase: words.phrase(),
            words: words.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_fields() {
        let number = SanskritNumber::new(123).unwrap();
        let report = NumberReport::new(&number, &Namer::new()).unwrap();
        assert_eq!(report.value, 123);
        assert_eq!(report.native, "१२३");
        assert_eq!(report.components, vec![3, 20, 100]);
        assert_eq!(report.words, vec!["त्रि", "विंशति", "अधिक", "एक शत"]);
        assert_eq!(report.phrase, "त्रि विंशति अधिक एक शत");
    }

    #[test]
    fn test_report_json() {
        let number = SanskritNumber::new(0).unwrap();
        let report = NumberReport::new(&number, &Namer::new()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "value": 0,
                "native": "०",
                "components": [0],
                "words": ["शून्य"],
                "phrase": "शून्य",
            })
        );
    }
}
