//! Spell out numbers as classical Sanskrit number words
//!
//! A number is split into place-value components (units first), and each
//! component is named from a fixed lexicon: units and decades directly, higher
//! powers of ten (शत, सहस्र, अयुत, लक्ष, ... up to 10^15) as a digit word plus
//! a tier name, joined by the connective अधिक.
//!
//! ```
//! use sankhya::{Namer, NamerOptions, SanskritNumber};
//!
//! let number: SanskritNumber = "१२३".parse().unwrap();
//! assert_eq!(number.decompose().unwrap().components(), &[3, 20, 100]);
//! assert_eq!(
//!     number.words().unwrap().tokens(),
//!     &["त्रि", "विंशति", "अधिक", "एक शत"]
//! );
//!
//! let namer = Namer::with_options(NamerOptions::new().with_connective_before_first(false));
//! let hundred = SanskritNumber::new(100).unwrap();
//! assert_eq!(hundred.words_with(&namer).unwrap().phrase(), "एक शत");
//! ```

pub mod decompose;
pub mod error;
pub mod glyphs;
pub mod lexicon;
pub mod namer;
pub mod number;
pub mod report;


// Re-export main types for convenient access
pub use decompose::{Decomposition, decompose};
pub use error::{NumeralError, NumeralResult};
pub use glyphs::{glyph_to_digit, to_native_digits, translate_glyphs};
pub use namer::{Namer, NamerOptions, WordSequence};
pub use number::{NumberSource, SanskritNumber, add};
pub use report::NumberReport;
