//! Validation and repair of externally supplied numerals

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::numeral::{derive_numerals, numerals_equivalent};

/// A chord name paired with its numeral
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledChord {
    pub chord: String,
    pub numeral: String,
}

/// Chords and numerals, index-aligned with the input chord list
pub type SequenceResult = Vec<LabeledChord>;

/// Check supplied numerals against freshly derived ones.
///
/// Missing numerals, or a count that differs from the chord count, are
/// discarded in favour of the derived list. Otherwise each supplied numeral
/// is kept verbatim when it names the same degree as the derived one and
/// replaced when it does not.
pub fn repair_numerals<S: AsRef<str>>(root_letter: char, chords: &[S], supplied: Option<&[String]>) -> Vec<String> {
    let derived: Vec<String> = derive_numerals(root_letter, chords).iter().map(|n| n.to_string()).collect();

    let Some(supplied) = supplied.filter(|s| s.len() == derived.len()) else {
        return derived;
    };

    supplied
        .iter()
        .zip(derived)
        .map(|(given, ours)| {
            if numerals_equivalent(given, &ours) {
                given.clone()
            } else {
                debug!(supplied = %given, derived = %ours, "Correcting numeral");
                ours
            }
        })
        .collect()
}

/// Pair each chord with its repaired numeral
pub fn label_sequence<S: AsRef<str>>(root_letter: char, chords: &[S], supplied: Option<&[String]>) -> SequenceResult {
    let numerals = repair_numerals(root_letter, chords, supplied);
    chords
        .iter()
        .zip(numerals)
        .map(|(chord, numeral)| LabeledChord {
            chord: chord.as_ref().to_string(),
            numeral,
        })
        .collect()
}
