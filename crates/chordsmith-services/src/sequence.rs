//! Suggested chord sequences

use chordsmith_core::{repair_numerals, LabeledChord, SequenceResult};
use serde::{Deserialize, Deserializer, Serialize};

use crate::response::sanitize_chord_name;

/// One suggested progression as returned by the provider
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordSequence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    /// 0 (simple) to 10 (complex)
    #[serde(default, deserialize_with = "rating", skip_serializing_if = "Option::is_none")]
    pub complexity_rating: Option<f32>,
    /// Older free-text complexity label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default)]
    pub chords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerals: Option<Vec<String>>,
}

impl ChordSequence {
    fn preset(emotion: &str, rating: f32, genre: &str, chords: &[&str], numerals: &[&str]) -> Self {
        Self {
            emotion: Some(emotion.to_string()),
            complexity_rating: Some(rating),
            complexity: None,
            genre: Some(genre.to_string()),
            chords: chords.iter().map(|c| c.to_string()).collect(),
            numerals: Some(numerals.iter().map(|n| n.to_string()).collect()),
        }
    }

    /// Clean chord names and check numerals against `root_letter`
    pub fn repair(&mut self, root_letter: char) {
        self.chords = self.chords.iter().map(|c| sanitize_chord_name(c)).collect();
        self.numerals = Some(repair_numerals(root_letter, &self.chords, self.numerals.as_deref()));
    }

    /// Chords paired with their numerals (empty numeral when none supplied)
    pub fn labeled(&self) -> SequenceResult {
        let numerals = self.numerals.as_deref().unwrap_or_default();
        self.chords
            .iter()
            .enumerate()
            .map(|(idx, chord)| LabeledChord {
                chord: chord.clone(),
                numeral: numerals.get(idx).cloned().unwrap_or_default(),
            })
            .collect()
    }
}

/// Sequences shown when the provider cannot be reached or answers nonsense
pub fn default_sequences() -> Vec<ChordSequence> {
    vec![
        ChordSequence::preset(
            "Happy",
            3.0,
            "Pop",
            &["CMaj7", "Am7", "FMaj7", "G7"],
            &["IMaj7", "vi7", "IVMaj7", "V7"],
        ),
        ChordSequence::preset(
            "Melancholic",
            7.0,
            "Jazz",
            &["Dm7", "G7", "CMaj7", "Bm7b5", "E7"],
            &["ii7", "V7", "IMaj7", "vii7b5", "III7"],
        ),
    ]
}

/// Accept the rating as a number or as numeric text
fn rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f32>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rating {
        Number(f32),
        Text(String),
    }

    Ok(match Option::<Rating>::deserialize(deserializer)? {
        Some(Rating::Number(n)) => Some(n),
        Some(Rating::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chordsmith_core::label_sequence;

    #[test]
    fn test_deserialize_sequence() {
        let seq: ChordSequence = serde_json::from_str(
            r#"{"emotion":"Tense","complexityRating":"6.5","genre":"Film","chords":["Am","F","E7"]}"#,
        )
        .unwrap();
        assert_eq!(seq.emotion.as_deref(), Some("Tense"));
        assert_eq!(seq.complexity_rating, Some(6.5));
        assert_eq!(seq.chords, vec!["Am", "F", "E7"]);
        assert!(seq.numerals.is_none());

        let seq: ChordSequence = serde_json::from_str(r#"{"complexity":"simple","chords":[]}"#).unwrap();
        assert_eq!(seq.complexity.as_deref(), Some("simple"));
        assert_eq!(seq.complexity_rating, None);
    }

    #[test]
    fn test_repair_fills_and_corrects() {
        let mut seq = ChordSequence {
            chords: vec!["A4".into(), "Dm7".into(), "E7".into()],
            numerals: Some(vec!["I".into(), "ii7".into(), "V7".into()]),
            ..Default::default()
        };
        seq.repair('A');
        assert_eq!(seq.chords, vec!["A", "Dm7", "E7"]);
        assert_eq!(seq.numerals, Some(vec!["I".into(), "iv7".into(), "V7".into()]));

        let mut seq = ChordSequence {
            chords: vec!["G".into(), "C".into(), "D7".into()],
            ..Default::default()
        };
        seq.repair('G');
        assert_eq!(seq.numerals, Some(vec!["I".into(), "IV".into(), "V7".into()]));
    }

    #[test]
    fn test_labeled_pairs() {
        let sequences = default_sequences();
        let labeled = sequences[0].labeled();
        assert_eq!(labeled.len(), 4);
        assert_eq!(labeled[2].chord, "FMaj7");
        assert_eq!(labeled[2].numeral, "IVMaj7");

        // Dm7 opens the sequence, so it is read against C minor (no B or E)
        let derived = label_sequence('C', &sequences[1].chords, None);
        let numerals: Vec<&str> = derived.iter().map(|l| l.numeral.as_str()).collect();
        assert_eq!(numerals, vec!["ii°7", "V7", "IMaj7", "vi", "vi"]);
    }
}
