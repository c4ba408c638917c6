//! Extracting suggestions from free-form model output

use serde::{Deserialize, Serialize};

use crate::provider::ProviderError;
use crate::sequence::ChordSequence;

/// Top-level JSON object the model is asked to produce
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionResponse {
    #[serde(default)]
    pub sequences: Option<Vec<ChordSequence>>,
}

/// Span from the first `{` to the last `}` of the model's reply.
///
/// Models tend to wrap the JSON in prose or code fences.
pub fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (end > start).then(|| &content[start..=end])
}

pub fn parse_response(content: &str) -> Result<SuggestionResponse, ProviderError> {
    let json = extract_json_object(content).ok_or(ProviderError::NoJson)?;
    Ok(serde_json::from_str(json)?)
}

/// Turn an octave-numbered note ("C5", "F#4", "Bb3") into a plain triad name.
///
/// 6, 7 and 9 are read as chord extensions, not octaves, so "G7" and "C6"
/// are left alone along with every other chord name.
pub fn sanitize_chord_name(chord: &str) -> String {
    if looks_like_note_with_octave(chord) {
        chord[..chord.len() - 1].to_string()
    } else {
        chord.to_string()
    }
}

fn looks_like_note_with_octave(chord: &str) -> bool {
    match chord.as_bytes() {
        [letter, digit] => is_letter(*letter) && is_octave(*digit),
        [letter, accidental, digit] => is_letter(*letter) && matches!(accidental, b'#' | b'b') && is_octave(*digit),
        _ => false,
    }
}

fn is_letter(b: u8) -> bool {
    (b'A'..=b'G').contains(&b)
}

fn is_octave(b: u8) -> bool {
    b.is_ascii_digit() && !matches!(b, b'6' | b'7' | b'9')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_object() {
        let content = "Sure! Here you go:\n```json\n{\"sequences\": [{\"chords\": [\"C\"]}]}\n```\nEnjoy {:";
        assert_eq!(extract_json_object(content), Some("{\"sequences\": [{\"chords\": [\"C\"]}]}"));
        assert_eq!(extract_json_object("{\"a\": {\"b\": 1}}"), Some("{\"a\": {\"b\": 1}}"));
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} backwards {"), None);
    }

    #[test]
    fn test_parse_response() {
        let content = r#"Here are some ideas: {"sequences": [
            {"emotion": "Happy", "complexityRating": 2, "genre": "Pop",
             "chords": ["F", "Bb", "C7"], "numerals": ["I", "IV", "V7"]}
        ]} Let me know!"#;
        let response = parse_response(content).unwrap();
        let sequences = response.sequences.unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].chords, vec!["F", "Bb", "C7"]);
        assert_eq!(sequences[0].complexity_rating, Some(2.0));
    }

    #[test]
    fn test_parse_response_without_sequences() {
        let response = parse_response(r#"{"suggestions": []}"#).unwrap();
        assert!(response.sequences.is_none());
    }

    #[test]
    fn test_parse_response_errors() {
        assert!(matches!(parse_response("nothing useful"), Err(ProviderError::NoJson)));
        assert!(matches!(parse_response("{not json}"), Err(ProviderError::Json(_))));
    }

    #[test]
    fn test_sanitize_chord_name() {
        assert_eq!(sanitize_chord_name("C5"), "C");
        assert_eq!(sanitize_chord_name("F#4"), "F#");
        assert_eq!(sanitize_chord_name("Bb3"), "Bb");
        assert_eq!(sanitize_chord_name("G7"), "G7");
        assert_eq!(sanitize_chord_name("C6"), "C6");
        assert_eq!(sanitize_chord_name("Eb9"), "Eb9");
        assert_eq!(sanitize_chord_name("Am7"), "Am7");
        assert_eq!(sanitize_chord_name("CMaj7"), "CMaj7");
        assert_eq!(sanitize_chord_name("Cadd9"), "Cadd9");
        assert_eq!(sanitize_chord_name("H5"), "H5");
    }
}
