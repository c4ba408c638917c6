//! Plain-text rendering of suggestions

use chordsmith_core::LabeledChord;
use chordsmith_services::ChordSequence;

/// "CMaj7 (IMaj7)  Am7 (vi7)  ..."
pub fn labeled_line(labeled: &[LabeledChord]) -> String {
    labeled
        .iter()
        .map(|l| {
            if l.numeral.is_empty() {
                l.chord.clone()
            } else {
                format!("{} ({})", l.chord, l.numeral)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Header with the sequence's tags followed by its chords
pub fn sequence_block(idx: usize, sequence: &ChordSequence) -> String {
    let mut tags = Vec::new();
    if let Some(emotion) = &sequence.emotion {
        tags.push(emotion.clone());
    }
    match (sequence.complexity_rating, &sequence.complexity) {
        (Some(rating), _) => tags.push(format!("Complexity: {rating}/10")),
        (None, Some(label)) => tags.push(label.clone()),
        (None, None) => {}
    }
    if let Some(genre) = &sequence.genre {
        tags.push(genre.clone());
    }

    let header = if tags.is_empty() {
        format!("Sequence {}", idx + 1)
    } else {
        format!("Sequence {} [{}]", idx + 1, tags.join(" | "))
    };
    format!("{header}\n  {}", labeled_line(&sequence.labeled()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chordsmith_services::default_sequences;

    #[test]
    fn test_sequence_block() {
        let block = sequence_block(0, &default_sequences()[0]);
        assert_eq!(
            block,
            "Sequence 1 [Happy | Complexity: 3/10 | Pop]\n  CMaj7 (IMaj7)  Am7 (vi7)  FMaj7 (IVMaj7)  G7 (V7)"
        );
    }

    #[test]
    fn test_block_without_tags_or_numerals() {
        let sequence = ChordSequence {
            complexity: Some("moderate".into()),
            chords: vec!["C".into(), "G".into()],
            ..Default::default()
        };
        assert_eq!(sequence_block(2, &sequence), "Sequence 3 [moderate]\n  C  G");
    }
}
