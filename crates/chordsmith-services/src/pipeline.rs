//! Staff → prompt → provider → repaired chord sequences

use chordsmith_core::{ChordsmithError, PlacedNote, Staff};
use tracing::{error, info, warn};

use crate::prompt::build_prompt;
use crate::provider::{ProviderError, SuggestionProvider};
use crate::response::parse_response;
use crate::sequence::{default_sequences, ChordSequence};

/// Fetches suggestions and repairs their numerals against the staff's root
pub struct SuggestionService<P> {
    provider: P,
}

impl<P: SuggestionProvider> SuggestionService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Suggest progressions for the notes on the staff.
    ///
    /// Fails only when no notes are placed. Provider failures of any kind
    /// fall back to [`default_sequences`].
    pub fn suggest(&self, staff: &Staff) -> chordsmith_core::Result<Vec<ChordSequence>> {
        let root = staff.root_note().ok_or(ChordsmithError::NoNotesPlaced)?;
        info!(root = %root, notes = staff.notes().len(), "Suggesting chord sequences");

        let sequences = match self.fetch(&staff.chord_notes(), root) {
            Ok(sequences) => sequences,
            Err(e) => {
                error!("Chord suggestion failed: {e}");
                default_sequences()
            }
        };
        Ok(sequences)
    }

    fn fetch(&self, chord_notes: &[String], root: &PlacedNote) -> Result<Vec<ChordSequence>, ProviderError> {
        let prompt = build_prompt(chord_notes, root);
        let content = self.provider.complete(&prompt)?;
        let response = parse_response(&content)?;

        let Some(mut sequences) = response.sequences else {
            warn!("Response did not contain sequences, using defaults");
            return Ok(default_sequences());
        };

        for sequence in &mut sequences {
            sequence.repair(root.letter);
        }
        Ok(sequences)
    }
}
