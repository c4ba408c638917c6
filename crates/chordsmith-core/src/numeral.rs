//! Roman numeral derivation for chord sequences
//!
//! Given the tonic letter and an ordered list of chord names, label every
//! chord with its scale-degree numeral. The first chord decides whether the
//! sequence is read against the major or the natural minor scale; each chord
//! then gets the numeral of its root's degree, re-cased to its own quality,
//! plus any extension found in its name.
//!
//! Derivation is heuristic and never fails. Unreadable input falls back to
//! fixed numerals instead of aborting the whole sequence.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::chord::{ChordQuality, ChordSymbol, Extension};
use crate::pitch::pitch_index_of;
use crate::scale::{build_scale, Scale, ScaleMode};

const SYMBOLS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Mark appended to diminished numerals
pub const DIMINISHED_MARK: char = '°';

/// I ii iii IV V vi vii°
const MAJOR_QUALITIES: [NumeralQuality; 7] = [
    NumeralQuality::Major,
    NumeralQuality::Minor,
    NumeralQuality::Minor,
    NumeralQuality::Major,
    NumeralQuality::Major,
    NumeralQuality::Minor,
    NumeralQuality::Diminished,
];

/// i ii° III iv v VI VII
const MINOR_QUALITIES: [NumeralQuality; 7] = [
    NumeralQuality::Minor,
    NumeralQuality::Diminished,
    NumeralQuality::Major,
    NumeralQuality::Minor,
    NumeralQuality::Minor,
    NumeralQuality::Major,
    NumeralQuality::Major,
];

/// How a numeral is cased when rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumeralQuality {
    /// Upper case
    Major,
    /// Lower case
    Minor,
    /// Lower case with the diminished mark
    Diminished,
}

/// A scale-degree label such as "IV", "ii7" or "vii°"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomanNumeral {
    degree: u8,
    quality: NumeralQuality,
    extension: Option<Extension>,
}

impl RomanNumeral {
    /// `degree` is 1-based and clamped to 1..=7
    pub fn new(degree: u8, quality: NumeralQuality) -> Self {
        Self {
            degree: degree.clamp(1, 7),
            quality,
            extension: None,
        }
    }

    pub fn with_extension(mut self, extension: Option<Extension>) -> Self {
        self.extension = extension;
        self
    }

    pub fn degree(&self) -> u8 {
        self.degree
    }

    pub fn quality(&self) -> NumeralQuality {
        self.quality
    }

    pub fn extension(&self) -> Option<Extension> {
        self.extension
    }

    /// Upper-case symbol without quality or extension
    pub fn symbol(&self) -> &'static str {
        SYMBOLS[(self.degree - 1) as usize]
    }

    /// Re-case to the chord's own quality. Diminished numerals are left alone.
    fn matched_to(mut self, chord: ChordQuality) -> Self {
        self.quality = match (self.quality, chord) {
            (NumeralQuality::Major, ChordQuality::Minor) => NumeralQuality::Minor,
            (NumeralQuality::Minor, ChordQuality::Major) => NumeralQuality::Major,
            (quality, _) => quality,
        };
        self
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quality {
            NumeralQuality::Major => f.write_str(self.symbol())?,
            NumeralQuality::Minor => f.write_str(&self.symbol().to_lowercase())?,
            NumeralQuality::Diminished => write!(f, "{}{}", self.symbol().to_lowercase(), DIMINISHED_MARK)?,
        }
        if let Some(extension) = self.extension {
            f.write_str(extension.suffix())?;
        }
        Ok(())
    }
}

/// Numeral of a scale position (0-based) in the given mode
pub fn diatonic_numeral(mode: ScaleMode, position: usize) -> RomanNumeral {
    let position = position % 7;
    let quality = match mode {
        ScaleMode::Major => MAJOR_QUALITIES[position],
        ScaleMode::NaturalMinor => MINOR_QUALITIES[position],
    };
    RomanNumeral::new(position as u8 + 1, quality)
}

/// Label each chord with its Roman numeral relative to `root_letter`.
///
/// Returns one numeral per chord, in order.
pub fn derive_numerals<S: AsRef<str>>(root_letter: char, chords: &[S]) -> Vec<RomanNumeral> {
    let symbols: Vec<ChordSymbol> = chords.iter().map(|c| ChordSymbol::parse(c.as_ref())).collect();
    derive_for_symbols(root_letter, &symbols)
}

/// [`derive_numerals`] for chords that are already parsed
pub fn derive_for_symbols(root_letter: char, chords: &[ChordSymbol]) -> Vec<RomanNumeral> {
    let Some(root) = pitch_index_of(root_letter) else {
        warn!(%root_letter, "Root letter has no pitch class, using default numerals");
        return (0..chords.len())
            .map(|idx| {
                let degree = if idx == 0 { 1 } else { 4 };
                RomanNumeral::new(degree, NumeralQuality::Major)
            })
            .collect();
    };

    let mode = match chords.first() {
        Some(first) if first.is_minor() => ScaleMode::NaturalMinor,
        _ => ScaleMode::Major,
    };
    let scale = build_scale(root, mode);
    debug!(scale = ?scale.names(), mode = mode.name(), "Deriving numerals");

    chords
        .iter()
        .enumerate()
        .map(|(idx, chord)| numeral_for(idx, chord, root_letter, &scale))
        .collect()
}

fn numeral_for(idx: usize, chord: &ChordSymbol, root_letter: char, scale: &Scale) -> RomanNumeral {
    // The opening chord on the tonic is always I/i
    if idx == 0 && chord.root() == Some(root_letter) {
        let quality = match scale.mode() {
            ScaleMode::Major => NumeralQuality::Major,
            ScaleMode::NaturalMinor => NumeralQuality::Minor,
        };
        return RomanNumeral::new(1, quality).with_extension(chord.extension());
    }

    let Some(position) = chord.root().and_then(|r| scale.position_of_letter(r)) else {
        warn!(chord = chord.text(), "Chord root not in scale, using positional fallback");
        return positional_fallback(idx);
    };

    diatonic_numeral(scale.mode(), position)
        .matched_to(chord.quality())
        .with_extension(chord.extension())
}

/// IV, V, then vi for everything else
fn positional_fallback(idx: usize) -> RomanNumeral {
    match idx {
        1 => RomanNumeral::new(4, NumeralQuality::Major),
        2 => RomanNumeral::new(5, NumeralQuality::Major),
        _ => RomanNumeral::new(6, NumeralQuality::Minor),
    }
}

/// Whether two numerals name the same degree, ignoring digits and case
pub fn numerals_equivalent(a: &str, b: &str) -> bool {
    strip_digits(a).to_lowercase() == strip_digits(b).to_lowercase()
}

fn strip_digits(numeral: &str) -> String {
    numeral.chars().filter(|c| !c.is_ascii_digit()).collect()
}
