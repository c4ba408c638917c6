//! chordsmith-core: Music-theory domain types and the Roman numeral engine

pub mod chord;
mod error;
pub mod numeral;
pub mod pitch;
pub mod repair;
pub mod scale;
pub mod staff;

pub use chord::{ChordQuality, ChordSymbol, Extension};
pub use error::{ChordsmithError, Result};
pub use numeral::{derive_numerals, derive_for_symbols, numerals_equivalent, NumeralQuality, RomanNumeral};
pub use pitch::{pitch_index_of, PitchClass, CHROMATIC_NAMES};
pub use repair::{label_sequence, repair_numerals, LabeledChord, SequenceResult};
pub use scale::{build_scale, Scale, ScaleMode};
pub use staff::{Accidental, PlacedNote, Staff, StaffPosition, STAFF_POSITIONS};
