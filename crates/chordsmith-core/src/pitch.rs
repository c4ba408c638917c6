//! Chromatic pitch classes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sharp-spelled names for the 12 chromatic pitch classes, starting at C
pub const CHROMATIC_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// One of the 12 chromatic pitch classes (0 = C, 11 = B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Wraps any index into 0..12
    pub fn new(index: u8) -> Self {
        Self(index % 12)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Canonical sharp-spelled name (e.g. "F#")
    pub fn name(self) -> &'static str {
        CHROMATIC_NAMES[self.0 as usize]
    }

    /// Natural letter of the canonical spelling, ignoring any accidental
    pub fn letter(self) -> char {
        self.name().as_bytes()[0] as char
    }

    /// Move up by a number of semitones, wrapping at the octave
    pub fn transpose(self, semitones: u8) -> Self {
        Self(((self.0 as u16 + semitones as u16) % 12) as u8)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Natural pitch class of a bare note letter.
///
/// Only the upper-case letters `A..G` are recognised. Accidentals are never
/// passed here; callers strip them and keep the base letter.
pub fn pitch_index_of(letter: char) -> Option<PitchClass> {
    let index = match letter {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };
    Some(PitchClass(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_letters() {
        assert_eq!(pitch_index_of('C').map(PitchClass::index), Some(0));
        assert_eq!(pitch_index_of('F').map(PitchClass::index), Some(5));
        assert_eq!(pitch_index_of('B').map(PitchClass::index), Some(11));
        assert_eq!(pitch_index_of('H'), None);
        assert_eq!(pitch_index_of('c'), None);
        assert_eq!(pitch_index_of('#'), None);
    }

    #[test]
    fn test_transpose_wraps() {
        let a = PitchClass::new(9);
        assert_eq!(a.transpose(3), PitchClass::new(0));
        assert_eq!(a.transpose(11).name(), "G#");
        assert_eq!(PitchClass::new(14), PitchClass::new(2));
    }

    #[test]
    fn test_letter_ignores_accidental() {
        assert_eq!(PitchClass::new(6).name(), "F#");
        assert_eq!(PitchClass::new(6).letter(), 'F');
        assert_eq!(PitchClass::new(10).letter(), 'A');
    }
}
