//! Diatonic scale construction

use serde::{Deserialize, Serialize};

use crate::pitch::PitchClass;

/// Scale modes used for numeral derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScaleMode {
    #[default]
    Major,
    NaturalMinor,
}

impl ScaleMode {
    /// Get scale intervals (semitones from root)
    pub fn intervals(&self) -> &'static [u8; 7] {
        match self {
            Self::Major => &[0, 2, 4, 5, 7, 9, 11],
            Self::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::NaturalMinor => "Natural Minor",
        }
    }
}

/// Seven pitch classes built upward from a root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    mode: ScaleMode,
    notes: [PitchClass; 7],
}

impl Scale {
    pub fn root(&self) -> PitchClass {
        self.notes[0]
    }

    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    pub fn notes(&self) -> &[PitchClass; 7] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Canonical names of the scale notes, in order
    pub fn names(&self) -> Vec<&'static str> {
        self.notes.iter().map(|n| n.name()).collect()
    }

    /// First degree (0-based) whose base letter matches `letter`.
    ///
    /// Accidentals in the sharp spelling are ignored, so `F#` matches `F`.
    /// A letter can appear twice (F major spells B-flat as `A#`), in which
    /// case the lower degree wins and the missing letter is not found.
    pub fn position_of_letter(&self, letter: char) -> Option<usize> {
        self.notes.iter().position(|n| n.letter() == letter)
    }
}

/// Build the 7-note scale for a root and mode
pub fn build_scale(root: PitchClass, mode: ScaleMode) -> Scale {
    let intervals = mode.intervals();
    Scale {
        mode,
        notes: std::array::from_fn(|i| root.transpose(intervals[i])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_starts_on_root() {
        for index in 0..12 {
            let root = PitchClass::new(index);
            for mode in [ScaleMode::Major, ScaleMode::NaturalMinor] {
                let scale = build_scale(root, mode);
                assert_eq!(scale.len(), 7);
                assert_eq!(scale.root(), root);
                assert_eq!(scale.notes()[0], root);
            }
        }
    }

    #[test]
    fn test_major_and_minor_spelling() {
        let d_major = build_scale(PitchClass::new(2), ScaleMode::Major);
        assert_eq!(d_major.names(), vec!["D", "E", "F#", "G", "A", "B", "C#"]);

        let a_minor = build_scale(PitchClass::new(9), ScaleMode::NaturalMinor);
        assert_eq!(a_minor.names(), vec!["A", "B", "C", "D", "E", "F", "G"]);
    }

    #[test]
    fn test_position_of_letter() {
        let d_major = build_scale(PitchClass::new(2), ScaleMode::Major);
        assert_eq!(d_major.position_of_letter('D'), Some(0));
        assert_eq!(d_major.position_of_letter('F'), Some(2));
        assert_eq!(d_major.position_of_letter('C'), Some(6));
        assert_eq!(d_major.position_of_letter('x'), None);

        // F major spells the fourth degree A#, so there is no B
        let f_major = build_scale(PitchClass::new(5), ScaleMode::Major);
        assert_eq!(f_major.names(), vec!["F", "G", "A", "A#", "C", "D", "E"]);
        assert_eq!(f_major.position_of_letter('A'), Some(2));
        assert_eq!(f_major.position_of_letter('B'), None);
    }
}
