//! Notes placed on the treble staff
//!
//! The staff holds the user's placed notes and the current selection as
//! explicit state. The lowest placed note becomes the root of the requested
//! progression.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ChordsmithError, Result};

/// Letter order used when comparing notes inside one octave
const LETTER_ORDER: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// A clickable line or space on the staff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffPosition {
    pub letter: char,
    pub octave: u8,
}

/// Staff lines and spaces from the top line (F5) to the bottom line (E4)
pub const STAFF_POSITIONS: [StaffPosition; 9] = [
    StaffPosition { letter: 'F', octave: 5 },
    StaffPosition { letter: 'E', octave: 5 },
    StaffPosition { letter: 'D', octave: 5 },
    StaffPosition { letter: 'C', octave: 5 },
    StaffPosition { letter: 'B', octave: 4 },
    StaffPosition { letter: 'A', octave: 4 },
    StaffPosition { letter: 'G', octave: 4 },
    StaffPosition { letter: 'F', octave: 4 },
    StaffPosition { letter: 'E', octave: 4 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accidental {
    Sharp,
    Flat,
}

impl Accidental {
    /// ASCII spelling used in note names ("F#4", "Bb4")
    pub fn ascii(&self) -> char {
        match self {
            Self::Sharp => '#',
            Self::Flat => 'b',
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Sharp => '♯',
            Self::Flat => '♭',
        }
    }
}

/// A note placed on the staff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedNote {
    pub letter: char,
    pub octave: u8,
    /// None = natural
    pub accidental: Option<Accidental>,
}

impl PlacedNote {
    pub fn new(letter: char, octave: u8) -> Self {
        Self {
            letter,
            octave,
            accidental: None,
        }
    }

    /// Name with ASCII accidental, e.g. "F#4"
    pub fn name(&self) -> String {
        match self.accidental {
            Some(acc) => format!("{}{}{}", self.letter, acc.ascii(), self.octave),
            None => format!("{}{}", self.letter, self.octave),
        }
    }

    fn letter_rank(&self) -> usize {
        LETTER_ORDER.iter().position(|&l| l == self.letter).unwrap_or(LETTER_ORDER.len())
    }
}

impl fmt::Display for PlacedNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.accidental {
            Some(acc) => write!(f, "{}{}{}", self.letter, acc.symbol(), self.octave),
            None => write!(f, "{}{}", self.letter, self.octave),
        }
    }
}

/// Parses "E4", "f#5", "Bb4" or "B♭4"
impl FromStr for PlacedNote {
    type Err = ChordsmithError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ChordsmithError::InvalidNote(s.to_string());
        let mut chars = s.trim().chars().peekable();

        let letter = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| LETTER_ORDER.contains(c))
            .ok_or_else(invalid)?;

        let accidental = match chars.peek() {
            Some('#' | '♯') => Some(Accidental::Sharp),
            Some('b' | '♭') => Some(Accidental::Flat),
            _ => None,
        };
        if accidental.is_some() {
            chars.next();
        }

        let octave: String = chars.collect();
        let octave = octave.parse::<u8>().map_err(|_| invalid())?;

        Ok(Self {
            letter,
            octave,
            accidental,
        })
    }
}

/// Placed notes plus the current selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Staff {
    notes: Vec<PlacedNote>,
    selected: Option<usize>,
}

impl Staff {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[PlacedNote] {
        &self.notes
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn selected(&self) -> Option<&PlacedNote> {
        self.selected.and_then(|idx| self.notes.get(idx))
    }

    /// Place a natural note on one of the staff positions, returns its index
    pub fn place(&mut self, letter: char, octave: u8) -> Result<usize> {
        let on_staff = STAFF_POSITIONS.iter().any(|p| p.letter == letter && p.octave == octave);
        if !on_staff {
            return Err(ChordsmithError::OffStaff(format!("{letter}{octave}")));
        }
        self.notes.push(PlacedNote::new(letter, octave));
        Ok(self.notes.len() - 1)
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.notes.len() {
            return Err(ChordsmithError::SelectionOutOfRange(index));
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Set the accidental of the selected note; `None` restores the natural
    pub fn apply_accidental(&mut self, accidental: Option<Accidental>) -> Result<()> {
        let note = self
            .selected
            .and_then(|idx| self.notes.get_mut(idx))
            .ok_or(ChordsmithError::NoSelection)?;
        note.accidental = accidental;
        Ok(())
    }

    /// Remove all notes and the selection
    pub fn clear(&mut self) {
        self.notes.clear();
        self.selected = None;
    }

    /// Note names in placement order
    pub fn chord_notes(&self) -> Vec<String> {
        self.notes.iter().map(PlacedNote::name).collect()
    }

    /// Lowest placed note by octave, then letter. Ties keep placement order.
    pub fn root_note(&self) -> Option<&PlacedNote> {
        self.notes.iter().min_by_key(|n| (n.octave, n.letter_rank()))
    }
}
