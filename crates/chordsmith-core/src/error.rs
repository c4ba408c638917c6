//! Error types for chordsmith

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChordsmithError {
    #[error("Invalid note: {0}")]
    InvalidNote(String),
    #[error("Note is not on the staff: {0}")]
    OffStaff(String),
    #[error("No note selected")]
    NoSelection,
    #[error("Selection out of range: {0}")]
    SelectionOutOfRange(usize),
    #[error("No notes placed on the staff")]
    NoNotesPlaced,
}

pub type Result<T> = std::result::Result<T, ChordsmithError>;
