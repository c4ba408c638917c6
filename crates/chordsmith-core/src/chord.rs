//! Chord symbol parsing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Substrings (on lower-cased text) that mark a chord as minor
const MINOR_MARKERS: [&str; 3] = ["min", "m7", "m9"];

/// Chord quality as far as numeral case is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChordQuality {
    #[default]
    Major,
    Minor,
}

/// Extension carried over from the chord name to its numeral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Extension {
    Seventh,
    MajorSeventh,
    Ninth,
    Sixth,
}

impl Extension {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Seventh => "7",
            Self::MajorSeventh => "Maj7",
            Self::Ninth => "9",
            Self::Sixth => "6",
        }
    }
}

/// A chord name such as "Dm7", "CMaj7" or "G7", decomposed on parse.
///
/// Parsing never fails. Anything that is not a well-formed chord name still
/// yields a symbol; its root is just whatever character comes first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordSymbol {
    text: String,
    root: Option<char>,
    quality: ChordQuality,
    extension: Option<Extension>,
}

impl ChordSymbol {
    pub fn parse(text: &str) -> Self {
        Self {
            text: text.to_string(),
            root: text.chars().next(),
            quality: infer_quality(text),
            extension: infer_extension(text),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// First character of the chord name
    pub fn root(&self) -> Option<char> {
        self.root
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    pub fn is_minor(&self) -> bool {
        self.quality == ChordQuality::Minor
    }

    pub fn extension(&self) -> Option<Extension> {
        self.extension
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn infer_quality(text: &str) -> ChordQuality {
    let lower = text.to_lowercase();
    if MINOR_MARKERS.iter().any(|m| lower.contains(m)) || has_minor_suffix(text) {
        ChordQuality::Minor
    } else {
        ChordQuality::Major
    }
}

/// "Am", "Ebm7b5", "F#-7": a lower-case `m` (but not `maj`) or a `-`
/// straight after the root and its accidental
fn has_minor_suffix(text: &str) -> bool {
    let suffix = suffix_after_root(text);
    (suffix.starts_with('m') && !suffix.starts_with("maj")) || suffix.starts_with('-')
}

fn suffix_after_root(text: &str) -> &str {
    let mut chars = text.char_indices().skip(1);
    match chars.next() {
        Some((i, c)) if matches!(c, '#' | 'b' | '♯' | '♭') => &text[i + c.len_utf8()..],
        Some((i, _)) => &text[i..],
        None => "",
    }
}

// 7 beats 9 beats 6, whatever order they appear in
fn infer_extension(text: &str) -> Option<Extension> {
    if text.contains('7') {
        if text.to_lowercase().contains("maj7") {
            Some(Extension::MajorSeventh)
        } else {
            Some(Extension::Seventh)
        }
    } else if text.contains('9') {
        Some(Extension::Ninth)
    } else if text.contains('6') {
        Some(Extension::Sixth)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_first_character() {
        assert_eq!(ChordSymbol::parse("Dm7").root(), Some('D'));
        assert_eq!(ChordSymbol::parse("F#maj7").root(), Some('F'));
        assert_eq!(ChordSymbol::parse("?x").root(), Some('?'));
        assert_eq!(ChordSymbol::parse("").root(), None);
    }

    #[test]
    fn test_minor_markers() {
        assert!(ChordSymbol::parse("Cmin").is_minor());
        assert!(ChordSymbol::parse("Am7").is_minor());
        assert!(ChordSymbol::parse("Em9").is_minor());
        assert!(ChordSymbol::parse("Bm7b5").is_minor());
        assert!(ChordSymbol::parse("CMIN").is_minor());
    }

    #[test]
    fn test_minor_suffix() {
        assert!(ChordSymbol::parse("Dm").is_minor());
        assert!(ChordSymbol::parse("Ebm").is_minor());
        assert!(ChordSymbol::parse("F#m6").is_minor());
        assert!(ChordSymbol::parse("A-7").is_minor());
        assert!(!ChordSymbol::parse("Dmaj7").is_minor());
        assert!(!ChordSymbol::parse("CMaj7").is_minor());
        assert!(!ChordSymbol::parse("Bb").is_minor());
        assert!(!ChordSymbol::parse("G7").is_minor());
        assert!(!ChordSymbol::parse("Bdim").is_minor());
    }

    #[test]
    fn test_extension_priority() {
        assert_eq!(ChordSymbol::parse("G7").extension(), Some(Extension::Seventh));
        assert_eq!(ChordSymbol::parse("Cadd9").extension(), Some(Extension::Ninth));
        assert_eq!(ChordSymbol::parse("F6").extension(), Some(Extension::Sixth));
        assert_eq!(ChordSymbol::parse("C9/7").extension(), Some(Extension::Seventh));
        assert_eq!(ChordSymbol::parse("D69").extension(), Some(Extension::Ninth));
        assert_eq!(ChordSymbol::parse("CMaj7").extension(), Some(Extension::MajorSeventh));
        assert_eq!(ChordSymbol::parse("Am").extension(), None);
    }
}
