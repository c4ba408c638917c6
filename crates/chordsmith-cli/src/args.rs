use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "chordsmith")]
#[command(about = "Chord progression suggestions with Roman numeral analysis")]
#[command(version)]
#[command(after_help = "The API key is read from $CEREBRAS_API_KEY unless config.toml names another variable.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Suggest progressions for notes on the staff
    Suggest {
        /// Staff notes between E4 and F5, e.g. E4 G#4 B4
        #[arg(required = true)]
        notes: Vec<String>,
    },

    /// Label chords with Roman numerals relative to a root
    Numerals {
        /// Root letter (A..G)
        #[arg(value_parser = parse_root)]
        root: char,

        /// Chord names, e.g. CMaj7 Am7 G7
        #[arg(required = true)]
        chords: Vec<String>,
    },
}

fn parse_root(text: &str) -> Result<char, String> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if ('A'..='G').contains(&letter.to_ascii_uppercase()) => {
            Ok(letter.to_ascii_uppercase())
        }
        _ => Err(format!("root must be a single letter A..G, got `{text}`")),
    }
}
