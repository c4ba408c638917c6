//! chordsmith: chord progression suggestions from the command line

mod args;
mod output;

use args::{Cli, Command};
use clap::Parser;
use chordsmith_core::{label_sequence, PlacedNote, Staff};
use chordsmith_services::{load_config, ChatClient, SuggestionService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("chordsmith=debug".parse()?)
            .add_directive("ureq=warn".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Suggest { notes } => suggest(&notes),
        Command::Numerals { root, chords } => {
            let labeled = label_sequence(root, &chords, None);
            println!("{}", output::labeled_line(&labeled));
            Ok(())
        }
    }
}

fn suggest(notes: &[String]) -> anyhow::Result<()> {
    let staff = place_notes(notes)?;
    let config = load_config();
    let service = SuggestionService::new(ChatClient::from_config(config));

    let sequences = service.suggest(&staff)?;
    if sequences.is_empty() {
        println!("No chord sequences found. Try different notes.");
        return Ok(());
    }
    for (idx, sequence) in sequences.iter().enumerate() {
        println!("{}", output::sequence_block(idx, sequence));
    }
    Ok(())
}

/// Put each note on the staff the way a user would: click, select, accidental
fn place_notes(notes: &[String]) -> anyhow::Result<Staff> {
    let mut staff = Staff::new();
    for text in notes {
        let note: PlacedNote = text.parse()?;
        let idx = staff.place(note.letter, note.octave)?;
        if note.accidental.is_some() {
            staff.select(idx)?;
            staff.apply_accidental(note.accidental)?;
            staff.deselect();
        }
    }
    tracing::debug!(notes = ?staff.chord_notes(), "Placed notes");
    Ok(staff)
}
