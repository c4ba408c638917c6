//! chordsmith-services: Chord suggestion provider and the suggestion pipeline

pub mod config;
pub mod pipeline;
pub mod prompt;
pub mod provider;
pub mod response;
pub mod sequence;

pub use config::{config_path, load_config, ProviderConfig};
pub use pipeline::SuggestionService;
pub use prompt::build_prompt;
pub use provider::{ChatClient, ProviderError, SuggestionProvider};
pub use response::{extract_json_object, parse_response, sanitize_chord_name, SuggestionResponse};
pub use sequence::{default_sequences, ChordSequence};
