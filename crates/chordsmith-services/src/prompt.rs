//! Prompt text sent to the suggestion model

use chordsmith_core::PlacedNote;

/// Number of progressions requested per prompt
pub const SEQUENCE_COUNT: usize = 5;

/// Build the suggestion prompt for the placed notes.
///
/// The lowest note is named as the root of the "I" chord so the model's
/// numerals line up with what [`chordsmith_core::derive_numerals`] produces.
pub fn build_prompt(chord_notes: &[String], root: &PlacedNote) -> String {
    let notes = chord_notes.join(", ");
    let root_name = root.name();
    let root_letter = root.letter;

    format!(
        "I have a chord with the following notes: {notes}.
The lowest note is {root_name}. Treat it as the root of the \"I\" chord of the sequence. \
The chord is major or minor depending on its notes, and the tonality follows from that root chord.
If only one note is present, assume a major chord built on that note. \
For example, a lone F means the \"I\" chord is F major. Do not default to C major.

Suggest {SEQUENCE_COUNT} chord sequences that work well with this chord. For each sequence give:
1. The emotional quality (happy, melancholic, tense, relaxed, ...)
2. A complexity rating from 0 (extremely simple) to 10 (extremely complex)
3. The genre influence (jazz, pop, classical, folk, ...)
4. A sequence of 4-5 chords
5. The Roman numeral of each chord, with the chord rooted on {root_letter} as \"I\"

Build the major or minor scale on {root_letter} according to the chord quality and place each \
suggested chord on that scale.
Use proper chord names with extensions, never octave numbers: \"CMaj7\", \"Cmin\", \"Cadd9\", \
\"G7\", \"Dm7b5\" rather than \"C5\" or \"G4\".

Reply with a JSON object containing a \"sequences\" array. Each entry has \"emotion\", \
\"complexityRating\" (a number from 0 to 10), \"genre\", \"chords\" and \"numerals\".

Example: with A as the lowest note (A C E), a suggested D minor chord (D F A) is \"iv\", \
the fourth chord of A minor. Double check every numeral before answering."
    )
}
