//! Keyword-based emotion classification for user input.

use hearth_core::memory::Emotion;

/// Classifies the emotional tone of user input from keyword cues.
///
/// Used to tag memories derived from a conversation turn; defaults to calm
/// when no cue is present.
pub fn classify_emotion(input: &str) -> Emotion {
    let input_lower = input.to_lowercase();

    if ["scared", "worried", "afraid", "sad", "depressed", "down"]
        .iter()
        .any(|cue| input_lower.contains(cue))
    {
        Emotion::Concerned
    } else if ["happy", "excited", "great"]
        .iter()
        .any(|cue| input_lower.contains(cue))
    {
        Emotion::Excited
    } else {
        Emotion::Calm
    }
}
