// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

//! The closed set of mood emojis the app recognizes. Candidate selection,
//! swipes and matches are all scoped to one of these tags.

pub const MOOD_EMOJIS: &[&str] = &[
    "😶‍🌫️", "💀", "🥲", "😭", "😤", "🫠", "🤯", "😴", "🤗", "😊", "🔥", "💫", "🌈", "✨",
];

/// Whether the given emoji is part of the known mood set.
pub fn is_known_mood(mood: &str) -> bool {
    MOOD_EMOJIS.contains(&mood)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_moods_are_accepted() {
        assert!(is_known_mood("🔥"));
        assert!(is_known_mood("😭"));
        assert!(is_known_mood("😶‍🌫️"));
    }

    #[test]
    fn unknown_moods_are_rejected() {
        assert!(!is_known_mood("🐟"));
        assert!(!is_known_mood(""));
        assert!(!is_known_mood("fire"));
    }
}
