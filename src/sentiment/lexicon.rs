//! Valence lexicon for text sentiment scoring.
//!
//! Maps words to valence values on a `[-4, 4]` scale. Words are matched
//! case-insensitively; anything not in the lexicon contributes nothing.

use std::collections::HashMap;

/// Largest valence magnitude a single word can carry.
pub const MAX_VALENCE: f32 = 4.0;

/// A word-to-valence sentiment lexicon.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    words: HashMap<String, f32>,
}

impl SentimentLexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Add a word with the given valence, clamped to `[-4, 4]`.
    pub fn insert(&mut self, word: &str, valence: f32) {
        self.words
            .insert(word.to_lowercase(), valence.clamp(-MAX_VALENCE, MAX_VALENCE));
    }

    /// Look up the valence of a word, if present.
    pub fn valence(&self, word: &str) -> Option<f32> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check if a word is in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Number of words in the lexicon.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for SentimentLexicon {
    /// Lexicon of common emotional vocabulary.
    fn default() -> Self {
        let mut lexicon = Self::new();

        // Strongly positive
        for word in &[
            "amazing",
            "awesome",
            "excellent",
            "fantastic",
            "wonderful",
            "brilliant",
            "outstanding",
            "magnificent",
            "superb",
            "perfect",
            "ecstatic",
            "thrilled",
            "overjoyed",
            "love",
            "loved",
            "adore",
        ] {
            lexicon.insert(word, 3.2);
        }

        // Moderately positive
        for word in &[
            "happy",
            "great",
            "joyful",
            "joy",
            "delighted",
            "excited",
            "cheerful",
            "glad",
            "pleased",
            "proud",
            "grateful",
            "enjoy",
            "enjoyed",
            "enjoying",
            "beautiful",
        ] {
            lexicon.insert(word, 2.4);
        }

        for word in &[
            "good",
            "nice",
            "pleasant",
            "comfortable",
            "satisfied",
            "hopeful",
            "optimistic",
        ] {
            lexicon.insert(word, 1.9);
        }

        // Mildly positive: these alone stay under the NLP activation gate
        for word in &[
            "okay", "fine", "decent", "alright", "calm", "peaceful", "relaxed", "content",
            "steady", "relieved",
        ] {
            lexicon.insert(word, 1.3);
        }

        // Strongly negative
        for word in &[
            "terrible",
            "awful",
            "horrible",
            "dreadful",
            "devastated",
            "devastating",
            "miserable",
            "depressed",
            "hate",
            "hated",
            "furious",
            "heartbroken",
            "hopeless",
            "disastrous",
            "appalling",
        ] {
            lexicon.insert(word, -3.4);
        }

        // Moderately negative
        for word in &[
            "sad",
            "bad",
            "angry",
            "upset",
            "stressed",
            "anxious",
            "worried",
            "frustrated",
            "frustrating",
            "scared",
            "afraid",
            "unhappy",
            "gloomy",
            "annoyed",
            "annoying",
            "disappointed",
            "disappointing",
            "exhausted",
            "overwhelmed",
        ] {
            lexicon.insert(word, -2.4);
        }

        for word in &[
            "tired", "nervous", "tense", "uneasy", "lonely", "hurt", "pain", "crying",
        ] {
            lexicon.insert(word, -1.6);
        }

        // Mildly negative
        for word in &[
            "bored",
            "boring",
            "dull",
            "mediocre",
            "tedious",
            "bland",
            "sluggish",
        ] {
            lexicon.insert(word, -1.1);
        }

        lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon_signs() {
        let lexicon = SentimentLexicon::default();
        assert!(lexicon.valence("happy").unwrap() > 0.0);
        assert!(lexicon.valence("sad").unwrap() < 0.0);
        assert!(lexicon.valence("desk").is_none());
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let lexicon = SentimentLexicon::default();
        assert_eq!(lexicon.valence("HAPPY"), lexicon.valence("happy"));
        assert!(lexicon.contains("Terrible"));
    }

    #[test]
    fn test_insert_clamps_valence() {
        let mut lexicon = SentimentLexicon::new();
        lexicon.insert("euphoric", 9.0);
        assert_eq!(lexicon.valence("euphoric"), Some(MAX_VALENCE));

        lexicon.insert("catastrophic", -9.0);
        assert_eq!(lexicon.valence("catastrophic"), Some(-MAX_VALENCE));
    }

    #[test]
    fn test_default_lexicon_populated() {
        let lexicon = SentimentLexicon::default();
        assert!(!lexicon.is_empty());
        assert!(lexicon.len() > 50);
    }
}
