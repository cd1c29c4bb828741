//! Lexicon-based text sentiment scoring.
//!
//! Produces a single compound polarity score in `[-1, 1]` summarizing the
//! overall sentiment of a text: word valences are summed with negation,
//! intensifier and exclamation adjustments, then squashed through
//! `sum / sqrt(sum^2 + alpha)`.

mod lexicon;

pub use lexicon::SentimentLexicon;

/// A negator within the preceding window flips and damps the valence.
const NEGATION_SCALAR: f32 = -0.74;

/// How many tokens back a negator still applies.
const NEGATION_WINDOW: usize = 3;

/// Valence adjustment contributed by an intensifier or dampener.
const BOOSTER_STEP: f32 = 0.293;

/// Amplification per exclamation mark, capped at [`MAX_EXCLAMATIONS`].
const EXCLAMATION_STEP: f32 = 0.292;
const MAX_EXCLAMATIONS: usize = 3;

/// Normalization constant for the compound squash.
const NORMALIZATION_ALPHA: f32 = 15.0;

const NEGATORS: &[&str] = &[
    "no",
    "not",
    "never",
    "none",
    "cannot",
    "can't",
    "don't",
    "doesn't",
    "didn't",
    "isn't",
    "wasn't",
    "aren't",
    "won't",
    "wouldn't",
    "couldn't",
    "shouldn't",
    "ain't",
];

const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "incredibly",
    "absolutely",
    "completely",
    "totally",
    "utterly",
    "so",
    "super",
    "deeply",
];

const DAMPENERS: &[&str] = &[
    "slightly",
    "somewhat",
    "kinda",
    "barely",
    "hardly",
    "marginally",
];

/// Text sentiment scorer over a valence lexicon.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: SentimentLexicon,
}

impl SentimentAnalyzer {
    /// Create an analyzer with the default lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: SentimentLexicon::default(),
        }
    }

    /// Create an analyzer with a custom lexicon.
    pub fn with_lexicon(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    /// Compute the compound polarity score of a text.
    ///
    /// Returns a value in `[-1, 1]`; text with no recognized sentiment
    /// words scores exactly `0.0`.
    pub fn score(&self, text: &str) -> f32 {
        let tokens = tokenize(text);

        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(mut valence) = self.lexicon.valence(token) else {
                continue;
            };

            // Intensifier or dampener directly before the sentiment word
            if i >= 1 {
                if let Some(boost) = booster_weight(&tokens[i - 1]) {
                    valence += boost * valence.signum();
                }
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| is_negator(t)) {
                valence *= NEGATION_SCALAR;
            }

            sum += valence;
        }

        if sum == 0.0 {
            return 0.0;
        }

        let exclamations = text
            .chars()
            .filter(|&c| c == '!')
            .count()
            .min(MAX_EXCLAMATIONS);
        sum += exclamations as f32 * EXCLAMATION_STEP * sum.signum();

        (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercased word tokens with edge punctuation stripped.
///
/// Interior apostrophes survive so contractions match the negator list.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token)
}

fn booster_weight(token: &str) -> Option<f32> {
    if INTENSIFIERS.contains(&token) {
        Some(BOOSTER_STEP)
    } else if DAMPENERS.contains(&token) {
        Some(-BOOSTER_STEP)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text_scores_positive() {
        let analyzer = SentimentAnalyzer::new();
        let score = analyzer.score("I am so happy today, this is wonderful");
        assert!(score > 0.4, "score was {}", score);
    }

    #[test]
    fn test_negative_text_scores_negative() {
        let analyzer = SentimentAnalyzer::new();
        let score = analyzer.score("this is terrible and I hate it");
        assert!(score < -0.4, "score was {}", score);
    }

    #[test]
    fn test_neutral_text_scores_zero() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.score("the report is on the desk"), 0.0);
        assert_eq!(analyzer.score(""), 0.0);
        assert_eq!(analyzer.score("   "), 0.0);
    }

    #[test]
    fn test_score_stays_in_range() {
        let analyzer = SentimentAnalyzer::new();
        let gushing =
            "amazing wonderful fantastic perfect brilliant awesome superb magnificent!!!";
        let score = analyzer.score(gushing);
        assert!(score > 0.0 && score <= 1.0);

        let bleak = "terrible awful horrible miserable hopeless devastating!!!";
        let score = analyzer.score(bleak);
        assert!(score < 0.0 && score >= -1.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let analyzer = SentimentAnalyzer::new();
        assert!(analyzer.score("good") > 0.0);
        assert!(analyzer.score("not good") < 0.0);
        // Negated negative reads as (damped) positive
        assert!(analyzer.score("not terrible") > 0.0);
    }

    #[test]
    fn test_negation_window() {
        let analyzer = SentimentAnalyzer::new();
        // Negator three tokens back still applies
        assert!(analyzer.score("not at all happy") < 0.0);
        // A negator further away does not
        assert!(analyzer.score("no clouds anywhere today and feeling happy") > 0.0);
    }

    #[test]
    fn test_intensifier_amplifies() {
        let analyzer = SentimentAnalyzer::new();
        let plain = analyzer.score("happy");
        let boosted = analyzer.score("very happy");
        assert!(boosted > plain);
    }

    #[test]
    fn test_dampener_attenuates() {
        let analyzer = SentimentAnalyzer::new();
        let plain = analyzer.score("happy");
        let damped = analyzer.score("slightly happy");
        assert!(damped < plain);
        assert!(damped > 0.0);
    }

    #[test]
    fn test_exclamation_amplifies() {
        let analyzer = SentimentAnalyzer::new();
        let plain = analyzer.score("happy");
        let emphatic = analyzer.score("happy!!!");
        assert!(emphatic > plain);

        let negative = analyzer.score("sad");
        let emphatic_negative = analyzer.score("sad!!!");
        assert!(emphatic_negative < negative);
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.score("HAPPY"), analyzer.score("happy"));
        assert_eq!(analyzer.score("happy."), analyzer.score("happy"));
    }

    #[test]
    fn test_mild_words_stay_below_gate() {
        let analyzer = SentimentAnalyzer::new();
        let score = analyzer.score("feeling calm");
        assert!(score > 0.0 && score < 0.4, "score was {}", score);
    }
}
