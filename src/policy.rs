//! Two-stage emotion inference policy.
//!
//! Stage 1 gates on text sentiment: a strong enough compound score answers
//! immediately with a rescaled confidence and keystroke data is never
//! consulted. Stage 2 falls back to the keystroke classifier, degrading to
//! zero-confidence sentinel responses instead of failing the request.

use tracing::{debug, warn};

use crate::classifier::{self, EmotionClassifier, MIN_INTERVALS};
use crate::sentiment::SentimentAnalyzer;
use crate::types::{PredictionRequest, PredictionResponse};

/// Minimum |compound| for the sentiment stage to answer.
const NLP_ACTIVATION: f32 = 0.4;

/// Confidence band the activated range rescales onto.
const NLP_CONFIDENCE_FLOOR: f32 = 0.90;
const NLP_CONFIDENCE_SPAN: f32 = 0.10;

/// Label reported when the sentiment stage answers positively.
pub const NLP_POSITIVE_LABEL: &str = "Happy (NLP)";

/// Label reported when the sentiment stage answers negatively.
pub const NLP_NEGATIVE_LABEL: &str = "Sad/Stressed (NLP)";

/// Produce exactly one response for a prediction request.
///
/// The classifier is an injected handle owned by the serving layer; `None`
/// means the model artifact was absent at startup.
pub fn predict(
    request: &PredictionRequest,
    analyzer: &SentimentAnalyzer,
    classifier: Option<&mut dyn EmotionClassifier>,
) -> PredictionResponse {
    // Stage 1: text sentiment gate
    if !request.text.trim().is_empty() {
        let compound = analyzer.score(&request.text);
        if let Some(response) = nlp_gate(compound) {
            debug!(
                "Sentiment stage answered: compound={:.3} -> {}",
                compound, response.emotion
            );
            return response;
        }
        debug!("Sentiment too weak (compound={:.3}), falling through", compound);
    }

    // Stage 2: keystroke classification
    let Some(classifier) = classifier else {
        return PredictionResponse::model_unavailable();
    };

    if request.data.len() < MIN_INTERVALS {
        return PredictionResponse::needs_more_typing();
    }

    let input = classifier::prepare_input(&request.data);
    match classifier.classify(&input) {
        Ok(probabilities) => {
            let (emotion, confidence) = classifier::top_label(&probabilities);
            PredictionResponse::new(emotion, confidence)
        }
        Err(e) => {
            // Inference failure is treated like a missing model rather
            // than surfacing a server error for the request
            warn!("Keystroke classification failed: {}", e);
            PredictionResponse::model_unavailable()
        }
    }
}

/// Sentiment gate: answers only when |compound| reaches the activation
/// threshold, rescaling [0.4, 1.0] linearly onto [0.90, 1.00].
pub fn nlp_gate(compound: f32) -> Option<PredictionResponse> {
    let intensity = compound.abs();
    if intensity < NLP_ACTIVATION {
        return None;
    }

    let confidence = NLP_CONFIDENCE_FLOOR
        + ((intensity - NLP_ACTIVATION) / (1.0 - NLP_ACTIVATION)) * NLP_CONFIDENCE_SPAN;

    let emotion = if compound > 0.0 {
        NLP_POSITIVE_LABEL
    } else {
        NLP_NEGATIVE_LABEL
    };

    Some(PredictionResponse::new(emotion, confidence))
}
