//! Keystroke-dynamics emotion classifier.
//!
//! Wraps a trained time-series model that maps a fixed-length sequence of
//! normalized inter-keystroke intervals onto a probability vector over the
//! four emotion labels.

mod provider;

pub use provider::OnnxClassifier;

use std::path::Path;
use thiserror::Error;
use tracing::{error, info, warn};

/// Emotion labels in the order the model was trained on.
pub const EMOTION_LABELS: [&str; 4] = ["Happy", "Sad", "Calm", "Stressed"];

/// Input sequence length expected by the model.
pub const SEQUENCE_LEN: usize = 50;

/// Minimum number of captured intervals for a meaningful classification.
pub const MIN_INTERVALS: usize = 10;

/// Raw intervals are milliseconds; the model was trained on seconds.
const INTERVAL_SCALE: f32 = 1000.0;

/// Probability vector aligned to [`EMOTION_LABELS`].
pub type Probabilities = [f32; EMOTION_LABELS.len()];

/// Errors that can occur during keystroke classification
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected model output: {0}")]
    InvalidOutput(String),

    #[error("Feature not enabled")]
    FeatureNotEnabled,
}

/// A classifier over fixed-length keystroke interval sequences.
///
/// The trait seam lets the decision policy run against a substitutable
/// stub in tests instead of a real model session.
pub trait EmotionClassifier: Send {
    /// Run the model once over a prepared input of [`SEQUENCE_LEN`] values.
    fn classify(&mut self, input: &[f32]) -> Result<Probabilities, ClassifierError>;
}

/// Normalize raw millisecond intervals into model input.
///
/// Scales each value to seconds, truncates to [`SEQUENCE_LEN`] and
/// right-pads with zeros when shorter.
pub fn prepare_input(intervals: &[f32]) -> Vec<f32> {
    let mut input: Vec<f32> = intervals
        .iter()
        .take(SEQUENCE_LEN)
        .map(|ms| ms / INTERVAL_SCALE)
        .collect();
    input.resize(SEQUENCE_LEN, 0.0);
    input
}

/// Label and confidence at the argmax of a probability vector.
///
/// Ties resolve to the earliest label.
pub fn top_label(probabilities: &Probabilities) -> (&'static str, f32) {
    let mut best = 0;
    for i in 1..probabilities.len() {
        if probabilities[i] > probabilities[best] {
            best = i;
        }
    }
    (EMOTION_LABELS[best], probabilities[best])
}

/// Load the classifier from disk, if the artifact is present.
///
/// A missing or unloadable model is not fatal: the service runs without
/// keystroke analysis and reports the condition per request.
pub fn load(model_path: &Path) -> Option<Box<dyn EmotionClassifier>> {
    if !model_path.exists() {
        warn!(
            "Emotion model not found at {:?}, keystroke analysis disabled",
            model_path
        );
        return None;
    }

    match OnnxClassifier::new(model_path) {
        Ok(classifier) => {
            info!("Keystroke classifier loaded from {:?}", model_path);
            Some(Box::new(classifier))
        }
        Err(e) => {
            error!("Failed to load keystroke classifier: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_input_pads_short_sequences() {
        let input = prepare_input(&[100.0, 200.0, 300.0]);
        assert_eq!(input.len(), SEQUENCE_LEN);
        assert_eq!(&input[..3], &[0.1, 0.2, 0.3]);
        assert!(input[3..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_prepare_input_truncates_long_sequences() {
        let intervals: Vec<f32> = (0..80).map(|i| i as f32).collect();
        let input = prepare_input(&intervals);
        assert_eq!(input.len(), SEQUENCE_LEN);
        // First 50 values survive, the rest are dropped
        assert_eq!(input[49], 49.0 / 1000.0);
        assert!(!input.contains(&(50.0 / 1000.0)));
    }

    #[test]
    fn test_prepare_input_empty() {
        let input = prepare_input(&[]);
        assert_eq!(input, vec![0.0; SEQUENCE_LEN]);
    }

    #[test]
    fn test_top_label_argmax() {
        let (label, confidence) = top_label(&[0.1, 0.2, 0.6, 0.1]);
        assert_eq!(label, "Calm");
        assert_eq!(confidence, 0.6);

        let (label, _) = top_label(&[0.05, 0.8, 0.1, 0.05]);
        assert_eq!(label, "Sad");
    }

    #[test]
    fn test_top_label_tie_takes_first() {
        let (label, confidence) = top_label(&[0.4, 0.4, 0.1, 0.1]);
        assert_eq!(label, "Happy");
        assert_eq!(confidence, 0.4);
    }

    #[test]
    fn test_load_missing_artifact_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_model.onnx");
        assert!(load(&missing).is_none());
    }
}
