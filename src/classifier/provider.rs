//! ONNX-backed keystroke classifier provider.
//!
//! Runs the trained recurrent model over a `[1, 50, 1]` tensor of normalized
//! inter-keystroke intervals and reads back the softmax output as a
//! probability vector over the four emotion labels.

#[cfg(feature = "classifier")]
use ort::{
    session::{builder::GraphOptimizationLevel, Session},
    value::Value,
};
use std::path::Path;

use super::{ClassifierError, EmotionClassifier, Probabilities};
#[cfg(feature = "classifier")]
use super::{EMOTION_LABELS, SEQUENCE_LEN};

/// Keystroke classifier backed by an ONNX session
#[cfg(feature = "classifier")]
pub struct OnnxClassifier {
    session: Session,
}

#[cfg(feature = "classifier")]
impl OnnxClassifier {
    /// Create a classifier from a model file on disk
    pub fn new(model_path: &Path) -> Result<Self, ClassifierError> {
        if !model_path.exists() {
            return Err(ClassifierError::ModelLoad(format!(
                "Model not found at {:?}",
                model_path
            )));
        }

        let session = Session::builder()
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?
            .with_intra_threads(1)
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?;

        Ok(Self { session })
    }
}

#[cfg(feature = "classifier")]
impl EmotionClassifier for OnnxClassifier {
    fn classify(&mut self, input: &[f32]) -> Result<Probabilities, ClassifierError> {
        if input.len() != SEQUENCE_LEN {
            return Err(ClassifierError::InvalidInput(format!(
                "expected {} values, got {}",
                SEQUENCE_LEN,
                input.len()
            )));
        }

        // The model expects shape [batch, time, features]
        let input_shape = [1_usize, SEQUENCE_LEN, 1];

        let input_tensor = Value::from_array((input_shape, input.to_vec()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let outputs = self
            .session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let output = outputs
            .iter()
            .next()
            .ok_or_else(|| ClassifierError::InvalidOutput("no output from model".to_string()))?;

        let output_tensor = output
            .1
            .try_extract_tensor::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let values: Vec<f32> = output_tensor.1.iter().copied().collect();

        if values.len() < EMOTION_LABELS.len() {
            return Err(ClassifierError::InvalidOutput(format!(
                "expected {} probabilities, got {}",
                EMOTION_LABELS.len(),
                values.len()
            )));
        }

        let mut probabilities: Probabilities = [0.0; EMOTION_LABELS.len()];
        probabilities.copy_from_slice(&values[..EMOTION_LABELS.len()]);

        tracing::debug!(
            "Keystroke classification: {:?} -> {:?}",
            EMOTION_LABELS,
            probabilities
        );

        Ok(probabilities)
    }
}

// Stub implementation when the feature is not enabled
#[cfg(not(feature = "classifier"))]
pub struct OnnxClassifier;

#[cfg(not(feature = "classifier"))]
impl OnnxClassifier {
    pub fn new(_model_path: &Path) -> Result<Self, ClassifierError> {
        Err(ClassifierError::FeatureNotEnabled)
    }
}

#[cfg(not(feature = "classifier"))]
impl EmotionClassifier for OnnxClassifier {
    fn classify(&mut self, _input: &[f32]) -> Result<Probabilities, ClassifierError> {
        Err(ClassifierError::FeatureNotEnabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "classifier")]
    #[test]
    fn test_new_missing_model() {
        let dir = tempfile::tempdir().unwrap();
        let result = OnnxClassifier::new(&dir.path().join("missing.onnx"));
        assert!(matches!(result, Err(ClassifierError::ModelLoad(_))));
    }

    #[cfg(not(feature = "classifier"))]
    #[test]
    fn test_stub_provider() {
        let result = OnnxClassifier::new(Path::new("irrelevant.onnx"));
        assert!(matches!(result, Err(ClassifierError::FeatureNotEnabled)));
    }
}
