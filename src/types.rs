//! Request/response types for the prediction endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of a `POST /predict` request.
///
/// Both fields default when missing or of the wrong type, so an incomplete
/// payload still routes through the normal decision path instead of failing
/// the request. Only an unparseable body is rejected, by the extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Inter-keystroke intervals in milliseconds, in typing order.
    #[serde(default, deserialize_with = "lenient_intervals")]
    pub data: Vec<f32>,

    /// Free text typed by the user (may be empty).
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
}

/// Accepts a numeric array; anything else (or any non-numeric element)
/// counts as no keystroke data at all.
fn lenient_intervals<'de, D>(deserializer: D) -> Result<Vec<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    let intervals: Option<Vec<f32>> = items
        .iter()
        .map(|item| item.as_f64().map(|n| n as f32))
        .collect();

    Ok(intervals.unwrap_or_default())
}

/// Accepts a string; anything else counts as empty text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(text) => Ok(text),
        _ => Ok(String::new()),
    }
}

/// Body of a `POST /predict` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub emotion: String,
    pub confidence: f32,
}

/// Emotion reported when no classifier is loaded.
pub const MODEL_UNAVAILABLE: &str = "AI Model not found";

/// Emotion reported when there are too few keystroke samples.
pub const NEEDS_MORE_TYPING: &str = "Neutral / Need more typing";

impl PredictionResponse {
    pub fn new(emotion: impl Into<String>, confidence: f32) -> Self {
        Self {
            emotion: emotion.into(),
            confidence,
        }
    }

    /// Zero-confidence response for a missing classifier artifact.
    pub fn model_unavailable() -> Self {
        Self::new(MODEL_UNAVAILABLE, 0.0)
    }

    /// Zero-confidence response for insufficient keystroke data.
    pub fn needs_more_typing() -> Self {
        Self::new(NEEDS_MORE_TYPING, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_missing_fields_default() {
        let request: PredictionRequest = serde_json::from_str("{}").unwrap();
        assert!(request.data.is_empty());
        assert!(request.text.is_empty());
    }

    #[test]
    fn test_request_partial_fields() {
        let request: PredictionRequest = serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        assert_eq!(request.text, "hello");
        assert!(request.data.is_empty());

        let request: PredictionRequest = serde_json::from_str(r#"{"data":[120,80.5]}"#).unwrap();
        assert_eq!(request.data, vec![120.0, 80.5]);
        assert!(request.text.is_empty());
    }

    #[test]
    fn test_request_wrong_types_default() {
        let request: PredictionRequest =
            serde_json::from_str(r#"{"data":"junk","text":42}"#).unwrap();
        assert!(request.data.is_empty());
        assert!(request.text.is_empty());
    }

    #[test]
    fn test_request_non_numeric_element_invalidates_sequence() {
        let request: PredictionRequest =
            serde_json::from_str(r#"{"data":[100,"fast",120]}"#).unwrap();
        assert!(request.data.is_empty());
    }

    #[test]
    fn test_response_field_names() {
        let response = PredictionResponse::new("Happy", 0.75);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["emotion"], "Happy");
        assert_eq!(json["confidence"], 0.75);
    }

    #[test]
    fn test_sentinel_responses() {
        assert_eq!(PredictionResponse::model_unavailable().confidence, 0.0);
        assert_eq!(
            PredictionResponse::needs_more_typing().emotion,
            NEEDS_MORE_TYPING
        );
    }
}
