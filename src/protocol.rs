//! Wire types of the prediction service.

use crate::error::{GfResult, GradeFormError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Body of a 2xx `POST /predict`.
///
/// Only `prediction` is required. The extras are informational: a value of
/// the wrong type is dropped instead of failing the whole reply.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct PredictResponse {
    pub prediction: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub raw_prediction: Option<i64>,
    /// Class label -> probability, when the model exposes probabilities.
    #[serde(deserialize_with = "numeric_map")]
    pub confidence: Option<BTreeMap<String, f64>>,
    #[serde(deserialize_with = "lenient")]
    pub timestamp: Option<String>,
    /// Echo of the features the service actually used.
    #[serde(deserialize_with = "numeric_map")]
    pub input_data: Option<BTreeMap<String, f64>>,
}

/// Any JSON value; `None` when it does not fit `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// An object of numbers. Non-numeric entries are skipped; anything other
/// than an object is `None`.
fn numeric_map<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(
        entries
            .into_iter()
            .filter_map(|(k, v)| v.as_f64().map(|n| (k, n)))
            .collect(),
    ))
}

/// Body of a non-2xx answer.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// `GET /predict`: self-description of the endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EndpointInfo {
    pub message: String,
    pub method: String,
    pub required_fields: Vec<String>,
    pub example: BTreeMap<String, f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub model_status: String,
    pub timestamp: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ModelInfo {
    pub model_type: String,
    pub feature_columns: Vec<String>,
    pub n_features: usize,
    pub classes: Vec<Value>,
    pub n_estimators: Option<u64>,
    pub feature_importance: Option<BTreeMap<String, f64>>,
}

/// A successful prediction, ready to display.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// The `prediction` field rendered as text.
    pub label: String,
    pub raw_prediction: Option<i64>,
    pub confidence: BTreeMap<String, f64>,
    pub timestamp: Option<String>,
}

impl Prediction {
    pub fn from_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            raw_prediction: None,
            confidence: BTreeMap::new(),
            timestamp: None,
        }
    }
}

impl TryFrom<PredictResponse> for Prediction {
    type Error = GradeFormError;

    fn try_from(resp: PredictResponse) -> GfResult<Self> {
        let label = match resp.prediction {
            None | Some(Value::Null) => return Err(GradeFormError::MissingPrediction),
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
        };
        Ok(Self {
            label,
            raw_prediction: resp.raw_prediction,
            confidence: resp.confidence.unwrap_or_default(),
            timestamp: resp.timestamp,
        })
    }
}
