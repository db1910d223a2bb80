//! Serde model for Prometheus-style range-query results.
//!
//! This is the caller-owned input to normalization: it is never mutated,
//! only read. Field names follow the Prometheus HTTP API (`resultType`,
//! sample pairs as `[unix_seconds, "decimal-string"]`).

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::series::LabelSet;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(rename = "resultType")]
    pub result_type: String,
    pub result: Vec<ResultEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub metric: LabelSet,
    /// Scalar samples: `(unix seconds, value string)`. The value string may
    /// be non-numeric ("NaN", "+Inf"); normalization turns those into gaps.
    #[serde(default)]
    pub values: Vec<(f64, String)>,
    /// Native-histogram samples. Opaque here: `(unix seconds, payload)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub histograms: Option<Vec<SampleHistogram>>,
}

/// One histogram sample, kept as raw JSON for backend pass-through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleHistogram(pub f64, pub serde_json::Value);

impl QueryResult {
    pub fn empty() -> Self {
        Self {
            result_type: "matrix".to_string(),
            result: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("malformed query result payload")
    }
}
