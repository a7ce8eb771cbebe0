//! Core domain types and error definitions for the symptom API.
//!
//! This crate provides the types shared by the client and server crates:
//!
//! - [`SymptomRequest`] — Validated request body
//! - [`SymptomAnalysis`] — The five-field educational payload returned on every 200
//! - [`AnalysisError`] — Tagged union of every failure the analysis path can hit
//!
//! Every non-validation error maps to exactly one canned payload through
//! [`AnalysisError::fallback_analysis`], so callers never see a raw failure.
//!
//! # Example
//!
//! ```rust
//! use symptom_core::{SymptomAnalysis, SymptomRequest};
//!
//! let request = SymptomRequest::from_body(br#"{"symptoms":"headache and fever"}"#).unwrap();
//! let analysis = SymptomAnalysis::mock(&request.symptoms);
//!
//! assert_eq!(analysis.possible_causes.len(), 3);
//! assert_eq!(analysis.urgent_warnings.len(), 5);
//! ```

mod canned;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Message returned with a 400 when `symptoms` is missing or not a string.
pub const SYMPTOMS_REQUIRED: &str = "Symptoms are required and must be a string";

/// Errors that can occur while handling a symptom analysis request.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// `symptoms` is absent, empty or not a string.
    #[error("{0}")]
    Validation(String),

    /// The provider could not be reached or answered with a non-success status.
    #[error("Provider request failed: {0}")]
    ProviderTransport(String),

    /// The provider answered but carried no message content.
    #[error("Provider returned no content: {0}")]
    ProviderContent(String),

    /// The provider content did not decode into the five-field schema.
    #[error("Failed to parse provider response: {source}")]
    ResponseParse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// Anything else, including malformed request bodies.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AnalysisError {
    /// Creates the validation error for a missing or mistyped `symptoms` field.
    pub fn symptoms_required() -> Self {
        Self::Validation(SYMPTOMS_REQUIRED.into())
    }

    /// Returns the canned payload served in place of this error.
    ///
    /// `None` only for [`AnalysisError::Validation`], which is reported to the
    /// caller as a client error instead.
    pub fn fallback_analysis(&self) -> Option<SymptomAnalysis> {
        match self {
            Self::Validation(_) => None,
            Self::ResponseParse { raw, .. } => Some(SymptomAnalysis::degraded(raw)),
            Self::ProviderTransport(_) | Self::ProviderContent(_) | Self::Unexpected(_) => {
                Some(SymptomAnalysis::unavailable())
            }
        }
    }
}

// ============================================================================
// Request
// ============================================================================

/// Incoming request body for the analyze endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomRequest {
    /// Free-text symptom description, passed through verbatim.
    pub symptoms: String,
}

impl SymptomRequest {
    /// Parses and validates a raw request body.
    ///
    /// A body that is not JSON at all (or is JSON `null`) is an
    /// [`AnalysisError::Unexpected`]; any other JSON value without a non-empty
    /// string `symptoms` is an [`AnalysisError::Validation`].
    pub fn from_body(body: &[u8]) -> Result<Self, AnalysisError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AnalysisError::Unexpected(format!("invalid request body: {}", e)))?;

        if value.is_null() {
            return Err(AnalysisError::Unexpected("request body is null".into()));
        }

        match value.get("symptoms") {
            Some(Value::String(symptoms)) if !symptoms.is_empty() => Ok(Self {
                symptoms: symptoms.clone(),
            }),
            _ => Err(AnalysisError::symptoms_required()),
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// Educational (non-diagnostic) health information for a symptom description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    /// Short patient-facing explanation (2-3 sentences).
    pub explanation: String,
    /// 2-3 possible causes.
    pub possible_causes: Vec<String>,
    /// 3-4 home care suggestions.
    pub home_remedies: Vec<String>,
    /// 3-4 situations that warrant seeing a doctor.
    pub when_to_see_doctor: Vec<String>,
    /// 3-5 signs that need immediate care.
    pub urgent_warnings: Vec<String>,
    /// Keys the provider sent beyond the five above, re-emitted untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SymptomAnalysis {
    /// Decodes provider message content into the five-field schema.
    pub fn from_provider_text(text: &str) -> Result<Self, AnalysisError> {
        serde_json::from_str(text).map_err(|source| AnalysisError::ResponseParse {
            raw: text.to_string(),
            source,
        })
    }

    /// Lists where this payload strays from the advisory field sizes.
    ///
    /// Provider answers are passed through regardless; this is for logging.
    pub fn shape_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.explanation.trim().is_empty() {
            issues.push("explanation is empty".to_string());
        }

        let lists: [(&str, &[String], usize, usize); 4] = [
            ("possibleCauses", self.possible_causes.as_slice(), 2, 3),
            ("homeRemedies", self.home_remedies.as_slice(), 3, 4),
            ("whenToSeeDoctor", self.when_to_see_doctor.as_slice(), 3, 4),
            ("urgentWarnings", self.urgent_warnings.as_slice(), 3, 5),
        ];
        for (name, items, min, max) in lists {
            if !(min..=max).contains(&items.len()) {
                issues.push(format!("{} has {} items (expected {}-{})", name, items.len(), min, max));
            }
        }
        issues
    }
}
