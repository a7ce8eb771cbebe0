//! Symptom analysis service.
//!
//! Chooses between mock and live mode once, at construction, from the injected
//! configuration. Live mode forwards the symptoms to the provider and decodes
//! its answer; every failure is returned as an [`AnalysisError`] for the HTTP
//! layer to map onto a canned payload.

use symptom_config::AppConfig;
use symptom_core::{AnalysisError, SymptomAnalysis, SymptomRequest};
use symptom_llm::{prompts, GrokClient};
use tracing::{info, warn};

/// Handles requests for the analyze endpoint.
pub struct SymptomAnalysisHandler {
    client: Option<GrokClient>,
}

impl SymptomAnalysisHandler {
    /// Creates a handler in live mode when the config carries a credential,
    /// mock mode otherwise.
    pub fn new(config: &AppConfig) -> Self {
        let client = config
            .api_key
            .as_ref()
            .map(|key| GrokClient::new(config, key.as_str()));
        Self { client }
    }

    /// Returns true if requests are forwarded to the provider.
    pub fn is_live(&self) -> bool {
        self.client.is_some()
    }

    /// Validates a raw request body and analyzes its symptoms.
    pub async fn handle(&self, body: &[u8]) -> Result<SymptomAnalysis, AnalysisError> {
        let request = SymptomRequest::from_body(body)?;
        self.analyze(&request.symptoms).await
    }

    /// Produces the analysis for already-validated symptom text.
    pub async fn analyze(&self, symptoms: &str) -> Result<SymptomAnalysis, AnalysisError> {
        let Some(client) = &self.client else {
            return Ok(SymptomAnalysis::mock(symptoms));
        };

        info!("Analyzing {} chars of symptoms with {}", symptoms.chars().count(), client.model());
        let response = client
            .complete(prompts::SYSTEM_PROMPT, &prompts::user_prompt(symptoms))
            .await?;

        let analysis = SymptomAnalysis::from_provider_text(&response.content)?;

        let issues = analysis.shape_issues();
        if !issues.is_empty() {
            warn!("Provider answer does not match advisory shape: {}", issues.join("; "));
        }

        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_mode_without_credential() {
        let handler = SymptomAnalysisHandler::new(&AppConfig::default());
        assert!(!handler.is_live());

        let analysis = handler.analyze("runny nose").await.unwrap();
        assert_eq!(analysis, SymptomAnalysis::mock("runny nose"));
    }

    #[test]
    fn live_mode_with_credential() {
        let config = AppConfig::default().with_api_key(Some("xai-key".into()));
        assert!(SymptomAnalysisHandler::new(&config).is_live());
    }

    #[tokio::test]
    async fn handle_validates_before_mode_selection() {
        let handler = SymptomAnalysisHandler::new(&AppConfig::default());
        let err = handler.handle(br#"{"symptoms":7}"#).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Validation(_)));
    }
}
