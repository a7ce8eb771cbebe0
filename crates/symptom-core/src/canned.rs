//! Fixed payloads for mock mode and the two failure fallbacks.

use serde_json::Map;

use crate::SymptomAnalysis;

/// Number of characters of raw provider text kept in a degraded explanation.
const EXCERPT_CHARS: usize = 200;

/// Appended to the truncated provider text in a degraded explanation.
const EXCERPT_MARKER: &str = "...";

const MOCK_POSSIBLE_CAUSES: [&str; 3] = [
    "Common viral infection - Often causes similar symptoms and usually resolves on its own",
    "Seasonal allergies - Environmental factors can trigger these symptoms",
    "Minor bacterial infection - May require medical attention if symptoms persist",
];

const MOCK_HOME_REMEDIES: [&str; 4] = [
    "Get plenty of rest and stay hydrated",
    "Use over-the-counter pain relievers as directed",
    "Apply warm or cold compresses as appropriate",
    "Maintain good hygiene practices",
];

const MOCK_WHEN_TO_SEE_DOCTOR: [&str; 4] = [
    "Symptoms persist for more than 7-10 days",
    "Symptoms worsen significantly",
    "You develop additional concerning symptoms",
    "You have underlying health conditions",
];

const MOCK_URGENT_WARNINGS: [&str; 5] = [
    "Difficulty breathing or shortness of breath",
    "Severe chest pain",
    "High fever (over 103°F/39.4°C)",
    "Signs of dehydration",
    "Severe headache with neck stiffness",
];

const DEGRADED_POSSIBLE_CAUSES: [&str; 1] = ["Response parsing error - please try again"];
const DEGRADED_HOME_REMEDIES: [&str; 2] = ["Rest and hydration", "Monitor symptoms"];
const DEGRADED_WHEN_TO_SEE_DOCTOR: [&str; 1] = ["If symptoms persist or worsen"];
const DEGRADED_URGENT_WARNINGS: [&str; 1] = ["Severe symptoms requiring immediate care"];

const UNAVAILABLE_EXPLANATION: &str = "I'm having trouble analyzing your symptoms right now. Please consult with a healthcare professional for proper evaluation.";

const UNAVAILABLE_POSSIBLE_CAUSES: [&str; 1] =
    ["Unable to analyze at this time - please seek medical advice"];

const UNAVAILABLE_HOME_REMEDIES: [&str; 3] = [
    "Rest and stay hydrated",
    "Monitor your symptoms carefully",
    "Follow general wellness practices",
];

const UNAVAILABLE_WHEN_TO_SEE_DOCTOR: [&str; 3] = [
    "For proper evaluation of your symptoms",
    "If symptoms persist or worsen",
    "For peace of mind and professional assessment",
];

const UNAVAILABLE_URGENT_WARNINGS: [&str; 5] = [
    "Severe or worsening symptoms",
    "Difficulty breathing",
    "High fever",
    "Severe pain",
    "Any symptoms causing significant concern",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SymptomAnalysis {
    /// Payload served when no provider credential is configured.
    pub fn mock(symptoms: &str) -> Self {
        Self {
            explanation: format!(
                "Based on your symptoms: \"{}\", here's what you should know. Please note this is educational information only and not a medical diagnosis.",
                symptoms
            ),
            possible_causes: owned(&MOCK_POSSIBLE_CAUSES),
            home_remedies: owned(&MOCK_HOME_REMEDIES),
            when_to_see_doctor: owned(&MOCK_WHEN_TO_SEE_DOCTOR),
            urgent_warnings: owned(&MOCK_URGENT_WARNINGS),
            extra: Map::new(),
        }
    }

    /// Payload served when the provider answered with text that is not the schema.
    pub fn degraded(raw: &str) -> Self {
        Self {
            explanation: excerpt(raw),
            possible_causes: owned(&DEGRADED_POSSIBLE_CAUSES),
            home_remedies: owned(&DEGRADED_HOME_REMEDIES),
            when_to_see_doctor: owned(&DEGRADED_WHEN_TO_SEE_DOCTOR),
            urgent_warnings: owned(&DEGRADED_URGENT_WARNINGS),
            extra: Map::new(),
        }
    }

    /// Catch-all payload for every other failure.
    pub fn unavailable() -> Self {
        Self {
            explanation: UNAVAILABLE_EXPLANATION.to_string(),
            possible_causes: owned(&UNAVAILABLE_POSSIBLE_CAUSES),
            home_remedies: owned(&UNAVAILABLE_HOME_REMEDIES),
            when_to_see_doctor: owned(&UNAVAILABLE_WHEN_TO_SEE_DOCTOR),
            urgent_warnings: owned(&UNAVAILABLE_URGENT_WARNINGS),
            extra: Map::new(),
        }
    }
}

/// First [`EXCERPT_CHARS`] characters of `raw`, always followed by the marker.
fn excerpt(raw: &str) -> String {
    let mut out: String = raw.chars().take(EXCERPT_CHARS).collect();
    out.push_str(EXCERPT_MARKER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_interpolates_symptoms_verbatim() {
        let analysis = SymptomAnalysis::mock("headache and fever");
        assert_eq!(
            analysis.explanation,
            "Based on your symptoms: \"headache and fever\", here's what you should know. Please note this is educational information only and not a medical diagnosis."
        );
        assert_eq!(analysis.possible_causes.len(), 3);
        assert_eq!(analysis.home_remedies.len(), 4);
        assert_eq!(analysis.when_to_see_doctor.len(), 4);
        assert_eq!(analysis.urgent_warnings.len(), 5);
        assert!(analysis.shape_issues().is_empty());
    }

    #[test]
    fn mock_is_deterministic() {
        assert_eq!(SymptomAnalysis::mock("cough"), SymptomAnalysis::mock("cough"));
        assert_ne!(SymptomAnalysis::mock("cough"), SymptomAnalysis::mock("rash"));
    }

    #[test]
    fn mock_serializes_camel_case() {
        let value = serde_json::to_value(SymptomAnalysis::mock("cough")).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 5);
        for key in ["explanation", "possibleCauses", "homeRemedies", "whenToSeeDoctor", "urgentWarnings"] {
            assert!(keys.contains(&key), "missing {}", key);
        }
        assert_eq!(value["urgentWarnings"][2], "High fever (over 103°F/39.4°C)");
    }

    #[test]
    fn degraded_truncates_to_200_chars() {
        let raw = "x".repeat(500);
        let analysis = SymptomAnalysis::degraded(&raw);
        assert_eq!(analysis.explanation, format!("{}...", "x".repeat(200)));
        assert_eq!(analysis.possible_causes, vec!["Response parsing error - please try again"]);
        assert_eq!(analysis.home_remedies, vec!["Rest and hydration", "Monitor symptoms"]);
        assert_eq!(analysis.when_to_see_doctor, vec!["If symptoms persist or worsen"]);
        assert_eq!(analysis.urgent_warnings, vec!["Severe symptoms requiring immediate care"]);
    }

    #[test]
    fn degraded_keeps_exactly_200_chars_intact() {
        let raw: String = ('a'..='z').cycle().take(EXCERPT_CHARS).collect();
        let explanation = SymptomAnalysis::degraded(&raw).explanation;
        assert_eq!(explanation, format!("{}{}", raw, EXCERPT_MARKER));
    }

    #[test]
    fn degraded_drops_the_201st_char() {
        let raw: String = "b".repeat(EXCERPT_CHARS) + "Z";
        let explanation = SymptomAnalysis::degraded(&raw).explanation;
        assert_eq!(explanation, format!("{}...", "b".repeat(200)));
        assert!(!explanation.contains('Z'));
    }

    #[test]
    fn degraded_short_text_still_gets_marker() {
        assert_eq!(SymptomAnalysis::degraded("Rest up.").explanation, "Rest up....");
    }

    #[test]
    fn degraded_counts_characters_not_bytes() {
        let raw = "é".repeat(250);
        let explanation = SymptomAnalysis::degraded(&raw).explanation;
        assert_eq!(explanation.chars().count(), 203);
        assert!(explanation.starts_with("éé"));
    }

    #[test]
    fn payload_variants_are_distinct() {
        let mock = SymptomAnalysis::mock("x");
        let degraded = SymptomAnalysis::degraded("x");
        let unavailable = SymptomAnalysis::unavailable();
        assert_ne!(mock.home_remedies, degraded.home_remedies);
        assert_ne!(mock.home_remedies, unavailable.home_remedies);
        assert_ne!(degraded.home_remedies, unavailable.home_remedies);
        assert_eq!(unavailable.possible_causes.len(), 1);
        assert_eq!(unavailable.home_remedies.len(), 3);
        assert_eq!(unavailable.when_to_see_doctor.len(), 3);
        assert_eq!(unavailable.urgent_warnings.len(), 5);
    }
}
