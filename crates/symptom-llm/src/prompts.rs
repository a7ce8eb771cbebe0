//! Prompts sent to the provider.

/// System instruction: role, constraints, disclaimers and the exact JSON schema.
pub const SYSTEM_PROMPT: &str = r#"You are a helpful AI healthcare assistant. You do not provide diagnoses. You explain symptoms, suggest possible causes, home care, and warning signs in simple language at an 8th grade reading level.

IMPORTANT: Always include medical disclaimers. Never provide definitive diagnoses.

Respond with a JSON object containing exactly these fields:
- explanation: A clear, patient-friendly explanation of the symptoms (2-3 sentences)
- possibleCauses: Array of 2-3 common possible causes with disclaimers
- homeRemedies: Array of 3-4 safe home care suggestions
- whenToSeeDoctor: Array of 3-4 situations when medical care is needed
- urgentWarnings: Array of 3-5 warning signs requiring immediate medical attention

Keep language simple, supportive, and educational."#;

/// Wraps the caller's symptom text, verbatim, into the user message.
pub fn user_prompt(symptoms: &str) -> String {
    format!(
        "Patient reports: \"{}\". Please provide educational information about these symptoms.",
        symptoms
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_symptoms_verbatim() {
        assert_eq!(
            user_prompt("dizzy \"spells\""),
            "Patient reports: \"dizzy \"spells\"\". Please provide educational information about these symptoms."
        );
    }

    #[test]
    fn system_prompt_names_every_field() {
        for field in ["explanation", "possibleCauses", "homeRemedies", "whenToSeeDoctor", "urgentWarnings"] {
            assert!(SYSTEM_PROMPT.contains(field), "missing {}", field);
        }
    }
}
