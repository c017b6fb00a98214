//! Built-in medical knowledge base, greeting and fallback text.
//!
//! Rule order matters: a message mentioning both a greeting and a symptom gets
//! the greeting, and "great" is caught by the diet rule (it contains "eat")
//! before the thanks rule is ever consulted.

use super::RuleDefinition;

/// Title shown by the terminal front end.
pub const ASSISTANT_NAME: &str = "Medical Chatbot";

pub const DISCLAIMER: &str = "Educational use only. Always seek professional care for concerns.";

/// First bot turn of every new session.
pub const GREETING: &str =
    "Hi there! I'm your medical assistant. Ask me general health questions and I'll do my best to help.";

pub const FALLBACK_RESPONSE: &str =
    "I'm here to provide general information. For personalized advice, please consult a qualified professional.";

const RULES: &[(&[&str], &str)] = &[
    (
        &["hello", "hi", "hey"],
        "Hello! How can I support you today? I can share general guidance about symptoms, wellness tips, and appointments.",
    ),
    (
        &["appointment", "book", "schedule"],
        "You can book an appointment from the Doctors section. Choose a speciality, pick a doctor, and select a time that suits you.",
    ),
    (
        &["fever", "temperature", "cold"],
        "For mild fever, stay hydrated, rest, and consider over-the-counter fever reducers if appropriate. If the fever is high, persistent, or paired with severe symptoms, please contact a healthcare professional.",
    ),
    (
        &["covid", "corona", "virus"],
        "Common COVID-19 symptoms include fever, cough, sore throat, and loss of taste or smell. If you suspect exposure, isolate, test promptly, and consult a healthcare provider for personalised advice.",
    ),
    (
        &["diet", "nutrition", "food", "eat"],
        "A balanced diet includes plenty of fruits, vegetables, lean proteins, whole grains, and adequate hydration. Limit sugary drinks and processed foods, and consult a dietitian for personalised plans.",
    ),
    (
        &["exercise", "workout", "fitness"],
        "Aim for at least 150 minutes of moderate activity or 75 minutes of vigorous activity each week, along with muscle-strengthening exercises. Always tailor workouts to your fitness level and medical history.",
    ),
    (
        &["emergency", "urgent", "serious"],
        "If you are experiencing an emergency or severe symptoms, please contact your local emergency services or visit the nearest hospital immediately.",
    ),
    (
        &["thanks", "thank you", "great"],
        "You're welcome! Let me know if there is anything else you would like to discuss.",
    ),
];

/// The built-in rules in priority order.
pub fn rules() -> Vec<RuleDefinition> {
    RULES
        .iter()
        .map(|(keywords, response)| RuleDefinition::new(keywords.iter().copied(), *response))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_keep_declaration_order() {
        let rules = rules();
        assert_eq!(rules.len(), RULES.len());
        assert_eq!(rules[0].keywords, ["hello", "hi", "hey"]);
        assert_eq!(rules[7].keywords, ["thanks", "thank you", "great"]);
    }

    #[test]
    fn test_builtin_keywords_are_lowercase() {
        for rule in rules() {
            for keyword in &rule.keywords {
                assert_eq!(keyword, &keyword.to_lowercase());
            }
        }
    }
}
