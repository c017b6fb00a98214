//! # Medibot Knowledge Base
//!
//! File: cli/src/knowledge/mod.rs
//!
//! ## Overview
//!
//! The knowledge base is an ordered list of rules, each mapping a set of
//! lowercase keywords to one canned response, plus a single fallback response.
//! It is static configuration: built once at startup, validated, and never
//! mutated afterwards.
//!
//! ## Matching
//!
//! `KnowledgeBase::match_input` scans the rules in declaration order and returns
//! the response of the first rule that has *any* keyword contained in the
//! (already normalized) input. Containment is plain substring search, so a
//! keyword inside a longer word still matches ("hi" matches "history"). Rule
//! order is the only tie-break when several rules match.
//!
//! A linear scan is used on purpose. The rule count is in the single digits and
//! an index structure would hide the first-match-wins ordering.
//!
//! ## Examples
//!
//! ```rust
//! use medibot::knowledge::{KnowledgeBase, RuleDefinition};
//!
//! let kb = KnowledgeBase::new(
//!     vec![
//!         RuleDefinition::new(["fever", "cold"], "Rest and hydrate."),
//!         RuleDefinition::new(["cold"], "Never reached for 'cold'."),
//!     ],
//!     "No idea.",
//! )?;
//!
//! assert_eq!(kb.match_input("i caught a cold"), Some("Rest and hydrate."));
//! assert_eq!(kb.match_input("sunburn"), None);
//! # Ok::<(), medibot::core::error::MedibotError>(())
//! ```
//!
use crate::core::error::MedibotError;
use serde::Deserialize;
use tracing::{debug, trace};

pub mod builtin;

/// A rule as written in configuration, before validation.
///
/// Keywords may use any case here; they are lowercased when the rule is
/// accepted into a `KnowledgeBase`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    pub keywords: Vec<String>,
    pub response: String,
}

impl RuleDefinition {
    pub fn new<I, S>(keywords: I, response: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            response: response.into(),
        }
    }
}

/// A validated keyword-set-to-response entry.
///
/// Invariants: at least one keyword, every keyword is lowercase, non-blank and
/// unique within the rule, and the response is non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    keywords: Vec<String>,
    response: String,
}

impl Rule {
    /// Validates `definition`. `index` is only used to label the error.
    fn from_definition(index: usize, definition: RuleDefinition) -> Result<Self, MedibotError> {
        let invalid = |reason: String| MedibotError::InvalidRule { index, reason };

        if definition.keywords.is_empty() {
            return Err(invalid("rule has no keywords".to_string()));
        }
        if definition.response.trim().is_empty() {
            return Err(invalid("response cannot be empty".to_string()));
        }

        let mut keywords: Vec<String> = Vec::with_capacity(definition.keywords.len());
        for keyword in definition.keywords {
            // A blank keyword is a substring of every input and would shadow all later rules.
            if keyword.trim().is_empty() {
                return Err(invalid("keywords cannot be empty or whitespace".to_string()));
            }
            let keyword = keyword.to_lowercase();
            if keywords.contains(&keyword) {
                return Err(invalid(format!("duplicate keyword '{}'", keyword)));
            }
            keywords.push(keyword);
        }

        Ok(Self {
            keywords,
            response: definition.response,
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// Returns the first keyword of this rule contained in `normalized_input`.
    pub fn matching_keyword(&self, normalized_input: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| normalized_input.contains(keyword))
    }
}

/// Ordered rules plus the fallback response.
///
/// An empty rule list is valid; every input then falls through to the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    rules: Vec<Rule>,
    fallback_response: String,
}

impl KnowledgeBase {
    /// # Build Knowledge Base (`new`)
    ///
    /// Validates every rule definition in order and assembles the knowledge base.
    ///
    /// ## Arguments
    ///
    /// * `definitions`: Rules in priority order (earlier rules win ties).
    /// * `fallback_response`: Reply used when no rule matches.
    ///
    /// ## Errors
    ///
    /// * `MedibotError::InvalidRule` for the first malformed rule (no keywords,
    ///   blank or duplicate keyword, blank response).
    /// * `MedibotError::EmptyFallback` if the fallback is blank.
    pub fn new(
        definitions: impl IntoIterator<Item = RuleDefinition>,
        fallback_response: impl Into<String>,
    ) -> Result<Self, MedibotError> {
        let fallback_response = fallback_response.into();
        if fallback_response.trim().is_empty() {
            return Err(MedibotError::EmptyFallback);
        }

        let rules = definitions
            .into_iter()
            .enumerate()
            .map(|(index, definition)| Rule::from_definition(index, definition))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Knowledge base built with {} rule(s)", rules.len());
        Ok(Self {
            rules,
            fallback_response,
        })
    }

    /// The medical rule set shipped with medibot and the standard fallback.
    pub fn builtin() -> Result<Self, MedibotError> {
        Self::new(builtin::rules(), builtin::FALLBACK_RESPONSE)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback_response(&self) -> &str {
        &self.fallback_response
    }

    /// Returns the first rule (with its index) that matches `normalized_input`.
    pub fn matching_rule(&self, normalized_input: &str) -> Option<(usize, &Rule)> {
        self.rules.iter().enumerate().find_map(|(index, rule)| {
            rule.matching_keyword(normalized_input).map(|keyword| {
                trace!("Rule #{} matched on keyword '{}'", index + 1, keyword);
                (index, rule)
            })
        })
    }

    /// Response of the first matching rule, or `None` when nothing matches.
    ///
    /// The caller is expected to pass input that is already trimmed and
    /// lowercased (see `responder::normalize`).
    pub fn match_input(&self, normalized_input: &str) -> Option<&str> {
        self.matching_rule(normalized_input)
            .map(|(_, rule)| rule.response())
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn kb(rules: Vec<RuleDefinition>) -> KnowledgeBase {
        KnowledgeBase::new(rules, "fallback").expect("test knowledge base should be valid")
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let kb = kb(vec![
            RuleDefinition::new(["alpha"], "first"),
            RuleDefinition::new(["beta", "alpha"], "second"),
        ]);
        assert_eq!(kb.match_input("alpha and beta"), Some("first"));
        assert_eq!(kb.match_input("only beta"), Some("second"));
        assert_eq!(kb.matching_rule("only beta").map(|(i, _)| i), Some(1));
    }

    #[test]
    fn test_any_keyword_in_rule_matches() {
        let kb = kb(vec![RuleDefinition::new(["one", "two", "three"], "counted")]);
        assert_eq!(kb.match_input("just three"), Some("counted"));
        assert_eq!(kb.match_input("two"), Some("counted"));
    }

    #[test]
    fn test_substring_inside_longer_word_matches() {
        let kb = kb(vec![RuleDefinition::new(["hi"], "greeting")]);
        assert_eq!(kb.match_input("history"), Some("greeting"));
    }

    #[test]
    fn test_multi_word_keyword() {
        let kb = kb(vec![RuleDefinition::new(["thank you"], "welcome")]);
        assert_eq!(kb.match_input("thank you so much"), Some("welcome"));
        assert_eq!(kb.match_input("thank   you"), None);
    }

    #[test]
    fn test_no_match_returns_none() {
        let kb = kb(vec![RuleDefinition::new(["fever"], "rest")]);
        assert_eq!(kb.match_input("broken arm"), None);
        assert_eq!(kb.match_input(""), None);
    }

    #[test]
    fn test_empty_rule_list_is_valid() {
        let kb = kb(Vec::new());
        assert!(kb.rules().is_empty());
        assert_eq!(kb.match_input("anything"), None);
        assert_eq!(kb.fallback_response(), "fallback");
    }

    #[test]
    fn test_keywords_are_lowercased() {
        let kb = kb(vec![RuleDefinition::new(["Fever", "COLD"], "rest")]);
        assert_eq!(kb.rules()[0].keywords(), ["fever", "cold"]);
        assert_eq!(kb.match_input("a cold"), Some("rest"));
    }

    #[test]
    fn test_rejects_rule_without_keywords() {
        let err = KnowledgeBase::new(
            vec![
                RuleDefinition::new(["ok"], "fine"),
                RuleDefinition::new(Vec::<String>::new(), "orphan"),
            ],
            "fallback",
        )
        .unwrap_err();
        assert_eq!(
            err,
            MedibotError::InvalidRule {
                index: 1,
                reason: "rule has no keywords".into()
            }
        );
    }

    #[test]
    fn test_rejects_blank_response() {
        let err = KnowledgeBase::new(vec![RuleDefinition::new(["ok"], "   ")], "fallback")
            .unwrap_err();
        assert!(matches!(err, MedibotError::InvalidRule { index: 0, .. }));
        assert!(err.to_string().contains("response cannot be empty"));
    }

    #[test]
    fn test_rejects_blank_keyword() {
        let err = KnowledgeBase::new(vec![RuleDefinition::new(["ok", " "], "fine")], "fallback")
            .unwrap_err();
        assert!(err.to_string().contains("keywords cannot be empty"));
    }

    #[test]
    fn test_rejects_duplicate_keyword_after_lowercasing() {
        let err = KnowledgeBase::new(vec![RuleDefinition::new(["Book", "book"], "fine")], "fallback")
            .unwrap_err();
        assert!(err.to_string().contains("duplicate keyword 'book'"));
    }

    #[test]
    fn test_overlap_across_rules_is_allowed() {
        let kb = kb(vec![
            RuleDefinition::new(["book"], "first"),
            RuleDefinition::new(["book"], "second"),
        ]);
        assert_eq!(kb.match_input("book"), Some("first"));
    }

    #[test]
    fn test_rejects_blank_fallback() {
        let err = KnowledgeBase::new(Vec::new(), "  ").unwrap_err();
        assert_eq!(err, MedibotError::EmptyFallback);
    }

    #[test]
    fn test_builtin_is_valid() {
        let kb = KnowledgeBase::builtin().expect("built-in knowledge base must validate");
        assert_eq!(kb.rules().len(), 8);
        assert_eq!(kb.fallback_response(), builtin::FALLBACK_RESPONSE);
    }
}
