use serde::Serialize;

use crate::assistant::rules::{
    default_rules, IntentRule, MatchContext, QueryIntent, DEFAULT_CATEGORY_VOCABULARY, HELP_TEXT,
};
use crate::inventory::Item;

/// Outcome of resolving one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub intent: QueryIntent,
    pub text: String,
}

/// Stateless first-match-wins classifier over an item list.
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    rules: Vec<IntentRule>,
    vocabulary: Vec<String>,
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::with_vocabulary(DEFAULT_CATEGORY_VOCABULARY)
    }
}

impl IntentMatcher {
    /// Standard rules with a custom category vocabulary.
    ///
    /// Terms are lowercased and blank terms dropped.
    pub fn with_vocabulary<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vocabulary = vocabulary
            .into_iter()
            .map(|term| term.as_ref().trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();
        Self {
            rules: default_rules(),
            vocabulary,
        }
    }

    pub fn resolve(&self, query: &str, items: &[Item]) -> Resolution {
        let lowered = query.to_lowercase();
        let ctx = MatchContext {
            query: &lowered,
            items,
            vocabulary: &self.vocabulary,
        };

        let resolution = self
            .rules
            .iter()
            .find_map(|rule| {
                rule.evaluate(&ctx).map(|text| Resolution {
                    intent: rule.intent,
                    text,
                })
            })
            .unwrap_or_else(|| Resolution {
                intent: QueryIntent::Help,
                text: HELP_TEXT.to_string(),
            });

        tracing::debug!(intent = ?resolution.intent, "Query resolved");
        resolution
    }
}

/// Resolves `query` with the default matcher and returns the reply text.
pub fn resolve_intent(query: &str, items: &[Item]) -> String {
    IntentMatcher::default().resolve(query, items).text
}
