// Reply matcher - Ordered keyword lookup for chatbot replies
use crate::domain::chat::KeywordRule;
use crate::domain::error::ConfigError;

/// Maps free text to a canned reply. The first rule whose keyword occurs in the
/// lower-cased text wins, so rule order is part of the behavior.
#[derive(Debug, Clone)]
pub struct ReplyMatcher {
    rules: Vec<KeywordRule>,
    fallback: String,
}

impl ReplyMatcher {
    pub fn new(rules: Vec<KeywordRule>, fallback: String) -> Result<Self, ConfigError> {
        let rules = rules
            .into_iter()
            .enumerate()
            .map(|(index, rule)| {
                let keyword = rule.keyword.trim().to_lowercase();
                if keyword.is_empty() {
                    return Err(ConfigError::EmptyKeyword { index });
                }
                Ok(KeywordRule {
                    keyword,
                    response: rule.response,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules, fallback })
    }

    /// Blank text matches nothing and gets the fallback.
    pub fn reply(&self, text: &str) -> &str {
        let lower = text.to_lowercase();

        self.rules
            .iter()
            .find(|rule| lower.contains(&rule.keyword))
            .map(|rule| {
                tracing::debug!("Chat keyword matched: {}", rule.keyword);
                rule.response.as_str()
            })
            .unwrap_or(self.fallback.as_str())
    }
}
