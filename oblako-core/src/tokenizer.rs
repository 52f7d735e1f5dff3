//! Splits text into lowercase Russian words.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CloudError, Result};

static RUSSIAN_WORD: Lazy<Regex> = Lazy::new(|| Regex::new("[а-яё]+").expect("valid regex"));

#[derive(Debug, Clone)]
pub struct Tokenizer {
    max_tokens: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(crate::config::Limits::default().max_tokens)
    }
}

impl Tokenizer {
    pub fn new(max_tokens: usize) -> Self {
        Self { max_tokens }
    }

    /// Maximal runs of `а`-`я` and `ё` in the lowercased text, in order.
    ///
    /// Digits, punctuation and other scripts are dropped; a word glued to
    /// Latin letters or digits still yields its Cyrillic part.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let lowered = text.to_lowercase();
        let mut tokens = Vec::new();
        for found in RUSSIAN_WORD.find_iter(&lowered) {
            if tokens.len() == self.max_tokens {
                return Err(CloudError::TooManyTokens {
                    limit: self.max_tokens,
                });
            }
            tokens.push(found.as_str().to_string());
        }

        if tokens.is_empty() {
            return Err(CloudError::NoTokens);
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits() {
        let tokens = Tokenizer::default()
            .tokenize("Кот сидит, КОТ спит!")
            .unwrap();
        assert_eq!(tokens, vec!["кот", "сидит", "кот", "спит"]);
    }

    #[test]
    fn keeps_yo() {
        let tokens = Tokenizer::default().tokenize("ЁЖИК и ёлка").unwrap();
        assert_eq!(tokens, vec!["ёжик", "и", "ёлка"]);
    }

    #[test]
    fn drops_foreign_scripts_and_digits() {
        let tokens = Tokenizer::default()
            .tokenize("hello мир 2024 годаx Україна")
            .unwrap();
        assert_eq!(tokens, vec!["мир", "года", "укра", "на"]);
    }

    #[test]
    fn no_russian_words() {
        let err = Tokenizer::default().tokenize("123, 456! ... hello").unwrap_err();
        assert!(matches!(err, CloudError::NoTokens));
    }

    #[test]
    fn idempotent_on_joined_output() {
        let tokenizer = Tokenizer::default();
        let first = tokenizer
            .tokenize("Мороз и солнце; день чудесный! 1825 г.")
            .unwrap();
        let second = tokenizer.tokenize(&first.join(" ")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn enforces_token_limit() {
        let tokenizer = Tokenizer::new(3);
        assert_eq!(tokenizer.tokenize("раз два три").unwrap().len(), 3);
        let err = tokenizer.tokenize("раз два три четыре").unwrap_err();
        assert!(matches!(err, CloudError::TooManyTokens { limit: 3 }));
    }
}
