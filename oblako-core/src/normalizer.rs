//! Maps tokens to dictionary forms of the requested parts of speech.

use std::collections::HashMap;

use oblako_morph::{Parse, SharedAnalyzer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{Category, CategorySet};
use crate::config::EmissionMode;
use crate::error::{CloudError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedToken {
    pub lemma: String,
    pub category: Category,
}

pub struct Normalizer {
    analyzer: SharedAnalyzer,
    emission: EmissionMode,
}

impl Normalizer {
    pub fn new(analyzer: SharedAnalyzer, emission: EmissionMode) -> Self {
        Self { analyzer, emission }
    }

    /// Normal forms of every token whose best parse falls in `categories`.
    ///
    /// In per-category mode a token matching two requested categories is
    /// emitted twice, once for each.
    pub fn normalize(
        &self,
        tokens: &[String],
        categories: &CategorySet,
    ) -> Result<Vec<NormalizedToken>> {
        categories.require_non_empty()?;

        let mut parses: HashMap<&str, Option<Parse>> = HashMap::new();
        let mut normalized = Vec::new();

        for token in tokens {
            let best = parses
                .entry(token.as_str())
                .or_insert_with(|| self.analyzer.best(token));
            let Some(parse) = best else {
                continue;
            };

            for category in categories.iter() {
                if !parse.is(category.grammeme()) {
                    continue;
                }
                normalized.push(NormalizedToken {
                    lemma: parse.normal_form.clone(),
                    category,
                });
                if self.emission == EmissionMode::Single {
                    break;
                }
            }
        }

        debug!(
            analyzer = self.analyzer.name(),
            tokens = tokens.len(),
            distinct = parses.len(),
            normalized = normalized.len(),
            "tokens normalized"
        );

        if normalized.is_empty() {
            return Err(CloudError::NoNormalizedWords);
        }
        Ok(normalized)
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("analyzer", &self.analyzer.name())
            .field("emission", &self.emission)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oblako_morph::{Grammeme, MorphAnalyzer, RussianAnalyzer, Tag};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Tags every word as both a noun and a full adjective, counting calls.
    #[derive(Default)]
    struct Ambiguous {
        calls: AtomicUsize,
    }

    impl MorphAnalyzer for Ambiguous {
        fn parse(&self, word: &str) -> Vec<Parse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let tag = Tag::pos(Grammeme::Noun).with(Grammeme::AdjectiveFull);
            vec![Parse::new(word, word.to_uppercase(), tag, 1.0)]
        }

        fn name(&self) -> &'static str {
            "ambiguous"
        }
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn lemmas(normalized: &[NormalizedToken]) -> Vec<&str> {
        normalized.iter().map(|t| t.lemma.as_str()).collect()
    }

    #[test]
    fn keeps_only_requested_categories() {
        let normalizer = Normalizer::new(Arc::new(RussianAnalyzer::default()), EmissionMode::default());
        let normalized = normalizer
            .normalize(
                &tokens(&["кот", "сидит", "кот", "спит"]),
                &CategorySet::new([Category::Noun]),
            )
            .unwrap();
        assert_eq!(lemmas(&normalized), vec!["кот", "кот"]);
        assert!(normalized.iter().all(|t| t.category == Category::Noun));
    }

    #[test]
    fn verbs_normalize_to_infinitive() {
        let normalizer = Normalizer::new(Arc::new(RussianAnalyzer::default()), EmissionMode::default());
        let normalized = normalizer
            .normalize(
                &tokens(&["кот", "сидит", "кот", "спит"]),
                &CategorySet::new([Category::Verb]),
            )
            .unwrap();
        assert_eq!(lemmas(&normalized), vec!["сидеть", "спать"]);
    }

    #[test]
    fn per_category_emission_counts_each_match() {
        let normalizer = Normalizer::new(Arc::new(Ambiguous::default()), EmissionMode::PerCategory);
        let categories = CategorySet::new([Category::AdjectiveFull, Category::Noun]);
        let normalized = normalizer
            .normalize(&tokens(&["слово"]), &categories)
            .unwrap();
        assert_eq!(
            normalized,
            vec![
                NormalizedToken {
                    lemma: "СЛОВО".into(),
                    category: Category::AdjectiveFull
                },
                NormalizedToken {
                    lemma: "СЛОВО".into(),
                    category: Category::Noun
                },
            ]
        );
    }

    #[test]
    fn single_emission_counts_once() {
        let normalizer = Normalizer::new(Arc::new(Ambiguous::default()), EmissionMode::Single);
        let categories = CategorySet::new([Category::Noun, Category::AdjectiveFull]);
        let normalized = normalizer
            .normalize(&tokens(&["слово", "слово"]), &categories)
            .unwrap();
        assert_eq!(normalized.len(), 2);
        assert!(normalized.iter().all(|t| t.category == Category::Noun));
    }

    #[test]
    fn memoizes_parses_within_a_run() {
        let analyzer = Arc::new(Ambiguous::default());
        let normalizer = Normalizer::new(analyzer.clone(), EmissionMode::Single);
        normalizer
            .normalize(
                &tokens(&["раз", "два", "раз", "раз", "два"]),
                &CategorySet::new([Category::Noun]),
            )
            .unwrap();
        assert_eq!(analyzer.calls.load(Ordering::SeqCst), 2);

        // nothing carries over to the next run
        normalizer
            .normalize(&tokens(&["раз"]), &CategorySet::new([Category::Noun]))
            .unwrap();
        assert_eq!(analyzer.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn no_matches_is_an_error() {
        let normalizer = Normalizer::new(Arc::new(RussianAnalyzer::default()), EmissionMode::default());
        let err = normalizer
            .normalize(&tokens(&["и", "в", "на"]), &CategorySet::new([Category::Noun]))
            .unwrap_err();
        assert!(matches!(err, CloudError::NoNormalizedWords));
    }

    #[test]
    fn empty_category_set_is_missing() {
        let normalizer = Normalizer::new(Arc::new(RussianAnalyzer::default()), EmissionMode::default());
        let err = normalizer
            .normalize(&tokens(&["кот"]), &CategorySet::default())
            .unwrap_err();
        assert!(matches!(err, CloudError::MissingParameter("categories")));
    }
}
