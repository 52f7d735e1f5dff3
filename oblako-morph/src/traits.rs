//! Analyzer Traits
//!
//! Common interface for all morphological analyzers.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::grammeme::{Grammeme, Tag};

/// One possible analysis of a word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parse {
    /// The word as it was analyzed.
    pub word: String,
    /// Dictionary form (lemma).
    pub normal_form: String,
    pub tag: Tag,
    /// Confidence in `[0, 1]`; higher ranks first.
    pub score: f32,
}

impl Parse {
    pub fn new(word: impl Into<String>, normal_form: impl Into<String>, tag: Tag, score: f32) -> Self {
        Self {
            word: word.into(),
            normal_form: normal_form.into(),
            tag,
            score,
        }
    }

    /// Parse for a word nothing is known about.
    pub fn unknown(word: &str) -> Self {
        Self::new(word, word, Tag::pos(Grammeme::Unknown), 0.0)
    }

    pub fn is(&self, grammeme: Grammeme) -> bool {
        self.tag.contains(grammeme)
    }
}

/// Analyzer handle shared between pipeline runs.
pub type SharedAnalyzer = Arc<dyn MorphAnalyzer>;

/// Common trait for all morphological analyzers.
///
/// Implementations are immutable once built, so a single instance can be
/// constructed up front and shared across any number of runs.
pub trait MorphAnalyzer: Send + Sync {
    /// All candidate parses of a lowercase word, best first.
    ///
    /// Candidates with equal scores keep the analyzer's own ordering.
    fn parse(&self, word: &str) -> Vec<Parse>;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// The single best parse: highest score, first one wins on ties.
    fn best(&self, word: &str) -> Option<Parse> {
        let mut best: Option<Parse> = None;
        for candidate in self.parse(word) {
            match &best {
                Some(current) if current.score >= candidate.score => {}
                _ => best = Some(candidate),
            }
        }
        best
    }
}

/// Stable sort of candidates by descending score.
pub(crate) fn rank(parses: &mut [Parse]) {
    parses.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<Parse>);

    impl MorphAnalyzer for Fixed {
        fn parse(&self, _word: &str) -> Vec<Parse> {
            self.0.clone()
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn test_best_picks_highest_score() {
        let analyzer = Fixed(vec![
            Parse::new("стекло", "стекло", Tag::pos(Grammeme::Noun), 0.4),
            Parse::new("стекло", "стечь", Tag::pos(Grammeme::Verb), 0.6),
        ]);
        assert_eq!(analyzer.best("стекло").unwrap().normal_form, "стечь");
    }

    #[test]
    fn test_best_tie_keeps_first() {
        let analyzer = Fixed(vec![
            Parse::new("печь", "печь", Tag::pos(Grammeme::Noun), 0.5),
            Parse::new("печь", "печь", Tag::pos(Grammeme::Infinitive), 0.5),
        ]);
        let best = analyzer.best("печь").unwrap();
        assert!(best.is(Grammeme::Noun));
    }

    #[test]
    fn test_best_empty() {
        assert!(Fixed(Vec::new()).best("слово").is_none());
    }

    #[test]
    fn test_rank_is_stable() {
        let mut parses = vec![
            Parse::new("a", "first", Tag::pos(Grammeme::Noun), 0.5),
            Parse::new("a", "top", Tag::pos(Grammeme::Verb), 0.9),
            Parse::new("a", "second", Tag::pos(Grammeme::Adverb), 0.5),
        ];
        rank(&mut parses);
        let order: Vec<_> = parses.iter().map(|p| p.normal_form.as_str()).collect();
        assert_eq!(order, vec!["top", "first", "second"]);
    }
}
