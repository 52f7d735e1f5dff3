//! Parts of speech a caller may select for the cloud.

use std::fmt;
use std::str::FromStr;

use oblako_morph::Grammeme;
use serde::{Deserialize, Serialize};

use crate::error::CloudError;

/// Closed list of selectable grammatical categories.
///
/// The codes (`NOUN`, `ADJF`, ...) are part of the external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "ADJF")]
    AdjectiveFull,
    #[serde(rename = "ADJS")]
    AdjectiveShort,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "INFN")]
    Infinitive,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Noun,
        Category::AdjectiveFull,
        Category::AdjectiveShort,
        Category::Verb,
        Category::Infinitive,
    ];

    pub fn code(&self) -> &'static str {
        self.grammeme().code()
    }

    pub fn grammeme(&self) -> Grammeme {
        match self {
            Category::Noun => Grammeme::Noun,
            Category::AdjectiveFull => Grammeme::AdjectiveFull,
            Category::AdjectiveShort => Grammeme::AdjectiveShort,
            Category::Verb => Grammeme::Verb,
            Category::Infinitive => Grammeme::Infinitive,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown category {0:?}; expected one of NOUN, ADJF, ADJS, VERB, INFN")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Requested categories, deduplicated, in the order the caller gave them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet(Vec<Category>);

impl CategorySet {
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut set = Self::default();
        for category in categories {
            if !set.0.contains(&category) {
                set.0.push(category);
            }
        }
        set
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().copied()
    }

    pub(crate) fn require_non_empty(&self) -> Result<(), CloudError> {
        if self.is_empty() {
            return Err(CloudError::MissingParameter("categories"));
        }
        Ok(())
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_the_external_contract() {
        let codes: Vec<_> = Category::ALL.iter().map(Category::code).collect();
        assert_eq!(codes, vec!["NOUN", "ADJF", "ADJS", "VERB", "INFN"]);
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("noun".parse::<Category>().unwrap(), Category::Noun);
        assert_eq!(" INFN ".parse::<Category>().unwrap(), Category::Infinitive);
        assert!("PRTF".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_codes() {
        let json = serde_json::to_string(&Category::AdjectiveShort).unwrap();
        assert_eq!(json, "\"ADJS\"");
        let back: Category = serde_json::from_str("\"VERB\"").unwrap();
        assert_eq!(back, Category::Verb);
    }

    #[test]
    fn set_deduplicates_and_keeps_order() {
        let set = CategorySet::new([Category::Verb, Category::Noun, Category::Verb]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Category::Verb, Category::Noun]);
    }

    #[test]
    fn empty_set_is_a_missing_parameter() {
        let err = CategorySet::default().require_non_empty().unwrap_err();
        assert!(matches!(err, CloudError::MissingParameter("categories")));
    }
}
