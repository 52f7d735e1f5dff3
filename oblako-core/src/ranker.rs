//! Word frequency counting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CloudError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

/// Most frequent words, descending by count. Words are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Count `words` and keep the `top_k` most frequent.
    ///
    /// Equal counts are ordered by first occurrence.
    pub fn rank<'a, I>(words: I, top_k: usize) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        // word -> (count, first position)
        let mut counts: HashMap<&'a str, (usize, usize)> = HashMap::new();
        let mut total = 0usize;
        for (position, word) in words.into_iter().enumerate() {
            counts.entry(word).or_insert((0, position)).0 += 1;
            total += 1;
        }

        if top_k == 0 || counts.is_empty() {
            return Err(CloudError::EmptyFrequencyTable {
                top_k,
                words: total,
            });
        }

        let mut ranked: Vec<_> = counts.into_iter().collect();
        ranked.sort_unstable_by(|(_, (a_count, a_first)), (_, (b_count, b_first))| {
            b_count.cmp(a_count).then(a_first.cmp(b_first))
        });
        ranked.truncate(top_k);

        Ok(Self {
            entries: ranked
                .into_iter()
                .map(|(word, (count, _))| FrequencyEntry {
                    word: word.to_string(),
                    count,
                })
                .collect(),
        })
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.count)
    }

    pub fn max_count(&self) -> Option<usize> {
        self.entries.first().map(|entry| entry.count)
    }

    pub fn min_count(&self) -> Option<usize> {
        self.entries.last().map(|entry| entry.count)
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    fn pairs(table: &FrequencyTable) -> Vec<(&str, usize)> {
        table.iter().map(|e| (e.word.as_str(), e.count)).collect()
    }

    #[test]
    fn counts_and_orders_by_frequency() {
        let table = FrequencyTable::rank(words("кот пёс кот мышь кот пёс"), 10).unwrap();
        assert_eq!(pairs(&table), vec![("кот", 3), ("пёс", 2), ("мышь", 1)]);
        assert_eq!(table.max_count(), Some(3));
        assert_eq!(table.min_count(), Some(1));
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let table = FrequencyTable::rank(words("в б а б в а г"), 10).unwrap();
        assert_eq!(pairs(&table), vec![("в", 2), ("б", 2), ("а", 2), ("г", 1)]);
    }

    #[test]
    fn truncates_to_top_k() {
        let table = FrequencyTable::rank(words("а а а б б в г"), 2).unwrap();
        assert_eq!(pairs(&table), vec![("а", 3), ("б", 2)]);
    }

    #[test]
    fn counts_match_input() {
        let input = words("раз два три два три три четыре пять пять");
        let table = FrequencyTable::rank(input.iter().copied(), 3).unwrap();
        assert!(table.len() <= 3);
        for entry in &table {
            let expected = input.iter().filter(|w| **w == entry.word).count();
            assert_eq!(entry.count, expected);
        }
        let counts: Vec<_> = table.iter().map(|e| e.count).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn zero_k_is_empty() {
        let err = FrequencyTable::rank(words("кот"), 0).unwrap_err();
        assert!(matches!(err, CloudError::EmptyFrequencyTable { top_k: 0, words: 1 }));
    }

    #[test]
    fn empty_input_is_empty() {
        let err = FrequencyTable::rank(Vec::<&str>::new(), 5).unwrap_err();
        assert!(matches!(err, CloudError::EmptyFrequencyTable { top_k: 5, words: 0 }));
    }
}
