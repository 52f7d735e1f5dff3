//! Dictionary-Backed Analyzer
//!
//! Loads word forms from a tab-separated file, one analysis per line:
//!
//! ```text
//! # word    normal form    grammemes          [score]
//! стали     стать          VERB,past,plur     0.6
//! стали     сталь          NOUN,inan,femn     0.4
//! ```
//!
//! Lines without a score get `1.0`. Unknown words go to the fallback
//! analyzer when one is configured.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::grammeme::Tag;
use crate::traits::{rank, MorphAnalyzer, Parse, SharedAnalyzer};
use crate::MorphError;

/// Morphological analyzer backed by an in-memory word-form dictionary.
pub struct DictionaryAnalyzer {
    entries: HashMap<String, Vec<Parse>>,
    fallback: Option<SharedAnalyzer>,
}

impl DictionaryAnalyzer {
    /// Load a dictionary file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MorphError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let analyzer = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            forms = analyzer.len(),
            "morphological dictionary loaded"
        );
        Ok(analyzer)
    }

    /// Load a dictionary from any buffered reader.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, MorphError> {
        let mut entries: HashMap<String, Vec<Parse>> = HashMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parse = parse_line(line, index + 1)?;
            entries.entry(parse.word.clone()).or_default().push(parse);
        }

        for parses in entries.values_mut() {
            rank(parses);
        }

        Ok(Self {
            entries,
            fallback: None,
        })
    }

    /// Delegate words missing from the dictionary to another analyzer.
    pub fn with_fallback(mut self, fallback: SharedAnalyzer) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Number of distinct word forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }
}

impl std::fmt::Debug for DictionaryAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryAnalyzer")
            .field("forms", &self.entries.len())
            .field("fallback", &self.fallback.as_ref().map(|a| a.name()))
            .finish()
    }
}

fn parse_line(line: &str, number: usize) -> Result<Parse, MorphError> {
    let invalid = |reason: String| MorphError::InvalidEntry {
        line: number,
        reason,
    };

    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(invalid(format!(
            "expected 3 or 4 tab-separated fields, found {}",
            fields.len()
        )));
    }

    let word = fields[0].to_lowercase();
    let normal_form = fields[1].to_lowercase();
    if word.is_empty() || normal_form.is_empty() {
        return Err(invalid("word and normal form must not be empty".into()));
    }

    let tag = Tag::parse_codes(fields[2]).map_err(|err| invalid(err.to_string()))?;
    if tag.is_empty() {
        return Err(invalid("no grammemes given".into()));
    }

    let score = match fields.get(3) {
        Some(raw) => raw
            .parse::<f32>()
            .map_err(|err| invalid(format!("invalid score {raw:?}: {err}")))?,
        None => 1.0,
    };

    Ok(Parse::new(word, normal_form, tag, score))
}

impl MorphAnalyzer for DictionaryAnalyzer {
    fn parse(&self, word: &str) -> Vec<Parse> {
        if let Some(parses) = self.entries.get(word) {
            return parses.clone();
        }
        match &self.fallback {
            Some(fallback) => fallback.parse(word),
            None => vec![Parse::unknown(word)],
        }
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammeme::Grammeme;
    use crate::RussianAnalyzer;
    use std::io::Write;
    use std::sync::Arc;

    const SAMPLE: &str = "\
# sample dictionary
стали\tстать\tVERB,past,plur\t0.6
стали\tсталь\tNOUN,inan,femn\t0.4
Кошки\tкошка\tNOUN,anim,femn

рад\tрад\tADJS,masc
";

    #[test]
    fn test_load_and_rank() {
        let dict = DictionaryAnalyzer::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dict.len(), 3);

        let parses = dict.parse("стали");
        assert_eq!(parses.len(), 2);
        assert_eq!(parses[0].normal_form, "стать");
        assert!(parses[0].is(Grammeme::Verb));
        assert_eq!(dict.best("стали").unwrap().normal_form, "стать");
    }

    #[test]
    fn test_words_are_lowercased() {
        let dict = DictionaryAnalyzer::from_reader(SAMPLE.as_bytes()).unwrap();
        assert!(dict.contains("кошки"));
        assert_eq!(dict.best("кошки").unwrap().score, 1.0);
    }

    #[test]
    fn test_unknown_without_fallback() {
        let dict = DictionaryAnalyzer::from_reader(SAMPLE.as_bytes()).unwrap();
        let parse = dict.best("собака").unwrap();
        assert!(parse.is(Grammeme::Unknown));
    }

    #[test]
    fn test_fallback() {
        let dict = DictionaryAnalyzer::from_reader(SAMPLE.as_bytes())
            .unwrap()
            .with_fallback(Arc::new(RussianAnalyzer::default()));
        let parse = dict.best("читает").unwrap();
        assert!(parse.is(Grammeme::Verb));
    }

    #[test]
    fn test_invalid_field_count() {
        let err = DictionaryAnalyzer::from_reader("слово\tслово\n".as_bytes()).unwrap_err();
        assert!(matches!(err, MorphError::InvalidEntry { line: 1, .. }));
    }

    #[test]
    fn test_invalid_grammeme() {
        let err =
            DictionaryAnalyzer::from_reader("\nслово\tслово\tWORD\n".as_bytes()).unwrap_err();
        match err {
            MorphError::InvalidEntry { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("WORD"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_score() {
        let err =
            DictionaryAnalyzer::from_reader("слово\tслово\tNOUN\thigh\n".as_bytes()).unwrap_err();
        assert!(matches!(err, MorphError::InvalidEntry { line: 1, .. }));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let dict = DictionaryAnalyzer::from_path(file.path()).unwrap();
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let err = DictionaryAnalyzer::from_path("/nonexistent/dict.tsv").err().unwrap();
        assert!(matches!(err, MorphError::Io(_)));
    }
}
