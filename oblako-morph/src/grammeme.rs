//! Grammemes and Tags
//!
//! Grammeme codes follow the OpenCorpora notation so that dictionaries
//! exported from it load without translation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MorphError;

/// A single morphological label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grammeme {
    // Parts of speech
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "ADJF")]
    AdjectiveFull,
    #[serde(rename = "ADJS")]
    AdjectiveShort,
    #[serde(rename = "COMP")]
    Comparative,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "INFN")]
    Infinitive,
    #[serde(rename = "PRTF")]
    ParticipleFull,
    #[serde(rename = "PRTS")]
    ParticipleShort,
    #[serde(rename = "GRND")]
    Gerund,
    #[serde(rename = "NUMR")]
    Numeral,
    #[serde(rename = "ADVB")]
    Adverb,
    #[serde(rename = "NPRO")]
    Pronoun,
    #[serde(rename = "PRED")]
    Predicative,
    #[serde(rename = "PREP")]
    Preposition,
    #[serde(rename = "CONJ")]
    Conjunction,
    #[serde(rename = "PRCL")]
    Particle,
    #[serde(rename = "INTJ")]
    Interjection,
    #[serde(rename = "UNKN")]
    Unknown,

    // Animacy
    #[serde(rename = "anim")]
    Animate,
    #[serde(rename = "inan")]
    Inanimate,

    // Gender
    #[serde(rename = "masc")]
    Masculine,
    #[serde(rename = "femn")]
    Feminine,
    #[serde(rename = "neut")]
    Neuter,

    // Number
    #[serde(rename = "sing")]
    Singular,
    #[serde(rename = "plur")]
    Plural,

    // Aspect
    #[serde(rename = "perf")]
    Perfective,
    #[serde(rename = "impf")]
    Imperfective,

    // Tense
    #[serde(rename = "past")]
    Past,
    #[serde(rename = "pres")]
    Present,
    #[serde(rename = "futr")]
    Future,
}

const ALL: &[Grammeme] = &[
    Grammeme::Noun,
    Grammeme::AdjectiveFull,
    Grammeme::AdjectiveShort,
    Grammeme::Comparative,
    Grammeme::Verb,
    Grammeme::Infinitive,
    Grammeme::ParticipleFull,
    Grammeme::ParticipleShort,
    Grammeme::Gerund,
    Grammeme::Numeral,
    Grammeme::Adverb,
    Grammeme::Pronoun,
    Grammeme::Predicative,
    Grammeme::Preposition,
    Grammeme::Conjunction,
    Grammeme::Particle,
    Grammeme::Interjection,
    Grammeme::Unknown,
    Grammeme::Animate,
    Grammeme::Inanimate,
    Grammeme::Masculine,
    Grammeme::Feminine,
    Grammeme::Neuter,
    Grammeme::Singular,
    Grammeme::Plural,
    Grammeme::Perfective,
    Grammeme::Imperfective,
    Grammeme::Past,
    Grammeme::Present,
    Grammeme::Future,
];

impl Grammeme {
    /// OpenCorpora code of the grammeme.
    pub fn code(&self) -> &'static str {
        match self {
            Grammeme::Noun => "NOUN",
            Grammeme::AdjectiveFull => "ADJF",
            Grammeme::AdjectiveShort => "ADJS",
            Grammeme::Comparative => "COMP",
            Grammeme::Verb => "VERB",
            Grammeme::Infinitive => "INFN",
            Grammeme::ParticipleFull => "PRTF",
            Grammeme::ParticipleShort => "PRTS",
            Grammeme::Gerund => "GRND",
            Grammeme::Numeral => "NUMR",
            Grammeme::Adverb => "ADVB",
            Grammeme::Pronoun => "NPRO",
            Grammeme::Predicative => "PRED",
            Grammeme::Preposition => "PREP",
            Grammeme::Conjunction => "CONJ",
            Grammeme::Particle => "PRCL",
            Grammeme::Interjection => "INTJ",
            Grammeme::Unknown => "UNKN",
            Grammeme::Animate => "anim",
            Grammeme::Inanimate => "inan",
            Grammeme::Masculine => "masc",
            Grammeme::Feminine => "femn",
            Grammeme::Neuter => "neut",
            Grammeme::Singular => "sing",
            Grammeme::Plural => "plur",
            Grammeme::Perfective => "perf",
            Grammeme::Imperfective => "impf",
            Grammeme::Past => "past",
            Grammeme::Present => "pres",
            Grammeme::Future => "futr",
        }
    }

    /// Whether the grammeme names a part of speech.
    pub fn is_part_of_speech(&self) -> bool {
        matches!(
            self,
            Grammeme::Noun
                | Grammeme::AdjectiveFull
                | Grammeme::AdjectiveShort
                | Grammeme::Comparative
                | Grammeme::Verb
                | Grammeme::Infinitive
                | Grammeme::ParticipleFull
                | Grammeme::ParticipleShort
                | Grammeme::Gerund
                | Grammeme::Numeral
                | Grammeme::Adverb
                | Grammeme::Pronoun
                | Grammeme::Predicative
                | Grammeme::Preposition
                | Grammeme::Conjunction
                | Grammeme::Particle
                | Grammeme::Interjection
                | Grammeme::Unknown
        )
    }
}

impl fmt::Display for Grammeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Grammeme {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .copied()
            .find(|g| g.code() == s)
            .ok_or_else(|| MorphError::UnknownGrammeme(s.to_string()))
    }
}

/// Ordered set of grammemes describing one analysis of a word.
///
/// Duplicates are dropped on insertion; insertion order is kept so the
/// part of speech, when present, reads first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    grammemes: Vec<Grammeme>,
}

impl Tag {
    pub fn new(grammemes: impl IntoIterator<Item = Grammeme>) -> Self {
        let mut tag = Self::default();
        for grammeme in grammemes {
            tag.insert(grammeme);
        }
        tag
    }

    /// Tag holding only a part of speech.
    pub fn pos(grammeme: Grammeme) -> Self {
        Self {
            grammemes: vec![grammeme],
        }
    }

    /// Parse a comma- or space-separated list of grammeme codes, e.g. `NOUN,anim masc`.
    pub fn parse_codes(codes: &str) -> Result<Self, MorphError> {
        let mut tag = Self::default();
        for code in codes
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|code| !code.is_empty())
        {
            tag.insert(code.parse()?);
        }
        Ok(tag)
    }

    pub fn insert(&mut self, grammeme: Grammeme) {
        if !self.grammemes.contains(&grammeme) {
            self.grammemes.push(grammeme);
        }
    }

    pub fn with(mut self, grammeme: Grammeme) -> Self {
        self.insert(grammeme);
        self
    }

    pub fn contains(&self, grammeme: Grammeme) -> bool {
        self.grammemes.contains(&grammeme)
    }

    /// First part-of-speech grammeme of the tag.
    pub fn part_of_speech(&self) -> Option<Grammeme> {
        self.grammemes.iter().copied().find(Grammeme::is_part_of_speech)
    }

    pub fn iter(&self) -> impl Iterator<Item = Grammeme> + '_ {
        self.grammemes.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.grammemes.is_empty()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, grammeme) in self.grammemes.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(grammeme.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for grammeme in ALL {
            assert_eq!(grammeme.code().parse::<Grammeme>().unwrap(), *grammeme);
        }
    }

    #[test]
    fn test_unknown_code() {
        let err = "XXXX".parse::<Grammeme>().unwrap_err();
        assert!(matches!(err, MorphError::UnknownGrammeme(code) if code == "XXXX"));
    }

    #[test]
    fn test_parse_codes() {
        let tag = Tag::parse_codes("NOUN,anim masc").unwrap();
        assert!(tag.contains(Grammeme::Noun));
        assert!(tag.contains(Grammeme::Animate));
        assert!(tag.contains(Grammeme::Masculine));
        assert_eq!(tag.part_of_speech(), Some(Grammeme::Noun));
        assert_eq!(tag.to_string(), "NOUN,anim,masc");
    }

    #[test]
    fn test_insert_deduplicates() {
        let tag = Tag::pos(Grammeme::Verb).with(Grammeme::Verb).with(Grammeme::Past);
        assert_eq!(tag.iter().count(), 2);
    }

    #[test]
    fn test_part_of_speech_skips_other_grammemes() {
        let tag = Tag::new([Grammeme::Plural, Grammeme::AdjectiveShort]);
        assert_eq!(tag.part_of_speech(), Some(Grammeme::AdjectiveShort));
        assert_eq!(Tag::pos(Grammeme::Plural).part_of_speech(), None);
    }
}
