//! Rule-Based Russian Analyzer
//!
//! Analyzes Russian words without an external dictionary:
//! - Closed-class lexicon lookup (function words, irregular forms)
//! - Derivational noun suffixes (-ость, -ение, -ство, -ция, ...)
//! - Infinitive endings (-ть, -ти, -чь, reflexive -ться)
//! - Finite verb endings (present tense, past tense in -л)
//! - Long adjective endings with recovery of the masculine nominative
//! - Noun fallback with case-ending stripping
//!
//! Rules emit several weighted candidates when a word is ambiguous; the
//! caller picks the best one. Accuracy is well below a real dictionary, so
//! `DictionaryAnalyzer` should be preferred when one is available.

use tracing::debug;

use crate::grammeme::{Grammeme, Tag};
use crate::lexicon::Lexicon;
use crate::traits::{rank, MorphAnalyzer, Parse};

const VOWELS: &[char] = &['а', 'е', 'ё', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я'];

/// Letters after which `ы` is spelled `и`.
const HUSHING_AND_VELAR: &[char] = &['г', 'к', 'х', 'ж', 'ш', 'ч', 'щ'];

/// Derivational noun suffixes: stem part, dictionary ending, inflections.
static NOUN_PARADIGMS: &[(&str, &str, &[&str])] = &[
    ("ост", "ость", &["ь", "и", "ью", "ей", "ям", "ями", "ях"]),
    ("ени", "ение", &["е", "я", "ю", "ем", "и", "й", "ям", "ями", "ях"]),
    ("ани", "ание", &["е", "я", "ю", "ем", "и", "й", "ям", "ями", "ях"]),
    ("ств", "ство", &["о", "а", "у", "ом", "е", "", "ам", "ами", "ах"]),
    ("ци", "ция", &["я", "и", "ю", "ей", "й", "ям", "ями", "ях"]),
    ("изм", "изм", &["", "а", "у", "ом", "е", "ы", "ов", "ам", "ами", "ах"]),
    ("тел", "тель", &["ь", "я", "ю", "ем", "е", "и", "ей", "ям", "ями", "ях"]),
    ("ник", "ник", &["", "а", "у", "ом", "е", "и", "ов", "ам", "ами", "ах"]),
    ("ниц", "ница", &["а", "ы", "е", "у", "ей", "", "ам", "ами", "ах"]),
];

/// Long adjective endings: ending, masculine nominative ending, score.
static ADJECTIVE_ENDINGS: &[(&str, &str, f32)] = &[
    ("ыми", "ый", 0.8),
    ("ими", "ий", 0.7),
    ("ого", "ый", 0.8),
    ("его", "ий", 0.8),
    ("ому", "ый", 0.8),
    ("ему", "ий", 0.8),
    ("ая", "ый", 0.85),
    ("яя", "ий", 0.85),
    ("ое", "ый", 0.8),
    ("ые", "ый", 0.85),
    ("ие", "ий", 0.8),
    ("ую", "ый", 0.8),
    ("юю", "ий", 0.8),
    ("ых", "ый", 0.8),
    ("их", "ий", 0.7),
    ("ый", "ый", 0.9),
    ("ий", "ий", 0.7),
    ("ым", "ый", 0.8),
    ("им", "ий", 0.5),
    ("ой", "ой", 0.45),
    ("ом", "ый", 0.35),
];

/// Present-tense endings: ending, infinitive ending, score.
static PRESENT_ENDINGS: &[(&str, &str, f32)] = &[
    ("аешь", "ать", 0.9),
    ("аете", "ать", 0.85),
    ("ает", "ать", 0.85),
    ("ают", "ать", 0.85),
    ("аем", "ать", 0.7),
    ("аю", "ать", 0.8),
    ("яешь", "ять", 0.9),
    ("яете", "ять", 0.85),
    ("яет", "ять", 0.85),
    ("яют", "ять", 0.85),
    ("яем", "ять", 0.7),
    ("яю", "ять", 0.8),
    ("еешь", "еть", 0.9),
    ("еете", "еть", 0.85),
    ("еет", "еть", 0.85),
    ("еют", "еть", 0.85),
    ("еем", "еть", 0.7),
    ("ею", "еть", 0.6),
    ("уешь", "овать", 0.9),
    ("уете", "овать", 0.85),
    ("ует", "овать", 0.85),
    ("уют", "овать", 0.85),
    ("уем", "овать", 0.7),
    ("ёшь", "ть", 0.9),
    ("ёте", "ть", 0.85),
    ("ёт", "ть", 0.85),
    ("ём", "ть", 0.6),
    ("ишь", "ить", 0.9),
    ("ите", "ить", 0.6),
    ("ит", "ить", 0.7),
    ("ят", "ить", 0.6),
    ("им", "ить", 0.45),
];

/// Noun case endings stripped to approximate the nominative singular.
static NOUN_ENDINGS: &[(&str, &str)] = &[
    ("ами", ""),
    ("ах", ""),
    ("ов", ""),
    ("ом", ""),
    ("ой", "а"),
];

/// Configuration for the rule-based analyzer.
#[derive(Debug, Clone)]
pub struct RussianAnalyzerConfig {
    /// Words shorter than this (in characters) that are not in the lexicon
    /// parse as `UNKN`.
    pub min_word_length: usize,
    /// Replace `ё` with `е` in normal forms.
    pub fold_yo: bool,
}

impl Default for RussianAnalyzerConfig {
    fn default() -> Self {
        Self {
            min_word_length: 2,
            fold_yo: false,
        }
    }
}

/// Rule-based Russian morphological analyzer.
pub struct RussianAnalyzer {
    config: RussianAnalyzerConfig,
    lexicon: Lexicon,
}

impl Default for RussianAnalyzer {
    fn default() -> Self {
        Self::new(RussianAnalyzerConfig::default())
    }
}

impl RussianAnalyzer {
    pub fn new(config: RussianAnalyzerConfig) -> Self {
        let lexicon = Lexicon::russian();
        debug!(entries = lexicon.len(), "russian lexicon built");
        Self { config, lexicon }
    }

    pub fn config(&self) -> &RussianAnalyzerConfig {
        &self.config
    }

    fn guess(&self, word: &str) -> Vec<Parse> {
        let mut candidates = Vec::new();

        if derivational_noun(word, &mut candidates) {
            return candidates;
        }
        if infinitive(word, &mut candidates) {
            return candidates;
        }
        if reflexive_verb(word, &mut candidates) {
            return candidates;
        }

        adjective(word, &mut candidates);
        finite_verb(word, &mut candidates);

        if candidates.iter().all(|p| !p.is(Grammeme::Noun)) {
            // Everything that is not clearly something else is most likely a noun.
            let score = if candidates.is_empty() { 0.5 } else { 0.3 };
            candidates.push(noun(word, score));
        }
        candidates
    }

    fn finish(&self, mut parses: Vec<Parse>) -> Vec<Parse> {
        if self.config.fold_yo {
            for parse in &mut parses {
                if parse.normal_form.contains('ё') {
                    parse.normal_form = parse.normal_form.replace('ё', "е");
                }
            }
        }
        parses
    }
}

impl MorphAnalyzer for RussianAnalyzer {
    fn parse(&self, word: &str) -> Vec<Parse> {
        if let Some(parses) = self.lexicon.get(word) {
            let mut parses = parses.to_vec();
            rank(&mut parses);
            return self.finish(parses);
        }

        if word.chars().count() < self.config.min_word_length {
            return vec![Parse::unknown(word)];
        }

        let mut parses = self.guess(word);
        rank(&mut parses);
        self.finish(parses)
    }

    fn name(&self) -> &'static str {
        "russian-rules"
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn ends_with_vowel(s: &str) -> bool {
    s.ends_with(VOWELS)
}

fn ends_with_consonant(s: &str) -> bool {
    match s.chars().next_back() {
        Some(ch) => !VOWELS.contains(&ch) && !matches!(ch, 'ь' | 'ъ' | 'й'),
        None => false,
    }
}

fn noun(word: &str, score: f32) -> Parse {
    Parse::new(word, noun_lemma(word), Tag::pos(Grammeme::Noun), score)
}

fn noun_lemma(word: &str) -> String {
    for (ending, replacement) in NOUN_ENDINGS {
        if let Some(stem) = word.strip_suffix(*ending) {
            if char_len(stem) >= 3 && ends_with_consonant(stem) {
                return format!("{stem}{replacement}");
            }
        }
    }
    word.to_string()
}

fn derivational_noun(word: &str, out: &mut Vec<Parse>) -> bool {
    let mut best: Option<(usize, String)> = None;
    for (stem_part, lemma_ending, inflections) in NOUN_PARADIGMS {
        for inflection in *inflections {
            let suffix = format!("{stem_part}{inflection}");
            let Some(root) = word.strip_suffix(suffix.as_str()) else {
                continue;
            };
            if char_len(root) < 3 {
                continue;
            }
            let matched = char_len(&suffix);
            if best.as_ref().map_or(true, |(len, _)| matched > *len) {
                best = Some((matched, format!("{root}{lemma_ending}")));
            }
        }
    }

    match best {
        Some((_, lemma)) => {
            out.push(Parse::new(word, lemma, Tag::pos(Grammeme::Noun), 0.9));
            true
        }
        None => false,
    }
}

fn infinitive(word: &str, out: &mut Vec<Parse>) -> bool {
    if char_len(word) < 3 {
        return false;
    }
    let infn = |score: f32| Parse::new(word, word, Tag::pos(Grammeme::Infinitive), score);
    let noun_reading = |score: f32| Parse::new(word, word, Tag::pos(Grammeme::Noun), score);

    if word.ends_with("ться") || word.ends_with("тись") || word.ends_with("чься") {
        out.push(infn(0.95));
        return true;
    }

    if let Some(stem) = word.strip_suffix("ть") {
        if ends_with_vowel(stem) {
            out.push(infn(0.9));
            out.push(noun_reading(0.1));
        } else if stem.ends_with('с') {
            out.push(noun_reading(0.6));
            out.push(infn(0.4));
        } else {
            out.push(noun_reading(0.8));
            out.push(infn(0.2));
        }
        return true;
    }

    if let Some(stem) = word.strip_suffix("ти") {
        if stem.ends_with(['с', 'з', 'й']) {
            out.push(infn(0.85));
            out.push(noun(word, 0.15));
            return true;
        }
        return false;
    }

    if word.ends_with("чь") {
        out.push(infn(0.6));
        out.push(noun_reading(0.4));
        return true;
    }

    false
}

fn reflexive_verb(word: &str, out: &mut Vec<Parse>) -> bool {
    let Some((core, particle)) = word
        .strip_suffix("ся")
        .map(|core| (core, "ся"))
        .or_else(|| word.strip_suffix("сь").map(|core| (core, "сь")))
    else {
        return false;
    };
    if char_len(core) < 3 {
        return false;
    }

    let mut inner = Vec::new();
    finite_verb(core, &mut inner);
    let before = out.len();
    for parse in inner.into_iter().filter(|p| p.is(Grammeme::Verb)) {
        out.push(Parse::new(
            word,
            format!("{}ся", parse.normal_form),
            parse.tag,
            parse.score,
        ));
    }
    if out.len() == before {
        debug!(word, particle, "reflexive form without a recognised verb core");
        out.push(Parse::new(word, word, Tag::pos(Grammeme::Verb), 0.5));
    }
    true
}

fn adjective(word: &str, out: &mut Vec<Parse>) {
    for (ending, lemma_ending, score) in ADJECTIVE_ENDINGS {
        let Some(stem) = word.strip_suffix(*ending) else {
            continue;
        };
        if char_len(stem) < 2 {
            continue;
        }

        let lemma_ending = if *lemma_ending == "ый" && stem.ends_with(HUSHING_AND_VELAR) {
            "ий"
        } else {
            *lemma_ending
        };
        out.push(Parse::new(
            word,
            format!("{stem}{lemma_ending}"),
            Tag::pos(Grammeme::AdjectiveFull),
            *score,
        ));

        match *ending {
            "ой" | "ом" => out.push(noun(word, 1.0 - score)),
            "ий" => out.push(Parse::new(word, word, Tag::pos(Grammeme::Noun), 0.3)),
            _ => {}
        }
        return;
    }

    if let Some(stem) = word.strip_suffix("ее") {
        if char_len(stem) >= 3 {
            out.push(Parse::new(
                word,
                format!("{stem}ый"),
                Tag::pos(Grammeme::Comparative),
                0.5,
            ));
            out.push(Parse::new(
                word,
                format!("{stem}ий"),
                Tag::pos(Grammeme::AdjectiveFull),
                0.45,
            ));
        }
    }
}

fn finite_verb(word: &str, out: &mut Vec<Parse>) {
    let present = || Tag::pos(Grammeme::Verb).with(Grammeme::Present);
    let past = || Tag::pos(Grammeme::Verb).with(Grammeme::Past);

    for (ending, infinitive_ending, score) in PRESENT_ENDINGS {
        let Some(stem) = word.strip_suffix(*ending) else {
            continue;
        };
        if char_len(stem) < 2 {
            continue;
        }
        out.push(Parse::new(
            word,
            format!("{stem}{infinitive_ending}"),
            present(),
            *score,
        ));
        return;
    }

    if let Some(stem) = word.strip_suffix("ат") {
        if char_len(stem) >= 2 && stem.ends_with(['ж', 'ш', 'ч', 'щ']) {
            out.push(Parse::new(word, format!("{stem}ать"), present(), 0.7));
            return;
        }
    }

    for (ending, score) in [("ет", 0.4), ("ут", 0.45)] {
        if let Some(stem) = word.strip_suffix(ending) {
            if char_len(stem) >= 2 && ends_with_consonant(stem) {
                out.push(Parse::new(word, format!("{stem}ать"), present(), score));
                out.push(noun(word, 1.0 - score));
                return;
            }
        }
    }

    for (ending, score) in [("ли", 0.6), ("ла", 0.6), ("ло", 0.55), ("л", 0.55)] {
        let Some(stem) = word.strip_suffix(ending) else {
            continue;
        };
        if char_len(stem) >= 2 && stem.ends_with(['а', 'я', 'е', 'и', 'у', 'ы']) {
            out.push(Parse::new(word, format!("{stem}ть"), past(), score));
            out.push(noun(word, 1.0 - score));
            return;
        }
    }
}
