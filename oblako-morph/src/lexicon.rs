//! Closed-Class Lexicon
//!
//! Words whose analysis the suffix rules would get wrong: function words,
//! pronouns, irregular verbs, short adjectives and nouns that look like verb
//! or adjective forms.

use std::collections::HashMap;

use crate::grammeme::{Grammeme, Tag};
use crate::traits::Parse;

static PREPOSITIONS: &[&str] = &[
    "в", "во", "на", "с", "со", "к", "ко", "по", "за", "из", "от", "до", "о", "об", "обо",
    "у", "при", "про", "для", "без", "над", "под", "перед", "через", "между", "около",
    "вокруг", "после", "среди", "кроме", "вместо", "вдоль", "мимо", "сквозь", "ради",
    "против", "возле", "внутри", "вне", "благодаря",
];

static CONJUNCTIONS: &[&str] = &[
    "и", "а", "но", "или", "что", "чтобы", "если", "когда", "как", "хотя", "потому",
    "поэтому", "либо", "да", "зато", "однако", "также", "ни", "пока", "будто", "словно",
    "чем", "раз", "причём", "причем", "тоже", "едва", "точно",
];

static PARTICLES: &[&str] = &[
    "не", "же", "ли", "бы", "вот", "вон", "даже", "только", "лишь", "уже", "ещё", "еще",
    "разве", "неужели", "ведь", "пусть", "именно", "почти", "это", "нет", "ну", "уж",
    "ка", "то", "либо", "нибудь",
];

static INTERJECTIONS: &[&str] = &[
    "ах", "ох", "эх", "ой", "ага", "увы", "ура", "ай", "эй", "ух", "ого", "браво",
];

static PREDICATIVES: &[&str] = &["нельзя", "можно", "надо", "пора", "жаль", "некогда"];

static ADVERBS: &[&str] = &[
    "очень", "так", "там", "тут", "здесь", "где", "куда", "откуда", "всегда", "никогда",
    "иногда", "сейчас", "теперь", "потом", "тогда", "много", "мало", "снова", "опять",
    "вдруг", "совсем", "давно", "сегодня", "вчера", "завтра", "туда", "сюда", "зачем",
    "почему", "долго", "вместе", "сразу", "скоро", "уже", "почти", "слишком", "весьма",
    "хорошо", "плохо", "быстро", "медленно", "тихо", "громко", "вновь", "везде", "всюду",
];

static NUMERALS: &[&str] = &[
    "один", "одна", "одно", "два", "две", "три", "четыре", "пять", "шесть", "семь",
    "восемь", "девять", "десять", "двадцать", "тридцать", "сорок", "пятьдесят", "сто",
    "двести", "триста",
];

/// Pronoun form and its dictionary form.
static PRONOUNS: &[(&str, &str)] = &[
    ("я", "я"), ("меня", "я"), ("мне", "я"), ("мной", "я"), ("мною", "я"),
    ("ты", "ты"), ("тебя", "ты"), ("тебе", "ты"), ("тобой", "ты"), ("тобою", "ты"),
    ("он", "он"), ("его", "он"), ("ему", "он"), ("им", "он"), ("нём", "он"), ("нем", "он"),
    ("него", "он"), ("нему", "он"), ("ним", "он"),
    ("она", "она"), ("её", "она"), ("ее", "она"), ("ей", "она"), ("ней", "она"), ("неё", "она"),
    ("нее", "она"), ("ею", "она"), ("нею", "она"),
    ("оно", "оно"),
    ("мы", "мы"), ("нас", "мы"), ("нам", "мы"), ("нами", "мы"),
    ("вы", "вы"), ("вас", "вы"), ("вам", "вы"), ("вами", "вы"),
    ("они", "они"), ("их", "они"), ("них", "они"), ("ими", "они"), ("ними", "они"),
    ("себя", "себя"), ("себе", "себя"), ("собой", "себя"), ("собою", "себя"),
    ("кто", "кто"), ("кого", "кто"), ("кому", "кто"), ("кем", "кто"), ("ком", "кто"),
    ("чего", "что"), ("чему", "что"), ("чём", "что"),
    ("никто", "никто"), ("никого", "никто"), ("ничто", "ничто"), ("ничего", "ничто"),
    ("что-то", "что-то"), ("кто-то", "кто-то"),
];

/// Pronominal adjectives, analysed as long adjectives.
static PRONOMINAL_ADJECTIVES: &[(&str, &str)] = &[
    ("этот", "этот"), ("эта", "этот"), ("эти", "этот"), ("этого", "этот"), ("этой", "этот"),
    ("этому", "этот"), ("этим", "этот"), ("этом", "этот"), ("эту", "этот"), ("этих", "этот"),
    ("этими", "этот"),
    ("тот", "тот"), ("та", "тот"), ("те", "тот"), ("того", "тот"), ("той", "тот"),
    ("тому", "тот"), ("тем", "тот"), ("том", "тот"), ("ту", "тот"), ("тех", "тот"),
    ("теми", "тот"),
    ("весь", "весь"), ("вся", "весь"), ("всё", "весь"), ("все", "весь"), ("всего", "весь"),
    ("всей", "весь"), ("всем", "весь"), ("всех", "весь"), ("всему", "весь"), ("всю", "весь"),
    ("всеми", "весь"),
    ("мой", "мой"), ("моя", "мой"), ("моё", "мой"), ("мое", "мой"), ("мои", "мой"),
    ("моего", "мой"), ("моей", "мой"), ("моих", "мой"), ("мою", "мой"),
    ("твой", "твой"), ("твоя", "твой"), ("твои", "твой"), ("твоего", "твой"),
    ("свой", "свой"), ("своя", "свой"), ("свои", "свой"), ("своего", "свой"),
    ("своей", "свой"), ("своих", "свой"), ("свою", "свой"),
    ("наш", "наш"), ("наша", "наш"), ("наше", "наш"), ("наши", "наш"),
    ("ваш", "ваш"), ("ваша", "ваш"), ("ваше", "ваш"), ("ваши", "ваш"),
    ("сам", "сам"), ("сама", "сам"), ("само", "сам"), ("сами", "сам"),
];

/// Verb forms that no suffix rule recovers, with their infinitive.
static IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("есть", "быть"), ("был", "быть"), ("была", "быть"), ("было", "быть"), ("были", "быть"),
    ("буду", "быть"), ("будешь", "быть"), ("будет", "быть"), ("будем", "быть"),
    ("будете", "быть"), ("будут", "быть"),
    ("могу", "мочь"), ("можешь", "мочь"), ("может", "мочь"), ("можем", "мочь"),
    ("можете", "мочь"), ("могут", "мочь"), ("мог", "мочь"), ("могла", "мочь"),
    ("могло", "мочь"), ("могли", "мочь"),
    ("хочу", "хотеть"), ("хочешь", "хотеть"), ("хочет", "хотеть"), ("хотим", "хотеть"),
    ("хотите", "хотеть"), ("хотят", "хотеть"),
    ("иду", "идти"), ("идёшь", "идти"), ("идешь", "идти"), ("идёт", "идти"), ("идет", "идти"),
    ("идём", "идти"), ("идем", "идти"), ("идут", "идти"), ("шёл", "идти"), ("шел", "идти"),
    ("шла", "идти"), ("шло", "идти"), ("шли", "идти"),
    ("пишу", "писать"), ("пишешь", "писать"), ("пишет", "писать"), ("пишут", "писать"),
    ("живу", "жить"), ("живёт", "жить"), ("живет", "жить"), ("живут", "жить"),
    ("даст", "дать"), ("дадут", "дать"), ("дам", "дать"),
    ("ест", "есть"), ("едят", "есть"), ("ел", "есть"), ("ела", "есть"),
    ("берёт", "брать"), ("берет", "брать"), ("берут", "брать"),
    ("ждёт", "ждать"), ("ждет", "ждать"), ("ждут", "ждать"),
    ("пьёт", "пить"), ("пьет", "пить"), ("пьют", "пить"),
    ("поёт", "петь"), ("поет", "петь"), ("поют", "петь"),
    ("знаю", "знать"),
    ("сказал", "сказать"), ("сказала", "сказать"), ("сказали", "сказать"),
];

/// Second-conjugation verbs whose infinitive does not end in `-ить`:
/// present stem and infinitive.
static SECOND_CONJUGATION: &[(&str, &str)] = &[
    ("сп", "спать"),
    ("сид", "сидеть"),
    ("вид", "видеть"),
    ("смотр", "смотреть"),
    ("леж", "лежать"),
    ("сто", "стоять"),
    ("держ", "держать"),
    ("слыш", "слышать"),
    ("дыш", "дышать"),
    ("молч", "молчать"),
    ("крич", "кричать"),
    ("звуч", "звучать"),
    ("лет", "лететь"),
    ("гор", "гореть"),
    ("вис", "висеть"),
    ("завис", "зависеть"),
    ("терп", "терпеть"),
    ("шум", "шуметь"),
    ("блест", "блестеть"),
    ("бо", "бояться"),
];

/// Short adjectives: masculine form, stem of the other forms, dictionary form.
static SHORT_ADJECTIVES: &[(&str, &str, &str)] = &[
    ("рад", "рад", "рад"),
    ("должен", "должн", "должный"),
    ("нужен", "нужн", "нужный"),
    ("готов", "готов", "готовый"),
    ("прав", "прав", "правый"),
    ("красив", "красив", "красивый"),
    ("хорош", "хорош", "хороший"),
    ("виден", "видн", "видный"),
    ("согласен", "согласн", "согласный"),
    ("свободен", "свободн", "свободный"),
    ("болен", "больн", "больной"),
    ("жив", "жив", "живой"),
    ("велик", "велик", "великий"),
    ("мал", "мал", "малый"),
    ("счастлив", "счастлив", "счастливый"),
    ("интересен", "интересн", "интересный"),
    ("важен", "важн", "важный"),
    ("известен", "известн", "известный"),
    ("возможен", "возможн", "возможный"),
    ("необходим", "необходим", "необходимый"),
    ("похож", "похож", "похожий"),
    ("полон", "полн", "полный"),
    ("силён", "сильн", "сильный"),
    ("умён", "умн", "умный"),
    ("прекрасен", "прекрасн", "прекрасный"),
    ("честен", "честн", "честный"),
    ("труден", "трудн", "трудный"),
    ("печален", "печальн", "печальный"),
    ("тих", "тих", "тихий"),
    ("добр", "добр", "добрый"),
    ("молод", "молод", "молодой"),
    ("стар", "стар", "старый"),
    ("бел", "бел", "белый"),
    ("тёмен", "тёмн", "тёмный"),
    ("светел", "светл", "светлый"),
    ("весел", "весел", "весёлый"),
    ("ясен", "ясн", "ясный"),
    ("зол", "зл", "злой"),
    ("глуп", "глуп", "глупый"),
    ("слаб", "слаб", "слабый"),
    ("нов", "нов", "новый"),
    ("прост", "прост", "простой"),
    ("чист", "чист", "чистый"),
    ("бледен", "бледн", "бледный"),
];

/// Nouns the suffix rules would read as another part of speech.
static NOUNS: &[(&str, &str)] = &[
    ("мать", "мать"), ("путь", "путь"), ("суть", "суть"), ("ртуть", "ртуть"),
    ("жуть", "жуть"), ("сеть", "сеть"), ("нить", "нить"), ("треть", "треть"),
    ("плоть", "плоть"), ("рать", "рать"), ("ночь", "ночь"),
    ("дочь", "дочь"), ("речь", "речь"), ("вещь", "вещь"), ("помощь", "помощь"),
    ("дело", "дело"), ("тело", "тело"), ("село", "село"), ("крыло", "крыло"),
    ("сила", "сила"), ("пила", "пила"), ("могила", "могила"), ("стрела", "стрела"),
    ("скала", "скала"), ("дела", "дело"), ("тела", "тело"), ("цели", "цель"),
    ("земли", "земля"), ("кит", "кит"), ("щит", "щит"), ("аппетит", "аппетит"),
    ("визит", "визит"), ("кредит", "кредит"), ("бандит", "бандит"), ("лимит", "лимит"),
    ("гранит", "гранит"), ("магнит", "магнит"), ("зал", "зал"), ("канал", "канал"),
    ("журнал", "журнал"), ("сигнал", "сигнал"), ("финал", "финал"), ("генерал", "генерал"),
    ("материал", "материал"), ("капитал", "капитал"), ("идеал", "идеал"),
    ("персонал", "персонал"), ("ребята", "ребята"), ("ребят", "ребята"),
    ("люди", "человек"), ("людей", "человек"), ("людям", "человек"), ("людьми", "человек"),
    ("дети", "ребёнок"), ("детей", "ребёнок"), ("детям", "ребёнок"), ("детьми", "ребёнок"),
    ("время", "время"), ("времени", "время"), ("имя", "имя"), ("имени", "имя"),
    ("день", "день"), ("дня", "день"), ("дни", "день"), ("дней", "день"),
    ("глаза", "глаз"), ("глазами", "глаз"), ("год", "год"), ("года", "год"), ("лет", "год"),
    ("раза", "раз"), ("жизнь", "жизнь"), ("жизни", "жизнь"), ("любовь", "любовь"),
    ("любви", "любовь"), ("совет", "совет"), ("ответ", "ответ"), ("предмет", "предмет"),
    ("билет", "билет"), ("портрет", "портрет"), ("привет", "привет"), ("свет", "свет"),
    ("цвет", "цвет"), ("секрет", "секрет"), ("поэт", "поэт"), ("бюджет", "бюджет"),
    ("пакет", "пакет"),
];

/// Word → candidate parses, in the order they were registered.
#[derive(Debug, Default)]
pub(crate) struct Lexicon {
    entries: HashMap<String, Vec<Parse>>,
}

impl Lexicon {
    pub(crate) fn russian() -> Self {
        let mut lexicon = Self::default();

        for word in PREPOSITIONS {
            lexicon.add(word, word, Tag::pos(Grammeme::Preposition), 1.0);
        }
        for word in CONJUNCTIONS {
            lexicon.add(word, word, Tag::pos(Grammeme::Conjunction), 1.0);
        }
        for word in PARTICLES {
            lexicon.add(word, word, Tag::pos(Grammeme::Particle), 1.0);
        }
        for word in INTERJECTIONS {
            lexicon.add(word, word, Tag::pos(Grammeme::Interjection), 1.0);
        }
        for word in PREDICATIVES {
            lexicon.add(word, word, Tag::pos(Grammeme::Predicative), 1.0);
        }
        for word in ADVERBS {
            lexicon.add(word, word, Tag::pos(Grammeme::Adverb), 1.0);
        }
        for word in NUMERALS {
            lexicon.add(word, word, Tag::pos(Grammeme::Numeral), 1.0);
        }
        for (form, lemma) in PRONOUNS {
            lexicon.add(form, lemma, Tag::pos(Grammeme::Pronoun), 1.0);
        }
        for (form, lemma) in PRONOMINAL_ADJECTIVES {
            lexicon.add(form, lemma, Tag::pos(Grammeme::AdjectiveFull), 1.0);
        }
        for (form, lemma) in IRREGULAR_VERBS {
            let pos = if *form == *lemma {
                Grammeme::Infinitive
            } else {
                Grammeme::Verb
            };
            lexicon.add(form, lemma, Tag::pos(pos), 1.0);
        }
        for (stem, infinitive) in SECOND_CONJUGATION {
            lexicon.add_second_conjugation(stem, infinitive);
        }
        for (masculine, stem, lemma) in SHORT_ADJECTIVES {
            lexicon.add_short_adjective(masculine, stem, lemma);
        }
        for (form, lemma) in NOUNS {
            lexicon.add(form, lemma, Tag::pos(Grammeme::Noun), 1.0);
        }

        lexicon
    }

    pub(crate) fn get(&self, word: &str) -> Option<&[Parse]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn add(&mut self, form: &str, lemma: &str, tag: Tag, score: f32) {
        let candidates = self.entries.entry(form.to_string()).or_default();
        if candidates
            .iter()
            .any(|p| p.normal_form == lemma && p.tag == tag)
        {
            return;
        }
        candidates.push(Parse::new(form, lemma, tag, score));
    }

    fn add_second_conjugation(&mut self, stem: &str, infinitive: &str) {
        // Spelling rule: after a sibilant the third person plural takes -ат.
        let plural = if stem.ends_with(['ж', 'ш', 'ч', 'щ']) {
            "ат"
        } else {
            "ят"
        };
        let reflexive = infinitive.ends_with("ся");
        for ending in ["ит", plural, "ишь", "им", "ите"] {
            let mut form = format!("{stem}{ending}");
            if reflexive {
                form.push_str(if ending.ends_with('е') { "сь" } else { "ся" });
            }
            self.add(
                &form,
                infinitive,
                Tag::pos(Grammeme::Verb).with(Grammeme::Present),
                1.0,
            );
        }
        self.add(infinitive, infinitive, Tag::pos(Grammeme::Infinitive), 1.0);
    }

    fn add_short_adjective(&mut self, masculine: &str, stem: &str, lemma: &str) {
        let short = || Tag::pos(Grammeme::AdjectiveShort);
        self.add(masculine, lemma, short().with(Grammeme::Masculine), 1.0);
        self.add(&format!("{stem}а"), lemma, short().with(Grammeme::Feminine), 1.0);
        self.add(&format!("{stem}ы"), lemma, short().with(Grammeme::Plural), 1.0);

        // The neuter short form doubles as an adverb; the adverb reading ranks first.
        let neuter = format!("{stem}о");
        if self.get(&neuter).is_none() {
            self.add(&neuter, &neuter, Tag::pos(Grammeme::Adverb), 0.5);
        }
        self.add(&neuter, lemma, short().with(Grammeme::Neuter), 0.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_words() {
        let lexicon = Lexicon::russian();
        assert!(lexicon.get("в").unwrap()[0].is(Grammeme::Preposition));
        assert!(lexicon.get("и").unwrap()[0].is(Grammeme::Conjunction));
        assert!(lexicon.get("не").unwrap()[0].is(Grammeme::Particle));
        assert!(lexicon.len() > 300);
    }

    #[test]
    fn test_second_conjugation_forms() {
        let lexicon = Lexicon::russian();
        for form in ["спит", "спят", "сидит", "сидишь", "лежат", "слышат"] {
            let parse = &lexicon.get(form).unwrap()[0];
            assert!(parse.is(Grammeme::Verb), "{form}");
        }
        assert_eq!(lexicon.get("сидит").unwrap()[0].normal_form, "сидеть");
        assert_eq!(lexicon.get("боится").unwrap()[0].normal_form, "бояться");
    }

    #[test]
    fn test_short_adjective_forms() {
        let lexicon = Lexicon::russian();
        let parse = &lexicon.get("нужна").unwrap()[0];
        assert!(parse.is(Grammeme::AdjectiveShort));
        assert_eq!(parse.normal_form, "нужный");

        let neuter = lexicon.get("нужно").unwrap();
        assert!(neuter.iter().any(|p| p.is(Grammeme::AdjectiveShort)));
    }

    #[test]
    fn test_homographs_keep_registration_order() {
        let lexicon = Lexicon::russian();
        // "хорошо" is registered as an adverb before the short adjective reading
        let parses = lexicon.get("хорошо").unwrap();
        assert!(parses[0].is(Grammeme::Adverb));
        assert!(parses.iter().any(|p| p.is(Grammeme::AdjectiveShort)));
    }
}
