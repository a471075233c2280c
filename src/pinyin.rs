use std::fmt::Debug;

use pinyin::{Pinyin, ToPinyinMulti};
use tracing::debug;

use crate::config::{is_compound_surname, surname_reading};
use crate::name::NameParts;

/// How tones are written in the generated syllables
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ToneStyle {
    /// "li"
    #[default]
    None,
    /// "lǐ"
    Mark,
    /// "li3"
    Number,
}

impl ToneStyle {
    /// "num" and "mark" select a tone notation, any other value means no tones
    pub fn from_option(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            Some("num") => ToneStyle::Number,
            Some("mark") => ToneStyle::Mark,
            _ => ToneStyle::None,
        }
    }

    /// ü is written as v unless tone marks are requested ("lv", "lv3", "lǚ")
    fn render(self, pinyin: Pinyin) -> String {
        match self {
            ToneStyle::None => pinyin.plain().replace('ü', "v"),
            ToneStyle::Mark => pinyin.with_tone().to_owned(),
            ToneStyle::Number => pinyin.with_tone_num_end().replace('ü', "v"),
        }
    }
}

/// Source of readings for single characters.
pub trait PhoneticSource: Debug + Send + Sync {
    /// All known readings of `ch`, most common first. Empty if the character
    /// has no reading (punctuation, latin letters, unknown characters).
    fn candidates(&self, ch: char, style: ToneStyle) -> Vec<String>;
}

/// Readings from the `pinyin` crate's heteronym tables
#[derive(Debug, Default, Clone, Copy)]
pub struct PinyinTable;

impl PhoneticSource for PinyinTable {
    fn candidates(&self, ch: char, style: ToneStyle) -> Vec<String> {
        ch.to_pinyin_multi()
            .map(|multi| multi.into_iter().map(|pinyin| style.render(pinyin)).collect())
            .unwrap_or_default()
    }
}

/// First reading of a character, characters without any reading are kept as is
pub fn first_reading(source: &dyn PhoneticSource, ch: char, style: ToneStyle) -> String {
    source
        .candidates(ch, style)
        .into_iter()
        .next()
        .unwrap_or_else(|| {
            debug!(character = %ch, "no reading available, passing character through");
            ch.to_string()
        })
}

fn readings_of(source: &dyn PhoneticSource, text: &str, style: ToneStyle) -> Vec<String> {
    text.chars()
        .map(|ch| first_reading(source, ch, style))
        .collect()
}

/// Readings of a surname: compound surnames are read character by character,
/// single character surnames with a fixed family name reading use that reading
/// regardless of the tone style.
pub fn surname_readings(
    source: &dyn PhoneticSource,
    surname: &str,
    style: ToneStyle,
) -> Vec<String> {
    if is_compound_surname(surname) {
        return readings_of(source, surname, style);
    }
    let mut chars = surname.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => match surname_reading(ch) {
            Some(fixed) => vec![fixed.to_owned()],
            None => vec![first_reading(source, ch, style)],
        },
        _ => readings_of(source, surname, style),
    }
}

/// One syllable per character of the name, surname first
pub fn name_readings(
    source: &dyn PhoneticSource,
    parts: &NameParts,
    style: ToneStyle,
) -> Vec<String> {
    let mut tokens = surname_readings(source, parts.surname, style);
    tokens.extend(readings_of(source, parts.given, style));
    tokens
}
