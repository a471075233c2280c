use std::sync::LazyLock;

use regex::Regex;

use crate::config::is_compound_surname;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// A name split into family name and given name, both borrowed from the
/// normalized name
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NameParts<'a> {
    pub surname: &'a str,
    pub given: &'a str,
}

/// Trim the name and drop all whitespace inside it ("欧 阳　锋" -> "欧阳锋")
pub fn normalize_name(name: &str) -> String {
    WHITESPACE.replace_all(name.trim(), "").into_owned()
}

/// Split a normalized name into surname and given name.
///
/// A known compound surname at the start always wins over a single character
/// surname, even if the given name ends up empty.
pub fn split_name(name: &str) -> NameParts<'_> {
    let mut char_ends = name.char_indices().map(|(idx, c)| idx + c.len_utf8());
    let Some(first_end) = char_ends.next() else {
        return NameParts::default();
    };
    let surname_end = match char_ends.next() {
        Some(second_end) if is_compound_surname(&name[..second_end]) => second_end,
        _ => first_end,
    };
    let (surname, given) = name.split_at(surname_end);
    NameParts { surname, given }
}
