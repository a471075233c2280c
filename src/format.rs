use itertools::Itertools;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Lower,
    Upper,
    /// First letter of every syllable upper case, the rest lower case
    #[default]
    Capitalize,
}

impl CaseMode {
    /// Unknown values fall back to `Capitalize`
    pub fn from_option(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            Some("lower") => CaseMode::Lower,
            Some("upper") => CaseMode::Upper,
            _ => CaseMode::Capitalize,
        }
    }

    pub fn apply(self, token: &str) -> String {
        match self {
            CaseMode::Lower => token.to_lowercase(),
            CaseMode::Upper => token.to_uppercase(),
            CaseMode::Capitalize => capitalize(token),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// All syllables joined by the separator
    #[default]
    Full,
    /// First letter of each syllable only
    Initials,
}

impl OutputMode {
    /// Unknown values fall back to `Full`
    pub fn from_option(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            Some("initials") => OutputMode::Initials,
            _ => OutputMode::Full,
        }
    }
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn join_tokens(tokens: &[String], case: CaseMode, sep: &str) -> String {
    tokens.iter().map(|token| case.apply(token)).join(sep)
}

/// Initials only know upper and lower case, `Capitalize` gives lower case
pub fn to_initials(tokens: &[String], upper: bool) -> String {
    let initials: String = tokens.iter().filter_map(|token| token.chars().next()).collect();
    if upper {
        initials.to_uppercase()
    } else {
        initials.to_lowercase()
    }
}

pub fn format_tokens(tokens: &[String], mode: OutputMode, case: CaseMode, sep: &str) -> String {
    match mode {
        OutputMode::Full => join_tokens(tokens, case, sep),
        OutputMode::Initials => to_initials(tokens, case == CaseMode::Upper),
    }
}
