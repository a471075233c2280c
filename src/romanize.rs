use serde::Serialize;
use tracing::debug;

use crate::config::DEFAULT_SEPARATOR;
use crate::error::RomanizeError;
use crate::format::{CaseMode, OutputMode, format_tokens};
use crate::name::{normalize_name, split_name};
use crate::pinyin::{PhoneticSource, ToneStyle, name_readings};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRequest {
    pub name: String,
    pub tone: ToneStyle,
    pub case: CaseMode,
    pub sep: String,
    pub mode: OutputMode,
}

impl NameRequest {
    /// Request with default options: no tones, capitalized, space separated
    pub fn new(name: &str) -> Self {
        NameRequest {
            name: name.to_owned(),
            tone: ToneStyle::default(),
            case: CaseMode::default(),
            sep: DEFAULT_SEPARATOR.to_owned(),
            mode: OutputMode::default(),
        }
    }

    /// Build a request from loosely typed option values, missing or unknown
    /// values fall back to the defaults
    pub fn from_options(
        name: &str,
        tone: Option<&str>,
        case: Option<&str>,
        sep: Option<&str>,
        mode: Option<&str>,
    ) -> Self {
        NameRequest {
            name: name.to_owned(),
            tone: ToneStyle::from_option(tone),
            case: CaseMode::from_option(case),
            sep: sep.unwrap_or(DEFAULT_SEPARATOR).to_owned(),
            mode: OutputMode::from_option(mode),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameResult {
    /// The name as given, without leading and trailing whitespace
    pub input: String,
    pub surname: String,
    pub given: String,
    /// One syllable per character of surname and given name
    pub tokens: Vec<String>,
    pub result: String,
}

pub fn romanize(
    request: &NameRequest,
    source: &dyn PhoneticSource,
) -> Result<NameResult, RomanizeError> {
    let input = request.name.trim();
    let normalized = normalize_name(input);
    if normalized.is_empty() {
        return Err(RomanizeError::NameRequired);
    }

    let parts = split_name(&normalized);
    let tokens = name_readings(source, &parts, request.tone);
    let result = format_tokens(&tokens, request.mode, request.case, &request.sep);
    debug!(surname = parts.surname, given = parts.given, %result, "romanized name");

    Ok(NameResult {
        input: input.to_owned(),
        surname: parts.surname.to_owned(),
        given: parts.given.to_owned(),
        tokens,
        result,
    })
}
