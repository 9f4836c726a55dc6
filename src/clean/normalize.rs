//! Special-character normalization for free-text fields

use super::CleanError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

const SEPARATOR: char = '_';

/// Case transform applied after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Upper,
    Lower,
}

impl FromStr for Case {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upper" | "uppercase" => Ok(Self::Upper),
            "lower" | "lowercase" => Ok(Self::Lower),
            _ => Err(CleanError::UnknownCase(s.to_string())),
        }
    }
}

static SEPARATOR_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new("_{2,}").expect("valid regex"));

/// Replacement for a single character, `None` when it is kept as-is.
fn substitute(c: char) -> Option<&'static str> {
    let replacement = match c {
        'â' | 'ã' | 'á' | 'à' | 'ä' => "a",
        'Â' | 'Ã' | 'Á' | 'À' | 'Ä' => "A",
        'ê' | 'é' | 'è' | 'ë' => "e",
        'Ê' | 'É' | 'È' | 'Ë' => "E",
        'í' | 'ì' | 'ï' => "i",
        'Í' | 'Ì' | 'Ï' => "I",
        'ô' | 'õ' | 'ó' | 'ò' | 'ö' => "o",
        'Ô' | 'Õ' | 'Ó' | 'Ò' | 'Ö' => "O",
        'ú' | 'ù' | 'ü' => "u",
        'Ú' | 'Ù' | 'Ü' => "U",
        'ç' => "c",
        'Ç' => "C",
        '¹' => "1",
        '²' => "2",
        '³' => "3",
        'ª' | 'º' | '°' | '£' | '¢' | '¬' | '§' => "",
        '^' | '´' | '`' | '~' | '¨' => "",
        '+' | '=' | '.' | '!' | '?' | '$' | '%' | '#' | '&' => "",
        ':' | ';' | ',' | '<' | '>' | ' ' | '/' | '@' | '*' => "_",
        '(' | ')' | '[' | ']' | '{' | '}' => "_",
        _ => return None,
    };
    Some(replacement)
}

/// Strip accents and special characters from `text`.
///
/// Accented letters lose their accent, punctuation is dropped or turned into
/// `_`, runs of `_` collapse to one and leading/trailing `_` are removed.
/// `case` then upper- or lowercases the result.
///
/// ```
/// use pathfinder::clean::{normalize_string, Case};
///
/// assert_eq!(normalize_string("São Paulo!", None), "Sao_Paulo");
/// assert_eq!(normalize_string("São Paulo!", Some(Case::Upper)), "SAO_PAULO");
/// ```
pub fn normalize_string(text: &str, case: Option<Case>) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match substitute(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }

    let collapsed = SEPARATOR_RUNS.replace_all(&out, "_");
    let trimmed = collapsed.trim_matches(SEPARATOR);

    match case {
        Some(Case::Upper) => trimmed.to_uppercase(),
        Some(Case::Lower) => trimmed.to_lowercase(),
        None => trimmed.to_string(),
    }
}
