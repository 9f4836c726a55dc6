//! Portuguese → English month names
//!
//! WARNING: every matching substring is translated, wherever it appears.
//! `"Marcos"` becomes `"marcos"` and `"Outono"` becomes `"octono"`, so only
//! feed columns that hold dates.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

/// (portuguese, english) pairs. Full names come first so the alternation
/// below prefers them over the 3-letter abbreviations.
const MONTHS: &[(&str, &str)] = &[
    ("janeiro", "january"),
    ("fevereiro", "february"),
    ("março", "march"),
    ("abril", "april"),
    ("maio", "may"),
    ("junho", "june"),
    ("julho", "july"),
    ("agosto", "august"),
    ("setembro", "september"),
    ("outubro", "october"),
    ("novembro", "november"),
    ("dezembro", "december"),
    ("jan", "jan"),
    ("fev", "feb"),
    ("mar", "mar"),
    ("abr", "apr"),
    ("mai", "may"),
    ("jun", "jun"),
    ("jul", "jul"),
    ("ago", "aug"),
    ("set", "sep"),
    ("out", "oct"),
    ("nov", "nov"),
    ("dez", "dec"),
];

static MONTH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = MONTHS.iter().map(|(pt, _)| regex::escape(pt)).collect::<Vec<_>>().join("|");
    Regex::new(&format!("(?i){alternation}")).expect("valid regex")
});

fn english(portuguese: &str) -> &'static str {
    let lower = portuguese.to_lowercase();
    MONTHS
        .iter()
        .find(|(pt, _)| *pt == lower)
        .map(|(_, en)| *en)
        .unwrap_or("")
}

/// Translate every Portuguese month name or abbreviation in `text`.
///
/// Case-insensitive; output months are always lowercase.
pub fn translate_months(text: &str) -> String {
    MONTH_PATTERN.replace_all(text, |caps: &Captures| english(&caps[0])).into_owned()
}

/// Apply [`translate_months`] to every cell of a table.
pub fn translate_month_table(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| translate_months(cell)).collect())
        .collect()
}

/// Apply [`translate_months`] to every string inside a value tree, in place.
/// Mapping keys are left alone.
pub fn translate_month_value(value: &mut Value) {
    match value {
        Value::String(s) => *s = translate_months(s),
        Value::Array(items) => items.iter_mut().for_each(translate_month_value),
        Value::Object(map) => map.values_mut().for_each(translate_month_value),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
