//! Text-cleaning helpers for tabular pipeline data

pub mod months;
pub mod normalize;

pub use months::{translate_month_table, translate_month_value, translate_months};
pub use normalize::{normalize_string, Case};

#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("Unknown case directive '{0}': use upper, uppercase, lower or lowercase")]
    UnknownCase(String),
}
