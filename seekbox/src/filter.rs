//! Case-insensitive prefix, suffix and substring filtering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::option::ResolvedOption;

/// How the typed text is compared against each option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchMode {
    /// Option text starts with the query.
    #[serde(rename = "start", alias = "prefix")]
    Prefix,
    /// Option text ends with the query.
    #[serde(rename = "end", alias = "suffix")]
    Suffix,
    /// Query occurs anywhere in the option text.
    #[default]
    #[serde(rename = "contains", alias = "substring")]
    Substring,
}

impl MatchMode {
    /// Test an already folded candidate against an already folded query.
    ///
    /// The empty query matches every candidate in every mode.
    pub fn matches(&self, candidate: &str, query: &str) -> bool {
        match self {
            MatchMode::Prefix => candidate.starts_with(query),
            MatchMode::Suffix => candidate.ends_with(query),
            MatchMode::Substring => candidate.contains(query),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Prefix => "start",
            MatchMode::Suffix => "end",
            MatchMode::Substring => "contains",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "prefix" => Ok(MatchMode::Prefix),
            "end" | "suffix" => Ok(MatchMode::Suffix),
            "contains" | "substring" => Ok(MatchMode::Substring),
            _ => Err(ConfigError::UnknownMatchMode(s.to_string())),
        }
    }
}

/// Fold a string for case-insensitive comparison.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Indices of the candidates matching `query`, in candidate order.
///
/// # Example
///
/// ```
/// use seekbox::{MatchMode, filter_indices};
///
/// let cities = ["Minsk", "London", "Paris", "Mogilev", "Moscow", "Berlin"];
/// assert_eq!(filter_indices(cities, "sk", MatchMode::Suffix), vec![0]);
/// assert_eq!(filter_indices(cities, "MO", MatchMode::Prefix), vec![3, 4]);
/// ```
pub fn filter_indices<'a, I>(candidates: I, query: &str, mode: MatchMode) -> Vec<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = fold(query);
    candidates
        .into_iter()
        .enumerate()
        .filter(|(_, candidate)| mode.matches(&fold(candidate), &query))
        .map(|(index, _)| index)
        .collect()
}

/// Filter resolved options, whose folded text was computed at build time.
pub(crate) fn filter_options(options: &[ResolvedOption], query: &str, mode: MatchMode) -> Vec<usize> {
    let query = fold(query);
    let filtered: Vec<usize> = options
        .iter()
        .enumerate()
        .filter(|(_, option)| mode.matches(option.folded(), &query))
        .map(|(index, _)| index)
        .collect();

    log::debug!(
        "filter_options mode={} query={:?} options={} matched={}",
        mode,
        query,
        options.len(),
        filtered.len()
    );

    filtered
}
