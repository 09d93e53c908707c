//! Error types for select configuration and validation.

use thiserror::Error;

/// Errors reported while building a [`SearchableSelect`](crate::SearchableSelect).
///
/// Malformed options are rejected up front so the filtering path never has to
/// deal with them.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Record options were supplied without naming the field to search.
    #[error("record options need a search key")]
    MissingSearchKey,

    /// A record option is not a JSON object.
    #[error("option {index} is not an object")]
    NotAnObject { index: usize },

    /// A record option lacks the search key field, or holds `null` there.
    #[error("option {index} has no `{key}` field")]
    MissingField { index: usize, key: String },

    /// The search key field holds something that has no text form.
    #[error("option {index} field `{key}` is {kind}, expected a string, number or boolean")]
    UnsupportedField {
        index: usize,
        key: String,
        kind: &'static str,
    },

    /// An external value was supplied without switching to controlled mode.
    #[error("a value was supplied to an uncontrolled select")]
    ValueWithoutControl,

    /// A match mode name did not parse.
    #[error("unknown match mode `{0}`")]
    UnknownMatchMode(String),

    /// A typed record could not be converted into a JSON option.
    #[error("failed to serialize option: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors reported by [`SearchableSelect::validate`](crate::SearchableSelect::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The select is marked required but holds no text.
    #[error("{field} is required")]
    Required { field: String },
}
