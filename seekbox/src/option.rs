//! Option shapes accepted by the select.
//!
//! Options come in two shapes: plain strings, and JSON object records whose
//! searchable text lives under a caller-named field. The shape is resolved
//! once, when the select is built, into resolved options carrying the text
//! to match against.

use serde::Serialize;
use serde_json::Value;

use crate::error::ConfigError;
use crate::filter::fold;

/// One selectable item.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOption {
    /// A plain string option.
    Text(String),
    /// A record whose `key` field holds the searchable text.
    Keyed { record: Value, key: String },
}

impl SelectOption {
    pub fn text(text: impl Into<String>) -> Self {
        SelectOption::Text(text.into())
    }

    pub fn keyed(record: Value, key: impl Into<String>) -> Self {
        SelectOption::Keyed {
            record,
            key: key.into(),
        }
    }

    /// Look up a record field. Always `None` for text options.
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self {
            SelectOption::Text(_) => None,
            SelectOption::Keyed { record, .. } => record.get(field),
        }
    }

    /// Text form of a record field, see [`field_text`].
    pub fn field_text(&self, field: &str) -> Option<String> {
        self.get(field).and_then(field_text)
    }

    /// The text the query is matched against.
    ///
    /// `None` only for a record whose key field is missing or has no text form,
    /// which a built select never holds.
    pub fn search_text(&self) -> Option<String> {
        match self {
            SelectOption::Text(text) => Some(text.clone()),
            SelectOption::Keyed { key, .. } => self.field_text(key),
        }
    }
}

impl From<&str> for SelectOption {
    fn from(text: &str) -> Self {
        SelectOption::text(text)
    }
}

impl From<String> for SelectOption {
    fn from(text: String) -> Self {
        SelectOption::Text(text)
    }
}

/// Text form of a JSON field value.
///
/// Strings are used as-is, numbers and booleans in their JSON form. `null`,
/// arrays and objects have no text form.
pub fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The option list handed to the select.
#[derive(Debug, Clone, PartialEq)]
pub enum Options {
    Texts(Vec<String>),
    Records(Vec<Value>),
}

impl Default for Options {
    fn default() -> Self {
        Options::Texts(Vec::new())
    }
}

impl Options {
    /// Plain string options.
    pub fn texts<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Options::Texts(items.into_iter().map(Into::into).collect())
    }

    /// JSON object records. The select needs a search key to use them.
    pub fn records<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Options::Records(items.into_iter().collect())
    }

    /// Typed records, converted to JSON through their `Serialize` impl.
    ///
    /// ```
    /// use seekbox::Options;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// #[serde(rename_all = "camelCase")]
    /// struct Person {
    ///     first_name: String,
    /// }
    ///
    /// let options = Options::serialize([Person { first_name: "Jack".into() }]).unwrap();
    /// assert_eq!(options.len(), 1);
    /// ```
    pub fn serialize<I, T>(items: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        let records = items
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Options::Records(records))
    }

    pub fn len(&self) -> usize {
        match self {
            Options::Texts(items) => items.len(),
            Options::Records(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve every option to its searchable text.
    ///
    /// Records need `search_key`; each must be an object whose key field has a
    /// text form. Text options ignore the key.
    pub(crate) fn resolve(self, search_key: Option<&str>) -> Result<Vec<ResolvedOption>, ConfigError> {
        match self {
            Options::Texts(items) => Ok(items
                .into_iter()
                .map(|text| ResolvedOption::new(text.clone(), SelectOption::Text(text)))
                .collect()),
            Options::Records(records) => {
                let key = search_key.ok_or(ConfigError::MissingSearchKey)?;
                records
                    .into_iter()
                    .enumerate()
                    .map(|(index, record)| resolve_record(index, record, key))
                    .collect()
            }
        }
    }
}

fn resolve_record(index: usize, record: Value, key: &str) -> Result<ResolvedOption, ConfigError> {
    let field = match &record {
        Value::Object(map) => map.get(key),
        _ => return Err(ConfigError::NotAnObject { index }),
    };

    let text = match field {
        None | Some(Value::Null) => {
            return Err(ConfigError::MissingField {
                index,
                key: key.to_string(),
            });
        }
        Some(value) => field_text(value).ok_or_else(|| ConfigError::UnsupportedField {
            index,
            key: key.to_string(),
            kind: kind_name(value),
        })?,
    };

    Ok(ResolvedOption::new(text, SelectOption::keyed(record, key)))
}

/// An option together with its search text, folded for matching.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedOption {
    option: SelectOption,
    search_text: String,
    folded: String,
}

impl ResolvedOption {
    fn new(search_text: String, option: SelectOption) -> Self {
        let folded = fold(&search_text);
        Self {
            option,
            search_text,
            folded,
        }
    }

    pub(crate) fn option(&self) -> &SelectOption {
        &self.option
    }

    pub(crate) fn search_text(&self) -> &str {
        &self.search_text
    }

    pub(crate) fn folded(&self) -> &str {
        &self.folded
    }
}
