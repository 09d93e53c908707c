//! Advisory text shown under the input.

use std::fmt;

/// Hint explaining why no options are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Advisory {
    #[default]
    None,
    /// The field is focused but empty.
    EnterSearchValue,
    /// The dropdown is open for a non-empty query that matched nothing.
    NotFound,
}

impl Advisory {
    /// Derive the advisory from the widget's visible state.
    ///
    /// `EnterSearchValue` needs an empty text and `NotFound` a non-empty one,
    /// so at most one rule applies.
    pub fn derive(focused: bool, text: &str, filtered_is_empty: bool, open: bool) -> Self {
        if focused && text.is_empty() {
            Advisory::EnterSearchValue
        } else if open && !text.is_empty() && filtered_is_empty {
            Advisory::NotFound
        } else {
            Advisory::None
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Advisory::None => None,
            Advisory::EnterSearchValue => Some("Enter a search value"),
            Advisory::NotFound => Some("Not found"),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Advisory::None)
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or(""))
    }
}
