//! Searchable select state.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::advisory::Advisory;
use crate::error::ValidationError;
use crate::filter::{MatchMode, filter_options};
use crate::notify::ChangeListener;
use crate::option::{ResolvedOption, SelectOption};

use super::builder::{Builder, NeedsOptions};

/// Unique identifier for a SearchableSelect instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for SelectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__select_{}", self.0)
    }
}

pub(crate) type RenderFn = Box<dyn Fn(&SelectOption) -> String>;

/// A text input that filters a list of options as the user types.
///
/// The select keeps the typed text, the options matching it, whether the
/// dropdown is open and whether the input holds focus. Everything shown to the
/// user is derived from those four values, see [`SearchableSelect::view`].
///
/// In controlled mode the caller owns the text: it pushes changes in with
/// [`sync_value`](Self::sync_value) and learns about user edits through the
/// change listener. Uncontrolled selects own their text and only take an
/// initial default.
///
/// # Example
///
/// ```
/// use seekbox::{MatchMode, Options, SearchableSelect};
/// use serde_json::json;
///
/// let mut people = SearchableSelect::builder()
///     .options(Options::records([
///         json!({"firstName": "Jack", "lastName": "Johnson"}),
///         json!({"firstName": "John", "lastName": "Jackson"}),
///     ]))
///     .search_key("firstName")
///     .match_mode(MatchMode::Prefix)
///     .label("Person")
///     .required()
///     .build()
///     .unwrap();
///
/// people.input("ja");
/// assert_eq!(people.filtered().len(), 1);
///
/// people.click_option(0);
/// assert_eq!(people.text(), "Jack");
/// assert!(!people.is_open());
/// ```
pub struct SearchableSelect {
    pub(crate) id: SelectId,

    // Configuration
    pub(crate) options: Vec<ResolvedOption>,
    pub(crate) render: Option<RenderFn>,
    pub(crate) listener: Option<Box<dyn ChangeListener>>,
    pub(crate) match_mode: MatchMode,
    pub(crate) label: Option<String>,
    pub(crate) required: bool,
    pub(crate) disabled: bool,
    pub(crate) controlled: bool,

    // Last external props seen, to detect changes
    pub(crate) external_value: String,
    pub(crate) external_default: String,

    // Widget state
    /// Current text value
    pub(crate) text: String,
    /// Indices into `options`, in option order
    pub(crate) filtered: Vec<usize>,
    /// Whether the dropdown is open
    pub(crate) open: bool,
    /// Whether the input holds focus
    pub(crate) focused: bool,
    /// Set on every state change, cleared by the host after drawing
    pub(crate) dirty: bool,
}

impl SearchableSelect {
    /// Start configuring a select.
    pub fn builder() -> Builder<NeedsOptions> {
        Builder::new()
    }

    pub fn id(&self) -> SelectId {
        self.id
    }

    /// Get the ID as a string, for logs and element ids.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// The current text value.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable the input. A disabled select ignores typing, focus
    /// and option clicks.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            self.disabled = disabled;
            if disabled {
                self.focused = false;
            }
            self.dirty = true;
        }
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// All options, in the order they were supplied.
    pub fn options(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter().map(ResolvedOption::option)
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Options matching the current text, in option order.
    pub fn filtered(&self) -> Vec<&SelectOption> {
        self.filtered
            .iter()
            .filter_map(|&index| self.options.get(index))
            .map(ResolvedOption::option)
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Whether the option list is shown: open, with text, and something matched.
    pub fn dropdown_visible(&self) -> bool {
        self.open && !self.text.is_empty() && !self.filtered.is_empty()
    }

    pub fn advisory(&self) -> Advisory {
        Advisory::derive(self.focused, &self.text, self.filtered.is_empty(), self.open)
    }

    /// Text shown for an option: the render callback's output, or the search
    /// text when no callback was configured.
    pub(crate) fn display_text(&self, option: &ResolvedOption) -> String {
        match &self.render {
            Some(render) => render(option.option()),
            None => option.search_text().to_string(),
        }
    }

    /// Mirror an externally owned value into the input.
    ///
    /// Applies only in controlled mode and only when `value` differs from the
    /// last value synced. The filtered options follow the new text; the
    /// dropdown keeps its open state. Never notifies the change listener.
    pub fn sync_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.controlled {
            log::warn!(
                "SearchableSelect::sync_value id={} ignored on uncontrolled select",
                self.id
            );
            return;
        }
        if value == self.external_value {
            return;
        }
        log::trace!(
            "SearchableSelect::sync_value id={} {:?} -> {:?}",
            self.id,
            self.external_value,
            value
        );
        self.external_value = value.clone();
        self.set_text(value);
    }

    /// Apply a changed default value to the input.
    ///
    /// Like [`sync_value`](Self::sync_value) this overwrites the text without
    /// notifying, but it works in both modes.
    pub fn sync_default_value(&mut self, default_value: impl Into<String>) {
        let default_value = default_value.into();
        if default_value == self.external_default {
            return;
        }
        log::trace!(
            "SearchableSelect::sync_default_value id={} {:?} -> {:?}",
            self.id,
            self.external_default,
            default_value
        );
        self.external_default = default_value.clone();
        self.set_text(default_value);
    }

    /// Replace the text and re-filter against it, without notifying.
    fn set_text(&mut self, text: String) {
        self.filtered = filter_options(&self.options, &text, self.match_mode);
        self.text = text;
        self.dirty = true;
    }

    /// Check the required constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.required && self.text.trim().is_empty() {
            return Err(ValidationError::Required {
                field: self.label.clone().unwrap_or_else(|| "value".to_string()),
            });
        }
        Ok(())
    }

    /// Check if the state has changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub(crate) fn notify(&mut self, value: &str) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_change(value);
        }
    }
}

impl fmt::Debug for SearchableSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchableSelect")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("open", &self.open)
            .field("focused", &self.focused)
            .field("filtered", &self.filtered)
            .field("options", &self.options.len())
            .field("match_mode", &self.match_mode)
            .field("controlled", &self.controlled)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}
