//! Builder for SearchableSelect.

use crate::error::ConfigError;
use crate::filter::{MatchMode, filter_options};
use crate::notify::ChangeListener;
use crate::option::{Options, SelectOption};

use super::state::{RenderFn, SearchableSelect, SelectId};

/// Typestate marker: builder needs options.
pub struct NeedsOptions;

/// Typestate marker: builder has options.
pub struct HasOptions(Options);

/// A searchable select builder.
///
/// Uses the typestate pattern so `options()` must be called before `build()`.
/// Option shape problems are reported by `build()`.
///
/// # Example
///
/// ```
/// use seekbox::{MatchMode, Options, SearchableSelect};
///
/// let select = SearchableSelect::builder()
///     .options(Options::texts(["Minsk", "London", "Paris"]))
///     .match_mode(MatchMode::Suffix)
///     .label("City")
///     .default_value("London")
///     .build()
///     .unwrap();
///
/// assert_eq!(select.text(), "London");
/// ```
pub struct Builder<S = NeedsOptions> {
    options: S,
    render: Option<RenderFn>,
    listener: Option<Box<dyn ChangeListener>>,
    search_key: Option<String>,
    match_mode: MatchMode,
    label: Option<String>,
    required: bool,
    disabled: bool,
    controlled: bool,
    value: Option<String>,
    default_value: Option<String>,
}

impl Default for Builder<NeedsOptions> {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder<NeedsOptions> {
    /// Create a new select builder.
    pub fn new() -> Self {
        Self {
            options: NeedsOptions,
            render: None,
            listener: None,
            search_key: None,
            match_mode: MatchMode::default(),
            label: None,
            required: false,
            disabled: false,
            controlled: false,
            value: None,
            default_value: None,
        }
    }

    /// Set the options. Required before calling `build()`.
    pub fn options(self, options: Options) -> Builder<HasOptions> {
        Builder {
            options: HasOptions(options),
            render: self.render,
            listener: self.listener,
            search_key: self.search_key,
            match_mode: self.match_mode,
            label: self.label,
            required: self.required,
            disabled: self.disabled,
            controlled: self.controlled,
            value: self.value,
            default_value: self.default_value,
        }
    }
}

impl<S> Builder<S> {
    /// Set how each option is displayed in the dropdown.
    ///
    /// The rendered text is also what lands in the input when the option is
    /// clicked. Defaults to the option's search text.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&SelectOption) -> String + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    /// Set the listener notified with the new text on every user change.
    pub fn on_change<L>(mut self, listener: L) -> Self
    where
        L: ChangeListener + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Name the record field matched against the query.
    pub fn search_key(mut self, key: impl Into<String>) -> Self {
        self.search_key = Some(key.into());
        self
    }

    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the select as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the select as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Let the caller own the text through `value()` and `sync_value()`.
    pub fn controlled(mut self) -> Self {
        self.controlled = true;
        self
    }

    /// Set the externally owned value. Needs `controlled()`.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the initial text of an uncontrolled select.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

impl Builder<HasOptions> {
    /// Validate the configuration and build the select.
    pub fn build(self) -> Result<SearchableSelect, ConfigError> {
        if self.value.is_some() && !self.controlled {
            return Err(ConfigError::ValueWithoutControl);
        }

        let HasOptions(options) = self.options;
        let options = options.resolve(self.search_key.as_deref())?;

        let external_value = self.value.unwrap_or_default();
        let external_default = self.default_value.unwrap_or_default();
        let text = if self.controlled {
            external_value.clone()
        } else {
            external_default.clone()
        };
        let filtered = filter_options(&options, &text, self.match_mode);

        let select = SearchableSelect {
            id: SelectId::new(),
            options,
            render: self.render,
            listener: self.listener,
            match_mode: self.match_mode,
            label: self.label,
            required: self.required,
            disabled: self.disabled,
            controlled: self.controlled,
            external_value,
            external_default,
            text,
            filtered,
            open: false,
            focused: false,
            dirty: false,
        };

        log::debug!(
            "SearchableSelect::build id={} options={} mode={} controlled={} text={:?}",
            select.id,
            select.options.len(),
            select.match_mode,
            select.controlled,
            select.text
        );

        Ok(select)
    }
}
