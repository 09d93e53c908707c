//! Change notification.

/// Receives the new text whenever the user changes a select's value.
///
/// Invoked after each keystroke and after an option is picked. External syncs
/// (`sync_value`, `sync_default_value`) never notify.
///
/// Any `FnMut(&str)` closure is a listener:
///
/// ```
/// use seekbox::{Options, SearchableSelect};
///
/// let mut select = SearchableSelect::builder()
///     .options(Options::texts(["Paris"]))
///     .on_change(|value: &str| log::info!("value: {}", value))
///     .build()
///     .unwrap();
/// select.input("Pa");
/// ```
pub trait ChangeListener {
    fn on_change(&mut self, value: &str);
}

impl<F> ChangeListener for F
where
    F: FnMut(&str),
{
    fn on_change(&mut self, value: &str) {
        self(value)
    }
}
