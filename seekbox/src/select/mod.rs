//! Searchable select widget - a text input with a filtered option dropdown.

mod builder;
mod events;
mod render;
mod state;

pub use builder::{Builder, HasOptions, NeedsOptions};
pub use events::SelectEvent;
pub use render::{InputView, OptionRow, SelectView, ViewLine};
pub use state::{SearchableSelect, SelectId};
