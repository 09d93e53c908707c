//! Searchable select widget.
//!
//! A [`SearchableSelect`] is a text field paired with a dropdown of options.
//! Every keystroke re-filters the options against the typed text using a
//! [`MatchMode`], clicking an option copies its display text into the field,
//! and an [`Advisory`] line explains why nothing is shown when the field is
//! empty or nothing matches.
//!
//! The widget owns no terminal or window. Hosts feed it [`SelectEvent`]s and
//! draw the [`SelectView`] snapshot it produces.
//!
//! # Example
//!
//! ```
//! use seekbox::{MatchMode, Options, SearchableSelect};
//!
//! let mut cities = SearchableSelect::builder()
//!     .options(Options::texts(["Minsk", "London", "Paris"]))
//!     .match_mode(MatchMode::Suffix)
//!     .build()
//!     .unwrap();
//!
//! cities.focus();
//! cities.input("sk");
//! assert_eq!(cities.view().dropdown[0].text, "Minsk");
//! ```

pub mod advisory;
pub mod error;
pub mod filter;
pub mod notify;
pub mod option;
pub mod select;

pub use advisory::Advisory;
pub use error::{ConfigError, ValidationError};
pub use filter::{MatchMode, filter_indices, fold};
pub use notify::ChangeListener;
pub use option::{Options, SelectOption};
pub use select::{
    Builder, HasOptions, InputView, NeedsOptions, OptionRow, SearchableSelect, SelectEvent,
    SelectId, SelectView, ViewLine,
};
