//! Terminal host shell for the seekbox searchable select.
//!
//! Shows two selects with static sample data, routes keystrokes and mouse
//! clicks to them and logs every change notification.

pub mod app;
pub mod error;
pub mod event;
pub mod layout;
pub mod paths;
pub mod samples;
pub mod terminal;

pub use app::{ChangeLog, ChangeSink, DemoApp, Slot};
pub use error::DemoError;
pub use event::{Input, Key, Modifiers, MouseButton};
pub use layout::{Hit, Layout, Placement, Rect};
pub use terminal::Terminal;
