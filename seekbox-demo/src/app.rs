//! Demo state and event routing.

use std::cell::RefCell;
use std::rc::Rc;

use seekbox::{ChangeListener, SearchableSelect, SelectView, ViewLine};

use crate::event::{Input, Key, MouseButton};
use crate::layout::{Hit, Layout};

/// Change notifications received from every select, oldest first.
///
/// Each entry reads `<slot name>: <value>`.
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    entries: Rc<RefCell<Vec<String>>>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A change listener for the select named `name`.
    pub fn listener(&self, name: &'static str) -> ChangeSink {
        ChangeSink {
            name,
            entries: Rc::clone(&self.entries),
        }
    }

    pub fn last(&self) -> Option<String> {
        self.entries.borrow().last().cloned()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

/// Listener that logs a select's changes and appends them to a [`ChangeLog`].
#[derive(Debug)]
pub struct ChangeSink {
    name: &'static str,
    entries: Rc<RefCell<Vec<String>>>,
}

impl ChangeListener for ChangeSink {
    fn on_change(&mut self, value: &str) {
        log::info!("{}: value: {}", self.name, value);
        self.entries
            .borrow_mut()
            .push(format!("{}: {}", self.name, value));
    }
}

/// A select and the name it is logged under.
#[derive(Debug)]
pub struct Slot {
    pub name: &'static str,
    pub select: SearchableSelect,
}

/// The demo's state: a column of selects, at most one focused.
#[derive(Debug)]
pub struct DemoApp {
    slots: Vec<Slot>,
    focused: Option<usize>,
    changes: ChangeLog,
    quit: bool,
    dirty: bool,
}

impl DemoApp {
    pub fn new(slots: Vec<Slot>, changes: ChangeLog) -> Self {
        Self {
            slots,
            focused: None,
            changes,
            quit: false,
            dirty: true,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn select(&self, slot: usize) -> Option<&SearchableSelect> {
        self.slots.get(slot).map(|s| &s.select)
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn changes(&self) -> &ChangeLog {
        &self.changes
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn views(&self) -> Vec<SelectView> {
        self.slots.iter().map(|slot| slot.select.view()).collect()
    }

    /// Whether anything changed since the last call, clearing the flags.
    pub fn take_dirty(&mut self) -> bool {
        let mut dirty = std::mem::take(&mut self.dirty);
        for slot in &mut self.slots {
            dirty |= slot.select.is_dirty();
            slot.select.clear_dirty();
        }
        dirty
    }

    /// Route one input. `layout` is the layout of the last drawn frame.
    pub fn handle(&mut self, input: Input, layout: &Layout) {
        match input {
            Input::Key { key, modifiers } => {
                if key == Key::Escape || (modifiers.ctrl && key == Key::Char('c')) {
                    log::debug!("DemoApp quit requested");
                    self.quit = true;
                    return;
                }
                match key {
                    Key::Tab => self.cycle_focus(true),
                    Key::BackTab => self.cycle_focus(false),
                    Key::Backspace => self.edit(|text| {
                        text.pop();
                    }),
                    Key::Char(c) if !modifiers.ctrl && !modifiers.alt => {
                        self.edit(|text| text.push(c))
                    }
                    _ => {}
                }
            }
            Input::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.click(layout.hit(x, y)),
            Input::Click { .. } => {}
            Input::Resize { width, height } => {
                log::debug!("DemoApp resize {}x{}", width, height);
                self.dirty = true;
            }
        }
    }

    /// Apply an edit to the focused select's text and feed the result back
    /// as an input event.
    fn edit(&mut self, f: impl FnOnce(&mut String)) {
        let Some(slot) = self.focused.and_then(|i| self.slots.get_mut(i)) else {
            return;
        };
        let mut text = slot.select.text().to_string();
        f(&mut text);
        slot.select.input(text);
    }

    /// A click on an input focuses it. A click anywhere else takes focus
    /// away first, then selects the option it landed on, if any.
    fn click(&mut self, hit: Option<Hit>) {
        match hit {
            Some(Hit {
                slot,
                line: ViewLine::Input(_),
            }) => self.set_focus(Some(slot)),
            other => {
                self.set_focus(None);
                let Some(Hit {
                    slot,
                    line: ViewLine::Option(row),
                }) = other
                else {
                    return;
                };
                if let Some(target) = self.slots.get_mut(slot) {
                    log::debug!("DemoApp click {} option {}", target.name, row.position);
                    target.select.click_option(row.position);
                }
            }
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let count = self.slots.len();
        if count == 0 {
            return;
        }
        let start = match (self.focused, forward) {
            (Some(i), true) => i + 1,
            (Some(i), false) => i + count - 1,
            (None, true) => 0,
            (None, false) => count - 1,
        };
        let next = (0..count)
            .map(|step| {
                if forward {
                    (start + step) % count
                } else {
                    (start + count - step) % count
                }
            })
            .find(|&i| !self.slots[i].select.is_disabled());
        self.set_focus(next);
    }

    fn set_focus(&mut self, target: Option<usize>) {
        if self.focused == target {
            return;
        }
        if let Some(slot) = self.focused.and_then(|i| self.slots.get_mut(i)) {
            slot.select.blur();
        }
        self.focused = None;

        if let Some(slot) = target.and_then(|i| self.slots.get_mut(i)) {
            slot.select.focus();
            if slot.select.is_focused() {
                self.focused = target;
            }
        }
        log::trace!("DemoApp focus {:?}", self.focused);
        self.dirty = true;
    }
}
