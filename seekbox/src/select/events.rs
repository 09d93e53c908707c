//! Event handling for the SearchableSelect widget.

use crate::filter::filter_options;

use super::SearchableSelect;

/// User events a host routes to a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    /// The input text changed to the given value.
    Input(String),
    /// The input gained focus.
    Focus,
    /// The input lost focus.
    Blur,
    /// A dropdown row was clicked, by position in the visible list.
    Click(usize),
}

impl SearchableSelect {
    /// Dispatch an event to the matching handler.
    pub fn handle(&mut self, event: SelectEvent) {
        match event {
            SelectEvent::Input(text) => self.input(text),
            SelectEvent::Focus => self.focus(),
            SelectEvent::Blur => self.blur(),
            SelectEvent::Click(position) => self.click_option(position),
        }
    }

    /// The user changed the input text.
    ///
    /// Re-filters the options, opens the dropdown and notifies the listener.
    pub fn input(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.disabled {
            log::warn!("SearchableSelect::input id={} ignored, disabled", self.id);
            return;
        }

        self.filtered = filter_options(&self.options, &text, self.match_mode);
        self.open = true;
        self.text = text;
        self.dirty = true;

        log::trace!(
            "SearchableSelect::input id={} text={:?} filtered={}",
            self.id,
            self.text,
            self.filtered.len()
        );

        let text = self.text.clone();
        self.notify(&text);
    }

    /// The user clicked the dropdown row at `position`.
    ///
    /// Copies the option's display text into the input, closes the dropdown
    /// and notifies the listener. Clicks on rows that are not currently shown
    /// are ignored.
    pub fn click_option(&mut self, position: usize) {
        if self.disabled {
            log::warn!("SearchableSelect::click_option id={} ignored, disabled", self.id);
            return;
        }
        if !self.dropdown_visible() {
            log::warn!(
                "SearchableSelect::click_option id={} position={} ignored, dropdown hidden",
                self.id,
                position
            );
            return;
        }
        let Some(option) = self
            .filtered
            .get(position)
            .and_then(|&index| self.options.get(index))
        else {
            log::warn!(
                "SearchableSelect::click_option id={} position={} out of range ({} shown)",
                self.id,
                position,
                self.filtered.len()
            );
            return;
        };

        let text = self.display_text(option);
        self.filtered.clear();
        self.open = false;
        self.text = text.clone();
        self.dirty = true;

        log::trace!(
            "SearchableSelect::click_option id={} selected={:?}",
            self.id,
            text
        );

        self.notify(&text);
    }

    /// The input gained focus.
    pub fn focus(&mut self) {
        if self.disabled {
            log::warn!("SearchableSelect::focus id={} ignored, disabled", self.id);
            return;
        }
        if !self.focused {
            self.focused = true;
            self.dirty = true;
            log::trace!("SearchableSelect::focus id={}", self.id);
        }
    }

    /// The input lost focus.
    pub fn blur(&mut self) {
        if self.focused {
            self.focused = false;
            self.dirty = true;
            log::trace!("SearchableSelect::blur id={}", self.id);
        }
    }
}
