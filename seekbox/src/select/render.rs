//! View snapshot for the SearchableSelect widget.

use super::SearchableSelect;

/// Everything a host needs to draw a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    /// Label text, with a trailing `*` when required.
    pub label: Option<String>,
    pub input: InputView,
    /// Rows of the dropdown. Empty when the dropdown is hidden.
    pub dropdown: Vec<OptionRow>,
    pub advisory: Option<&'static str>,
}

/// The text input part of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub text: String,
    pub disabled: bool,
    pub required: bool,
    pub focused: bool,
}

/// One dropdown row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    /// Position to pass to `click_option`.
    pub position: usize,
    /// Output of the render callback.
    pub text: String,
}

/// A view flattened to display lines, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewLine {
    Label(String),
    Input(InputView),
    Option(OptionRow),
    Advisory(&'static str),
}

impl SelectView {
    /// Flatten into lines in display order: label, input, rows, advisory.
    pub fn lines(&self) -> Vec<ViewLine> {
        let mut lines = Vec::with_capacity(self.dropdown.len() + 3);
        if let Some(label) = &self.label {
            lines.push(ViewLine::Label(label.clone()));
        }
        lines.push(ViewLine::Input(self.input.clone()));
        lines.extend(self.dropdown.iter().cloned().map(ViewLine::Option));
        if let Some(advisory) = self.advisory {
            lines.push(ViewLine::Advisory(advisory));
        }
        lines
    }

    pub fn height(&self) -> usize {
        usize::from(self.label.is_some())
            + 1
            + self.dropdown.len()
            + usize::from(self.advisory.is_some())
    }
}

impl SearchableSelect {
    /// Snapshot the current state for drawing.
    ///
    /// Pure: the same state always yields the same view.
    pub fn view(&self) -> SelectView {
        let label = self.label.as_ref().map(|label| {
            if self.required {
                format!("{}*", label)
            } else {
                label.clone()
            }
        });

        let dropdown = if self.dropdown_visible() {
            self.filtered
                .iter()
                .filter_map(|&index| self.options.get(index))
                .enumerate()
                .map(|(position, option)| OptionRow {
                    position,
                    text: self.display_text(option),
                })
                .collect()
        } else {
            Vec::new()
        };

        SelectView {
            label,
            input: InputView {
                text: self.text.clone(),
                disabled: self.disabled,
                required: self.required,
                focused: self.focused,
            },
            dropdown,
            advisory: self.advisory().message(),
        }
    }
}
