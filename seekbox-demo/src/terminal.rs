use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use seekbox::ViewLine;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::DemoApp;
use crate::layout::{Layout, Rect};

/// Widest a select is drawn, in columns.
const MAX_WIDTH: u16 = 60;
/// Marker drawn before the input text.
const PROMPT: &str = "› ";
const HEADER: &str = "seekbox demo  Tab: next field  click: pick option  Esc: quit";

pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Redraw the whole screen and return the layout used, for hit testing.
    pub fn draw(&mut self, app: &DemoApp) -> io::Result<Layout> {
        let (width, height) = self.size()?;
        let layout = Layout::stack(&app.views(), content_area(width, height));

        queue!(
            self.stdout,
            cursor::Hide,
            SetAttribute(Attribute::Reset),
            Clear(ClearType::All)
        )?;

        queue!(
            self.stdout,
            cursor::MoveTo(2, 0),
            SetAttribute(Attribute::Dim),
            Print(fit(HEADER, usize::from(width.saturating_sub(2)))),
            SetAttribute(Attribute::Reset)
        )?;

        for placement in &layout.placements {
            for (y, line) in placement.rows() {
                self.draw_line(placement.rect, y, line)?;
            }
        }

        if let Some(last) = app.changes().last() {
            queue!(
                self.stdout,
                cursor::MoveTo(2, height.saturating_sub(1)),
                SetForegroundColor(Color::DarkGrey),
                Print(fit(&format!("changed {}", last), usize::from(width.saturating_sub(2)))),
                ResetColor
            )?;
        }

        // Park the cursor at the end of the focused input
        let focused = app
            .focused()
            .and_then(|slot| Some((app.select(slot)?, layout.input_rect(slot)?)));
        if let Some((select, rect)) = focused {
            queue!(
                self.stdout,
                cursor::MoveTo(cursor_column(rect, select.text()), rect.y),
                cursor::Show
            )?;
        }

        self.stdout.flush()?;
        Ok(layout)
    }

    fn draw_line(&mut self, rect: Rect, y: u16, line: &ViewLine) -> io::Result<()> {
        let width = usize::from(rect.width);
        queue!(self.stdout, cursor::MoveTo(rect.x, y))?;

        match line {
            ViewLine::Label(label) => queue!(
                self.stdout,
                SetAttribute(Attribute::Bold),
                Print(fit(label, width)),
            )?,
            ViewLine::Input(input) => {
                let field = format!("{}{}", PROMPT, input.text);
                if input.disabled {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if input.focused {
                    queue!(self.stdout, SetForegroundColor(Color::White))?;
                } else {
                    queue!(self.stdout, SetForegroundColor(Color::Grey))?;
                }
                queue!(
                    self.stdout,
                    SetAttribute(Attribute::Underlined),
                    Print(pad(&field, width)),
                )?;
            }
            ViewLine::Option(row) => queue!(
                self.stdout,
                SetForegroundColor(Color::Cyan),
                Print(fit(&format!("  {}", row.text), width)),
            )?,
            ViewLine::Advisory(message) => queue!(
                self.stdout,
                SetForegroundColor(Color::DarkYellow),
                SetAttribute(Attribute::Italic),
                Print(fit(message, width)),
            )?,
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Area the selects are stacked in: below the header, above the footer.
pub fn content_area(width: u16, height: u16) -> Rect {
    Rect::new(
        2,
        2,
        width.saturating_sub(4).min(MAX_WIDTH),
        height.saturating_sub(4),
    )
}

/// Column just past `text` in an input drawn at `rect`, kept inside the rect.
pub fn cursor_column(rect: Rect, text: &str) -> u16 {
    let offset = u16::try_from(PROMPT.width() + text.width()).unwrap_or(u16::MAX);
    rect.x
        .saturating_add(offset)
        .min(rect.right().saturating_sub(1))
}

/// Truncate to `max_width` columns, ending with an ellipsis when cut.
pub fn fit(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

/// Like [`fit`], then pad with spaces to exactly `width` columns.
pub fn pad(s: &str, width: usize) -> String {
    let mut result = fit(s, width);
    let used = result.width();
    result.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    result
}
