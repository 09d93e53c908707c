//! Vertical stacking of select views and hit testing.

use seekbox::{SelectView, ViewLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// One select's lines and where they sit on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Index of the select in the app.
    pub slot: usize,
    pub rect: Rect,
    pub lines: Vec<ViewLine>,
}

impl Placement {
    /// Screen row of each line, paired with the line.
    pub fn rows(&self) -> impl Iterator<Item = (u16, &ViewLine)> {
        (self.rect.y..).zip(self.lines.iter())
    }
}

/// What a screen cell belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub slot: usize,
    pub line: ViewLine,
}

/// Result of stacking views top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    pub placements: Vec<Placement>,
}

/// Blank rows between two selects.
pub const GAP: u16 = 1;

impl Layout {
    /// Stack `views` inside `area`, one blank row apart.
    ///
    /// Views that do not fit below the area's bottom edge are cut off.
    pub fn stack(views: &[SelectView], area: Rect) -> Self {
        let mut placements = Vec::with_capacity(views.len());
        let mut y = area.y;

        for (slot, view) in views.iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            let mut lines = view.lines();
            let available = usize::from(area.bottom() - y);
            lines.truncate(available);
            let height = lines.len() as u16;

            placements.push(Placement {
                slot,
                rect: Rect::new(area.x, y, area.width, height),
                lines,
            });
            y = y.saturating_add(height).saturating_add(GAP);
        }

        Self { placements }
    }

    /// Find the select line under a cell.
    pub fn hit(&self, x: u16, y: u16) -> Option<Hit> {
        let placement = self.placements.iter().find(|p| p.rect.contains(x, y))?;
        let line = placement.lines.get(usize::from(y - placement.rect.y))?;
        Some(Hit {
            slot: placement.slot,
            line: line.clone(),
        })
    }

    /// Screen rect of a select's input line.
    pub fn input_rect(&self, slot: usize) -> Option<Rect> {
        let placement = self.placements.iter().find(|p| p.slot == slot)?;
        placement
            .rows()
            .find(|(_, line)| matches!(line, ViewLine::Input(_)))
            .map(|(y, _)| Rect::new(placement.rect.x, y, placement.rect.width, 1))
    }
}
