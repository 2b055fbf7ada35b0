/// Which color a stroke lays down
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StrokeMode {
    /// Paints with the selected color (primary button)
    Draw,
    /// Paints with the background color (secondary button)
    Erase,
}

/// Tracks one press-drag-release interaction.
///
/// The mode is fixed at `begin` and holds until `end`, whatever the buttons
/// do in between. `enter` only reports a cell the pointer has newly moved
/// into, so hovering in place across frames does not repaint.
#[derive(Clone, Debug, Default)]
pub struct StrokeSession {
    active: Option<ActiveStroke>,
}

#[derive(Clone, Copy, Debug)]
struct ActiveStroke {
    mode: StrokeMode,
    last_cell: Option<usize>,
}

impl StrokeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a stroke on `index`. Returns the cell to paint.
    pub fn begin(&mut self, mode: StrokeMode, index: usize) -> usize {
        self.active = Some(ActiveStroke {
            mode,
            last_cell: Some(index),
        });
        index
    }

    /// Pointer is over `index` (or off the grid when None).
    /// Returns the cell to paint when a stroke is active and the cell is new.
    pub fn enter(&mut self, index: Option<usize>) -> Option<(StrokeMode, usize)> {
        let stroke = self.active.as_mut()?;
        if index == stroke.last_cell {
            return None;
        }
        stroke.last_cell = index;
        index.map(|i| (stroke.mode, i))
    }

    /// Finish the stroke. Safe to call when no stroke is active.
    pub fn end(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn mode(&self) -> Option<StrokeMode> {
        self.active.map(|s| s.mode)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
