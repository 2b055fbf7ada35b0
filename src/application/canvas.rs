/// Fraction of the drawing area the canvas may occupy
const FILL_RATIO: f32 = 0.9;

/// CanvasLayout maps between screen pixels and grid cells.
/// The canvas is centered in the drawing area and cells are square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    pub grid_size: usize,
}

impl CanvasLayout {
    /// Fit a `grid_size`×`grid_size` canvas into the area `(x, y, width, height)`
    pub fn fit(area: (f32, f32, f32, f32), grid_size: usize) -> Self {
        let (x, y, width, height) = area;
        let side = width.min(height).max(0.0) * FILL_RATIO;
        // Whole pixels per cell keeps grid lines crisp
        let cell_size = (side / grid_size.max(1) as f32).floor().max(1.0);
        let extent = cell_size * grid_size as f32;

        Self {
            origin_x: (x + (width - extent) / 2.0).floor(),
            origin_y: (y + (height - extent) / 2.0).floor(),
            cell_size,
            grid_size,
        }
    }

    /// Total canvas edge length in screen pixels
    pub fn extent(&self) -> f32 {
        self.cell_size * self.grid_size as f32
    }

    /// Convert screen coordinates to a cell index, None when off the canvas
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Option<usize> {
        let local_x = screen_x - self.origin_x;
        let local_y = screen_y - self.origin_y;
        if local_x < 0.0 || local_y < 0.0 {
            return None;
        }

        let col = (local_x / self.cell_size) as usize;
        let row = (local_y / self.cell_size) as usize;
        (col < self.grid_size && row < self.grid_size).then(|| row * self.grid_size + col)
    }

    /// Top-left screen corner of a cell
    pub fn cell_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.cell_size,
            self.origin_y + row as f32 * self.cell_size,
        )
    }

    /// Whether a screen point falls inside the canvas
    pub fn contains(&self, screen_x: f32, screen_y: f32) -> bool {
        self.screen_to_cell(screen_x, screen_y).is_some()
    }
}
