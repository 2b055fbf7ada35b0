use super::Rgb;

/// Grid is the square pixel buffer.
/// Cells are stored row-major: index = row * size + col.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<Rgb>,
}

impl Grid {
    /// Create a new grid with every cell set to `background`
    pub fn new(size: usize, background: Rgb) -> Self {
        Self {
            size,
            cells: vec![background; size * size],
        }
    }

    /// Edge length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (size * size)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert 2D coordinates to 1D index
    pub const fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Convert 1D index to (row, col)
    pub const fn position_of(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Get cell color (with bounds checking)
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.cells.get(index).copied()
    }

    /// Get cell color by coordinates
    pub fn get_at(&self, row: usize, col: usize) -> Option<Rgb> {
        (row < self.size && col < self.size).then(|| self.cells[self.index_of(row, col)])
    }

    /// Set cell color; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, color: Rgb) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = color;
        }
    }

    /// Set every cell to one color
    pub fn fill(&mut self, color: Rgb) {
        self.cells.iter_mut().for_each(|cell| *cell = color);
    }

    /// Raw cell buffer for rendering
    pub fn cells(&self) -> &[Rgb] {
        &self.cells
    }

    /// Copy of the cell buffer for history
    pub fn snapshot(&self) -> Box<[Rgb]> {
        self.cells.clone().into_boxed_slice()
    }

    /// Replace the buffer with a snapshot of the same size.
    /// Returns the previous contents.
    pub fn restore(&mut self, snapshot: Box<[Rgb]>) -> Box<[Rgb]> {
        debug_assert_eq!(snapshot.len(), self.cells.len());
        std::mem::replace(&mut self.cells, snapshot.into_vec()).into_boxed_slice()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &color)| (i / self.size, i % self.size, color))
    }
}
