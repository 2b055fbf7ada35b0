use log::{debug, trace, warn};

use super::{BrushSize, Grid, GridSize, History, Rgb};

/// GridModel owns the pixel buffer, the active brush and the undo/redo history.
/// Every operation is synchronous and infallible; inputs are validated by the
/// boundary types (`GridSize`, `BrushSize`, `Rgb`) before they reach it.
pub struct GridModel {
    grid: Grid,
    history: History,
    brush_size: BrushSize,
}

impl GridModel {
    /// Create a model with a fresh grid and empty history
    pub fn new(size: GridSize, background: Rgb) -> Self {
        Self {
            grid: Grid::new(size.get(), background),
            history: History::new(),
            brush_size: BrushSize::default(),
        }
    }

    /// Reset to `size`×`size` cells of `background` and forget all history.
    /// Brush size is kept.
    pub fn create(&mut self, size: GridSize, background: Rgb) {
        debug!("Creating {} grid filled with {}", size.label(), background);
        self.grid = Grid::new(size.get(), background);
        self.history.clear();
    }

    /// Paint the current brush footprint around `index` with `color`.
    /// Always records one history entry, even when nothing changes.
    pub fn paint(&mut self, index: usize, color: Rgb) {
        let size = self.grid.size();
        if index >= self.grid.len() {
            warn!("Ignoring paint at out-of-range cell {} (grid has {})", index, self.grid.len());
            return;
        }

        self.history.record(self.grid.snapshot());
        for cell in self.brush_size.footprint(index, size) {
            self.grid.set(cell, color);
        }
        trace!("Painted {} at {} with {:?}", color, index, self.brush_size);
    }

    /// Step back one entry. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let grid = &mut self.grid;
        match self.history.undo(|| grid.snapshot()) {
            Some(previous) => {
                grid.restore(previous);
                true
            }
            None => false,
        }
    }

    /// Step forward one entry. Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let grid = &mut self.grid;
        match self.history.redo(|| grid.snapshot()) {
            Some(next) => {
                grid.restore(next);
                true
            }
            None => false,
        }
    }

    /// Fill every cell with `background`. Not recorded in history.
    pub fn clear(&mut self, background: Rgb) {
        debug!("Clearing grid to {}", background);
        self.grid.fill(background);
    }

    pub fn set_brush_size(&mut self, brush: BrushSize) {
        self.brush_size = brush;
    }

    pub const fn brush_size(&self) -> BrushSize {
        self.brush_size
    }

    /// Get grid edge length
    pub const fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn cells(&self) -> &[Rgb] {
        self.grid.cells()
    }

    pub fn cell(&self, index: usize) -> Option<Rgb> {
        self.grid.get(index)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_depth() > 0
    }

    pub fn can_redo(&self) -> bool {
        self.redo_depth() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);
    const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xff);

    fn size(n: usize) -> GridSize {
        GridSize::try_from(n).unwrap()
    }

    /// 4x4 grids are not a supported UI size, so build one directly for the edge cases
    fn model_4x4() -> GridModel {
        GridModel {
            grid: Grid::new(4, Rgb::WHITE),
            history: History::new(),
            brush_size: BrushSize::One,
        }
    }

    fn painted(model: &GridModel) -> Vec<usize> {
        model
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != Rgb::WHITE)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_create_fills_every_supported_size() {
        let mut model = GridModel::new(GridSize::default(), Rgb::WHITE);
        for n in GridSize::all() {
            model.create(n, BLUE);
            assert_eq!(model.cells().len(), n.area());
            assert!(model.cells().iter().all(|&c| c == BLUE));
        }
    }

    #[test]
    fn test_brush_one_changes_exactly_one_cell() {
        let mut model = GridModel::new(size(8), Rgb::WHITE);
        model.paint(10, RED);
        assert_eq!(painted(&model), vec![10]);
        assert_eq!(model.undo_depth(), 1);
        assert_eq!(model.redo_depth(), 0);
    }

    #[test]
    fn test_brush_two_clipped_at_corner() {
        let mut model = model_4x4();
        model.set_brush_size(BrushSize::Two);
        model.paint(15, RED);
        assert_eq!(painted(&model), vec![15]);
    }

    #[test]
    fn test_brush_three_clipped_at_origin() {
        let mut model = model_4x4();
        model.set_brush_size(BrushSize::Three);
        model.paint(0, RED);
        assert_eq!(painted(&model), vec![0, 1, 4, 5]);
    }

    #[test]
    fn test_paint_same_color_still_records() {
        let mut model = GridModel::new(size(8), Rgb::WHITE);
        model.paint(0, Rgb::WHITE);
        assert_eq!(model.undo_depth(), 1);
    }

    #[test]
    fn test_scenario_paint_undo_redo() {
        let red: Rgb = "#ff0000".parse().unwrap();
        let bg: Rgb = "#ffffff".parse().unwrap();
        let mut model = GridModel::new(size(8), bg);
        model.set_brush_size(BrushSize::One);

        model.paint(0, red);
        assert_eq!(model.cell(0), Some(red));
        assert!(model.undo());
        assert_eq!(model.cell(0), Some(bg));
        assert!(model.redo());
        assert_eq!(model.cell(0), Some(red));
    }

    #[test]
    fn test_undo_walks_back_in_order() {
        let mut model = GridModel::new(size(8), Rgb::WHITE);
        let mut states = vec![model.cells().to_vec()];
        for i in 0..5 {
            model.paint(i * 3, RED);
            states.push(model.cells().to_vec());
        }
        for expected in states.iter().rev().skip(1) {
            assert!(model.undo());
            assert_eq!(model.cells(), expected.as_slice());
        }
        assert!(!model.can_undo());
        assert_eq!(model.redo_depth(), 5);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut model = GridModel::new(size(8), Rgb::WHITE);
        let before = model.cells().to_vec();
        assert!(!model.undo());
        assert!(!model.redo());
        assert_eq!(model.cells(), before.as_slice());
        assert_eq!((model.undo_depth(), model.redo_depth()), (0, 0));
    }

    #[test]
    fn test_paint_after_undo_discards_redo() {
        let mut model = GridModel::new(size(8), Rgb::WHITE);
        model.paint(0, RED);
        model.paint(1, RED);
        model.undo();
        model.undo();
        assert_eq!(model.redo_depth(), 2);
        model.paint(2, BLUE);
        assert_eq!(model.redo_depth(), 0);
        assert!(!model.redo());
    }

    #[test]
    fn test_create_resets_history() {
        let mut model = GridModel::new(size(8), Rgb::WHITE);
        model.paint(0, RED);
        model.paint(1, RED);
        model.undo();
        model.create(size(32), Rgb::WHITE);
        assert_eq!(model.size(), 32);
        assert_eq!((model.undo_depth(), model.redo_depth()), (0, 0));
    }

    #[test]
    fn test_clear_is_not_undoable() {
        let mut model = GridModel::new(size(8), Rgb::WHITE);
        model.paint(0, RED);
        model.clear(Rgb::WHITE);
        assert!(model.cells().iter().all(|&c| c == Rgb::WHITE));
        assert_eq!(model.undo_depth(), 1);
        // Undo jumps back past the clear to the state before the paint
        model.undo();
        assert!(model.cells().iter().all(|&c| c == Rgb::WHITE));
        // Redo returns the cleared buffer, not the painted one
        model.redo();
        assert_eq!(model.cell(0), Some(Rgb::WHITE));
    }

    #[test]
    fn test_brush_size_survives_create() {
        let mut model = GridModel::new(size(8), Rgb::WHITE);
        model.set_brush_size(BrushSize::Three);
        model.create(size(16), Rgb::WHITE);
        assert_eq!(model.brush_size(), BrushSize::Three);
    }

    #[test]
    fn test_random_undo_redo_round_trips() {
        let mut rng = rand::rng();
        let mut model = GridModel::new(size(16), Rgb::WHITE);
        let brushes = BrushSize::all();

        for _ in 0..50 {
            model.set_brush_size(brushes[rng.random_range(0..brushes.len())]);
            let color = Rgb::new(rng.random(), rng.random(), rng.random());
            let index = rng.random_range(0..model.cells().len());
            model.paint(index, color);

            let before = model.cells().to_vec();
            if model.undo() {
                assert!(model.redo());
            }
            assert_eq!(model.cells(), before.as_slice());
        }
        assert_eq!(model.undo_depth(), 50);
    }
}
