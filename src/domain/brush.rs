use crate::error::Error;

/// Brush footprint selector.
/// Small, medium and large map to 1x1, 2x2 and 3x3 blocks.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BrushSize {
    #[default]
    One,
    Two,
    Three,
}

impl BrushSize {
    /// Get all brush sizes in slider order
    pub const fn all() -> [BrushSize; 3] {
        [BrushSize::One, BrushSize::Two, BrushSize::Three]
    }

    /// Edge length of the footprint
    pub const fn value(self) -> u8 {
        match self {
            BrushSize::One => 1,
            BrushSize::Two => 2,
            BrushSize::Three => 3,
        }
    }

    /// Display name for UI
    pub const fn name(self) -> &'static str {
        match self {
            BrushSize::One => "Single pixel",
            BrushSize::Two => "2×2 pixels",
            BrushSize::Three => "3×3 pixels",
        }
    }

    /// Row/column offsets relative to the target cell.
    /// Two anchors at the top-left corner, three is centered.
    fn offsets(self) -> (std::ops::RangeInclusive<isize>, std::ops::RangeInclusive<isize>) {
        match self {
            BrushSize::One => (0..=0, 0..=0),
            BrushSize::Two => (0..=1, 0..=1),
            BrushSize::Three => (-1..=1, -1..=1),
        }
    }

    /// Linear indices covered when painting `index` on a `size`×`size` grid.
    /// Cells falling outside the grid are skipped, so the footprint shrinks at the edges.
    pub fn footprint(self, index: usize, size: usize) -> impl Iterator<Item = usize> {
        let row = (index / size) as isize;
        let col = (index % size) as isize;
        let bound = size as isize;
        let (rows, cols) = self.offsets();

        rows.flat_map(move |dr| cols.clone().map(move |dc| (row + dr, col + dc)))
            .filter(move |&(r, c)| r >= 0 && r < bound && c >= 0 && c < bound)
            .map(move |(r, c)| (r * bound + c) as usize)
    }
}

impl TryFrom<u8> for BrushSize {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(BrushSize::One),
            2 => Ok(BrushSize::Two),
            3 => Ok(BrushSize::Three),
            other => Err(Error::InvalidBrushSize(other)),
        }
    }
}
