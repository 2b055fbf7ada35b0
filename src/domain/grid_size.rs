use crate::error::Error;

/// Edge lengths offered by the size selector
pub const SUPPORTED_SIZES: [usize; 5] = [8, 16, 32, 48, 64];

/// A validated grid edge length (width == height).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GridSize(usize);

impl GridSize {
    /// Get all supported sizes in selector order
    pub fn all() -> Vec<GridSize> {
        SUPPORTED_SIZES.iter().map(|&n| GridSize(n)).collect()
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// Total number of cells
    pub const fn area(self) -> usize {
        self.0 * self.0
    }

    /// Selector label, e.g. "16 × 16"
    pub fn label(self) -> String {
        format!("{} × {}", self.0, self.0)
    }

    /// Position within `SUPPORTED_SIZES`
    pub fn position(self) -> usize {
        SUPPORTED_SIZES.iter().position(|&n| n == self.0).unwrap_or(0)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        GridSize(16)
    }
}

impl TryFrom<usize> for GridSize {
    type Error = Error;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        if SUPPORTED_SIZES.contains(&n) {
            Ok(GridSize(n))
        } else {
            Err(Error::InvalidGridSize(n))
        }
    }
}
