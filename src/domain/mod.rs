mod color;
mod brush;
mod grid;
mod grid_size;
mod history;
mod model;
mod palette;

pub use color::Rgb;
pub use brush::BrushSize;
pub use grid::Grid;
pub use grid_size::{GridSize, SUPPORTED_SIZES};
pub use history::{History, Snapshot};
pub use model::GridModel;
pub use palette::{Palette, PALETTE_LEN};
