mod canvas;
mod editor;
mod stroke;

pub use canvas::CanvasLayout;
pub use editor::{EditorState, Theme};
pub use stroke::{StrokeMode, StrokeSession};
