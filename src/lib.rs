// Domain layer - pixel buffer, brush, history
pub mod domain;

// Application layer - editor state and stroke coordination
pub mod application;

// Infrastructure layer - config, export, UI, rendering, input
pub mod config;
pub mod error;
pub mod export;
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{BrushSize, GridModel, GridSize, Palette, Rgb};
pub use application::{CanvasLayout, EditorState, StrokeMode, Theme};
pub use config::Config;
pub use error::{Error, Result};
