use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::{BrushSize, GridModel, GridSize, Palette, Rgb};
use crate::error::Result;
use crate::export::{self, ExportOptions};

use super::{StrokeMode, StrokeSession};

/// Light or dark UI chrome
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Label for the toggle button (names the theme it switches to)
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }
}

/// EditorState coordinates the grid model with the surrounding UI state.
/// This is the application layer the input and rendering code talk to.
pub struct EditorState {
    pub model: GridModel,
    pub grid_size: GridSize,
    pub background: Rgb,
    pub selected_color: Rgb,
    pub palette: Palette,
    pub theme: Theme,
    pub stroke: StrokeSession,
    pub export_options: ExportOptions,
    pub export_path: PathBuf,
    /// Last user-visible message (export results, rejected input)
    pub status: Option<String>,
}

impl EditorState {
    /// Create editor state with the built-in defaults
    pub fn new() -> Self {
        let grid_size = GridSize::default();
        let background = Rgb::WHITE;
        Self {
            model: GridModel::new(grid_size, background),
            grid_size,
            background,
            selected_color: Rgb::new(0x63, 0x66, 0xf1),
            palette: Palette::default(),
            theme: Theme::default(),
            stroke: StrokeSession::new(),
            export_options: ExportOptions::default(),
            export_path: PathBuf::from("pixel-art.png"),
            status: None,
        }
    }

    /// Create editor state from a validated configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let grid_size = config.grid_size()?;
        let background = config.background()?;
        Ok(Self {
            model: GridModel::new(grid_size, background),
            grid_size,
            background,
            selected_color: config.initial_color()?,
            palette: config.palette()?,
            export_options: config.export_options(),
            export_path: config.export_path(),
            ..Self::new()
        })
    }

    /// Color painted by a stroke of the given mode
    pub fn stroke_color(&self, mode: StrokeMode) -> Rgb {
        match mode {
            StrokeMode::Draw => self.selected_color,
            StrokeMode::Erase => self.background,
        }
    }

    /// Button pressed over `index`: start a stroke and paint the first cell
    pub fn pointer_down(&mut self, mode: StrokeMode, index: usize) {
        let cell = self.stroke.begin(mode, index);
        let color = self.stroke_color(mode);
        self.model.paint(cell, color);
    }

    /// Pointer moved over `index`. Leaving the canvas (None) ends the stroke.
    pub fn pointer_move(&mut self, index: Option<usize>) {
        if index.is_none() {
            self.stroke.end();
            return;
        }
        if let Some((mode, cell)) = self.stroke.enter(index) {
            let color = self.stroke_color(mode);
            self.model.paint(cell, color);
        }
    }

    /// Button released anywhere in the window
    pub fn pointer_up(&mut self) {
        self.stroke.end();
    }

    /// Make `color` the draw color and remember it in the palette
    pub fn select_color(&mut self, color: Rgb) {
        self.selected_color = color;
        self.palette.remember(color);
    }

    /// Select a color typed as hex text
    pub fn select_hex(&mut self, text: &str) -> Result<Rgb> {
        match text.parse::<Rgb>() {
            Ok(color) => {
                self.select_color(color);
                Ok(color)
            }
            Err(e) => {
                warn!("Rejected color input: {}", e);
                self.status = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Change brush size from a raw slider/key value
    pub fn set_brush_value(&mut self, n: u8) -> Result<()> {
        let brush = BrushSize::try_from(n)?;
        self.model.set_brush_size(brush);
        Ok(())
    }

    /// Start over on a new grid size. History does not carry across sizes.
    pub fn resize(&mut self, size: GridSize) {
        info!("Resizing grid to {}", size.label());
        self.stroke.end();
        self.grid_size = size;
        self.model.create(size, self.background);
    }

    /// Wipe the canvas to the background color (not undoable)
    pub fn clear(&mut self) {
        info!("Clearing canvas");
        self.model.clear(self.background);
    }

    pub fn undo(&mut self) -> bool {
        self.model.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.model.redo()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Export to the configured path, reporting the outcome in the status line
    pub fn export(&mut self) -> Result<()> {
        let path = self.export_path.clone();
        self.export_to(&path)
    }

    pub fn export_to(&mut self, path: &Path) -> Result<()> {
        match export::export_png(&self.model, &self.export_options, path) {
            Ok(()) => {
                self.status = Some(format!("Saved {}", path.display()));
                Ok(())
            }
            Err(e) => {
                warn!("Export failed: {}", e);
                self.status = Some(e.to_string());
                Err(e)
            }
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
