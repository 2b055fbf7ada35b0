mod button;
mod dropdown;
mod hex_input;
mod swatch;

pub use button::Button;
pub use dropdown::Dropdown;
pub use hex_input::HexInput;
pub use swatch::Swatch;

use macroquad::prelude::{screen_height, screen_width, Color};

use crate::application::Theme;
use crate::domain::{BrushSize, GridSize, Palette, Rgb};

// Layout constants - functions below derive positions for responsive layout
pub const PANEL_WIDTH: f32 = 220.0;
pub const PANEL_MARGIN: f32 = 12.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const HEADER_HEIGHT: f32 = 56.0;
pub const FOOTER_HEIGHT: f32 = 32.0;
pub const SWATCH_SIZE: f32 = 30.0;

/// Get the X position where the panel content starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH + PANEL_MARGIN
}

/// Usable width inside the panel
pub fn panel_inner_width() -> f32 {
    PANEL_WIDTH - 2.0 * PANEL_MARGIN
}

/// Drawing area left of the panel as (x, y, width, height)
pub fn canvas_area() -> (f32, f32, f32, f32) {
    (
        0.0,
        HEADER_HEIGHT,
        screen_width() - PANEL_WIDTH,
        screen_height() - HEADER_HEIGHT - FOOTER_HEIGHT,
    )
}

/// Convert a cell color for drawing
pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

/// Chrome colors for one theme
#[derive(Clone, Copy, Debug)]
pub struct ThemeColors {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub button: Color,
    pub button_hover: Color,
    pub border: Color,
    pub grid_line: Color,
    pub error: Color,
}

pub fn theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => ThemeColors {
            background: Color::from_rgba(17, 24, 39, 255),
            panel: Color::from_rgba(31, 41, 55, 255),
            text: Color::from_rgba(243, 244, 246, 255),
            muted: Color::from_rgba(156, 163, 175, 255),
            accent: Color::from_rgba(99, 102, 241, 255),
            button: Color::from_rgba(79, 70, 229, 255),
            button_hover: Color::from_rgba(99, 102, 241, 255),
            border: Color::from_rgba(75, 85, 99, 255),
            grid_line: Color::from_rgba(0, 0, 0, 40),
            error: Color::from_rgba(248, 113, 113, 255),
        },
        Theme::Light => ThemeColors {
            background: Color::from_rgba(243, 244, 246, 255),
            panel: Color::from_rgba(255, 255, 255, 255),
            text: Color::from_rgba(17, 24, 39, 255),
            muted: Color::from_rgba(107, 114, 128, 255),
            accent: Color::from_rgba(79, 70, 229, 255),
            button: Color::from_rgba(79, 70, 229, 255),
            button_hover: Color::from_rgba(67, 56, 202, 255),
            border: Color::from_rgba(209, 213, 219, 255),
            grid_line: Color::from_rgba(0, 0, 0, 30),
            error: Color::from_rgba(220, 38, 38, 255),
        },
    }
}

/// What a toolbar button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Undo,
    Redo,
    Clear,
    Export,
    ToggleTheme,
}

/// Vertical slots (panel-relative y) for each panel section
pub mod slots {
    pub const GRID_SIZE: f32 = 30.0;
    pub const BRUSH_SIZE: f32 = 85.0;
    pub const HISTORY: f32 = 130.0;
    pub const SELECTED_COLOR: f32 = 190.0;
    pub const PALETTE: f32 = 250.0;
    pub const HEX_INPUT: f32 = 305.0;
    pub const ACTIONS: f32 = 360.0;
    pub const HELP: f32 = 490.0;
}

/// Create toolbar buttons with standard layout
pub fn create_buttons() -> Vec<(Action, Button)> {
    let px = panel_x();
    let w = panel_inner_width();
    let half = (w - 8.0) / 2.0;
    vec![
        (Action::Undo, Button::new(px, slots::HISTORY, half, BUTTON_HEIGHT, "Undo")),
        (Action::Redo, Button::new(px + half + 8.0, slots::HISTORY, half, BUTTON_HEIGHT, "Redo")),
        (Action::Clear, Button::new(px, slots::ACTIONS, w, BUTTON_HEIGHT, "Clear Canvas")),
        (Action::Export, Button::new(px, slots::ACTIONS + 42.0, w, BUTTON_HEIGHT, "Export PNG")),
        (Action::ToggleTheme, Button::new(screen_width() - PANEL_WIDTH - 130.0, 12.0, 118.0, BUTTON_HEIGHT, "Theme")),
    ]
}

/// One swatch per recent color, laid out in a row
pub fn create_swatches(palette: &Palette) -> Vec<Swatch> {
    let px = panel_x();
    palette
        .colors()
        .iter()
        .enumerate()
        .map(|(i, &color)| Swatch::new(px + i as f32 * (SWATCH_SIZE + 8.0), slots::PALETTE, SWATCH_SIZE, color))
        .collect()
}

pub fn grid_size_dropdown() -> Dropdown {
    let items = GridSize::all().iter().map(|s| s.label()).collect();
    let mut dropdown = Dropdown::new(panel_x(), slots::GRID_SIZE, panel_inner_width(), "Grid Size", items);
    dropdown.set_selected(GridSize::default().position());
    dropdown
}

pub fn brush_size_dropdown() -> Dropdown {
    let items = BrushSize::all().iter().map(|b| b.name().to_string()).collect();
    Dropdown::new(panel_x(), slots::BRUSH_SIZE, panel_inner_width(), "Brush Size", items)
}
