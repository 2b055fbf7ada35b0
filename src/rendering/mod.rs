use macroquad::prelude::*;

use crate::application::{CanvasLayout, EditorState};
use crate::domain::GridModel;
use crate::ui::{
    self, Action, Button, Dropdown, HexInput, Swatch, ThemeColors, panel_x, slots, to_color,
    FOOTER_HEIGHT, PANEL_WIDTH,
};

/// Cells smaller than this are drawn without separating lines
const MIN_CELL_FOR_LINES: f32 = 6.0;

/// Draw the pixel grid inside its layout
pub fn draw_canvas(model: &GridModel, layout: &CanvasLayout, colors: &ThemeColors) {
    let cell = layout.cell_size;
    let extent = layout.extent();

    for (row, col, rgb) in model.grid().iter_cells() {
        let (x, y) = layout.cell_to_screen(row, col);
        draw_rectangle(x, y, cell, cell, to_color(rgb));
    }

    if cell >= MIN_CELL_FOR_LINES {
        for i in 1..layout.grid_size {
            let offset = i as f32 * cell;
            draw_line(layout.origin_x + offset, layout.origin_y, layout.origin_x + offset, layout.origin_y + extent, 1.0, colors.grid_line);
            draw_line(layout.origin_x, layout.origin_y + offset, layout.origin_x + extent, layout.origin_y + offset, 1.0, colors.grid_line);
        }
    }

    draw_rectangle_lines(layout.origin_x - 1.0, layout.origin_y - 1.0, extent + 2.0, extent + 2.0, 2.0, colors.border);
}

/// Outline the cells the current brush would paint under the cursor
pub fn draw_brush_preview(model: &GridModel, layout: &CanvasLayout, hovered: Option<usize>, colors: &ThemeColors) {
    let Some(index) = hovered else {
        return;
    };

    for cell in model.brush_size().footprint(index, model.size()) {
        let (row, col) = model.grid().position_of(cell);
        let (x, y) = layout.cell_to_screen(row, col);
        draw_rectangle_lines(x, y, layout.cell_size, layout.cell_size, 2.0, colors.accent);
    }
}

/// Title bar across the drawing area
pub fn draw_header(colors: &ThemeColors) {
    draw_text("Pixel Art Creator", 16.0, 30.0, 28.0, colors.text);
    draw_text("Click and drag to draw • Right-click to erase", 16.0, 48.0, 15.0, colors.accent);
}

/// Status line under the canvas: grid and brush info, then the last message
pub fn draw_footer(state: &EditorState, colors: &ThemeColors) {
    let y = screen_height() - FOOTER_HEIGHT / 2.0 + 5.0;
    let brush = state.model.brush_size().value();
    let info = format!(
        "{} Grid • Brush: {}×{} • Undo: {} • Redo: {}",
        state.grid_size.label(),
        brush,
        brush,
        state.model.undo_depth(),
        state.model.redo_depth(),
    );
    draw_text(&info, 16.0, y, 16.0, colors.muted);

    if let Some(status) = &state.status {
        let width = measure_text(status, None, 16, 1.0).width;
        let x = (screen_width() - PANEL_WIDTH - width - 16.0).max(16.0);
        let color = if status.starts_with("Saved") { colors.accent } else { colors.error };
        draw_text(status, x, y, 16.0, color);
    }
}

fn draw_section_title(text: &str, y: f32, colors: &ThemeColors) {
    draw_text(text, panel_x(), y - 6.0, 15.0, colors.muted);
}

/// Draw the toolbar panel: widgets, selected color and shortcuts
pub fn draw_controls(
    state: &EditorState,
    buttons: &[(Action, Button)],
    dropdowns: &[&Dropdown],
    swatches: &[Swatch],
    hex_input: &HexInput,
    mouse_pos: (f32, f32),
    colors: &ThemeColors,
) {
    draw_rectangle(screen_width() - PANEL_WIDTH, 0.0, PANEL_WIDTH, screen_height(), colors.panel);

    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos, colors));

    let px = panel_x();

    // Selected color block with its hex value
    draw_section_title("Selected Color", slots::SELECTED_COLOR, colors);
    draw_rectangle(px, slots::SELECTED_COLOR, 40.0, 40.0, to_color(state.selected_color));
    draw_rectangle_lines(px, slots::SELECTED_COLOR, 40.0, 40.0, 1.0, colors.border);
    draw_text(&state.selected_color.to_hex(), px + 52.0, slots::SELECTED_COLOR + 26.0, 20.0, colors.text);

    draw_section_title("Colour Palette", slots::PALETTE, colors);
    swatches
        .iter()
        .for_each(|s| s.draw(mouse_pos, s.color() == state.selected_color, colors));

    draw_section_title("Hex Color", slots::HEX_INPUT, colors);
    hex_input.draw(&state.selected_color.to_hex(), colors);

    draw_section_title("Actions", slots::ACTIONS, colors);

    let help = [
        "Shortcuts:",
        "LMB drag: Draw",
        "RMB drag: Erase",
        "Ctrl+Z / Ctrl+Y: Undo / Redo",
        "1 / 2 / 3: Brush size",
        "C: Clear   E: Export",
        "T: Toggle theme",
    ];
    help.iter().enumerate().for_each(|(i, line)| {
        let (size, color) = if i == 0 { (15.0, colors.text) } else { (13.0, colors.muted) };
        draw_text(line, px, slots::HELP + i as f32 * 16.0, size, color);
    });

    // Closed dropdowns first, then the open one on top of everything
    let (open, closed): (Vec<&Dropdown>, Vec<&Dropdown>) = dropdowns.iter().copied().partition(|d| d.is_open());
    closed.iter().chain(open.iter()).for_each(|d| d.draw(mouse_pos, colors));
}

/// Draw one full frame
pub fn draw_frame(
    state: &EditorState,
    layout: &CanvasLayout,
    hovered: Option<usize>,
    widgets: (&[(Action, Button)], &[&Dropdown], &[Swatch], &HexInput),
    mouse_pos: (f32, f32),
) {
    let colors = ui::theme_colors(state.theme);
    clear_background(colors.background);

    draw_header(&colors);
    draw_canvas(&state.model, layout, &colors);
    if !state.stroke.is_active() {
        draw_brush_preview(&state.model, layout, hovered, &colors);
    }
    draw_footer(state, &colors);

    let (buttons, dropdowns, swatches, hex_input) = widgets;
    draw_controls(state, buttons, dropdowns, swatches, hex_input, mouse_pos, &colors);
}
