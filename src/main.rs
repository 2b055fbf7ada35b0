use log::{debug, info, warn};
use macroquad::prelude::*;
use pixel_art::{
    CanvasLayout, Config, EditorState, GridSize,
    domain::BrushSize,
    input,
    rendering,
    ui::{self, HexInput},
};

// Runs before the logger exists; main reports any config error
fn window_conf() -> Conf {
    let window = Config::load().map(|c| c.window).unwrap_or_default();
    Conf {
        window_title: "Pixel Art Creator".to_owned(),
        window_width: window.width,
        window_height: window.height,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load().unwrap_or_else(|e| {
        warn!("{}; falling back to defaults", e);
        Config::default()
    });
    let mut state = EditorState::from_config(&config).unwrap_or_else(|e| {
        warn!("{}; starting with defaults", e);
        EditorState::new()
    });
    info!("Starting with a {} canvas", state.grid_size.label());

    let mut grid_size_dropdown = ui::grid_size_dropdown();
    grid_size_dropdown.set_selected(state.grid_size.position());
    let mut brush_dropdown = ui::brush_size_dropdown();
    let mut hex_input = HexInput::new(ui::panel_x(), ui::slots::HEX_INPUT, ui::panel_inner_width());

    loop {
        let mouse_pos = mouse_position();

        // Update widget positions for responsiveness
        let px = ui::panel_x();
        grid_size_dropdown.set_position(px, ui::slots::GRID_SIZE);
        brush_dropdown.set_position(px, ui::slots::BRUSH_SIZE);
        hex_input.set_position(px, ui::slots::HEX_INPUT);

        let buttons: Vec<_> = ui::create_buttons()
            .into_iter()
            .map(|(action, btn)| {
                let btn = match action {
                    ui::Action::Undo => btn.with_enabled(state.model.can_undo()),
                    ui::Action::Redo => btn.with_enabled(state.model.can_redo()),
                    ui::Action::ToggleTheme => btn.with_text(state.theme.toggle_label()),
                    _ => btn,
                };
                (action, btn)
            })
            .collect();
        let swatches = ui::create_swatches(&state.palette);
        let layout = CanvasLayout::fit(ui::canvas_area(), state.model.size());

        // Widgets claim the click before the canvas sees it
        let blocked = grid_size_dropdown.captures(mouse_pos) || brush_dropdown.captures(mouse_pos);

        if grid_size_dropdown.update(mouse_pos) {
            if let Some(&size) = GridSize::all().get(grid_size_dropdown.selected()) {
                state.resize(size);
            }
        }
        if grid_size_dropdown.is_open() {
            brush_dropdown.close();
        }

        if brush_dropdown.update(mouse_pos) {
            if let Some(&brush) = BrushSize::all().get(brush_dropdown.selected()) {
                state.model.set_brush_size(brush);
            }
        }
        if brush_dropdown.is_open() {
            grid_size_dropdown.close();
        }

        let current_hex = state.selected_color.to_hex();
        if let Some(text) = hex_input.update(mouse_pos, &current_hex) {
            if let Err(e) = state.select_hex(&text) {
                debug!("Hex input {:?} not applied: {}", text, e);
            }
        }

        if !blocked {
            input::process_button_clicks(&mut state, &buttons, mouse_pos);
            input::process_swatch_clicks(&mut state, &swatches, mouse_pos);
        }
        input::handle_mouse_paint(&mut state, &layout, mouse_pos, blocked);
        if !hex_input.is_focused() {
            input::process_keyboard_input(&mut state);
        }

        // Keyboard shortcuts may have changed the brush behind the dropdown's back
        brush_dropdown.set_selected(state.model.brush_size().value() as usize - 1);

        let hovered = layout.screen_to_cell(mouse_pos.0, mouse_pos.1);
        let dropdowns = [&grid_size_dropdown, &brush_dropdown];
        rendering::draw_frame(
            &state,
            &layout,
            hovered.filter(|_| !blocked),
            (buttons.as_slice(), dropdowns.as_slice(), swatches.as_slice(), &hex_input),
            mouse_pos,
        );

        next_frame().await;
    }
}
