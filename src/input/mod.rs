use log::{debug, info};
use macroquad::prelude::*;

use crate::application::{CanvasLayout, EditorState, StrokeMode};
use crate::ui::{Action, Button, Swatch};

/// Pointer state sampled once per frame
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerFrame {
    /// Stroke started by a button pressed this frame
    pub pressed: Option<StrokeMode>,
    /// Any button released this frame
    pub released: bool,
    /// Cell under the pointer
    pub hovered: Option<usize>,
    /// Pointer is over a widget that claims the click
    pub blocked: bool,
}

impl PointerFrame {
    fn sample(layout: &CanvasLayout, mouse_pos: (f32, f32), blocked: bool) -> Self {
        let pressed = if is_mouse_button_pressed(MouseButton::Left) {
            Some(StrokeMode::Draw)
        } else if is_mouse_button_pressed(MouseButton::Right) {
            Some(StrokeMode::Erase)
        } else {
            None
        };
        Self {
            pressed,
            released: is_mouse_button_released(MouseButton::Left)
                || is_mouse_button_released(MouseButton::Right),
            hovered: layout.screen_to_cell(mouse_pos.0, mouse_pos.1),
            blocked,
        }
    }
}

/// Drive the stroke session from one frame of pointer state.
///
/// The press is handled before the release, so a click that starts and ends
/// within one frame still paints. A release anywhere in the window ends the
/// stroke. While a stroke is active, presses of the other button are ignored.
pub fn apply_pointer_frame(state: &mut EditorState, frame: PointerFrame) {
    if state.stroke.is_active() {
        state.pointer_move(frame.hovered);
    } else if !frame.blocked {
        if let (Some(mode), Some(index)) = (frame.pressed, frame.hovered) {
            debug!("Stroke {:?} started at cell {}", mode, index);
            state.pointer_down(mode, index);
        }
    }

    if frame.released {
        state.pointer_up();
    }
}

/// Sample the mouse and feed it to the stroke session.
/// `blocked` is true when the pointer is over a widget.
pub fn handle_mouse_paint(state: &mut EditorState, layout: &CanvasLayout, mouse_pos: (f32, f32), blocked: bool) {
    apply_pointer_frame(state, PointerFrame::sample(layout, mouse_pos, blocked));
}

fn ctrl_down() -> bool {
    is_key_down(KeyCode::LeftControl)
        || is_key_down(KeyCode::RightControl)
        || is_key_down(KeyCode::LeftSuper)
        || is_key_down(KeyCode::RightSuper)
}

fn shift_down() -> bool {
    is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift)
}

/// Run a toolbar action against the editor
pub fn apply_action(state: &mut EditorState, action: Action) {
    match action {
        Action::Undo => {
            state.undo();
        }
        Action::Redo => {
            state.redo();
        }
        Action::Clear => state.clear(),
        Action::Export => {
            if let Err(e) = state.export() {
                debug!("Export action failed: {}", e);
            }
        }
        Action::ToggleTheme => state.toggle_theme(),
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input(state: &mut EditorState) {
    if ctrl_down() {
        if is_key_pressed(KeyCode::Z) {
            let action = if shift_down() { Action::Redo } else { Action::Undo };
            apply_action(state, action);
        } else if is_key_pressed(KeyCode::Y) {
            apply_action(state, Action::Redo);
        }
        return;
    }

    type KeyAction = (KeyCode, Action);
    let actions: [KeyAction; 3] = [
        (KeyCode::C, Action::Clear),
        (KeyCode::E, Action::Export),
        (KeyCode::T, Action::ToggleTheme),
    ];
    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| apply_action(state, *action));

    let brush_keys = [(KeyCode::Key1, 1), (KeyCode::Key2, 2), (KeyCode::Key3, 3)];
    for (key, n) in brush_keys {
        if is_key_pressed(key) && state.set_brush_value(n).is_ok() {
            info!("Brush size set to {}", n);
        }
    }
}

/// Process toolbar button clicks
pub fn process_button_clicks(state: &mut EditorState, buttons: &[(Action, Button)], mouse_pos: (f32, f32)) {
    buttons
        .iter()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .for_each(|(action, _)| apply_action(state, *action));
}

/// Select a palette color when its swatch is clicked
pub fn process_swatch_clicks(state: &mut EditorState, swatches: &[Swatch], mouse_pos: (f32, f32)) {
    if let Some(swatch) = swatches.iter().find(|s| s.is_clicked(mouse_pos)) {
        state.select_color(swatch.color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rgb;

    fn press(mode: StrokeMode, cell: usize) -> PointerFrame {
        PointerFrame { pressed: Some(mode), hovered: Some(cell), ..Default::default() }
    }

    fn hover(cell: Option<usize>) -> PointerFrame {
        PointerFrame { hovered: cell, ..Default::default() }
    }

    #[test]
    fn test_click_within_one_frame_paints_once() {
        let mut state = EditorState::new();
        let frame = PointerFrame { released: true, ..press(StrokeMode::Draw, 3) };
        apply_pointer_frame(&mut state, frame);

        assert_eq!(state.model.cell(3), Some(state.selected_color));
        assert_eq!(state.model.undo_depth(), 1);
        assert!(!state.stroke.is_active());
    }

    #[test]
    fn test_drag_paints_each_entered_cell_once() {
        let mut state = EditorState::new();
        apply_pointer_frame(&mut state, press(StrokeMode::Draw, 0));
        apply_pointer_frame(&mut state, hover(Some(0)));
        apply_pointer_frame(&mut state, hover(Some(1)));
        apply_pointer_frame(&mut state, hover(Some(1)));
        apply_pointer_frame(&mut state, hover(Some(2)));

        assert_eq!(state.model.undo_depth(), 3);
    }

    #[test]
    fn test_release_off_canvas_ends_stroke() {
        let mut state = EditorState::new();
        apply_pointer_frame(&mut state, press(StrokeMode::Draw, 0));
        apply_pointer_frame(&mut state, PointerFrame { released: true, blocked: true, ..hover(None) });
        assert!(!state.stroke.is_active());

        // Coming back without a press paints nothing
        apply_pointer_frame(&mut state, hover(Some(5)));
        assert_eq!(state.model.undo_depth(), 1);
    }

    #[test]
    fn test_release_over_canvas_ends_stroke() {
        let mut state = EditorState::new();
        apply_pointer_frame(&mut state, press(StrokeMode::Draw, 0));
        apply_pointer_frame(&mut state, PointerFrame { released: true, ..hover(Some(1)) });
        assert!(!state.stroke.is_active());
        assert_eq!(state.model.undo_depth(), 2);

        apply_pointer_frame(&mut state, hover(Some(2)));
        assert_eq!(state.model.undo_depth(), 2);
    }

    #[test]
    fn test_blocked_press_starts_nothing() {
        let mut state = EditorState::new();
        apply_pointer_frame(&mut state, PointerFrame { blocked: true, ..press(StrokeMode::Draw, 4) });

        assert!(!state.stroke.is_active());
        assert_eq!(state.model.undo_depth(), 0);
    }

    #[test]
    fn test_press_off_canvas_starts_nothing() {
        let mut state = EditorState::new();
        apply_pointer_frame(&mut state, PointerFrame { pressed: Some(StrokeMode::Draw), ..hover(None) });
        assert!(!state.stroke.is_active());
    }

    #[test]
    fn test_mode_is_fixed_for_the_stroke() {
        let mut state = EditorState::new();
        state.selected_color = Rgb::new(0xff, 0, 0);
        apply_pointer_frame(&mut state, press(StrokeMode::Draw, 0));
        apply_pointer_frame(&mut state, press(StrokeMode::Erase, 1));

        assert_eq!(state.stroke.mode(), Some(StrokeMode::Draw));
        assert_eq!(state.model.cell(1), Some(Rgb::new(0xff, 0, 0)));
    }

    #[test]
    fn test_right_button_erases() {
        let mut state = EditorState::new();
        apply_pointer_frame(&mut state, press(StrokeMode::Draw, 0));
        apply_pointer_frame(&mut state, PointerFrame { released: true, ..hover(Some(0)) });
        apply_pointer_frame(&mut state, press(StrokeMode::Erase, 0));

        assert_eq!(state.model.cell(0), Some(state.background));
    }

    #[test]
    fn test_export_action_failure_reaches_status() {
        let blocker = std::env::temp_dir().join(format!("pixel_art_action_{}", std::process::id()));
        std::fs::write(&blocker, b"x").unwrap();
        let mut state = EditorState::new();
        state.export_path = blocker.join("art.png");

        apply_action(&mut state, Action::Export);
        assert!(state.status.as_deref().unwrap_or("").starts_with("Export failed"));
        let _ = std::fs::remove_file(&blocker);
    }
}
