use macroquad::prelude::*;

use super::ThemeColors;

/// Longest accepted text, "#rrggbb"
const MAX_LEN: usize = 7;

/// Single-line text field for typing a hex color.
/// Click to focus, Enter commits, Escape or clicking elsewhere cancels.
#[derive(Clone, Debug)]
pub struct HexInput {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    focused: bool,
}

impl HexInput {
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            x,
            y,
            width,
            height: 28.0,
            text: String::new(),
            focused: false,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Start editing, seeded with the current color
    pub fn focus(&mut self, current: &str) {
        self.focused = true;
        self.text = current.to_string();
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Append a typed character; anything that cannot appear in a hex color is dropped
    pub fn push_char(&mut self, c: char) {
        if !self.focused || self.text.len() >= MAX_LEN {
            return;
        }
        let allowed = c.is_ascii_hexdigit() || (c == '#' && self.text.is_empty());
        if allowed {
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.focused {
            self.text.pop();
        }
    }

    /// Finish editing and hand back the text for validation
    pub fn commit(&mut self) -> Option<String> {
        if !self.focused {
            return None;
        }
        self.focused = false;
        Some(std::mem::take(&mut self.text))
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Poll mouse and keyboard. Returns committed text on Enter.
    pub fn update(&mut self, mouse_pos: (f32, f32), current: &str) -> Option<String> {
        if is_mouse_button_pressed(MouseButton::Left) {
            if self.is_hovered(mouse_pos) {
                if !self.focused {
                    self.focus(current);
                }
            } else {
                self.blur();
            }
        }

        if !self.focused {
            return None;
        }

        while let Some(c) = get_char_pressed() {
            self.push_char(c);
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
        }
        if is_key_pressed(KeyCode::Escape) {
            self.blur();
            return None;
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            return self.commit();
        }
        None
    }

    /// Draw the field; shows `current` while not editing
    pub fn draw(&self, current: &str, colors: &ThemeColors) {
        draw_rectangle(self.x, self.y, self.width, self.height, colors.panel);
        let border = if self.focused { colors.accent } else { colors.border };
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, border);

        let shown = if self.focused {
            format!("{}_", self.text)
        } else {
            current.to_string()
        };
        draw_text(&shown, self.x + 6.0, self.y + 19.0, 18.0, colors.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focused(seed: &str) -> HexInput {
        let mut input = HexInput::new(0.0, 0.0, 100.0);
        input.focus(seed);
        input
    }

    #[test]
    fn test_ignores_input_when_not_focused() {
        let mut input = HexInput::new(0.0, 0.0, 100.0);
        input.push_char('a');
        assert_eq!(input.text(), "");
        assert_eq!(input.commit(), None);
    }

    #[test]
    fn test_filters_non_hex_characters() {
        let mut input = focused("");
        for c in "#12z#G4".chars() {
            input.push_char(c);
        }
        assert_eq!(input.text(), "#124");
    }

    #[test]
    fn test_length_is_capped() {
        let mut input = focused("#");
        for c in "abcdef0123".chars() {
            input.push_char(c);
        }
        assert_eq!(input.text(), "#abcdef");
    }

    #[test]
    fn test_commit_returns_text_and_unfocuses() {
        let mut input = focused("#6366f1");
        input.backspace();
        input.push_char('2');
        assert_eq!(input.commit().as_deref(), Some("#6366f2"));
        assert!(!input.is_focused());
        assert_eq!(input.text(), "");
    }
}
