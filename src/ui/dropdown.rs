use macroquad::prelude::*;

use super::ThemeColors;

const FONT_SIZE: f32 = 16.0;

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            height: 28.0,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index (ignored when out of range)
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Whether the pointer is over the closed box or the open menu
    pub fn captures(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered_main(mouse_pos) || (self.is_open && self.is_hovered_any(mouse_pos))
    }

    /// Draw dropdown without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32), colors: &ThemeColors) {
        draw_text(&self.label, self.x, self.y - 6.0, 15.0, colors.muted);

        let button_color = if self.is_hovered_main(mouse_pos) {
            colors.button_hover
        } else {
            colors.button
        };
        draw_rectangle(self.x, self.y, self.width, self.height, button_color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 1.0, colors.border);

        let display = fit_text(&self.items[self.selected], self.width - 30.0);
        draw_text(&display, self.x + 6.0, self.y + 19.0, FONT_SIZE, WHITE);
        draw_text("v", self.x + self.width - 16.0, self.y + 19.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * self.height;
        draw_rectangle(self.x, self.y + self.height, self.width, menu_height, colors.panel);

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.y + self.height + (i as f32 * self.height);
            let (fill, text) = if self.is_hovered_item(mouse_pos, i) {
                (colors.button_hover, WHITE)
            } else if i == self.selected {
                (colors.accent, WHITE)
            } else {
                (colors.panel, colors.text)
            };

            draw_rectangle(self.x, item_y, self.width, self.height, fill);
            draw_rectangle_lines(self.x, item_y, self.width, self.height, 1.0, colors.border);
            draw_text(&fit_text(item, self.width - 10.0), self.x + 6.0, item_y + 19.0, FONT_SIZE, text);
        }

        draw_rectangle_lines(self.x, self.y + self.height, self.width, menu_height, 2.0, colors.border);
    }

    /// Handle interaction and return true if selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }

        // Opening/closing the dropdown is not a selection change
        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }

        if !self.is_open {
            return false;
        }

        let clicked = (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i));
        self.is_open = false;
        match clicked {
            Some(i) if i != self.selected => {
                self.selected = i;
                true
            }
            _ => false,
        }
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        let item_y = self.y + self.height + (index as f32 * self.height);
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= item_y
            && mouse_pos.1 <= item_y + self.height
    }

    fn is_hovered_any(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered_main(mouse_pos)
            || (0..self.items.len()).any(|i| self.is_hovered_item(mouse_pos, i))
    }
}

/// Truncate with an ellipsis until the text fits `max_width`
fn fit_text(text: &str, max_width: f32) -> String {
    let width = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width;
    if width(text) <= max_width {
        return text.to_string();
    }

    let mut truncated = text.to_string();
    while !truncated.is_empty() && width(&format!("{}...", truncated)) > max_width {
        truncated.pop();
    }
    format!("{}...", truncated)
}
