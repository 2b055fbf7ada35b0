use macroquad::prelude::*;

use super::{to_color, ThemeColors};
use crate::domain::Rgb;

/// Clickable square showing one palette color
#[derive(Clone)]
pub struct Swatch {
    x: f32,
    y: f32,
    size: f32,
    color: Rgb,
}

impl Swatch {
    pub fn new(x: f32, y: f32, size: f32, color: Rgb) -> Self {
        Self { x, y, size, color }
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.size
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.size
    }

    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    /// Draw the swatch; the active color gets a thick accent ring
    pub fn draw(&self, mouse_pos: (f32, f32), active: bool, colors: &ThemeColors) {
        draw_rectangle(self.x, self.y, self.size, self.size, to_color(self.color));

        let (thickness, ring) = if active {
            (3.0, colors.accent)
        } else if self.is_hovered(mouse_pos) {
            (2.0, colors.text)
        } else {
            (1.0, colors.border)
        };
        draw_rectangle_lines(self.x, self.y, self.size, self.size, thickness, ring);
    }
}
