// src/config/types.rs
//
// Sections of config.toml. Every field has a default so partial files load.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub grid_size: usize,
    pub background: String,
    pub initial_color: String,
    pub palette: Vec<String>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            grid_size: 16,
            background: "#ffffff".to_string(),
            initial_color: "#6366f1".to_string(),
            palette: ["#6366f1", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Pixels per cell before scaling
    pub cell_pixels: u32,
    pub scale: u32,
    pub file_name: String,
    pub output_directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            cell_pixels: 16,
            scale: 2,
            file_name: "pixel-art.png".to_string(),
            output_directory: ".".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 800,
        }
    }
}
