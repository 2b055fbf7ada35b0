// src/config/mod.rs
//
// Loading of config.toml, with typed accessors that validate through the
// same boundary types used for user input.

mod types;

pub use types::{CanvasConfig, ExportConfig, WindowConfig};

use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{GridSize, Palette, Rgb, SUPPORTED_SIZES};
use crate::error::{Error, Result};
use crate::export::ExportOptions;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub export: ExportConfig,
    pub window: WindowConfig,
}

impl Config {
    /// Load from next to the executable, then the working directory,
    /// then fall back to defaults when neither file exists.
    pub fn load() -> Result<Self> {
        let candidates = Self::exe_dir()
            .map(|dir| dir.join(CONFIG_FILE))
            .into_iter()
            .chain(std::iter::once(PathBuf::from(CONFIG_FILE)));

        for path in candidates {
            if path.exists() {
                let config = Self::load_from(&path)?;
                info!("Loaded configuration from {}", path.display());
                return Ok(config);
            }
        }

        info!("No {} found, using defaults", CONFIG_FILE);
        Ok(Self::default())
    }

    /// Load and validate a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    /// Parse TOML text and check every value up front
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.grid_size()?;
        self.background()?;
        self.initial_color()?;
        self.palette()?;
        if self.export.cell_pixels == 0 || self.export.scale == 0 {
            return Err(Error::Config("export cell_pixels and scale must be positive".into()));
        }
        // Every size the canvas can be resized to must still export
        let largest = SUPPORTED_SIZES.iter().copied().max().unwrap_or_default();
        self.export_options()
            .edge(largest)
            .map_err(|e| Error::Config(e.to_string()))?;
        if self.export.file_name.is_empty() {
            return Err(Error::Config("export file_name must not be empty".into()));
        }
        Ok(())
    }

    pub fn grid_size(&self) -> Result<GridSize> {
        GridSize::try_from(self.canvas.grid_size).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn background(&self) -> Result<Rgb> {
        parse_color("canvas.background", &self.canvas.background)
    }

    pub fn initial_color(&self) -> Result<Rgb> {
        parse_color("canvas.initial_color", &self.canvas.initial_color)
    }

    pub fn palette(&self) -> Result<Palette> {
        let colors = self
            .canvas
            .palette
            .iter()
            .map(|s| parse_color("canvas.palette", s))
            .collect::<Result<Vec<_>>>()?;
        if colors.is_empty() {
            warn!("Empty palette in configuration, using defaults");
            return Ok(Palette::default());
        }
        Ok(Palette::new(colors))
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            cell_pixels: self.export.cell_pixels,
            scale: self.export.scale,
        }
    }

    /// Full path of the exported PNG.
    /// Relative output directories resolve against the working directory.
    pub fn export_path(&self) -> PathBuf {
        Path::new(&self.export.output_directory).join(&self.export.file_name)
    }

    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }
}

fn parse_color(field: &str, value: &str) -> Result<Rgb> {
    value
        .parse()
        .map_err(|e: Error| Error::Config(format!("{}: {}", field, e)))
}
