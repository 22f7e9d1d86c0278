//! Game configuration and board layout.
//!
//! [`GameConfig`] is handed over by the page as a JSON object. Every field
//! is optional and falls back to the defaults below, so `{}` is a valid
//! configuration. [`GameConfig::layout`] turns a canvas size into board
//! dimensions and a cell size in pixels.

use serde::Deserialize;

use crate::board::Dimensions;

/// Errors that can occur when loading or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON for [`GameConfig`].
    #[error("failed to parse game config JSON: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// A value is out of range.
    #[error("invalid game configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Tunable parameters of a game session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameConfig {
    /// Number of cells across the canvas. The cell size and the number of
    /// rows follow from the canvas dimensions.
    #[serde(default = "default_cells_per_row")]
    pub cells_per_row: u32,

    /// Target generations per second while playing.
    #[serde(default = "default_fps")]
    pub fps: u32,

    /// Probability that a cell starts alive.
    #[serde(default = "default_density")]
    pub density: f64,

    /// CSS color painted for dead cells.
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cells_per_row: default_cells_per_row(),
            fps: default_fps(),
            density: default_density(),
            background: default_background(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the string is not valid JSON, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cells_per_row == 0 {
            return Err(invalid("cells_per_row must be at least 1"));
        }
        if self.fps == 0 {
            return Err(invalid("fps must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(invalid("density must be between 0 and 1"));
        }
        Ok(())
    }

    /// Milliseconds between generations at the configured frame rate.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / f64::from(self.fps.max(1))
    }

    /// Derive board dimensions and cell size from a canvas size.
    ///
    /// Columns equal `cells_per_row`; the square cell size is the canvas
    /// width divided by that, rounded down; rows are however many whole
    /// cells fit in the canvas height.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the canvas is narrower than
    /// `cells_per_row` pixels or `cells_per_row` is zero.
    pub fn layout(&self, canvas_width: u32, canvas_height: u32) -> Result<Layout, ConfigError> {
        let cell_size = canvas_width
            .checked_div(self.cells_per_row)
            .filter(|size| *size > 0)
            .ok_or_else(|| {
                invalid(&format!(
                    "canvas width {canvas_width}px cannot fit {} cells per row",
                    self.cells_per_row
                ))
            })?;
        let rows = canvas_height.checked_div(cell_size).unwrap_or(0);
        let dims = Dimensions::new(to_usize(rows)?, to_usize(self.cells_per_row)?);
        Ok(Layout { dims, cell_size })
    }
}

/// Board dimensions together with the on-screen size of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Board rows and columns.
    pub dims: Dimensions,
    /// Side of one square cell in pixels.
    pub cell_size: u32,
}

fn invalid(reason: &str) -> ConfigError {
    ConfigError::Invalid {
        reason: reason.to_owned(),
    }
}

fn to_usize(value: u32) -> Result<usize, ConfigError> {
    usize::try_from(value).map_err(|e| invalid(&format!("{value} does not fit in usize: {e}")))
}

const fn default_cells_per_row() -> u32 {
    80
}

const fn default_fps() -> u32 {
    12
}

const fn default_density() -> f64 {
    0.5
}

fn default_background() -> String {
    "#111111".to_owned()
}
