use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::grid::Density;
use crate::render::Style;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    Dimensions { width: usize, height: usize },

    #[error("Density must be at least 1")]
    Density,
}

/// Run Conway's Game of Life on a fixed size grid in the terminal
#[derive(Debug, Clone, Parser)]
#[command(name = "life", version)]
pub struct Config {
    /// Number of cells per row
    #[arg(short, long, default_value_t = 10)]
    pub width: usize,

    /// Number of rows
    #[arg(short = 'H', long, default_value_t = 8)]
    pub height: usize,

    /// Number of generations to run
    #[arg(short, long, default_value_t = 30)]
    pub cycles: u64,

    /// Seconds to wait between generations
    #[arg(short, long, default_value_t = 1.0)]
    pub interval: f64,

    /// Random cells start alive with probability 1/DENSITY
    #[arg(short, long, default_value_t = 2)]
    pub density: u32,

    /// Seed for the random start, for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Plain text file to start from instead of a random grid
    #[arg(short, long)]
    pub pattern: Option<PathBuf>,

    /// How cells are drawn
    #[arg(long, value_enum, default_value_t = Style::Glyph)]
    pub style: Style,

    /// Don't clear the screen between generations
    #[arg(long)]
    pub no_clear: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Dimensions {
                width: self.width,
                height: self.height,
            });
        }

        if self.density == 0 {
            return Err(ConfigError::Density);
        }

        Ok(())
    }

    pub fn density(&self) -> Density {
        Density::one_in(self.density)
    }

    /// Negative or non finite intervals mean no delay at all.
    pub fn interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.interval).unwrap_or(Duration::ZERO)
    }
}
