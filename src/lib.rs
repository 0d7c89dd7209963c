pub mod cell;
pub mod config;
pub mod grid;
pub mod pattern;
pub mod render;
pub mod term;

pub use cell::Cell;
pub use grid::Density;
pub use grid::Grid;
pub use grid::GridError;
pub use grid::Seed;
