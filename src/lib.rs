//! Conway's Game of Life simulation engine.
//!
//! This library provides a double-buffered Life grid with change tracking
//! for incremental redraw, a catalog of stampable patterns, and the
//! configuration layer for the terminal simulator binary.

pub mod config;
pub mod life;
pub mod utils;

pub use config::Settings;
pub use life::{CellChange, GridError, LifeGrid, Pattern};
