//! Display and formatting utilities

pub mod display;

pub use display::{ColorOutput, GridRenderer};
