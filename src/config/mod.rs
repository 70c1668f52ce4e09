//! Configuration management for the Life simulator

pub mod settings;

pub use settings::{
    CliOverrides, DisplayConfig, DisplayMode, GridConfig, RunConfig, SeedConfig, SeedMode, Settings,
};
