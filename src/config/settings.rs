//! Configuration settings for the Life simulator

use crate::life::patterns;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub run: RunConfig,
    pub seed: SeedConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Delay between generations in milliseconds
    pub tick_ms: u64,
    /// Stop after this many generations; run until interrupted if absent
    pub generations: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub mode: SeedMode,
    /// Catalog pattern to stamp when `mode` is `pattern`
    pub pattern: Option<String>,
    /// Live-cell fraction for random fills, 0.0 to 1.0
    pub density: f64,
    /// Fixed seed for reproducible random fills; derived from the clock
    /// if absent
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    /// Stamp the title banner (the boot screen)
    Title,
    /// Stamp a named catalog pattern
    Pattern,
    /// Random fill at the configured density
    Random,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub mode: DisplayMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Reprint the whole frame every generation
    Full,
    /// Repaint only the cells the change tracker reports
    Delta,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width: 48,
                height: 32,
            },
            run: RunConfig {
                tick_ms: 100,
                generations: None,
            },
            seed: SeedConfig {
                mode: SeedMode::Title,
                pattern: None,
                density: 0.3,
                rng_seed: None,
            },
            display: DisplayConfig {
                mode: DisplayMode::Delta,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            anyhow::bail!(
                "Grid dimensions must be non-zero, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }

        if !(0.0..=1.0).contains(&self.seed.density) {
            anyhow::bail!(
                "Seed density must be between 0.0 and 1.0, got {}",
                self.seed.density
            );
        }

        if self.seed.mode == SeedMode::Pattern {
            let name = self
                .seed
                .pattern
                .as_deref()
                .context("Seed mode 'pattern' requires a pattern name")?;
            if patterns::by_name(name).is_none() {
                anyhow::bail!("Unknown pattern '{}' (see the patterns command)", name);
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(tick_ms) = cli_overrides.tick_ms {
            self.run.tick_ms = tick_ms;
        }
        if let Some(generations) = cli_overrides.generations {
            self.run.generations = Some(generations);
        }
        if let Some(ref pattern) = cli_overrides.pattern {
            self.seed.mode = SeedMode::Pattern;
            self.seed.pattern = Some(pattern.clone());
        }
        if cli_overrides.random {
            self.seed.mode = SeedMode::Random;
        }
        if let Some(density) = cli_overrides.density {
            self.seed.mode = SeedMode::Random;
            self.seed.density = density;
        }
        if let Some(rng_seed) = cli_overrides.rng_seed {
            self.seed.rng_seed = Some(rng_seed);
        }
        if cli_overrides.full_redraw {
            self.display.mode = DisplayMode::Full;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub tick_ms: Option<u64>,
    pub generations: Option<u64>,
    pub pattern: Option<String>,
    pub random: bool,
    pub density: Option<f64>,
    pub rng_seed: Option<u64>,
    pub full_redraw: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.grid.width = 64;
        settings.seed.mode = SeedMode::Pattern;
        settings.seed.pattern = Some("Beacon".to_string());
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.grid.width, 64);
        assert_eq!(loaded.seed.mode, SeedMode::Pattern);
        assert_eq!(loaded.seed.pattern.as_deref(), Some("Beacon"));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.grid.width = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.seed.density = 1.5;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.seed.mode = SeedMode::Pattern;
        settings.seed.pattern = Some("No Such Pattern".to_string());
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.seed.mode = SeedMode::Pattern;
        settings.seed.pattern = None;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cli_overrides_merge() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            width: Some(80),
            height: Some(24),
            density: Some(0.25),
            generations: Some(500),
            full_redraw: true,
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.grid.width, 80);
        assert_eq!(settings.grid.height, 24);
        assert_eq!(settings.seed.mode, SeedMode::Random);
        assert_eq!(settings.seed.density, 0.25);
        assert_eq!(settings.run.generations, Some(500));
        assert_eq!(settings.display.mode, DisplayMode::Full);
    }

    #[test]
    fn test_pattern_override_wins_over_default_title() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            pattern: Some("Glider SE".to_string()),
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);
        assert_eq!(settings.seed.mode, SeedMode::Pattern);
        assert!(settings.validate().is_ok());
    }
}
