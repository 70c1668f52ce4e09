//! Terminal simulator binary driving the Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, DisplayMode, SeedMode, Settings},
    life::{patterns, LifeGrid, Pattern},
    utils::{ColorOutput, GridRenderer},
};
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Conway's Game of Life terminal simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation in the terminal
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Seed with a named catalog pattern (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Seed with a random fill (overrides config)
        #[arg(short, long)]
        random: bool,

        /// Live-cell fraction for random fills, 0.0 to 1.0
        #[arg(short, long)]
        density: Option<f64>,

        /// Fixed seed for reproducible random fills
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many generations
        #[arg(short, long)]
        generations: Option<u64>,

        /// Delay between generations in milliseconds
        #[arg(short, long)]
        tick_ms: Option<u64>,

        /// Reprint the whole frame each generation instead of repainting
        /// only changed cells
        #[arg(long)]
        full_redraw: bool,
    },

    /// List the pattern catalog
    Patterns {
        /// Render a single pattern bitmap
        #[arg(short, long)]
        show: Option<String>,
    },

    /// Create an example configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            pattern,
            random,
            density,
            seed,
            generations,
            tick_ms,
            full_redraw,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                tick_ms,
                generations,
                pattern,
                random,
                density,
                rng_seed: seed,
                full_redraw,
            };
            run_command(config, overrides)
        }
        Commands::Patterns { show } => patterns_command(show),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    // Load configuration, falling back to defaults when no file exists
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        Settings::default()
    };

    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let mut grid = LifeGrid::new(settings.grid.width, settings.grid.height)
        .context("Failed to create grid")?;
    seed_grid(&mut grid, &settings)?;

    run_loop(&mut grid, &settings)
}

/// Populate a fresh grid according to the configured seed mode
fn seed_grid(grid: &mut LifeGrid, settings: &Settings) -> Result<()> {
    match settings.seed.mode {
        SeedMode::Title => stamp_centered(grid, &patterns::TITLE),
        SeedMode::Pattern => {
            let name = settings
                .seed
                .pattern
                .as_deref()
                .context("Seed mode 'pattern' requires a pattern name")?;
            let pattern = patterns::by_name(name)
                .with_context(|| format!("Unknown pattern '{}'", name))?;
            stamp_centered(grid, pattern);
        }
        SeedMode::Random => {
            let seed = match settings.seed.rng_seed {
                Some(seed) => seed,
                None => SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(1),
            };
            random_fill(grid, seed, settings.seed.density)?;
        }
    }
    Ok(())
}

fn stamp_centered(grid: &mut LifeGrid, pattern: &Pattern) {
    let x = grid.width().saturating_sub(pattern.width) / 2;
    let y = grid.height().saturating_sub(pattern.height) / 2;
    grid.stamp(pattern, x, y);
}

/// Fill the grid with live cells at roughly the requested density.
///
/// Deterministic for a given seed so runs can be reproduced.
fn random_fill(grid: &mut LifeGrid, seed: u64, density: f64) -> Result<()> {
    let mut state = seed;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            let roll = ((state >> 16) % 1000) as f64 / 1000.0;
            if roll < density {
                grid.set_cell(x, y, true)?;
            }
        }
    }
    Ok(())
}

fn run_loop(grid: &mut LifeGrid, settings: &Settings) -> Result<()> {
    let mut stdout = std::io::stdout();
    let status_row = grid.height() + 1;
    let tick = Duration::from_millis(settings.run.tick_ms);

    // Initial full paint; incremental repaints build on this frame
    print!("\x1b[2J\x1b[H{}", GridRenderer::full_frame(grid));
    print_status(&mut stdout, grid, status_row)?;

    let mut remaining = settings.run.generations;
    loop {
        if remaining == Some(0) {
            break;
        }

        std::thread::sleep(tick);
        grid.step();

        match settings.display.mode {
            DisplayMode::Full => print!("\x1b[H{}", GridRenderer::full_frame(grid)),
            DisplayMode::Delta => print!("{}", GridRenderer::delta_frame(grid)),
        }
        print_status(&mut stdout, grid, status_row)?;

        if let Some(n) = remaining.as_mut() {
            *n -= 1;
        }
    }

    // Park the cursor below the frame before returning to the shell
    println!();
    Ok(())
}

fn print_status(stdout: &mut std::io::Stdout, grid: &LifeGrid, row: usize) -> Result<()> {
    write!(
        stdout,
        "\x1b[{};1H\x1b[KGeneration: {}  Alive: {}",
        row,
        grid.generation(),
        grid.living_count()
    )?;
    stdout.flush()?;
    Ok(())
}

fn patterns_command(show: Option<String>) -> Result<()> {
    if let Some(name) = show {
        let pattern =
            patterns::by_name(&name).with_context(|| format!("Unknown pattern '{}'", name))?;
        println!(
            "{} ({}x{}, {} live cells)",
            pattern.name,
            pattern.width,
            pattern.height,
            pattern.live_count()
        );
        println!("{}", GridRenderer::pattern_bitmap(pattern));
        return Ok(());
    }

    println!("Available patterns:");
    println!("Name         | Size  | Alive");
    println!("-------------|-------|------");
    for pattern in patterns::CATALOG {
        println!(
            "{:12} | {:2}x{:<2} | {:5}",
            pattern.name,
            pattern.width,
            pattern.height,
            pattern.live_count()
        );
    }
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_path = directory.join("config/default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    println!("{}", ColorOutput::success("Setup complete"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --config {}", config_path.display());

    Ok(())
}
