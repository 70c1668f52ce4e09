//! Terminal output formatting for grids and patterns

use crate::life::{LifeGrid, Pattern};

const ALIVE: char = '█';
const DEAD: char = '·';

/// Format grids and patterns for terminal display
pub struct GridRenderer;

impl GridRenderer {
    /// Render the whole current generation, one row per line
    pub fn full_frame(grid: &LifeGrid) -> String {
        let cells = grid.cells();
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1));
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                output.push(if cells[y * grid.width() + x] { ALIVE } else { DEAD });
            }
            output.push('\n');
        }
        output
    }

    /// Render only the cells that changed in the last step as ANSI
    /// cursor-addressed writes.
    ///
    /// Assumes the frame was previously drawn starting at the top-left of
    /// the screen; emits nothing when the generation is identical to the
    /// previous one.
    pub fn delta_frame(grid: &LifeGrid) -> String {
        let mut output = String::new();
        for (x, y, alive) in grid.changes() {
            output.push_str(&format!(
                "\x1b[{};{}H{}",
                y + 1,
                x + 1,
                if alive { ALIVE } else { DEAD }
            ));
        }
        output
    }

    /// Render a pattern bitmap with row and column labels
    pub fn pattern_bitmap(pattern: &Pattern) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..pattern.width {
            output.push_str(&format!("{}", x % 10));
        }
        output.push('\n');

        for y in 0..pattern.height {
            output.push_str(&format!("{:2} ", y));
            for x in 0..pattern.width {
                output.push(if pattern.is_set(x, y) { ALIVE } else { DEAD });
            }
            output.push('\n');
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if the terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
