//! Stampable Life patterns.
//!
//! Each pattern is a named rectangular bitmap stored as a flat row-major
//! byte table with paired width/height fields. The selectable patterns are
//! exposed through [`CATALOG`] in menu order; [`TITLE`] is the decorative
//! banner stamped as the default boot screen and is not part of the
//! catalog.

/// An immutable rectangular bitmap that can be stamped onto the grid
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    /// `width * height` cells in row-major order, 0 = dead, 1 = alive
    pub cells: &'static [u8],
}

impl Pattern {
    /// Whether the pattern cell at `(x, y)` is alive.
    ///
    /// Coordinates must lie inside the pattern rectangle.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x] != 0
    }

    /// Number of live cells in the bitmap
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }
}

/// Look up a pattern by name, case-insensitively.
///
/// Resolves every catalog entry plus the title banner.
pub fn by_name(name: &str) -> Option<&'static Pattern> {
    CATALOG
        .iter()
        .copied()
        .chain(std::iter::once(&TITLE))
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Period-2 oscillator
pub static CLOCK: Pattern = Pattern {
    name: "Clock",
    width: 4,
    height: 4,
    cells: &[
        0, 1, 0, 0, //
        0, 0, 1, 1, //
        1, 1, 0, 0, //
        0, 0, 1, 0, //
    ],
};

pub static CROSS: Pattern = Pattern {
    name: "Cross",
    width: 3,
    height: 3,
    cells: &[
        0, 1, 0, //
        1, 1, 1, //
        0, 1, 0, //
    ],
};

/// Period-2 oscillator
pub static BEACON: Pattern = Pattern {
    name: "Beacon",
    width: 4,
    height: 4,
    cells: &[
        0, 0, 1, 1, //
        0, 0, 1, 1, //
        1, 1, 0, 0, //
        1, 1, 0, 0, //
    ],
};

/// Dense methuselah seed that runs for a long time before settling
pub static EDEN: Pattern = Pattern {
    name: "Eden",
    width: 12,
    height: 11,
    cells: &[
        0, 1, 0, 1, 1, 0, 1, 1, 0, 0, 1, 0, //
        0, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, //
        0, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, //
        0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, //
        1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 0, //
        0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 0, 1, //
        0, 1, 1, 1, 0, 1, 0, 1, 0, 0, 1, 0, //
        0, 1, 1, 0, 1, 1, 1, 0, 0, 1, 1, 0, //
        1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, //
        1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, //
    ],
};

/// Glider travelling up-right, one diagonal cell every 4 generations
pub static GLIDER_NE: Pattern = Pattern {
    name: "Glider NE",
    width: 3,
    height: 3,
    cells: &[
        1, 1, 1, //
        0, 0, 1, //
        0, 1, 0, //
    ],
};

/// Glider travelling up-left
pub static GLIDER_NW: Pattern = Pattern {
    name: "Glider NW",
    width: 3,
    height: 3,
    cells: &[
        1, 1, 1, //
        1, 0, 0, //
        0, 1, 0, //
    ],
};

/// Glider travelling down-right
pub static GLIDER_SE: Pattern = Pattern {
    name: "Glider SE",
    width: 3,
    height: 3,
    cells: &[
        0, 1, 0, //
        0, 0, 1, //
        1, 1, 1, //
    ],
};

/// Glider travelling down-left
pub static GLIDER_SW: Pattern = Pattern {
    name: "Glider SW",
    width: 3,
    height: 3,
    cells: &[
        0, 1, 0, //
        1, 0, 0, //
        1, 1, 1, //
    ],
};

/// Gosper gun, emits a glider every 30 generations
pub static GLIDER_GUN: Pattern = Pattern {
    name: "Glider Gun",
    width: 36,
    height: 9,
    cells: &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    ],
};

/// Lightweight spaceship travelling right
pub static SPACESHIP_E: Pattern = Pattern {
    name: "Spaceship E",
    width: 5,
    height: 4,
    cells: &[
        0, 0, 0, 1, 0, //
        0, 0, 0, 0, 1, //
        1, 0, 0, 0, 1, //
        0, 1, 1, 1, 1, //
    ],
};

/// Lightweight spaceship travelling left
pub static SPACESHIP_W: Pattern = Pattern {
    name: "Spaceship W",
    width: 5,
    height: 4,
    cells: &[
        0, 1, 0, 0, 0, //
        1, 0, 0, 0, 0, //
        1, 0, 0, 0, 1, //
        1, 1, 1, 1, 0, //
    ],
};

/// Still life
pub static BEEHIVE: Pattern = Pattern {
    name: "Beehive",
    width: 3,
    height: 4,
    cells: &[
        0, 1, 0, //
        1, 0, 1, //
        1, 0, 1, //
        0, 1, 0, //
    ],
};

/// Still life
pub static BOAT: Pattern = Pattern {
    name: "Boat",
    width: 3,
    height: 3,
    cells: &[
        0, 1, 0, //
        1, 0, 1, //
        0, 1, 1, //
    ],
};

/// Still life
pub static LOAF: Pattern = Pattern {
    name: "Loaf",
    width: 4,
    height: 4,
    cells: &[
        0, 0, 1, 0, //
        0, 1, 0, 1, //
        1, 0, 0, 1, //
        0, 1, 1, 0, //
    ],
};

/// Still life
pub static BARGE: Pattern = Pattern {
    name: "Barge",
    width: 4,
    height: 4,
    cells: &[
        0, 1, 0, 0, //
        1, 0, 1, 0, //
        0, 1, 0, 1, //
        0, 0, 1, 0, //
    ],
};

/// Banner stamped onto the grid at startup
pub static TITLE: Pattern = Pattern {
    name: "Title",
    width: 45,
    height: 21,
    cells: &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, //
        0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, //
        0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, //
        1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, //
        0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, //
        0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, //
    ],
};

/// Selectable patterns in menu order
pub static CATALOG: [&Pattern; 15] = [
    &CLOCK,
    &CROSS,
    &BEACON,
    &EDEN,
    &GLIDER_NE,
    &GLIDER_NW,
    &GLIDER_SE,
    &GLIDER_SW,
    &GLIDER_GUN,
    &SPACESHIP_E,
    &SPACESHIP_W,
    &BEEHIVE,
    &BOAT,
    &LOAF,
    &BARGE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bitmaps_match_their_dimensions() {
        for pattern in CATALOG.iter().copied().chain(std::iter::once(&TITLE)) {
            assert_eq!(
                pattern.cells.len(),
                pattern.width * pattern.height,
                "{} bitmap size mismatch",
                pattern.name
            );
            assert!(pattern.live_count() > 0, "{} is empty", pattern.name);
        }
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let names: HashSet<&str> = CATALOG.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), CATALOG.len());
        assert!(!names.contains("Title"));
    }

    #[test]
    fn test_by_name_lookup() {
        assert_eq!(by_name("Beacon").unwrap().width, 4);
        assert_eq!(by_name("glider gun").unwrap().height, 9);
        assert_eq!(by_name("Title").unwrap().width, 45);
        assert!(by_name("Pulsar").is_none());
    }

    #[test]
    fn test_is_set_addresses_row_major() {
        // Glider SE bottom row is fully alive, top row has only the middle
        assert!(GLIDER_SE.is_set(0, 2));
        assert!(GLIDER_SE.is_set(1, 2));
        assert!(GLIDER_SE.is_set(2, 2));
        assert!(GLIDER_SE.is_set(1, 0));
        assert!(!GLIDER_SE.is_set(0, 0));
        assert_eq!(GLIDER_SE.live_count(), 5);
    }

    #[test]
    fn test_glider_variants_are_reflections() {
        for glider in [&GLIDER_NE, &GLIDER_NW, &GLIDER_SE, &GLIDER_SW] {
            assert_eq!(glider.live_count(), 5, "{}", glider.name);
            assert_eq!((glider.width, glider.height), (3, 3));
        }
    }
}
