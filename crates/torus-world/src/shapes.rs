//! Static pattern tables for drawable shapes.

use torus_core::Shape;

/// A rectangular stamp. `#` marks a live cell, anything else a dead one.
/// Offsets place the top-left corner relative to the anchor cell.
pub struct Pattern {
    pub row_offset: i32,
    pub col_offset: i32,
    pub rows: &'static [&'static str],
}

impl Pattern {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Every cell of the bounding box as `(d_row, d_col, alive)`
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, bool)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(r, line)| {
            line.bytes().enumerate().map(move |(c, byte)| {
                (
                    self.row_offset + r as i32,
                    self.col_offset + c as i32,
                    byte == b'#',
                )
            })
        })
    }

    pub fn population(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.bytes().filter(|&b| b == b'#').count())
            .sum()
    }
}

pub const GLIDER: Pattern = Pattern {
    row_offset: -1,
    col_offset: -1,
    rows: &[
        "..#",
        "#.#",
        ".##",
    ],
};

pub const SPACESHIP: Pattern = Pattern {
    row_offset: -6,
    col_offset: -4,
    rows: &[
        "....##....",
        "...####...",
        "..........",
        "..######..",
        "...####...",
        "..........",
        "..##..##..",
        "##.#..#.##",
        "...#..#...",
        "..........",
        "..........",
        "....##....",
        "....##....",
    ],
};

pub const PULSAR: Pattern = Pattern {
    row_offset: -6,
    col_offset: -6,
    rows: &[
        "..###...###..",
        ".............",
        "#....#.#....#",
        "#....#.#....#",
        "#....#.#....#",
        "..###...###..",
        ".............",
        "..###...###..",
        "#....#.#....#",
        "#....#.#....#",
        "#....#.#....#",
        ".............",
        "..###...###..",
    ],
};

pub fn pattern(shape: Shape) -> &'static Pattern {
    match shape {
        Shape::Glider => &GLIDER,
        Shape::Spaceship => &SPACESHIP,
        Shape::Pulsar => &PULSAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_are_rectangular() {
        for shape in Shape::all() {
            let p = pattern(shape);
            assert!(p.rows.iter().all(|row| row.len() == p.width()), "{shape:?}");
            assert_eq!(p.cells().count(), p.width() * p.height());
        }
    }

    #[test]
    fn test_pattern_sizes() {
        assert_eq!((GLIDER.height(), GLIDER.width()), (3, 3));
        assert_eq!((SPACESHIP.height(), SPACESHIP.width()), (13, 10));
        assert_eq!((PULSAR.height(), PULSAR.width()), (13, 13));
        assert_eq!(GLIDER.population(), 5);
        assert_eq!(PULSAR.population(), 48);
    }

    #[test]
    fn test_glider_offsets() {
        let live: Vec<_> = GLIDER
            .cells()
            .filter(|&(_, _, alive)| alive)
            .map(|(r, c, _)| (r, c))
            .collect();
        assert_eq!(live, vec![(-1, 1), (0, -1), (0, 1), (1, 0), (1, 1)]);
    }
}
