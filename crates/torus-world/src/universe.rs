//! Toroidal Game of Life universe.

use crate::bits;
use crate::shapes;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use torus_core::{CreationStrategy, Error, Position, Result, Shape, UniverseConfig};
use tracing::{debug, instrument, trace};

/// A fixed-size grid whose edges wrap around, one bit per cell
#[derive(Debug)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<u8>,
    // Next generation is built here, then swapped with `cells`
    scratch: Vec<u8>,
    generation: u64,
    rng: ChaCha8Rng,
}

impl Universe {
    /// Create an all-dead universe. Randomness for `FiftyFifty` comes from OS entropy.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_rng(width, height, ChaCha8Rng::from_entropy())
    }

    /// Create an all-dead universe whose random seeding is reproducible
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<Self> {
        Self::with_rng(width, height, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Create and seed a universe from configuration
    pub fn from_config(config: &UniverseConfig) -> Result<Self> {
        config.validate()?;
        let mut universe = match config.seed {
            Some(seed) => Self::with_seed(config.width, config.height, seed)?,
            None => Self::new(config.width, config.height)?,
        };
        universe.init(config.strategy);
        Ok(universe)
    }

    fn with_rng(width: u32, height: u32, rng: ChaCha8Rng) -> Result<Self> {
        let cell_count = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n > 0)
            .ok_or(Error::InvalidDimensions { width, height })?;
        let len = bits::packed_len(cell_count);
        let too_large = Error::InvalidDimensions { width, height };
        let cells = zeroed(len).ok_or_else(|| too_large.clone())?;
        let scratch = zeroed(len).ok_or(too_large)?;

        debug!(width, height, bytes = len, "Created universe");

        Ok(Self {
            width,
            height,
            cells,
            scratch,
            generation: 0,
            rng,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Generations advanced since the last `init`
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Reseed every cell, replacing the whole buffer
    #[instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn init(&mut self, strategy: CreationStrategy) {
        let cell_count = self.cell_count();
        let mut next = vec![0u8; self.cells.len()];

        match strategy {
            CreationStrategy::AllDead => {}
            CreationStrategy::FiftyFifty => {
                for i in 0..cell_count {
                    if self.rng.gen_bool(0.5) {
                        bits::set(&mut next, i, true);
                    }
                }
            }
            CreationStrategy::Deterministic => {
                for i in 0..cell_count {
                    if i % 2 == 0 || i % 7 == 0 {
                        bits::set(&mut next, i, true);
                    }
                }
            }
        }

        self.cells = next;
        self.generation = 0;

        debug!(population = self.population(), "Seeded universe");
    }

    /// Reseed from a host-supplied strategy code. Unknown codes leave the grid untouched.
    pub fn init_code(&mut self, code: u32) -> Result<()> {
        let strategy = CreationStrategy::try_from(code)?;
        self.init(strategy);
        Ok(())
    }

    /// Advance one generation under B3/S23 with wrap-around adjacency
    #[instrument(level = "trace", skip(self), fields(generation = self.generation))]
    pub fn tick(&mut self) {
        let width = self.width as usize;
        let height = self.height as usize;
        let current = &self.cells;
        let next = &mut self.scratch;
        next.fill(0);

        for row in 0..height {
            let north = if row == 0 { height - 1 } else { row - 1 };
            let south = if row == height - 1 { 0 } else { row + 1 };

            for col in 0..width {
                let west = if col == 0 { width - 1 } else { col - 1 };
                let east = if col == width - 1 { 0 } else { col + 1 };

                let neighbors = [
                    (north, west),
                    (north, col),
                    (north, east),
                    (row, west),
                    (row, east),
                    (south, west),
                    (south, col),
                    (south, east),
                ];
                let live_neighbors = neighbors
                    .iter()
                    .filter(|&&(r, c)| bits::get(current, r * width + c))
                    .count();

                let idx = row * width + col;
                let alive = match (bits::get(current, idx), live_neighbors) {
                    // Underpopulation
                    (true, n) if n < 2 => false,
                    (true, 2) | (true, 3) => true,
                    // Overpopulation
                    (true, _) => false,
                    // Reproduction
                    (false, 3) => true,
                    (false, _) => false,
                };
                if alive {
                    bits::set(next, idx, true);
                }
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.population(),
            "Tick complete"
        );
    }

    /// Packed cell buffer. Byte `n / 8`, bit `n % 8` holds cell `n = row * width + col`.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Raw pointer to the packed buffer for hosts that read it directly.
    /// Invalidated by the next `init` or `tick`.
    pub fn cell_ptr(&self) -> *const u8 {
        self.cells.as_ptr()
    }

    pub fn is_alive(&self, row: u32, col: u32) -> Result<bool> {
        let pos = self.checked(row, col)?;
        Ok(bits::get(&self.cells, pos.index(self.width)))
    }

    pub fn population(&self) -> usize {
        bits::count_alive(&self.cells)
    }

    /// Positions of all live cells in row-major order
    pub fn alive_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width as usize;
        (0..self.cell_count())
            .filter(move |&i| bits::get(&self.cells, i))
            .map(move |i| Position::new((i / width) as u32, (i % width) as u32))
    }

    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<()> {
        let idx = self.checked(row, col)?.index(self.width);
        let alive = bits::get(&self.cells, idx);
        bits::set(&mut self.cells, idx, !alive);
        Ok(())
    }

    /// Mark the given `(row, col)` cells alive. Nothing is written if any is out of bounds.
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) -> Result<()> {
        let indices = cells
            .iter()
            .map(|&(row, col)| self.checked(row, col).map(|pos| pos.index(self.width)))
            .collect::<Result<Vec<_>>>()?;

        for idx in indices {
            bits::set(&mut self.cells, idx, true);
        }
        Ok(())
    }

    /// Stamp a predefined shape around `(row, col)`, overwriting its whole bounding box
    pub fn draw_shape(&mut self, shape: Shape, row: u32, col: u32) -> Result<()> {
        let anchor = self.checked(row, col)?;
        let pattern = shapes::pattern(shape);

        for (d_row, d_col, alive) in pattern.cells() {
            let pos = anchor.offset(d_row, d_col, self.width, self.height);
            bits::set(&mut self.cells, pos.index(self.width), alive);
        }

        debug!(?shape, row, col, "Drew shape");
        Ok(())
    }

    fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn checked(&self, row: u32, col: u32) -> Result<Position> {
        let pos = Position::new(row, col);
        if pos.in_bounds(self.width, self.height) {
            Ok(pos)
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Fallible zeroed buffer; an allocation failure becomes `None` instead of an abort
fn zeroed(len: usize) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).ok()?;
    buf.resize(len, 0);
    Some(buf)
}

/// Clones get a fresh entropy-seeded RNG so they do not replay the
/// original's `FiftyFifty` sequence.
impl Clone for Universe {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
            scratch: self.scratch.clone(),
            generation: self.generation,
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width as usize;
        for row in 0..self.height as usize {
            for col in 0..width {
                let symbol = if bits::get(&self.cells, row * width + col) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
