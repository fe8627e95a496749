//! Core type definitions for the universe.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seeding policy applied by `Universe::init`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CreationStrategy {
    /// Every cell dead
    AllDead,
    /// Every cell independently alive with probability 0.5
    FiftyFifty,
    /// Cell `i` alive when `i` is a multiple of 2 or 7
    Deterministic,
}

impl CreationStrategy {
    /// Integer code used across the host boundary
    pub fn code(&self) -> u32 {
        match self {
            CreationStrategy::AllDead => 0,
            CreationStrategy::FiftyFifty => 1,
            CreationStrategy::Deterministic => 2,
        }
    }

    pub fn all() -> [CreationStrategy; 3] {
        [
            CreationStrategy::AllDead,
            CreationStrategy::FiftyFifty,
            CreationStrategy::Deterministic,
        ]
    }
}

impl TryFrom<u32> for CreationStrategy {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CreationStrategy::AllDead),
            1 => Ok(CreationStrategy::FiftyFifty),
            2 => Ok(CreationStrategy::Deterministic),
            other => Err(Error::InvalidStrategy(format!("unknown code {other}"))),
        }
    }
}

impl FromStr for CreationStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all-dead" | "alldead" | "empty" => Ok(CreationStrategy::AllDead),
            "fifty-fifty" | "fiftyfifty" | "random" => Ok(CreationStrategy::FiftyFifty),
            "deterministic" => Ok(CreationStrategy::Deterministic),
            other => Err(Error::InvalidStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for CreationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CreationStrategy::AllDead => "all-dead",
            CreationStrategy::FiftyFifty => "fifty-fifty",
            CreationStrategy::Deterministic => "deterministic",
        };
        f.write_str(name)
    }
}

/// Predefined patterns that can be stamped onto a universe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    Glider,
    Spaceship,
    Pulsar,
}

impl Shape {
    pub fn all() -> [Shape; 3] {
        [Shape::Glider, Shape::Spaceship, Shape::Pulsar]
    }
}

/// Cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Move by a signed delta with toroidal wrapping for given dimensions
    pub fn offset(&self, d_row: i32, d_col: i32, width: u32, height: u32) -> Self {
        let row = (self.row as i64 + d_row as i64).rem_euclid(height as i64);
        let col = (self.col as i64 + d_col as i64).rem_euclid(width as i64);
        Self {
            row: row as u32,
            col: col as u32,
        }
    }

    /// Row-major bit index of this position
    pub fn index(&self, width: u32) -> usize {
        self.row as usize * width as usize + self.col as usize
    }

    pub fn in_bounds(&self, width: u32, height: u32) -> bool {
        self.row < height && self.col < width
    }
}
