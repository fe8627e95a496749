//! Universe engine.
//!
//! This module implements the fixed-size toroidal grid on which Conway's
//! Game of Life (B3/S23) runs, stored one bit per cell.

pub mod bits;
pub mod shapes;
pub mod universe;
pub mod ffi;

pub use universe::Universe;
