//! Helpers shared between puzzle solutions

pub mod combinatorics;
pub mod grid;
pub mod input;
pub mod math;
pub mod point;
pub mod search;

pub use grid::{Grid, GridError};
pub use point::{Direction, ParseDirectionError, Point};
