//! Conway's Game of Life on a fixed-size grid without wraparound.

pub mod cell;
pub mod display;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod pos;

pub use cell::Cell;
pub use display::DisplayMode;
pub use engine::{GameOfLife, GridView};
pub use error::{Error, Result};
pub use pattern::{GridCodec, PlainText};
pub use pos::{Offset, Pos};
