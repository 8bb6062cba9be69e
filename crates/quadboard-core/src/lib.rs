#![forbid(unsafe_code)]

//! Core primitives for the Quadboard layout builder.
//!
//! This crate holds everything the model and the rendering collaborators
//! must agree on: pixel-space geometry, the fixed 2×2 quadrant arithmetic
//! with its reference layout constants, and the canonical UI event enum.
//! It performs no I/O and owns no state.

pub mod event;
pub mod geometry;
pub mod quadrant;

pub use event::{LayoutUpdate, UiEvent};
pub use geometry::{Point, Rect, Sides};
pub use quadrant::{
    CONTAINER_PADDING, GRID_CAPACITY, GRID_COLS, GRID_GAP, GRID_ROWS, GridMetrics, Quadrant,
};
