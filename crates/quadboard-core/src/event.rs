#![forbid(unsafe_code)]

//! Canonical UI event types.
//!
//! Rendering collaborators (the tree view and the grid view) reduce their
//! pointer and click handling to these discrete events; the model crate
//! consumes them through a single dispatcher. Everything derives `Clone`
//! and `PartialEq` for use in tests and pattern matching.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A discrete event emitted by a rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiEvent {
    /// A group row was clicked; flip its expansion.
    ToggleExpand(String),

    /// A leaf row started dragging; arms the drag source.
    DragStart(String),

    /// The armed drag was dropped on the grid container.
    Drop {
        /// Pointer position in client coordinates.
        pointer: Point,
        /// The container's bounding rectangle at drop time.
        bounds: Rect,
    },

    /// A placed item's close button was clicked.
    Remove(String),

    /// The grid view re-laid-out its items (resize, future interactive
    /// repositioning). Carries the authoritative positions.
    LayoutChanged(Vec<LayoutUpdate>),

    /// The export button was clicked.
    Export,
}

/// One item's position/size as reported by the grid view after a relayout.
///
/// Matched to placed items by `id`; unknown ids are ignored by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutUpdate {
    pub id: String,
    pub x: u8,
    pub y: u8,
    pub w: u8,
    pub h: u8,
}

impl LayoutUpdate {
    /// Create a layout update for a unit-sized item.
    #[must_use]
    pub fn unit(id: impl Into<String>, x: u8, y: u8) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w: 1,
            h: 1,
        }
    }
}
