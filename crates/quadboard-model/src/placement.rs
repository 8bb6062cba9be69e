#![forbid(unsafe_code)]

//! The placement engine: validated drops onto the 2×2 grid.
//!
//! Placement is permissive by policy: an invalid drop is rejected with a
//! typed reason and the caller keeps its old state. Nothing here panics
//! and nothing is surfaced to the user; the dispatcher logs the reason at
//! debug level and moves on.

use crate::grid::{Grid, GridItem};
use crate::tree::{ComponentNode, find_node};
use quadboard_core::quadrant::Quadrant;
use std::fmt;

/// Why a drop was rejected.
///
/// Ordered by the precondition sequence in [`try_place`]; the first
/// failing check wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The grid already holds its maximum of four items.
    CapacityFull,
    /// The dropped id does not exist in the catalog.
    UnknownComponent(String),
    /// The dropped id is a group; only leaves are placeable.
    GroupNotPlaceable(String),
    /// This leaf is already placed somewhere on the grid.
    AlreadyPlaced(String),
    /// The target quadrant already holds an item.
    QuadrantOccupied(Quadrant),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityFull => write!(f, "grid is at capacity"),
            Self::UnknownComponent(id) => write!(f, "unknown component id {id:?}"),
            Self::GroupNotPlaceable(id) => write!(f, "component {id:?} is a group, not a leaf"),
            Self::AlreadyPlaced(id) => write!(f, "component {id:?} is already placed"),
            Self::QuadrantOccupied(q) => {
                write!(f, "quadrant {} is already occupied", q.number())
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Try to place a leaf component onto a quadrant.
///
/// Preconditions, checked in order and short-circuiting on the first
/// failure:
///
/// 1. the grid is not at capacity;
/// 2. `id` resolves to a catalog node and that node is a leaf;
/// 3. the leaf is not already placed;
/// 4. the quadrant is free.
///
/// On success returns a new grid with the item appended (placement order
/// is preserved as insertion order); the inputs are never mutated. On
/// rejection the caller's state is simply kept.
pub fn try_place(
    forest: &[ComponentNode],
    grid: &Grid,
    id: &str,
    quadrant: Quadrant,
) -> Result<Grid, PlacementError> {
    if grid.is_full() {
        return Err(PlacementError::CapacityFull);
    }

    let node =
        find_node(forest, id).ok_or_else(|| PlacementError::UnknownComponent(id.to_string()))?;
    if !node.is_leaf() {
        return Err(PlacementError::GroupNotPlaceable(id.to_string()));
    }

    if grid.contains(id) {
        return Err(PlacementError::AlreadyPlaced(id.to_string()));
    }
    if grid.is_occupied(quadrant) {
        return Err(PlacementError::QuadrantOccupied(quadrant));
    }

    Ok(grid.with_item(GridItem::new(id, node.name(), quadrant)))
}
