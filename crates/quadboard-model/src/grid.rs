#![forbid(unsafe_code)]

//! The placed-item grid: an insertion-ordered list of quadrant-bound items.
//!
//! Order carries no layout meaning (the quadrant coordinates do) but is
//! preserved as placement order. All operations return a new `Grid`;
//! callers replace their old value with the result.

use quadboard_core::event::LayoutUpdate;
use quadboard_core::quadrant::{GRID_CAPACITY, Quadrant};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A component placed on the grid.
///
/// `id` refers back to the leaf node it was placed from; `label` is the
/// node's name copied at placement time. Items are unit-sized on the 2×2
/// grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridItem {
    pub id: String,
    pub label: String,
    pub x: u8,
    pub y: u8,
    pub w: u8,
    pub h: u8,
}

impl GridItem {
    /// Create a unit-sized item bound to a quadrant.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, quadrant: Quadrant) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x: quadrant.x,
            y: quadrant.y,
            w: 1,
            h: 1,
        }
    }

    /// The quadrant this item currently occupies.
    #[must_use]
    pub fn quadrant(&self) -> Quadrant {
        Quadrant::new(self.x, self.y)
    }
}

/// The grid state: placed items in placement order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid {
    items: Vec<GridItem>,
}

impl Grid {
    /// An empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The placed items, in placement order.
    #[must_use]
    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the grid is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= GRID_CAPACITY
    }

    /// Whether an item with this id is already placed.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Whether a quadrant already holds an item.
    #[must_use]
    pub fn is_occupied(&self, quadrant: Quadrant) -> bool {
        self.items
            .iter()
            .any(|item| item.x == quadrant.x && item.y == quadrant.y)
    }

    /// A new grid with `item` appended.
    ///
    /// Precondition checks live in [`crate::placement::try_place`]; this
    /// is the raw append.
    #[must_use]
    pub(crate) fn with_item(&self, item: GridItem) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// A new grid with the first item matching `id` excluded.
    ///
    /// No-op (value-equal grid) if the id is absent. The freed quadrant
    /// and capacity slot become available to later placements.
    #[must_use]
    pub fn remove(&self, id: &str) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| item.id != id)
                .cloned()
                .collect(),
        }
    }

    /// A new grid with positions overwritten from a relayout report.
    ///
    /// Each item with a matching update (by id) takes the update's
    /// x/y/w/h; items without one pass through unchanged. Order is
    /// preserved and the id set never changes; updates for unknown ids
    /// are ignored.
    #[must_use]
    pub fn reconcile(&self, updates: &[LayoutUpdate]) -> Self {
        let by_id: FxHashMap<&str, &LayoutUpdate> = updates
            .iter()
            .map(|update| (update.id.as_str(), update))
            .collect();

        Self {
            items: self
                .items
                .iter()
                .map(|item| match by_id.get(item.id.as_str()) {
                    Some(update) => GridItem {
                        id: item.id.clone(),
                        label: item.label.clone(),
                        x: update.x,
                        y: update.y,
                        w: update.w,
                        h: update.h,
                    },
                    None => item.clone(),
                })
                .collect(),
        }
    }
}
