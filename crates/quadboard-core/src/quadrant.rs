#![forbid(unsafe_code)]

//! Quadrant arithmetic for the fixed 2×2 grid.
//!
//! The drop container is padded on every side; the padded interior is
//! split into two equal halves per axis. A drop pointer resolves to a
//! quadrant by integer division on each axis, clamped into range so a
//! drop anywhere in (or slightly outside) the container still lands in a
//! valid cell.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Number of grid columns.
pub const GRID_COLS: u8 = 2;

/// Number of grid rows.
pub const GRID_ROWS: u8 = 2;

/// Maximum number of placed items (rows × cols).
pub const GRID_CAPACITY: usize = (GRID_COLS as usize) * (GRID_ROWS as usize);

/// Padding inside the drop container, in pixels.
///
/// Must match the rendering side; the quadrant math subtracts it from
/// both axes before dividing.
pub const CONTAINER_PADDING: f64 = 16.0;

/// Gap between grid cells, in pixels.
pub const GRID_GAP: f64 = 16.0;

/// Height reserved above the grid for the toolbar row, in pixels.
pub const TOOLBAR_HEIGHT: f64 = 80.0;

/// One of the four fixed grid cells.
///
/// `x` is the column and `y` the row, both in `{0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quadrant {
    pub x: u8,
    pub y: u8,
}

impl Quadrant {
    /// Create a quadrant, clamping each axis into `{0, 1}`.
    #[must_use]
    pub fn new(x: u8, y: u8) -> Self {
        Self {
            x: x.min(GRID_COLS - 1),
            y: y.min(GRID_ROWS - 1),
        }
    }

    /// The 1-based quadrant number used by the export body.
    ///
    /// Reading order: top-left is 1, top-right 2, bottom-left 3,
    /// bottom-right 4.
    #[inline]
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.y * GRID_COLS + self.x + 1
    }

    /// Resolve a drop pointer to a quadrant.
    ///
    /// `pointer` is in client coordinates and `bounds` is the drop
    /// container's bounding rectangle. The pointer is translated into the
    /// container's local space, the padding is subtracted, and each axis
    /// is divided by half the padded interior extent. The result is
    /// clamped per axis, so this is total: any pointer, including one
    /// outside the container or over a degenerate (zero-interior)
    /// container, resolves to a valid quadrant.
    #[must_use]
    pub fn from_pointer(pointer: Point, bounds: Rect, padding: f64) -> Self {
        let local = bounds.to_local(pointer);
        Self {
            x: Self::axis(local.x, bounds.width, padding),
            y: Self::axis(local.y, bounds.height, padding),
        }
    }

    fn axis(local: f64, extent: f64, padding: f64) -> u8 {
        let half = (extent - 2.0 * padding) / 2.0;
        if half <= 0.0 {
            return 0;
        }
        // Saturating f64 -> u8 cast turns NaN into 0, keeping this total.
        ((local - padding) / half).floor().clamp(0.0, 1.0) as u8
    }
}

impl From<Quadrant> for (u8, u8) {
    fn from(q: Quadrant) -> Self {
        (q.x, q.y)
    }
}

/// Derived sizing for the grid container.
///
/// The rendering collaborator reports raw container dimensions; this
/// computes the extents the grid actually occupies. Kept alongside the
/// quadrant math so the two cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridMetrics {
    /// Container width minus horizontal padding.
    pub available_width: f64,
    /// Height of the square-ish grid region.
    pub grid_height: f64,
    /// Height of one grid row.
    pub row_height: f64,
}

impl GridMetrics {
    /// Compute metrics from raw container dimensions.
    ///
    /// The toolbar row is reserved above the grid; the grid height is
    /// capped at 3:4 of the available width so cells stay close to
    /// landscape cards. All extents floor at zero for tiny containers.
    #[must_use]
    pub fn from_container(width: f64, height: f64) -> Self {
        let available_width = (width - 2.0 * CONTAINER_PADDING).max(0.0);
        let available_height = (height - TOOLBAR_HEIGHT).max(0.0);
        let grid_height = available_height.min(available_width * 0.75);
        let row_height = ((grid_height - GRID_GAP) / 2.0).floor().max(0.0);
        Self {
            available_width,
            grid_height,
            row_height,
        }
    }
}
