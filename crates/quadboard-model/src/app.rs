#![forbid(unsafe_code)]

//! Elm-style application state and dispatcher.
//!
//! [`App`] owns the catalog forest, the grid, and the in-flight drag
//! source; [`App::update`] is the single entry point through which every
//! UI event flows. Each transition replaces whole values produced by the
//! pure functions in [`crate::tree`], [`crate::grid`], and
//! [`crate::placement`], so the dispatcher itself carries no logic beyond
//! routing and logging.

use crate::grid::Grid;
use crate::placement::try_place;
use crate::tree::{ComponentNode, demo_catalog, find_node, toggle_expansion};
use quadboard_core::event::{LayoutUpdate, UiEvent};
use quadboard_core::geometry::{Point, Rect};
use quadboard_core::quadrant::{CONTAINER_PADDING, Quadrant};
use tracing::{debug, trace};

/// Messages consumed by the dispatcher.
///
/// One variant per discrete UI action; rendering collaborators produce
/// these via the `From<UiEvent>` impl.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Flip a group's expansion.
    ToggleExpand(String),
    /// Arm a leaf as the drag source.
    DragStart(String),
    /// The armed drag was dropped on the grid container.
    Drop { pointer: Point, bounds: Rect },
    /// Remove a placed item.
    Remove(String),
    /// Overwrite item positions from a relayout report.
    LayoutChanged(Vec<LayoutUpdate>),
    /// Request a layout export.
    Export,
}

impl From<UiEvent> for Msg {
    fn from(event: UiEvent) -> Self {
        match event {
            UiEvent::ToggleExpand(id) => Self::ToggleExpand(id),
            UiEvent::DragStart(id) => Self::DragStart(id),
            UiEvent::Drop { pointer, bounds } => Self::Drop { pointer, bounds },
            UiEvent::Remove(id) => Self::Remove(id),
            UiEvent::LayoutChanged(updates) => Self::LayoutChanged(updates),
            UiEvent::Export => Self::Export,
        }
    }
}

/// Side effects requested by the dispatcher.
///
/// The shell executes these; the model never performs I/O itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// No side effect.
    None,
    /// Build and send the export request from the current grid.
    Export,
}

/// The application state: catalog, grid, and the armed drag source.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    catalog: Vec<ComponentNode>,
    grid: Grid,
    drag: Option<String>,
}

impl App {
    /// Create an app over the given catalog with an empty grid.
    #[must_use]
    pub fn new(catalog: Vec<ComponentNode>) -> Self {
        Self {
            catalog,
            grid: Grid::new(),
            drag: None,
        }
    }

    /// Create an app seeded with the demo catalog.
    #[must_use]
    pub fn with_demo_catalog() -> Self {
        Self::new(demo_catalog())
    }

    /// The catalog forest.
    #[must_use]
    pub fn catalog(&self) -> &[ComponentNode] {
        &self.catalog
    }

    /// The current grid state.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The currently armed drag source, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<&str> {
        self.drag.as_deref()
    }

    /// Apply one message and return the requested side effect.
    ///
    /// Invalid input never fails loudly: unknown ids and rejected drops
    /// leave the state unchanged and are logged at debug level.
    pub fn update(&mut self, msg: Msg) -> Cmd {
        match msg {
            Msg::ToggleExpand(id) => {
                self.catalog = toggle_expansion(&self.catalog, &id);
                Cmd::None
            }
            Msg::DragStart(id) => {
                // Only leaves are draggable; a group row arms nothing.
                match find_node(&self.catalog, &id) {
                    Some(node) if node.is_leaf() => {
                        trace!(%id, "drag armed");
                        self.drag = Some(id);
                    }
                    _ => {
                        debug!(%id, "drag start ignored: not a placeable leaf");
                        self.drag = None;
                    }
                }
                Cmd::None
            }
            Msg::Drop { pointer, bounds } => {
                // The drag ends whether or not the placement succeeds.
                let Some(id) = self.drag.take() else {
                    debug!("drop ignored: no armed drag");
                    return Cmd::None;
                };
                let quadrant = Quadrant::from_pointer(pointer, bounds, CONTAINER_PADDING);
                match try_place(&self.catalog, &self.grid, &id, quadrant) {
                    Ok(grid) => {
                        trace!(%id, quadrant = quadrant.number(), "placed");
                        self.grid = grid;
                    }
                    Err(reason) => debug!(%id, %reason, "drop rejected"),
                }
                Cmd::None
            }
            Msg::Remove(id) => {
                self.grid = self.grid.remove(&id);
                Cmd::None
            }
            Msg::LayoutChanged(updates) => {
                self.grid = self.grid.reconcile(&updates);
                Cmd::None
            }
            Msg::Export => {
                if self.grid.is_empty() {
                    debug!("export ignored: nothing placed");
                    Cmd::None
                } else {
                    Cmd::Export
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_demo_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_routes_to_the_tree() {
        let mut app = App::with_demo_catalog();
        assert!(app.catalog()[0].is_expanded());
        assert_eq!(app.update(Msg::ToggleExpand("1".into())), Cmd::None);
        assert!(!app.catalog()[0].is_expanded());
    }

    #[test]
    fn drag_start_arms_only_leaves() {
        let mut app = App::with_demo_catalog();

        app.update(Msg::DragStart("1-1".into()));
        assert_eq!(app.dragging(), Some("1-1"));

        app.update(Msg::DragStart("1".into()));
        assert_eq!(app.dragging(), None);

        app.update(Msg::DragStart("missing".into()));
        assert_eq!(app.dragging(), None);
    }

    #[test]
    fn drop_without_armed_drag_is_noop() {
        let mut app = App::with_demo_catalog();
        app.update(Msg::Drop {
            pointer: Point::new(50.0, 50.0),
            bounds: Rect::from_size(400.0, 400.0),
        });
        assert!(app.grid().is_empty());
    }

    #[test]
    fn drop_disarms_even_on_rejection() {
        let mut app = App::with_demo_catalog();
        let bounds = Rect::from_size(432.0, 432.0);

        app.update(Msg::DragStart("1-1".into()));
        app.update(Msg::Drop {
            pointer: Point::new(50.0, 50.0),
            bounds,
        });
        assert_eq!(app.grid().len(), 1);

        // Same cell again with a different leaf: rejected, drag cleared.
        app.update(Msg::DragStart("1-2".into()));
        app.update(Msg::Drop {
            pointer: Point::new(50.0, 50.0),
            bounds,
        });
        assert_eq!(app.grid().len(), 1);
        assert_eq!(app.dragging(), None);
    }

    #[test]
    fn remove_and_layout_changed_route_to_the_grid() {
        let mut app = App::with_demo_catalog();
        let bounds = Rect::from_size(432.0, 432.0);

        app.update(Msg::DragStart("3-1".into()));
        app.update(Msg::Drop {
            pointer: Point::new(400.0, 50.0),
            bounds,
        });
        assert_eq!(app.grid().items()[0].quadrant(), Quadrant::new(1, 0));

        app.update(Msg::LayoutChanged(vec![LayoutUpdate::unit("3-1", 0, 1)]));
        assert_eq!(app.grid().items()[0].quadrant(), Quadrant::new(0, 1));

        app.update(Msg::Remove("3-1".into()));
        assert!(app.grid().is_empty());
    }

    #[test]
    fn export_cmd_only_when_something_is_placed() {
        let mut app = App::with_demo_catalog();
        assert_eq!(app.update(Msg::Export), Cmd::None);

        app.update(Msg::DragStart("1-1".into()));
        app.update(Msg::Drop {
            pointer: Point::new(50.0, 50.0),
            bounds: Rect::from_size(432.0, 432.0),
        });
        assert_eq!(app.update(Msg::Export), Cmd::Export);
    }

    #[test]
    fn msg_from_ui_event_covers_all_variants() {
        let events = vec![
            UiEvent::ToggleExpand("1".into()),
            UiEvent::DragStart("1-1".into()),
            UiEvent::Drop {
                pointer: Point::new(0.0, 0.0),
                bounds: Rect::from_size(1.0, 1.0),
            },
            UiEvent::Remove("1-1".into()),
            UiEvent::LayoutChanged(Vec::new()),
            UiEvent::Export,
        ];
        let msgs: Vec<Msg> = events.into_iter().map(Msg::from).collect();
        assert!(matches!(msgs[0], Msg::ToggleExpand(_)));
        assert!(matches!(msgs[5], Msg::Export));
    }
}
