#![forbid(unsafe_code)]

//! State model for the Quadboard layout builder.
//!
//! Three pieces, leaves first: the component tree ([`tree`]), the placed-
//! item grid ([`grid`]), and the placement engine that mediates between
//! them ([`placement`]). The [`app`] module ties them into an Elm-style
//! `App`/`Msg`/`Cmd` dispatcher so the whole core can be driven, and
//! tested, without any rendering surface.
//!
//! Every operation is synchronous and total: invalid input (unknown ids,
//! rejected drops) produces "no state change", never a panic.

pub mod app;
pub mod grid;
pub mod placement;
pub mod tree;

pub use app::{App, Cmd, Msg};
pub use quadboard_core::event::LayoutUpdate;
pub use quadboard_core::quadrant::Quadrant;
pub use grid::{Grid, GridItem};
pub use placement::{PlacementError, try_place};
pub use tree::{ComponentNode, find_node, toggle_expansion};
