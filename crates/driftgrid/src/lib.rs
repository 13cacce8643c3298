//! driftgrid - a reorderable, scrollable grid layout engine for touch
//! interfaces.
//!
//! driftgrid arranges fixed-width items into rows and columns, re-flows
//! them on every structural change, and turns live drag gestures into
//! reorder operations — including dragging items between two grids. It is
//! headless by design: rendering, animation, and platform input stay on the
//! host side of the [`GridHost`] trait.
//!
//! # Architecture
//!
//! - [`GridLayout`] owns the canonical item order and derives every grid
//!   position from it. Structural changes trigger a full relayout.
//! - [`ItemStore`] owns item data; grids and controllers refer to items by
//!   stable [`ItemId`]s.
//! - [`DragRecognizer`] converts raw touch samples into drag lifecycle
//!   events (long-press or double-tap to enter drag mode).
//! - [`ReorderController`] runs the per-grid drag state machine: pointer
//!   following, swap decisions, emphasis, lifecycle signals.
//! - [`CrossGridCoordinator`] hands items between two grids when a drag
//!   ends over the other one.
//!
//! # Example
//!
//! ```
//! use driftgrid::prelude::*;
//!
//! struct Headless;
//!
//! impl GridHost for Headless {
//!     fn place_item(&mut self, _: ItemId, _: Point, _: Option<&Motion>) {}
//!     fn set_emphasis(&mut self, _: ItemId, _: f32, _: f32, _: Option<&Motion>) {}
//!     fn bring_to_front(&mut self, _: ItemId) {}
//!     fn show_item(&mut self, _: ItemId) {}
//!     fn hide_item(&mut self, _: ItemId) {}
//! }
//!
//! fn main() -> Result<()> {
//!     let mut grid = GridLayout::new(Rect::new(0.0, 0.0, 375.0, 600.0), 150.0, 10.0)?;
//!     let mut store = ItemStore::new();
//!     let mut host = Headless;
//!
//!     let item = store.insert(GridItem::new(Size::new(150.0, 100.0)));
//!     grid.append(item, &mut store, &mut host);
//!
//!     assert_eq!(grid.cols_in_row(), 2);
//!     Ok(())
//! }
//! ```

pub mod cross_grid;
pub mod error;
pub mod events;
pub mod gesture;
pub mod host;
pub mod item;
pub mod layout;
pub mod motion;
pub mod position;
pub mod prelude;
pub mod reorder;

pub use cross_grid::{CrossGridCoordinator, Transfer};
pub use error::{LayoutError, Result};
pub use events::{DragEndReason, DragEvent, TouchPhase};
pub use gesture::{DragRecognizer, GestureConfig};
pub use host::GridHost;
pub use item::{GridItem, ItemAccess, ItemId, ItemStore};
pub use layout::GridLayout;
pub use motion::{Easing, Motion};
pub use position::{GridPosition, Placement};
pub use reorder::{DragState, ReorderController, ReorderStyle};
