//! Foundation types for driftgrid.
//!
//! This crate provides the pieces of driftgrid that are independent of any
//! particular grid:
//!
//! - **Geometry**: [`Point`], [`Size`], and [`Rect`] value types used for
//!   item frames, viewports, and hit testing
//! - **Signal/Slot System**: Type-safe lifecycle notifications between the
//!   grid core and its host
//! - **Logging**: Documentation of the `tracing` targets used across the
//!   workspace
//!
//! # Signal Example
//!
//! ```
//! use driftgrid_core::Signal;
//!
//! // Create a signal that notifies when an item settles
//! let item_settled = Signal::<u64>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = item_settled.connect(|&item| {
//!     println!("Item {item} settled");
//! });
//!
//! // Emit the signal
//! item_settled.emit(7);
//!
//! // Disconnect when done
//! item_settled.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;
pub mod types;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use types::{Point, Rect, Size};
