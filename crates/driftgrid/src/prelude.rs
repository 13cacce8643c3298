//! Prelude module for driftgrid.
//!
//! Re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use driftgrid::prelude::*;
//! ```

// ============================================================================
// Layout Engine
// ============================================================================

pub use crate::error::{LayoutError, Result};
pub use crate::layout::GridLayout;
pub use crate::position::{GridPosition, Placement};

// ============================================================================
// Items
// ============================================================================

pub use crate::item::{GridItem, ItemAccess, ItemId, ItemStore};

// ============================================================================
// Drag & Reorder
// ============================================================================

pub use crate::cross_grid::{CrossGridCoordinator, Transfer};
pub use crate::events::{DragEndReason, DragEvent, TouchPhase};
pub use crate::gesture::{DragRecognizer, GestureConfig};
pub use crate::reorder::{DragState, ReorderController, ReorderStyle};

// ============================================================================
// Host Contract & Motion
// ============================================================================

pub use crate::host::GridHost;
pub use crate::motion::{Easing, Motion};

// ============================================================================
// Geometry & Signals (from driftgrid-core)
// ============================================================================

pub use driftgrid_core::{ConnectionId, Point, Rect, Signal, Size};
