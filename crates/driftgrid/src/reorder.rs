//! The drag-to-reorder state machine.
//!
//! One [`ReorderController`] serves one grid. It consumes drag lifecycle
//! events (from [`DragRecognizer`](crate::gesture::DragRecognizer) or the
//! host's own recognition), keeps the dragged item under the pointer,
//! converts pointer positions into swap decisions against the layout
//! engine, and emits lifecycle signals.
//!
//! The machine has two states, `Idle` and `Dragging`; entering `Dragging`
//! is the only transition guarded against re-entry. `Ended`, `Cancelled`,
//! and `Failed` terminal events all run the identical exit transition:
//! clear the drag flag, revert emphasis, relayout so every item snaps to
//! its canonical slot, notify.
//!
//! Move events must be processed strictly in delivery order — each swap
//! mutates the sequence that the next move's hit test depends on.

use driftgrid_core::{Point, Signal};

use crate::events::{DragEndReason, DragEvent};
use crate::host::GridHost;
use crate::item::{ItemAccess, ItemId};
use crate::layout::GridLayout;
use crate::motion::Motion;
use crate::position::GridPosition;

/// Emphasis scale applied to the dragged item.
pub const DRAG_EMPHASIS_SCALE: f32 = 1.1;

/// Emphasis alpha applied to the dragged item.
pub const DRAG_EMPHASIS_ALPHA: f32 = 0.6;

/// Visual treatment of the dragged item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderStyle {
    /// Scale applied while dragging.
    pub scale: f32,
    /// Alpha applied while dragging.
    pub alpha: f32,
    /// Motion for applying and reverting the emphasis.
    pub motion: Motion,
}

impl Default for ReorderStyle {
    fn default() -> Self {
        Self {
            scale: DRAG_EMPHASIS_SCALE,
            alpha: DRAG_EMPHASIS_ALPHA,
            motion: Motion::snap(),
        }
    }
}

/// The controller's drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// An item is being dragged.
    Dragging {
        /// The dragged item.
        item: ItemId,
    },
}

/// Converts drag events for one grid into layout mutations and
/// notifications.
pub struct ReorderController {
    /// Current drag state.
    state: DragState,
    /// Visual emphasis configuration.
    style: ReorderStyle,
    /// Whether drag-move performs swap decisions.
    ///
    /// Two-grid arrangements typically disable this so their grids act as
    /// drag sources only.
    reorderable: bool,
    /// Whether the dragged item follows the pointer.
    draggable: bool,
    /// Emitted when an item enters drag mode.
    pub reorder_started: Signal<ItemId>,
    /// Emitted on every pointer move while dragging.
    pub item_dragged: Signal<ItemId>,
    /// Emitted when a drag terminates, whatever the reason.
    pub reorder_ended: Signal<ItemId>,
}

impl Default for ReorderController {
    fn default() -> Self {
        Self::new()
    }
}

impl ReorderController {
    /// Create a controller with the default style and policies.
    pub fn new() -> Self {
        Self::with_style(ReorderStyle::default())
    }

    /// Create a controller with a specific emphasis style.
    pub fn with_style(style: ReorderStyle) -> Self {
        Self {
            state: DragState::Idle,
            style,
            reorderable: true,
            draggable: true,
            reorder_started: Signal::new(),
            item_dragged: Signal::new(),
            reorder_ended: Signal::new(),
        }
    }

    /// The current drag state.
    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// The item currently being dragged, if any.
    pub fn dragging_item(&self) -> Option<ItemId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { item } => Some(item),
        }
    }

    /// Whether drag-move performs swap decisions.
    #[inline]
    pub fn is_reorderable(&self) -> bool {
        self.reorderable
    }

    /// Enable or disable swap decisions during drag-move.
    pub fn set_reorderable(&mut self, reorderable: bool) {
        self.reorderable = reorderable;
    }

    /// Whether the dragged item follows the pointer.
    #[inline]
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    /// Enable or disable pointer following.
    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    /// The emphasis style.
    #[inline]
    pub fn style(&self) -> ReorderStyle {
        self.style
    }

    /// Set the emphasis style.
    pub fn set_style(&mut self, style: ReorderStyle) {
        self.style = style;
    }

    /// Dispatch a drag event to the matching transition.
    ///
    /// Returns the dragged item's id when the event terminated a drag, so
    /// callers can run follow-up logic (e.g. the cross-grid containment
    /// test) for that item.
    pub fn handle_event<S: ItemAccess, H: GridHost>(
        &mut self,
        event: &DragEvent,
        grid: &mut GridLayout,
        store: &mut S,
        host: &mut H,
    ) -> Option<ItemId> {
        match event {
            DragEvent::Started { item } => {
                self.drag_started(*item, grid, store, host);
                None
            }
            DragEvent::Moved { position, .. } => {
                self.drag_moved(*position, grid, store, host);
                None
            }
            DragEvent::Ended { reason, .. } => self.drag_ended(*reason, grid, store, host),
        }
    }

    /// Enter the `Dragging` state for an item.
    ///
    /// Idempotent: ignored when a drag is already in progress. The item
    /// gets visual emphasis and is raised above its siblings.
    pub fn drag_started<S: ItemAccess, H: GridHost>(
        &mut self,
        item: ItemId,
        grid: &mut GridLayout,
        store: &mut S,
        host: &mut H,
    ) {
        if let DragState::Dragging { item: current } = self.state {
            tracing::debug!(?item, dragging = ?current, "drag start ignored, already dragging");
            return;
        }
        if !grid.contains(item) {
            tracing::warn!(?item, "drag start for an item this grid does not own");
            return;
        }

        if let Some(data) = store.item_mut(item) {
            data.set_dragging(true);
        }

        host.bring_to_front(item);
        host.set_emphasis(
            item,
            self.style.scale,
            self.style.alpha,
            Some(&self.style.motion),
        );

        self.state = DragState::Dragging { item };
        self.reorder_started.emit(item);
    }

    /// Process a pointer move while dragging.
    ///
    /// The dragged item's visual position tracks the pointer (decoupled
    /// from its grid slot); at most one swap is performed per move event.
    pub fn drag_moved<S: ItemAccess, H: GridHost>(
        &mut self,
        position: Point,
        grid: &mut GridLayout,
        store: &mut S,
        host: &mut H,
    ) {
        let DragState::Dragging { item } = self.state else {
            return;
        };

        if self.draggable {
            if let Some(data) = store.item_mut(item) {
                let size = data.size();
                let origin = Point::new(
                    position.x - size.width / 2.0,
                    position.y - size.height / 2.0,
                );
                data.set_origin(origin);
                host.place_item(item, origin, None);
            }
            self.item_dragged.emit(item);
        }

        if !self.reorderable || grid.is_empty() {
            return;
        }

        // Clamped candidate column: the pointer can wander past the last
        // column's right edge.
        let span = grid.item_width() + grid.horizontal_padding();
        let col = ((position.x.max(0.0) / span) as u32).min(grid.cols_in_row() - 1);

        // Scan occupied rows top to bottom, first containment match wins.
        // Proximity scanning would pick differently when the pointer sits
        // between items; the ascending order is kept deliberately since
        // changing it would alter observable drag behavior.
        let last_row = (grid.len() - 1) / grid.cols_in_row() as usize;
        for row in 0..=last_row {
            let candidate = GridPosition::new(col, row as u32);
            let Some(other) = grid.item_at(candidate) else {
                continue;
            };
            if other == item {
                continue;
            }
            let Some(frame) = store.item(other).map(|data| data.frame()) else {
                continue;
            };

            if frame.contains(position) {
                if let Err(err) = grid.insert_at(item, candidate, store, host) {
                    tracing::warn!(%err, ?item, %candidate, "swap rejected");
                }
                // At most one swap per move event; the next move re-scans
                // against the mutated order.
                break;
            }
        }
    }

    /// Exit the `Dragging` state.
    ///
    /// `Ended`, `Cancelled`, and `Failed` all take this same path: revert
    /// emphasis, snap every item to its canonical slot, notify. Returns the
    /// item that was dragging, or `None` when idle.
    pub fn drag_ended<S: ItemAccess, H: GridHost>(
        &mut self,
        reason: DragEndReason,
        grid: &mut GridLayout,
        store: &mut S,
        host: &mut H,
    ) -> Option<ItemId> {
        let DragState::Dragging { item } = self.state else {
            return None;
        };

        if let Some(data) = store.item_mut(item) {
            data.set_dragging(false);
        }

        host.set_emphasis(item, 1.0, 1.0, Some(&self.style.motion));
        grid.relayout(store, host);

        self.state = DragState::Idle;
        tracing::debug!(?item, ?reason, "drag ended");
        self.reorder_ended.emit(item);
        Some(item)
    }
}
