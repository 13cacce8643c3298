//! Ownership transfer between two grids.
//!
//! In the two-grid arrangement (a "staging" grid and a "selected items"
//! grid), dropping an item inside the other grid's bounds moves it there.
//! The containment test runs exactly once, after the terminal drag event —
//! never during drag-move, which would thrash ownership back and forth
//! mid-gesture.
//!
//! An item belongs to exactly one grid's ordered collection at any moment;
//! the transfer is remove-then-append, so there is no window in which both
//! grids list it.

use driftgrid_core::{Point, Signal};

use crate::host::GridHost;
use crate::item::{ItemAccess, ItemId};
use crate::layout::GridLayout;

/// The outcome of a drag-end containment check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// The item settled back into its source grid.
    Stayed,
    /// The item moved to the target grid.
    Moved,
}

/// Relocates items between two grids when a drag ends over the other one.
pub struct CrossGridCoordinator {
    /// Emitted with the item's id after a successful transfer.
    pub item_transferred: Signal<ItemId>,
}

impl Default for CrossGridCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossGridCoordinator {
    /// Create a coordinator.
    pub fn new() -> Self {
        Self {
            item_transferred: Signal::new(),
        }
    }

    /// Run the containment check for a drag that just ended.
    ///
    /// `location` is the final pointer position in `source`'s content
    /// coordinates — while an item is dragged its center rides the pointer,
    /// so this is the item's center at release. If that point falls inside
    /// `target`'s window bounds the item changes owner; otherwise `source`
    /// is re-laid-out so the item settles home.
    ///
    /// Call this after the reorder controller has processed the terminal
    /// drag event. The two grids are necessarily distinct (`&mut` aliasing
    /// rules), so the "target is not the source" guard holds by
    /// construction.
    pub fn handle_drag_end<S: ItemAccess, H: GridHost>(
        &self,
        item: ItemId,
        location: Point,
        source: &mut GridLayout,
        target: &mut GridLayout,
        store: &mut S,
        host: &mut H,
    ) -> Transfer {
        let window_point = source.to_window(location);

        if !target.window_bounds().contains(window_point) {
            source.relayout(store, host);
            return Transfer::Stayed;
        }

        if !source.remove_item(item, store, host) {
            tracing::warn!(?item, "transfer aborted, source does not own item");
            return Transfer::Stayed;
        }
        target.append(item, store, host);

        tracing::debug!(?item, "item transferred between grids");
        self.item_transferred.emit(item);
        Transfer::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use driftgrid_core::{Rect, Size};

    use crate::events::DragEndReason;
    use crate::item::{GridItem, ItemStore};
    use crate::motion::Motion;
    use crate::position::GridPosition;
    use crate::reorder::ReorderController;

    #[derive(Default)]
    struct NullHost;

    impl GridHost for NullHost {
        fn place_item(&mut self, _item: ItemId, _position: Point, _motion: Option<&Motion>) {}
        fn set_emphasis(&mut self, _item: ItemId, _scale: f32, _alpha: f32, _motion: Option<&Motion>) {}
        fn bring_to_front(&mut self, _item: ItemId) {}
        fn show_item(&mut self, _item: ItemId) {}
        fn hide_item(&mut self, _item: ItemId) {}
    }

    /// Two grids side by side in the window, five items in the left one.
    fn two_grids() -> (GridLayout, GridLayout, ItemStore, NullHost, Vec<ItemId>) {
        let mut left = GridLayout::new(Rect::new(0.0, 0.0, 375.0, 600.0), 150.0, 10.0).unwrap();
        let right = GridLayout::new(Rect::new(400.0, 0.0, 375.0, 600.0), 150.0, 10.0).unwrap();
        let mut store = ItemStore::new();
        let mut host = NullHost;

        let ids: Vec<ItemId> = (0..5)
            .map(|_| {
                let id = store.insert(GridItem::new(Size::new(150.0, 100.0)));
                left.append(id, &mut store, &mut host);
                id
            })
            .collect();

        (left, right, store, host, ids)
    }

    #[test]
    fn test_drop_inside_target_transfers() {
        let (mut left, mut right, mut store, mut host, ids) = two_grids();
        let coordinator = CrossGridCoordinator::new();

        let transfers = Arc::new(AtomicUsize::new(0));
        let transfers_clone = transfers.clone();
        coordinator.item_transferred.connect(move |_| {
            transfers_clone.fetch_add(1, Ordering::SeqCst);
        });

        // Pointer released at x=500 in left-grid content coordinates, which
        // is inside the right grid's window bounds.
        let outcome = coordinator.handle_drag_end(
            ids[2],
            Point::new(500.0, 50.0),
            &mut left,
            &mut right,
            &mut store,
            &mut host,
        );

        assert_eq!(outcome, Transfer::Moved);
        assert_eq!(transfers.load(Ordering::SeqCst), 1);
        assert_eq!(left.len(), 4);
        assert_eq!(right.len(), 1);

        // The item is in exactly one collection.
        assert!(!left.contains(ids[2]));
        assert!(right.contains(ids[2]));

        // The source re-flowed with no gaps...
        assert_eq!(
            store.item(ids[3]).unwrap().position(),
            Some(GridPosition::new(0, 1))
        );
        // ...and the moved item landed at the end of the target.
        assert_eq!(
            store.item(ids[2]).unwrap().position(),
            Some(GridPosition::new(0, 0))
        );
    }

    #[test]
    fn test_drop_outside_target_settles_home() {
        let (mut left, mut right, mut store, mut host, ids) = two_grids();
        let coordinator = CrossGridCoordinator::new();

        let outcome = coordinator.handle_drag_end(
            ids[2],
            Point::new(100.0, 50.0),
            &mut left,
            &mut right,
            &mut store,
            &mut host,
        );

        assert_eq!(outcome, Transfer::Stayed);
        assert_eq!(left.len(), 5);
        assert_eq!(right.len(), 0);
        assert!(left.contains(ids[2]));
    }

    #[test]
    fn test_scroll_offset_shifts_containment() {
        let (mut left, mut right, mut store, mut host, ids) = two_grids();
        let coordinator = CrossGridCoordinator::new();

        // Scrolled content: a content-space point maps to a window point
        // shifted back by the scroll offset.
        left.set_scroll_offset(Point::new(160.0, 0.0), &mut store, &mut host);

        // Content x=500 is window x=340: still over the source.
        let outcome = coordinator.handle_drag_end(
            ids[0],
            Point::new(500.0, 50.0),
            &mut left,
            &mut right,
            &mut store,
            &mut host,
        );
        assert_eq!(outcome, Transfer::Stayed);

        // Content x=600 is window x=440: over the target.
        let outcome = coordinator.handle_drag_end(
            ids[0],
            Point::new(600.0, 50.0),
            &mut left,
            &mut right,
            &mut store,
            &mut host,
        );
        assert_eq!(outcome, Transfer::Moved);
    }

    #[test]
    fn test_full_drag_into_other_grid() {
        let (mut left, mut right, mut store, mut host, ids) = two_grids();
        let coordinator = CrossGridCoordinator::new();

        // Two-grid arrangements use their grids as drag sources only.
        let mut controller = ReorderController::new();
        controller.set_reorderable(false);

        controller.drag_started(ids[4], &mut left, &mut store, &mut host);
        controller.drag_moved(Point::new(450.0, 80.0), &mut left, &mut store, &mut host);
        let drop = Point::new(520.0, 80.0);
        controller.drag_moved(drop, &mut left, &mut store, &mut host);

        let finished =
            controller.drag_ended(DragEndReason::Ended, &mut left, &mut store, &mut host);
        assert_eq!(finished, Some(ids[4]));

        let outcome = coordinator.handle_drag_end(
            ids[4],
            drop,
            &mut left,
            &mut right,
            &mut store,
            &mut host,
        );

        assert_eq!(outcome, Transfer::Moved);
        assert_eq!(left.len(), 4);
        assert_eq!(right.items(), [ids[4]]);
        assert!(!store.item(ids[4]).unwrap().is_dragging());
        assert!(store.item(ids[4]).unwrap().is_visible());
    }
}
