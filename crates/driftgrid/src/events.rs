//! Touch and drag event types.
//!
//! Raw touch input arrives as [`TouchPhase`] samples and is converted by the
//! drag recognizer into [`DragEvent`]s, which drive the reorder controller's
//! state machine. Hosts that run their own gesture recognition can skip the
//! recognizer and feed the controller directly.

use driftgrid_core::Point;

use crate::item::ItemId;

/// The phase of a raw touch sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger touched down.
    Began,
    /// The finger moved.
    Moved,
    /// The finger lifted normally.
    Ended,
    /// The platform cancelled the touch (incoming call, gesture conflict).
    Cancelled,
}

/// Why a drag terminated.
///
/// All three reasons route through the same controller transition: the item
/// reverts its emphasis, every item snaps to its canonical slot, and the
/// "reorder ended" notification fires. The reason is carried for hosts that
/// want to distinguish them (e.g. analytics or haptics).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEndReason {
    /// The pointer was released normally.
    Ended,
    /// The platform cancelled the gesture.
    Cancelled,
    /// Gesture recognition lost track of the touch.
    Failed,
}

/// A drag lifecycle event for one item.
///
/// Positions are in the owning grid's content coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The item entered drag mode.
    Started {
        /// The dragged item.
        item: ItemId,
    },
    /// The pointer moved while the item was in drag mode.
    Moved {
        /// The dragged item.
        item: ItemId,
        /// Current pointer position.
        position: Point,
    },
    /// The drag terminated.
    Ended {
        /// The dragged item.
        item: ItemId,
        /// Pointer position at termination.
        position: Point,
        /// Why the drag terminated.
        reason: DragEndReason,
    },
}

impl DragEvent {
    /// The item this event concerns.
    pub fn item(&self) -> ItemId {
        match self {
            Self::Started { item }
            | Self::Moved { item, .. }
            | Self::Ended { item, .. } => *item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_drag_event_item() {
        let mut keys: SlotMap<ItemId, ()> = SlotMap::with_key();
        let id = keys.insert(());

        let started = DragEvent::Started { item: id };
        let moved = DragEvent::Moved {
            item: id,
            position: Point::new(1.0, 2.0),
        };
        let ended = DragEvent::Ended {
            item: id,
            position: Point::ZERO,
            reason: DragEndReason::Cancelled,
        };

        assert_eq!(started.item(), id);
        assert_eq!(moved.item(), id);
        assert_eq!(ended.item(), id);
    }
}
