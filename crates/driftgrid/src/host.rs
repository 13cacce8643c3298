//! The rendering/placement collaborator contract.
//!
//! The grid core computes *where* things go and *when* they change; the host
//! owns views, transforms, and animations. Engine and controller methods
//! take a `&mut impl GridHost` and request side effects through it, the same
//! way layout calculation elsewhere in this workspace goes through storage
//! traits rather than touching views directly.
//!
//! All requests are fire-and-forget: the core never waits for an animation
//! to finish, and a host callback that fires after a transition completes
//! must re-read current grid state rather than closing over the state it
//! captured when the transition began.

use driftgrid_core::Point;

use crate::item::ItemId;
use crate::motion::Motion;

/// Side effects the grid core requests of its host.
pub trait GridHost {
    /// Move an item's view to `position` (grid content coordinates).
    ///
    /// `motion` is `Some` when the change should animate (settling into a
    /// slot) and `None` when it should apply immediately (tracking the
    /// pointer mid-drag).
    fn place_item(&mut self, item: ItemId, position: Point, motion: Option<&Motion>);

    /// Apply visual emphasis to an item (drag started/ended).
    ///
    /// `scale`/`alpha` of `1.0` mean "no emphasis"; the reorder controller
    /// requests that to revert.
    fn set_emphasis(&mut self, item: ItemId, scale: f32, alpha: f32, motion: Option<&Motion>);

    /// Raise the item above its siblings for the duration of a drag.
    fn bring_to_front(&mut self, item: ItemId);

    /// Attach the item to the render tree (it entered the viewport).
    fn show_item(&mut self, item: ItemId);

    /// Detach the item from the render tree (it left the viewport).
    fn hide_item(&mut self, item: ItemId);
}
