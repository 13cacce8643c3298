//! Items and item storage.
//!
//! Item *data* (content size, current frame, placement, drag flag) lives in
//! an [`ItemStore`] arena; grids own only ordered lists of [`ItemId`]s. The
//! id is the item's stable identity token — never an array index — which is
//! what makes moving an item between two grids a pure id transfer, and what
//! drag-end routing compares instead of object identity.

use driftgrid_core::{Point, Rect, Size};
use slotmap::{SlotMap, new_key_type};

use crate::position::{GridPosition, Placement};

new_key_type! {
    /// A unique, stable identifier for a grid item.
    ///
    /// Ids stay valid until the item is removed from its [`ItemStore`];
    /// reordering and cross-grid transfers never invalidate them.
    pub struct ItemId;
}

/// A movable rectangular content unit.
///
/// The item's visual construction (labels, borders, decorative sublayers) is
/// the host's business; the grid core tracks only the geometry and lifecycle
/// state it needs for layout and hit testing.
#[derive(Debug, Clone)]
pub struct GridItem {
    /// Content size. Width is uniform across a grid; height may vary.
    size: Size,
    /// Current frame origin in the owning grid's content coordinates.
    ///
    /// Tracks the canonical slot position at settled state; tracks the
    /// pointer while the item is being dragged.
    origin: Point,
    /// Current assigned grid position.
    placement: Placement,
    /// Whether the item is currently being dragged.
    dragging: bool,
    /// Whether the item is attached to the render tree (viewport culling).
    visible: bool,
}

impl GridItem {
    /// Create a new item with the given content size.
    ///
    /// The item is unplaced until a grid lays it out.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            origin: Point::ZERO,
            placement: Placement::Unplaced,
            dragging: false,
            visible: true,
        }
    }

    /// The item's content size.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The item's current frame origin in grid content coordinates.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Set the item's frame origin.
    pub(crate) fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// The item's current frame.
    #[inline]
    pub fn frame(&self) -> Rect {
        Rect {
            origin: self.origin,
            size: self.size,
        }
    }

    /// The item's current placement.
    #[inline]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The item's grid position, if placed.
    #[inline]
    pub fn position(&self) -> Option<GridPosition> {
        self.placement.position()
    }

    pub(crate) fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    /// Whether the item is currently being dragged.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Whether the item is attached to the render tree.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Storage access for item data.
///
/// Grids resolve [`ItemId`]s through this trait, so hosts that keep item
/// data in their own arenas can participate without copying. [`ItemStore`]
/// is the ready-made implementation.
pub trait ItemAccess {
    /// Get an item by id.
    fn item(&self, id: ItemId) -> Option<&GridItem>;

    /// Get a mutable item by id.
    fn item_mut(&mut self, id: ItemId) -> Option<&mut GridItem>;
}

/// An arena that owns item data.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: SlotMap<ItemId, GridItem>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            items: SlotMap::with_key(),
        }
    }

    /// Insert an item, returning its id.
    pub fn insert(&mut self, item: GridItem) -> ItemId {
        self.items.insert(item)
    }

    /// Remove an item, returning its data if it existed.
    ///
    /// The caller is responsible for detaching the id from any grid that
    /// still lists it.
    pub fn remove(&mut self, id: ItemId) -> Option<GridItem> {
        self.items.remove(id)
    }

    /// Whether the store contains the id.
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(id)
    }

    /// Number of items in the store.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all items.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &GridItem)> {
        self.items.iter()
    }
}

impl ItemAccess for ItemStore {
    fn item(&self, id: ItemId) -> Option<&GridItem> {
        self.items.get(id)
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut GridItem> {
        self.items.get_mut(id)
    }
}
