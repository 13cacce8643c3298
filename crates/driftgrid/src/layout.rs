//! The grid layout engine.
//!
//! `GridLayout` owns an ordered collection of item ids and maps it onto a
//! 2D grid: the column count and horizontal padding are derived from the
//! container width and the uniform item width, and every structural change
//! (append, insert, remove, reorder) triggers a full [`relayout`] that
//! re-derives each item's position from its index.
//!
//! Recomputing the whole layout on every change trades efficiency for
//! correctness simplicity: the row-major invariant is re-derived from
//! scratch each time, so there are no cached row/column counters that could
//! drift out of sync with the real order.
//!
//! # Coordinate spaces
//!
//! Item frames and pointer locations are in *content* coordinates (origin at
//! the top-left of the scrollable content). The grid's [`geometry`] places
//! it in *window* coordinates; [`to_window`] bridges the two for cross-grid
//! containment tests.
//!
//! [`relayout`]: GridLayout::relayout
//! [`geometry`]: GridLayout::geometry
//! [`to_window`]: GridLayout::to_window

use driftgrid_core::{Point, Rect};

use crate::error::{LayoutError, Result};
use crate::host::GridHost;
use crate::item::{ItemAccess, ItemId};
use crate::motion::Motion;
use crate::position::{GridPosition, Placement};

/// Default vertical padding between rows, in pixels.
pub const DEFAULT_VERTICAL_PADDING: f32 = 10.0;

/// A scrollable grid that arranges fixed-width items into rows and columns.
///
/// The order of `items` IS the layout: an item's grid position is always
/// `(index % cols_in_row, index / cols_in_row)`, derived fresh on every
/// relayout. At any settled (non-dragging) state, every item's visual
/// position equals the pixel position implied by its derived grid position;
/// during a drag the dragged item's visual position tracks the pointer while
/// its sequence position keeps driving swap decisions.
#[derive(Debug)]
pub struct GridLayout {
    /// Item ids in canonical row-major order.
    items: Vec<ItemId>,
    /// The grid's bounds in window coordinates.
    geometry: Rect,
    /// Uniform item width.
    item_width: f32,
    /// Vertical padding between rows.
    vertical_padding: f32,
    /// Derived horizontal padding between columns.
    horizontal_padding: f32,
    /// Derived number of columns. Always >= 1.
    cols_in_row: u32,
    /// Derived total content height.
    content_height: f32,
    /// Current scroll offset of the viewport into the content.
    scroll_offset: Point,
    /// Motion attached to settle placements.
    motion: Motion,
}

impl GridLayout {
    /// Create a grid with the given window-space bounds and item width.
    ///
    /// Fails with [`LayoutError::InvalidLayout`] when the container cannot
    /// fit a single column.
    pub fn new(geometry: Rect, item_width: f32, vertical_padding: f32) -> Result<Self> {
        let (cols_in_row, horizontal_padding) = derive_columns(geometry.width(), item_width)?;

        Ok(Self {
            items: Vec::new(),
            geometry,
            item_width,
            vertical_padding,
            horizontal_padding,
            cols_in_row,
            content_height: 0.0,
            scroll_offset: Point::ZERO,
            motion: Motion::snap(),
        })
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Reconfigure the item width and vertical padding.
    ///
    /// Recomputes `cols_in_row` and `horizontal_padding` from the current
    /// container width. On failure the previous configuration is retained
    /// and the error surfaced, so the host can decide how to react rather
    /// than rendering with corrupt column math.
    pub fn configure(&mut self, item_width: f32, vertical_padding: f32) -> Result<()> {
        match derive_columns(self.geometry.width(), item_width) {
            Ok((cols_in_row, horizontal_padding)) => {
                self.item_width = item_width;
                self.vertical_padding = vertical_padding;
                self.cols_in_row = cols_in_row;
                self.horizontal_padding = horizontal_padding;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "rejected grid configuration");
                Err(err)
            }
        }
    }

    /// Move/resize the grid within its window (resize, orientation change).
    ///
    /// On failure (the new width cannot fit one column) the previous
    /// geometry and configuration are retained. Call [`Self::relayout`]
    /// afterwards to re-flow items into the new width.
    pub fn set_geometry(&mut self, geometry: Rect) -> Result<()> {
        match derive_columns(geometry.width(), self.item_width) {
            Ok((cols_in_row, horizontal_padding)) => {
                self.geometry = geometry;
                self.cols_in_row = cols_in_row;
                self.horizontal_padding = horizontal_padding;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "rejected grid geometry");
                Err(err)
            }
        }
    }

    /// The grid's bounds in window coordinates.
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Number of columns per row. Always at least 1.
    #[inline]
    pub fn cols_in_row(&self) -> u32 {
        self.cols_in_row
    }

    /// The uniform item width.
    #[inline]
    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    /// Derived horizontal padding between columns.
    #[inline]
    pub fn horizontal_padding(&self) -> f32 {
        self.horizontal_padding
    }

    /// Vertical padding between rows.
    #[inline]
    pub fn vertical_padding(&self) -> f32 {
        self.vertical_padding
    }

    /// Total height of the laid-out content.
    #[inline]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// The motion attached to settle placements.
    #[inline]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Set the motion attached to settle placements.
    pub fn set_motion(&mut self, motion: Motion) {
        self.motion = motion;
    }

    // =========================================================================
    // Item Collection
    // =========================================================================

    /// Number of items in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the grid holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item ids in canonical row-major order.
    #[inline]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// The sequence index of an item, if this grid owns it.
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|&other| other == id)
    }

    /// Whether this grid owns the item.
    #[inline]
    pub fn contains(&self, id: ItemId) -> bool {
        self.index_of(id).is_some()
    }

    /// The item occupying `position`, or `None` if the implied linear index
    /// is out of bounds.
    ///
    /// This is the query used pervasively during drag hit-testing; it never
    /// fails on out-of-range input.
    pub fn item_at(&self, position: GridPosition) -> Option<ItemId> {
        let index = position.linear_index(self.cols_in_row);
        self.items.get(index).copied()
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Re-derive every item's grid position from its sequence index and
    /// request visual placement for each.
    ///
    /// Deterministic and idempotent: calling it twice in a row produces
    /// identical pixel positions. Safe on an empty grid (no-op, content
    /// height 0). The currently dragged item, if any, gets its logical
    /// placement updated but is not moved visually — it is tracking the
    /// pointer.
    pub fn relayout<S: ItemAccess, H: GridHost>(&mut self, store: &mut S, host: &mut H) {
        tracing::trace!(
            items = self.items.len(),
            cols = self.cols_in_row,
            "relayout"
        );

        // Slot origins computed this pass, by sequence index. The y of each
        // slot comes from the slot above it, so this must not read visual
        // frames: the dragged item's frame tracks the pointer.
        let mut slot_origins: Vec<Point> = Vec::with_capacity(self.items.len());
        let mut content_height = 0.0_f32;

        for (index, &id) in self.items.iter().enumerate() {
            let position = GridPosition::from_linear_index(index, self.cols_in_row);

            let x = position.col as f32 * (self.item_width + self.horizontal_padding);
            let y = match position.up() {
                Some(above) => {
                    let above_index = above.linear_index(self.cols_in_row);
                    let above_height = self
                        .items
                        .get(above_index)
                        .and_then(|&above_id| store.item(above_id))
                        .map(|item| item.size().height)
                        .unwrap_or(0.0);
                    slot_origins[above_index].y + above_height + self.vertical_padding
                }
                None => 0.0,
            };

            let origin = Point::new(x, y);
            slot_origins.push(origin);

            let Some(item) = store.item_mut(id) else {
                tracing::warn!(?id, "item missing from store during relayout");
                continue;
            };

            item.set_placement(Placement::At(position));
            content_height =
                content_height.max(origin.y + item.size().height + self.vertical_padding);

            if item.is_dragging() {
                // Visual position is decoupled while the item tracks the
                // pointer; it snaps on drag end when the flag is cleared.
                continue;
            }

            item.set_origin(origin);
            host.place_item(id, origin, Some(&self.motion));
        }

        self.content_height = if self.items.is_empty() {
            0.0
        } else {
            content_height
        };
    }

    /// The pixel position implied by a grid position.
    ///
    /// `x` depends only on the column; `y` is the bottom edge of the item
    /// directly above plus the vertical padding (0 for the first row), which
    /// is what lets row height follow the tallest item when heights vary.
    /// Valid at settled state, where items are placed in row-major order so
    /// the item above is always already placed.
    pub fn position_to_pixel<S: ItemAccess>(&self, position: GridPosition, store: &S) -> Point {
        let x = position.col as f32 * (self.item_width + self.horizontal_padding);
        let y = position
            .up()
            .and_then(|above| self.item_at(above))
            .and_then(|above_id| store.item(above_id))
            .map(|above| above.frame().bottom() + self.vertical_padding)
            .unwrap_or(0.0);

        Point::new(x, y)
    }

    // =========================================================================
    // Structural Changes
    // =========================================================================

    /// Add an item to the end of the grid.
    pub fn append<S: ItemAccess, H: GridHost>(&mut self, id: ItemId, store: &mut S, host: &mut H) {
        if self.contains(id) {
            tracing::warn!(?id, "item is already in this grid");
            return;
        }

        self.attach(id, store, host);
        self.items.push(id);
        self.relayout(store, host);
    }

    /// Add an item at a grid position, clamping to the end when the implied
    /// index is beyond the current item count.
    ///
    /// This is the additive counterpart of [`Self::insert_at`]: adding "at
    /// row 3" of a two-row grid is a reasonable request that lands the item
    /// at the end, whereas a reorder to a non-existent slot is a logic error
    /// and is rejected.
    pub fn add_at<S: ItemAccess, H: GridHost>(
        &mut self,
        id: ItemId,
        position: GridPosition,
        store: &mut S,
        host: &mut H,
    ) {
        if self.contains(id) {
            tracing::warn!(?id, "item is already in this grid");
            return;
        }

        let index = position.linear_index(self.cols_in_row).min(self.items.len());
        self.attach(id, store, host);
        self.items.insert(index, id);
        self.relayout(store, host);
    }

    /// Move an owned item to the slot at `position` (reorder path).
    ///
    /// No-op when the item already occupies `position`. Fails with
    /// [`LayoutError::IndexOutOfRange`] when the implied linear index has no
    /// slot, leaving the order unchanged.
    pub fn insert_at<S: ItemAccess, H: GridHost>(
        &mut self,
        id: ItemId,
        position: GridPosition,
        store: &mut S,
        host: &mut H,
    ) -> Result<()> {
        let current = store.item(id).and_then(|item| item.position());
        if current == Some(position) {
            return Ok(());
        }

        let Some(from) = self.index_of(id) else {
            tracing::warn!(?id, "insert_at on an item this grid does not own");
            return Ok(());
        };

        let to = position.linear_index(self.cols_in_row);
        if to >= self.items.len() {
            return Err(LayoutError::index_out_of_range(to, self.items.len()));
        }

        self.items.remove(from);
        self.items.insert(to, id);
        tracing::debug!(?id, %position, from, to, "reordered item");

        self.relayout(store, host);
        Ok(())
    }

    /// Remove the item occupying `position`.
    ///
    /// Returns `None` without failing when the position is unoccupied —
    /// an expected condition, not an error.
    pub fn remove_at<S: ItemAccess, H: GridHost>(
        &mut self,
        position: GridPosition,
        store: &mut S,
        host: &mut H,
    ) -> Option<ItemId> {
        let id = self.item_at(position)?;
        let index = position.linear_index(self.cols_in_row);

        self.items.remove(index);
        self.detach(id, store, host);
        self.relayout(store, host);
        Some(id)
    }

    /// Remove an item by identity.
    ///
    /// Returns `false` when this grid does not own the item.
    pub fn remove_item<S: ItemAccess, H: GridHost>(
        &mut self,
        id: ItemId,
        store: &mut S,
        host: &mut H,
    ) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::warn!(?id, "item is not in this grid");
            return false;
        };

        self.items.remove(index);
        self.detach(id, store, host);
        self.relayout(store, host);
        true
    }

    /// Attach an item joining this grid to the render tree.
    fn attach<S: ItemAccess, H: GridHost>(&self, id: ItemId, store: &mut S, host: &mut H) {
        if let Some(item) = store.item_mut(id) {
            item.set_visible(true);
        }
        host.show_item(id);
    }

    /// Detach an item leaving this grid from layout and render tree.
    fn detach<S: ItemAccess, H: GridHost>(&self, id: ItemId, store: &mut S, host: &mut H) {
        if let Some(item) = store.item_mut(id) {
            item.set_placement(Placement::Unplaced);
            item.set_visible(false);
        }
        host.hide_item(id);
    }

    // =========================================================================
    // Scrolling & Visibility
    // =========================================================================

    /// Current scroll offset of the viewport into the content.
    #[inline]
    pub fn scroll_offset(&self) -> Point {
        self.scroll_offset
    }

    /// The visible window in content coordinates.
    pub fn viewport(&self) -> Rect {
        Rect {
            origin: self.scroll_offset,
            size: self.geometry.size,
        }
    }

    /// Update the scroll offset and re-evaluate which items should be
    /// attached to the render tree.
    pub fn set_scroll_offset<S: ItemAccess, H: GridHost>(
        &mut self,
        offset: Point,
        store: &mut S,
        host: &mut H,
    ) {
        self.scroll_offset = offset;
        self.sync_visibility(store, host);
    }

    /// Attach items intersecting the viewport and detach the rest.
    ///
    /// Re-shown items are placed at their current frame first, so they
    /// re-attach at their latest grid position rather than wherever they
    /// were when they scrolled out. The dragged item is never culled.
    pub fn sync_visibility<S: ItemAccess, H: GridHost>(&self, store: &mut S, host: &mut H) {
        let viewport = self.viewport();

        for &id in &self.items {
            let Some(item) = store.item(id) else {
                continue;
            };
            if item.is_dragging() {
                continue;
            }

            let in_view = item.frame().intersects(&viewport);
            if in_view == item.is_visible() {
                continue;
            }

            if in_view {
                let origin = item.origin();
                if let Some(item) = store.item_mut(id) {
                    item.set_visible(true);
                }
                host.place_item(id, origin, None);
                host.show_item(id);
            } else {
                if let Some(item) = store.item_mut(id) {
                    item.set_visible(false);
                }
                host.hide_item(id);
            }
        }
    }

    // =========================================================================
    // Coordinate Conversion
    // =========================================================================

    /// Convert a content-space point to window coordinates.
    #[inline]
    pub fn to_window(&self, point: Point) -> Point {
        Point::new(
            self.geometry.origin.x + point.x - self.scroll_offset.x,
            self.geometry.origin.y + point.y - self.scroll_offset.y,
        )
    }

    /// The grid's bounds in window coordinates.
    ///
    /// Used by the cross-grid containment test.
    #[inline]
    pub fn window_bounds(&self) -> Rect {
        self.geometry
    }
}

/// Derive the column count and horizontal padding for a container width.
///
/// The padding divisor is guarded: a single-column grid has no inter-column
/// gaps, so its padding is 0 rather than a division by zero.
fn derive_columns(container_width: f32, item_width: f32) -> Result<(u32, f32)> {
    if item_width <= 0.0 || container_width < item_width {
        return Err(LayoutError::invalid_layout(container_width, item_width));
    }

    let cols = (container_width / item_width).floor() as u32;
    debug_assert!(cols >= 1);

    let horizontal_padding = if cols > 1 {
        (container_width - cols as f32 * item_width) / (cols - 1) as f32
    } else {
        0.0
    };

    Ok((cols, horizontal_padding))
}
