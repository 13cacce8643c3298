//! Error types for the grid layout engine.

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors that can occur in the layout engine.
///
/// "Not found" conditions (querying or removing an unoccupied position) are
/// expected during hit testing and are reported as `Option::None` by the
/// relevant operations, never as an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The container is too narrow to fit a single column of items.
    ///
    /// The engine keeps its previous valid configuration when this is
    /// returned, so the host can decide how to react instead of rendering
    /// with corrupt column math.
    #[error(
        "container width {container_width} cannot fit one column of item width {item_width}"
    )]
    InvalidLayout {
        container_width: f32,
        item_width: f32,
    },

    /// An insert or remove targeted a linear index beyond the collection.
    ///
    /// The operation is rejected and the collection left unchanged.
    #[error("linear index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

impl LayoutError {
    /// Create an invalid-layout error.
    pub fn invalid_layout(container_width: f32, item_width: f32) -> Self {
        Self::InvalidLayout {
            container_width,
            item_width,
        }
    }

    /// Create an index-out-of-range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
