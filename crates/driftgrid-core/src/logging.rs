//! Logging facilities for driftgrid.
//!
//! driftgrid uses the `tracing` crate for instrumentation. To see logs, you
//! need to install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Events are emitted with the default target (the emitting module's path),
//! so filter directives follow the module layout. The constants in
//! [`targets`] document the targets each subsystem uses; for example, to see
//! layout passes and swap decisions but nothing else:
//!
//! ```ignore
//! RUST_LOG=driftgrid::layout=trace,driftgrid::reorder=debug
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Foundation crate target.
    pub const CORE: &str = "driftgrid_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "driftgrid_core::signal";
    /// Grid layout engine target (relayout passes, configuration).
    pub const LAYOUT: &str = "driftgrid::layout";
    /// Reorder controller target (drag lifecycle, swap decisions).
    pub const REORDER: &str = "driftgrid::reorder";
    /// Drag gesture recognition target.
    pub const GESTURE: &str = "driftgrid::gesture";
    /// Cross-grid transfer target.
    pub const CROSS_GRID: &str = "driftgrid::cross_grid";
}
