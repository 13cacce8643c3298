//! Drag gesture recognition from raw touch input.
//!
//! [`DragRecognizer`] converts single-touch samples into [`DragEvent`]s:
//! holding an item past the long-press timeout enters drag mode, a
//! double-tap toggles it, and touch movement while in drag mode produces
//! move events. Hosts with platform gesture recognizers of their own can
//! bypass this module and drive the reorder controller directly.
//!
//! # Usage
//!
//! ```ignore
//! use driftgrid::gesture::DragRecognizer;
//!
//! let mut recognizer = DragRecognizer::new();
//!
//! // Feed touch samples to the recognizer
//! let events = recognizer.touch(item, phase, position, timestamp);
//!
//! for event in events {
//!     controller.handle_event(&event, &mut grid, &mut store, &mut host);
//! }
//! ```
//!
//! Timestamps are supplied by the caller (platforms deliver them with each
//! input sample), which keeps recognition deterministic. For a touch that
//! rests motionless, call [`DragRecognizer::check_long_press`] periodically
//! — no sample arrives to observe the timeout otherwise.

use std::time::{Duration, Instant};

use driftgrid_core::Point;

use crate::events::{DragEndReason, DragEvent, TouchPhase};
use crate::item::ItemId;

/// Default long-press timeout in milliseconds.
///
/// A touch must be held for at least this duration to enter drag mode.
pub const DEFAULT_LONG_PRESS_TIMEOUT_MS: u64 = 500;

/// Default double-tap timeout in milliseconds.
///
/// Two taps must occur within this duration to toggle drag mode.
pub const DEFAULT_DOUBLE_TAP_TIMEOUT_MS: u64 = 300;

/// Default tap timeout in milliseconds.
///
/// A tap must complete within this duration to count toward a double-tap.
pub const DEFAULT_TAP_TIMEOUT_MS: u64 = 300;

/// Default maximum movement for a tap/long-press in pixels.
///
/// Movement beyond this threshold cancels tap and long-press recognition.
pub const DEFAULT_TAP_SLOP: f32 = 10.0;

/// Configuration for drag recognition.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Duration a touch must be held to enter drag mode.
    pub long_press_timeout: Duration,
    /// Maximum duration between taps for a double-tap toggle.
    pub double_tap_timeout: Duration,
    /// Maximum duration of a single tap.
    pub tap_timeout: Duration,
    /// Maximum movement allowed for a tap or long-press.
    pub tap_slop: f32,
    /// Whether the host must suppress simultaneous recognition (e.g. the
    /// container's scroll gesture) while a drag is live.
    ///
    /// This is a policy the external gesture surface consumes; the
    /// recognizer itself is single-touch either way.
    pub exclusive: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press_timeout: Duration::from_millis(DEFAULT_LONG_PRESS_TIMEOUT_MS),
            double_tap_timeout: Duration::from_millis(DEFAULT_DOUBLE_TAP_TIMEOUT_MS),
            tap_timeout: Duration::from_millis(DEFAULT_TAP_TIMEOUT_MS),
            tap_slop: DEFAULT_TAP_SLOP,
            exclusive: true,
        }
    }
}

/// Internal state for the tracked touch.
#[derive(Debug, Clone)]
struct TouchTrack {
    /// The item the touch went down on.
    item: ItemId,
    /// Where the touch started, in grid content coordinates.
    start_position: Point,
    /// When the touch started.
    start_time: Instant,
    /// Whether the touch has moved beyond the tap slop.
    moved_beyond_slop: bool,
    /// Whether this touch's long-press entered drag mode.
    started_drag: bool,
    /// Whether this touch moved while drag mode was active.
    panned: bool,
}

/// State for double-tap detection.
#[derive(Debug, Clone)]
struct TapTrack {
    /// The item that was tapped.
    item: ItemId,
    /// Where the tap landed.
    position: Point,
    /// When the tap completed.
    time: Instant,
}

/// Recognizes drag lifecycle events from single-touch input.
#[derive(Debug, Default)]
pub struct DragRecognizer {
    /// Configuration.
    config: GestureConfig,
    /// The touch currently being tracked, if any.
    touch: Option<TouchTrack>,
    /// The last completed tap, for double-tap detection.
    last_tap: Option<TapTrack>,
    /// The item currently in drag mode, if any.
    drag_item: Option<ItemId>,
}

impl DragRecognizer {
    /// Create a recognizer with default configuration.
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    /// Create a recognizer with the given configuration.
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            touch: None,
            last_tap: None,
            drag_item: None,
        }
    }

    /// The recognizer's configuration.
    #[inline]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The item currently in drag mode, if any.
    #[inline]
    pub fn drag_item(&self) -> Option<ItemId> {
        self.drag_item
    }

    /// Process a touch sample for an item and return any recognized events.
    pub fn touch(
        &mut self,
        item: ItemId,
        phase: TouchPhase,
        position: Point,
        now: Instant,
    ) -> Vec<DragEvent> {
        match phase {
            TouchPhase::Began => self.handle_began(item, position, now),
            TouchPhase::Moved => self.handle_moved(item, position, now),
            TouchPhase::Ended => self.handle_ended(item, position, now),
            TouchPhase::Cancelled => self.handle_cancelled(position),
        }
    }

    /// Check whether the tracked touch has crossed the long-press timeout.
    ///
    /// Call periodically (e.g. on a frame tick) while a touch is down; a
    /// motionless touch produces no samples, so the timeout cannot be
    /// observed from [`Self::touch`] alone.
    pub fn check_long_press(&mut self, now: Instant) -> Option<DragEvent> {
        if self.drag_item.is_some() {
            return None;
        }
        let track = self.touch.as_mut()?;
        if track.moved_beyond_slop {
            return None;
        }
        if now.duration_since(track.start_time) < self.config.long_press_timeout {
            return None;
        }

        track.started_drag = true;
        self.drag_item = Some(track.item);
        tracing::debug!(item = ?track.item, "long-press entered drag mode");
        Some(DragEvent::Started { item: track.item })
    }

    fn handle_began(&mut self, item: ItemId, position: Point, now: Instant) -> Vec<DragEvent> {
        let mut events = Vec::new();

        // Single-touch surface: a second touch while one is live means the
        // platform lost us an end sample. Fail any drag that touch carried.
        if let Some(stale) = self.touch.take()
            && (stale.started_drag || stale.panned)
            && let Some(drag_item) = self.drag_item.take()
        {
            tracing::warn!(item = ?drag_item, "touch track lost, failing drag");
            events.push(DragEvent::Ended {
                item: drag_item,
                position,
                reason: DragEndReason::Failed,
            });
        }

        self.touch = Some(TouchTrack {
            item,
            start_position: position,
            start_time: now,
            moved_beyond_slop: false,
            started_drag: false,
            panned: false,
        });

        events
    }

    fn handle_moved(&mut self, item: ItemId, position: Point, now: Instant) -> Vec<DragEvent> {
        let long_press_timeout = self.config.long_press_timeout;
        let tap_slop = self.config.tap_slop;
        let drag_item = self.drag_item;

        let Some(track) = self.touch.as_mut() else {
            return Vec::new();
        };
        if track.item != item {
            return Vec::new();
        }

        if !track.moved_beyond_slop
            && track.start_position.distance_to(position) > tap_slop
        {
            track.moved_beyond_slop = true;
        }

        // Pointer movement while the item is in drag mode drives the
        // reorder controller.
        if drag_item == Some(item) {
            track.panned = true;
            return vec![DragEvent::Moved { item, position }];
        }

        // A touch held past the timeout without drifting enters drag mode.
        if drag_item.is_none()
            && !track.moved_beyond_slop
            && now.duration_since(track.start_time) >= long_press_timeout
        {
            track.started_drag = true;
            self.drag_item = Some(item);
            tracing::debug!(?item, "long-press entered drag mode");
            return vec![DragEvent::Started { item }];
        }

        Vec::new()
    }

    fn handle_ended(&mut self, item: ItemId, position: Point, now: Instant) -> Vec<DragEvent> {
        let Some(track) = self.touch.take() else {
            return Vec::new();
        };

        // A drag carried by this touch (entered via long-press, or panned
        // after a double-tap toggle) ends with the touch.
        if self.drag_item == Some(track.item) && (track.started_drag || track.panned) {
            self.drag_item = None;
            self.last_tap = None;
            return vec![DragEvent::Ended {
                item: track.item,
                position,
                reason: DragEndReason::Ended,
            }];
        }

        // Tap bookkeeping for the double-tap toggle.
        if track.moved_beyond_slop
            || now.duration_since(track.start_time) >= self.config.tap_timeout
        {
            return Vec::new();
        }

        let is_double_tap = self.last_tap.as_ref().is_some_and(|last| {
            last.item == item
                && now.duration_since(last.time) <= self.config.double_tap_timeout
                && last.position.distance_to(position) <= self.config.tap_slop
        });

        if !is_double_tap {
            self.last_tap = Some(TapTrack {
                item,
                position,
                time: now,
            });
            return Vec::new();
        }

        self.last_tap = None;
        match self.drag_item {
            // Double-tap while this item is in drag mode toggles it off.
            Some(dragging) if dragging == item => {
                self.drag_item = None;
                tracing::debug!(?item, "double-tap left drag mode");
                vec![DragEvent::Ended {
                    item,
                    position,
                    reason: DragEndReason::Ended,
                }]
            }
            // Another item is mid-drag; don't steal the gesture.
            Some(_) => Vec::new(),
            // Double-tap enters drag mode. The next touch pans the item.
            None => {
                self.drag_item = Some(item);
                tracing::debug!(?item, "double-tap entered drag mode");
                vec![DragEvent::Started { item }]
            }
        }
    }

    fn handle_cancelled(&mut self, position: Point) -> Vec<DragEvent> {
        let Some(track) = self.touch.take() else {
            return Vec::new();
        };

        if self.drag_item == Some(track.item) && (track.started_drag || track.panned) {
            self.drag_item = None;
            self.last_tap = None;
            return vec![DragEvent::Ended {
                item: track.item,
                position,
                reason: DragEndReason::Cancelled,
            }];
        }

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn item_ids(count: usize) -> Vec<ItemId> {
        let mut keys: SlotMap<ItemId, ()> = SlotMap::with_key();
        (0..count).map(|_| keys.insert(())).collect()
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_long_press_starts_drag() {
        let mut recognizer = DragRecognizer::new();
        let item = item_ids(1)[0];
        let t0 = Instant::now();

        let events = recognizer.touch(item, TouchPhase::Began, Point::new(10.0, 10.0), t0);
        assert!(events.is_empty());

        // Still short of the timeout.
        assert_eq!(recognizer.check_long_press(t0 + ms(300)), None);

        let started = recognizer.check_long_press(t0 + ms(600));
        assert_eq!(started, Some(DragEvent::Started { item }));
        assert_eq!(recognizer.drag_item(), Some(item));

        // Idempotent once drag mode is active.
        assert_eq!(recognizer.check_long_press(t0 + ms(700)), None);
    }

    #[test]
    fn test_long_press_observed_from_move_sample() {
        let mut recognizer = DragRecognizer::new();
        let item = item_ids(1)[0];
        let t0 = Instant::now();

        recognizer.touch(item, TouchPhase::Began, Point::new(10.0, 10.0), t0);

        // A small drift within slop after the timeout still starts the drag.
        let events = recognizer.touch(item, TouchPhase::Moved, Point::new(12.0, 10.0), t0 + ms(600));
        assert_eq!(events, vec![DragEvent::Started { item }]);

        // Subsequent movement pans.
        let events = recognizer.touch(item, TouchPhase::Moved, Point::new(40.0, 60.0), t0 + ms(650));
        assert_eq!(
            events,
            vec![DragEvent::Moved {
                item,
                position: Point::new(40.0, 60.0)
            }]
        );
    }

    #[test]
    fn test_movement_beyond_slop_cancels_long_press() {
        let mut recognizer = DragRecognizer::new();
        let item = item_ids(1)[0];
        let t0 = Instant::now();

        recognizer.touch(item, TouchPhase::Began, Point::new(10.0, 10.0), t0);
        // Scroll-like movement before the timeout.
        let events = recognizer.touch(item, TouchPhase::Moved, Point::new(10.0, 80.0), t0 + ms(100));
        assert!(events.is_empty());

        // The touch is now a scroll, never a drag.
        assert_eq!(recognizer.check_long_press(t0 + ms(900)), None);
        let events = recognizer.touch(item, TouchPhase::Ended, Point::new(10.0, 120.0), t0 + ms(950));
        assert!(events.is_empty());
    }

    #[test]
    fn test_double_tap_toggles_drag_mode() {
        let mut recognizer = DragRecognizer::new();
        let item = item_ids(1)[0];
        let t0 = Instant::now();
        let at = Point::new(10.0, 10.0);

        // First tap.
        recognizer.touch(item, TouchPhase::Began, at, t0);
        let events = recognizer.touch(item, TouchPhase::Ended, at, t0 + ms(50));
        assert!(events.is_empty());

        // Second tap within the double-tap window enters drag mode.
        recognizer.touch(item, TouchPhase::Began, at, t0 + ms(150));
        let events = recognizer.touch(item, TouchPhase::Ended, at, t0 + ms(200));
        assert_eq!(events, vec![DragEvent::Started { item }]);
        assert_eq!(recognizer.drag_item(), Some(item));

        // A further double-tap toggles back out.
        recognizer.touch(item, TouchPhase::Began, at, t0 + ms(600));
        let events = recognizer.touch(item, TouchPhase::Ended, at, t0 + ms(650));
        assert!(events.is_empty());
        recognizer.touch(item, TouchPhase::Began, at, t0 + ms(750));
        let events = recognizer.touch(item, TouchPhase::Ended, at, t0 + ms(800));
        assert_eq!(
            events,
            vec![DragEvent::Ended {
                item,
                position: at,
                reason: DragEndReason::Ended,
            }]
        );
        assert_eq!(recognizer.drag_item(), None);
    }

    #[test]
    fn test_slow_taps_do_not_toggle() {
        let mut recognizer = DragRecognizer::new();
        let item = item_ids(1)[0];
        let t0 = Instant::now();
        let at = Point::new(10.0, 10.0);

        recognizer.touch(item, TouchPhase::Began, at, t0);
        recognizer.touch(item, TouchPhase::Ended, at, t0 + ms(50));

        // Second tap arrives after the double-tap window.
        recognizer.touch(item, TouchPhase::Began, at, t0 + ms(500));
        let events = recognizer.touch(item, TouchPhase::Ended, at, t0 + ms(550));
        assert!(events.is_empty());
        assert_eq!(recognizer.drag_item(), None);
    }

    #[test]
    fn test_pan_after_double_tap_ends_drag_on_release() {
        let mut recognizer = DragRecognizer::new();
        let item = item_ids(1)[0];
        let t0 = Instant::now();
        let at = Point::new(10.0, 10.0);

        recognizer.touch(item, TouchPhase::Began, at, t0);
        recognizer.touch(item, TouchPhase::Ended, at, t0 + ms(50));
        recognizer.touch(item, TouchPhase::Began, at, t0 + ms(150));
        recognizer.touch(item, TouchPhase::Ended, at, t0 + ms(200));
        assert_eq!(recognizer.drag_item(), Some(item));

        // Lifting without panning keeps drag mode armed for the next touch.
        recognizer.touch(item, TouchPhase::Began, at, t0 + ms(900));
        let events =
            recognizer.touch(item, TouchPhase::Moved, Point::new(50.0, 90.0), t0 + ms(950));
        assert_eq!(
            events,
            vec![DragEvent::Moved {
                item,
                position: Point::new(50.0, 90.0)
            }]
        );

        let events =
            recognizer.touch(item, TouchPhase::Ended, Point::new(50.0, 90.0), t0 + ms(1000));
        assert_eq!(
            events,
            vec![DragEvent::Ended {
                item,
                position: Point::new(50.0, 90.0),
                reason: DragEndReason::Ended,
            }]
        );
        assert_eq!(recognizer.drag_item(), None);
    }

    #[test]
    fn test_cancelled_touch_cancels_drag() {
        let mut recognizer = DragRecognizer::new();
        let item = item_ids(1)[0];
        let t0 = Instant::now();

        recognizer.touch(item, TouchPhase::Began, Point::new(10.0, 10.0), t0);
        recognizer.check_long_press(t0 + ms(600));
        assert_eq!(recognizer.drag_item(), Some(item));

        let events =
            recognizer.touch(item, TouchPhase::Cancelled, Point::new(10.0, 10.0), t0 + ms(700));
        assert_eq!(
            events,
            vec![DragEvent::Ended {
                item,
                position: Point::new(10.0, 10.0),
                reason: DragEndReason::Cancelled,
            }]
        );
        assert_eq!(recognizer.drag_item(), None);
    }

    #[test]
    fn test_lost_touch_fails_drag() {
        let mut recognizer = DragRecognizer::new();
        let ids = item_ids(2);
        let t0 = Instant::now();

        recognizer.touch(ids[0], TouchPhase::Began, Point::new(10.0, 10.0), t0);
        recognizer.check_long_press(t0 + ms(600));
        assert_eq!(recognizer.drag_item(), Some(ids[0]));

        // A fresh touch begins without the first ever ending.
        let events =
            recognizer.touch(ids[1], TouchPhase::Began, Point::new(200.0, 10.0), t0 + ms(800));
        assert_eq!(
            events,
            vec![DragEvent::Ended {
                item: ids[0],
                position: Point::new(200.0, 10.0),
                reason: DragEndReason::Failed,
            }]
        );
        assert_eq!(recognizer.drag_item(), None);
    }
}
