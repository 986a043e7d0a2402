// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pageflow Swipe: per-contact swipe classification for page-scroll UIs.
//!
//! This crate decides whether a completed touch contact was a deliberate
//! directional swipe. It consumes timestamped pointer samples for one contact
//! and yields a single [`SwipeVerdict`] when the contact ends; `None` means
//! the movement was incidental (a tap, a jitter, or a drag too short to be
//! intentional).
//!
//! The classifier is a small explicit value type, [`SwipeTracker`], threaded
//! through `start` / `update` / `end` rather than hidden instance state. One
//! tracker handles one contact at a time; hosts that ever support multi-touch
//! can keep one tracker per contact.
//!
//! ## Classification rules
//!
//! - The *dominant axis* is horizontal when `|dx| > |dy|`, vertical
//!   otherwise, re-evaluated on every sample — the last sample wins.
//! - At contact end, the dominant axis's absolute delta is compared against
//!   `min_ratio × viewport extent` (viewport width for horizontal movement,
//!   height for vertical). Movement below that threshold is not a swipe.
//! - Directions follow screen coordinates (y grows downward): a positive
//!   `dy` is [`SwipeDirection::Down`], a negative `dx` is
//!   [`SwipeDirection::Left`].
//!
//! Gesture input is inherently noisy, so the classifier is tolerant: a
//! malformed sample (non-finite coordinate) never panics — it is ignored on
//! `update` and yields `None` on `start`/`end`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use pageflow_swipe::{GestureSample, SwipeDirection, SwipeTracker};
//!
//! let mut tracker = SwipeTracker::default();
//! let viewport = Size::new(375.0, 800.0);
//!
//! // Finger down at (200, 600), dragged upward past 15% of the height.
//! tracker.start(GestureSample::new(200.0, 600.0, 0));
//! tracker.update(GestureSample::new(198.0, 500.0, 80));
//! let verdict = tracker.end(GestureSample::new(196.0, 430.0, 160), viewport);
//!
//! let verdict = verdict.expect("a 170px drag on an 800px viewport is deliberate");
//! assert_eq!(verdict.direction, SwipeDirection::Up);
//!
//! // The tracker resets after `end`; a following tap is not a swipe.
//! tracker.start(GestureSample::new(50.0, 50.0, 500));
//! assert_eq!(tracker.end(GestureSample::new(50.0, 50.0, 520), viewport), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Size, Vec2};

/// Default minimum-intentional-distance ratio: a swipe must cover at least
/// this fraction of the viewport extent along its dominant axis.
pub const DEFAULT_MIN_RATIO: f64 = 0.15;

/// One timestamped pointer sample belonging to a single touch contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    /// Pointer position in viewport coordinates.
    pub pos: Point,
    /// Sample time in milliseconds; monotonic within one contact.
    pub time_ms: u64,
}

impl GestureSample {
    /// Creates a sample from raw coordinates and a timestamp.
    #[must_use]
    pub const fn new(x: f64, y: f64, time_ms: u64) -> Self {
        Self {
            pos: Point::new(x, y),
            time_ms,
        }
    }

    /// Returns `true` if both coordinates are finite.
    ///
    /// Non-finite samples come from hosts forwarding partially-populated
    /// platform events; the tracker treats them as absent.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.pos.x.is_finite() && self.pos.y.is_finite()
    }
}

/// Cardinal direction of a classified swipe, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Toward the top of the viewport (`dy < 0`).
    Up,
    /// Toward the bottom of the viewport (`dy > 0`).
    Down,
    /// Toward the left edge (`dx < 0`).
    Left,
    /// Toward the right edge (`dx > 0`).
    Right,
}

impl SwipeDirection {
    /// Returns `true` for `Up`/`Down`.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// The classifier's final judgment on one completed contact.
///
/// Produced at most once per contact by [`SwipeTracker::end`]; absence
/// (`None` from `end`) means the contact was not a deliberate swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeVerdict {
    /// Cardinal direction along the dominant axis.
    pub direction: SwipeDirection,
    /// Absolute distance covered along the dominant axis, in viewport units.
    pub magnitude: f64,
}

/// Dominant movement axis, re-evaluated on every sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum Axis {
    Horizontal,
    // The widget's axis of travel; also what a motionless contact defaults to.
    #[default]
    Vertical,
}

/// Tracks one touch contact and classifies it as a swipe (or not) on end.
///
/// The tracker holds only the contact origin, the accumulated delta, and the
/// current dominant axis. It is `Copy`, so hosts can keep one per contact
/// point without sharing concerns.
///
/// ## Usage
///
/// 1) Call [`SwipeTracker::start`] with the contact-down sample.
/// 2) Call [`SwipeTracker::update`] for each movement sample.
/// 3) Call [`SwipeTracker::end`] with the contact-up sample and the current
///    viewport size; it returns the verdict and always resets the tracker.
#[derive(Clone, Copy, Debug)]
pub struct SwipeTracker {
    min_ratio: f64,
    origin: Option<Point>,
    delta: Vec2,
    axis: Axis,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_RATIO)
    }
}

impl SwipeTracker {
    /// Creates a tracker with the given minimum-intentional-distance ratio.
    ///
    /// The ratio is the fraction of the viewport extent (width for horizontal
    /// swipes, height for vertical) a contact must cover along its dominant
    /// axis to count as deliberate. [`DEFAULT_MIN_RATIO`] is a good starting
    /// point for full-viewport page scrolling.
    #[must_use]
    pub const fn new(min_ratio: f64) -> Self {
        Self {
            min_ratio,
            origin: None,
            delta: Vec2::ZERO,
            axis: Axis::Vertical,
        }
    }

    /// Returns `true` while a contact is being tracked.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Begins tracking a contact at the given sample.
    ///
    /// A malformed sample leaves the tracker inactive: the whole contact is
    /// discarded rather than classified from a bogus origin.
    pub fn start(&mut self, sample: GestureSample) {
        if !sample.is_well_formed() {
            self.reset();
            return;
        }
        self.origin = Some(sample.pos);
        self.delta = Vec2::ZERO;
        self.axis = Axis::Vertical;
    }

    /// Folds a movement sample into the accumulated delta.
    ///
    /// Recomputes the dominant axis from the total offset since the contact
    /// origin; the axis may flip intra-gesture and the last sample wins.
    /// Ignored when no contact is active or the sample is malformed.
    pub fn update(&mut self, sample: GestureSample) {
        let Some(origin) = self.origin else {
            return;
        };
        if !sample.is_well_formed() {
            return;
        }
        self.delta = sample.pos - origin;
        self.axis = if self.delta.x.abs() > self.delta.y.abs() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
    }

    /// Ends the contact and returns the swipe verdict, if any.
    ///
    /// The end sample participates in classification like a final `update`.
    /// `viewport` supplies the extents the intentional-distance threshold is
    /// measured against. The tracker always resets, whatever the outcome, so
    /// a following contact starts clean.
    pub fn end(&mut self, sample: GestureSample, viewport: Size) -> Option<SwipeVerdict> {
        if self.origin.is_none() {
            return None;
        }
        if !sample.is_well_formed() {
            self.reset();
            return None;
        }
        self.update(sample);

        let axis = self.axis;
        let (travel, extent) = match axis {
            Axis::Horizontal => (self.delta.x, viewport.width),
            Axis::Vertical => (self.delta.y, viewport.height),
        };
        self.reset();

        let magnitude = travel.abs();
        // Zero travel can never pick a sign, even with a zero ratio.
        if magnitude == 0.0 || magnitude < self.min_ratio * extent {
            return None;
        }

        let direction = match (axis, travel > 0.0) {
            (Axis::Horizontal, true) => SwipeDirection::Right,
            (Axis::Horizontal, false) => SwipeDirection::Left,
            (Axis::Vertical, true) => SwipeDirection::Down,
            (Axis::Vertical, false) => SwipeDirection::Up,
        };
        Some(SwipeVerdict {
            direction,
            magnitude,
        })
    }

    fn reset(&mut self) {
        self.origin = None;
        self.delta = Vec2::ZERO;
        self.axis = Axis::Vertical;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1000.0, 800.0);

    fn at(x: f64, y: f64, t: u64) -> GestureSample {
        GestureSample::new(x, y, t)
    }

    #[test]
    fn fresh_tracker_is_not_tracking() {
        let tracker = SwipeTracker::default();
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn downward_drag_past_threshold_is_down() {
        let mut tracker = SwipeTracker::default();
        tracker.start(at(500.0, 100.0, 0));
        tracker.update(at(502.0, 180.0, 40));
        // 20% of an 800px viewport height, well past the 15% default.
        let verdict = tracker.end(at(504.0, 260.0, 80), VIEWPORT);

        let verdict = verdict.expect("160px vertical travel should classify");
        assert_eq!(verdict.direction, SwipeDirection::Down);
        assert!((verdict.magnitude - 160.0).abs() < 1e-9);
    }

    #[test]
    fn upward_drag_past_threshold_is_up() {
        let mut tracker = SwipeTracker::default();
        tracker.start(at(500.0, 600.0, 0));
        let verdict = tracker.end(at(500.0, 440.0, 90), VIEWPORT);
        assert_eq!(
            verdict.map(|v| v.direction),
            Some(SwipeDirection::Up),
            "negative dy should map to Up"
        );
    }

    #[test]
    fn short_vertical_drag_is_not_a_swipe() {
        let mut tracker = SwipeTracker::default();
        tracker.start(at(500.0, 100.0, 0));
        // 5% of the viewport height: deliberate-distance threshold not met.
        let verdict = tracker.end(at(500.0, 140.0, 60), VIEWPORT);
        assert_eq!(verdict, None);
    }

    #[test]
    fn horizontal_drag_measures_against_width() {
        let mut tracker = SwipeTracker::default();
        tracker.start(at(100.0, 400.0, 0));
        tracker.update(at(250.0, 405.0, 50));
        // 30% of the 1000px width, rightward.
        let verdict = tracker.end(at(400.0, 410.0, 100), VIEWPORT);

        let verdict = verdict.expect("300px horizontal travel should classify");
        assert_eq!(verdict.direction, SwipeDirection::Right);
        assert!(!verdict.direction.is_vertical());
    }

    #[test]
    fn leftward_drag_is_left() {
        let mut tracker = SwipeTracker::default();
        tracker.start(at(800.0, 400.0, 0));
        let verdict = tracker.end(at(500.0, 395.0, 100), VIEWPORT);
        assert_eq!(verdict.map(|v| v.direction), Some(SwipeDirection::Left));
    }

    #[test]
    fn tap_yields_none() {
        let mut tracker = SwipeTracker::default();
        tracker.start(at(300.0, 300.0, 0));
        let verdict = tracker.end(at(300.0, 300.0, 30), VIEWPORT);
        assert_eq!(verdict, None);
    }

    #[test]
    fn dominant_axis_is_last_write_wins() {
        let mut tracker = SwipeTracker::default();
        tracker.start(at(500.0, 400.0, 0));
        // Mostly horizontal at first...
        tracker.update(at(700.0, 420.0, 40));
        // ...but the contact ends with vertical travel dominating.
        let verdict = tracker.end(at(510.0, 700.0, 120), VIEWPORT);
        assert_eq!(verdict.map(|v| v.direction), Some(SwipeDirection::Down));
    }

    #[test]
    fn end_resets_even_without_a_verdict() {
        let mut tracker = SwipeTracker::default();
        tracker.start(at(500.0, 100.0, 0));
        assert_eq!(tracker.end(at(500.0, 110.0, 40), VIEWPORT), None);
        assert!(!tracker.is_tracking());

        // The next contact classifies independently of the discarded one.
        tracker.start(at(500.0, 100.0, 100));
        let verdict = tracker.end(at(500.0, 300.0, 200), VIEWPORT);
        assert_eq!(verdict.map(|v| v.direction), Some(SwipeDirection::Down));
        assert!((verdict.expect("deliberate drag").magnitude - 200.0).abs() < 1e-9);
    }

    #[test]
    fn end_without_start_yields_none() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.end(at(500.0, 700.0, 10), VIEWPORT), None);
    }

    #[test]
    fn update_without_start_is_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.update(at(500.0, 700.0, 10));
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.end(at(500.0, 900.0, 20), VIEWPORT), None);
    }

    #[test]
    fn malformed_start_discards_the_contact() {
        let mut tracker = SwipeTracker::default();
        tracker.start(at(f64::NAN, 100.0, 0));
        assert!(!tracker.is_tracking());
        tracker.update(at(500.0, 400.0, 40));
        assert_eq!(tracker.end(at(500.0, 700.0, 80), VIEWPORT), None);
    }

    #[test]
    fn malformed_move_is_skipped() {
        let mut tracker = SwipeTracker::default();
        tracker.start(at(500.0, 100.0, 0));
        tracker.update(at(500.0, f64::INFINITY, 40));
        let verdict = tracker.end(at(500.0, 300.0, 80), VIEWPORT);
        assert_eq!(verdict.map(|v| v.direction), Some(SwipeDirection::Down));
    }

    #[test]
    fn malformed_end_yields_none_and_resets() {
        let mut tracker = SwipeTracker::default();
        tracker.start(at(500.0, 100.0, 0));
        tracker.update(at(500.0, 400.0, 40));
        assert_eq!(tracker.end(at(f64::NAN, f64::NAN, 80), VIEWPORT), None);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn custom_ratio_changes_the_threshold() {
        let mut strict = SwipeTracker::new(0.5);
        strict.start(at(500.0, 100.0, 0));
        // 20% travel: enough for the default ratio, not for 50%.
        assert_eq!(strict.end(at(500.0, 260.0, 60), VIEWPORT), None);

        let mut lax = SwipeTracker::new(0.05);
        lax.start(at(500.0, 100.0, 0));
        let verdict = lax.end(at(500.0, 160.0, 60), VIEWPORT);
        assert_eq!(verdict.map(|v| v.direction), Some(SwipeDirection::Down));
    }

    #[test]
    fn exact_threshold_travel_classifies() {
        let mut tracker = SwipeTracker::default();
        tracker.start(at(500.0, 0.0, 0));
        // Exactly 15% of 800px.
        let verdict = tracker.end(at(500.0, 120.0, 60), VIEWPORT);
        assert_eq!(verdict.map(|v| v.direction), Some(SwipeDirection::Down));
    }

    #[test]
    fn start_overwrites_a_previous_contact() {
        let mut tracker = SwipeTracker::default();
        tracker.start(at(0.0, 0.0, 0));
        tracker.update(at(0.0, 500.0, 40));

        // Contact restarted (e.g. the host saw a new touchstart).
        tracker.start(at(500.0, 400.0, 100));
        let verdict = tracker.end(at(500.0, 420.0, 140), VIEWPORT);
        assert_eq!(verdict, None, "old contact's travel must not leak");
    }
}
