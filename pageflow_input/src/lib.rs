// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pageflow Input: normalize heterogeneous device events into one intent.
//!
//! A page-scroll widget accepts input from several sources — wheel, arrow
//! keys, touch swipes, navigation links — that all mean one of three things:
//! go forward one section, go back one section, or jump straight to a
//! section. This crate maps each raw event to at most one
//! [`Intent`](pageflow_engine::Intent) and drops everything else.
//!
//! [`InputEvent`] is the explicit input-source abstraction: host shims adapt
//! whatever their platform delivers (DOM events, winit events, test
//! fixtures) into its variants; the core never branches on platform or
//! browser identity.
//!
//! ## Backpressure by dropping
//!
//! [`Normalizer::normalize`] takes the engine's current
//! [`Phase`](pageflow_engine::Phase) and returns `None` for *any* event that
//! arrives while a transition is in flight. Excess input during an active
//! transition is dropped, never queued — there is no intent queue to grow
//! unbounded, and a burst of wheel events cannot turn into a transition
//! storm. The engine re-checks on its own requests, so direct callers stay
//! safe too.
//!
//! ## Minimal example
//!
//! ```
//! use pageflow_engine::{Intent, Phase, SectionRegistry};
//! use pageflow_input::{InputEvent, Normalizer, Options};
//!
//! let sections = SectionRegistry::new(vec!["top", "middle", "bottom"]);
//! let normalizer = Normalizer::new(Options::default());
//!
//! // Wheel toward the next section while idle.
//! let event: InputEvent<&str> = InputEvent::Wheel { delta_y: -40.0 };
//! let intent = normalizer.normalize(&event, Phase::Idle, &sections);
//! assert_eq!(intent, Some(Intent::Advance));
//!
//! // The same event mid-transition is dropped.
//! let intent = normalizer.normalize(&event, Phase::InFlight { target: 1 }, &sections);
//! assert_eq!(intent, None);
//!
//! // A nav link resolves through the registry.
//! let event = InputEvent::NavLink("bottom");
//! let intent = normalizer.normalize(&event, Phase::Idle, &sections);
//! assert_eq!(intent, Some(Intent::JumpTo(2)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use pageflow_engine::{Intent, Phase, SectionRegistry};
use pageflow_swipe::{SwipeDirection, SwipeVerdict};

/// Recognized configuration options for the page-scroll core.
///
/// Only [`Options::arrow_keys_enabled`] is consumed here; the rest are the
/// knobs a host wires through to the other layers:
///
/// - `swipe_min_ratio` feeds
///   [`SwipeTracker::new`](pageflow_swipe::SwipeTracker::new).
/// - `transition_cooldown_ms` is advisory and host-enforced — typically the
///   declared CSS transition duration plus a safety pad, after which the
///   host calls `complete_transition` even if no end event arrived.
/// - `starting_z_index` is the host-enforced layering base passed to
///   [`z_index`](pageflow_engine::z_index).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options {
    /// Map arrow keys to advance/retreat intents.
    pub arrow_keys_enabled: bool,
    /// Minimum fraction of the viewport a swipe must cover to be deliberate.
    pub swipe_min_ratio: f64,
    /// Advisory completion deadline for the host's visual effect.
    pub transition_cooldown_ms: u64,
    /// Base z-index the host assigns to the first section.
    pub starting_z_index: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            arrow_keys_enabled: true,
            swipe_min_ratio: pageflow_swipe::DEFAULT_MIN_RATIO,
            transition_cooldown_ms: 700,
            starting_z_index: 100,
        }
    }
}

/// Keys the widget reacts to. Host shims forward only these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Up arrow: one section back.
    ArrowUp,
    /// Down arrow: one section forward.
    ArrowDown,
}

/// A raw device event, adapted by a thin host-side shim.
///
/// `K` is the host's section identifier type, matching its
/// [`SectionRegistry`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<K> {
    /// A vertical wheel tick, in the legacy mousewheel sign convention:
    /// negative scrolls toward the *next* section, positive toward the
    /// previous one. Shims adapting `WheelEvent::deltaY` (which grows
    /// downward) negate it.
    Wheel {
        /// Signed vertical delta; magnitude is ignored.
        delta_y: f64,
    },
    /// A key press the shim chose to forward.
    Key(Key),
    /// A completed touch contact the swipe classifier judged deliberate.
    Swipe(SwipeVerdict),
    /// A navigation-link activation carrying its target section id
    /// (the original markup used a `rel`-style attribute for this).
    NavLink(K),
}

/// Maps raw input events to intents, dropping whatever does not qualify.
#[derive(Clone, Copy, Debug, Default)]
pub struct Normalizer {
    options: Options,
}

impl Normalizer {
    /// Creates a normalizer with the given options.
    #[must_use]
    pub const fn new(options: Options) -> Self {
        Self { options }
    }

    /// Returns the options the normalizer was built with.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Normalizes one event into at most one intent.
    ///
    /// Mapping:
    ///
    /// | Event | Condition | Intent |
    /// |---|---|---|
    /// | `Wheel { delta_y < 0 }` | — | `Advance` |
    /// | `Wheel { delta_y > 0 }` | — | `Retreat` |
    /// | `Key(ArrowDown)` | arrow keys enabled | `Advance` |
    /// | `Key(ArrowUp)` | arrow keys enabled | `Retreat` |
    /// | `Swipe` upward | — | `Advance` |
    /// | `Swipe` downward | — | `Retreat` |
    /// | `NavLink(id)` | `id` resolves in `sections` | `JumpTo(index)` |
    ///
    /// Everything else is `None`: zero wheel deltas (no direction to read),
    /// horizontal swipes (reserved — this widget travels vertically), keys
    /// while arrow-key handling is disabled, unresolvable nav targets, and
    /// *any* event while `phase` is in flight.
    pub fn normalize<K: PartialEq>(
        &self,
        event: &InputEvent<K>,
        phase: Phase,
        sections: &SectionRegistry<K>,
    ) -> Option<Intent> {
        if matches!(phase, Phase::InFlight { .. }) {
            return None;
        }
        match event {
            InputEvent::Wheel { delta_y } if *delta_y < 0.0 => Some(Intent::Advance),
            InputEvent::Wheel { delta_y } if *delta_y > 0.0 => Some(Intent::Retreat),
            InputEvent::Wheel { .. } => None,
            InputEvent::Key(key) if self.options.arrow_keys_enabled => match key {
                Key::ArrowDown => Some(Intent::Advance),
                Key::ArrowUp => Some(Intent::Retreat),
            },
            InputEvent::Key(_) => None,
            InputEvent::Swipe(verdict) => match verdict.direction {
                // Swiping up pulls the next section into view.
                SwipeDirection::Up => Some(Intent::Advance),
                SwipeDirection::Down => Some(Intent::Retreat),
                SwipeDirection::Left | SwipeDirection::Right => None,
            },
            InputEvent::NavLink(id) => sections.index_of(id).map(Intent::JumpTo),
        }
    }
}
