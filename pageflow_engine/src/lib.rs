// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pageflow Engine: the section transition state machine for page-scroll UIs.
//!
//! A page-scroll widget shows one full-viewport section at a time and
//! animates a hand-off between the outgoing and incoming section. This crate
//! is the part that *decides* — when a transition may start, in which
//! direction it travels, and which section becomes active — while the host
//! applies the actual visual effect and reports back.
//!
//! The core types are:
//!
//! - [`TransitionEngine`]: the finite-state machine. `Idle` ⇄ `InFlight`,
//!   with at most one transition in flight; requests arriving mid-flight
//!   fail with [`RequestError::Busy`] and are dropped by callers, never
//!   queued.
//! - [`SectionRegistry`]: the host-owned ordered collection of section
//!   identifiers, generic over the host's id type.
//! - [`Intent`]: the normalized instruction (`Advance` / `Retreat` /
//!   `JumpTo`) an input layer derives from raw device events.
//! - [`TransitionStarted`] / [`TransitionEnded`]: the events the host turns
//!   into class toggles, z-index assignment, and nav highlighting.
//!
//! ## The host contract
//!
//! The engine owns *decision*, the host owns *time and pixels*:
//!
//! 1) The host forwards a normalized [`Intent`] via
//!    [`TransitionEngine::request`] (or calls the specific request methods).
//! 2) On [`TransitionStarted`], the host pre-stages any skipped sections
//!    ([`TransitionStarted::prestage`]), then runs its animation — CSS
//!    transitions, per-frame stepping, whatever fits.
//! 3) When the effect finishes, the host calls
//!    [`TransitionEngine::complete_transition`]. This is the only way the
//!    engine leaves flight; it holds no internal timer, because only the
//!    host knows the effect's real duration.
//!
//! Cancellation mid-transition is deliberately unsupported: a host that
//! needs it completes immediately at current progress instead.
//!
//! ## Minimal example
//!
//! ```
//! use pageflow_engine::{Intent, JumpOutcome, SectionRegistry, TransitionEngine};
//!
//! let sections = SectionRegistry::new(vec!["intro", "work", "contact"]);
//! let mut engine = TransitionEngine::new(sections.len());
//!
//! // A nav link resolved to "contact" by the input layer.
//! let target = sections.index_of(&"contact").unwrap();
//! let outcome = engine.request(Intent::JumpTo(target)).unwrap();
//!
//! let JumpOutcome::Started(started) = outcome else { unreachable!() };
//! assert_eq!(started.prestage.as_slice(), &[1]); // "work" is skipped over
//!
//! engine.complete_transition();
//! assert_eq!(engine.current_index(), target);
//! ```
//!
//! ## Layering
//!
//! Sections keep a stable z-order so the incoming and outgoing section
//! overlap correctly during the hand-off. The engine does not assign z
//! itself; it documents the invariant host assignment must satisfy — for all
//! `i < j`, `z(i) ≥ z(j)` — and [`z_index`] implements the canonical
//! non-increasing policy. Z layering is the sole supported ordering
//! mechanism; physically reordering section nodes is out of contract.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod registry;

pub use engine::{
    Direction, Intent, JumpOutcome, Layer, Phase, RequestError, TransitionEnded, TransitionEngine,
    TransitionStarted,
};
pub use registry::{SectionRegistry, z_index};
