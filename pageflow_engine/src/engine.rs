// Copyright 2026 the Pageflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The section transition state machine.

use core::fmt;

use smallvec::SmallVec;

/// Travel direction of a transition through the section order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher indices (the next section scrolls into view).
    Forward,
    /// Toward lower indices.
    Backward,
}

/// A section's visual layer relative to the active section.
///
/// The engine never touches storage; it emits layer assignments as
/// instructions — through [`TransitionStarted::prestage_layer`] and
/// [`TransitionEngine::layer_of`] — and the host maps them onto whatever its
/// rendering uses (CSS classes, transforms, visibility).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    /// Stacked under the viewport, waiting to scroll in from below.
    Below,
    /// The currently visible section.
    Active,
    /// Moved up out of the viewport.
    Above,
}

/// The normalized instruction derived from one input event.
///
/// Intents are ephemeral: built from a single event, handed to
/// [`TransitionEngine::request`], never queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Move one section forward.
    Advance,
    /// Move one section backward.
    Retreat,
    /// Move directly to the given section index.
    JumpTo(usize),
}

/// Engine phase, exposed for read-only inspection.
///
/// Carrying the target inside [`Phase::InFlight`] makes "in flight implies a
/// target exists" structural rather than a runtime invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No transition active; requests are accepted.
    Idle,
    /// A transition toward `target` is running; requests are refused until
    /// the host calls [`TransitionEngine::complete_transition`].
    InFlight {
        /// Index the current transition is heading to.
        target: usize,
    },
}

/// Why a transition request was refused. All variants are recoverable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestError {
    /// No further section in the requested direction. Callers typically
    /// ignore this silently; it is not user-visible as an error.
    AtBoundary,
    /// A transition is already in flight. Callers must drop the request,
    /// not retry; the input layer already filters these, but the engine
    /// re-checks to stay safe under direct calls.
    Busy,
    /// A jump target outside `[0, section_count)`. Treat as a no-op.
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// The number of registered sections.
        len: usize,
    },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtBoundary => write!(f, "no section in the requested direction"),
            Self::Busy => write!(f, "a transition is already in flight"),
            Self::InvalidIndex { index, len } => {
                write!(f, "jump target {index} out of range for {len} sections")
            }
        }
    }
}

impl core::error::Error for RequestError {}

/// Emitted when a transition request is accepted.
///
/// The host reacts by running its visual effect (CSS class toggles, manual
/// animation) and must call [`TransitionEngine::complete_transition`] when
/// the effect finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionStarted {
    /// Index of the outgoing section.
    pub from: usize,
    /// Index of the incoming section.
    pub to: usize,
    /// Travel direction through the section order.
    pub direction: Direction,
    /// Indices strictly between `from` and `to`, in ascending order.
    ///
    /// Only jumps produce a non-empty list. The host should move all of
    /// these to [`TransitionStarted::prestage_layer`] *before* animating so
    /// skipped sections never flash in the wrong layer mid-jump.
    pub prestage: SmallVec<[usize; 8]>,
}

impl TransitionStarted {
    /// Layer every pre-staged section belongs on for this transition:
    /// [`Layer::Below`] when jumping forward, [`Layer::Above`] backward.
    #[must_use]
    pub fn prestage_layer(&self) -> Layer {
        match self.direction {
            Direction::Forward => Layer::Below,
            Direction::Backward => Layer::Above,
        }
    }
}

/// Emitted when the host acknowledges a finished transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionEnded {
    /// The now-active section index.
    pub to: usize,
}

/// Outcome of a jump request that was not refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JumpOutcome {
    /// A transition began; the host runs its effect and completes it.
    Started(TransitionStarted),
    /// The target is already the active section. No transition begins and
    /// the engine stays `Idle`; surfaced as a success so the caller can
    /// still clear pending UI affordances (e.g. a nav-link pressed state).
    AlreadyCurrent,
}

/// The page-scroll transition state machine.
///
/// Holds the current section index and serializes transitions: at most one
/// is in flight at any time, and the *only* way out of
/// [`Phase::InFlight`] is the host calling
/// [`TransitionEngine::complete_transition`] once its visual effect is done.
/// There is no internal timer — actual duration depends on whether the host
/// drives CSS transitions or a manual per-frame fallback, so timing
/// ownership stays with the host.
///
/// Requests made while in flight fail with [`RequestError::Busy`] and are
/// expected to be dropped, never buffered; excess input during an active
/// transition must not accumulate into a transition storm.
///
/// ## Minimal example
///
/// ```
/// use pageflow_engine::{Phase, TransitionEngine};
///
/// let mut engine = TransitionEngine::new(5);
///
/// let started = engine.request_advance().expect("idle, not at boundary");
/// assert_eq!((started.from, started.to), (0, 1));
/// assert_eq!(engine.phase(), Phase::InFlight { target: 1 });
///
/// // A second request during the transition is refused.
/// assert!(engine.request_advance().is_err());
///
/// // The host's animation finishes.
/// let ended = engine.complete_transition().expect("was in flight");
/// assert_eq!(ended.to, 1);
/// assert_eq!(engine.current_index(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionEngine {
    section_count: usize,
    current: usize,
    phase: Phase,
}

impl TransitionEngine {
    /// Creates an engine over `section_count` sections, starting at index 0.
    ///
    /// # Panics
    ///
    /// Panics if `section_count` is zero. An empty section sequence is a
    /// programming-contract violation, not a runtime condition; it is the
    /// only fatal error in the core.
    #[must_use]
    pub fn new(section_count: usize) -> Self {
        assert!(
            section_count > 0,
            "TransitionEngine requires at least one section"
        );
        Self {
            section_count,
            current: 0,
            phase: Phase::Idle,
        }
    }

    /// Returns the active section index. Always in `[0, section_count)`.
    ///
    /// While in flight this is still the *outgoing* index; it only moves
    /// when the host completes the transition.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` while a transition is awaiting completion.
    ///
    /// Hosts typically use this to disable UI controls mid-transition.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self.phase, Phase::InFlight { .. })
    }

    /// Returns the number of sections the engine was constructed over.
    #[must_use]
    pub const fn section_count(&self) -> usize {
        self.section_count
    }

    /// The layer a section at `index` belongs on relative to the active one.
    ///
    /// Indices past the end still map to [`Layer::Below`]; the engine does
    /// not validate here because this is a pure instruction helper.
    #[must_use]
    pub const fn layer_of(&self, index: usize) -> Layer {
        if index < self.current {
            Layer::Above
        } else if index == self.current {
            Layer::Active
        } else {
            Layer::Below
        }
    }

    /// Requests a one-step transition toward higher indices.
    ///
    /// Fails with [`RequestError::Busy`] while in flight and
    /// [`RequestError::AtBoundary`] at the last section; neither changes
    /// state.
    pub fn request_advance(&mut self) -> Result<TransitionStarted, RequestError> {
        self.check_idle()?;
        if self.current + 1 >= self.section_count {
            return Err(RequestError::AtBoundary);
        }
        Ok(self.begin(self.current + 1, Direction::Forward, SmallVec::new()))
    }

    /// Requests a one-step transition toward lower indices.
    ///
    /// Fails with [`RequestError::Busy`] while in flight and
    /// [`RequestError::AtBoundary`] at index 0; neither changes state.
    pub fn request_retreat(&mut self) -> Result<TransitionStarted, RequestError> {
        self.check_idle()?;
        if self.current == 0 {
            return Err(RequestError::AtBoundary);
        }
        Ok(self.begin(self.current - 1, Direction::Backward, SmallVec::new()))
    }

    /// Requests a single transition directly to `index`.
    ///
    /// However far the target is, exactly one logical transition results.
    /// The returned [`TransitionStarted`] carries the indices strictly
    /// between the endpoints so the host can pre-stage them (see
    /// [`TransitionStarted::prestage`]).
    ///
    /// Jumping to the active section is not an error: it resolves to
    /// [`JumpOutcome::AlreadyCurrent`] without entering flight.
    pub fn request_jump(&mut self, index: usize) -> Result<JumpOutcome, RequestError> {
        self.check_idle()?;
        if index >= self.section_count {
            return Err(RequestError::InvalidIndex {
                index,
                len: self.section_count,
            });
        }
        if index == self.current {
            return Ok(JumpOutcome::AlreadyCurrent);
        }

        let direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        let (lo, hi) = if index > self.current {
            (self.current, index)
        } else {
            (index, self.current)
        };
        let prestage: SmallVec<[usize; 8]> = (lo + 1..hi).collect();
        Ok(JumpOutcome::Started(self.begin(index, direction, prestage)))
    }

    /// Dispatches a normalized [`Intent`] to the matching request method.
    pub fn request(&mut self, intent: Intent) -> Result<JumpOutcome, RequestError> {
        match intent {
            Intent::Advance => self.request_advance().map(JumpOutcome::Started),
            Intent::Retreat => self.request_retreat().map(JumpOutcome::Started),
            Intent::JumpTo(index) => self.request_jump(index),
        }
    }

    /// Acknowledges that the host's visual effect finished.
    ///
    /// Moves `current` to the in-flight target and returns to idle. This is
    /// the only exit from [`Phase::InFlight`]. Calling it while idle is an
    /// idempotent no-op: the index is untouched and `None` is returned, so
    /// hosts with belt-and-braces completion paths (transition-end event
    /// plus a safety timer) stay correct.
    pub fn complete_transition(&mut self) -> Option<TransitionEnded> {
        match self.phase {
            Phase::Idle => None,
            Phase::InFlight { target } => {
                self.current = target;
                self.phase = Phase::Idle;
                Some(TransitionEnded { to: target })
            }
        }
    }

    fn check_idle(&self) -> Result<(), RequestError> {
        match self.phase {
            Phase::Idle => Ok(()),
            Phase::InFlight { .. } => Err(RequestError::Busy),
        }
    }

    fn begin(
        &mut self,
        target: usize,
        direction: Direction,
        prestage: SmallVec<[usize; 8]>,
    ) -> TransitionStarted {
        self.phase = Phase::InFlight { target };
        TransitionStarted {
            from: self.current,
            to: target,
            direction,
            prestage,
        }
    }
}
