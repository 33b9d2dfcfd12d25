// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for attachments.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`Controller`](crate::controller::Controller) calls as it attaches and
//! reacts. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.

use kurbo::{Affine, Size};

use crate::css::Transition;
use crate::geometry::Sensitivity;
use crate::layer::Placement;
use crate::mode::Mode;
use crate::surface::Mark;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which input produced a style mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reaction {
    /// Pointer entered the target.
    Enter,
    /// Pointer moved over the target.
    Move,
    /// Pointer left the target.
    Leave,
    /// Device motion sample.
    Motion,
}

impl Reaction {
    /// Short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Move => "move",
            Self::Leave => "leave",
            Self::Motion => "motion",
        }
    }
}

/// [`Transition`] without its duration payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// `transition` left as is.
    Unchanged,
    /// `transition: none`.
    Instant,
    /// Linear transform transition.
    Linear,
}

impl TransitionKind {
    /// Short lowercase label; `none` matches the CSS keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Instant => "none",
            Self::Linear => "linear",
        }
    }
}

impl From<&Transition> for TransitionKind {
    fn from(t: &Transition) -> Self {
        match t {
            Transition::Unchanged => Self::Unchanged,
            Transition::Instant => Self::Instant,
            Transition::Linear(_) => Self::Linear,
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once when a controller is attached.
#[derive(Clone, Copy, Debug)]
pub struct AttachEvent {
    /// Selected reactive behaviour.
    pub mode: Mode,
    /// Target size measured at attachment.
    pub size: Size,
    /// Derived per-axis sensitivity.
    pub sensitivity: Sensitivity,
    /// How the layer was inserted.
    pub placement: Placement,
    /// Whether a background image was applied.
    pub has_background: bool,
}

/// Emitted for every style mutation written to the layer.
#[derive(Clone, Copy, Debug)]
pub struct StyleEvent {
    /// Input sequence number (per controller).
    pub seq: u64,
    /// Which input caused it.
    pub reaction: Reaction,
    /// Transition applied with the change.
    pub transition: TransitionKind,
    /// The new transform.
    pub transform: Affine,
}

/// Emitted when a hover mark is set or cleared.
#[derive(Clone, Copy, Debug)]
pub struct MarkEvent {
    /// Input sequence number.
    pub seq: u64,
    /// Which mark.
    pub mark: Mark,
    /// `true` when set, `false` when cleared.
    pub on: bool,
}

/// Emitted when a pointer move is ignored because a hover transition is in
/// flight.
#[derive(Clone, Copy, Debug)]
pub struct MoveSuppressedEvent {
    /// Input sequence number.
    pub seq: u64,
    /// `Entering` was set.
    pub entering: bool,
    /// `Exiting` was set.
    pub exiting: bool,
}

/// Emitted when a device-motion sample lacks acceleration data.
#[derive(Clone, Copy, Debug)]
pub struct MotionSkippedEvent {
    /// Input sequence number.
    pub seq: u64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a controller.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called once after attachment.
    fn on_attach(&mut self, e: &AttachEvent) {
        _ = e;
    }

    /// Called for every style mutation.
    fn on_style(&mut self, e: &StyleEvent) {
        _ = e;
    }

    /// Called when a hover mark changes.
    fn on_mark(&mut self, e: &MarkEvent) {
        _ = e;
    }

    /// Called when a pointer move is ignored.
    fn on_move_suppressed(&mut self, e: &MoveSuppressedEvent) {
        _ = e;
    }

    /// Called when a motion sample is skipped.
    fn on_motion_skipped(&mut self, e: &MotionSkippedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`AttachEvent`].
    #[inline]
    pub fn attach(&mut self, e: &AttachEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_attach(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StyleEvent`].
    #[inline]
    pub fn style(&mut self, e: &StyleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_style(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MarkEvent`].
    #[inline]
    pub fn mark(&mut self, e: &MarkEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_mark(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MoveSuppressedEvent`].
    #[inline]
    pub fn move_suppressed(&mut self, e: &MoveSuppressedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_move_suppressed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MotionSkippedEvent`].
    #[inline]
    pub fn motion_skipped(&mut self, e: &MotionSkippedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_motion_skipped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_style() -> StyleEvent {
        StyleEvent {
            seq: 3,
            reaction: Reaction::Move,
            transition: TransitionKind::Instant,
            transform: Affine::IDENTITY,
        }
    }

    #[test]
    fn transition_kind_from_transition() {
        assert_eq!(
            TransitionKind::from(&Transition::Linear("1s".into())),
            TransitionKind::Linear
        );
        assert_eq!(
            TransitionKind::from(&Transition::Instant),
            TransitionKind::Instant
        );
        assert_eq!(
            TransitionKind::from(&Transition::Unchanged),
            TransitionKind::Unchanged
        );
    }

    #[test]
    fn transition_kind_labels() {
        assert_eq!(TransitionKind::Unchanged.as_str(), "unchanged");
        assert_eq!(TransitionKind::Instant.as_str(), "none");
        assert_eq!(TransitionKind::Linear.as_str(), "linear");
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_style(&sample_style());
        sink.on_mark(&MarkEvent {
            seq: 0,
            mark: Mark::Entering,
            on: true,
        });
        sink.on_motion_skipped(&MotionSkippedEvent { seq: 1 });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.style(&sample_style());
        tracer.motion_skipped(&MotionSkippedEvent { seq: 0 });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            seqs: Vec<u64>,
        }
        impl TraceSink for RecordingSink {
            fn on_style(&mut self, e: &StyleEvent) {
                self.seqs.push(e.seq);
            }
        }

        let mut sink = RecordingSink { seqs: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.style(&sample_style());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.seqs, &[3]);
    }
}
