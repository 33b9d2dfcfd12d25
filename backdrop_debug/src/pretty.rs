// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use backdrop_core::css::{self, Num};
use backdrop_core::trace::{
    AttachEvent, MarkEvent, MotionSkippedEvent, MoveSuppressedEvent, StyleEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_attach(&mut self, e: &AttachEvent) {
        let _ = writeln!(
            self.writer,
            "[attach] mode={} size={}x{} sens=({}, {}) layer={} image={}",
            e.mode.as_str(),
            Num(e.size.width),
            Num(e.size.height),
            Num(e.sensitivity.horizontal),
            Num(e.sensitivity.vertical),
            e.placement.as_str(),
            e.has_background,
        );
    }

    fn on_style(&mut self, e: &StyleEvent) {
        let _ = writeln!(
            self.writer,
            "[style] #{} {} transition={} {}",
            e.seq,
            e.reaction.as_str(),
            e.transition.as_str(),
            css::matrix(&e.transform),
        );
    }

    fn on_mark(&mut self, e: &MarkEvent) {
        let state = if e.on { "set" } else { "clear" };
        let _ = writeln!(
            self.writer,
            "[mark] #{} {} {state}",
            e.seq,
            e.mark.class_name(),
        );
    }

    fn on_move_suppressed(&mut self, e: &MoveSuppressedEvent) {
        let _ = writeln!(
            self.writer,
            "[move:ignored] #{} entering={} exiting={}",
            e.seq, e.entering, e.exiting,
        );
    }

    fn on_motion_skipped(&mut self, e: &MotionSkippedEvent) {
        let _ = writeln!(self.writer, "[motion:skipped] #{}", e.seq);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::trace::{Reaction, TransitionKind};
    use kurbo::Affine;

    #[test]
    fn pretty_print_style() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_style(&StyleEvent {
            seq: 4,
            reaction: Reaction::Move,
            transition: TransitionKind::Instant,
            transform: Affine::new([1.1, 0.0, 0.0, 1.1, 12.5, 12.5]),
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.contains("[style] #4 move"), "got: {output}");
        assert!(
            output.contains("matrix(1.1, 0, 0, 1.1, 12.5, 12.5)"),
            "got: {output}"
        );
    }

    #[test]
    fn pretty_print_skipped_motion() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_motion_skipped(&MotionSkippedEvent { seq: 9 });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert_eq!(output, "[motion:skipped] #9\n");
    }
}
