// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event, in order,
//! as a [`RecordedEvent`].

use backdrop_core::trace::{
    AttachEvent, MarkEvent, MotionSkippedEvent, MoveSuppressedEvent, StyleEvent, TraceSink,
};

/// A recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_attach`].
    Attach(AttachEvent),
    /// See [`TraceSink::on_style`].
    Style(StyleEvent),
    /// See [`TraceSink::on_mark`].
    Mark(MarkEvent),
    /// See [`TraceSink::on_move_suppressed`].
    MoveSuppressed(MoveSuppressedEvent),
    /// See [`TraceSink::on_motion_skipped`].
    MotionSkipped(MotionSkippedEvent),
}

/// A [`TraceSink`] that appends every event to a list.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Iterates over the recorded style events only.
    pub fn styles(&self) -> impl Iterator<Item = &StyleEvent> {
        self.events.iter().filter_map(|e| match e {
            RecordedEvent::Style(s) => Some(s),
            _ => None,
        })
    }
}

impl TraceSink for RecorderSink {
    fn on_attach(&mut self, e: &AttachEvent) {
        self.events.push(RecordedEvent::Attach(*e));
    }

    fn on_style(&mut self, e: &StyleEvent) {
        self.events.push(RecordedEvent::Style(*e));
    }

    fn on_mark(&mut self, e: &MarkEvent) {
        self.events.push(RecordedEvent::Mark(*e));
    }

    fn on_move_suppressed(&mut self, e: &MoveSuppressedEvent) {
        self.events.push(RecordedEvent::MoveSuppressed(*e));
    }

    fn on_motion_skipped(&mut self, e: &MotionSkippedEvent) {
        self.events.push(RecordedEvent::MotionSkipped(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::controller::{Controller, InputEvent};
    use backdrop_core::mode::Environment;
    use backdrop_core::options::InteractiveBgOptions;
    use backdrop_core::surface::{Mark, StyleUpdate, Surface};
    use backdrop_core::trace::{Reaction, Tracer};
    use kurbo::{Point, Size};

    #[derive(Default)]
    struct Marks {
        entering: bool,
        exiting: bool,
    }

    impl Surface for Marks {
        fn apply(&mut self, _: &StyleUpdate) {}

        fn has_mark(&self, mark: Mark) -> bool {
            match mark {
                Mark::Entering => self.entering,
                Mark::Exiting => self.exiting,
            }
        }

        fn set_mark(&mut self, mark: Mark, on: bool) {
            match mark {
                Mark::Entering => self.entering = on,
                Mark::Exiting => self.exiting = on,
            }
        }
    }

    #[test]
    fn records_a_hover_cycle_in_order() {
        let settings = InteractiveBgOptions::new().with_scale(1.1).resolve();
        let env = Environment {
            has_touch: false,
            screen_width: 1280.0,
        };
        let mut controller = Controller::new(settings, Size::new(200.0, 100.0), env);
        let plan = controller.layer_plan(None);

        let mut sink = RecorderSink::new();
        let mut surface = Marks::default();
        {
            let mut tracer = Tracer::new(&mut sink);
            controller.trace_attach(&plan, &mut tracer);
            for event in [
                InputEvent::Enter,
                InputEvent::Move {
                    page: Point::ZERO,
                    origin: Point::ZERO,
                },
                InputEvent::TransitionEnd,
                InputEvent::Move {
                    page: Point::ZERO,
                    origin: Point::ZERO,
                },
                InputEvent::Leave,
            ] {
                controller.handle(&event, &mut surface, &mut tracer);
            }
        }

        let events = sink.events();
        assert!(matches!(events[0], RecordedEvent::Attach(_)));
        assert!(matches!(
            events[1],
            RecordedEvent::Mark(MarkEvent {
                mark: Mark::Entering,
                on: true,
                ..
            })
        ));
        assert!(matches!(events[3], RecordedEvent::MoveSuppressed(_)));
        let reactions: Vec<Reaction> = sink.styles().map(|s| s.reaction).collect();
        assert_eq!(
            reactions,
            [Reaction::Enter, Reaction::Move, Reaction::Leave]
        );
    }
}
