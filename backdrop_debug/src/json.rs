// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON-lines exporter.
//!
//! [`export`] writes one JSON object per [`RecordedEvent`], in recording
//! order. Non-finite numbers become `null`, as `serde_json` requires.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::RecordedEvent;

/// Converts one recorded event to a JSON object.
#[must_use]
pub fn to_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::Attach(e) => json!({
            "event": "attach",
            "mode": e.mode.as_str(),
            "width": e.size.width,
            "height": e.size.height,
            "sensitivity": [e.sensitivity.horizontal, e.sensitivity.vertical],
            "placement": e.placement.as_str(),
            "background": e.has_background,
        }),
        RecordedEvent::Style(e) => json!({
            "event": "style",
            "seq": e.seq,
            "reaction": e.reaction.as_str(),
            "transition": e.transition.as_str(),
            "matrix": e.transform.as_coeffs(),
        }),
        RecordedEvent::Mark(e) => json!({
            "event": "mark",
            "seq": e.seq,
            "mark": e.mark.class_name(),
            "on": e.on,
        }),
        RecordedEvent::MoveSuppressed(e) => json!({
            "event": "move_suppressed",
            "seq": e.seq,
            "entering": e.entering,
            "exiting": e.exiting,
        }),
        RecordedEvent::MotionSkipped(e) => json!({
            "event": "motion_skipped",
            "seq": e.seq,
        }),
    }
}

/// Writes `events` as JSON lines.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    for event in events {
        serde_json::to_writer(&mut *writer, &to_value(event))?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::geometry::Sensitivity;
    use backdrop_core::layer::Placement;
    use backdrop_core::mode::Mode;
    use backdrop_core::trace::{AttachEvent, MotionSkippedEvent, Reaction, StyleEvent, TransitionKind};
    use kurbo::{Affine, Size};

    #[test]
    fn style_event_carries_matrix() {
        let v = to_value(&RecordedEvent::Style(StyleEvent {
            seq: 2,
            reaction: Reaction::Motion,
            transition: TransitionKind::Unchanged,
            transform: Affine::new([1.05, 0.0, 0.0, 1.05, 49.0, 0.0]),
        }));
        assert_eq!(v["event"], "style");
        assert_eq!(v["reaction"], "motion");
        assert_eq!(v["transition"], "unchanged");
        assert_eq!(v["matrix"], json!([1.05, 0.0, 0.0, 1.05, 49.0, 0.0]));
    }

    #[test]
    fn infinite_sensitivity_exports_as_null() {
        let size = Size::new(0.0, 100.0);
        let v = to_value(&RecordedEvent::Attach(AttachEvent {
            mode: Mode::Pointer,
            size,
            sensitivity: Sensitivity::new(25.0, size),
            placement: Placement::Prepend,
            has_background: false,
        }));
        assert_eq!(v["sensitivity"][0], Value::Null);
        assert_eq!(v["sensitivity"][1], 0.25);
        assert_eq!(v["placement"], "prepend");
    }

    #[test]
    fn export_writes_one_line_per_event() {
        let events = [
            RecordedEvent::MotionSkipped(MotionSkippedEvent { seq: 0 }),
            RecordedEvent::MotionSkipped(MotionSkippedEvent { seq: 1 }),
        ];
        let mut out = Vec::new();
        export(&events, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], r#"{"event":"motion_skipped","seq":1}"#);
    }
}
