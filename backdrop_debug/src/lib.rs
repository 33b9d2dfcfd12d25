// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, recording, and JSON export for backdrop diagnostics.
//!
//! This crate provides [`TraceSink`](backdrop_core::trace::TraceSink)
//! implementations for development and tests:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — in-memory event log.
//! - [`json::export`] — writes a recorded log as JSON lines.

pub mod json;
pub mod pretty;
pub mod recorder;
