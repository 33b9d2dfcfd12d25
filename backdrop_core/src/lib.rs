// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the interactive background effect.
//!
//! `backdrop_core` holds everything about the effect that does not touch a
//! browser: option resolution, mode selection, layer planning, the parallax
//! math and the event controller. It is `no_std` compatible (with `alloc`);
//! platform backends depend on it and provide the DOM glue.
//!
//! # Architecture
//!
//! ```text
//!   Backend (DOM listener)
//!       │
//!       ▼
//!   InputEvent ──► Controller::handle() ──► StyleUpdate ──► Surface::apply()
//!                        │
//!                        ▼
//!                     Tracer ──► TraceSink
//! ```
//!
//! **[`options`]** — Partial options and their resolution against defaults.
//!
//! **[`mode`]** — One-shot motion/pointer selection from an environment
//! snapshot.
//!
//! **[`layer`]** — How the background layer is inserted, sized and styled.
//!
//! **[`geometry`]** — Sensitivity factors and pointer/motion offsets as
//! [`kurbo`] values.
//!
//! **[`controller`]** — The per-attachment event controller.
//!
//! **[`surface`]** — The [`Surface`](surface::Surface) trait that backends
//! implement to apply style updates and hover marks.
//!
//! **[`css`]** — Rendering of transforms, lengths and transitions.
//!
//! **[`addon`]** — The registration record for the host site framework.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types,
//! with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `serde` (disabled by default): `Serialize`/`Deserialize` for options and
//!   the add-on descriptor.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod addon;
pub mod controller;
pub mod css;
pub mod geometry;
pub mod layer;
pub mod mode;
pub mod options;
pub mod surface;
pub mod trace;
