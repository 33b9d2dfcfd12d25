// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive background controller.
//!
//! A [`Controller`] is created once per attachment from the resolved
//! [`Settings`], the target's measured size and an [`Environment`] snapshot.
//! It turns [`InputEvent`]s into [`StyleUpdate`]s and hover-mark changes on a
//! [`Surface`].
//!
//! # Event loop pseudocode
//!
//! ```rust,ignore
//! let mut controller = Controller::new(settings, size, env);
//! let plan = controller.layer_plan(image_url);
//! build_layer(&plan);
//! controller.trace_attach(&plan, &mut tracer);
//!
//! // For every DOM event the backend registered for `controller.mode()`:
//! controller.handle(&event, &mut surface, &mut tracer);
//! ```

use kurbo::{Affine, Point, Size, Vec2};

use crate::css::Transition;
use crate::geometry::{self, Sensitivity};
use crate::layer::LayerPlan;
use crate::mode::{Environment, Mode};
use crate::options::Settings;
use crate::surface::{Mark, StyleUpdate, Surface};
use crate::trace::{
    AttachEvent, MarkEvent, MotionSkippedEvent, MoveSuppressedEvent, Reaction, StyleEvent,
    Tracer,
};

/// An input the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// The pointer entered the target.
    Enter,
    /// The pointer moved over the target.
    Move {
        /// Pointer position in page coordinates.
        page: Point,
        /// Top-left of the target's bounding rectangle at event time.
        origin: Point,
    },
    /// The pointer left the target.
    Leave,
    /// A transition on the layer finished.
    TransitionEnd,
    /// A device-motion sample.
    Motion {
        /// Gravity-inclusive acceleration, or `None` when the device did not
        /// report both axes.
        acceleration: Option<Vec2>,
    },
}

impl InputEvent {
    /// The mode this event belongs to.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Motion { .. } => Mode::Motion,
            Self::Enter | Self::Move { .. } | Self::Leave | Self::TransitionEnd => Mode::Pointer,
        }
    }
}

/// Reacts to pointer or motion input for one attachment.
#[derive(Clone, Debug)]
pub struct Controller {
    settings: Settings,
    mode: Mode,
    size: Size,
    sensitivity: Sensitivity,
    seq: u64,
}

impl Controller {
    /// Creates a controller for a target measured at `size`.
    ///
    /// The mode is fixed here and never re-evaluated.
    #[must_use]
    pub fn new(settings: Settings, size: Size, env: Environment) -> Self {
        let sensitivity = Sensitivity::new(settings.strength, size);
        Self {
            mode: Mode::detect(env),
            settings,
            size,
            sensitivity,
            seq: 0,
        }
    }

    /// The resolved settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The selected mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The attachment-time target size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The derived sensitivity factors.
    #[must_use]
    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    /// Plans the background layer for this attachment.
    #[must_use]
    pub fn layer_plan(&self, image_url: Option<&str>) -> LayerPlan {
        LayerPlan::new(&self.settings, self.size, image_url)
    }

    /// Reports the attachment to `tracer`.
    pub fn trace_attach(&self, plan: &LayerPlan, tracer: &mut Tracer<'_>) {
        tracer.attach(&AttachEvent {
            mode: self.mode,
            size: self.size,
            sensitivity: self.sensitivity,
            placement: plan.placement,
            has_background: plan.background.is_some(),
        });
    }

    /// Handles one input event.
    ///
    /// Returns `true` if a style update was written to `surface`. Events that
    /// belong to the other mode are ignored.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        surface: &mut dyn Surface,
        tracer: &mut Tracer<'_>,
    ) -> bool {
        if event.mode() != self.mode {
            return false;
        }
        let seq = self.seq;
        self.seq += 1;

        match *event {
            InputEvent::Enter => {
                if self.settings.zooms_on_hover() {
                    set_mark(surface, tracer, seq, Mark::Entering, true);
                }
                let update = StyleUpdate {
                    transition: self.hover_transition(),
                    transform: geometry::hover_transform(self.settings.scale, Vec2::ZERO),
                };
                apply(surface, tracer, seq, Reaction::Enter, &update);
                true
            }
            InputEvent::Move { page, origin } => {
                let entering = surface.has_mark(Mark::Entering);
                let exiting = surface.has_mark(Mark::Exiting);
                if entering || exiting {
                    tracer.move_suppressed(&MoveSuppressedEvent {
                        seq,
                        entering,
                        exiting,
                    });
                    return false;
                }
                let offset = geometry::pointer_offset(page, origin, self.size, self.sensitivity);
                let update = StyleUpdate {
                    transition: Transition::Instant,
                    transform: geometry::hover_transform(self.settings.scale, offset),
                };
                apply(surface, tracer, seq, Reaction::Move, &update);
                true
            }
            InputEvent::Leave => {
                if self.settings.zooms_on_hover() {
                    set_mark(surface, tracer, seq, Mark::Exiting, true);
                }
                let update = StyleUpdate {
                    transition: self.hover_transition(),
                    transform: Affine::IDENTITY,
                };
                apply(surface, tracer, seq, Reaction::Leave, &update);
                true
            }
            InputEvent::TransitionEnd => {
                for mark in [Mark::Entering, Mark::Exiting] {
                    if surface.has_mark(mark) {
                        set_mark(surface, tracer, seq, mark, false);
                    }
                }
                false
            }
            InputEvent::Motion { acceleration } => {
                let Some(acceleration) = acceleration else {
                    tracer.motion_skipped(&MotionSkippedEvent { seq });
                    return false;
                };
                let offset = geometry::motion_offset(acceleration, self.settings.strength);
                let update = StyleUpdate {
                    transition: Transition::Unchanged,
                    transform: geometry::hover_transform(self.settings.scale, offset),
                };
                apply(surface, tracer, seq, Reaction::Motion, &update);
                true
            }
        }
    }

    fn hover_transition(&self) -> Transition {
        Transition::Linear(self.settings.animation_speed.clone())
    }
}

fn set_mark(surface: &mut dyn Surface, tracer: &mut Tracer<'_>, seq: u64, mark: Mark, on: bool) {
    surface.set_mark(mark, on);
    tracer.mark(&MarkEvent { seq, mark, on });
}

fn apply(
    surface: &mut dyn Surface,
    tracer: &mut Tracer<'_>,
    seq: u64,
    reaction: Reaction,
    update: &StyleUpdate,
) {
    surface.apply(update);
    tracer.style(&StyleEvent {
        seq,
        reaction,
        transition: (&update.transition).into(),
        transform: update.transform,
    });
}
