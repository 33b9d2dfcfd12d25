// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attaching the effect to a DOM element.
//!
//! [`InteractiveBackground::attach`] measures the target, builds the layer
//! and registers the listeners for the selected mode. Each listener forwards
//! its DOM event to the shared [`Controller`] as an [`InputEvent`].

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use backdrop_core::controller::{Controller, InputEvent};
use backdrop_core::layer::IMAGE_ATTRIBUTE;
use backdrop_core::mode::{Environment, Mode};
use backdrop_core::options::InteractiveBgOptions;
use backdrop_core::trace::{TraceSink, Tracer};
use kurbo::{Point, Size, Vec2};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{DeviceMotionEvent, Event, EventTarget, HtmlElement};

use crate::env;
use crate::surface::DomSurface;

type ListenerClosure = Closure<dyn FnMut(Event)>;

struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: ListenerClosure,
}

struct Shared {
    controller: Controller,
    surface: DomSurface,
    sink: Option<Box<dyn TraceSink>>,
}

impl Shared {
    fn dispatch(&mut self, event: &InputEvent) {
        let Self {
            controller,
            surface,
            sink,
        } = self;
        let mut tracer = match sink {
            Some(sink) => Tracer::new(&mut **sink),
            None => Tracer::none(),
        };
        controller.handle(event, surface, &mut tracer);
    }
}

/// One attachment of the effect to a target element.
///
/// Dropping the handle removes its listeners; the layer element stays in
/// place. Call [`forget`](Self::forget) to keep the listeners for as long as
/// the page keeps the element.
pub struct InteractiveBackground {
    shared: Rc<RefCell<Shared>>,
    listeners: Vec<Listener>,
}

impl core::fmt::Debug for InteractiveBackground {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("InteractiveBackground")
            .field("mode", &shared.controller.mode())
            .field("size", &shared.controller.size())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl InteractiveBackground {
    /// Attaches to `target`, probing the window for touch support and screen
    /// width.
    pub fn attach(
        target: &HtmlElement,
        options: &InteractiveBgOptions,
        sink: Option<Box<dyn TraceSink>>,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let env = env::probe(&window, &document)?;
        Self::attach_with_environment(target, options, env, sink)
    }

    /// Attaches to `target` with an explicit environment snapshot.
    pub fn attach_with_environment(
        target: &HtmlElement,
        options: &InteractiveBgOptions,
        env: Environment,
        mut sink: Option<Box<dyn TraceSink>>,
    ) -> Result<Self, JsValue> {
        let document = target
            .owner_document()
            .ok_or_else(|| JsValue::from_str("no owner document"))?;

        let size = Size::new(
            f64::from(target.offset_width()),
            f64::from(target.offset_height()),
        );
        let controller = Controller::new(options.resolve(), size, env);

        let image_url = target.get_attribute(IMAGE_ATTRIBUTE);
        let plan = controller.layer_plan(image_url.as_deref());
        let surface = DomSurface::build(&document, target, &plan)?;

        {
            let mut tracer = match &mut sink {
                Some(sink) => Tracer::new(&mut **sink),
                None => Tracer::none(),
            };
            controller.trace_attach(&plan, &mut tracer);
        }

        let mode = controller.mode();
        let layer = surface.layer().clone();
        let shared = Rc::new(RefCell::new(Shared {
            controller,
            surface,
            sink,
        }));
        let mut this = Self {
            shared,
            listeners: Vec::new(),
        };

        match mode {
            Mode::Motion => {
                let window =
                    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
                this.listen(window.into(), "devicemotion", |event| {
                    let motion: &DeviceMotionEvent = event.unchecked_ref();
                    InputEvent::Motion {
                        acceleration: motion_sample(motion),
                    }
                })?;
            }
            Mode::Pointer => {
                let el: EventTarget = target.clone().into();
                this.listen(el.clone(), "mouseenter", |_| InputEvent::Enter)?;
                let bounds = target.clone();
                this.listen(el.clone(), "mousemove", move |event| {
                    let rect = bounds.get_bounding_client_rect();
                    InputEvent::Move {
                        page: page_point(event),
                        origin: Point::new(rect.left(), rect.top()),
                    }
                })?;
                this.listen(el, "mouseleave", |_| InputEvent::Leave)?;
                this.listen(layer.into(), "transitionend", |_| InputEvent::TransitionEnd)?;
            }
        }

        Ok(this)
    }

    /// The selected mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.shared.borrow().controller.mode()
    }

    /// The generated layer element.
    #[must_use]
    pub fn layer(&self) -> HtmlElement {
        self.shared.borrow().surface.layer().clone()
    }

    /// Hands the listeners to the page, leaving them registered for the
    /// lifetime of the target element.
    pub fn forget(mut self) {
        for listener in self.listeners.drain(..) {
            listener.closure.forget();
        }
    }

    fn listen(
        &mut self,
        target: EventTarget,
        kind: &'static str,
        mut to_input: impl FnMut(&Event) -> InputEvent + 'static,
    ) -> Result<(), JsValue> {
        let shared = Rc::clone(&self.shared);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let input = to_input(&event);
            shared.borrow_mut().dispatch(&input);
        }) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        self.listeners.push(Listener {
            target,
            kind,
            closure,
        });
        Ok(())
    }
}

impl Drop for InteractiveBackground {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Pointer position in page coordinates, at full precision.
///
/// `MouseEvent::page_x` is bound as an integer; zoomed and high-DPI pages
/// report fractional positions. A missing coordinate reads as NaN.
fn page_point(event: &Event) -> Point {
    let coord = |key: &str| {
        js_sys::Reflect::get(event, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::NAN)
    };
    Point::new(coord("pageX"), coord("pageY"))
}

/// Gravity-inclusive acceleration, if the event carries both axes.
fn motion_sample(event: &DeviceMotionEvent) -> Option<Vec2> {
    let acc = event.acceleration_including_gravity()?;
    Some(Vec2::new(acc.x()?, acc.y()?))
}
