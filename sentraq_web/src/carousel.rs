// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Product carousels over the DOM.
//!
//! [`install`] finds every carousel container, builds a
//! [`Slider`] over a [`DomCarouselView`] for each, and wires the five input
//! adapters. Each adapter only translates an event into one `Slider` call.

use alloc::rc::Rc;
use alloc::string::ToString as _;
use alloc::vec::Vec;
use core::cell::RefCell;

use sentraq_core::config::CarouselConfig;
use sentraq_core::discovery::discover;
use sentraq_core::projection::{CarouselView, Projection};
use sentraq_core::slider::Slider;
use sentraq_core::{Error, Result};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

use crate::dom::{self, host};
use crate::drag::DragRouter;

/// A carousel shared between its event handlers.
pub type SharedSlider = Rc<RefCell<Slider<DomCarouselView>>>;

/// Presents carousel state on the elements of one container.
pub struct DomCarouselView {
    track: HtmlElement,
    slides: Vec<Element>,
    dots: Vec<Element>,
    prev: Option<Element>,
    next: Option<Element>,
    area: Option<HtmlElement>,
}

impl core::fmt::Debug for DomCarouselView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomCarouselView")
            .field("slides", &self.slides.len())
            .field("dots", &self.dots.len())
            .field("prev", &self.prev.is_some())
            .field("next", &self.next.is_some())
            .field("area", &self.area.is_some())
            .finish_non_exhaustive()
    }
}

impl CarouselView for DomCarouselView {
    // Individual attribute writes are best effort; a failed write leaves that
    // one attribute stale and the next render retries it.
    fn present(&mut self, projection: &Projection) {
        let _ = self
            .track
            .style()
            .set_property("transform", &projection.track_transform());

        for (i, dot) in self.dots.iter().enumerate() {
            let state = projection.dot(i);
            let _ = dot.class_list().toggle_with_force("active", state.active);
            let _ = dot.set_attribute("aria-label", &state.label);
        }

        if let Some(prev) = &self.prev {
            let _ = prev.toggle_attribute_with_force("disabled", projection.prev_disabled());
        }
        if let Some(next) = &self.next {
            let _ = next.toggle_attribute_with_force("disabled", projection.next_disabled());
        }

        for (i, slide) in self.slides.iter().enumerate() {
            let state = projection.slide(i);
            let _ = slide.set_attribute("aria-hidden", state.aria_hidden());
            let _ = slide.set_attribute("tabindex", &state.tab_index.to_string());
        }
    }

    fn set_dragging(&mut self, dragging: bool) {
        let Some(area) = &self.area else { return };
        let style = area.style();
        if dragging {
            let _ = style.set_property("cursor", "grabbing");
        } else {
            let _ = style.remove_property("cursor");
        }
    }
}

/// Sets up every carousel in `document`.
///
/// Containers that cannot be set up are logged and skipped. Returns the
/// carousels that were initialized, in document order.
pub fn install(
    document: &Document,
    config: &CarouselConfig,
    router: &DragRouter,
) -> Result<Vec<SharedSlider>, JsValue> {
    let containers = dom::query_all(document, config.container)?;
    Ok(discover("carousel", containers, |id, card| {
        setup(id, &card, config, router)
    }))
}

fn query_one(root: &Element, selector: &str) -> Result<Option<Element>> {
    root.query_selector(selector).map_err(host)
}

fn setup(
    id: usize,
    card: &Element,
    config: &CarouselConfig,
    router: &DragRouter,
) -> Result<SharedSlider> {
    let slides = dom::query_all_in(card, config.slide).map_err(host)?;
    if slides.is_empty() {
        return Err(Error::EmptyCarousel);
    }
    let track: HtmlElement = query_one(card, config.track)?
        .and_then(|el| el.dyn_into().ok())
        .ok_or(Error::MissingElement {
            selector: config.track,
        })?;
    let dots = dom::query_all_in(card, config.dot).map_err(host)?;
    if !dots.is_empty() && dots.len() != slides.len() {
        log::warn!(
            "carousel {}: {} dots for {} slides",
            id + 1,
            dots.len(),
            slides.len()
        );
    }
    let prev = query_one(card, config.prev_button)?;
    let next = query_one(card, config.next_button)?;
    let area: Option<HtmlElement> =
        query_one(card, config.slider_area)?.and_then(|el| el.dyn_into().ok());

    let total = slides.len();
    log::info!("setting up carousel {} with {total} slides", id + 1);

    let view = DomCarouselView {
        track: track.clone(),
        slides,
        dots: dots.clone(),
        prev: prev.clone(),
        next: next.clone(),
        area: area.clone(),
    };
    let slider: SharedSlider = Rc::new(RefCell::new(Slider::new(total, view, config)?));

    if let Some(prev) = &prev {
        bind_button(prev, &slider, |s| s.previous()).map_err(host)?;
    }
    if let Some(next) = &next {
        bind_button(next, &slider, |s| s.next()).map_err(host)?;
    }
    for (i, dot) in dots.iter().enumerate() {
        bind_button(dot, &slider, move |s| s.click_dot(i)).map_err(host)?;
    }

    match &area {
        Some(area) => {
            bind_touch(area, &slider).map_err(host)?;
            bind_drag(area, id, &slider, router).map_err(host)?;
            bind_keyboard(area, &slider).map_err(host)?;
        }
        None => log::debug!("carousel {}: no slider area, gestures disabled", id + 1),
    }

    track.set_attribute("tabindex", "0").map_err(host)?;
    track.set_attribute("role", "region").map_err(host)?;
    track
        .set_attribute("aria-label", config.track_label)
        .map_err(host)?;

    // Only carousels that finished setup receive routed releases.
    if area.is_some() {
        router.register(id, Rc::clone(&slider));
    }
    Ok(slider)
}

/// Click handler for controls that may sit inside other clickable regions.
fn bind_button(
    control: &Element,
    slider: &SharedSlider,
    action: impl Fn(&mut Slider<DomCarouselView>) -> bool + 'static,
) -> Result<(), JsValue> {
    let slider = Rc::clone(slider);
    dom::listen(control, "click", move |event: Event| {
        event.prevent_default();
        event.stop_propagation();
        action(&mut slider.borrow_mut());
    })
}

fn bind_touch(area: &HtmlElement, slider: &SharedSlider) -> Result<(), JsValue> {
    let starting = Rc::clone(slider);
    dom::listen_passive(area, "touchstart", move |event| {
        let Some(touch) = event
            .dyn_ref::<TouchEvent>()
            .and_then(|e| e.touches().get(0))
        else {
            return;
        };
        starting
            .borrow_mut()
            .touch_start(f64::from(touch.client_x()));
    })?;

    let ending = Rc::clone(slider);
    dom::listen_passive(area, "touchend", move |event| {
        let Some(touch) = event
            .dyn_ref::<TouchEvent>()
            .and_then(|e| e.changed_touches().get(0))
        else {
            return;
        };
        ending.borrow_mut().touch_end(f64::from(touch.client_x()));
    })
}

fn bind_drag(
    area: &HtmlElement,
    id: usize,
    slider: &SharedSlider,
    router: &DragRouter,
) -> Result<(), JsValue> {
    let slider = Rc::clone(slider);
    let router = router.clone();
    dom::listen(area, "mousedown", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        router.claim(id);
        slider.borrow_mut().mouse_down(f64::from(mouse.client_x()));
    })
}

fn bind_keyboard(area: &HtmlElement, slider: &SharedSlider) -> Result<(), JsValue> {
    let slider = Rc::clone(slider);
    dom::listen(area, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if slider.borrow_mut().key(&key) {
            event.prevent_default();
        }
    })
}

