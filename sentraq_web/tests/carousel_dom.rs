// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel adapters against a real document.
//!
//! Run with: `wasm-pack test --headless --firefox sentraq_web`

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use sentraq_core::config::CarouselConfig;
use sentraq_web::{DragRouter, SharedSlider, carousel};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, KeyboardEventInit,
    MouseEvent, MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Appends a product card with `slides` slides and matching dots, marked
/// with `class` so each test discovers only its own card.
fn card(class: &str, slides: usize) -> Element {
    let doc = document();
    let mut html = String::from(
        r#"<div class="product-slider"><div class="slider-track">"#,
    );
    for i in 0..slides {
        html.push_str(&format!(r#"<div class="slide">{i}</div>"#));
    }
    html.push_str(r#"</div></div><button class="prev-btn">prev</button><button class="next-btn">next</button>"#);
    for _ in 0..slides {
        html.push_str(r#"<span class="dot"></span>"#);
    }
    let card = doc.create_element("div").unwrap();
    card.set_class_name(class);
    card.set_inner_html(&html);
    doc.body().unwrap().append_child(&card).unwrap();
    card
}

fn config(container: &'static str) -> CarouselConfig {
    CarouselConfig {
        container,
        ..CarouselConfig::sentraq()
    }
}

fn install(container: &'static str) -> Vec<SharedSlider> {
    let doc = document();
    let router = DragRouter::install(&doc).unwrap();
    carousel::install(&doc, &config(container), &router).unwrap()
}

fn find(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn key(target: &Element, key: &str) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event.default_prevented()
}

/// Dispatches a bubbling, cancelable mouse event; returns whether a handler
/// suppressed its default.
fn mouse(target: &EventTarget, kind: &str, x: i32) -> bool {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event.default_prevented()
}

fn cursor(area: &HtmlElement) -> String {
    area.style().get_property_value("cursor").unwrap()
}

#[wasm_bindgen_test]
fn initial_render_marks_first_slide() {
    let card = card("t-initial", 3);
    let sliders = install(".t-initial");
    assert_eq!(sliders.len(), 1);

    let track = find(&card, ".slider-track");
    assert_eq!(
        track.style().get_property_value("transform").unwrap(),
        "translateX(0%)"
    );
    assert_eq!(track.get_attribute("role").as_deref(), Some("region"));
    assert!(find(&card, ".prev-btn").has_attribute("disabled"));
    assert!(!find(&card, ".next-btn").has_attribute("disabled"));
    let first_dot = find(&card, ".dot");
    assert!(first_dot.class_list().contains("active"));
    assert_eq!(
        first_dot.get_attribute("aria-label").as_deref(),
        Some("Slide 1 of 3")
    );
    assert_eq!(
        find(&card, ".slide").get_attribute("aria-hidden").as_deref(),
        Some("false")
    );
}

#[wasm_bindgen_test]
fn buttons_dots_and_keys_drive_the_slider() {
    let card = card("t-inputs", 4);
    let sliders = install(".t-inputs");
    let slider = &sliders[0];
    let area: Element = find(&card, ".product-slider").into();

    assert!(key(&area, "ArrowRight"));
    assert!(key(&area, "ArrowRight"));
    assert_eq!(slider.borrow().index(), 2);

    let dots = card.query_selector_all(".dot").unwrap();
    dots.get(0)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    assert_eq!(slider.borrow().index(), 0);

    find(&card, ".next-btn").click();
    assert_eq!(slider.borrow().index(), 1);

    assert!(!key(&area, "7"), "out-of-range digit keeps its default");
    assert!(key(&area, "4"));
    assert_eq!(slider.borrow().index(), 3);
    assert!(find(&card, ".next-btn").has_attribute("disabled"));
}

#[wasm_bindgen_test]
fn drag_released_outside_the_carousel_still_swipes() {
    let card = card("t-drag", 3);
    let doc = document();
    let router = DragRouter::install(&doc).unwrap();
    let sliders = carousel::install(&doc, &config(".t-drag"), &router).unwrap();
    let area = find(&card, ".product-slider");

    mouse(&area, "mousedown", 400);
    assert_eq!(router.owner(), Some(0));
    assert_eq!(
        area.style().get_property_value("cursor").unwrap(),
        "grabbing"
    );

    mouse(&doc, "mouseup", 300);
    assert_eq!(router.owner(), None);
    assert_eq!(sliders[0].borrow().index(), 1);
    assert_eq!(area.style().get_property_value("cursor").unwrap(), "");
}

#[wasm_bindgen_test]
fn empty_card_is_skipped_without_stopping_discovery() {
    card("t-mixed", 2);
    card("t-mixed", 0);
    card("t-mixed", 3);
    let sliders = install(".t-mixed");
    let totals: Vec<usize> = sliders.iter().map(|s| s.borrow().total()).collect();
    assert_eq!(totals, vec![2, 3]);
}

#[wasm_bindgen_test]
fn release_reaches_only_the_dragged_carousel() {
    let doc = document();
    let first = card("t-route", 3);
    let second = card("t-route", 3);
    let router = DragRouter::install(&doc).unwrap();
    let sliders = carousel::install(&doc, &config(".t-route"), &router).unwrap();
    let (area_a, area_b) = (
        find(&first, ".product-slider"),
        find(&second, ".product-slider"),
    );

    assert!(!mouse(&doc, "mousemove", 10), "no drag, default kept");

    mouse(&area_b, "mousedown", 400);
    assert_eq!(router.owner(), Some(1));
    assert!(mouse(&doc, "mousemove", 350), "drag suppresses selection");
    mouse(&doc, "mouseup", 300);
    assert_eq!(sliders[0].borrow().index(), 0);
    assert_eq!(sliders[1].borrow().index(), 1);

    // A drag whose release never arrived is cancelled by the next press.
    mouse(&area_a, "mousedown", 400);
    assert_eq!(cursor(&area_a), "grabbing");
    mouse(&area_b, "mousedown", 400);
    assert_eq!(router.owner(), Some(1));
    assert_eq!(cursor(&area_a), "");
    assert!(!sliders[0].borrow().is_dragging());

    mouse(&doc, "mouseup", 500);
    assert_eq!(router.owner(), None);
    assert_eq!(sliders[0].borrow().index(), 0);
    assert_eq!(sliders[1].borrow().index(), 0);
    assert!(!mouse(&doc, "mousemove", 10));
}

#[wasm_bindgen_test]
fn control_clicks_stay_inside_the_carousel() {
    let card = card("t-nested", 3);
    let sliders = install(".t-nested");
    let bubbled = Rc::new(Cell::new(false));
    let flag = Rc::clone(&bubbled);
    let on_click = Closure::wrap(Box::new(move |_: Event| flag.set(true)) as Box<dyn FnMut(Event)>);
    card.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .unwrap();
    on_click.forget();

    assert!(mouse(&find(&card, ".next-btn"), "click", 0));
    assert_eq!(sliders[0].borrow().index(), 1);

    let last_dot = card.query_selector_all(".dot").unwrap().get(2).unwrap();
    assert!(mouse(&last_dot, "click", 0));
    assert_eq!(sliders[0].borrow().index(), 2);

    assert!(!bubbled.get(), "control clicks must not reach the card");
}

#[wasm_bindgen_test]
fn only_initialized_carousels_receive_releases() {
    card("t-registered", 2);
    card("t-registered", 0);
    card("t-registered", 4);
    let doc = document();
    let router = DragRouter::install(&doc).unwrap();
    let sliders = carousel::install(&doc, &config(".t-registered"), &router).unwrap();
    assert_eq!(sliders.len(), 2);
    assert_eq!(router.registered(), 2);
}
