// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor glow driven by [`RafLoop`].

use alloc::format;
use alloc::rc::Rc;
use core::cell::RefCell;

use sentraq_core::config::CursorGlowConfig;
use sentraq_core::site::cursor::{CursorFollower, glow_enabled, glow_look};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::dom;
use crate::raf::RafLoop;

/// Starts the glow, or hides it on narrow viewports.
///
/// Returns the running loop, or `None` if the glow is absent or disabled.
pub(crate) fn install(
    window: &Window,
    document: &Document,
    config: &CursorGlowConfig,
) -> Result<Option<RafLoop>, JsValue> {
    let Some(glow) = document
        .query_selector(config.selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(None);
    };

    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    if !glow_enabled(width, config) {
        glow.style().set_property("display", "none")?;
        log::debug!("cursor glow disabled at {width}px");
        return Ok(None);
    }

    let follower = Rc::new(RefCell::new(CursorFollower::new(config)));

    let tracking = Rc::clone(&follower);
    dom::listen(document, "mousemove", move |event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            tracking
                .borrow_mut()
                .pointer_moved(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
        }
    })?;

    let config = *config;
    let document = document.clone();
    let raf = RafLoop::new(move |_timestamp_ms| {
        let at = follower.borrow_mut().step();
        let style = glow.style();
        let _ = style.set_property("left", &format!("{}px", at.x));
        let _ = style.set_property("top", &format!("{}px", at.y));

        let hovering = dom::query_all(&document, config.interactive)
            .map(|els| els.iter().any(|el| el.matches(":hover").unwrap_or(false)))
            .unwrap_or(false);
        let look = glow_look(hovering, &config);
        let size = format!("{}px", look.size_px);
        let _ = style.set_property("width", &size);
        let _ = style.set_property("height", &size);
        let _ = style.set_property("background", look.background);
        let _ = style.set_property("box-shadow", look.shadow);
    });
    raf.start();
    Ok(Some(raf))
}
