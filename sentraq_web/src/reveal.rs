// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersection-driven effects: fade-in on first sight and lazy images.

use alloc::boxed::Box;

use js_sys::Array;
use sentraq_core::config::RevealConfig;
use sentraq_core::site::lazy::{FADE_IN_CSS, LazyLoad};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::dom;

fn supported(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Observes `targets`, calling `on_visible` once for each as it first
/// intersects.
fn observe_once(
    targets: &[Element],
    init: &IntersectionObserverInit,
    mut on_visible: impl FnMut(&Element) + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)?;
    callback.forget();
    for target in targets {
        observer.observe(target);
    }
    Ok(())
}

/// Fades elements in the first time they scroll into view.
pub(crate) fn install_fade_in(
    window: &Window,
    document: &Document,
    config: &RevealConfig,
) -> Result<(), JsValue> {
    if !supported(window) {
        log::warn!("IntersectionObserver unavailable, fade-in disabled");
        return Ok(());
    }
    let init = IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&JsValue::from_f64(config.fade_in_threshold));

    let class = config.fade_in_class;
    let targets = dom::query_all(document, config.fade_in)?;
    observe_once(&targets, &init, move |el| {
        let _ = el.class_list().add_1(class);
    })?;

    let style = document.create_element("style")?;
    style.set_text_content(Some(FADE_IN_CSS));
    if let Some(head) = document.head() {
        head.append_child(&style)?;
    }
    Ok(())
}

/// Loads `data-src` / `data-bg` images once they scroll into view.
pub(crate) fn install_lazy_images(
    window: &Window,
    document: &Document,
    config: &RevealConfig,
) -> Result<(), JsValue> {
    if !supported(window) {
        return Ok(());
    }
    let targets = dom::query_all(document, config.lazy)?;
    log::debug!("lazy loading {} images", targets.len());
    observe_once(&targets, &IntersectionObserverInit::new(), |el| {
        let plan = LazyLoad::from_data(el.get_attribute("data-src"), el.get_attribute("data-bg"));
        if let Some(src) = &plan.src {
            match el.dyn_ref::<HtmlImageElement>() {
                Some(img) => img.set_src(src),
                None => {
                    let _ = el.set_attribute("src", src);
                }
            }
            let _ = el.remove_attribute("data-src");
        }
        if let Some(background) = &plan.background
            && let Some(html) = el.dyn_ref::<HtmlElement>()
        {
            let _ = html.style().set_property("background-image", background);
            let _ = el.remove_attribute("data-bg");
        }
    })
}
