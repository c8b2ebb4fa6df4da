// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation chrome: footer year, mobile menu, navbar scroll effect,
//! anchor scrolling, like buttons, and the page error hook.
//!
//! Each installer is independent. A missing element disables only its own
//! behavior.

use alloc::rc::Rc;
use alloc::string::ToString as _;
use core::cell::Cell;

use sentraq_core::config::{MenuConfig, NavbarConfig, ScrollConfig, SiteConfig};
use sentraq_core::site::like::LikeIcon;
use sentraq_core::site::menu::MenuState;
use sentraq_core::site::navbar::NavbarScroll;
use sentraq_core::site::scroll::{anchor_target, scroll_top};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, ErrorEvent, HtmlElement, KeyboardEvent, Node, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::dom;

/// Writes the current year into the footer.
pub(crate) fn install_year(document: &Document, selector: &str) -> Result<(), JsValue> {
    if let Some(el) = document.query_selector(selector)? {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
    Ok(())
}

struct Menu {
    state: Cell<MenuState>,
    button: Element,
    actions: Element,
    body: Option<HtmlElement>,
    open_class: &'static str,
}

impl Menu {
    fn update(&self, change: impl FnOnce(&mut MenuState)) {
        let mut state = self.state.get();
        change(&mut state);
        self.state.set(state);

        let _ = self
            .button
            .set_attribute("aria-expanded", state.aria_expanded());
        let _ = self
            .actions
            .class_list()
            .toggle_with_force(self.open_class, state.is_open());
        if let Some(body) = &self.body {
            let style = body.style();
            let _ = match state.body_overflow() {
                Some(value) => style.set_property("overflow", value),
                None => style.remove_property("overflow").map(drop),
            };
        }
    }

    fn close(&self) {
        self.update(MenuState::close);
    }
}

/// Wires the mobile menu toggle and its close triggers.
pub(crate) fn install_menu(document: &Document, config: &MenuConfig) -> Result<(), JsValue> {
    let (Some(button), Some(actions)) = (
        document.query_selector(config.button)?,
        document.query_selector(config.actions)?,
    ) else {
        return Ok(());
    };
    let menu = Rc::new(Menu {
        state: Cell::new(MenuState::default()),
        button: button.clone(),
        actions: actions.clone(),
        body: document.body(),
        open_class: config.open_class,
    });

    let toggling = Rc::clone(&menu);
    dom::listen(&button, "click", move |_| {
        toggling.update(|state| {
            state.toggle();
        });
    })?;

    let outside = Rc::clone(&menu);
    dom::listen(document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        if !outside.button.contains(target.as_ref()) && !outside.actions.contains(target.as_ref())
        {
            outside.close();
        }
    })?;

    let escape = Rc::clone(&menu);
    dom::listen(document, "keydown", move |event| {
        if event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Escape")
        {
            escape.close();
        }
    })?;

    for link in dom::query_all_in(&actions, "a")? {
        let closing = Rc::clone(&menu);
        dom::listen(&link, "click", move |_| closing.close())?;
    }
    Ok(())
}

/// Shadows the navbar once scrolled and hides it while scrolling down.
pub(crate) fn install_navbar(
    window: &Window,
    document: &Document,
    config: &NavbarConfig,
) -> Result<(), JsValue> {
    let Some(navbar) = document
        .query_selector(config.selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let config = *config;
    let scrolling = window.clone();
    let mut tracker = NavbarScroll::default();
    dom::listen(window, "scroll", move |_| {
        let y = scrolling.page_y_offset().unwrap_or(0.0);
        let state = tracker.on_scroll(y, &config);
        let _ = navbar
            .class_list()
            .toggle_with_force(config.scrolled_class, state.scrolled);
        let _ = navbar.style().set_property("transform", state.transform());
    })
}

/// Smooth-scrolls in-page anchors to just below the navbar.
pub(crate) fn install_smooth_scroll(
    window: &Window,
    document: &Document,
    scroll: &ScrollConfig,
    navbar: &NavbarConfig,
) -> Result<(), JsValue> {
    let padding = scroll.padding;
    let navbar_selector = navbar.selector;
    for anchor in dom::query_all(document, scroll.anchors)? {
        let window = window.clone();
        let document = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            // Fragments that are not valid selectors fall through to the
            // browser's default jump.
            let Ok(Some(target)) = document.query_selector(selector) else {
                return;
            };
            event.prevent_default();

            let navbar_height = document
                .query_selector(navbar_selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map_or(0.0, |el| f64::from(el.offset_height()));
            let top = scroll_top(
                target.get_bounding_client_rect().top(),
                window.page_y_offset().unwrap_or(0.0),
                navbar_height,
                padding,
            );
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);

            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(selector));
            }

            let _ = target.set_attribute("tabindex", "-1");
            if let Some(focusable) = target.dyn_ref::<HtmlElement>() {
                let _ = focusable.focus();
            }
            let _ = target.remove_attribute("tabindex");
        })?;
    }
    Ok(())
}

/// Toggles like buttons between outline and solid hearts.
pub(crate) fn install_likes(document: &Document, selector: &str) -> Result<(), JsValue> {
    for button in dom::query_all(document, selector)? {
        let clicked = button.clone();
        dom::listen(&button, "click", move |_| {
            let Ok(Some(icon)) = clicked.query_selector("i") else {
                return;
            };
            let classes = icon.class_list();
            let current = LikeIcon::from_outline_class(classes.contains(LikeIcon::Outline.class()));
            let next = current.toggled();
            let _ = classes.remove_1(current.class());
            let _ = classes.add_1(next.class());
            let _ = clicked
                .class_list()
                .toggle_with_force("liked", next.is_liked());
        })?;
    }
    Ok(())
}

/// Logs uncaught page errors.
pub(crate) fn install_error_log(window: &Window) -> Result<(), JsValue> {
    dom::listen(window, "error", |event| {
        if let Some(error) = event.dyn_ref::<ErrorEvent>() {
            log::error!("page error: {} ({:?})", error.message(), error.error());
        }
    })
}

/// Installs every chrome behavior, logging the ones that fail.
pub(crate) fn install_all(window: &Window, document: &Document, config: &SiteConfig) {
    let results = [
        ("year", install_year(document, config.year)),
        ("menu", install_menu(document, &config.menu)),
        ("navbar", install_navbar(window, document, &config.navbar)),
        (
            "smooth scroll",
            install_smooth_scroll(window, document, &config.scroll, &config.navbar),
        ),
        ("likes", install_likes(document, config.like_button)),
        ("error log", install_error_log(window)),
    ];
    for (name, result) in results {
        if let Err(err) = result {
            log::warn!("{name} not installed: {err:?}");
        }
    }
}
