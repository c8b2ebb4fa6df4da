// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser bindings for the Sentraq site.
//!
//! This crate connects [`sentraq_core`] to the DOM:
//!
//! - [`carousel`]: product carousels, a [`DomCarouselView`] per container
//!   plus the button, dot, touch, mouse-drag and keyboard adapters
//! - [`DragRouter`]: document-level routing of mouse drags to the one
//!   carousel being dragged
//! - [`RafLoop`]: `requestAnimationFrame` loop behind the cursor glow
//! - the remaining page behaviors (menu, navbar, anchors, likes, fade-in,
//!   lazy images)
//!
//! Build with: `wasm-pack build --target web sentraq_web`. The module starts
//! itself once loaded; see [`start`].

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

pub mod carousel;
mod cursor;
mod dom;
mod drag;
mod page;
mod raf;
mod reveal;

use alloc::vec::Vec;

pub use carousel::{DomCarouselView, SharedSlider};
pub use drag::DragRouter;
pub use raf::RafLoop;
pub use sentraq_core::config::SiteConfig;

use wasm_bindgen::prelude::*;

/// Everything installed on the page.
///
/// Event handlers keep their own references, so dropping this only stops the
/// cursor glow animation.
#[derive(Debug)]
pub struct Site {
    /// Initialized carousels, in document order.
    pub carousels: Vec<SharedSlider>,
    /// Shared mouse-drag routing.
    pub drag: DragRouter,
    /// Cursor glow animation, when enabled.
    pub cursor_glow: Option<RafLoop>,
}

/// Routes `log` output to the browser console and panics to `console.error`.
///
/// Safe to call more than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Already initialized when the host called us first.
    let _ = console_log::init_with_level(level);
}

/// Installs every behavior described by `config` on the current document.
///
/// Carousel failures are per container and never abort the rest; failures of
/// the other behaviors are logged and skipped.
pub fn install(config: &SiteConfig) -> Result<Site, JsValue> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    page::install_all(&window, &document, config);

    let drag = DragRouter::install(&document)?;
    let carousels = carousel::install(&document, &config.carousel, &drag)?;

    let cursor_glow = cursor::install(&window, &document, &config.cursor_glow)
        .unwrap_or_else(|err| {
            log::warn!("cursor glow not installed: {err:?}");
            None
        });

    if let Err(err) = reveal::install_fade_in(&window, &document, &config.reveal) {
        log::warn!("fade-in not installed: {err:?}");
    }
    if let Err(err) = reveal::install_lazy_images(&window, &document, &config.reveal) {
        log::warn!("lazy images not installed: {err:?}");
    }

    Ok(Site {
        carousels,
        drag,
        cursor_glow,
    })
}

fn install_for_session(config: &SiteConfig) -> Result<(), JsValue> {
    let site = install(config)?;
    log::info!("Sentraq site ready: {} carousels", site.carousels.len());
    // The page never tears down; keep the animation loop alive for good.
    core::mem::forget(site);
    Ok(())
}

/// Entry point: installs the site once the document has been parsed.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    init_logging();
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let config = SiteConfig::sentraq();

    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Err(err) = install_for_session(&config) {
                log::error!("site setup failed: {err:?}");
            }
        })
    } else {
        install_for_session(&config)
    }
}
