// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-independent state for the Sentraq marketing site.
//!
//! `sentraq_core` holds everything about the site's client-side behavior that
//! can be expressed without a live document. It is `no_std` compatible (with
//! `alloc`), so every piece here is testable natively; the `sentraq_web`
//! crate binds it to the DOM.
//!
//! # Architecture
//!
//! The product image carousel is the only component with real state. Input
//! from five independent sources converges on one narrow command surface:
//!
//! ```text
//!   click prev/next ─┐
//!   click dot ───────┤
//!   key ─────────────┼──► Command ──► Position::apply() ──► Projection
//!   touch swipe ─────┤                                           │
//!   mouse drag ──────┘                                           ▼
//!                                                  CarouselView::present()
//! ```
//!
//! **[`position`]** — The position store (`index`, `total`) and the
//! [`Command`](position::Command) enum every adapter produces.
//!
//! **[`projection`]** — The pure render function and the
//! [`CarouselView`](projection::CarouselView) trait that backends implement.
//!
//! **[`gesture`]** — Touch and mouse-drag gesture sessions, the swipe
//! decision, and the page-level [`DragOwner`](gesture::DragOwner).
//!
//! **[`keyboard`]** — Key-to-command mapping.
//!
//! **[`slider`]** — [`Slider`](slider::Slider), one carousel instance: the
//! position store, its view and both gesture sessions, exposed as one method
//! per input adapter.
//!
//! **[`discovery`]** — Fan-out over candidate containers that skips broken
//! ones without aborting the rest.
//!
//! **[`site`]** — State for the simpler page behaviors (navbar, cursor glow,
//! mobile menu, like buttons, anchor scrolling, lazy loading).
//!
//! **[`config`]** — Tunables and DOM selectors.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod discovery;
pub mod error;
pub mod gesture;
pub mod keyboard;
pub mod position;
pub mod projection;
pub mod site;
pub mod slider;

pub use error::{Error, Result};
