// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navbar shadow and hide-on-scroll.

use crate::config::NavbarConfig;

/// How the navbar should look after a scroll event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarState {
    /// Apply the "scrolled" styling.
    pub scrolled: bool,
    /// Slide the navbar out of view.
    pub hidden: bool,
}

impl NavbarState {
    /// CSS `transform` value for the navbar.
    #[must_use]
    pub const fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

/// Tracks the last scroll offset to tell scrolling down from up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavbarScroll {
    last: f64,
}

impl NavbarScroll {
    /// Feeds the current vertical scroll offset.
    ///
    /// The navbar hides while scrolling down past `hide_after` and reappears
    /// on any upward scroll.
    pub fn on_scroll(&mut self, y: f64, config: &NavbarConfig) -> NavbarState {
        let state = NavbarState {
            scrolled: y > config.scrolled_after,
            hidden: y > self.last && y > config.hide_after,
        };
        self.last = y;
        state
    }
}
