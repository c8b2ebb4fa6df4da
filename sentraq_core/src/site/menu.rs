// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile navigation menu.

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Returns `true` while the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the menu and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value for the button's `aria-expanded`.
    #[must_use]
    pub const fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Value for `body` `overflow`; `None` clears the property.
    ///
    /// The page behind an open menu does not scroll.
    #[must_use]
    pub const fn body_overflow(&self) -> Option<&'static str> {
        if self.open { Some("hidden") } else { None }
    }
}
