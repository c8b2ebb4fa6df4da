// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-page anchor scrolling.

/// Returns the fragment selector an anchor `href` points at.
///
/// A bare `#` is a placeholder link and yields `None`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

/// Document scroll offset that puts a target just below the fixed navbar.
///
/// `target_top` is the target's viewport-relative top, `page_offset` the
/// current vertical scroll.
#[must_use]
pub fn scroll_top(target_top: f64, page_offset: f64, navbar_height: f64, padding: f64) -> f64 {
    target_top + page_offset - (navbar_height + padding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_ignored() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#products"), Some("#products"));
        assert_eq!(anchor_target("/about"), None);
    }

    #[test]
    fn leaves_room_for_navbar() {
        assert_eq!(scroll_top(300.0, 1000.0, 80.0, 20.0), 1200.0);
    }
}
