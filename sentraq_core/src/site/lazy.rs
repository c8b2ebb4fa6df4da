// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred image loading and the fade-in stylesheet.

use alloc::format;
use alloc::string::String;

/// Stylesheet injected alongside the fade-in observer.
///
/// Elements start transparent and shifted down; the `animate-in` class
/// settles them. Product cards stagger by position.
pub const FADE_IN_CSS: &str = "
.product-card, .contact-card, .hero-content {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
.product-card.animate-in,
.contact-card.animate-in,
.hero-content.animate-in {
    opacity: 1;
    transform: translateY(0);
}
.product-card:nth-child(1) { transition-delay: 0.1s; }
.product-card:nth-child(2) { transition-delay: 0.2s; }
.product-card:nth-child(3) { transition-delay: 0.3s; }
.product-card:nth-child(4) { transition-delay: 0.4s; }
.product-card:nth-child(5) { transition-delay: 0.5s; }
";

/// What to load once a lazy element scrolls into view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LazyLoad {
    /// New `src`, from `data-src`.
    pub src: Option<String>,
    /// New `background-image` value, from `data-bg`.
    pub background: Option<String>,
}

impl LazyLoad {
    /// Builds the load plan from an element's `data-src` and `data-bg`.
    ///
    /// Empty attributes are treated as absent.
    #[must_use]
    pub fn from_data(data_src: Option<String>, data_bg: Option<String>) -> Self {
        Self {
            src: data_src.filter(|s| !s.is_empty()),
            background: data_bg
                .filter(|s| !s.is_empty())
                .map(|url| background_image(&url)),
        }
    }

    /// Returns `true` if there is nothing to load.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.src.is_none() && self.background.is_none()
    }
}

/// CSS `background-image` value for `url`.
#[must_use]
pub fn background_image(url: &str) -> String {
    format!("url('{url}')")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;

    #[test]
    fn picks_up_both_sources() {
        let plan = LazyLoad::from_data(Some("a.jpg".to_string()), Some("b.jpg".to_string()));
        assert_eq!(plan.src.as_deref(), Some("a.jpg"));
        assert_eq!(plan.background.as_deref(), Some("url('b.jpg')"));
    }

    #[test]
    fn empty_attributes_load_nothing() {
        assert!(LazyLoad::from_data(Some(String::new()), None).is_empty());
        assert!(LazyLoad::from_data(None, None).is_empty());
    }
}
