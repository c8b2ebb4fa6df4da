// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables and DOM selectors for the site behaviors.
//!
//! Every behavior reads its own config struct. [`SiteConfig::sentraq`] bundles
//! the values the production page ships with.

/// Selectors and thresholds for product carousels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// One carousel per match.
    pub container: &'static str,
    /// Element receiving the `translateX` transform. Required.
    pub track: &'static str,
    /// Slide elements, in order. At least one is required.
    pub slide: &'static str,
    /// Optional "previous" control.
    pub prev_button: &'static str,
    /// Optional "next" control.
    pub next_button: &'static str,
    /// Optional dot indicators, in order.
    pub dot: &'static str,
    /// Optional area hosting the touch, drag and keyboard adapters.
    pub slider_area: &'static str,
    /// Accessible label given to the track.
    pub track_label: &'static str,
    /// Pointer travel, in CSS pixels, a gesture must exceed to count as a
    /// swipe.
    pub swipe_threshold: f64,
}

impl CarouselConfig {
    /// Product-card carousels as laid out on the Sentraq page.
    #[must_use]
    pub const fn sentraq() -> Self {
        Self {
            container: ".product-card",
            track: ".slider-track",
            slide: ".slide",
            prev_button: ".prev-btn",
            next_button: ".next-btn",
            dot: ".dot",
            slider_area: ".product-slider",
            track_label: "Product image carousel",
            swipe_threshold: 50.0,
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::sentraq()
    }
}

/// Cursor glow follower settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorGlowConfig {
    /// The glow element.
    pub selector: &'static str,
    /// Elements that enlarge the glow while hovered.
    pub interactive: &'static str,
    /// Viewports at or below this width (CSS px) hide the glow.
    pub min_viewport_width: f64,
    /// Fraction of the remaining distance covered per animation frame.
    pub ease: f64,
    /// Look while idle.
    pub idle: GlowLook,
    /// Look while hovering an interactive element.
    pub hover: GlowLook,
}

/// Size and colors of the cursor glow in one state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlowLook {
    /// Width and height, in CSS px.
    pub size_px: u32,
    /// CSS `background` value.
    pub background: &'static str,
    /// CSS `box-shadow` value.
    pub shadow: &'static str,
}

impl CursorGlowConfig {
    /// The teal glow used on the Sentraq page.
    #[must_use]
    pub const fn sentraq() -> Self {
        Self {
            selector: ".cursor-glow",
            interactive: "a, button, .product-card, .slider-btn, .action-btn",
            min_viewport_width: 768.0,
            ease: 0.1,
            idle: GlowLook {
                size_px: 20,
                background: "rgba(64, 224, 208, 0.1)",
                shadow: "0 0 20px rgba(64, 224, 208, 0.3)",
            },
            hover: GlowLook {
                size_px: 60,
                background: "rgba(64, 224, 208, 0.2)",
                shadow: "0 0 30px rgba(64, 224, 208, 0.7)",
            },
        }
    }
}

impl Default for CursorGlowConfig {
    fn default() -> Self {
        Self::sentraq()
    }
}

/// Navbar scroll effect thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarConfig {
    /// The navbar element.
    pub selector: &'static str,
    /// Class added once the page is scrolled.
    pub scrolled_class: &'static str,
    /// Vertical scroll (px) past which the navbar counts as scrolled.
    pub scrolled_after: f64,
    /// Vertical scroll (px) past which scrolling down hides the navbar.
    pub hide_after: f64,
}

impl NavbarConfig {
    /// Sentraq page defaults.
    #[must_use]
    pub const fn sentraq() -> Self {
        Self {
            selector: ".navbar",
            scrolled_class: "scrolled",
            scrolled_after: 50.0,
            hide_after: 100.0,
        }
    }
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self::sentraq()
    }
}

/// In-page anchor scrolling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Links handled by smooth scrolling.
    pub anchors: &'static str,
    /// Extra gap (px) left between the navbar and the scrolled-to target.
    pub padding: f64,
}

impl ScrollConfig {
    /// Sentraq page defaults.
    #[must_use]
    pub const fn sentraq() -> Self {
        Self {
            anchors: "a[href^=\"#\"]",
            padding: 20.0,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self::sentraq()
    }
}

/// Mobile menu elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuConfig {
    /// The toggle button.
    pub button: &'static str,
    /// The collapsible navigation actions.
    pub actions: &'static str,
    /// Class marking the actions as open.
    pub open_class: &'static str,
}

impl MenuConfig {
    /// Sentraq page defaults.
    #[must_use]
    pub const fn sentraq() -> Self {
        Self {
            button: ".mobile-menu-btn",
            actions: ".nav-actions",
            open_class: "active",
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::sentraq()
    }
}

/// Scroll-triggered fade-in and lazy image loading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Elements faded in on first intersection.
    pub fade_in: &'static str,
    /// Class added once an element has been seen.
    pub fade_in_class: &'static str,
    /// Visible fraction that triggers the fade-in.
    pub fade_in_threshold: f64,
    /// Elements whose image is loaded on first intersection.
    pub lazy: &'static str,
}

impl RevealConfig {
    /// Sentraq page defaults.
    #[must_use]
    pub const fn sentraq() -> Self {
        Self {
            fade_in: ".product-card, .contact-card, .hero-content",
            fade_in_class: "animate-in",
            fade_in_threshold: 0.1,
            lazy: "img[data-src], .slide-img[data-bg]",
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::sentraq()
    }
}

/// Everything the page needs, bundled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    /// Product carousels.
    pub carousel: CarouselConfig,
    /// Cursor glow.
    pub cursor_glow: CursorGlowConfig,
    /// Navbar scroll effect.
    pub navbar: NavbarConfig,
    /// Anchor scrolling.
    pub scroll: ScrollConfig,
    /// Mobile menu.
    pub menu: MenuConfig,
    /// Fade-in and lazy loading.
    pub reveal: RevealConfig,
    /// Element whose text becomes the current year.
    pub year: &'static str,
    /// Like buttons.
    pub like_button: &'static str,
}

impl SiteConfig {
    /// The configuration shipped with the Sentraq page.
    #[must_use]
    pub const fn sentraq() -> Self {
        Self {
            carousel: CarouselConfig::sentraq(),
            cursor_glow: CursorGlowConfig::sentraq(),
            navbar: NavbarConfig::sentraq(),
            scroll: ScrollConfig::sentraq(),
            menu: MenuConfig::sentraq(),
            reveal: RevealConfig::sentraq(),
            year: "#current-year",
            like_button: ".action-btn",
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::sentraq()
    }
}
