// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render projection: the visual and assistive state derived from a
//! [`Position`].
//!
//! [`Projection`] is a pure function of `(index, total)`. Backends implement
//! [`CarouselView`] to write a projection onto real elements.

use alloc::format;
use alloc::string::String;

use crate::position::Position;

/// Everything a view needs to show one carousel state.
///
/// Two projections built from equal positions compare equal, so presenting
/// the same state twice produces the same writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Projection {
    index: usize,
    total: usize,
}

/// State of one dot indicator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotState {
    /// The dot marks the active slide.
    pub active: bool,
    /// Accessible label, e.g. `Slide 2 of 4`.
    pub label: String,
}

/// Accessibility state of one slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideState {
    /// Value for `aria-hidden`.
    pub hidden: bool,
    /// Value for `tabindex`: `0` for the active slide, `-1` otherwise.
    pub tab_index: i32,
}

impl SlideState {
    /// The `aria-hidden` attribute value.
    #[must_use]
    pub const fn aria_hidden(&self) -> &'static str {
        if self.hidden { "true" } else { "false" }
    }
}

impl Projection {
    /// Projects the given position.
    #[must_use]
    pub const fn of(position: &Position) -> Self {
        Self {
            index: position.index(),
            total: position.total(),
        }
    }

    /// Active slide index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Horizontal track offset in percent of the visible frame.
    ///
    /// Each slide is exactly one frame wide, so slide `index` sits at
    /// `-index * 100`.
    #[must_use]
    pub fn offset_percent(&self) -> i64 {
        -i64::try_from(self.index)
            .unwrap_or(i64::MAX)
            .saturating_mul(100)
    }

    /// CSS `transform` value for the track.
    #[must_use]
    pub fn track_transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent())
    }

    /// State for the dot at `position`.
    ///
    /// Defined for any position so views with more dots than slides still get
    /// an inactive, labelled dot.
    #[must_use]
    pub fn dot(&self, position: usize) -> DotState {
        DotState {
            active: position == self.index,
            label: format!("Slide {} of {}", position + 1, self.total),
        }
    }

    /// State for the slide at `position`.
    #[must_use]
    pub const fn slide(&self, position: usize) -> SlideState {
        let active = position == self.index;
        SlideState {
            hidden: !active,
            tab_index: if active { 0 } else { -1 },
        }
    }

    /// The "previous" control is disabled on the first slide.
    #[must_use]
    pub const fn prev_disabled(&self) -> bool {
        self.index == 0
    }

    /// The "next" control is disabled on the last slide.
    #[must_use]
    pub const fn next_disabled(&self) -> bool {
        self.index + 1 == self.total
    }
}

/// Writes carousel state onto a presentation surface.
///
/// The DOM backend implements this over real elements; tests use recording
/// doubles.
pub trait CarouselView {
    /// Shows the given projection.
    ///
    /// Must be idempotent: presenting an equal projection again leaves the
    /// surface unchanged.
    fn present(&mut self, projection: &Projection);

    /// Enters or leaves the mouse-drag visual mode.
    fn set_dragging(&mut self, dragging: bool);
}
