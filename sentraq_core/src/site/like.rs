// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Like button icon swap.

/// Icon style of a like button, keyed by its Font Awesome class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LikeIcon {
    /// Outline heart (`far`), not liked.
    Outline,
    /// Solid heart (`fas`), liked.
    Solid,
}

impl LikeIcon {
    /// Class applied to the icon.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Outline => "far",
            Self::Solid => "fas",
        }
    }

    /// Returns `true` for the liked state.
    #[must_use]
    pub const fn is_liked(self) -> bool {
        matches!(self, Self::Solid)
    }

    /// Reads the current icon from whether it carries the outline class.
    #[must_use]
    pub const fn from_outline_class(has_outline: bool) -> Self {
        if has_outline { Self::Outline } else { Self::Solid }
    }

    /// The icon after one click.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Outline => Self::Solid,
            Self::Solid => Self::Outline,
        }
    }
}
