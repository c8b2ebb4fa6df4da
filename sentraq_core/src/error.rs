// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::string::String;

/// Reasons a carousel container could not be set up.
///
/// None of these are fatal to the page: discovery logs them and moves on to
/// the next container.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The container holds no slides.
    #[error("no slides found")]
    EmptyCarousel,
    /// A required element is missing from the container.
    #[error("required element `{selector}` not found")]
    MissingElement {
        /// The selector that matched nothing.
        selector: &'static str,
    },
    /// A call into the host document failed.
    #[error("host call failed: {0}")]
    Host(String),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
