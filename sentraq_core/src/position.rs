// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel position store and the command surface that mutates it.
//!
//! [`Position`] is the single source of truth for which slide is showing.
//! Nothing outside this module writes its index; adapters express intent as a
//! [`Command`] and the store decides whether it applies.

use crate::error::{Error, Result};

/// A logical navigation request produced by an input adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Advance by one slide.
    Next,
    /// Go back by one slide.
    Previous,
    /// Jump to the slide at this zero-based index.
    Goto(usize),
}

/// Current slide index over a fixed slide count.
///
/// Invariant: `index < total` and `total >= 1`. Both ends are hard stops;
/// there is no wraparound from the last slide to the first or back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    index: usize,
    total: usize,
}

impl Position {
    /// Creates a store at the first slide.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCarousel`] when `total` is zero.
    pub const fn new(total: usize) -> Result<Self> {
        if total == 0 {
            return Err(Error::EmptyCarousel);
        }
        Ok(Self { index: 0, total })
    }

    /// Zero-based index of the active slide.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns `true` if the active slide is the first one.
    #[inline]
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Returns `true` if the active slide is the last one.
    #[inline]
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.index == self.total - 1
    }

    /// Moves to the following slide unless already on the last one.
    ///
    /// Returns `true` if the index changed.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Moves to the preceding slide unless already on the first one.
    ///
    /// Returns `true` if the index changed.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Jumps to `index` if it names an existing slide.
    ///
    /// Out-of-range requests are ignored rather than clamped: they come from
    /// controls that may be stale relative to the slide list.
    ///
    /// Returns `true` if the request was in range. Jumping to the active
    /// slide counts as applied even though the index does not move.
    pub fn goto_index(&mut self, index: usize) -> bool {
        if index >= self.total {
            return false;
        }
        self.index = index;
        true
    }

    /// Dispatches a [`Command`] to the matching operation.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::Goto(index) => self.goto_index(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        assert_eq!(Position::new(0), Err(Error::EmptyCarousel));
    }

    #[test]
    fn starts_at_first_slide() {
        let pos = Position::new(3).unwrap();
        assert_eq!(pos.index(), 0);
        assert_eq!(pos.total(), 3);
        assert!(pos.is_first());
        assert!(!pos.is_last());
    }

    #[test]
    fn previous_at_first_is_noop() {
        for total in 1..=6 {
            let mut pos = Position::new(total).unwrap();
            assert!(!pos.previous(), "total={total}");
            assert_eq!(pos.index(), 0, "total={total}");
        }
    }

    #[test]
    fn next_at_last_is_noop() {
        for total in 1..=6 {
            let mut pos = Position::new(total).unwrap();
            assert!(pos.goto_index(total - 1));
            assert!(!pos.next(), "total={total}");
            assert_eq!(pos.index(), total - 1, "total={total}");
        }
    }

    #[test]
    fn single_slide_is_both_ends() {
        let mut pos = Position::new(1).unwrap();
        assert!(pos.is_first() && pos.is_last());
        assert!(!pos.next());
        assert!(!pos.previous());
    }

    #[test]
    fn goto_out_of_range_is_ignored() {
        let mut pos = Position::new(4).unwrap();
        pos.next();
        assert!(!pos.goto_index(4));
        assert!(!pos.goto_index(usize::MAX));
        assert_eq!(pos.index(), 1, "out-of-range goto must not clamp");
    }

    #[test]
    fn index_stays_in_range_for_any_command_sequence() {
        let commands = [
            Command::Next,
            Command::Goto(7),
            Command::Previous,
            Command::Goto(2),
            Command::Next,
            Command::Next,
            Command::Next,
            Command::Goto(0),
            Command::Previous,
            Command::Goto(3),
        ];
        for total in 1..=5 {
            let mut pos = Position::new(total).unwrap();
            // Walk every rotation of the sequence so each command is tried
            // from many starting indices.
            for start in 0..commands.len() {
                for step in 0..commands.len() * 3 {
                    pos.apply(commands[(start + step) % commands.len()]);
                    assert!(pos.index() < total, "index escaped for total={total}");
                }
            }
        }
    }
}
