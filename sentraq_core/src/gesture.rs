// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe gestures from touch and mouse drag.
//!
//! Each carousel tracks two [`GestureSession`]s, one per pointer family.
//! Hybrid devices can emit both touch and mouse events for one physical
//! interaction, so the sessions never share state: each is evaluated against
//! its own start/end pair and reset on its own.
//!
//! Mouse-up is observed document-wide so drags that leave the carousel still
//! complete. [`DragOwner`] records which carousel the single active drag
//! belongs to, letting one document listener route the release.

use crate::position::Command;

/// Start and end X coordinates of one interaction.
///
/// Both are zero while idle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSession {
    /// Pointer X where the interaction began.
    pub start_x: f64,
    /// Pointer X where the interaction ended.
    pub end_x: f64,
}

impl GestureSession {
    /// Horizontal travel between start and end.
    #[must_use]
    pub fn distance(&self) -> f64 {
        if self.start_x > self.end_x {
            self.start_x - self.end_x
        } else {
            self.end_x - self.start_x
        }
    }

    /// The command this session produces, if its travel exceeds `threshold`.
    ///
    /// Leftward travel (`start_x > end_x`) advances; rightward goes back.
    /// Travel at or below the threshold is a tap or click, not a swipe.
    #[must_use]
    pub fn swipe(&self, threshold: f64) -> Option<Command> {
        if self.distance() <= threshold {
            return None;
        }
        if self.start_x > self.end_x {
            Some(Command::Next)
        } else {
            Some(Command::Previous)
        }
    }

    /// Returns the session to neutral.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Records `end_x`, evaluates, and resets.
    fn finish(&mut self, end_x: f64, threshold: f64) -> Option<Command> {
        self.end_x = end_x;
        let command = self.swipe(threshold);
        self.reset();
        command
    }
}

/// Touch swipe tracking.
///
/// Touch-start and touch-end bracket one interaction; there is no
/// intermediate state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchGesture {
    session: GestureSession,
}

impl TouchGesture {
    /// Records the first touch point of a touch-start.
    pub fn start(&mut self, x: f64) {
        self.session.start_x = x;
    }

    /// Records the first changed touch point of a touch-end and evaluates the
    /// swipe. The session is neutral afterwards.
    pub fn end(&mut self, x: f64, threshold: f64) -> Option<Command> {
        self.session.finish(x, threshold)
    }

    /// Current session values.
    #[must_use]
    pub const fn session(&self) -> GestureSession {
        self.session
    }
}

/// Mouse-drag swipe tracking with an idle/dragging flag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragGesture {
    session: GestureSession,
    dragging: bool,
}

impl DragGesture {
    /// Mouse-down inside the slider area: records the start and begins
    /// dragging.
    pub fn press(&mut self, x: f64) {
        self.session.start_x = x;
        self.dragging = true;
    }

    /// Returns `true` between press and release.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Mouse-up anywhere: ends the drag and evaluates the swipe.
    ///
    /// Returns `None` without touching the session when no drag is active.
    pub fn release(&mut self, x: f64, threshold: f64) -> Option<Command> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        self.session.finish(x, threshold)
    }

    /// Abandons the drag without evaluating it.
    pub fn cancel(&mut self) {
        self.dragging = false;
        self.session.reset();
    }

    /// Current session values.
    #[must_use]
    pub const fn session(&self) -> GestureSession {
        self.session
    }
}

/// Page-level record of which carousel owns the active mouse drag.
///
/// At most one drag is in progress for one pointer, so a single slot
/// suffices. `K` identifies a carousel (its discovery index in the web
/// backend).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragOwner<K> {
    owner: Option<K>,
}

impl<K> Default for DragOwner<K> {
    fn default() -> Self {
        Self { owner: None }
    }
}

impl<K: Copy + PartialEq> DragOwner<K> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { owner: None }
    }

    /// Makes `key` the owner, returning the previous owner if it was a
    /// different carousel (a drag whose release was never observed).
    pub fn claim(&mut self, key: K) -> Option<K> {
        self.owner.replace(key).filter(|prev| *prev != key)
    }

    /// Current owner.
    #[must_use]
    pub const fn owner(&self) -> Option<K> {
        self.owner
    }

    /// Clears and returns the current owner.
    pub fn release(&mut self) -> Option<K> {
        self.owner.take()
    }
}
