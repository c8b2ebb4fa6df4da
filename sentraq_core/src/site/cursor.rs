// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor glow that eases toward the pointer.
//!
//! The web backend feeds pointer positions from `mousemove` and calls
//! [`CursorFollower::step`] once per animation frame.

use kurbo::Point;

use crate::config::{CursorGlowConfig, GlowLook};

/// Returns `true` if the glow should run at this viewport width.
///
/// Narrow (touch-first) layouts hide it.
#[must_use]
pub fn glow_enabled(viewport_width: f64, config: &CursorGlowConfig) -> bool {
    viewport_width > config.min_viewport_width
}

/// The look for the current hover state.
#[must_use]
pub const fn glow_look(hovering: bool, config: &CursorGlowConfig) -> GlowLook {
    if hovering { config.hover } else { config.idle }
}

/// Linear follower: each frame closes a fixed fraction of the gap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFollower {
    target: Point,
    current: Point,
    ease: f64,
}

impl CursorFollower {
    /// Starts at the origin with the configured easing factor.
    #[must_use]
    pub const fn new(config: &CursorGlowConfig) -> Self {
        Self {
            target: Point::ORIGIN,
            current: Point::ORIGIN,
            ease: config.ease,
        }
    }

    /// Records the latest pointer position.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.target = Point::new(x, y);
    }

    /// Advances one frame and returns the new glow position.
    pub fn step(&mut self) -> Point {
        self.current = self.current.lerp(self.target, self.ease);
        self.current
    }

    /// Current glow position.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closes_a_tenth_of_the_gap_per_frame() {
        let config = CursorGlowConfig::sentraq();
        let mut follower = CursorFollower::new(&config);
        follower.pointer_moved(100.0, 50.0);
        let p = follower.step();
        assert!((p.x - 10.0).abs() < 1e-9, "x={}", p.x);
        assert!((p.y - 5.0).abs() < 1e-9, "y={}", p.y);
        let p = follower.step();
        assert!((p.x - 19.0).abs() < 1e-9, "x={}", p.x);
    }

    #[test]
    fn converges_on_target() {
        let config = CursorGlowConfig::sentraq();
        let mut follower = CursorFollower::new(&config);
        follower.pointer_moved(400.0, 300.0);
        for _ in 0..200 {
            follower.step();
        }
        let p = follower.position();
        assert!((p.x - 400.0).abs() < 0.01 && (p.y - 300.0).abs() < 0.01);
    }

    #[test]
    fn hidden_on_narrow_viewports() {
        let config = CursorGlowConfig::sentraq();
        assert!(!glow_enabled(768.0, &config));
        assert!(glow_enabled(769.0, &config));
    }

    #[test]
    fn hover_enlarges() {
        let config = CursorGlowConfig::sentraq();
        assert_eq!(glow_look(true, &config).size_px, 60);
        assert_eq!(glow_look(false, &config).size_px, 20);
    }
}
