// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One carousel instance and its input adapters.
//!
//! A [`Slider`] owns a [`Position`], the view it renders to, and one gesture
//! session per pointer family. Each public method corresponds to one raw
//! input; all of them funnel into [`Slider::apply`], which mutates the
//! position and re-renders on change.

use crate::config::CarouselConfig;
use crate::error::Result;
use crate::gesture::{DragGesture, TouchGesture};
use crate::keyboard::key_command;
use crate::position::{Command, Position};
use crate::projection::{CarouselView, Projection};

/// A carousel: position store, view, and gesture state.
#[derive(Debug)]
pub struct Slider<V> {
    position: Position,
    view: V,
    touch: TouchGesture,
    drag: DragGesture,
    swipe_threshold: f64,
}

impl<V: CarouselView> Slider<V> {
    /// Creates a slider over `total` slides and renders the first one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCarousel`](crate::Error::EmptyCarousel) when
    /// `total` is zero; the view is dropped without being touched.
    pub fn new(total: usize, view: V, config: &CarouselConfig) -> Result<Self> {
        let position = Position::new(total)?;
        let mut slider = Self {
            position,
            view,
            touch: TouchGesture::default(),
            drag: DragGesture::default(),
            swipe_threshold: config.swipe_threshold,
        };
        slider.render();
        Ok(slider)
    }

    /// Zero-based index of the active slide.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.position.index()
    }

    /// Number of slides.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.position.total()
    }

    /// The current render projection.
    #[must_use]
    pub const fn projection(&self) -> Projection {
        Projection::of(&self.position)
    }

    /// The view this slider renders to.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Pushes the current projection to the view.
    pub fn render(&mut self) {
        let projection = self.projection();
        self.view.present(&projection);
    }

    /// Applies a command, re-rendering if it was accepted.
    ///
    /// Returns `true` if the command was accepted.
    pub fn apply(&mut self, command: Command) -> bool {
        let applied = self.position.apply(command);
        if applied {
            log::debug!(
                "carousel {command:?} -> slide {} of {}",
                self.position.index() + 1,
                self.position.total()
            );
            self.render();
        }
        applied
    }

    /// Advances by one slide.
    pub fn next(&mut self) -> bool {
        self.apply(Command::Next)
    }

    /// Goes back by one slide.
    pub fn previous(&mut self) -> bool {
        self.apply(Command::Previous)
    }

    /// Jumps to `index` if in range.
    pub fn goto_index(&mut self, index: usize) -> bool {
        self.apply(Command::Goto(index))
    }

    /// Click on a dot indicator.
    pub fn click_dot(&mut self, dot: usize) -> bool {
        self.goto_index(dot)
    }

    /// Key press in the slider area.
    ///
    /// Returns `true` if the key is handled, in which case the caller
    /// suppresses its default action.
    pub fn key(&mut self, key: &str) -> bool {
        match key_command(key, self.total()) {
            Some(command) => {
                self.apply(command);
                true
            }
            None => false,
        }
    }

    /// Touch-start at `x`.
    pub fn touch_start(&mut self, x: f64) {
        self.touch.start(x);
    }

    /// Touch-end at `x`.
    pub fn touch_end(&mut self, x: f64) {
        if let Some(command) = self.touch.end(x, self.swipe_threshold) {
            self.apply(command);
        }
    }

    /// Mouse-down in the slider area at `x`.
    pub fn mouse_down(&mut self, x: f64) {
        self.drag.press(x);
        self.view.set_dragging(true);
    }

    /// Returns `true` while a mouse drag on this slider is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Mouse-up at `x`, observed anywhere in the document.
    ///
    /// Returns `false` if this slider was not being dragged.
    pub fn mouse_up(&mut self, x: f64) -> bool {
        if !self.drag.is_dragging() {
            return false;
        }
        let command = self.drag.release(x, self.swipe_threshold);
        if let Some(command) = command {
            self.apply(command);
        }
        self.view.set_dragging(false);
        true
    }

    /// Drops an in-progress drag whose release was never delivered here.
    pub fn cancel_drag(&mut self) {
        if self.drag.is_dragging() {
            self.drag.cancel();
            self.view.set_dragging(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Records the DOM-equivalent writes a view would make.
    #[derive(Debug, Default)]
    struct RecordingView {
        dots: usize,
        slides: usize,
        transform: String,
        dot_active: Vec<bool>,
        prev_disabled: bool,
        next_disabled: bool,
        slide_hidden: Vec<bool>,
        dragging: bool,
        presents: usize,
    }

    impl RecordingView {
        fn new(slides: usize, dots: usize) -> Self {
            Self {
                dots,
                slides,
                ..Self::default()
            }
        }
    }

    impl CarouselView for RecordingView {
        fn present(&mut self, p: &Projection) {
            self.presents += 1;
            self.transform = p.track_transform();
            self.dot_active = (0..self.dots).map(|i| p.dot(i).active).collect();
            self.prev_disabled = p.prev_disabled();
            self.next_disabled = p.next_disabled();
            self.slide_hidden = (0..self.slides).map(|i| p.slide(i).hidden).collect();
        }

        fn set_dragging(&mut self, dragging: bool) {
            self.dragging = dragging;
        }
    }

    fn slider(total: usize) -> Slider<RecordingView> {
        Slider::new(
            total,
            RecordingView::new(total, total),
            &CarouselConfig::sentraq(),
        )
        .unwrap()
    }

    #[test]
    fn construction_renders_first_slide() {
        let s = slider(3);
        assert_eq!(s.view().presents, 1);
        assert_eq!(s.view().transform, "translateX(0%)");
        assert_eq!(s.view().dot_active, vec![true, false, false]);
        assert!(s.view().prev_disabled);
        assert!(!s.view().next_disabled);
        assert_eq!(s.view().slide_hidden, vec![false, true, true]);
    }

    #[test]
    fn empty_carousel_is_not_constructed() {
        let result = Slider::new(0, RecordingView::new(0, 0), &CarouselConfig::sentraq());
        assert!(result.is_err());
    }

    #[test]
    fn rejected_commands_do_not_render() {
        let mut s = slider(2);
        assert!(!s.previous());
        assert!(!s.goto_index(9));
        assert_eq!(s.view().presents, 1, "no-ops must not re-render");
    }

    #[test]
    fn rendering_twice_writes_the_same_state() {
        let mut s = slider(4);
        s.goto_index(2);
        let first = (
            s.view().transform.clone(),
            s.view().dot_active.clone(),
            s.view().slide_hidden.clone(),
        );
        s.render();
        let second = (
            s.view().transform.clone(),
            s.view().dot_active.clone(),
            s.view().slide_hidden.clone(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn digit_out_of_range_is_unhandled() {
        let mut s = slider(3);
        assert!(!s.key("7"));
        assert_eq!(s.index(), 0);
        assert!(s.key("3"));
        assert_eq!(s.index(), 2);
    }

    #[test]
    fn mouse_drag_toggles_dragging_mode() {
        let mut s = slider(3);
        s.mouse_down(300.0);
        assert!(s.view().dragging);
        assert!(s.is_dragging());
        assert!(s.mouse_up(240.0));
        assert!(!s.view().dragging);
        assert_eq!(s.index(), 1);
        assert!(!s.mouse_up(0.0), "second release belongs to no drag");
    }

    #[test]
    fn cancelled_drag_leaves_dragging_mode() {
        let mut s = slider(3);
        s.mouse_down(300.0);
        s.cancel_drag();
        assert!(!s.view().dragging);
        assert!(!s.mouse_up(0.0));
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn short_drag_is_a_click() {
        let mut s = slider(3);
        s.mouse_down(300.0);
        assert!(s.mouse_up(260.0));
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn touch_swipe_right_goes_back() {
        let mut s = slider(3);
        s.goto_index(2);
        s.touch_start(100.0);
        s.touch_end(200.0);
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn four_slide_walkthrough() {
        let mut s = slider(4);

        s.key("ArrowRight");
        s.key("ArrowRight");
        assert_eq!(s.index(), 2);

        s.click_dot(0);
        assert_eq!(s.index(), 0);

        s.touch_start(300.0);
        s.touch_end(220.0);
        assert_eq!(s.index(), 1);

        s.goto_index(3);
        assert!(s.view().next_disabled);
        assert!(!s.next());
        assert_eq!(s.index(), 3);
        assert!(s.view().next_disabled);
        assert_eq!(s.view().transform, "translateX(-300%)");
    }
}
