// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-level routing of mouse drags.
//!
//! One `mousemove` and one `mouseup` listener serve every carousel on the
//! page. Mouse-down in a carousel claims the [`DragOwner`] slot; the
//! document listeners deliver only to that owner.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use core::cell::RefCell;

use sentraq_core::gesture::DragOwner;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, MouseEvent};

use crate::carousel::SharedSlider;
use crate::dom;

#[derive(Default)]
struct RouterState {
    owner: DragOwner<usize>,
    sliders: BTreeMap<usize, SharedSlider>,
}

/// Routes document-wide mouse events to the carousel being dragged.
#[derive(Clone, Default)]
pub struct DragRouter {
    state: Rc<RefCell<RouterState>>,
}

impl core::fmt::Debug for DragRouter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("DragRouter")
            .field("owner", &state.owner.owner())
            .field("registered", &state.sliders.len())
            .finish()
    }
}

impl DragRouter {
    /// Creates a router and installs its document listeners.
    pub fn install(document: &Document) -> Result<Self, JsValue> {
        let router = Self::default();

        let moving = router.clone();
        dom::listen(document, "mousemove", move |event| {
            // Keeps the browser from starting a text or image drag-select.
            if moving.state.borrow().owner.owner().is_some() {
                event.prevent_default();
            }
        })?;

        let releasing = router.clone();
        dom::listen(document, "mouseup", move |event| {
            let Some(id) = releasing.state.borrow_mut().owner.release() else {
                return;
            };
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if let Some(slider) = releasing.slider(id) {
                slider.borrow_mut().mouse_up(f64::from(mouse.client_x()));
            }
        })?;

        Ok(router)
    }

    /// Makes carousel `id` reachable for routed releases.
    pub(crate) fn register(&self, id: usize, slider: SharedSlider) {
        self.state.borrow_mut().sliders.insert(id, slider);
    }

    /// Records that carousel `id` started a drag.
    ///
    /// A previous owner whose release never arrived has its drag cancelled.
    pub(crate) fn claim(&self, id: usize) {
        let stale = self.state.borrow_mut().owner.claim(id);
        if let Some(stale) = stale.and_then(|stale| self.slider(stale)) {
            log::debug!("cancelling stale drag before carousel {}", id + 1);
            stale.borrow_mut().cancel_drag();
        }
    }

    /// The carousel currently being dragged, if any.
    #[must_use]
    pub fn owner(&self) -> Option<usize> {
        self.state.borrow().owner.owner()
    }

    /// Number of carousels reachable for routed releases.
    #[must_use]
    pub fn registered(&self) -> usize {
        self.state.borrow().sliders.len()
    }

    fn slider(&self, id: usize) -> Option<SharedSlider> {
        self.state.borrow().sliders.get(&id).cloned()
    }
}
