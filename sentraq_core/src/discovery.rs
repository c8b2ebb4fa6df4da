// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fan-out over candidate containers.

use alloc::vec::Vec;

use crate::error::Error;

/// Initializes one instance per container, skipping the ones that fail.
///
/// `init` receives each container with its zero-based position. Failures are
/// logged with a one-based container number and never stop the remaining
/// containers from being initialized. Zero containers is a warning, not an
/// error.
pub fn discover<C, T>(
    kind: &str,
    containers: impl IntoIterator<Item = C>,
    mut init: impl FnMut(usize, C) -> Result<T, Error>,
) -> Vec<T> {
    let mut seen = 0_usize;
    let mut ready = Vec::new();
    for (position, container) in containers.into_iter().enumerate() {
        seen += 1;
        match init(position, container) {
            Ok(instance) => ready.push(instance),
            Err(err) => log::warn!("skipping {kind} {}: {err}", position + 1),
        }
    }
    if seen == 0 {
        log::warn!("no {kind} containers found");
    } else {
        log::info!("{} of {seen} {kind}s initialized", ready.len());
    }
    ready
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarouselConfig;
    use crate::projection::{CarouselView, Projection};
    use crate::slider::Slider;
    use alloc::vec;

    #[derive(Debug, Default)]
    struct NullView;

    impl CarouselView for NullView {
        fn present(&mut self, _: &Projection) {}
        fn set_dragging(&mut self, _: bool) {}
    }

    #[test]
    fn zero_containers_is_noop() {
        let built: Vec<usize> = discover("carousel", Vec::<usize>::new(), |_, c| Ok(c));
        assert!(built.is_empty());
    }

    #[test]
    fn broken_container_does_not_stop_the_rest() {
        let config = CarouselConfig::sentraq();
        let slide_counts = vec![3, 0, 2];
        let built = discover("carousel", slide_counts, |_, total| {
            Slider::new(total, NullView, &config)
        });
        assert_eq!(built.len(), 2);
        assert_eq!(built[0].total(), 3);
        assert_eq!(built[1].total(), 2);
    }

    #[test]
    fn instances_are_independent() {
        let config = CarouselConfig::sentraq();
        let mut built = discover("carousel", [4, 4], |_, total| {
            Slider::new(total, NullView, &config)
        });
        built[0].next();
        built[0].next();
        assert_eq!(built[0].index(), 2);
        assert_eq!(built[1].index(), 0);
    }

    #[test]
    fn init_sees_positions_in_order() {
        let mut order = Vec::new();
        let _ = discover("carousel", ['a', 'b', 'c'], |pos, c| {
            order.push((pos, c));
            if c == 'b' {
                Err(Error::MissingElement {
                    selector: ".slider-track",
                })
            } else {
                Ok(c)
            }
        });
        assert_eq!(order, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    }
}
