//! Image carousel: one current image, older images fading out above it

use std::collections::VecDeque;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::config::GalleryConfig;
use crate::error::{NavError, NavResult};

/// An image in the render tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselLayer {
    /// Unique per carousel, used as a render key
    pub id: u64,
    /// Which image the layer shows
    pub index: usize,
    /// Outgoing layers fade to transparent and are then discarded
    pub fading: bool,
}

/// Cross-fade started by [`Carousel::select`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fade {
    /// Layer that is fading out
    pub layer: u64,
    pub from: usize,
    pub to: usize,
    pub duration: Duration,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    fade: Duration,
    current: usize,
    /// Paint order: incoming image first, older fading layers after it
    layers: VecDeque<CarouselLayer>,
    next_layer: u64,
}

impl Carousel {
    /// A carousel showing the first image
    pub fn new(config: &GalleryConfig) -> Self {
        let mut carousel = Self {
            len: config.image_count,
            fade: config.fade(),
            current: 0,
            layers: VecDeque::new(),
            next_layer: 0,
        };
        if carousel.len > 0 {
            let layer = carousel.layer(0);
            carousel.layers.push_front(layer);
        }
        carousel
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Layers to render, in paint order
    pub fn layers(&self) -> impl Iterator<Item = &CarouselLayer> {
        self.layers.iter()
    }

    pub fn is_fading(&self) -> bool {
        self.layers.iter().any(|layer| layer.fading)
    }

    /// Make image `index` current.
    ///
    /// Out-of-range indices are rejected and leave the carousel unchanged.
    /// Re-selecting the current image does nothing.
    pub fn select(&mut self, index: usize) -> NavResult<Option<Fade>> {
        if index >= self.len {
            return Err(NavError::InvalidImageIndex {
                index,
                len: self.len,
            });
        }
        if index == self.current {
            return Ok(None);
        }

        let duration = self.fade;
        let fade = self.layers.front_mut().map(|outgoing| {
            outgoing.fading = true;
            Fade {
                layer: outgoing.id,
                from: outgoing.index,
                to: index,
                duration,
            }
        });

        let incoming = self.layer(index);
        self.layers.push_front(incoming);
        self.current = index;
        debug!(from = ?fade.map(|f| f.from), to = index, "carousel selection");
        Ok(fade)
    }

    /// Drop a layer whose fade has finished. Returns whether it was removed.
    pub fn finish_fade(&mut self, layer: u64) -> bool {
        let before = self.layers.len();
        self.layers.retain(|l| !(l.id == layer && l.fading));
        before != self.layers.len()
    }

    fn layer(&mut self, index: usize) -> CarouselLayer {
        self.next_layer += 1;
        CarouselLayer {
            id: self.next_layer,
            index,
            fading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> Carousel {
        Carousel::new(&GalleryConfig::default())
    }

    fn indices(carousel: &Carousel) -> Vec<usize> {
        carousel.layers().map(|l| l.index).collect()
    }

    #[test]
    fn test_starts_on_first_image() {
        let c = carousel();
        assert_eq!(c.current_index(), 0);
        assert_eq!(indices(&c), vec![0]);
        assert!(!c.is_fading());
    }

    #[test]
    fn test_select_overlays_and_fades_previous() {
        let mut c = carousel();
        let fade = c.select(3).unwrap().unwrap();
        assert_eq!((fade.from, fade.to), (0, 3));
        assert_eq!(fade.duration, Duration::from_millis(300));
        assert_eq!(indices(&c), vec![3, 0]);
        assert!(c.is_fading());

        assert!(c.finish_fade(fade.layer));
        assert_eq!(indices(&c), vec![3]);
        assert!(!c.finish_fade(fade.layer));
    }

    #[test]
    fn test_rapid_selections_stack_layers() {
        let mut c = carousel();
        let first = c.select(1).unwrap().unwrap();
        let second = c.select(2).unwrap().unwrap();
        assert_eq!(indices(&c), vec![2, 1, 0]);

        c.finish_fade(first.layer);
        assert_eq!(indices(&c), vec![2, 1]);
        c.finish_fade(second.layer);
        assert_eq!(indices(&c), vec![2]);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut c = carousel();
        c.select(5).unwrap();
        let result = c.select(8);
        assert!(matches!(result, Err(NavError::InvalidImageIndex { index: 8, len: 8 })));
        assert_eq!(c.current_index(), 5);
        assert_eq!(indices(&c), vec![5, 0]);
    }

    #[test]
    fn test_reselect_current_is_noop() {
        let mut c = carousel();
        assert_eq!(c.select(0).unwrap(), None);
        assert_eq!(indices(&c), vec![0]);
    }

    #[test]
    fn test_current_layer_cannot_be_finished() {
        let mut c = carousel();
        let current = c.layers().next().unwrap().id;
        assert!(!c.finish_fade(current));
    }
}
