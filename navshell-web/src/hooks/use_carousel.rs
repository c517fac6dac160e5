use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use navshell_core::prelude::*;

use crate::dom;

#[derive(Clone, Copy)]
pub struct CarouselState {
    pub carousel: Signal<Carousel>,
}

impl CarouselState {
    /// Show image `index`, discarding the outgoing layer once its fade ends
    pub fn select(&mut self, index: usize) {
        let result = self.carousel.write().select(index);
        match result {
            Ok(Some(fade)) => {
                let mut carousel = self.carousel;
                spawn(async move {
                    dom::sleep(fade.duration).await;
                    carousel.write().finish_fade(fade.layer);
                });
            }
            Ok(None) => {}
            Err(err) => warn!(%err, "image selection rejected"),
        }
    }
}

pub fn use_carousel(config: &GalleryConfig) -> CarouselState {
    let config = config.clone();
    let carousel = use_signal(move || Carousel::new(&config));
    CarouselState { carousel }
}
