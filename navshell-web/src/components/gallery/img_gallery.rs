use dioxus::prelude::*;
use navshell_core::prelude::*;

use crate::hooks::use_carousel;

#[component]
pub fn ImgGallery() -> Element {
    let config = use_context::<ShellConfig>().gallery;
    let mut gallery = use_carousel(&config);

    let carousel = gallery.carousel.read().clone();
    let selected = carousel.current_index();
    let fade_style = format!("animation-duration: {}ms;", config.fade_ms);

    rsx! {
        div { id: "container",
            div { id: "navi",
                div { id: "page",
                    ul { id: "img_list",
                        for index in 0..carousel.len() {
                            li {
                                key: "{index}",
                                class: if selected == index { "selected" } else { "" },
                                onclick: move |_| gallery.select(index),
                                span {
                                    img { src: config.thumbnail_src(index), alt: "" }
                                }
                            }
                        }
                    }
                }
            }

            div { id: "main",
                // incoming image underneath, outgoing layers fade out above it
                for layer in carousel.layers() {
                    img {
                        key: "{layer.id}",
                        src: config.image_src(layer.index),
                        alt: "",
                        class: if layer.fading { "fading" } else { "" },
                        style: if layer.fading { fade_style.clone() } else { String::new() },
                    }
                }
            }
        }
    }
}
