use dioxus::prelude::*;

pub mod about;
pub mod more;

pub use about::{AboutIntro, AboutPrivacy, AboutTerms};
pub use more::{MoreNew, MoreOuter, MorePants, MorePopular, MoreShoes, MoreTop};

/// Placeholder body for routed pages; real content lives elsewhere
#[component]
pub fn ContentPage(title: String, section: String) -> Element {
    rsx! {
        section { class: "content-page",
            p { class: "content-section", "{section}" }
            h1 { "{title}" }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        ContentPage { title: "Home", section: "Main" }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        ContentPage { title: "Page not found", section: "/{path}" }
    }
}
