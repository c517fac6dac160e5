use dioxus::prelude::*;

use crate::pages::ContentPage;

#[component]
pub fn AboutIntro() -> Element {
    rsx! { ContentPage { title: "Intro", section: "About" } }
}

#[component]
pub fn AboutPrivacy() -> Element {
    rsx! { ContentPage { title: "Privacy", section: "About" } }
}

#[component]
pub fn AboutTerms() -> Element {
    rsx! { ContentPage { title: "Terms", section: "About" } }
}
