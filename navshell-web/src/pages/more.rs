use dioxus::prelude::*;

use crate::pages::ContentPage;

#[component]
pub fn MoreNew() -> Element {
    rsx! { ContentPage { title: "신상", section: "More" } }
}

#[component]
pub fn MorePopular() -> Element {
    rsx! { ContentPage { title: "인기", section: "More" } }
}

#[component]
pub fn MoreTop() -> Element {
    rsx! { ContentPage { title: "상의", section: "More" } }
}

#[component]
pub fn MoreOuter() -> Element {
    rsx! { ContentPage { title: "아우터", section: "More" } }
}

#[component]
pub fn MorePants() -> Element {
    rsx! { ContentPage { title: "바지", section: "More" } }
}

#[component]
pub fn MoreShoes() -> Element {
    rsx! { ContentPage { title: "신발", section: "More" } }
}
