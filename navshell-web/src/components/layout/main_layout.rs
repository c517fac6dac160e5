use dioxus::prelude::*;

use crate::components::layout::Header;
use crate::Route;

#[component]
pub fn MainLayout() -> Element {
    rsx! {
        Header {}
        main { class: "content-area",
            Outlet::<Route> {}
        }
    }
}
