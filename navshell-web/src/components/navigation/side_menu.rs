use dioxus::prelude::*;
use navshell_core::prelude::*;

use crate::components::navigation::MenuItem;
use crate::hooks::MenuHandle;

#[component]
pub fn SideMenu() -> Element {
    let menu = use_context::<MenuHandle>();
    let snapshot = menu.snapshot.read().clone();
    let slide_ms = menu.animation.read().panel_slide_ms;

    let direction = if snapshot.is_menu_open { SlideDirection::In } else { SlideDirection::Out };
    let translate = direction.target_translate_percent();
    // fully parked off-screen once the slide-out has finished
    let visibility = if snapshot.phase == PanelPhase::Closed { "hidden" } else { "visible" };

    rsx! {
        div {
            class: "menu-content",
            style: "transform: translateX({translate}%); transition: transform {slide_ms}ms ease; visibility: {visibility};",

            div { class: "menu-header",
                span { "Menu List" }
                button {
                    class: "menu-btn close",
                    onclick: move |_| menu.toggle_panel(),
                    "✕"
                }
            }

            nav {
                ul { class: "menu-list",
                    for record in snapshot.records.iter() {
                        MenuItem {
                            key: "{record.entry.index}",
                            record: record.clone(),
                            animation: snapshot.animation.clone(),
                        }
                    }
                }
            }
        }
    }
}
