use dioxus::prelude::*;
use navshell_core::prelude::*;

use crate::components::navigation::SideMenu;
use crate::hooks::{use_menu_controller, use_outside_click};

#[component]
pub fn Header() -> Element {
    let config = use_context::<ShellConfig>();
    let menu = use_menu_controller(config.menu_template(), config.animation);

    // Hamburger and panel together: presses on either are not "outside"
    let mut menu_root = use_signal(|| None::<web_sys::Element>);
    use_outside_click(menu_root, menu);

    let is_open = menu.snapshot.read().is_menu_open;

    rsx! {
        header { class: "header",
            div {
                class: "menu",
                onmounted: move |event| {
                    if let Some(element) = event.data().downcast::<web_sys::Element>() {
                        menu_root.set(Some(element.clone()));
                    }
                },

                button {
                    class: "menu-btn",
                    title: if is_open { "Close menu" } else { "Open menu" },
                    onclick: move |_| menu.toggle_panel(),
                    "☰"
                }

                SideMenu {}
            }
        }
    }
}
