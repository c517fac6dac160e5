use dioxus::prelude::*;
use navshell_core::prelude::*;

use crate::hooks::MenuHandle;

/// Inline CSS animation for one sub-item, if it takes part in `animation`
fn item_style(animation: Option<&Animation>, entry_index: usize, sub_index: usize) -> String {
    let Some(animation) = animation else {
        return String::new();
    };
    let Some(plan) = animation.stagger_plan() else {
        return String::new();
    };
    let Some(item) = plan
        .items
        .iter()
        .find(|item| item.entry_index == entry_index && item.sub_index == sub_index)
    else {
        return String::new();
    };

    let keyframes = if animation.is_reveal() { "menu-item-reveal" } else { "menu-item-collapse" };
    format!(
        "animation: {keyframes} {}ms ease {}ms both;",
        plan.item_duration.as_millis(),
        item.delay.as_millis()
    )
}

#[component]
pub fn MenuItem(record: MenuRecord, animation: Option<Animation>) -> Element {
    let menu = use_context::<MenuHandle>();
    let entry = record.entry.clone();
    let index = entry.index;

    rsx! {
        li {
            if entry.is_leaf() {
                {
                    let pathname = entry.pathname.clone();
                    rsx! {
                        div {
                            class: "parent",
                            onclick: move |_| menu.select_leaf(pathname.clone()),
                            span { "{entry.name}" }
                        }
                    }
                }
            } else {
                div {
                    class: "parent",
                    onclick: move |_| menu.toggle_accordion(index),
                    span { "{entry.name}" }
                    if entry.has_sub_entries() {
                        button { class: "accordion-toggle",
                            if record.is_open { "−" } else { "+" }
                        }
                    }
                }
            }

            if entry.has_sub_entries() && record.is_open {
                ul { class: "sub-menu-list",
                    for sub in entry.sub_entries.iter() {
                        {
                            let pathname = sub.pathname.clone();
                            let style = item_style(animation.as_ref(), index, sub.index);
                            rsx! {
                                li {
                                    key: "{sub.index}",
                                    style: "{style}",
                                    div {
                                        class: "sub-item",
                                        onclick: move |_| menu.select_leaf(pathname.clone()),
                                        "{sub.name}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
