use std::rc::Rc;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::dom::{self, DocumentListener};
use crate::hooks::MenuHandle;

/// Report document `mousedown`s to the open menu, tagged with whether they
/// landed inside `container`.
///
/// The listener lives as long as the calling component.
pub fn use_outside_click(container: Signal<Option<web_sys::Element>>, menu: MenuHandle) {
    let listener = use_hook(move || {
        let attached = DocumentListener::attach("mousedown", move |event: web_sys::MouseEvent| {
            if !menu.snapshot.peek().is_menu_open {
                return;
            }
            let within_panel = container
                .peek()
                .as_ref()
                .is_some_and(|element| dom::contains_target(element, event.target()));
            menu.outside_interaction(within_panel);
        });
        match attached {
            Ok(listener) => Some(Rc::new(listener)),
            Err(err) => {
                warn!(%err, "outside-click listener not attached");
                None
            }
        }
    });

    use_drop(move || {
        if let Some(listener) = listener.as_ref() {
            if let Err(err) = listener.detach() {
                warn!(%err, "outside-click listener not detached");
            }
        }
    });
}
