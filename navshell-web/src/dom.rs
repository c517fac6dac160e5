//! Thin helpers over `web-sys` for timers and document listeners

use std::time::Duration;

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, EventTarget, Node};

#[derive(Error, Debug)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// Resolve after `duration` using `setTimeout`
pub async fn sleep(duration: Duration) {
    let millis = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|window| window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis));
        if !matches!(scheduled, Some(Ok(_))) {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Whether the event target sits inside `container`
pub fn contains_target(container: &Element, target: Option<EventTarget>) -> bool {
    target
        .as_ref()
        .and_then(|target| target.dyn_ref::<Node>())
        .is_some_and(|node| container.contains(Some(node)))
}

/// A listener registered on the document, removed again on [`DocumentListener::detach`]
pub struct DocumentListener {
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl DocumentListener {
    pub fn attach(
        event: &'static str,
        handler: impl FnMut(web_sys::MouseEvent) + 'static,
    ) -> Result<Self, DomError> {
        let callback = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(handler);
        document()?.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { event, callback })
    }

    pub fn detach(&self) -> Result<(), DomError> {
        document()?.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())?;
        Ok(())
    }
}
