use futures::{
    future::{AbortHandle, Abortable},
    Future,
};
use wasm_bindgen::{prelude::Closure, JsCast};
use wasm_bindgen_futures::spawn_local;

use crate::dom::DomEvent;

/// Aborts the guarded future when dropped.
#[must_use]
pub struct EffectGuard {
    handle: AbortHandle,
}

impl Drop for EffectGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn spawn_guarded<F: Future<Output = ()> + 'static>(f: F) -> EffectGuard {
    let (handle, reg) = AbortHandle::new_pair();
    let f = Abortable::new(f, reg);
    spawn_local(async move {
        f.await.ok();
    });
    EffectGuard { handle }
}

/// An event listener on an arbitrary target, removed again when dropped.
#[must_use]
pub struct EventSubscription {
    event: crate::dom::Ev,
    target: web_sys::EventTarget,
    closure: Closure<dyn Fn(web_sys::Event)>,
}

impl EventSubscription {
    /// Listen for the typed [`DomEvent`] `E` on `target`.
    pub fn subscribe_dom<E: DomEvent + 'static, F: Fn(E) + 'static>(
        target: web_sys::EventTarget,
        callback: F,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        let event = E::event_type();
        let boxed: Box<dyn Fn(web_sys::Event)> = Box::new(move |raw: web_sys::Event| {
            if let Some(ev) = E::from_dom(raw) {
                callback(ev);
            }
        });
        let closure = Closure::wrap(boxed);

        target
            .add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())?;
        Ok(Self {
            event,
            target,
            closure,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Err(_err) = self.target.remove_event_listener_with_callback(
            self.event.as_str(),
            self.closure.as_ref().unchecked_ref(),
        ) {
            tracing::error!("Could not remove EventSubscription event listener");
        }
    }
}
