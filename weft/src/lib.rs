//! A small toolkit for hash-routed single page applications.
//!
//! * [`dom`]: element construction ([`dom::TagBuilder`], [`dom::UiComponent`])
//! * [`url`]: splitting url paths into route parameters
//! * [`router`]: route table and dispatcher
//! * [`effect`]: futures and event listeners tied to a guard's lifetime

// NOTE: needs to be on top because it defines macros used elsewhere.
#[macro_use]
pub mod web;

pub mod dom;
pub mod effect;
pub mod router;
pub mod url;

pub use self::web::DomStr;

pub use futures_signals as signal;

use dom::View;

/// Render a view and attach it to `parent` for the rest of the page's life.
pub fn launch<F: FnOnce() -> V, V: Into<View>>(parent: &web_sys::Node, render: F) {
    let view = render().into().into_retained();
    view.append_to(parent);
    std::mem::forget(view);
}
