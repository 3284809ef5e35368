//! Helpers for interacting with the browser environment.

use js_sys::JsString;
use wasm_bindgen::JsCast;

/// Defines an enum that maps to plain string values and provides a cache
/// of `JsString`s for interaction with the dom.
///
/// This is useful for commonly used strings to prevent the overhead of
/// constant string re-encoding (UTF8 => UTF16 conversion).
#[macro_export]
macro_rules! make_str_enum {

    (
        $enum_name:ident {
            $( $name:ident = $value:literal, )*
        }
    ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $( $name, )*
        }

        impl $enum_name {

            /// Convert to a string.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(
                        Self::$name => $value,
                    )*
                }
            }

            /// Get the cached javascript string for this value.
            pub fn as_js_string(self) -> js_sys::JsString {
                match self {
                $(
                    Self::$name => {
                        thread_local! {
                            static VALUE: js_sys::JsString = js_sys::JsString::from($value);
                        }
                        VALUE.with(|v| v.clone())
                    }
                 )*
                }
            }
        }

        impl From<$enum_name> for $crate::DomStr<'static> {
            fn from(value: $enum_name) -> Self {
                Self::JsString(value.as_js_string())
            }
        }
    };
}

use crate::dom::{Attr, Ev, Style, Tag};

pub fn window() -> web_sys::Window {
    web_sys::window().expect("Could not get window")
}

pub fn document() -> web_sys::Document {
    window().document().expect("Could not get document")
}

/// The document `<body>` element.
pub fn body() -> web_sys::HtmlElement {
    document().body().expect("Document has no body")
}

/// Current location hash, including the leading `#` (if any).
pub fn location_hash() -> String {
    window().location().hash().unwrap_or_default()
}

/// The `web-sys` crate offers a lot of APIs, but notably there are no setters
/// than can take an existing JS string reference.
///
/// These helper functions take existing [`js_sys::JsString`] values so that
/// cached attribute, style and tag names can be reused without re-encoding.
#[wasm_bindgen::prelude::wasm_bindgen(inline_js = "
export function __weft_elem_set_attr(elem, attr, value) {
    elem.setAttribute(attr, value);
}

export function __weft_create_element(tag) {
    return document.createElement(tag);
}

export function __weft_add_event_listener(elem, event, listener) {
    elem.addEventListener(event, listener);
}

export function __weft_create_empty_node() {
    return document.createComment('')
}

export function __weft_create_text_node(value) {
    return document.createTextNode(value)
}

export function __weft_class_list_add(elem, value) {
    elem.classList.add(value);
}

export function __weft_elem_set_style(elem, style, value) {
    elem.style.setProperty(style, value)
}
")]
extern "C" {
    fn __weft_elem_set_attr(elem: &web_sys::Element, attr: &JsString, value: &JsString);

    fn __weft_create_element(tag: &JsString) -> wasm_bindgen::JsValue;

    fn __weft_add_event_listener(
        elem: &web_sys::EventTarget,
        event: &JsString,
        listener: &js_sys::Function,
    );

    fn __weft_create_empty_node() -> web_sys::Node;

    fn __weft_create_text_node(value: &JsString) -> web_sys::Text;

    fn __weft_class_list_add(elem: &web_sys::Element, value: &JsString);

    fn __weft_elem_set_style(elem: &web_sys::Element, style: &JsString, value: &JsString);
}

#[derive(Debug)]
pub enum DomStr<'a> {
    Str(&'a str),
    String(String),
    JsStr(&'a JsString),
    JsString(JsString),
}

impl<'a> DomStr<'a> {
    fn with_js<O>(&self, f: impl FnOnce(&JsString) -> O) -> O {
        match self {
            DomStr::Str(value) => f(&JsString::from(*value)),
            DomStr::String(value) => f(&JsString::from(value.as_str())),
            DomStr::JsStr(value) => f(value),
            DomStr::JsString(value) => f(value),
        }
    }
}

impl<'a> From<&'a str> for DomStr<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for DomStr<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value.as_str())
    }
}

impl<'a> From<String> for DomStr<'a> {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<'a> From<&'a JsString> for DomStr<'a> {
    fn from(value: &'a JsString) -> Self {
        Self::JsStr(value)
    }
}

impl<'a> From<JsString> for DomStr<'a> {
    fn from(value: JsString) -> Self {
        Self::JsString(value)
    }
}

pub fn create_empty_node() -> web_sys::Node {
    __weft_create_empty_node()
}

pub fn create_element(tag: Tag) -> web_sys::Element {
    __weft_create_element(&tag.as_js_string()).unchecked_into()
}

pub fn create_text(value: DomStr<'_>) -> web_sys::Text {
    value.with_js(|v| __weft_create_text_node(v))
}

pub fn set_attribute(elem: &web_sys::Element, attr: Attr, value: DomStr<'_>) {
    let attr = attr.as_js_string();
    value.with_js(|v| __weft_elem_set_attr(elem, &attr, v));
}

pub fn set_style(elem: &web_sys::Element, style: Style, value: DomStr<'_>) {
    let style = style.as_js_string();
    value.with_js(|v| __weft_elem_set_style(elem, &style, v));
}

pub fn elem_add_class(elem: &web_sys::Element, value: &DomStr<'_>) {
    value.with_js(|v| __weft_class_list_add(elem, v));
}

pub fn add_event_listener(target: &web_sys::EventTarget, event: Ev, listener: &js_sys::Function) {
    __weft_add_event_listener(target, &event.as_js_string(), listener);
}

/// Append `child` as the last child of `parent`.
///
/// Failures (hierarchy errors) are logged, not propagated.
pub fn append_node(parent: &web_sys::Node, child: &web_sys::Node) {
    if let Err(err) = parent.append_child(child) {
        tracing::error!(?err, "Could not append node");
    }
}

pub fn insert_node_before(parent: &web_sys::Node, child: &web_sys::Node, before: &web_sys::Node) {
    if let Err(err) = parent.insert_before(child, Some(before)) {
        tracing::error!(?err, "Could not insert node");
    }
}

pub fn remove_node(parent: &web_sys::Node, child: &web_sys::Node) {
    if let Err(err) = parent.remove_child(child) {
        tracing::error!(?err, "Could not remove node");
    }
}

/// Remove every child node of `parent`.
pub fn remove_all_children(parent: &web_sys::Node) {
    while let Some(child) = parent.last_child() {
        if let Err(err) = parent.remove_child(&child) {
            tracing::error!(?err, "Could not remove node");
            break;
        }
    }
}
