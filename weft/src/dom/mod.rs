mod attribute;
mod component;
mod event;
mod node;
mod signal_view;
mod style;
mod tag;
mod view;

pub use self::{
    attribute::Attr,
    component::{Content, EventHandler, UiComponent, UiConfig},
    event::{ClickEvent, DomEvent, Ev, HashChangeEvent},
    node::{builder, Apply, Node, Render, TagBuilder},
    signal_view::SignalView,
    style::Style,
    tag::Tag,
    view::View,
};

pub(crate) use self::view::RetainedView;
