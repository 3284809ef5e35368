//! Declarative element construction.
//!
//! A [`UiConfig`] describes one element: its tag, id, classes, inline styles,
//! attributes, event handlers and content. [`UiComponent::new`] turns it into
//! a live dom node. The configuration is consumed; it is not a template.

use crate::web::DomStr;

use super::{Attr, Ev, Node, Style, Tag, TagBuilder, View};

pub type EventHandler = Box<dyn FnMut(web_sys::Event)>;

/// Content placed inside a component.
pub enum Content {
    Empty,
    Text(String),
    Children(Vec<UiComponent>),
}

impl Default for Content {
    fn default() -> Self {
        Self::Empty
    }
}

/// Configuration for a single element.
///
/// Every field is optional; `UiConfig::default()` produces an empty `div`.
#[derive(Default)]
pub struct UiConfig {
    pub tag: Tag,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub styles: Vec<(Style, String)>,
    pub attributes: Vec<(Attr, String)>,
    pub events: Vec<(Ev, EventHandler)>,
    pub content: Content,
}

impl UiConfig {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn style(mut self, style: Style, value: impl Into<String>) -> Self {
        self.styles.push((style, value.into()));
        self
    }

    pub fn attr(mut self, attr: Attr, value: impl Into<String>) -> Self {
        self.attributes.push((attr, value.into()));
        self
    }

    pub fn on(mut self, event: Ev, handler: impl FnMut(web_sys::Event) + 'static) -> Self {
        self.events.push((event, Box::new(handler)));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn children(mut self, children: Vec<UiComponent>) -> Self {
        self.content = Content::Children(children);
        self
    }
}

/// A constructed element that owns its subtree.
pub struct UiComponent {
    node: Node,
}

impl UiComponent {
    /// Build exactly one element from `config`.
    pub fn new(config: UiConfig) -> Self {
        let UiConfig {
            tag,
            id,
            classes,
            styles,
            attributes,
            events,
            content,
        } = config;

        let mut b = TagBuilder::new(tag);
        if let Some(id) = id {
            b.add_attr(Attr::Id, id);
        }
        b.add_classes(classes);
        for (style, value) in styles {
            b.set_style(style, value);
        }
        for (attr, value) in attributes {
            b.add_attr(attr, value);
        }
        for (event, handler) in events {
            b.add_event_listener(event, handler);
        }
        match content {
            Content::Empty => {}
            Content::Text(text) => b.add_text(DomStr::String(text)),
            Content::Children(children) => {
                for child in children {
                    b.add_child(child);
                }
            }
        }

        Self { node: b.build() }
    }

    pub fn element(&self) -> &web_sys::Element {
        // Components are always built from a tag.
        wasm_bindgen::JsCast::unchecked_ref(self.node.node())
    }

    /// Attach this component as the last child of `parent`.
    ///
    /// The parent takes ownership.
    pub fn append_to(self, parent: &mut UiComponent) {
        parent.append_child(self);
    }

    /// Attach `child` as the last child of this component.
    pub fn append_child<V: Into<View>>(&mut self, child: V) {
        self.node.push_child(child.into());
    }

    /// Remove all children, keeping this element's own attributes and
    /// listeners.
    pub fn clean(&mut self) {
        self.node.clear_children();
    }

    pub fn into_node(self) -> Node {
        self.node
    }
}

impl From<UiConfig> for UiComponent {
    fn from(config: UiConfig) -> Self {
        Self::new(config)
    }
}

impl From<TagBuilder> for UiComponent {
    fn from(b: TagBuilder) -> Self {
        Self { node: b.build() }
    }
}

impl From<UiComponent> for View {
    fn from(c: UiComponent) -> Self {
        View::Node(c.node)
    }
}
