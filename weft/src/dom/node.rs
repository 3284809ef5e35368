use futures::Future;
use futures_signals::signal::{Signal, SignalExt};
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    effect::{spawn_guarded, EffectGuard},
    web::{
        add_event_listener, create_element, create_text, elem_add_class, remove_all_children,
        set_attribute, set_style, DomStr,
    },
};

use super::{
    signal_view::SignalView, view::RetainedView, Attr, DomEvent, Ev, Style, Tag, View,
};

/// A constructed dom element.
///
/// Owns its child views, the closures backing its event listeners and the
/// futures driving its reactive parts. Dropping the node releases all of
/// them, which aborts the futures.
pub struct Node {
    node: web_sys::Node,
    listeners: Vec<Closure<dyn FnMut(web_sys::Event)>>,
    effects: Vec<EffectGuard>,
    children: Vec<RetainedView>,
}

impl Node {
    fn new(tag: Tag) -> Self {
        Self {
            node: create_element(tag).into(),
            listeners: Vec::new(),
            effects: Vec::new(),
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn node(&self) -> &web_sys::Node {
        &self.node
    }

    pub(crate) fn push_child(&mut self, child: View) {
        let child = child.into_retained();
        child.append_to(&self.node);
        self.children.push(child);
    }

    /// Remove all children, both from the dom and from this node.
    ///
    /// Listeners and effects registered on the node itself are kept.
    pub fn clear_children(&mut self) {
        remove_all_children(&self.node);
        self.children.clear();
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("node", &self.node.node_name())
            .field("listeners", &self.listeners.len())
            .field("effects", &self.effects.len())
            .field("children", &self.children.len())
            .finish()
    }
}

impl From<Node> for View {
    fn from(n: Node) -> Self {
        Self::Node(n)
    }
}

/// Builder for a single element and its subtree.
///
/// Every chaining method has an `add_*` counterpart taking `&mut self`.
pub struct TagBuilder {
    node: Node,
}

impl TagBuilder {
    pub fn new(tag: Tag) -> Self {
        Self {
            node: Node::new(tag),
        }
    }

    pub fn elem(&self) -> &web_sys::Element {
        self.node.node.unchecked_ref()
    }

    /// Run `f` for as long as the built node is alive.
    pub fn register_future<F: Future<Output = ()> + 'static>(&mut self, f: F) {
        self.node.effects.push(spawn_guarded(f));
    }

    // Attributes.

    pub fn add_attr<'a, I: Into<DomStr<'a>>>(&mut self, attr: Attr, value: I) {
        set_attribute(self.elem(), attr, value.into());
    }

    #[inline]
    pub fn attr<'a, I: Into<DomStr<'a>>>(mut self, attr: Attr, value: I) -> Self {
        self.add_attr(attr, value);
        self
    }

    // Classes.

    pub fn add_class<'a, I: Into<DomStr<'a>>>(&mut self, class: I) {
        elem_add_class(self.elem(), &class.into());
    }

    #[inline]
    pub fn class<'a, I: Into<DomStr<'a>>>(mut self, class: I) -> Self {
        self.add_class(class);
        self
    }

    pub fn add_classes<'a, S, I>(&mut self, classes: I)
    where
        S: Into<DomStr<'a>>,
        I: IntoIterator<Item = S>,
    {
        for class in classes {
            self.add_class(class);
        }
    }

    /// Add whitespace separated classes, as written in an html `class`.
    pub fn classes_raw(mut self, classes: &str) -> Self {
        self.add_classes(classes.split_whitespace());
        self
    }

    pub fn set_style<'a, I: Into<DomStr<'a>>>(&mut self, style: Style, value: I) {
        set_style(self.elem(), style, value.into());
    }

    // Text.

    pub fn add_text(&mut self, value: DomStr<'_>) {
        let text = create_text(value);
        self.append_raw(&text);
    }

    #[inline]
    pub fn text<'a, S: Into<DomStr<'a>>>(mut self, value: S) -> Self {
        self.add_text(value.into());
        self
    }

    /// Text node whose content follows `signal`.
    pub fn add_text_signal<V, S>(&mut self, signal: S)
    where
        V: Into<DomStr<'static>>,
        S: Signal<Item = V> + 'static,
    {
        let text = create_text("".into());
        self.append_raw(&text);

        self.register_future(signal.for_each(move |value| {
            match value.into() {
                DomStr::Str(v) => text.set_data(v),
                DomStr::String(v) => text.set_data(&v),
                DomStr::JsStr(v) => text.set_data(&String::from(v)),
                DomStr::JsString(v) => text.set_data(&String::from(&v)),
            }
            std::future::ready(())
        }));
    }

    #[inline]
    pub fn text_signal<V, S>(mut self, signal: S) -> Self
    where
        V: Into<DomStr<'static>>,
        S: Signal<Item = V> + 'static,
    {
        self.add_text_signal(signal);
        self
    }

    fn append_raw(&self, node: &web_sys::Node) {
        crate::web::append_node(&self.node.node, node);
    }

    // Events.

    pub fn add_event_listener<F>(&mut self, event: Ev, handler: F)
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        add_event_listener(self.elem(), event, closure.as_ref().unchecked_ref());
        self.node.listeners.push(closure);
    }

    /// Listen for the typed event `E`.
    pub fn on<E, F>(mut self, mut handler: F) -> Self
    where
        E: DomEvent,
        F: FnMut(E) + 'static,
    {
        self.add_event_listener(E::event_type(), move |raw| {
            if let Some(event) = E::from_dom(raw) {
                handler(event);
            }
        });
        self
    }

    // Children.

    pub fn add_child<V: Into<View>>(&mut self, child: V) {
        self.node.push_child(child.into());
    }

    #[inline]
    pub fn child<V: Into<View>>(mut self, child: V) -> Self {
        self.add_child(child);
        self
    }

    pub fn children<V: Into<View>, I: IntoIterator<Item = V>>(mut self, children: I) -> Self {
        for child in children {
            self.add_child(child);
        }
        self
    }

    /// A region re-rendered with every value of `signal`.
    pub fn signal<V, S>(mut self, signal: S) -> Self
    where
        V: Into<View>,
        S: Signal<Item = V> + 'static,
    {
        self.add_child(View::Signal(SignalView::new(signal)));
        self
    }

    pub fn and<A: Apply>(mut self, item: A) -> Self {
        item.apply(&mut self);
        self
    }

    #[inline]
    pub fn build(self) -> Node {
        self.node
    }

    #[inline]
    pub fn into_view(self) -> View {
        View::Node(self.node)
    }
}

impl From<TagBuilder> for View {
    fn from(t: TagBuilder) -> Self {
        t.into_view()
    }
}

/// Anything that can become a child view.
pub trait Render {
    fn render(self) -> View;
}

impl Render for Node {
    fn render(self) -> View {
        View::Node(self)
    }
}

impl Render for TagBuilder {
    fn render(self) -> View {
        self.into_view()
    }
}

impl Render for View {
    fn render(self) -> View {
        self
    }
}

/// Something that modifies a [`TagBuilder`], see [`TagBuilder::and`].
pub trait Apply {
    fn apply(self, tag: &mut TagBuilder);
}

impl<R: Render> Apply for R {
    fn apply(self, tag: &mut TagBuilder) {
        tag.add_child(self.render());
    }
}

/// Applies the inner value if there is one.
impl<I: Apply> Apply for Option<I> {
    fn apply(self, tag: &mut TagBuilder) {
        if let Some(inner) = self {
            inner.apply(tag);
        }
    }
}

/// Shorthands for [`TagBuilder::new`].
pub mod builder {
    use super::{Tag, TagBuilder};

    #[inline]
    pub fn tag(tag: Tag) -> TagBuilder {
        TagBuilder::new(tag)
    }

    macro_rules! tag_fns {
        ($( $name:ident => $tag:ident, )*) => {
            $(
                #[inline]
                pub fn $name() -> TagBuilder {
                    TagBuilder::new(Tag::$tag)
                }
            )*
        };
    }

    tag_fns! {
        a => A,
        button => Button,
        div => Div,
        h1 => H1,
        h2 => H2,
        h3 => H3,
        li => Li,
        nav => Nav,
        p => P,
        section => Section,
        span => Span,
        ul => Ul,
    }
}
