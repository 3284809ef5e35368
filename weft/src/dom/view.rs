use crate::web::{append_node, create_empty_node, insert_node_before, remove_node};

use super::{signal_view::SignalView, Node};

/// Renderable content that can be attached to a parent node.
pub enum View {
    Empty,
    Node(Node),
    Signal(SignalView),
}

impl Default for View {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<()> for View {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl View {
    pub(crate) fn into_retained(self) -> RetainedView {
        match self {
            View::Empty => RetainedView::new_placeholder(),
            View::Node(n) => RetainedView::Node(n),
            View::Signal(sig) => RetainedView::Signal(sig),
        }
    }
}

/// A view that has been attached to the dom.
///
/// Empty views are represented by a comment node so that later replacements
/// keep their position among the siblings.
pub(crate) enum RetainedView {
    Placeholder(web_sys::Node),
    Node(Node),
    Signal(SignalView),
}

impl RetainedView {
    pub fn new_placeholder() -> Self {
        Self::Placeholder(create_empty_node())
    }

    /// The dom node that marks the position of this view.
    pub fn anchor(&self) -> web_sys::Node {
        match self {
            RetainedView::Placeholder(p) => p.clone(),
            RetainedView::Node(n) => n.node().clone(),
            RetainedView::Signal(sig) => sig.anchor(),
        }
    }

    pub fn append_to(&self, parent: &web_sys::Node) {
        append_node(parent, &self.anchor());
    }

    pub fn insert_before(&self, parent: &web_sys::Node, before: &web_sys::Node) {
        insert_node_before(parent, &self.anchor(), before);
    }

    pub fn remove_from_parent(&self, parent: &web_sys::Node) {
        remove_node(parent, &self.anchor());
    }

    /// Put `new` in the position of `self`.
    pub fn replace_with(self, parent: &web_sys::Node, new: View) -> Self {
        let new = new.into_retained();
        new.insert_before(parent, &self.anchor());
        self.remove_from_parent(parent);
        new
    }

    pub fn replace_with_mut(&mut self, parent: &web_sys::Node, new: View) {
        let old = std::mem::replace(self, Self::new_placeholder());
        *self = old.replace_with(parent, new);
    }
}
