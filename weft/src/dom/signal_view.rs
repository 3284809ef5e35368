use std::{cell::RefCell, rc::Rc};

use futures_signals::signal::{Signal, SignalExt};

use crate::effect::{spawn_guarded, EffectGuard};

use super::{view::RetainedView, View};

/// A view that is backed by a [`Signal`].
///
/// A future driving the signal runs on the local executor and swaps the
/// rendered content whenever the signal yields. The future is aborted when
/// the view is dropped, so late values never reach a detached subtree.
pub struct SignalView {
    current: Rc<RefCell<RetainedView>>,
    _effect: EffectGuard,
}

impl SignalView {
    pub(crate) fn new<T, S>(signal: S) -> Self
    where
        T: Into<View>,
        S: Signal<Item = T> + 'static,
    {
        let current = Rc::new(RefCell::new(RetainedView::new_placeholder()));
        let weak = Rc::downgrade(&current);

        let effect = spawn_guarded(signal.for_each(move |view| {
            if let Some(current) = weak.upgrade() {
                let mut current = current.borrow_mut();
                match current.anchor().parent_node() {
                    Some(parent) => current.replace_with_mut(&parent, view.into()),
                    None => {
                        tracing::error!("SignalView received an update but is not attached");
                    }
                }
            }
            std::future::ready(())
        }));

        Self {
            current,
            _effect: effect,
        }
    }

    pub(crate) fn anchor(&self) -> web_sys::Node {
        self.current.borrow().anchor()
    }
}
