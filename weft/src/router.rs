//! Hash based routing.
//!
//! A [`RouteTable`] maps the first path segment of the location hash to a
//! [`Page`]. The [`Router`] reads the hash, resolves the page, clears the
//! mount root and mounts the freshly rendered view. Failures never escape
//! the dispatch: an unknown route redirects to `#/<error>/404`, a failing
//! render redirects to `#/<error>/500`.

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::JsValue;

use crate::{
    dom::{HashChangeEvent, RetainedView, View},
    effect::EventSubscription,
    url,
    web::{self, remove_all_children},
};

/// Error returned by a [`Page`] that could not be rendered.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("invalid parameter '{param}': {reason}")]
    InvalidParameter { param: String, reason: String },
    #[error("{0}")]
    Message(String),
}

impl From<JsValue> for RenderError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{:?}", value))
    }
}

/// The reason a dispatch redirected to the error route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    /// No route matched the first parameter.
    NotFound,
    /// The matched page failed to render.
    RenderFailed,
}

impl Failure {
    /// HTTP-like status code passed to the error route.
    pub fn status(self) -> u16 {
        match self {
            Failure::NotFound => 404,
            Failure::RenderFailed => 500,
        }
    }
}

/// A renderable page.
///
/// `params` are the route parameters following the route key.
pub trait Page<C> {
    fn render(&self, ctx: &C, params: &[String]) -> Result<View, RenderError>;
}

/// Lookup table from route key to page.
///
/// Built once at startup and read-only afterwards.
pub struct RouteTable<P> {
    entries: Vec<(String, P)>,
    default: Option<P>,
}

/// Result of resolving route parameters against a [`RouteTable`].
pub enum Resolution<'a, P> {
    Matched {
        key: &'a str,
        page: &'a P,
        params: &'a [String],
    },
    NotFound,
}

impl<P> Default for RouteTable<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> RouteTable<P> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            default: None,
        }
    }

    /// Register `page` under `key`.
    ///
    /// Keys are matched against lower-cased path segments and must be unique.
    pub fn route(mut self, key: impl Into<String>, page: P) -> Self {
        let key = key.into();
        debug_assert!(
            self.lookup(&key).is_none(),
            "duplicate route key '{}'",
            key
        );
        debug_assert_eq!(key, key.to_lowercase(), "route keys must be lower case");
        self.entries.push((key, page));
        self
    }

    /// Page used when the route key is missing or empty.
    pub fn default_route(mut self, page: P) -> Self {
        self.default = Some(page);
        self
    }

    pub fn lookup(&self, key: &str) -> Option<&P> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, page)| page)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve<'a>(&'a self, params: &'a [String]) -> Resolution<'a, P> {
        let (key, rest) = match params.split_first() {
            Some((key, rest)) => (key.as_str(), rest),
            None => ("", params),
        };

        if let Some(page) = self.lookup(key) {
            return Resolution::Matched {
                key,
                page,
                params: rest,
            };
        }

        match &self.default {
            Some(page) if key.is_empty() => Resolution::Matched {
                key,
                page,
                params: rest,
            },
            _ => Resolution::NotFound,
        }
    }
}

/// Location hash for the error route.
pub fn error_location(error_route: &str, failure: Failure) -> String {
    format!("#/{}/{}", error_route, failure.status())
}

/// Navigate to a location hash (`#/...`).
pub fn navigate(hash: &str) {
    let hash = hash.strip_prefix('#').unwrap_or(hash);
    if let Err(err) = web::window().location().set_hash(hash) {
        tracing::error!(?err, hash, "Could not navigate");
    }
}

/// Outcome of a single [`Router::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Mounted,
    Redirected(Failure),
    /// The error route itself failed; nothing is mounted.
    Failed,
}

enum State {
    Idle,
    Mounted(RetainedView),
}

pub struct Router<C, P> {
    table: RouteTable<P>,
    context: C,
    root: web_sys::Node,
    error_route: String,
    navigate: Box<dyn Fn(&str)>,
    state: State,
}

impl<C, P: Page<C>> Router<C, P> {
    /// Create a router that mounts views under `root`.
    pub fn new(table: RouteTable<P>, context: C, root: web_sys::Node) -> Self {
        Self {
            table,
            context,
            root,
            error_route: "error".to_string(),
            navigate: Box::new(navigate),
            state: State::Idle,
        }
    }

    /// Route key of the error page. Defaults to `error`.
    pub fn with_error_route(mut self, key: impl Into<String>) -> Self {
        self.error_route = key.into();
        self
    }

    /// Replace the navigation used for redirects.
    pub fn with_redirect(mut self, navigate: impl Fn(&str) + 'static) -> Self {
        self.navigate = Box::new(navigate);
        self
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn table(&self) -> &RouteTable<P> {
        &self.table
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.state, State::Mounted(_))
    }

    /// Drop the current view and remove everything below the root.
    fn clear(&mut self) {
        self.state = State::Idle;
        remove_all_children(&self.root);
    }

    fn redirect(&self, failure: Failure) -> Dispatch {
        let location = error_location(&self.error_route, failure);
        (self.navigate)(&location);
        Dispatch::Redirected(failure)
    }

    pub fn dispatch(&mut self, params: &[String]) -> Dispatch {
        tracing::debug!(?params, "dispatching route");

        self.clear();

        let rendered = match self.table.resolve(params) {
            Resolution::NotFound => None,
            Resolution::Matched { key, page, params } => {
                let is_error_route = key == self.error_route;
                Some((page.render(&self.context, params), is_error_route))
            }
        };

        match rendered {
            None => {
                tracing::warn!(?params, "no route matched");
                self.redirect(Failure::NotFound)
            }
            Some((Ok(view), _)) => {
                let view = view.into_retained();
                view.append_to(&self.root);
                self.state = State::Mounted(view);
                Dispatch::Mounted
            }
            Some((Err(err), true)) => {
                tracing::error!(error = %err, ?params, "error page failed to render");
                Dispatch::Failed
            }
            Some((Err(err), false)) => {
                tracing::error!(error = %err, ?params, "page failed to render");
                self.redirect(Failure::RenderFailed)
            }
        }
    }

    /// Dispatch on the current `location.hash`.
    pub fn load_from_url(&mut self) -> Dispatch {
        let params = url::hash_params(&web::location_hash());
        self.dispatch(&params)
    }
}

/// A started router, listening for `hashchange`.
///
/// Dropping the handle removes the listener; the mounted view stays.
pub struct RouterHandle<C, P> {
    router: Rc<RefCell<Router<C, P>>>,
    _subscription: EventSubscription,
}

impl<C: 'static, P: Page<C> + 'static> RouterHandle<C, P> {
    pub fn router(&self) -> &Rc<RefCell<Router<C, P>>> {
        &self.router
    }
}

impl<C: 'static, P: Page<C> + 'static> Router<C, P> {
    /// Render the current location and load it again on every hash change.
    ///
    /// Page load and `hashchange` run the same [`Router::load_from_url`].
    pub fn start(self) -> Result<RouterHandle<C, P>, JsValue> {
        let router = Rc::new(RefCell::new(self));

        let weak = Rc::downgrade(&router);
        let subscription = EventSubscription::subscribe_dom(
            web::window().into(),
            move |_: HashChangeEvent| {
                let Some(router) = weak.upgrade() else {
                    return;
                };
                match router.try_borrow_mut() {
                    Ok(mut router) => {
                        router.load_from_url();
                    }
                    Err(_) => {
                        tracing::error!("router is busy, dropping navigation");
                    }
                };
            },
        )?;

        router.borrow_mut().load_from_url();

        Ok(RouterHandle {
            router,
            _subscription: subscription,
        })
    }
}
