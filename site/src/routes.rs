use std::rc::Rc;

use weft::{
    dom::View,
    router::{Page, RenderError, RouteTable, Router},
};

use crate::{
    config::SiteConfig,
    strings::{self, Texts},
    views,
};

/// Shared, read-only state handed to every view.
pub struct Site {
    pub config: Rc<SiteConfig>,
    pub texts: &'static Texts,
}

impl Site {
    pub fn new(config: Rc<SiteConfig>) -> Self {
        let texts = strings::texts(config.language);
        Self { config, texts }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Code,
    Games,
    Media,
    About,
    Docs,
    Error,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Code,
        Route::Games,
        Route::Media,
        Route::About,
        Route::Docs,
        Route::Error,
    ];

    /// Routes linked from the navigation bar.
    pub const NAVIGATION: [Route; 6] = [
        Route::Home,
        Route::Code,
        Route::Games,
        Route::Media,
        Route::About,
        Route::Docs,
    ];

    /// Route key, the first path segment after `#/`.
    ///
    /// The error page is registered under [`SiteConfig::error_route`].
    pub fn key(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Code => "code",
            Route::Games => "games",
            Route::Media => "media",
            Route::About => "about",
            Route::Docs => "docs",
            Route::Error => "error",
        }
    }

    pub fn href(self) -> String {
        format!("#/{}", self.key())
    }

    pub fn label(self, texts: &Texts) -> &'static str {
        match self {
            Route::Home => texts.nav_home,
            Route::Code => texts.nav_code,
            Route::Games => texts.nav_games,
            Route::Media => texts.nav_media,
            Route::About => texts.nav_about,
            Route::Docs => texts.nav_docs,
            Route::Error => texts.error_title,
        }
    }
}

impl Page<Site> for Route {
    fn render(&self, site: &Site, params: &[String]) -> Result<View, RenderError> {
        let content = match self {
            Route::Home => views::home::render(site),
            Route::Code => views::code::render(site, params),
            Route::Games | Route::Media => views::info::under_construction(site),
            Route::About => views::info::about(site),
            Route::Docs => views::info::docs(site, params),
            Route::Error => views::error::render(site, params),
        }?;
        views::layout::page(site, *self, content)
    }
}

/// Register every route.
pub fn route_table(config: &SiteConfig) -> RouteTable<Route> {
    Route::ALL
        .iter()
        .fold(RouteTable::new(), |table, route| {
            let key = match route {
                Route::Error => config.error_route.clone(),
                other => other.key().to_string(),
            };
            table.route(key, *route)
        })
        .default_route(Route::Home)
}

/// The site router, mounting views under `root`.
pub fn router(config: SiteConfig, root: web_sys::Node) -> Router<Site, Route> {
    let config = Rc::new(config);
    let table = route_table(&config);
    let error_route = config.error_route.clone();
    Router::new(table, Site::new(config), root).with_error_route(error_route)
}

#[cfg(test)]
mod tests {
    use weft::router::Resolution;

    use super::*;

    fn resolve(table: &RouteTable<Route>, values: &[&str]) -> Option<Route> {
        let params: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        match table.resolve(&params) {
            Resolution::Matched { page, .. } => Some(*page),
            Resolution::NotFound => None,
        }
    }

    #[test]
    fn test_every_route_is_registered() {
        let table = route_table(&SiteConfig::default());
        assert_eq!(table.len(), Route::ALL.len());
        for route in Route::ALL {
            assert_eq!(resolve(&table, &[route.key()]), Some(route));
        }
    }

    #[test]
    fn test_vocabulary() {
        let table = route_table(&SiteConfig::default());
        assert_eq!(resolve(&table, &[]), Some(Route::Home));
        assert_eq!(resolve(&table, &[""]), Some(Route::Home));
        assert_eq!(resolve(&table, &["code", "rust"]), Some(Route::Code));
        assert_eq!(resolve(&table, &["error", "404"]), Some(Route::Error));
        assert_eq!(resolve(&table, &["lss"]), None);
    }

    #[test]
    fn test_custom_error_route_key() {
        let config = SiteConfig {
            error_route: "oops".to_string(),
            ..SiteConfig::default()
        };
        let table = route_table(&config);
        assert_eq!(resolve(&table, &["oops", "500"]), Some(Route::Error));
        assert_eq!(resolve(&table, &["error"]), None);
        assert_eq!(resolve(&table, &[]), Some(Route::Home));
    }

    #[test]
    fn test_href() {
        assert_eq!(Route::Code.href(), "#/code");
        assert!(!Route::NAVIGATION.contains(&Route::Error));
    }
}
