//! Chrome shared by every page: navigation bar and footer.

use weft::{
    dom::{
        builder::{a, div, li, nav, ul},
        Attr, Tag, TagBuilder, UiComponent, UiConfig, View,
    },
    router::RenderError,
};

use crate::routes::{Route, Site};

fn nav_link(site: &Site, route: Route, active: Route) -> UiComponent {
    let mut config = UiConfig::new(Tag::A)
        .class("nav-link")
        .attr(Attr::Href, route.href())
        .attr(Attr::DataRoute, route.key())
        .text(route.label(site.texts));
    if route == active {
        config = config.class("active").attr(Attr::AriaCurrent, "page");
    }
    UiComponent::new(config)
}

fn navbar(site: &Site, active: Route) -> TagBuilder {
    let links = ul().class("nav-links").children(
        Route::NAVIGATION
            .iter()
            .map(|route| li().child(nav_link(site, *route, active))),
    );

    nav()
        .class("navbar")
        .attr(Attr::Role, "navigation")
        .child(
            a().class("brand")
                .attr(Attr::Href, Route::Home.href())
                .text(site.config.title.as_str()),
        )
        .child(links)
}

fn footer(site: &Site) -> UiComponent {
    let links = site
        .config
        .social
        .iter()
        .map(|link| {
            UiComponent::new(
                UiConfig::new(Tag::A)
                    .class("social-link")
                    .attr(Attr::Href, link.url.as_str())
                    .attr(Attr::Target, "_blank")
                    .attr(Attr::Rel, "noopener noreferrer")
                    .text(link.name.as_str()),
            )
        })
        .collect();

    let mut footer = UiComponent::new(UiConfig::new(Tag::Footer).class("footer"));
    UiComponent::new(UiConfig::new(Tag::Span).text(site.texts.footer)).append_to(&mut footer);
    UiComponent::new(UiConfig::new(Tag::Div).class("social").children(links))
        .append_to(&mut footer);
    footer
}

/// Wrap a page body in the site chrome.
pub fn page(site: &Site, active: Route, content: TagBuilder) -> Result<View, RenderError> {
    let document = weft::web::document();
    document.set_title(&format!(
        "{} | {}",
        active.label(site.texts),
        site.config.title
    ));
    if let Some(html) = document.document_element() {
        html.set_attribute("lang", site.config.language.tag())?;
    }

    Ok(div()
        .class("page")
        .child(navbar(site, active))
        .child(
            weft::dom::builder::tag(Tag::Main)
                .class("content")
                .child(content),
        )
        .child(footer(site))
        .into_view())
}
