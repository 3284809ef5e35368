use weft::{
    dom::{
        builder::{a, h1, p, section},
        Attr, TagBuilder,
    },
    router::RenderError,
};

use crate::{
    routes::{Route, Site},
    strings::error_description,
};

/// `#/error/<code>`: the code and its description.
///
/// Unknown or malformed codes get a generic description.
pub fn render(site: &Site, params: &[String]) -> Result<TagBuilder, RenderError> {
    let texts = site.texts;
    let raw = params.first().map(String::as_str).unwrap_or_default();

    let description = raw
        .parse::<u16>()
        .ok()
        .and_then(|code| error_description(code, site.config.language))
        .unwrap_or(texts.error_unknown);
    let code = if raw.is_empty() { "?" } else { raw };

    Ok(section()
        .class("error")
        .child(h1().class("error-code").text(code))
        .child(p().class("error-description").text(description))
        .child(
            a().class("button")
                .attr(Attr::Href, Route::Home.href())
                .text(texts.error_go_home),
        ))
}
