//! Static informational pages.

use weft::{
    dom::{
        builder::{a, h1, h2, li, p, section, ul},
        Attr, TagBuilder,
    },
    router::RenderError,
};

use crate::{
    routes::{Route, Site},
    strings::DOC_TOPICS,
};

pub fn under_construction(site: &Site) -> Result<TagBuilder, RenderError> {
    Ok(section()
        .class("under-construction")
        .child(h1().text(site.texts.construction_title))
        .child(p().text(site.texts.construction_body)))
}

pub fn about(site: &Site) -> Result<TagBuilder, RenderError> {
    Ok(section()
        .class("about")
        .child(h1().text(site.texts.about_title))
        .children(site.texts.about_body.iter().map(|line| p().text(*line))))
}

/// Documentation index, or a single topic for `#/docs/<topic>`.
pub fn docs(site: &Site, params: &[String]) -> Result<TagBuilder, RenderError> {
    let texts = site.texts;
    let page = section()
        .class("docs")
        .child(h1().text(texts.docs_title));

    let Some(topic) = params.first().filter(|t| !t.is_empty()) else {
        let index = ul().class("doc-topics").children(DOC_TOPICS.iter().map(|(key, title, _)| {
            li().child(
                a().attr(Attr::Href, format!("{}/{}", Route::Docs.href(), key))
                    .text(*title),
            )
        }));
        return Ok(page.child(p().text(texts.docs_intro)).child(index));
    };

    match DOC_TOPICS.iter().find(|(key, _, _)| *key == topic.as_str()) {
        Some((_, title, body)) => Ok(page
            .child(h2().class("doc-title").text(*title))
            .child(p().class("doc-body").text(*body))),
        None => {
            tracing::debug!(topic = %topic, "unknown documentation topic");
            Ok(page.child(p().class("doc-missing").text(texts.docs_unknown_topic)))
        }
    }
}
