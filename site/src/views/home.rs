use weft::{
    dom::{
        builder::{a, h1, h2, p, section},
        Attr, TagBuilder,
    },
    router::RenderError,
};

use crate::routes::{Route, Site};

pub fn render(site: &Site) -> Result<TagBuilder, RenderError> {
    let texts = site.texts;
    Ok(section()
        .class("home")
        .child(h1().class("greeting").text(texts.home_greeting))
        .child(h2().class("subtitle").text(texts.home_subtitle))
        .child(p().class("intro").text(texts.home_intro))
        .child(
            a().classes_raw("button primary")
                .attr(Attr::Href, Route::Code.href())
                .text(texts.home_cta),
        ))
}
