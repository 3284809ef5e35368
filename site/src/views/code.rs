//! `#/code[/<language>]`: public repositories of the configured GitHub user.

use futures_signals::signal::Mutable;
use weft::{
    dom::{
        builder::{a, div, h1, h3, li, p, section, span, ul},
        Attr, TagBuilder, View,
    },
    router::RenderError,
};

use crate::{
    fetch,
    github::{self, Repository},
    routes::Site,
    strings::Texts,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RepoState {
    Loading,
    Loaded(Vec<Repository>),
    Failed,
}

/// Keep repositories written in `language` (case-insensitive).
pub fn filter_language(repositories: Vec<Repository>, language: Option<&str>) -> Vec<Repository> {
    match language {
        None | Some("") => repositories,
        Some(language) => repositories
            .into_iter()
            .filter(|repo| {
                repo.language
                    .as_deref()
                    .map_or(false, |l| l.eq_ignore_ascii_case(language))
            })
            .collect(),
    }
}

fn repository_card(texts: &Texts, repo: &Repository) -> TagBuilder {
    li().class("repository")
        .child(
            h3().child(
                a().attr(Attr::Href, repo.html_url.as_str())
                    .attr(Attr::Target, "_blank")
                    .attr(Attr::Rel, "noopener noreferrer")
                    .text(repo.name.as_str()),
            ),
        )
        .child(
            p().class("description").text(
                repo.description
                    .as_deref()
                    .unwrap_or(texts.code_no_description),
            ),
        )
        .child(
            div()
                .class("meta")
                .and(
                    repo.language
                        .as_deref()
                        .map(|lang| span().class("language").text(lang)),
                )
                .child(
                    span()
                        .class("stars")
                        .text(format!("{} {}", repo.stargazers_count, texts.code_stars)),
                ),
        )
}

pub fn render_state(texts: &Texts, state: &RepoState) -> View {
    match state {
        RepoState::Loading => p().class("loading").text(texts.code_loading).into_view(),
        RepoState::Loaded(repos) if repos.is_empty() => {
            p().class("empty").text(texts.code_empty).into_view()
        }
        RepoState::Loaded(repos) => ul()
            .class("repositories")
            .children(repos.iter().map(|repo| repository_card(texts, repo)))
            .into_view(),
        RepoState::Failed => View::Empty,
    }
}

/// The repository list is filled in once the request completes.
///
/// The request is tied to the returned tree: navigating away drops the tree
/// and aborts a request still in flight.
pub fn render(site: &Site, params: &[String]) -> Result<TagBuilder, RenderError> {
    let texts = site.texts;
    let state = Mutable::new(RepoState::Loading);

    let mut page = section()
        .class("code")
        .child(h1().text(texts.code_title))
        .signal(state.signal_ref(move |s| render_state(texts, s)));

    let language = params.first().cloned();
    let limit = site.config.repository_limit;
    let request = github::repositories_request(&site.config);
    let loaded = state.clone();
    page.register_future(fetch::send(
        request,
        move |repos: Vec<Repository>| {
            let repos = filter_language(repos, language.as_deref());
            loaded.set(RepoState::Loaded(github::showcase(repos, limit)));
        },
        move |err| {
            tracing::error!(error = %err, "could not load repositories");
            state.set(RepoState::Failed);
        },
    ));

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, language: Option<&str>) -> Repository {
        Repository {
            name: name.to_string(),
            html_url: format!("https://github.com/akrck02/{}", name),
            description: None,
            language: language.map(String::from),
            stargazers_count: 0,
            fork: false,
            archived: false,
        }
    }

    #[test]
    fn test_filter_language() {
        let repos = vec![
            repo("a", Some("Rust")),
            repo("b", Some("TypeScript")),
            repo("c", None),
        ];

        assert_eq!(filter_language(repos.clone(), None).len(), 3);
        assert_eq!(filter_language(repos.clone(), Some("")).len(), 3);

        let rust = filter_language(repos.clone(), Some("rust"));
        assert_eq!(rust, vec![repo("a", Some("Rust"))]);

        assert!(filter_language(repos, Some("cobol")).is_empty());
    }
}
