//! Public repository listing from the GitHub REST api.

use serde::Deserialize;

use crate::{config::SiteConfig, fetch::FetchRequest};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
}

/// Request for the public repositories of the configured user.
pub fn repositories_request(config: &SiteConfig) -> FetchRequest {
    FetchRequest::get(format!(
        "{}/users/{}/repos",
        config.github_api, config.github_user
    ))
    .param("per_page", "100")
    .param("sort", "updated")
}

/// Repositories worth showing: no forks or archived ones, most starred
/// first, at most `limit`.
pub fn showcase(mut repositories: Vec<Repository>, limit: usize) -> Vec<Repository> {
    repositories.retain(|repo| !repo.fork && !repo.archived);
    repositories.sort_by(|a, b| {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    repositories.truncate(limit);
    repositories
}
