//! Site configuration.
//!
//! Built once at startup from the built-in defaults, overridden by the
//! embedded `site.toml`. The resulting [`SiteConfig`] is immutable and shared
//! by reference.

use serde::Deserialize;

use crate::routes::Route;

/// The configuration file compiled into the bundle.
pub const EMBEDDED_CONFIG: &str = include_str!("../site.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid log level '{0}'")]
    LogLevel(String),
    #[error("invalid language '{0}'")]
    Language(String),
    #[error("invalid error route '{0}': must be a single unused path segment")]
    ErrorRoute(String),
}

/// Languages the text bundles are available in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    /// Parse a language tag such as `en`, `en-US` or `es-ES`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.to_lowercase();
        match primary.as_str() {
            "en" => Some(Self::English),
            "es" => Some(Self::Spanish),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Title shown in the navigation bar and the document title
    pub title: String,

    /// GitHub account whose public repositories the code view lists
    pub github_user: String,

    /// Base url of the GitHub REST api
    pub github_api: String,

    /// Maximum number of repositories shown
    pub repository_limit: usize,

    /// Language of the text bundles
    pub language: Language,

    /// Maximum tracing level reported to the console
    pub log_level: tracing::Level,

    /// Route key of the error page
    pub error_route: String,

    /// Links shown in the footer
    pub social: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "akrck02".to_string(),
            github_user: "akrck02".to_string(),
            github_api: "https://api.github.com".to_string(),
            repository_limit: 12,
            language: Language::English,
            log_level: tracing::Level::INFO,
            error_route: "error".to_string(),
            social: vec![SocialLink {
                name: "GitHub".to_string(),
                url: "https://github.com/akrck02".to_string(),
            }],
        }
    }
}

/// Mirror of [`SiteConfig`] as found in the configuration file.
///
/// Every field is optional; missing fields keep their default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    title: Option<String>,
    github_user: Option<String>,
    github_api: Option<String>,
    repository_limit: Option<usize>,
    language: Option<String>,
    log_level: Option<String>,
    error_route: Option<String>,
    social: Option<Vec<SocialLink>>,
}

impl SiteConfig {
    /// Build the configuration from a TOML document.
    ///
    /// `browser_language` is used when the document does not pin a language.
    pub fn from_toml(source: &str, browser_language: Option<&str>) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(source)?;
        let mut config = Self::default();

        if let Some(title) = file.title {
            config.title = title;
        }
        if let Some(user) = file.github_user {
            config.github_user = user;
        }
        if let Some(api) = file.github_api {
            config.github_api = api.trim_end_matches('/').to_string();
        }
        if let Some(limit) = file.repository_limit {
            config.repository_limit = limit;
        }
        match file.language {
            Some(tag) => {
                config.language =
                    Language::from_tag(&tag).ok_or_else(|| ConfigError::Language(tag.clone()))?;
            }
            None => {
                if let Some(lang) = browser_language.and_then(Language::from_tag) {
                    config.language = lang;
                }
            }
        }
        if let Some(level) = file.log_level {
            config.log_level = level
                .parse()
                .map_err(|_| ConfigError::LogLevel(level.clone()))?;
        }
        if let Some(route) = file.error_route {
            config.error_route = validate_error_route(&route)?;
        }
        if let Some(social) = file.social {
            config.social = social;
        }

        Ok(config)
    }
}

/// The error route key must be a non-empty path segment that no other
/// route uses.
fn validate_error_route(route: &str) -> Result<String, ConfigError> {
    let key = route.trim().to_lowercase();
    let is_segment = !key.is_empty()
        && !key.contains(|c: char| c == '/' || c == '#' || c == '?' || c.is_whitespace());
    let taken = Route::NAVIGATION.iter().any(|r| r.key() == key);
    if is_segment && !taken {
        Ok(key)
    } else {
        Err(ConfigError::ErrorRoute(route.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        SiteConfig::from_toml(EMBEDDED_CONFIG, None).unwrap();
    }

    #[test]
    fn test_empty_document_keeps_defaults() {
        let config = SiteConfig::from_toml("", None).unwrap();
        let default = SiteConfig::default();
        assert_eq!(config.title, default.title);
        assert_eq!(config.github_user, default.github_user);
        assert_eq!(config.repository_limit, default.repository_limit);
        assert_eq!(config.language, Language::English);
        assert_eq!(config.error_route, "error");
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_toml(
            r#"
title = "My site"
github_user = "octocat"
github_api = "https://example.com/api/"
repository_limit = 3
language = "es"
log_level = "debug"
error_route = "Oops"

[[social]]
name = "Mastodon"
url = "https://example.social/@me"
"#,
            None,
        )
        .unwrap();

        assert_eq!(config.title, "My site");
        assert_eq!(config.github_user, "octocat");
        assert_eq!(config.github_api, "https://example.com/api");
        assert_eq!(config.repository_limit, 3);
        assert_eq!(config.language, Language::Spanish);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert_eq!(config.error_route, "oops");
        assert_eq!(
            config.social,
            vec![SocialLink {
                name: "Mastodon".to_string(),
                url: "https://example.social/@me".to_string(),
            }]
        );
    }

    #[test]
    fn test_browser_language_used_when_not_pinned() {
        let config = SiteConfig::from_toml("", Some("es-ES")).unwrap();
        assert_eq!(config.language, Language::Spanish);

        let config = SiteConfig::from_toml("", Some("fr-FR")).unwrap();
        assert_eq!(config.language, Language::English);

        let config = SiteConfig::from_toml(r#"language = "en""#, Some("es")).unwrap();
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            SiteConfig::from_toml(r#"log_level = "loud""#, None),
            Err(ConfigError::LogLevel(_))
        ));
        assert!(matches!(
            SiteConfig::from_toml(r#"language = "xx""#, None),
            Err(ConfigError::Language(_))
        ));
        assert!(matches!(
            SiteConfig::from_toml(r#"unknown_key = 1"#, None),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SiteConfig::from_toml(r#"repository_limit = "many""#, None),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_language_tags() {
        assert_eq!(Language::from_tag("en"), Some(Language::English));
        assert_eq!(Language::from_tag("EN-us"), Some(Language::English));
        assert_eq!(Language::from_tag("es_MX"), Some(Language::Spanish));
        assert_eq!(Language::from_tag(""), None);
        assert_eq!(Language::Spanish.tag(), "es");
    }

    #[test]
    fn test_invalid_error_route() {
        for value in ["", "  ", "error/page", "#error", "home", "Code", "docs"] {
            let source = format!("error_route = {:?}", value);
            assert!(
                matches!(
                    SiteConfig::from_toml(&source, None),
                    Err(ConfigError::ErrorRoute(_))
                ),
                "accepted error route {:?}",
                value
            );
        }
    }

    #[test]
    fn test_error_route_normalized() {
        let config = SiteConfig::from_toml(r#"error_route = " Fallo ""#, None).unwrap();
        assert_eq!(config.error_route, "fallo");
    }
}
