use crate::language::Language;
use crate::log::{LogLevel, DEFAULT_LOG_LEVEL};
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
const SEARCH_PATH: &str = "search/repositories";
const MIN_STARS_QUALIFIER: &str = "stars:>1";

/// Settings baked into the frontend bundle at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    pub api_base: Url,
    pub log_level: LogLevel,
}

impl FrontendConfig {
    /// Reads `POPULAR_API_BASE` and `POPULAR_LOG_LEVEL` from the build environment.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("POPULAR_API_BASE"),
            option_env!("POPULAR_LOG_LEVEL"),
        )
    }

    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .and_then(parse_http_url)
            .unwrap_or_else(default_api_base);

        Self {
            api_base: with_trailing_slash(api_base),
            log_level: LogLevel::parse_or(log_level, DEFAULT_LOG_LEVEL),
        }
    }

    /// Most-starred repositories, optionally scoped to one language.
    pub fn search_url(&self, language: Language) -> Url {
        let mut url = self
            .api_base
            .join(SEARCH_PATH)
            .unwrap_or_else(|_| self.api_base.clone());

        let query = match language.search_qualifier() {
            Some(qualifier) => format!("{MIN_STARS_QUALIFIER} {qualifier}"),
            None => MIN_STARS_QUALIFIER.to_string(),
        };

        url.query_pairs_mut()
            .clear()
            .append_pair("q", &query)
            .append_pair("sort", "stars")
            .append_pair("order", "desc")
            .append_pair("type", "Repositories");
        url
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

/// Accepts only absolute http(s) URLs.
pub fn parse_http_url(value: &str) -> Option<Url> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let parsed = Url::parse(value).ok()?;
    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn default_api_base() -> Url {
    Url::parse(DEFAULT_API_BASE).expect("DEFAULT_API_BASE is a valid url")
}
