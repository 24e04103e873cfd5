// Server configuration loaded from environment variables
//
// DATABASE_URL is optional: without it the server runs in dev mode on the
// in-memory store, with it the Postgres backend is used. Everything else
// has a sensible default.

use axum::http::HeaderValue;
use symposia_core::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// Postgres connection string; None selects the in-memory dev backend
    pub database_url: Option<String>,
    /// Optional route prefix, e.g. "/api" gives /api/v1/events
    pub api_prefix: String,
    /// CORS origins allowed to call the API; empty means same-origin only
    pub cors_origins: Vec<HeaderValue>,
    /// Page size used when a listing request does not specify one
    pub default_page_size: i64,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:9000".to_string()),
            database_url: std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            api_prefix: std::env::var("API_PREFIX").unwrap_or_default(),
            cors_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .map(|s| parse_cors_origins(&s))
                .unwrap_or_default(),
            default_page_size: std::env::var("DEFAULT_PAGE_SIZE")
                .ok()
                .map(|s| parse_page_size(&s))
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

/// Parse a comma-separated origin list, skipping entries that are not valid
/// header values
fn parse_cors_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

/// Parse a page size, falling back to the default for unusable values
fn parse_page_size(raw: &str) -> i64 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_list_parses_and_trims() {
        let origins = parse_cors_origins("https://a.example.com, https://b.example.com ,");
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "https://a.example.com");
    }

    #[test]
    fn empty_cors_value_means_no_origins() {
        assert!(parse_cors_origins("").is_empty());
        assert!(parse_cors_origins(" , ").is_empty());
    }

    #[test]
    fn page_size_falls_back_on_garbage() {
        assert_eq!(parse_page_size("12"), 12);
        assert_eq!(parse_page_size("0"), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_size("-4"), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_size("six"), DEFAULT_PAGE_SIZE);
    }
}
