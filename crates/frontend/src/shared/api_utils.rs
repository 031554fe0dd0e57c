//! API utilities for frontend-backend communication

use super::config::config;

/// Get the base URL for API requests, without a trailing slash
///
/// # Returns
/// - API base URL like "http://localhost:9009"
pub fn api_base() -> String {
    config().api.base_url.trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```ignore
/// let url = api_url("/api/order");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:9009", "/api/order"),
            "http://localhost:9009/api/order"
        );
        assert_eq!(
            join_url("http://localhost:9009/", "api/order"),
            "http://localhost:9009/api/order"
        );
    }
}
