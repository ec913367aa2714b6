//! Configuration for the frontend application

/// History service base URL, read at compile time.
/// - Local development: "http://localhost:8000/api/v1"
/// - Deployments set `HISTORY_API_BASE` before `trunk build`
pub const API_BASE: &str = match option_env!("HISTORY_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8000/api/v1",
};

/// Helper to build an endpoint URL under [`API_BASE`].
pub fn api_url(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}/{}", API_BASE.trim_end_matches('/'), path)
}
