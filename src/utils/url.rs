//! URL helpers for building Gemini endpoints from a configurable base.

/// Strip trailing slashes so endpoint joins never produce `//`.
///
/// ```
/// use dsa_sage::utils::url::normalize_base_url;
///
/// assert_eq!(
///     normalize_base_url("https://generativelanguage.googleapis.com/v1beta/"),
///     "https://generativelanguage.googleapis.com/v1beta"
/// );
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Join a base URL and an endpoint path with exactly one slash.
///
/// ```
/// use dsa_sage::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("http://localhost:8080/v1beta/", "/models/m:generateContent"),
///     "http://localhost:8080/v1beta/models/m:generateContent"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let normalized_base = normalize_base_url(base_url);
    let endpoint = endpoint.trim_start_matches('/');
    format!("{}/{}", normalized_base, endpoint)
}
