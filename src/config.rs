//! Configuration constants and utilities for formline
//!
//! This module resolves the classification endpoint URL from the command
//! line, the environment, or the compiled default, in that order.

/// Default classification endpoint for formline
pub const DEFAULT_ENDPOINT_URL: &str = "https://bfhl-backend-psi-three.vercel.app/bfhl";

/// Environment variable name for overriding the endpoint URL
pub const ENDPOINT_ENV_VAR: &str = "FORMLINE_ENDPOINT";

/// Resolve the endpoint URL. A command-line override wins, then the
/// environment variable, then the compiled default.
pub fn get_endpoint_url(override_url: Option<&str>) -> String {
    if let Some(url) = override_url {
        return url.to_string();
    }
    std::env::var_os(ENDPOINT_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string())
}
