//! Resolver query handling: token extraction and endpoint addressing.

/// Config payload merged wholesale into the navbar link state.
pub const CONFIG_URL: &str = "/api/resolver/config.json";

/// Providers payload; only the two provider list fields are read.
pub const PROVIDERS_URL: &str = "/api/providers";

/// Returns the resolver query token: everything after the last `/` of the
/// current page URL. A URL with no separator is returned whole. The token
/// is opaque; no shape validation happens here, an empty or malformed
/// token is passed through to the lookup unchanged.
pub fn query_token(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[idx + 1..],
        None => url,
    }
}

/// Lookup endpoint for the dataset behind a resolver token.
pub fn asset_url(token: &str) -> String {
    format!("/api/resolver/asset/{token}")
}

/// Detail page a successfully resolved dataset redirects to.
pub fn dataset_url(id: &str) -> String {
    format!("/datasets/{id}")
}
