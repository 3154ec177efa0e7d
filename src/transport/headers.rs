//! Header construction for user service requests.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::config::ApiConfig;

/// Headers common to every request: accept, apikey, x-platform.
pub fn base_headers(config: &ApiConfig) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    headers.insert(
        HeaderName::from_static("apikey"),
        HeaderValue::from_str(&config.api_key)
            .unwrap_or_else(|_| HeaderValue::from_static("")),
    );

    headers.insert(
        HeaderName::from_static("x-platform"),
        HeaderValue::from_static(config.platform.as_str()),
    );

    headers
}

/// Base headers plus a JSON content type, for POST bodies.
pub fn json_headers(config: &ApiConfig) -> HeaderMap {
    let mut headers = base_headers(config);

    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    headers
}

/// Base headers plus a bearer Authorization, for authenticated requests.
pub fn auth_headers(config: &ApiConfig, access_token: &str) -> HeaderMap {
    let mut headers = base_headers(config);

    let mut bearer = HeaderValue::from_str(&format!("Bearer {access_token}"))
        .unwrap_or_else(|_| HeaderValue::from_static("Bearer invalid"));
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);

    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Platform;

    fn test_config() -> ApiConfig {
        ApiConfig::new("https://api.example.com", "test-key")
            .unwrap()
            .with_platform(Platform::Android)
    }

    #[test]
    fn test_base_headers() {
        let headers = base_headers(&test_config());
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get("apikey").unwrap(), "test-key");
        assert_eq!(headers.get("x-platform").unwrap(), "android");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_json_headers_add_content_type() {
        let headers = json_headers(&test_config());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_auth_headers_attach_bearer() {
        let headers = auth_headers(&test_config(), "abc");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn test_platform_header_follows_config() {
        let config = test_config().with_platform(Platform::Ios);
        let headers = base_headers(&config);
        assert_eq!(headers.get("x-platform").unwrap(), "ios");
    }
}
