//! Login request and token types.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_COUNTRY_CODE;

/// Credentials submitted to `POST /auth/login`.
///
/// Serializes to the exact body the service expects for each login
/// mode; the variant tag never appears on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LoginCredentials {
    Email {
        email: String,
        password: String,
    },
    Phone {
        #[serde(rename = "countryCode")]
        country_code: String,
        phone: String,
        password: String,
    },
}

impl LoginCredentials {
    /// Email login.
    pub fn email(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Email {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Phone login with an explicit country calling code.
    pub fn phone(
        country_code: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::Phone {
            country_code: country_code.into(),
            phone: phone.into(),
            password: password.into(),
        }
    }

    /// Phone login with the default `+855` country code.
    pub fn phone_kh(phone: impl Into<String>, password: impl Into<String>) -> Self {
        Self::phone(DEFAULT_COUNTRY_CODE, phone, password)
    }
}

/// Bearer tokens returned by a successful login.
///
/// Opaque strings; the client never parses them or inspects expiry.
/// A login may omit the refresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_credentials_wire_shape() {
        let creds = LoginCredentials::email("user@example.com", "secret1");
        let value = serde_json::to_value(&creds).unwrap();
        assert_eq!(
            value,
            json!({"email": "user@example.com", "password": "secret1"})
        );
    }

    #[test]
    fn test_phone_credentials_wire_shape() {
        let creds = LoginCredentials::phone_kh("12345678", "secret1");
        let value = serde_json::to_value(&creds).unwrap();
        assert_eq!(
            value,
            json!({"countryCode": "+855", "phone": "12345678", "password": "secret1"})
        );
    }

    #[test]
    fn test_token_pair_refresh_optional() {
        let pair: TokenPair = serde_json::from_str(r#"{"accessToken": "acc"}"#).unwrap();
        assert_eq!(pair.access_token, "acc");
        assert!(pair.refresh_token.is_none());
    }
}
