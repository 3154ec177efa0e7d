//! Login form validation rules.
//!
//! Port of the app's declarative field schemas. The messages are the
//! exact strings shown inline under each field.

use crate::models::auth::LoginCredentials;

pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_NOT_NUMERIC: &str = "Only numbers allowed";
pub const PHONE_TOO_SHORT: &str = "Phone number must be 8 digits or more";
pub const PHONE_TOO_LONG: &str = "Phone number must be less than 15 digits";
pub const PASSWORD_TOO_SHORT: &str = "Password must be more than 6 characters";

/// Validate an email address field.
pub fn email(value: &str) -> Result<(), &'static str> {
    let Some((local, domain)) = value.split_once('@') else {
        return Err(EMAIL_INVALID);
    };
    if local.is_empty()
        || domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || value.contains(char::is_whitespace)
    {
        return Err(EMAIL_INVALID);
    }
    Ok(())
}

/// Validate a phone number field: digits only, 8 to 15 of them.
pub fn phone(value: &str) -> Result<(), &'static str> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PHONE_NOT_NUMERIC);
    }
    if value.len() < 8 {
        return Err(PHONE_TOO_SHORT);
    }
    if value.len() > 15 {
        return Err(PHONE_TOO_LONG);
    }
    Ok(())
}

/// Validate a password field: at least 6 characters.
pub fn password(value: &str) -> Result<(), &'static str> {
    if value.chars().count() < 6 {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(())
}

impl LoginCredentials {
    /// Apply the field rules matching this login mode.
    pub fn validate(&self) -> Result<(), &'static str> {
        match self {
            Self::Email {
                email: address,
                password: pw,
            } => {
                email(address)?;
                password(pw)
            }
            Self::Phone {
                phone: number,
                password: pw,
                ..
            } => {
                phone(number)?;
                password(pw)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rules() {
        assert!(email("user@example.com").is_ok());
        assert_eq!(email("not-an-email"), Err(EMAIL_INVALID));
        assert_eq!(email("@example.com"), Err(EMAIL_INVALID));
        assert_eq!(email("user@"), Err(EMAIL_INVALID));
        assert_eq!(email("user@example"), Err(EMAIL_INVALID));
        assert_eq!(email("us er@example.com"), Err(EMAIL_INVALID));
    }

    #[test]
    fn test_phone_rules() {
        assert!(phone("12345678").is_ok());
        assert!(phone("123456789012345").is_ok());
        assert_eq!(phone("1234567"), Err(PHONE_TOO_SHORT));
        assert_eq!(phone("1234567890123456"), Err(PHONE_TOO_LONG));
        assert_eq!(phone("12a45678"), Err(PHONE_NOT_NUMERIC));
        assert_eq!(phone(""), Err(PHONE_NOT_NUMERIC));
    }

    #[test]
    fn test_password_rules() {
        assert!(password("secret1").is_ok());
        assert!(password("sixsix").is_ok());
        assert_eq!(password("five5"), Err(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_credentials_validate_by_variant() {
        assert!(LoginCredentials::email("user@example.com", "secret1")
            .validate()
            .is_ok());
        assert_eq!(
            LoginCredentials::email("bad", "secret1").validate(),
            Err(EMAIL_INVALID)
        );
        assert!(LoginCredentials::phone_kh("12345678", "secret1")
            .validate()
            .is_ok());
        assert_eq!(
            LoginCredentials::phone_kh("12345678", "pw").validate(),
            Err(PASSWORD_TOO_SHORT)
        );
    }
}
