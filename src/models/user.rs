//! User profile types.

use serde::{Deserialize, Serialize};

/// Gender as reported by the user service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    // The service documents capitalized values but has been observed
    // returning lowercase ones.
    #[serde(alias = "male")]
    Male,
    #[serde(alias = "female")]
    Female,
}

/// Profile returned by `GET /users/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub avatar: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Gender,
    pub country_code: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_parses_camel_case() {
        let body = r#"{
            "avatar": "https://cdn.example.com/a.png",
            "firstName": "Sok",
            "lastName": "Dara",
            "email": "sok.dara@example.com",
            "gender": "Male",
            "countryCode": "+855",
            "phone": "12345678"
        }"#;
        let profile: UserProfile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.first_name, "Sok");
        assert_eq!(profile.gender, Gender::Male);
    }

    #[test]
    fn test_gender_accepts_lowercase() {
        let gender: Gender = serde_json::from_str(r#""female""#).unwrap();
        assert_eq!(gender, Gender::Female);
    }

    #[test]
    fn test_profile_avatar_defaults_when_absent() {
        let body = r#"{
            "firstName": "Sok",
            "lastName": "Dara",
            "email": "sok.dara@example.com",
            "gender": "Female",
            "countryCode": "+855",
            "phone": "12345678"
        }"#;
        let profile: UserProfile = serde_json::from_str(body).unwrap();
        assert!(profile.avatar.is_empty());
    }
}
