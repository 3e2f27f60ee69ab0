//! # Admin account models
//!
//! Two groups live here:
//!
//! - [`UserProfile`] / [`UpdateProfile`]: the signed-in admin's own record as
//!   `/fetchuserprofile` returns it and `/updatemyprofile` accepts it.
//! - Credential payloads for the public auth endpoints: [`LoginRequest`],
//!   [`SignupRequest`], and the three steps of the password reset flow.
//!
//! Passwords only ever travel outbound; nothing here deserializes one.

use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "user_Id", default, deserialize_with = "lenient::int")]
    pub user_id: i64,
    #[serde(rename = "Name", alias = "name", default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "Contact", alias = "contact", default, deserialize_with = "lenient::text")]
    pub contact: String,
    #[serde(rename = "Email", alias = "email", default, deserialize_with = "lenient::text")]
    pub email: String,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateProfile {
    #[serde(rename = "user_Id")]
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub contact: String,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct SendOtp<'a> {
    pub email: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct VerifyOtp<'a> {
    pub email: &'a str,
    #[serde(rename = "enteredCode")]
    pub code: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct ResetPassword<'a> {
    pub email: &'a str,
    #[serde(rename = "newPassword")]
    pub new_password: &'a str,
}

/// Body of the OTP endpoints: a bare `{message}` or `{error}`.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct OtpReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_reads_capitalised_keys() {
        let p: UserProfile = serde_json::from_value(json!({
            "user_Id": "8",
            "Name": "",
            "Contact": "9876543210",
            "Email": "admin@example.com"
        }))
        .unwrap();
        assert_eq!(p.user_id, 8);
        assert_eq!(p.display_name(), "admin@example.com");
    }

    #[test]
    fn password_only_sent_when_changed() {
        let mut update = UpdateProfile {
            user_id: 1,
            name: "A".into(),
            email: "a@b.co".into(),
            contact: "9876543210".into(),
            password: None,
        };
        let body = serde_json::to_value(&update).unwrap();
        assert!(body.get("password").is_none());
        update.password = Some("secret1".into());
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body["password"], "secret1");
        assert_eq!(body["user_Id"], 1);
    }
}
