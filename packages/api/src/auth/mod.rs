//! # Sign-in, registration and password reset
//!
//! These endpoints are public: requests carry no bearer header and a `401`
//! is reported as a plain [`ApiError::Status`] (wrong credentials) rather
//! than a lost session.
//!
//! The OTP endpoints answer with a human-readable `message` instead of a
//! `status` flag, so success is decided by matching the exact text:
//!
//! | Call | Success when |
//! |------|--------------|
//! | [`send_otp`](ApiClient::send_otp) | `message == "Verification code sent to email"` |
//! | [`verify_otp`](ApiClient::verify_otp) | `message == "Verification successful"` |
//! | [`reset_password`](ApiClient::reset_password) | `status == true` |

use reqwest::Method;

use crate::client::{parse_envelope, ApiClient, ApiResult};
use crate::error::ApiError;
use crate::models::{
    LoginRequest, LoginResponse, OtpReply, ResetPassword, SendOtp, SignupRequest, VerifyOtp,
};

pub const OTP_SENT: &str = "Verification code sent to email";
pub const OTP_VERIFIED: &str = "Verification successful";

impl ApiClient {
    /// Exchange credentials for a token and store it.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<String> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let text = self
            .send_public(self.public(Method::POST, "/userlogin").json(&body))
            .await?;
        let reply: LoginResponse = serde_json::from_str(&text)?;
        match reply.token.filter(|t| !t.is_empty()) {
            Some(token) => {
                self.tokens().set(&token);
                tracing::info!("signed in as {}", body.email);
                Ok(token)
            }
            None => Err(ApiError::Rejected(reply.message)),
        }
    }

    /// Create an admin account. The caller sends the user to the login page.
    pub async fn register(&self, request: &SignupRequest) -> ApiResult<()> {
        let text = self
            .send_public(self.public(Method::POST, "/userRegistration").json(request))
            .await?;
        parse_envelope::<serde_json::Value>(&text)?.accepted()?;
        Ok(())
    }

    pub async fn send_otp(&self, email: &str) -> ApiResult<()> {
        let reply = self
            .otp_call(Method::POST, "/sendOTP", &SendOtp { email })
            .await?;
        if reply.message.as_deref() == Some(OTP_SENT) {
            Ok(())
        } else {
            tracing::warn!("sendOTP answered {:?}", reply.message);
            Err(ApiError::Rejected(None))
        }
    }

    /// Check the emailed code. A refusal carries the backend's `error` text.
    pub async fn verify_otp(&self, email: &str, code: &str) -> ApiResult<()> {
        let reply = self
            .otp_call(Method::POST, "/verifyOTP", &VerifyOtp { email, code })
            .await?;
        if reply.message.as_deref() == Some(OTP_VERIFIED) {
            Ok(())
        } else {
            Err(ApiError::Rejected(reply.error))
        }
    }

    pub async fn reset_password(&self, email: &str, new_password: &str) -> ApiResult<()> {
        let reply = self
            .otp_call(
                Method::PUT,
                "/forgetPassword",
                &ResetPassword {
                    email,
                    new_password,
                },
            )
            .await?;
        if reply.status == Some(true) {
            tracing::info!("password reset for {email}");
            Ok(())
        } else {
            Err(ApiError::Rejected(None))
        }
    }

    /// Forget the stored token.
    pub fn logout(&self) {
        self.tokens().clear();
        tracing::info!("signed out");
    }

    async fn otp_call<B: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ApiResult<OtpReply> {
        let text = self
            .send_public(self.public(method, path).json(body))
            .await?;
        if text.trim().is_empty() {
            return Ok(OtpReply::default());
        }
        Ok(serde_json::from_str(&text)?)
    }
}
