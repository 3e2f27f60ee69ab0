use serde_json::Value;

use crate::client::{ApiClient, ApiResult};
use crate::error::ApiError;
use crate::models::{UpdateProfile, UserProfile};

impl ApiClient {
    /// The signed-in admin's record. `admin_id` comes from the token claims.
    pub async fn fetch_profile(&self, admin_id: &str) -> ApiResult<UserProfile> {
        let envelope = self
            .get_query::<UserProfile, _>("/fetchuserprofile", &[("adminId", admin_id)])
            .await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Rejected(envelope.message))
    }

    pub async fn update_profile(&self, update: &UpdateProfile) -> ApiResult<()> {
        self.put::<Value, _>("/updatemyprofile", update).await?;
        tracing::info!(
            "updated profile {}{}",
            update.user_id,
            if update.password.is_some() { " (password changed)" } else { "" }
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::client_for;
    use crate::models::UpdateProfile;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_passes_admin_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fetchuserprofile"))
            .and(query_param("adminId", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"user_Id": 7, "Name": "Admin", "Contact": "9876543210", "Email": "admin@example.com"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, Some("t"));
        let profile = api.fetch_profile("7").await.unwrap();
        assert_eq!(profile.user_id, 7);
        assert_eq!(profile.email, "admin@example.com");
    }

    #[tokio::test]
    async fn missing_profile_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "User not found"})))
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, Some("t"));
        let err = api.fetch_profile("7").await.unwrap_err();
        assert_eq!(err.user_message("Failed to load profile data"), "User not found");
    }

    #[tokio::test]
    async fn update_omits_unchanged_password() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/updatemyprofile"))
            .and(body_json(json!({
                "user_Id": 7,
                "name": "Admin",
                "email": "admin@example.com",
                "contact": "9876543210"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": true})))
            .expect(1)
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, Some("t"));
        api.update_profile(&UpdateProfile {
            user_id: 7,
            name: "Admin".into(),
            email: "admin@example.com".into(),
            contact: "9876543210".into(),
            password: None,
        })
        .await
        .unwrap();
    }
}
