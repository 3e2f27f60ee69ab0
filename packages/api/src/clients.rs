use serde_json::{json, Value};

use crate::client::{ApiClient, ApiResult};
use crate::models::{dedup_by_id, Client, CreateClient, PlanOption, ProductOption, UpdateClient};

impl ApiClient {
    /// All clients, one row per id.
    pub async fn fetch_clients(&self) -> ApiResult<Vec<Client>> {
        let clients = self.list("/fetchClient").await?;
        Ok(dedup_by_id(clients))
    }

    pub async fn create_client(&self, client: &CreateClient) -> ApiResult<()> {
        self.post::<Value, _>("/createclients", client).await?;
        tracing::info!("created client {}", client.email);
        Ok(())
    }

    pub async fn update_client(&self, client: &UpdateClient) -> ApiResult<()> {
        self.put::<Value, _>("/updateclient", client).await?;
        tracing::info!("updated client {}", client.id);
        Ok(())
    }

    pub async fn delete_client(&self, id: i64) -> ApiResult<()> {
        self.delete::<Value, _>("/deleteclient", &json!({ "user_Id": id }))
            .await?;
        tracing::info!("deleted client {id}");
        Ok(())
    }

    /// Products for dropdowns.
    pub async fn fetch_product_options(&self) -> ApiResult<Vec<ProductOption>> {
        self.list("/productcategory").await
    }

    /// Plans for dropdowns.
    pub async fn fetch_plan_options(&self) -> ApiResult<Vec<PlanOption>> {
        self.list("/packagecategory").await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::client_for;
    use crate::models::{ClientStatus, CreateClient, Timeline};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_normalises_and_dedups() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fetchClient"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "data": [
                    {"User_Id": 1, "User_Name": "Asha", "user_status": "Active", "timeline": "Monthly"},
                    {"id": 2, "name": "Ravi", "user_status": "Deactive", "timeline": 4},
                    {"User_Id": 1, "User_Name": "Asha K", "user_status": "Active"}
                ]
            })))
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, Some("t"));
        let clients = api.fetch_clients().await.unwrap();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].name, "Asha K");
        assert_eq!(clients[1].status, ClientStatus::Deactive);
        assert_eq!(clients[1].timeline, Timeline::Yearly);
    }

    #[tokio::test]
    async fn create_sends_numeric_ids() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/createclients"))
            .and(body_json(json!({
                "user_Name": "Asha",
                "institute_Name": "North High",
                "contact": "9876543210",
                "email": "asha@example.com",
                "product": 3,
                "plan": 2,
                "start_Date": "2024-04-01",
                "timeline": 2
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": true})))
            .expect(1)
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, Some("t"));
        api.create_client(&CreateClient {
            name: "Asha".into(),
            institute: "North High".into(),
            contact: "9876543210".into(),
            email: "asha@example.com".into(),
            product: 3,
            plan: 2,
            start_date: "2024-04-01".into(),
            timeline: Timeline::Quarterly,
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn delete_sends_user_id_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/deleteclient"))
            .and(body_json(json!({"user_Id": 7})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": true})))
            .expect(1)
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, Some("t"));
        api.delete_client(7).await.unwrap();
    }

    #[tokio::test]
    async fn dropdown_options_accept_either_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/productcategory"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "data": [{"product": 1, "product_Name": "Attendance"}, {"id": 2, "name": "Fees"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/packagecategory"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "data": [{"plan": 5, "plan_Name": "Premium"}]
            })))
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, Some("t"));
        let products = api.fetch_product_options().await.unwrap();
        assert_eq!(products[1].id, 2);
        assert_eq!(products[1].name, "Fees");
        let plans = api.fetch_plan_options().await.unwrap();
        assert_eq!(plans[0].id, 5);
    }
}
