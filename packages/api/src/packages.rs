use serde_json::Value;

use crate::client::{ApiClient, ApiResult};
use crate::models::{CreatePackage, DeletePackage, Package, UpdatePackage};

impl ApiClient {
    /// Packages of one product, or of every product when `product_id` is `None`.
    pub async fn fetch_packages(&self, product_id: Option<i64>) -> ApiResult<Vec<Package>> {
        let path = match product_id {
            Some(id) => format!("/fetchpackage/{id}"),
            None => "/fetchpackage/all".to_string(),
        };
        self.list(&path).await
    }

    pub async fn create_package(&self, package: &CreatePackage) -> ApiResult<()> {
        self.post::<Value, _>("/createpackage", package).await?;
        tracing::info!("created package for product {}", package.product_id);
        Ok(())
    }

    pub async fn update_package(&self, package: &UpdatePackage) -> ApiResult<()> {
        self.put::<Value, _>("/updatepackage", package).await?;
        tracing::info!("updated package {}", package.id);
        Ok(())
    }

    pub async fn delete_package(&self, id: i64, product_id: Option<i64>) -> ApiResult<()> {
        self.delete::<Value, _>("/deletepackage", &DeletePackage { id, product_id })
            .await?;
        tracing::info!("deleted package {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::client_for;
    use crate::models::CreatePackage;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_picks_path_by_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fetchpackage/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"package_Id": 1}, {"package_Id": 2}]})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/fetchpackage/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"package_Id": 9, "product_Id": 3}]})))
            .expect(1)
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, Some("t"));
        assert_eq!(api.fetch_packages(None).await.unwrap().len(), 2);
        let filtered = api.fetch_packages(Some(3)).await.unwrap();
        assert_eq!(filtered[0].id, 9);
        assert_eq!(filtered[0].product_id, Some(3));
    }

    #[tokio::test]
    async fn create_sends_tier_and_cycle_ids() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/createpackage"))
            .and(body_json(json!({
                "product_Id": 3,
                "package_Id": 2,
                "package_Price": "499.99",
                "pack_Val_Id": 4,
                "max_users": 50,
                "storage_Limit": 100
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": true})))
            .expect(1)
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, Some("t"));
        api.create_package(&CreatePackage {
            product_id: 3,
            tier: 2,
            price: "499.99".into(),
            billing_cycle: 4,
            max_users: 50,
            storage_limit: 100,
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn delete_includes_product_when_filtered() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/deletepackage"))
            .and(body_json(json!({"package_Id": 5, "product_Id": 3})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": true})))
            .expect(1)
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, Some("t"));
        api.delete_package(5, Some(3)).await.unwrap();
    }
}
