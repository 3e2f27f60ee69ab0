use serde_json::{json, Value};

use crate::client::{ApiClient, ApiResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

impl ApiClient {
    pub async fn fetch_products(&self) -> ApiResult<Vec<Product>> {
        self.list("/fetchproducts").await
    }

    pub async fn create_product(&self, product: &CreateProduct) -> ApiResult<()> {
        self.post::<Value, _>("/createproducts", product).await?;
        tracing::info!("created product {}", product.name);
        Ok(())
    }

    pub async fn update_product(&self, product: &UpdateProduct) -> ApiResult<()> {
        self.put::<Value, _>("/updateproducts", product).await?;
        tracing::info!("updated product {}", product.id);
        Ok(())
    }

    pub async fn delete_product(&self, id: i64) -> ApiResult<()> {
        self.delete::<Value, _>("/deleteproduct", &json!({ "product_Id": id }))
            .await?;
        tracing::info!("deleted product {id}");
        Ok(())
    }
}
