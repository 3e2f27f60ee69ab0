use serde_json::Value;

use crate::client::{ApiClient, ApiResult};
use crate::models::{ConvertEnquiry, Enquiry, NewEnquiry, UpdateEnquiry};

impl ApiClient {
    pub async fn fetch_enquiries(&self) -> ApiResult<Vec<Enquiry>> {
        self.list("/fetchEnquiry").await
    }

    pub async fn add_enquiry(&self, enquiry: &NewEnquiry) -> ApiResult<()> {
        self.post::<Value, _>("/addenquiry", enquiry).await?;
        tracing::info!("added enquiry from {}", enquiry.email);
        Ok(())
    }

    /// Only product, plan and status change after creation.
    pub async fn update_enquiry(&self, update: &UpdateEnquiry) -> ApiResult<()> {
        self.put::<Value, _>("/updatdeenquiry", update).await?;
        tracing::info!("updated enquiry {}", update.id);
        Ok(())
    }

    /// Turn a lead into a client starting on `start_date` (`YYYY-MM-DD`).
    pub async fn convert_to_client(&self, id: i64, start_date: &str) -> ApiResult<()> {
        self.post::<Value, _>(
            &format!("/convertenquiryToclient/{id}"),
            &ConvertEnquiry { start_date },
        )
        .await?;
        tracing::info!("converted enquiry {id} to client");
        Ok(())
    }
}
