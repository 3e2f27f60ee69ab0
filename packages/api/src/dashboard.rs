use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::{ApiClient, ApiResult, Envelope};
use crate::models::{
    Client, ClientSplit, ClientStatus, DashboardData, EnquiryRow, Metrics, MonthlyPoint, RevenueRow,
};

impl ApiClient {
    /// Everything the dashboard shows. The calls run one after another and the
    /// first failure aborts the whole load.
    pub async fn fetch_dashboard(&self) -> ApiResult<DashboardData> {
        let clients: Vec<Client> = self.list("/fetchClient").await?;
        let active_client_count = clients
            .iter()
            .filter(|c| c.status == ClientStatus::Active)
            .count();

        let metrics: Metrics = self.single("/dashboardmetrics").await?;
        let revenue: Vec<RevenueRow> = self.list("/getMonthalyRevenue").await?;
        let enquiries: Vec<EnquiryRow> = self.list("/getMonthalyEnquiry").await?;
        let split: ClientSplit = self.single("/getActiveInactiveClientsPer").await?;

        Ok(DashboardData {
            active_client_count,
            metrics,
            split,
            monthly_revenue: revenue.into_iter().map(MonthlyPoint::from).collect(),
            monthly_enquiries: enquiries.into_iter().map(MonthlyPoint::from).collect(),
        })
    }

    /// `data` holding one object, either bare or as the first array element.
    async fn single<T: DeserializeOwned + Default>(&self, path: &str) -> ApiResult<T> {
        let envelope: Envelope<Value> = self.get(path).await?;
        let value = match envelope.data {
            Some(Value::Array(items)) => items.into_iter().next(),
            Some(obj @ Value::Object(_)) => Some(obj),
            _ => None,
        };
        match value {
            Some(v) => Ok(serde_json::from_value(v)?),
            None => {
                tracing::debug!("{path}: no data, using zeros");
                Ok(T::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::client_for;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount(server: &MockServer, route: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn combines_five_endpoints() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/fetchClient",
            json!({"data": [
                {"User_Id": 1, "user_status": "Active"},
                {"User_Id": 2, "user_status": "Deactive"},
                {"User_Id": 3, "user_status": "Active"}
            ]}),
        )
        .await;
        mount(
            &server,
            "/dashboardmetrics",
            json!({"data": {"total_products": 4, "total_enquiries": "12", "total_revenue": "152600.50"}}),
        )
        .await;
        mount(
            &server,
            "/getMonthalyRevenue",
            json!({"data": [{"revenue_month": "2024-03", "total_revenue": 1000}]}),
        )
        .await;
        mount(
            &server,
            "/getMonthalyEnquiry",
            json!({"data": [{"enquiry_month": "2024-04-01", "total_enquiries": 7}]}),
        )
        .await;
        mount(
            &server,
            "/getActiveInactiveClientsPer",
            json!({"data": [{"active_clients": 2, "inactive_clients": 1}]}),
        )
        .await;

        let (api, _) = client_for(&server, Some("t"));
        let data = api.fetch_dashboard().await.unwrap();
        assert_eq!(data.active_client_count, 2);
        assert_eq!(data.metrics.total_products, 4);
        assert_eq!(data.metrics.total_enquiries, 12);
        assert_eq!(data.revenue_card(), "₹153K");
        assert_eq!(data.monthly_revenue[0].label, "March 2024");
        assert_eq!(data.monthly_enquiries[0].label, "April 2024");
        assert_eq!(data.monthly_enquiries[0].value, 7.0);
        assert_eq!(data.split.active_clients, 2);
        assert_eq!(data.split.inactive_clients, 1);
    }

    #[tokio::test]
    async fn one_failing_call_fails_the_load() {
        let server = MockServer::start().await;
        mount(&server, "/fetchClient", json!({"data": []})).await;
        Mock::given(method("GET"))
            .and(path("/dashboardmetrics"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (api, _) = client_for(&server, Some("t"));
        assert!(api.fetch_dashboard().await.is_err());
    }
}
