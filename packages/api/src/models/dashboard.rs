//! Wire rows of the four dashboard endpoints and the combined [`DashboardData`]
//! the view renders.

use serde::Deserialize;

use super::date::month_label;
use super::lenient;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Metrics {
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_products: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_enquiries: i64,
    #[serde(default, deserialize_with = "lenient::float")]
    pub total_revenue: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub(crate) struct RevenueRow {
    #[serde(default, deserialize_with = "lenient::text")]
    pub revenue_month: String,
    #[serde(default, deserialize_with = "lenient::float")]
    pub total_revenue: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub(crate) struct EnquiryRow {
    #[serde(default, deserialize_with = "lenient::text")]
    pub enquiry_month: String,
    #[serde(default, deserialize_with = "lenient::float")]
    pub total_enquiries: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ClientSplit {
    #[serde(default, deserialize_with = "lenient::int")]
    pub active_clients: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub inactive_clients: i64,
}

/// One bar of a monthly chart.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyPoint {
    pub label: String,
    pub value: f64,
}

impl From<RevenueRow> for MonthlyPoint {
    fn from(row: RevenueRow) -> Self {
        Self {
            label: month_label(&row.revenue_month),
            value: row.total_revenue,
        }
    }
}

impl From<EnquiryRow> for MonthlyPoint {
    fn from(row: EnquiryRow) -> Self {
        Self {
            label: month_label(&row.enquiry_month),
            value: row.total_enquiries,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    /// Clients whose status is `Active` in `/fetchClient`.
    pub active_client_count: usize,
    pub metrics: Metrics,
    pub split: ClientSplit,
    pub monthly_revenue: Vec<MonthlyPoint>,
    pub monthly_enquiries: Vec<MonthlyPoint>,
}

impl DashboardData {
    /// Revenue card text: thousands, rounded, rupee sign.
    pub fn revenue_card(&self) -> String {
        format!("₹{:.0}K", self.metrics.total_revenue / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_card_rounds_to_thousands() {
        let mut data = DashboardData::default();
        assert_eq!(data.revenue_card(), "₹0K");
        data.metrics.total_revenue = 152_600.0;
        assert_eq!(data.revenue_card(), "₹153K");
        data.metrics.total_revenue = 999.0;
        assert_eq!(data.revenue_card(), "₹1K");
    }

    #[test]
    fn rows_become_labelled_points() {
        let row = RevenueRow {
            revenue_month: "2024-03".into(),
            total_revenue: 1200.0,
        };
        let point = MonthlyPoint::from(row);
        assert_eq!(point.label, "March 2024");
        assert_eq!(point.value, 1200.0);
    }
}
