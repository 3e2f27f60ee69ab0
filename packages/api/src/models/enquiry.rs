use serde::{Deserialize, Serialize};

use super::catalog::EnquiryStatus;
use super::lenient;

/// A sales lead from `/fetchEnquiry`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Enquiry {
    #[serde(rename = "en_id", default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "Name", default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "Institute_Name", default, deserialize_with = "lenient::text")]
    pub institute: String,
    #[serde(rename = "Contact", default, deserialize_with = "lenient::text")]
    pub contact: String,
    #[serde(rename = "Email", default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(rename = "Product", default, deserialize_with = "lenient::text")]
    pub product: String,
    #[serde(rename = "Product_id", default, deserialize_with = "lenient::opt_int")]
    pub product_id: Option<i64>,
    #[serde(rename = "Plan", default, deserialize_with = "lenient::text")]
    pub plan: String,
    #[serde(rename = "Package_id", default, deserialize_with = "lenient::opt_int")]
    pub package_id: Option<i64>,
    #[serde(rename = "Message", default, deserialize_with = "lenient::text")]
    pub message: String,
    #[serde(rename = "Enquiry_Date", default, deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(rename = "Enquiry_Status", default)]
    pub status: EnquiryStatus,
}

/// Product and package travel as the ids picked in the form, as strings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewEnquiry {
    #[serde(rename = "enquiry_Name")]
    pub name: String,
    #[serde(rename = "institute_Name")]
    pub institute: String,
    pub email: String,
    pub contact: String,
    pub product: String,
    pub plan: String,
    pub message: String,
    #[serde(rename = "enquiry_Date")]
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateEnquiry {
    #[serde(rename = "enquiry_Id")]
    pub id: String,
    pub product: String,
    pub plan: String,
    #[serde(rename = "en_Status")]
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct ConvertEnquiry<'a> {
    pub start_date: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_enquiry_row() {
        let e: Enquiry = serde_json::from_value(json!({
            "en_id": 12,
            "Name": "Meera",
            "Institute_Name": "City College",
            "Contact": "9000000000",
            "Email": "meera@example.com",
            "Product": "Attendance",
            "Product_id": "4",
            "Plan": "Basic",
            "Package_id": 2,
            "Message": null,
            "Enquiry_Date": "2024-06-01",
            "Enquiry_Status": "In Progress"
        }))
        .unwrap();
        assert_eq!(e.id, 12);
        assert_eq!(e.product_id, Some(4));
        assert_eq!(e.package_id, Some(2));
        assert_eq!(e.message, "");
        assert_eq!(e.status, EnquiryStatus::InProgress);
    }

    #[test]
    fn missing_status_is_unknown() {
        let e: Enquiry = serde_json::from_value(json!({"en_id": 1})).unwrap();
        assert_eq!(e.status, EnquiryStatus::Unknown);
        assert_eq!(e.product_id, None);
    }
}
