use serde::{Deserialize, Serialize};

use super::lenient;

/// A pricing plan attached to a product.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Package {
    #[serde(rename = "package_Id", default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "package_name", alias = "package_Name", default, deserialize_with = "lenient::text")]
    pub name: String,
    /// Kept as text so `100.00` renders as sent.
    #[serde(rename = "package_Price", default, deserialize_with = "lenient::text")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub billing_cycle: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub max_users: String,
    #[serde(rename = "storage_Limit", default, deserialize_with = "lenient::text")]
    pub storage_limit: String,
    #[serde(rename = "product_Id", default, deserialize_with = "lenient::opt_int")]
    pub product_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub product_name: String,
}

/// `package_Id` carries the tier id and `pack_Val_Id` the billing cycle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreatePackage {
    #[serde(rename = "product_Id")]
    pub product_id: i64,
    #[serde(rename = "package_Id")]
    pub tier: i64,
    #[serde(rename = "package_Price")]
    pub price: String,
    #[serde(rename = "pack_Val_Id")]
    pub billing_cycle: i64,
    pub max_users: i64,
    #[serde(rename = "storage_Limit")]
    pub storage_limit: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdatePackage {
    #[serde(rename = "product_Id")]
    pub product_id: Option<i64>,
    #[serde(rename = "package_Id")]
    pub id: i64,
    #[serde(rename = "package_Price")]
    pub price: String,
    pub max_users: i64,
    #[serde(rename = "storage_Limit")]
    pub storage_limit: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct DeletePackage {
    #[serde(rename = "package_Id")]
    pub id: i64,
    #[serde(rename = "product_Id", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_either_name_key() {
        let pkgs: Vec<Package> = serde_json::from_value(json!([
            {"package_Id": 1, "package_name": "Basic", "package_Price": "100.00", "max_users": 10, "storage_Limit": 5, "product_Id": "3"},
            {"package_Id": 2, "package_Name": "Premium", "package_Price": 250, "billing_cycle": "Yearly", "product_name": "Fees"}
        ]))
        .unwrap();
        assert_eq!(pkgs[0].name, "Basic");
        assert_eq!(pkgs[0].price, "100.00");
        assert_eq!(pkgs[0].max_users, "10");
        assert_eq!(pkgs[0].product_id, Some(3));
        assert_eq!(pkgs[1].name, "Premium");
        assert_eq!(pkgs[1].price, "250");
        assert_eq!(pkgs[1].product_id, None);
    }

    #[test]
    fn delete_omits_missing_product() {
        let body = serde_json::to_value(DeletePackage { id: 9, product_id: None }).unwrap();
        assert_eq!(body, json!({"package_Id": 9}));
        let body = serde_json::to_value(DeletePackage { id: 9, product_id: Some(2) }).unwrap();
        assert_eq!(body, json!({"package_Id": 9, "product_Id": 2}));
    }
}
