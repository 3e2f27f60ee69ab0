use serde::{Deserialize, Serialize};

use super::lenient;

/// A licensed software product.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Product {
    #[serde(rename = "product_Id", default, deserialize_with = "lenient::int")]
    pub id: i64,
    #[serde(rename = "product_Name", default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "release_Date", default, deserialize_with = "lenient::text")]
    pub release_date: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub website: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: String,
    /// Comma separated, display only.
    #[serde(rename = "platform_Names", default, deserialize_with = "lenient::text")]
    pub platform_names: String,
    #[serde(rename = "plat_Form", default, deserialize_with = "lenient::int_list")]
    pub platform_ids: Vec<i64>,
}

impl Product {
    /// `website`, or `url` on older records.
    pub fn website(&self) -> &str {
        if self.website.trim().is_empty() {
            &self.url
        } else {
            &self.website
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateProduct {
    #[serde(rename = "product_Name")]
    pub name: String,
    #[serde(rename = "release_Date")]
    pub release_date: String,
    pub website: String,
    #[serde(rename = "plat_Form")]
    pub platform_ids: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateProduct {
    #[serde(rename = "product_Id")]
    pub id: i64,
    #[serde(rename = "product_Name")]
    pub name: String,
    #[serde(rename = "release_Date")]
    pub release_date: String,
    pub website: String,
    #[serde(rename = "platform_Ids")]
    pub platform_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn website_falls_back_to_url() {
        let p: Product = serde_json::from_value(json!({
            "product_Id": 4,
            "product_Name": "Fees",
            "url": "https://fees.example.com",
            "plat_Form": "1,3"
        }))
        .unwrap();
        assert_eq!(p.website(), "https://fees.example.com");
        assert_eq!(p.platform_ids, vec![1, 3]);
        assert_eq!(p.platform_names, "");
    }

    #[test]
    fn create_payload_sends_platform_ids() {
        let body = serde_json::to_value(CreateProduct {
            name: "Fees".into(),
            release_date: "2024-05-01".into(),
            website: "https://fees.example.com".into(),
            platform_ids: vec![1, 2],
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "product_Name": "Fees",
                "release_Date": "2024-05-01",
                "website": "https://fees.example.com",
                "plat_Form": [1, 2]
            })
        );
    }
}
