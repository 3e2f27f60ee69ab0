use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::catalog::{ClientStatus, Timeline};
use super::lenient;

/// A licensed customer as `/fetchClient` returns it.
///
/// The backend mixes `User_Name` and `name` style keys, sometimes both in one
/// record. Decoding goes through `RawClient` and the first non-empty
/// spelling wins.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "RawClient")]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub institute: String,
    pub contact: String,
    pub email: String,
    pub product_name: String,
    pub package_name: String,
    pub status: ClientStatus,
    pub start_date: String,
    pub expiry_date: String,
    pub timeline: Timeline,
}

#[derive(Deserialize)]
struct RawClient {
    #[serde(rename = "User_Id", default, deserialize_with = "lenient::int")]
    user_id: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    id: i64,
    #[serde(rename = "User_Name", default, deserialize_with = "lenient::text")]
    user_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    name: String,
    #[serde(rename = "Institute_Name", default, deserialize_with = "lenient::text")]
    institute_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    institute: String,
    #[serde(rename = "Contact", default, deserialize_with = "lenient::text")]
    contact_upper: String,
    #[serde(default, deserialize_with = "lenient::text")]
    contact: String,
    #[serde(rename = "Email", default, deserialize_with = "lenient::text")]
    email_upper: String,
    #[serde(default, deserialize_with = "lenient::text")]
    email: String,
    #[serde(rename = "product_Name", default, deserialize_with = "lenient::text")]
    product_name: String,
    /// Either an id or a nested `{ name }` record.
    #[serde(default)]
    product: Value,
    #[serde(rename = "package_Name", default, deserialize_with = "lenient::text")]
    package_name: String,
    #[serde(default)]
    plan: Value,
    #[serde(rename = "user_status", default)]
    status: ClientStatus,
    #[serde(rename = "Start_Date", default, deserialize_with = "lenient::text")]
    start_date_upper: String,
    #[serde(default, deserialize_with = "lenient::text")]
    start_date: String,
    #[serde(rename = "Expiry_Date", default, deserialize_with = "lenient::text")]
    expiry_date_upper: String,
    #[serde(default, deserialize_with = "lenient::text")]
    expiry_date: String,
    #[serde(default)]
    timeline: Timeline,
}

fn nested_name(value: &Value) -> String {
    value
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

impl From<RawClient> for Client {
    fn from(raw: RawClient) -> Self {
        let product_name = lenient::first_text(raw.product_name, nested_name(&raw.product));
        let package_name = lenient::first_text(raw.package_name, nested_name(&raw.plan));
        Self {
            id: if raw.user_id != 0 { raw.user_id } else { raw.id },
            name: lenient::first_text(raw.user_name, raw.name),
            institute: lenient::first_text(raw.institute_name, raw.institute),
            contact: lenient::first_text(raw.contact_upper, raw.contact),
            email: lenient::first_text(raw.email_upper, raw.email),
            product_name,
            package_name,
            status: raw.status,
            start_date: lenient::first_text(raw.start_date_upper, raw.start_date),
            expiry_date: lenient::first_text(raw.expiry_date_upper, raw.expiry_date),
            timeline: raw.timeline,
        }
    }
}

/// Drop repeated ids: a later record replaces an earlier one but keeps its
/// position in the list. Records without an id only collapse when identical.
pub fn dedup_by_id(clients: Vec<Client>) -> Vec<Client> {
    let mut out: Vec<Client> = Vec::with_capacity(clients.len());
    for client in clients {
        let existing = if client.id == 0 {
            out.iter_mut().find(|c| **c == client)
        } else {
            out.iter_mut().find(|c| c.id == client.id)
        };
        match existing {
            Some(existing) => *existing = client,
            None => out.push(client),
        }
    }
    out
}

/// Entry of `/productcategory`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "RawOption")]
pub struct ProductOption {
    pub id: i64,
    pub name: String,
}

/// Entry of `/packagecategory`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "RawOption")]
pub struct PlanOption {
    pub id: i64,
    pub name: String,
}

/// Both category endpoints: `{product|plan, product_Name|plan_Name}` or
/// plain `{id, name}`.
#[derive(Deserialize)]
struct RawOption {
    #[serde(default, deserialize_with = "lenient::int")]
    product: i64,
    #[serde(rename = "Product_id", default, deserialize_with = "lenient::int")]
    product_id: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    plan: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    id: i64,
    #[serde(rename = "product_Name", default, deserialize_with = "lenient::text")]
    product_name: String,
    #[serde(rename = "plan_Name", default, deserialize_with = "lenient::text")]
    plan_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    name: String,
}

impl RawOption {
    fn merged(self) -> (i64, String) {
        let id = [self.product, self.product_id, self.plan, self.id]
            .into_iter()
            .find(|id| *id != 0)
            .unwrap_or_default();
        let name = lenient::first_text(lenient::first_text(self.product_name, self.plan_name), self.name);
        (id, name)
    }
}

impl From<RawOption> for ProductOption {
    fn from(raw: RawOption) -> Self {
        let (id, name) = raw.merged();
        Self { id, name }
    }
}

impl From<RawOption> for PlanOption {
    fn from(raw: RawOption) -> Self {
        let (id, name) = raw.merged();
        Self { id, name }
    }
}

/// Case-insensitive name lookup used to pre-select dropdowns on edit.
pub fn find_product<'a>(options: &'a [ProductOption], name: &str) -> Option<&'a ProductOption> {
    let name = name.trim();
    options.iter().find(|o| o.name.trim().eq_ignore_ascii_case(name))
}

pub fn find_plan<'a>(options: &'a [PlanOption], name: &str) -> Option<&'a PlanOption> {
    let name = name.trim();
    options.iter().find(|o| o.name.trim().eq_ignore_ascii_case(name))
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateClient {
    #[serde(rename = "user_Name")]
    pub name: String,
    #[serde(rename = "institute_Name")]
    pub institute: String,
    pub contact: String,
    pub email: String,
    pub product: i64,
    pub plan: i64,
    #[serde(rename = "start_Date")]
    pub start_date: String,
    pub timeline: Timeline,
}

/// Edit payload. The backend names the plan `Package` here and carries the
/// timeline id in `plan`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateClient {
    #[serde(rename = "user_Id")]
    pub id: i64,
    #[serde(rename = "user_Name")]
    pub name: String,
    #[serde(rename = "institute_Name")]
    pub institute: String,
    pub contact: String,
    pub email: String,
    pub product: i64,
    #[serde(rename = "Package")]
    pub plan: i64,
    #[serde(rename = "start_Date")]
    pub start_date: String,
    #[serde(rename = "plan")]
    pub timeline: Timeline,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_both_key_styles() {
        let upper: Client = serde_json::from_value(json!({
            "User_Id": "5",
            "User_Name": "Asha",
            "Institute_Name": "North High",
            "Contact": 9876543210u64,
            "Email": "asha@example.com",
            "product_Name": "Attendance",
            "package_Name": "Premium",
            "user_status": "Active",
            "Start_Date": "2024-01-01",
            "Expiry_Date": "2025-01-01",
            "timeline": "Yearly"
        }))
        .unwrap();
        assert_eq!(upper.id, 5);
        assert_eq!(upper.contact, "9876543210");
        assert_eq!(upper.status, ClientStatus::Active);
        assert_eq!(upper.timeline, Timeline::Yearly);

        let lower: Client = serde_json::from_value(json!({
            "id": 6,
            "name": "Ravi",
            "institute": "South High",
            "start_date": "2024-02-01",
            "user_status": null,
            "timeline": 2
        }))
        .unwrap();
        assert_eq!(lower.name, "Ravi");
        assert_eq!(lower.institute, "South High");
        assert_eq!(lower.email, "");
        assert_eq!(lower.status, ClientStatus::Unknown);
        assert_eq!(lower.timeline, Timeline::Quarterly);
    }

    #[test]
    fn dedup_keeps_first_position_last_value() {
        let c = |id, name: &str| Client {
            id,
            name: name.into(),
            ..Default::default()
        };
        let out = dedup_by_id(vec![c(1, "a"), c(2, "b"), c(1, "c")]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "c");
        assert_eq!(out[1].name, "b");
    }

    #[test]
    fn both_spellings_in_one_record_merge() {
        let client: Client = serde_json::from_value(json!({
            "User_Id": 3,
            "id": 3,
            "User_Name": "",
            "name": "Asha",
            "Email": "asha@example.com",
            "email": "other@example.com"
        }))
        .unwrap();
        assert_eq!(client.id, 3);
        assert_eq!(client.name, "Asha");
        assert_eq!(client.email, "asha@example.com");

        let from_lower: Client = serde_json::from_value(json!({"User_Id": null, "id": "9"})).unwrap();
        assert_eq!(from_lower.id, 9);

        let product: ProductOption =
            serde_json::from_value(json!({"id": 2, "product": 2, "product_Name": "X", "name": "Y"})).unwrap();
        assert_eq!(product, ProductOption { id: 2, name: "X".into() });
        let plan: PlanOption = serde_json::from_value(json!({"plan": 4, "id": 1, "name": "Basic"})).unwrap();
        assert_eq!(plan, PlanOption { id: 4, name: "Basic".into() });
    }

    #[test]
    fn names_fall_back_to_nested_records() {
        let client: Client = serde_json::from_value(json!({
            "id": 1,
            "product": {"id": 7, "name": "Attendance"},
            "plan": {"id": 2, "name": "Premium"}
        }))
        .unwrap();
        assert_eq!(client.product_name, "Attendance");
        assert_eq!(client.package_name, "Premium");

        let flat: Client = serde_json::from_value(json!({
            "product_Name": "Fees",
            "product": 7,
            "package_Name": "Basic"
        }))
        .unwrap();
        assert_eq!(flat.product_name, "Fees");
        assert_eq!(flat.package_name, "Basic");
    }

    #[test]
    fn rows_without_ids_stay_distinct() {
        let rows: Vec<Client> =
            serde_json::from_value(json!([{"User_Name": "A"}, {"User_Name": "B"}, {"User_Name": "A"}])).unwrap();
        let out = dedup_by_id(rows);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "A");
        assert_eq!(out[1].name, "B");
    }

    #[test]
    fn update_payload_uses_backend_edit_shape() {
        let body = serde_json::to_value(UpdateClient {
            id: 3,
            name: "Asha".into(),
            institute: "North".into(),
            contact: "9876543210".into(),
            email: "a@b.co".into(),
            product: 7,
            plan: 2,
            start_date: "2024-01-01".into(),
            timeline: Timeline::HalfYearly,
        })
        .unwrap();
        assert_eq!(body["user_Id"], 3);
        assert_eq!(body["Package"], 2);
        assert_eq!(body["plan"], 3);
        assert_eq!(body["start_Date"], "2024-01-01");
    }

    #[test]
    fn option_lookup_is_case_insensitive() {
        let options: Vec<ProductOption> =
            serde_json::from_value(json!([{"product": 1, "product_Name": "Attendance "}, {"id": "2", "name": "Fees"}]))
                .unwrap();
        assert_eq!(find_product(&options, "attendance").map(|o| o.id), Some(1));
        assert_eq!(find_product(&options, "FEES").map(|o| o.id), Some(2));
        assert!(find_product(&options, "Library").is_none());
    }
}
