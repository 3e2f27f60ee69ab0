use api::date::to_input_date;
use api::{find_plan, find_product, Client, CreateClient, PlanOption, ProductOption, Timeline, UpdateClient};

use super::validate::{is_email, require, FieldErrors};

/// Add/edit client modal. Select values are ids as strings; empty means unselected.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientForm {
    pub name: String,
    pub institute: String,
    pub contact: String,
    pub email: String,
    pub product: String,
    pub plan: String,
    pub start_date: String,
    pub timeline: String,
}

impl Default for ClientForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            institute: String::new(),
            contact: String::new(),
            email: String::new(),
            product: String::new(),
            plan: String::new(),
            start_date: String::new(),
            timeline: Timeline::Monthly.id().to_string(),
        }
    }
}

impl ClientForm {
    /// Pre-fill from a table row. The row only carries product and plan
    /// names, so the dropdowns are matched by name.
    pub fn for_edit(client: &Client, products: &[ProductOption], plans: &[PlanOption]) -> Self {
        let text = |s: &str| if s == "N/A" { String::new() } else { s.to_string() };
        Self {
            name: text(&client.name),
            institute: text(&client.institute),
            contact: text(&client.contact),
            email: text(&client.email),
            product: find_product(products, &client.product_name)
                .map(|p| p.id.to_string())
                .unwrap_or_default(),
            plan: find_plan(plans, &client.package_name)
                .map(|p| p.id.to_string())
                .unwrap_or_default(),
            start_date: to_input_date(&client.start_date),
            timeline: client.timeline.id().to_string(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Client Name is required");
        require(&mut errors, "institute", &self.institute, "Institute Name is required");
        require(&mut errors, "contact", &self.contact, "Contact is required");
        if require(&mut errors, "email", &self.email, "Email is required") && !is_email(&self.email) {
            errors.add("email", "Invalid email");
        }
        require(&mut errors, "product", &self.product, "Product is required");
        require(&mut errors, "plan", &self.plan, "Plan is required");
        require(&mut errors, "start_date", &self.start_date, "Start Date is required");
        require(&mut errors, "timeline", &self.timeline, "Timeline is required");
        errors
    }

    fn timeline(&self) -> Timeline {
        Timeline::parse(&self.timeline)
    }

    pub fn to_create(&self) -> CreateClient {
        CreateClient {
            name: self.name.trim().to_string(),
            institute: self.institute.trim().to_string(),
            contact: self.contact.trim().to_string(),
            email: self.email.trim().to_string(),
            product: parse_id(&self.product),
            plan: parse_id(&self.plan),
            start_date: self.start_date.clone(),
            timeline: self.timeline(),
        }
    }

    pub fn to_update(&self, id: i64) -> UpdateClient {
        let create = self.to_create();
        UpdateClient {
            id,
            name: create.name,
            institute: create.institute,
            contact: create.contact,
            email: create.email,
            product: create.product,
            plan: create.plan,
            start_date: create.start_date,
            timeline: create.timeline,
        }
    }
}

pub(crate) fn parse_id(value: &str) -> i64 {
    value.trim().parse().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ClientStatus;

    fn filled() -> ClientForm {
        ClientForm {
            name: "Asha".into(),
            institute: "North High".into(),
            contact: "9876543210".into(),
            email: "asha@example.com".into(),
            product: "3".into(),
            plan: "2".into(),
            start_date: "2024-04-01".into(),
            timeline: "4".into(),
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ClientForm::default().validate();
        for field in ["name", "institute", "contact", "email", "product", "plan", "start_date"] {
            assert!(errors.has(field), "missing error for {field}");
        }
        assert!(!errors.has("timeline"));
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut form = filled();
        form.email = "asha@".into();
        assert_eq!(form.validate().get("email"), Some("Invalid email"));
    }

    #[test]
    fn filled_form_builds_payload() {
        let form = filled();
        assert!(form.validate().is_empty());
        let create = form.to_create();
        assert_eq!(create.product, 3);
        assert_eq!(create.timeline, Timeline::Yearly);
        let update = form.to_update(11);
        assert_eq!(update.id, 11);
        assert_eq!(update.plan, 2);
    }

    #[test]
    fn edit_preselects_by_name() {
        let client = Client {
            id: 1,
            name: "Asha".into(),
            institute: "N/A".into(),
            product_name: "attendance".into(),
            package_name: "PREMIUM".into(),
            status: ClientStatus::Active,
            start_date: "2024-01-05T00:00:00.000Z".into(),
            timeline: Timeline::Quarterly,
            ..Default::default()
        };
        let products = vec![ProductOption { id: 7, name: "Attendance".into() }];
        let plans = vec![PlanOption { id: 3, name: "Premium".into() }];
        let form = ClientForm::for_edit(&client, &products, &plans);
        assert_eq!(form.product, "7");
        assert_eq!(form.plan, "3");
        assert_eq!(form.institute, "");
        assert_eq!(form.start_date, "2024-01-05");
        assert_eq!(form.timeline, "2");
    }
}
