use api::date::today;
use api::{Enquiry, EnquiryStatus, NewEnquiry, UpdateEnquiry};

use super::validate::{is_email, require, FieldErrors};
use super::FormMode;

/// Add/edit enquiry modal. `product` and `plan` hold ids from the
/// product → package cascade; `product_name` is shown read-only when editing.
#[derive(Clone, Debug, PartialEq)]
pub struct EnquiryForm {
    pub name: String,
    pub institute: String,
    pub contact: String,
    pub email: String,
    pub product: String,
    pub product_name: String,
    pub plan: String,
    pub message: String,
    pub status: String,
}

impl Default for EnquiryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            institute: String::new(),
            contact: String::new(),
            email: String::new(),
            product: String::new(),
            product_name: String::new(),
            plan: String::new(),
            message: String::new(),
            status: EnquiryStatus::Pending.label().to_string(),
        }
    }
}

impl EnquiryForm {
    pub fn for_edit(enquiry: &Enquiry) -> Self {
        let status = match enquiry.status {
            EnquiryStatus::Unknown => EnquiryStatus::Pending,
            other => other,
        };
        Self {
            name: enquiry.name.clone(),
            institute: enquiry.institute.clone(),
            contact: enquiry.contact.clone(),
            email: enquiry.email.clone(),
            product: enquiry.product_id.map(|id| id.to_string()).unwrap_or_default(),
            product_name: enquiry.product.clone(),
            plan: enquiry.package_id.map(|id| id.to_string()).unwrap_or_default(),
            message: enquiry.message.clone(),
            status: status.label().to_string(),
        }
    }

    /// A new product invalidates the chosen package.
    pub fn select_product(&mut self, id: String, name: String) {
        self.product = id;
        self.product_name = name;
        self.plan.clear();
    }

    pub fn validate(&self, mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if mode == FormMode::Edit {
            return errors;
        }
        require(&mut errors, "name", &self.name, "Name is required");
        require(&mut errors, "institute", &self.institute, "Institute Name is required");
        require(&mut errors, "contact", &self.contact, "Contact is required");
        if require(&mut errors, "email", &self.email, "Email is required") && !is_email(&self.email) {
            errors.add("email", "Invalid email");
        }
        require(&mut errors, "product", &self.product, "Product is required");
        errors
    }

    pub fn to_new(&self) -> NewEnquiry {
        NewEnquiry {
            name: self.name.trim().to_string(),
            institute: self.institute.trim().to_string(),
            email: self.email.trim().to_string(),
            contact: self.contact.trim().to_string(),
            product: self.product.clone(),
            plan: self.plan.clone(),
            message: self.message.trim().to_string(),
            date: today(),
        }
    }

    pub fn to_update(&self, id: i64) -> UpdateEnquiry {
        UpdateEnquiry {
            id: id.to_string(),
            product: self.product.clone(),
            plan: self.plan.clone(),
            status: EnquiryStatus::from_label(&self.status).code().to_string(),
        }
    }
}

/// Convert-to-client modal: only the subscription start date is asked for.
pub fn validate_start_date(start_date: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "start_date", start_date, "Please select a start date");
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_mode_requires_contact_details() {
        let errors = EnquiryForm::default().validate(FormMode::Add);
        for field in ["name", "institute", "contact", "email", "product"] {
            assert!(errors.has(field), "missing error for {field}");
        }
        assert!(!errors.has("plan"));
        assert!(EnquiryForm::default().validate(FormMode::Edit).is_empty());
    }

    #[test]
    fn new_enquiry_is_dated_today() {
        let form = EnquiryForm {
            name: "Ravi".into(),
            institute: "East College".into(),
            contact: "9000000000".into(),
            email: "ravi@example.com".into(),
            product: "4".into(),
            plan: "9".into(),
            ..Default::default()
        };
        assert!(form.validate(FormMode::Add).is_empty());
        let payload = form.to_new();
        assert_eq!(payload.date, today());
        assert_eq!(payload.product, "4");
    }

    #[test]
    fn edit_maps_status_to_code() {
        let enquiry = Enquiry {
            id: 12,
            product: "Fees".into(),
            product_id: Some(4),
            package_id: Some(9),
            status: EnquiryStatus::InProgress,
            ..Default::default()
        };
        let mut form = EnquiryForm::for_edit(&enquiry);
        assert_eq!(form.status, "In Progress");
        assert_eq!(form.product_name, "Fees");
        form.status = "Resolved".into();
        let update = form.to_update(enquiry.id);
        assert_eq!(update.id, "12");
        assert_eq!(update.status, "3");
        assert_eq!(update.plan, "9");
    }

    #[test]
    fn unknown_status_edits_as_pending() {
        let form = EnquiryForm::for_edit(&Enquiry::default());
        assert_eq!(form.status, "Pending");
    }

    #[test]
    fn changing_product_clears_plan() {
        let mut form = EnquiryForm {
            plan: "9".into(),
            ..Default::default()
        };
        form.select_product("5".into(), "Library".into());
        assert_eq!(form.plan, "");
        assert_eq!(form.product_name, "Library");
    }

    #[test]
    fn convert_requires_start_date() {
        assert_eq!(validate_start_date("").get("start_date"), Some("Please select a start date"));
        assert!(validate_start_date("2024-06-01").is_empty());
    }
}
