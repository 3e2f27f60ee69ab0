use api::{BillingCycle, CreatePackage, Package, PackageTier, UpdatePackage};

use super::client::parse_id;
use super::validate::{is_digits, is_price, require, FieldErrors};
use super::FormMode;

/// Add/edit package modal. `tier` and `billing_cycle` hold catalog ids as strings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PackageForm {
    pub product_id: String,
    pub tier: String,
    pub price: String,
    pub billing_cycle: String,
    pub max_users: String,
    pub storage_limit: String,
}

impl PackageForm {
    /// Blank form; `product_id` is the product the table is filtered to, if any.
    pub fn for_add(product_id: Option<i64>) -> Self {
        Self {
            product_id: product_id.map(|id| id.to_string()).unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn for_edit(package: &Package) -> Self {
        Self {
            product_id: package.product_id.map(|id| id.to_string()).unwrap_or_default(),
            tier: PackageTier::from_name(&package.name)
                .map(|t| t.id().to_string())
                .unwrap_or_default(),
            price: package.price.clone(),
            billing_cycle: String::new(),
            max_users: package.max_users.clone(),
            storage_limit: package.storage_limit.clone(),
        }
    }

    pub fn validate(&self, mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if require(&mut errors, "tier", &self.tier, "Package Name is required")
            && PackageTier::from_id(parse_id(&self.tier)).is_none()
        {
            errors.add("tier", "Invalid package name");
        }
        if require(&mut errors, "price", &self.price, "Package Price is required")
            && !is_price(&self.price)
        {
            errors.add("price", "Price must be a valid number (e.g., 100.00)");
        }
        if require(&mut errors, "max_users", &self.max_users, "Max Users is required")
            && !is_digits(self.max_users.trim())
        {
            errors.add("max_users", "Max Users must be a positive integer");
        }
        if require(&mut errors, "storage_limit", &self.storage_limit, "Storage Limit is required")
            && !is_digits(self.storage_limit.trim())
        {
            errors.add("storage_limit", "Storage Limit must be a positive integer");
        }
        if mode == FormMode::Add {
            require(&mut errors, "product_id", &self.product_id, "Product is required");
            if require(&mut errors, "billing_cycle", &self.billing_cycle, "Billing Cycle is required")
                && BillingCycle::from_id(parse_id(&self.billing_cycle)).is_none()
            {
                errors.add("billing_cycle", "Invalid billing cycle");
            }
        }
        errors
    }

    pub fn to_create(&self) -> CreatePackage {
        CreatePackage {
            product_id: parse_id(&self.product_id),
            tier: parse_id(&self.tier),
            price: self.price.trim().to_string(),
            billing_cycle: parse_id(&self.billing_cycle),
            max_users: parse_id(&self.max_users),
            storage_limit: parse_id(&self.storage_limit),
        }
    }

    /// `id` is the package row being edited.
    pub fn to_update(&self, id: i64) -> UpdatePackage {
        UpdatePackage {
            product_id: self.product_id.trim().parse().ok(),
            id,
            price: self.price.trim().to_string(),
            max_users: parse_id(&self.max_users),
            storage_limit: parse_id(&self.storage_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PackageForm {
        PackageForm {
            product_id: "3".into(),
            tier: "2".into(),
            price: "499.99".into(),
            billing_cycle: "4".into(),
            max_users: "50".into(),
            storage_limit: "100".into(),
        }
    }

    #[test]
    fn price_format() {
        let mut form = filled();
        for good in ["100", "100.5", "100.00"] {
            form.price = good.into();
            assert!(!form.validate(FormMode::Add).has("price"), "{good} should pass");
        }
        for bad in ["100.", "100.123", "-5", "abc"] {
            form.price = bad.into();
            assert!(form.validate(FormMode::Add).has("price"), "{bad} should fail");
        }
    }

    #[test]
    fn integers_and_tier() {
        let mut form = filled();
        form.max_users = "1.5".into();
        form.storage_limit = "-1".into();
        form.tier = "4".into();
        let errors = form.validate(FormMode::Edit);
        assert_eq!(errors.get("max_users"), Some("Max Users must be a positive integer"));
        assert_eq!(errors.get("storage_limit"), Some("Storage Limit must be a positive integer"));
        assert_eq!(errors.get("tier"), Some("Invalid package name"));
    }

    #[test]
    fn add_requires_product_and_cycle() {
        let mut form = filled();
        form.product_id.clear();
        form.billing_cycle = "9".into();
        let errors = form.validate(FormMode::Add);
        assert_eq!(errors.get("product_id"), Some("Product is required"));
        assert_eq!(errors.get("billing_cycle"), Some("Invalid billing cycle"));
        assert!(form.validate(FormMode::Edit).is_empty());
    }

    #[test]
    fn edit_maps_name_to_tier() {
        let package = Package {
            id: 8,
            name: "advanced".into(),
            price: "250".into(),
            max_users: "20".into(),
            storage_limit: "10".into(),
            product_id: Some(3),
            ..Default::default()
        };
        let form = PackageForm::for_edit(&package);
        assert_eq!(form.tier, "2");
        let update = form.to_update(package.id);
        assert_eq!(update.product_id, Some(3));
        assert_eq!(update.id, 8);
        assert_eq!(update.max_users, 20);
    }

    #[test]
    fn add_payload() {
        let create = filled().to_create();
        assert_eq!(create.tier, 2);
        assert_eq!(create.billing_cycle, 4);
        assert_eq!(create.price, "499.99");
        assert_eq!(PackageForm::for_add(Some(5)).product_id, "5");
    }
}
