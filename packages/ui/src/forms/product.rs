use api::date::to_input_date;
use api::{CreateProduct, Product, UpdateProduct};

use super::validate::{is_http_url, is_iso_date, require, FieldErrors};
use super::FormMode;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    /// Checked platform ids. Only editable when adding.
    pub platforms: Vec<i64>,
    pub release_date: String,
    pub website: String,
}

impl ProductForm {
    pub fn for_edit(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            platforms: Vec::new(),
            release_date: to_input_date(&product.release_date),
            website: product.website().to_string(),
        }
    }

    pub fn toggle_platform(&mut self, id: i64, checked: bool) {
        self.platforms.retain(|p| *p != id);
        if checked {
            self.platforms.push(id);
            self.platforms.sort_unstable();
        }
    }

    pub fn validate(&self, mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if require(&mut errors, "name", &self.name, "Product name is required")
            && self.name.trim().chars().count() < 2
        {
            errors.add("name", "Product name must be at least 2 characters");
        }
        if mode == FormMode::Add && self.platforms.is_empty() {
            errors.add("platforms", "At least one platform must be selected");
        }
        if require(&mut errors, "release_date", &self.release_date, "Release date is required")
            && !is_iso_date(&self.release_date)
        {
            errors.add("release_date", "Please enter a valid date");
        }
        if require(&mut errors, "website", &self.website, "Website URL is required")
            && !is_http_url(&self.website)
        {
            errors.add("website", "Please enter a valid URL");
        }
        errors
    }

    pub fn to_create(&self) -> CreateProduct {
        CreateProduct {
            name: self.name.trim().to_string(),
            release_date: self.release_date.clone(),
            website: self.website.trim().to_string(),
            platform_ids: self.platforms.clone(),
        }
    }

    pub fn to_update(&self, id: i64) -> UpdateProduct {
        UpdateProduct {
            id,
            name: self.name.trim().to_string(),
            release_date: self.release_date.clone(),
            website: self.website.trim().to_string(),
            platform_ids: self.platforms.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        ProductForm {
            name: "Fees".into(),
            platforms: vec![1],
            release_date: "2024-05-01".into(),
            website: "https://fees.example.com".into(),
        }
    }

    #[test]
    fn short_name_and_bad_url() {
        let mut form = filled();
        form.name = "F".into();
        form.website = "fees".into();
        let errors = form.validate(FormMode::Add);
        assert_eq!(errors.get("name"), Some("Product name must be at least 2 characters"));
        assert_eq!(errors.get("website"), Some("Please enter a valid URL"));
    }

    #[test]
    fn platforms_only_required_when_adding() {
        let mut form = filled();
        form.platforms.clear();
        assert!(form.validate(FormMode::Add).has("platforms"));
        assert!(form.validate(FormMode::Edit).is_empty());
    }

    #[test]
    fn invalid_date() {
        let mut form = filled();
        form.release_date = "2024-13-01".into();
        assert_eq!(form.validate(FormMode::Edit).get("release_date"), Some("Please enter a valid date"));
    }

    #[test]
    fn toggling_keeps_ids_sorted_and_unique() {
        let mut form = ProductForm::default();
        form.toggle_platform(3, true);
        form.toggle_platform(1, true);
        form.toggle_platform(3, true);
        assert_eq!(form.platforms, vec![1, 3]);
        form.toggle_platform(1, false);
        assert_eq!(form.to_create().platform_ids, vec![3]);
    }

    #[test]
    fn edit_prefills_from_row() {
        let product = Product {
            id: 2,
            name: "Fees".into(),
            release_date: "2023-08-01T00:00:00.000Z".into(),
            url: "https://fees.example.com".into(),
            ..Default::default()
        };
        let form = ProductForm::for_edit(&product);
        assert_eq!(form.release_date, "2023-08-01");
        assert_eq!(form.website, "https://fees.example.com");
        assert!(form.platforms.is_empty());
        assert_eq!(form.to_update(2).id, 2);
    }
}
