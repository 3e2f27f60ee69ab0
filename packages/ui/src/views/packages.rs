use api::lenient::or_na;
use api::{BillingCycle, Package, PackageTier, ProductOption};
use dioxus::prelude::*;

use crate::auth::{use_api, use_config, use_error_reporter};
use crate::components::{Button, ButtonVariant, ConfirmDialog, FormField, Input, Select};
use crate::forms::{FieldErrors, FormMode, PackageForm};
use crate::icons::{FaEye, FaPenToSquare, FaTrash};
use crate::pagination::{Pagination, Paginator};
use crate::toast::use_toast;
use crate::views::ModalOverlay;
use crate::Icon;

#[component]
pub fn PackagesView() -> Element {
    let api = use_api();
    let config = use_config();
    let reporter = use_error_reporter();
    let toast = use_toast();

    let mut categories = use_signal(Vec::<ProductOption>::new);
    let mut packages = use_signal(Vec::<Package>::new);
    let mut loading = use_signal(|| true);
    let mut selected_product = use_signal(|| Option::<i64>::None);
    let mut pager = use_signal(|| Paginator::new(0, config.ui.page_size));
    let mut dialog = use_signal(|| Option::<(FormMode, Option<Package>)>::None);
    let mut viewing = use_signal(|| Option::<Package>::None);
    let mut deleting = use_signal(|| Option::<Package>::None);
    let mut delete_busy = use_signal(|| false);

    let categories_api = api.clone();
    let _categories = use_resource(move || {
        let api = categories_api.clone();
        async move {
            match api.fetch_product_options().await {
                Ok(list) => categories.set(list),
                Err(e) => reporter.report(&e, "Failed to load product categories"),
            }
        }
    });

    // Re-runs whenever the product filter changes
    let fetch_api = api.clone();
    let mut loader = use_resource(move || {
        let api = fetch_api.clone();
        let product_id = selected_product();
        async move {
            loading.set(true);
            match api.fetch_packages(product_id).await {
                Ok(list) => packages.set(list),
                Err(e) => {
                    packages.set(Vec::new());
                    reporter.report(&e, "Failed to load packages");
                }
            }
            loading.set(false);
        }
    });

    use_effect(move || {
        let total = packages().len();
        pager.write().set_total(total);
    });

    let handle_delete = move |_| {
        let Some(package) = deleting() else { return };
        let api = api.clone();
        delete_busy.set(true);
        spawn(async move {
            match api.delete_package(package.id, selected_product()).await {
                Ok(()) => {
                    toast.success("Package deleted successfully");
                    loader.restart();
                }
                Err(e) => reporter.report(&e, "Failed to delete package"),
            }
            delete_busy.set(false);
            deleting.set(None);
        });
    };

    let filter_value = selected_product().map(|id| id.to_string()).unwrap_or_default();
    let rows = pager().slice(&packages()).to_vec();
    let filtered_product = selected_product().and_then(|id| categories().into_iter().find(|c| c.id == id));

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Package List" }
                div { class: "page-actions",
                    select {
                        class: "form-input filter",
                        value: "{filter_value}",
                        onchange: move |evt| {
                            selected_product.set(evt.value().parse().ok());
                            pager.write().reset();
                        },
                        option { value: "", "All Products" }
                        for category in categories() {
                            option {
                                key: "{category.id}",
                                value: "{category.id}",
                                selected: Some(category.id) == selected_product(),
                                "{category.name}"
                            }
                        }
                    }
                    Button {
                        onclick: move |_| dialog.set(Some((FormMode::Add, None))),
                        "+ Add Package"
                    }
                }
            }

            div { class: "table-card",
                if loading() {
                    p { class: "page-status", "Loading packages..." }
                } else if packages().is_empty() {
                    p { class: "page-status", "No packages found" }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Product Name" }
                                th { "Package Name" }
                                th { "Price" }
                                th { "Billing Cycle" }
                                th { "Max Users" }
                                th { "Storage Limit" }
                                th { class: "center", "Actions" }
                            }
                        }
                        tbody {
                            for package in rows {
                                tr { key: "{package.id}",
                                    td { "{or_na(&package.product_name)}" }
                                    td { "{or_na(&package.name)}" }
                                    td { "{or_na(&package.price)}" }
                                    td { "{or_na(&package.billing_cycle)}" }
                                    td { "{or_na(&package.max_users)}" }
                                    td { "{or_na(&package.storage_limit)}" }
                                    td { class: "center actions",
                                        button {
                                            class: "icon-btn",
                                            title: "View",
                                            onclick: {
                                                let package = package.clone();
                                                move |_| viewing.set(Some(package.clone()))
                                            },
                                            Icon { icon: FaEye, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-btn",
                                            title: "Edit",
                                            onclick: {
                                                let package = package.clone();
                                                move |_| dialog.set(Some((FormMode::Edit, Some(package.clone()))))
                                            },
                                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-btn danger",
                                            title: "Delete",
                                            onclick: {
                                                let package = package.clone();
                                                move |_| deleting.set(Some(package.clone()))
                                            },
                                            Icon { icon: FaTrash, width: 14, height: 14 }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    Pagination { pager }
                }
            }
        }

        if let Some(package) = viewing() {
            ModalOverlay { on_close: move |_| viewing.set(None), title: "View Package",
                div { class: "modal-body",
                    dl { class: "detail-list",
                        dt { "Product Name" }
                        dd { "{or_na(&package.product_name)}" }
                        dt { "Package Name" }
                        dd { "{or_na(&package.name)}" }
                        dt { "Price" }
                        dd { "{or_na(&package.price)}" }
                        dt { "Billing Cycle" }
                        dd { "{or_na(&package.billing_cycle)}" }
                        dt { "Max Users" }
                        dd { "{or_na(&package.max_users)}" }
                        dt { "Storage Limit" }
                        dd { "{or_na(&package.storage_limit)}" }
                    }
                    div { class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| viewing.set(None),
                            "Close"
                        }
                    }
                }
            }
        }

        if let Some((mode, package)) = dialog() {
            PackageDialog {
                mode,
                package,
                filtered_product: filtered_product.clone(),
                on_close: move |_| dialog.set(None),
                on_saved: move |_| {
                    dialog.set(None);
                    loader.restart();
                },
            }
        }

        if deleting().is_some() {
            ConfirmDialog {
                title: "Delete Package",
                message: "Are you sure you want to delete this package?",
                busy: delete_busy(),
                on_confirm: handle_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
fn PackageDialog(
    mode: FormMode,
    package: Option<Package>,
    /// The product the table is filtered to; the only product offered when adding.
    filtered_product: Option<ProductOption>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_api();
    let reporter = use_error_reporter();
    let toast = use_toast();

    let initial = match &package {
        Some(package) => PackageForm::for_edit(package),
        None => PackageForm::for_add(filtered_product.as_ref().map(|p| p.id)),
    };
    let mut form = use_signal(move || initial);
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let package_id = package.as_ref().map(|p| p.id).unwrap_or_default();

    let handle_submit = move |_| {
        let current = form();
        let found = current.validate(mode);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        saving.set(true);
        let api = api.clone();
        spawn(async move {
            let (result, verb) = match mode {
                FormMode::Add => (api.create_package(&current.to_create()).await, "add"),
                FormMode::Edit => (api.update_package(&current.to_update(package_id)).await, "update"),
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    toast.success(match mode {
                        FormMode::Add => "Package added successfully",
                        FormMode::Edit => "Package updated successfully",
                    });
                    on_saved.call(());
                }
                Err(e) => reporter.report(&e, &format!("Failed to {verb} package")),
            }
        });
    };

    let err = move |field: &str| errors().get(field).map(str::to_string);
    let tier_options: Vec<(String, String)> = PackageTier::ALL
        .iter()
        .map(|t| (t.id().to_string(), t.label().to_string()))
        .collect();
    let cycle_options: Vec<(String, String)> = BillingCycle::ALL
        .iter()
        .map(|c| (c.id().to_string(), c.label().to_string()))
        .collect();
    let product_options: Vec<(String, String)> = filtered_product
        .iter()
        .map(|p| (p.id.to_string(), p.name.clone()))
        .collect();
    let title = match mode {
        FormMode::Add => "Add Package",
        FormMode::Edit => "Edit Package",
    };

    rsx! {
        ModalOverlay { on_close: move |_| on_close.call(()), title: "{title}",
            div { class: "modal-body",
                FormField { label: "Package Name", html_for: "package-tier", error: err("tier"),
                    Select {
                        id: "package-tier",
                        value: form().tier,
                        options: tier_options,
                        placeholder: "Select package name",
                        onchange: move |evt: FormEvent| form.write().tier = evt.value(),
                    }
                }
                FormField { label: "Package Price", html_for: "package-price", error: err("price"),
                    Input {
                        id: "package-price",
                        placeholder: "100.00",
                        value: form().price,
                        oninput: move |evt: FormEvent| form.write().price = evt.value(),
                    }
                }
                FormField { label: "Max Users", html_for: "package-users", error: err("max_users"),
                    Input {
                        id: "package-users",
                        r#type: "number",
                        value: form().max_users,
                        oninput: move |evt: FormEvent| form.write().max_users = evt.value(),
                    }
                }
                FormField { label: "Storage Limit", html_for: "package-storage", error: err("storage_limit"),
                    Input {
                        id: "package-storage",
                        r#type: "number",
                        value: form().storage_limit,
                        oninput: move |evt: FormEvent| form.write().storage_limit = evt.value(),
                    }
                }
                if mode == FormMode::Add {
                    FormField { label: "Billing Cycle", html_for: "package-cycle", error: err("billing_cycle"),
                        Select {
                            id: "package-cycle",
                            value: form().billing_cycle,
                            options: cycle_options,
                            placeholder: "Select billing cycle",
                            onchange: move |evt: FormEvent| form.write().billing_cycle = evt.value(),
                        }
                    }
                    FormField { label: "Product", html_for: "package-product", error: err("product_id"),
                        Select {
                            id: "package-product",
                            value: form().product_id,
                            options: product_options,
                            placeholder: "Select product",
                            onchange: move |evt: FormEvent| form.write().product_id = evt.value(),
                        }
                    }
                }
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        disabled: saving(),
                        onclick: handle_submit,
                        if saving() { "Saving..." } else if mode == FormMode::Add { "Save" } else { "Update" }
                    }
                }
            }
        }
    }
}
