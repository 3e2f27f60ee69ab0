use api::date::format_date;
use api::lenient::or_na;
use api::{Platform, Product};
use dioxus::prelude::*;

use crate::auth::{use_api, use_config, use_error_reporter};
use crate::components::{Button, ButtonVariant, ConfirmDialog, FieldError, FormField, Input, Label};
use crate::forms::{FieldErrors, FormMode, ProductForm};
use crate::icons::{FaEye, FaPenToSquare, FaTrash};
use crate::pagination::{Pagination, Paginator};
use crate::toast::use_toast;
use crate::views::ModalOverlay;
use crate::Icon;

#[component]
pub fn ProductsView() -> Element {
    let api = use_api();
    let config = use_config();
    let reporter = use_error_reporter();
    let toast = use_toast();

    let mut products = use_signal(Vec::<Product>::new);
    let mut loading = use_signal(|| true);
    let mut pager = use_signal(|| Paginator::new(0, config.ui.page_size));
    let mut dialog = use_signal(|| Option::<(FormMode, Option<Product>)>::None);
    let mut viewing = use_signal(|| Option::<Product>::None);
    let mut deleting = use_signal(|| Option::<Product>::None);
    let mut delete_busy = use_signal(|| false);

    let fetch_api = api.clone();
    let mut loader = use_resource(move || {
        let api = fetch_api.clone();
        async move {
            match api.fetch_products().await {
                Ok(list) => products.set(list),
                Err(e) => reporter.report(&e, "Failed to load products"),
            }
            loading.set(false);
        }
    });

    use_effect(move || {
        let total = products().len();
        pager.write().set_total(total);
    });

    let handle_delete = move |_| {
        let Some(product) = deleting() else { return };
        let api = api.clone();
        delete_busy.set(true);
        spawn(async move {
            match api.delete_product(product.id).await {
                Ok(()) => {
                    products.write().retain(|p| p.id != product.id);
                    toast.success("Product deleted successfully");
                }
                Err(e) => reporter.report(&e, "Failed to delete product"),
            }
            delete_busy.set(false);
            deleting.set(None);
        });
    };

    let rows = pager().slice(&products()).to_vec();

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Product List" }
                div { class: "page-actions",
                    Button {
                        onclick: move |_| dialog.set(Some((FormMode::Add, None))),
                        "+ Add Product"
                    }
                }
            }

            div { class: "table-card",
                if loading() {
                    p { class: "page-status", "Loading products..." }
                } else if products().is_empty() {
                    p { class: "page-status", "No products found" }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Product Name" }
                                th { "Platforms" }
                                th { "Release Date" }
                                th { "Website" }
                                th { class: "center", "Actions" }
                            }
                        }
                        tbody {
                            for product in rows {
                                tr { key: "{product.id}",
                                    td { "{or_na(&product.name)}" }
                                    td { "{or_na(&product.platform_names)}" }
                                    td { "{format_date(&product.release_date)}" }
                                    td {
                                        if product.website().is_empty() {
                                            "N/A"
                                        } else {
                                            a {
                                                href: "{product.website()}",
                                                target: "_blank",
                                                rel: "noopener noreferrer",
                                                "{product.website()}"
                                            }
                                        }
                                    }
                                    td { class: "center actions",
                                        button {
                                            class: "icon-btn",
                                            title: "View",
                                            onclick: {
                                                let product = product.clone();
                                                move |_| viewing.set(Some(product.clone()))
                                            },
                                            Icon { icon: FaEye, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-btn",
                                            title: "Edit",
                                            onclick: {
                                                let product = product.clone();
                                                move |_| dialog.set(Some((FormMode::Edit, Some(product.clone()))))
                                            },
                                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-btn danger",
                                            title: "Delete",
                                            onclick: {
                                                let product = product.clone();
                                                move |_| deleting.set(Some(product.clone()))
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

        if let Some(product) = viewing() {
            ModalOverlay { on_close: move |_| viewing.set(None), title: "View Product Details",
                div { class: "modal-body",
                    dl { class: "detail-list",
                        dt { "Product Name" }
                        dd { "{or_na(&product.name)}" }
                        dt { "Platforms" }
                        dd { "{or_na(&product.platform_names)}" }
                        dt { "Release Date" }
                        dd { "{format_date(&product.release_date)}" }
                        dt { "Website" }
                        dd { "{or_na(product.website())}" }
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

        if let Some((mode, product)) = dialog() {
            ProductDialog {
                mode,
                product,
                on_close: move |_| dialog.set(None),
                on_saved: move |_| {
                    dialog.set(None);
                    loader.restart();
                },
            }
        }

        if deleting().is_some() {
            ConfirmDialog {
                title: "Delete Product",
                message: "Are you sure you want to delete this product?",
                busy: delete_busy(),
                on_confirm: handle_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
fn ProductDialog(
    mode: FormMode,
    product: Option<Product>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_api();
    let reporter = use_error_reporter();
    let toast = use_toast();

    let initial = product.as_ref().map(ProductForm::for_edit).unwrap_or_default();
    let mut form = use_signal(move || initial);
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let product_id = product.as_ref().map(|p| p.id).unwrap_or_default();

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
                FormMode::Add => (api.create_product(&current.to_create()).await, "add"),
                FormMode::Edit => (api.update_product(&current.to_update(product_id)).await, "update"),
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    toast.success(match mode {
                        FormMode::Add => "Product added successfully",
                        FormMode::Edit => "Product updated successfully",
                    });
                    on_saved.call(());
                }
                Err(e) => reporter.report(&e, &format!("Failed to {verb} product")),
            }
        });
    };

    let err = move |field: &str| errors().get(field).map(str::to_string);
    let title = match mode {
        FormMode::Add => "Add Product",
        FormMode::Edit => "Edit Product",
    };

    rsx! {
        ModalOverlay { on_close: move |_| on_close.call(()), title: "{title}",
            div { class: "modal-body",
                FormField { label: "Product Name", html_for: "product-name", error: err("name"),
                    Input {
                        id: "product-name",
                        placeholder: "Enter product name",
                        value: form().name,
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                }
                if mode == FormMode::Add {
                    div { class: "form-field",
                        Label { html_for: "product-platforms", "Platform" }
                        div { id: "product-platforms", class: "checkbox-group",
                            for platform in Platform::ALL {
                                label { key: "{platform.id()}", class: "checkbox",
                                    input {
                                        r#type: "checkbox",
                                        checked: form().platforms.contains(&platform.id()),
                                        onchange: move |evt: FormEvent| {
                                            form.write().toggle_platform(platform.id(), evt.checked());
                                        },
                                    }
                                    "{platform.label()}"
                                }
                            }
                        }
                        FieldError { message: err("platforms") }
                    }
                }
                FormField { label: "Release Date", html_for: "product-release", error: err("release_date"),
                    Input {
                        id: "product-release",
                        r#type: "date",
                        value: form().release_date,
                        oninput: move |evt: FormEvent| form.write().release_date = evt.value(),
                    }
                }
                FormField { label: "Website", html_for: "product-website", error: err("website"),
                    Input {
                        id: "product-website",
                        r#type: "url",
                        placeholder: "https://example.com",
                        value: form().website,
                        oninput: move |evt: FormEvent| form.write().website = evt.value(),
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
                        if saving() { "Saving..." } else if mode == FormMode::Add { "Add" } else { "Update" }
                    }
                }
            }
        }
    }
}
