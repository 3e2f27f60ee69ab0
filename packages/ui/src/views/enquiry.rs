use api::date::format_date;
use api::lenient::or_na;
use api::{Enquiry, EnquiryStatus, Package, ProductOption};
use dioxus::prelude::*;

use crate::auth::{use_api, use_config, use_error_reporter};
use crate::components::{Button, ButtonVariant, FormField, Input, Select, TextArea};
use crate::forms::{validate_start_date, EnquiryForm, FieldErrors, FormMode};
use crate::icons::{FaPenToSquare, FaUserPlus};
use crate::pagination::{Pagination, Paginator};
use crate::toast::use_toast;
use crate::views::ModalOverlay;
use crate::Icon;

/// `"All"` keeps every row; any other value must equal the status label.
pub fn filter_by_status(enquiries: &[Enquiry], filter: &str) -> Vec<Enquiry> {
    enquiries
        .iter()
        .filter(|e| filter == "All" || e.status.label() == filter)
        .cloned()
        .collect()
}

fn status_badge(status: EnquiryStatus) -> &'static str {
    match status {
        EnquiryStatus::Pending => "badge badge-yellow",
        EnquiryStatus::InProgress => "badge badge-blue",
        EnquiryStatus::Resolved => "badge badge-green",
        EnquiryStatus::Unknown => "badge",
    }
}

#[component]
pub fn EnquiryView() -> Element {
    let api = use_api();
    let config = use_config();
    let reporter = use_error_reporter();

    let mut enquiries = use_signal(Vec::<Enquiry>::new);
    let mut loading = use_signal(|| true);
    let mut filter = use_signal(|| "All".to_string());
    let mut pager = use_signal(|| Paginator::new(0, config.ui.page_size));
    let mut dialog = use_signal(|| Option::<(FormMode, Option<Enquiry>)>::None);
    let mut converting = use_signal(|| Option::<i64>::None);

    let mut loader = use_resource(move || {
        let api = api.clone();
        async move {
            match api.fetch_enquiries().await {
                Ok(list) => enquiries.set(list),
                Err(e) => reporter.report(&e, "Failed to load enquiries"),
            }
            loading.set(false);
        }
    });

    let filtered = use_memo(move || filter_by_status(&enquiries(), &filter()));
    use_effect(move || {
        let total = filtered().len();
        pager.write().set_total(total);
    });

    let rows = pager().slice(&filtered()).to_vec();

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Enquiry List" }
                div { class: "page-actions",
                    select {
                        class: "form-input filter",
                        value: filter(),
                        onchange: move |evt| {
                            filter.set(evt.value());
                            pager.write().reset();
                        },
                        option { value: "All", "All Enquiry" }
                        for status in EnquiryStatus::CHOICES {
                            option { key: "{status.label()}", value: "{status.label()}", "{status.label()}" }
                        }
                    }
                    Button {
                        onclick: move |_| dialog.set(Some((FormMode::Add, None))),
                        "+ Add Enquiry"
                    }
                }
            }

            div { class: "table-card",
                if loading() {
                    p { class: "page-status", "Loading enquiries..." }
                } else if filtered().is_empty() {
                    p { class: "page-status", "No enquiries found" }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Contact No" }
                                th { "Products" }
                                th { "Plan" }
                                th { "Message" }
                                th { "Enquiry Date" }
                                th { "Status" }
                                th { class: "center", "Actions" }
                            }
                        }
                        tbody {
                            for enquiry in rows {
                                tr { key: "{enquiry.id}",
                                    td {
                                        div { class: "cell-main", "{or_na(&enquiry.name)}" }
                                        div { class: "cell-sub", "{or_na(&enquiry.institute)}" }
                                    }
                                    td {
                                        div { class: "cell-main", "{or_na(&enquiry.contact)}" }
                                        div { class: "cell-sub", "{or_na(&enquiry.email)}" }
                                    }
                                    td { "{or_na(&enquiry.product)}" }
                                    td { "{or_na(&enquiry.plan)}" }
                                    td { class: "cell-message", "{or_na(&enquiry.message)}" }
                                    td { "{format_date(&enquiry.date)}" }
                                    td {
                                        span { class: status_badge(enquiry.status), "{enquiry.status.label()}" }
                                    }
                                    td { class: "center actions",
                                        button {
                                            class: "icon-btn",
                                            title: "Edit",
                                            onclick: {
                                                let enquiry = enquiry.clone();
                                                move |_| dialog.set(Some((FormMode::Edit, Some(enquiry.clone()))))
                                            },
                                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-btn",
                                            title: "Convert to Client",
                                            onclick: move |_| converting.set(Some(enquiry.id)),
                                            Icon { icon: FaUserPlus, width: 14, height: 14 }
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

        if let Some((mode, enquiry)) = dialog() {
            EnquiryDialog {
                mode,
                enquiry,
                on_close: move |_| dialog.set(None),
                on_saved: move |_| {
                    dialog.set(None);
                    loader.restart();
                },
            }
        }

        if let Some(id) = converting() {
            ConvertDialog {
                enquiry_id: id,
                on_close: move |_| converting.set(None),
                on_converted: move |id: i64| {
                    enquiries.write().retain(|e| e.id != id);
                    converting.set(None);
                },
            }
        }
    }
}

#[component]
fn EnquiryDialog(
    mode: FormMode,
    enquiry: Option<Enquiry>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_api();
    let reporter = use_error_reporter();
    let toast = use_toast();

    let initial = enquiry.as_ref().map(EnquiryForm::for_edit).unwrap_or_default();
    let mut form = use_signal(move || initial);
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let mut products = use_signal(Vec::<ProductOption>::new);
    let mut packages = use_signal(Vec::<Package>::new);
    let mut packages_loading = use_signal(|| false);
    let enquiry_id = enquiry.as_ref().map(|e| e.id).unwrap_or_default();

    let products_api = api.clone();
    let _products = use_resource(move || {
        let api = products_api.clone();
        async move {
            match api.fetch_product_options().await {
                Ok(list) => products.set(list),
                Err(e) => reporter.report(&e, "Failed to load products"),
            }
        }
    });

    // Product → package cascade; re-runs when the chosen product changes
    let chosen_product = use_memo(move || form.read().product.clone());
    let packages_api = api.clone();
    let _packages = use_resource(move || {
        let api = packages_api.clone();
        let product = chosen_product();
        async move {
            let Ok(product_id) = product.parse::<i64>() else {
                packages.set(Vec::new());
                return;
            };
            packages_loading.set(true);
            match api.fetch_packages(Some(product_id)).await {
                Ok(list) => {
                    let keep = list.iter().any(|p| p.id.to_string() == form.peek().plan);
                    if !keep {
                        form.write().plan.clear();
                    }
                    packages.set(list);
                }
                Err(e) => {
                    packages.set(Vec::new());
                    form.write().plan.clear();
                    reporter.report(&e, "Failed to load packages");
                }
            }
            packages_loading.set(false);
        }
    });

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
            let result = match mode {
                FormMode::Add => api.add_enquiry(&current.to_new()).await,
                FormMode::Edit => api.update_enquiry(&current.to_update(enquiry_id)).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    toast.success(match mode {
                        FormMode::Add => "Enquiry added successfully",
                        FormMode::Edit => "Enquiry updated successfully",
                    });
                    on_saved.call(());
                }
                Err(e) => reporter.report(&e, "Failed to save enquiry"),
            }
        });
    };

    let err = move |field: &str| errors().get(field).map(str::to_string);
    let product_options: Vec<(String, String)> =
        products().iter().map(|p| (p.id.to_string(), p.name.clone())).collect();
    let package_options: Vec<(String, String)> =
        packages().iter().map(|p| (p.id.to_string(), p.name.clone())).collect();
    let status_options: Vec<(String, String)> = EnquiryStatus::CHOICES
        .iter()
        .map(|s| (s.label().to_string(), s.label().to_string()))
        .collect();
    let title = match mode {
        FormMode::Add => "Add New Enquiry",
        FormMode::Edit => "Update Enquiry",
    };
    let package_placeholder = if packages_loading() {
        "Loading packages..."
    } else if packages().is_empty() {
        "No packages available"
    } else {
        "Select a package"
    };

    rsx! {
        ModalOverlay { on_close: move |_| on_close.call(()), title: "{title}",
            div { class: "modal-body",
                if mode == FormMode::Add {
                    FormField { label: "Name", html_for: "enquiry-name", error: err("name"),
                        Input {
                            id: "enquiry-name",
                            placeholder: "Enter name",
                            value: form().name,
                            oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                    }
                    FormField { label: "Institute Name", html_for: "enquiry-institute", error: err("institute"),
                        Input {
                            id: "enquiry-institute",
                            placeholder: "Enter institute name",
                            value: form().institute,
                            oninput: move |evt: FormEvent| form.write().institute = evt.value(),
                        }
                    }
                    FormField { label: "Contact", html_for: "enquiry-contact", error: err("contact"),
                        Input {
                            id: "enquiry-contact",
                            placeholder: "Enter contact number",
                            value: form().contact,
                            oninput: move |evt: FormEvent| form.write().contact = evt.value(),
                        }
                    }
                    FormField { label: "Email", html_for: "enquiry-email", error: err("email"),
                        Input {
                            id: "enquiry-email",
                            r#type: "email",
                            placeholder: "Enter email",
                            value: form().email,
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }
                }
                FormField { label: "Product", html_for: "enquiry-product", error: err("product"),
                    if mode == FormMode::Edit {
                        Input {
                            id: "enquiry-product",
                            value: form().product_name,
                            readonly: true,
                        }
                    } else {
                        Select {
                            id: "enquiry-product",
                            value: form().product,
                            options: product_options.clone(),
                            placeholder: "Select a product",
                            onchange: move |evt: FormEvent| {
                                let id = evt.value();
                                let name = products
                                    .read()
                                    .iter()
                                    .find(|p| p.id.to_string() == id)
                                    .map(|p| p.name.clone())
                                    .unwrap_or_default();
                                form.write().select_product(id, name);
                            },
                        }
                    }
                }
                FormField { label: "Package", html_for: "enquiry-package", error: err("plan"),
                    Select {
                        id: "enquiry-package",
                        value: form().plan,
                        options: package_options,
                        placeholder: "{package_placeholder}",
                        disabled: packages_loading() || packages().is_empty(),
                        onchange: move |evt: FormEvent| form.write().plan = evt.value(),
                    }
                }
                if mode == FormMode::Add {
                    FormField { label: "Message", html_for: "enquiry-message", error: err("message"),
                        TextArea {
                            id: "enquiry-message",
                            placeholder: "Enter message",
                            value: form().message,
                            oninput: move |evt: FormEvent| form.write().message = evt.value(),
                        }
                    }
                }
                FormField { label: "Status", html_for: "enquiry-status", error: err("status"),
                    Select {
                        id: "enquiry-status",
                        value: form().status,
                        options: status_options,
                        onchange: move |evt: FormEvent| form.write().status = evt.value(),
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

#[component]
fn ConvertDialog(enquiry_id: i64, on_close: EventHandler<()>, on_converted: EventHandler<i64>) -> Element {
    let api = use_api();
    let reporter = use_error_reporter();
    let toast = use_toast();
    let mut start_date = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let handle_convert = move |_| {
        let date = start_date();
        if let Some(message) = validate_start_date(&date).get("start_date") {
            toast.error(message);
            return;
        }
        busy.set(true);
        let api = api.clone();
        spawn(async move {
            match api.convert_to_client(enquiry_id, &date).await {
                Ok(()) => {
                    toast.success("Enquiry converted to client successfully");
                    on_converted.call(enquiry_id);
                }
                Err(e) => reporter.report(&e, "Failed to convert enquiry to client"),
            }
            busy.set(false);
        });
    };

    rsx! {
        ModalOverlay { on_close: move |_| on_close.call(()), title: "Convert to Client",
            div { class: "modal-body",
                FormField { label: "Start Date", html_for: "convert-start", error: None,
                    Input {
                        id: "convert-start",
                        r#type: "date",
                        value: start_date(),
                        oninput: move |evt: FormEvent| start_date.set(evt.value()),
                    }
                }
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        disabled: busy(),
                        onclick: handle_convert,
                        "Convert to Client"
                    }
                }
            }
        }
    }
}
