use api::date::format_date;
use api::lenient::or_na;
use api::{Client, ClientStatus, PlanOption, ProductOption, Timeline};
use dioxus::prelude::*;

use crate::auth::{use_api, use_config, use_error_reporter};
use crate::components::{Button, ButtonVariant, ConfirmDialog, FormField, Input, Select};
use crate::forms::{ClientForm, FieldErrors, FormMode};
use crate::icons::{FaPenToSquare, FaTrash};
use crate::pagination::{Pagination, Paginator};
use crate::toast::use_toast;
use crate::views::ModalOverlay;
use crate::Icon;

/// Status filter values of the client list.
pub const STATUS_FILTERS: [(&str, &str); 3] = [("All", "All Clients"), ("Active", "Active"), ("Deactive", "Deactive")];

pub fn filter_by_status(clients: &[Client], filter: &str) -> Vec<Client> {
    let wanted = match filter {
        "Active" => Some(ClientStatus::Active),
        "Deactive" => Some(ClientStatus::Deactive),
        _ => None,
    };
    clients
        .iter()
        .filter(|c| wanted.map_or(true, |s| c.status == s))
        .cloned()
        .collect()
}

#[component]
pub fn ClientsView() -> Element {
    let api = use_api();
    let config = use_config();
    let reporter = use_error_reporter();
    let toast = use_toast();

    let mut clients = use_signal(Vec::<Client>::new);
    let mut loading = use_signal(|| true);
    let mut filter = use_signal(|| "All".to_string());
    let mut pager = use_signal(|| Paginator::new(0, config.ui.page_size));
    let mut dialog = use_signal(|| Option::<(FormMode, Option<Client>)>::None);
    let mut deleting = use_signal(|| Option::<Client>::None);
    let mut delete_busy = use_signal(|| false);

    let fetch_api = api.clone();
    let mut loader = use_resource(move || {
        let api = fetch_api.clone();
        async move {
            match api.fetch_clients().await {
                Ok(list) => clients.set(list),
                Err(e) => reporter.report(&e, "Failed to load clients"),
            }
            loading.set(false);
        }
    });

    let filtered = use_memo(move || filter_by_status(&clients(), &filter()));
    use_effect(move || {
        let total = filtered().len();
        pager.write().set_total(total);
    });

    let handle_delete = move |_| {
        let Some(client) = deleting() else { return };
        let api = api.clone();
        delete_busy.set(true);
        spawn(async move {
            match api.delete_client(client.id).await {
                Ok(()) => {
                    clients.write().retain(|c| c.id != client.id);
                    toast.success("Client deleted successfully");
                }
                Err(e) => reporter.report(&e, "Failed to delete client"),
            }
            delete_busy.set(false);
            deleting.set(None);
        });
    };

    let rows = pager().slice(&filtered()).to_vec();

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Client List" }
                div { class: "page-actions",
                    select {
                        class: "form-input filter",
                        value: filter(),
                        onchange: move |evt| {
                            filter.set(evt.value());
                            pager.write().reset();
                        },
                        for (value, label) in STATUS_FILTERS {
                            option { key: "{value}", value: "{value}", "{label}" }
                        }
                    }
                    Button {
                        onclick: move |_| dialog.set(Some((FormMode::Add, None))),
                        "+ Add Client"
                    }
                }
            }

            div { class: "table-card",
                if loading() {
                    p { class: "page-status", "Loading clients..." }
                } else if filtered().is_empty() {
                    p { class: "page-status", "No clients found" }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Client Name / Institute" }
                                th { "Contact / Email" }
                                th { "Product" }
                                th { "Package Name" }
                                th { "Status" }
                                th { "Start Date" }
                                th { "End Date" }
                                th { "Timeline" }
                                th { class: "center", "Actions" }
                            }
                        }
                        tbody {
                            for client in rows {
                                tr { key: "{client.id}",
                                    td {
                                        div { class: "cell-main", "{or_na(&client.name)}" }
                                        div { class: "cell-sub", "{or_na(&client.institute)}" }
                                    }
                                    td {
                                        div { class: "cell-main", "{or_na(&client.contact)}" }
                                        div { class: "cell-sub", "{or_na(&client.email)}" }
                                    }
                                    td { "{or_na(&client.product_name)}" }
                                    td { "{or_na(&client.package_name)}" }
                                    td {
                                        span {
                                            class: if client.status == ClientStatus::Active { "badge badge-green" } else { "badge badge-red" },
                                            "{client.status.label()}"
                                        }
                                    }
                                    td { "{format_date(&client.start_date)}" }
                                    td { "{format_date(&client.expiry_date)}" }
                                    td { "{client.timeline.label()}" }
                                    td { class: "center actions",
                                        button {
                                            class: "icon-btn",
                                            title: "Edit",
                                            onclick: {
                                                let client = client.clone();
                                                move |_| dialog.set(Some((FormMode::Edit, Some(client.clone()))))
                                            },
                                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-btn danger",
                                            title: "Delete",
                                            onclick: {
                                                let client = client.clone();
                                                move |_| deleting.set(Some(client.clone()))
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

        if let Some((mode, client)) = dialog() {
            ClientDialog {
                mode,
                client,
                on_close: move |_| dialog.set(None),
                on_saved: move |_| {
                    dialog.set(None);
                    loader.restart();
                },
            }
        }

        if deleting().is_some() {
            ConfirmDialog {
                title: "Delete Client",
                message: "Are you sure you want to delete this client?",
                busy: delete_busy(),
                on_confirm: handle_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
fn ClientDialog(
    mode: FormMode,
    client: Option<Client>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_api();
    let reporter = use_error_reporter();
    let toast = use_toast();

    let mut form = use_signal(ClientForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut products = use_signal(Vec::<ProductOption>::new);
    let mut plans = use_signal(Vec::<PlanOption>::new);
    let mut options_loading = use_signal(|| true);
    let mut saving = use_signal(|| false);

    let options_api = api.clone();
    let editing = client.clone();
    let _options = use_resource(move || {
        let api = options_api.clone();
        let editing = editing.clone();
        async move {
            match api.fetch_product_options().await {
                Ok(list) => products.set(list),
                Err(e) => reporter.report(&e, "Failed to load products"),
            }
            match api.fetch_plan_options().await {
                Ok(list) => plans.set(list),
                Err(e) => reporter.report(&e, "Failed to load packages"),
            }
            if let Some(client) = editing {
                form.set(ClientForm::for_edit(&client, &products.peek(), &plans.peek()));
            }
            options_loading.set(false);
        }
    });

    let client_id = client.as_ref().map(|c| c.id).unwrap_or_default();
    let handle_submit = move |_| {
        let current = form();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        saving.set(true);
        let api = api.clone();
        spawn(async move {
            let result = match mode {
                FormMode::Add => api.create_client(&current.to_create()).await,
                FormMode::Edit => api.update_client(&current.to_update(client_id)).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    toast.success(match mode {
                        FormMode::Add => "Client added successfully",
                        FormMode::Edit => "Client updated successfully",
                    });
                    on_saved.call(());
                }
                Err(e) => reporter.report(&e, "Failed to save client"),
            }
        });
    };

    let err = move |field: &str| errors().get(field).map(str::to_string);
    let product_options: Vec<(String, String)> =
        products().iter().map(|p| (p.id.to_string(), p.name.clone())).collect();
    let plan_options: Vec<(String, String)> =
        plans().iter().map(|p| (p.id.to_string(), p.name.clone())).collect();
    let timeline_options: Vec<(String, String)> = Timeline::ALL
        .iter()
        .map(|t| (t.id().to_string(), t.label().to_string()))
        .collect();
    let title = match mode {
        FormMode::Add => "Add New Client",
        FormMode::Edit => "Edit Client",
    };

    rsx! {
        ModalOverlay { on_close: move |_| on_close.call(()), title: "{title}",
            div { class: "modal-body",
                if options_loading() {
                    p { class: "page-status", "Loading dropdown data..." }
                }
                FormField { label: "Client Name", html_for: "client-name", error: err("name"),
                    Input {
                        id: "client-name",
                        placeholder: "Enter client name",
                        value: form().name,
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                }
                FormField { label: "Institute Name", html_for: "client-institute", error: err("institute"),
                    Input {
                        id: "client-institute",
                        placeholder: "Enter institute name",
                        value: form().institute,
                        oninput: move |evt: FormEvent| form.write().institute = evt.value(),
                    }
                }
                FormField { label: "Contact", html_for: "client-contact", error: err("contact"),
                    Input {
                        id: "client-contact",
                        placeholder: "Enter contact number",
                        value: form().contact,
                        oninput: move |evt: FormEvent| form.write().contact = evt.value(),
                    }
                }
                FormField { label: "Email", html_for: "client-email", error: err("email"),
                    Input {
                        id: "client-email",
                        r#type: "email",
                        placeholder: "Enter email",
                        value: form().email,
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                }
                FormField { label: "Product", html_for: "client-product", error: err("product"),
                    Select {
                        id: "client-product",
                        value: form().product,
                        options: product_options,
                        placeholder: "Select a product",
                        onchange: move |evt: FormEvent| form.write().product = evt.value(),
                    }
                }
                FormField { label: "Plan", html_for: "client-plan", error: err("plan"),
                    Select {
                        id: "client-plan",
                        value: form().plan,
                        options: plan_options,
                        placeholder: "Select a plan",
                        onchange: move |evt: FormEvent| form.write().plan = evt.value(),
                    }
                }
                FormField { label: "Timeline", html_for: "client-timeline", error: err("timeline"),
                    Select {
                        id: "client-timeline",
                        value: form().timeline,
                        options: timeline_options,
                        placeholder: "Select a timeline",
                        onchange: move |evt: FormEvent| form.write().timeline = evt.value(),
                    }
                }
                FormField { label: "Start Date", html_for: "client-start", error: err("start_date"),
                    Input {
                        id: "client-start",
                        r#type: "date",
                        value: form().start_date,
                        oninput: move |evt: FormEvent| form.write().start_date = evt.value(),
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
