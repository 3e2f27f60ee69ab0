use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "form-label", r#for: "{html_for}", {children} }
    }
}

#[component]
pub fn Input(
    id: String,
    value: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
    #[props(default)] readonly: bool,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "form-input {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            readonly,
            disabled,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn TextArea(
    id: String,
    value: String,
    #[props(default)] placeholder: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "form-input",
            rows: "3",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// `<select>` with a leading empty option. `options` are `(value, label)`.
#[component]
pub fn Select(
    id: String,
    value: String,
    options: Vec<(String, String)>,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "form-input",
            disabled,
            value: "{value}",
            onchange: move |evt| onchange.call(evt),
            if !placeholder.is_empty() {
                option { value: "", "{placeholder}" }
            }
            for (val, label) in options {
                option {
                    key: "{val}",
                    value: "{val}",
                    selected: val == value,
                    "{label}"
                }
            }
        }
    }
}

#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p { class: "form-error", "{message}" }
        },
        None => rsx! {},
    }
}

/// Label, control and error message stacked.
#[component]
pub fn FormField(label: String, html_for: String, error: Option<String>, children: Element) -> Element {
    rsx! {
        div { class: "form-field",
            Label { html_for: "{html_for}", "{label}" }
            {children}
            FieldError { message: error }
        }
    }
}
