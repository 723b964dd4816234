use leptos::prelude::*;

use crate::core::ContactField;

const INPUT_CLASS: &str = "w-full px-0 py-4 text-lg bg-transparent border-0 border-b-2 border-border \
     focus:border-primary outline-none transition-smooth placeholder-muted";

/// Labelled, required input for one contact form field
#[component]
pub fn FormField(
    /// Which field this control edits
    field: ContactField,
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<(ContactField, String)>,
) -> impl IntoView {
    view! {
        <label for=field.name() class="block text-sm font-medium text-primary mb-3">
            {field.label()}
        </label>
        <input
            type=input_type
            id=field.name()
            name=field.name()
            required=true
            class=INPUT_CLASS
            placeholder=field.placeholder()
            prop:value=move || value.get()
            on:input=move |ev| on_input.run((field, event_target_value(&ev)))
        />
    }
}

/// Text area variant of [`FormField`]
#[component]
pub fn TextAreaField(
    field: ContactField,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<(ContactField, String)>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
) -> impl IntoView {
    view! {
        <label for=field.name() class="block text-sm font-medium text-primary mb-3">
            {field.label()}
        </label>
        <textarea
            id=field.name()
            name=field.name()
            required=true
            class=format!("{INPUT_CLASS} resize-none")
            placeholder=field.placeholder()
            rows=rows
            prop:value=move || value.get()
            on:input=move |ev| on_input.run((field, event_target_value(&ev)))
        />
    }
}
