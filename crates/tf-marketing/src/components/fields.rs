//! Contact form inputs bound to the submission flow
//!
//! Each input reads its value from the flow and writes edits back through
//! `set_field`, so the rendered form is always a projection of the flow.

use leptos::*;
use tf_core::{ContactSubmissionFlow, Field};

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-200 focus:border-blue-400";

fn edit(flow: RwSignal<ContactSubmissionFlow>, field: Field, value: String) {
    flow.update(|f| {
        if let Err(e) = f.set_field(field, value) {
            tracing::debug!("Ignored edit to {}: {}", field, e);
        }
    });
}

#[component]
fn FieldMessage(flow: RwSignal<ContactSubmissionFlow>, field: Field) -> impl IntoView {
    view! {
        <p class="text-sm text-red-500 mt-1">
            {move || flow.with(|f| f.error_for(field).map(str::to_string))}
        </p>
    }
}

#[component]
pub fn TextField(
    flow: RwSignal<ContactSubmissionFlow>,
    field: Field,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-blue-900 mb-2">{field.label()}</label>
            <input
                type=input_type
                name=field.wire_name()
                class=INPUT_CLASS
                placeholder=placeholder
                on:input=move |ev| edit(flow, field, event_target_value(&ev))
                prop:value=move || flow.with(|f| f.form().get(field).to_string())
            />
            <FieldMessage flow=flow field=field/>
        </div>
    }
}

#[component]
pub fn SelectField(
    flow: RwSignal<ContactSubmissionFlow>,
    field: Field,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-blue-900 mb-2">{field.label()}</label>
            <select
                name=field.wire_name()
                class=INPUT_CLASS
                on:change=move |ev| edit(flow, field, event_target_value(&ev))
                prop:value=move || flow.with(|f| f.form().get(field).to_string())
            >
                <option value="">"Select"</option>
                {options.into_iter().map(|(value, label)| view! {
                    <option value=value>{label}</option>
                }).collect::<Vec<_>>()}
            </select>
            <FieldMessage flow=flow field=field/>
        </div>
    }
}

#[component]
pub fn TextAreaField(
    flow: RwSignal<ContactSubmissionFlow>,
    field: Field,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-blue-900 mb-2">{field.label()}</label>
            <textarea
                rows="5"
                name=field.wire_name()
                class=INPUT_CLASS
                placeholder=placeholder
                on:input=move |ev| edit(flow, field, event_target_value(&ev))
                prop:value=move || flow.with(|f| f.form().get(field).to_string())
            ></textarea>
            <FieldMessage flow=flow field=field/>
        </div>
    }
}
