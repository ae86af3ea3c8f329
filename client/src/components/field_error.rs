//! Inline per-field validation message.

use leptos::prelude::*;

use crate::state::forms::FormErrors;

/// Message for `field` from a form's error set, hidden when absent.
#[component]
pub fn FieldError(#[prop(into)] errors: Signal<FormErrors>, field: &'static str) -> impl IntoView {
    let message = move || errors.get().field(field).map(str::to_owned);
    view! {
        <Show when=move || message().is_some()>
            <p class="field-error">{move || message().unwrap_or_default()}</p>
        </Show>
    }
}

/// General (non-field) message from a form's error set.
#[component]
pub fn FormError(#[prop(into)] errors: Signal<FormErrors>) -> impl IntoView {
    let message = move || errors.get().general;
    view! {
        <Show when=move || message().is_some()>
            <p class="form-error">{move || message().unwrap_or_default()}</p>
        </Show>
    }
}
