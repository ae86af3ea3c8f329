//! Labelled form input bound to a field of a page state model.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::field_error::FieldError;
use crate::state::forms::FormErrors;

/// Two-way binding between an input and one string field of `S`.
#[derive(Clone, Copy)]
pub struct Binding {
    pub value: Signal<String>,
    pub set: Callback<String>,
}

impl Binding {
    pub fn lens<S>(state: RwSignal<S>, get: fn(&S) -> String, set: fn(&mut S, String)) -> Self
    where
        S: Send + Sync + 'static,
    {
        Self {
            value: Signal::derive(move || state.with(get)),
            set: Callback::new(move |v: String| state.update(|s| set(s, v))),
        }
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    binding: Binding,
    #[prop(into)] errors: Signal<FormErrors>,
    field: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
    #[prop(optional, into)] readonly: MaybeProp<bool>,
) -> impl IntoView {
    let is_readonly = move || readonly.get().unwrap_or(false);
    let input = if multiline {
        view! {
            <textarea
                class="form-field__input"
                prop:value=move || binding.value.get()
                prop:readOnly=is_readonly
                on:input=move |ev| binding.set.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="form-field__input"
                type=input_type
                prop:value=move || binding.value.get()
                prop:readOnly=is_readonly
                on:input=move |ev| binding.set.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            {input}
            <FieldError errors=errors field=field/>
        </label>
    }
}
