use leptos::prelude::*;

/// Text input with label and inline field error
#[component]
pub fn Input(
    /// Label text
    label: &'static str,
    /// Used for both `id` and `name`
    name: &'static str,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Field error; nothing is rendered while empty
    #[prop(into)]
    error: Signal<String>,
    /// Placeholder text
    #[prop(optional)]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <div>
                <label class="form__label" for=name>
                    {label}
                </label>
                <br />
                <input
                    id=name
                    name=name
                    class="form__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
            {move || {
                let message = error.get();
                (!message.is_empty()).then(|| view! { <div class="error">{message}</div> })
            }}
        </div>
    }
}
