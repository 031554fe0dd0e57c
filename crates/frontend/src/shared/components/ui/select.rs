use leptos::prelude::*;

/// Select with label, placeholder option and inline field error
#[component]
pub fn Select(
    /// Label text
    label: &'static str,
    /// Used for both `id` and `name`
    name: &'static str,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Options: (value, label) pairs, rendered after the placeholder
    options: Vec<(String, String)>,
    /// Text of the empty-valued first option
    placeholder: &'static str,
    /// Field error; nothing is rendered while empty
    #[prop(into)]
    error: Signal<String>,
) -> impl IntoView {
    let option_views = std::iter::once((String::new(), placeholder.to_string()))
        .chain(options)
        .map(|(val, text)| {
            let val_for_check = val.clone();
            view! {
                <option value=val prop:selected=move || value.get() == val_for_check>
                    {text}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="form__group">
            <div>
                <label class="form__label" for=name>
                    {label}
                </label>
                <br />
                <select
                    id=name
                    name=name
                    class="form__select"
                    on:change=move |ev| on_change.run(event_target_value(&ev))
                >
                    {option_views}
                </select>
            </div>
            {move || {
                let message = error.get();
                (!message.is_empty()).then(|| view! { <div class="error">{message}</div> })
            }}
        </div>
    }
}
