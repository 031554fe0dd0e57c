use leptos::prelude::*;

/// Checkbox with its label wrapped around it
#[component]
pub fn Checkbox(
    /// Label text
    label: &'static str,
    /// Group name shared by related checkboxes
    name: &'static str,
    /// Value submitted for this box
    value: &'static str,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="form__checkbox-label">
            <input
                type="checkbox"
                class="form__checkbox"
                name=name
                value=value
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}
