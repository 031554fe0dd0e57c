use leptos::prelude::*;

/// Primary button component
#[component]
pub fn Button(
    /// Button type attribute, "button" by default
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class="button button--primary"
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
