use leptos::prelude::*;

/// Page-level message shown above a form
#[component]
pub fn Banner(
    /// Banner variant: "success" or "failure"
    variant: &'static str,
    /// Message text; nothing is rendered while `None`
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    move || message.get().map(|m| view! { <div class=variant>{m}</div> })
}
