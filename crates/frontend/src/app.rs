use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div id="app">
            <AppRoutes />
        </div>
    }
}
