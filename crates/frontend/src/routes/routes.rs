use crate::domain::a001_pizza_order::ui::details::OrderForm;
use crate::system::pages::home::HomePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav>
            <A href="/">"Home"</A>
            <A href="/order">"Order"</A>
        </nav>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NavBar />
            <Routes fallback=|| view! { <p>"Page not found"</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/order") view=OrderForm />
            </Routes>
        </Router>
    }
}
