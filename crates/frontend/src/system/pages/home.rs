use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Landing page. Clicking the pizza opens the order form.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    let on_image_click = move |_| {
        navigate("/order", Default::default());
    };

    view! {
        <div class="home">
            <h2>"Welcome to Bloom Pizza!"</h2>
            <img
                src="/images/pizza.jpg"
                alt="order-pizza"
                style="cursor: pointer"
                on:click=on_image_click
            />
        </div>
    }
}
