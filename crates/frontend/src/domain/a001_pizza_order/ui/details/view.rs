use super::view_model::OrderFormViewModel;
use crate::shared::components::ui::{Banner, Button, Checkbox, Input, Select};
use contracts::domain::a001_pizza_order::aggregate::{PizzaSize, TOPPINGS};
use leptos::prelude::*;

fn size_options() -> Vec<(String, String)> {
    PizzaSize::ALL
        .iter()
        .map(|s| (s.code().to_string(), s.label().to_string()))
        .collect()
}

#[component]
pub fn OrderForm() -> impl IntoView {
    let vm = OrderFormViewModel::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <form class="order-form" on:submit=on_submit>
            <h2>"Order Your Pizza"</h2>

            <Banner
                variant="success"
                message=Signal::derive(move || {
                    vm.state.with(|s| s.outcome.success_message().map(str::to_string))
                })
            />
            <Banner
                variant="failure"
                message=Signal::derive(move || {
                    vm.state.with(|s| s.outcome.failure_message().map(str::to_string))
                })
            />

            <Input
                label="Full Name"
                name="fullName"
                placeholder="Type full name"
                value=Signal::derive(move || vm.state.with(|s| s.values.full_name.clone()))
                on_input=Callback::new(move |value| vm.on_full_name(value))
                error=Signal::derive(move || vm.state.with(|s| s.errors.full_name.clone()))
            />

            <Select
                label="Size"
                name="size"
                placeholder="----Choose Size----"
                options=size_options()
                value=Signal::derive(move || vm.state.with(|s| s.values.size.clone()))
                on_change=Callback::new(move |value| vm.on_size(value))
                error=Signal::derive(move || vm.state.with(|s| s.errors.size.clone()))
            />

            <div class="form__group">
                {TOPPINGS
                    .iter()
                    .map(|topping| {
                        let id = topping.id;
                        view! {
                            <Checkbox
                                label=topping.name
                                name="toppings"
                                value=id
                                checked=Signal::derive(move || {
                                    vm.state.with(|s| s.values.has_topping(id))
                                })
                                on_change=Callback::new(move |checked| vm.on_topping(id, checked))
                            />
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                vm.state
                    .with(|s| s.is_submitting())
                    .then(|| view! { <div class="pending">"Submitting…"</div> })
            }}

            <Button
                button_type="submit".to_string()
                disabled=Signal::derive(move || !vm.can_submit()())
            >
                "Submit"
            </Button>
        </form>
    }
}
