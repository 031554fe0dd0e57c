use super::form_state::OrderFormState;
use super::model;
use contracts::domain::a001_pizza_order::submission::SubmissionOutcome;
use leptos::prelude::*;

/// ViewModel for the pizza order form
#[derive(Clone, Copy)]
pub struct OrderFormViewModel {
    pub state: RwSignal<OrderFormState>,
}

impl OrderFormViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(OrderFormState::new()),
        }
    }

    pub fn can_submit(&self) -> impl Fn() -> bool + '_ {
        move || self.state.with(|s| s.can_submit())
    }

    pub fn on_full_name(&self, value: String) {
        self.state.update(|s| s.set_full_name(value));
    }

    pub fn on_size(&self, value: String) {
        self.state.update(|s| s.set_size(value));
    }

    pub fn on_topping(&self, id: &str, checked: bool) {
        let mut rejected = None;
        self.state.update(|s| {
            if let Err(e) = s.toggle_topping(id, checked) {
                rejected = Some(e);
            }
        });
        if let Some(e) = rejected {
            log::warn!("Ignored topping toggle: {}", e);
        }
    }

    /// Send the current values; the outcome lands in `state` when the call settles.
    pub fn submit_command(&self) {
        let request = match self.state.try_update(|s| s.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(errors)) => {
                log::warn!("Submit refused, form is invalid: {:?}", errors);
                return;
            }
            None => return,
        };

        log::info!(
            "Submitting order: size={}, toppings={}",
            request.size.code(),
            request.toppings.len()
        );

        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::submit_order(&request).await;
            if let Err(e) = &result {
                log::error!("Order submission failed: {}", e);
            }
            let outcome = SubmissionOutcome::from_result(result);
            if outcome.is_success() {
                log::info!("Order accepted");
            }
            if state.try_update(|s| s.finish_submit(outcome)).is_none() {
                log::debug!("Order form unmounted before the submission settled");
            }
        });
    }
}

impl Default for OrderFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
