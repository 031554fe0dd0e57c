//! Order form state machine, free of any reactive or browser types.
//!
//! Every mutation recomputes `can_submit` before returning, so the view only
//! has to read it.

use contracts::domain::a001_pizza_order::aggregate::{
    topping_position, OrderField, OrderFormErrors, OrderFormValues, OrderRequest,
};
use contracts::domain::a001_pizza_order::schema::{self, ValidationError};
use contracts::domain::a001_pizza_order::submission::SubmissionOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderFormState {
    pub values: OrderFormValues,
    pub errors: OrderFormErrors,
    pub outcome: SubmissionOutcome,
    /// Submissions sent and not yet resolved.
    pub pending: u32,
    can_submit: bool,
}

impl OrderFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_submit(&self) -> bool {
        self.can_submit
    }

    pub fn is_submitting(&self) -> bool {
        self.pending > 0
    }

    pub fn set_full_name(&mut self, value: String) {
        self.set_field(OrderField::FullName, value);
    }

    pub fn set_size(&mut self, value: String) {
        self.set_field(OrderField::Size, value);
    }

    fn set_field(&mut self, field: OrderField, value: String) {
        let message = schema::field_message(field, &value);
        match field {
            OrderField::FullName => self.values.full_name = value,
            OrderField::Size => self.values.size = value,
        }
        self.errors.set(field, message);
        self.recompute();
    }

    /// Check or uncheck a topping. Field errors are left alone.
    pub fn toggle_topping(&mut self, id: &str, checked: bool) -> Result<(), ValidationError> {
        let position =
            topping_position(id).ok_or_else(|| ValidationError::UnknownTopping(id.to_string()))?;

        let toppings = &mut self.values.toppings;
        if checked {
            if !toppings.iter().any(|t| t == id) {
                let at = toppings
                    .iter()
                    .position(|t| topping_position(t).map_or(true, |p| p > position))
                    .unwrap_or(toppings.len());
                toppings.insert(at, id.to_string());
            }
        } else {
            toppings.retain(|t| t != id);
        }

        self.recompute();
        Ok(())
    }

    /// Build the request for the current values and mark a submission as in flight.
    pub fn begin_submit(&mut self) -> Result<OrderRequest, Vec<ValidationError>> {
        let request = schema::validate(&self.values)?;
        self.pending += 1;
        Ok(request)
    }

    /// Apply the resolution of a submission started with `begin_submit`.
    pub fn finish_submit(&mut self, outcome: SubmissionOutcome) {
        self.pending = self.pending.saturating_sub(1);
        if outcome.is_success() {
            self.values = OrderFormValues::default();
            self.errors = OrderFormErrors::default();
        }
        self.outcome = outcome;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.can_submit = schema::is_form_valid(&self.values);
    }
}
