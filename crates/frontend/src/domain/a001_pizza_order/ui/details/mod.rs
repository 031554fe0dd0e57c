//! Pizza Order Form UI Module
//!
//! MVVM:
//! - model.rs: submission API call
//! - form_state.rs: pure form state machine
//! - view_model.rs: signals and commands
//! - view.rs: Leptos component (pure UI)

mod form_state;
mod model;
mod view;
mod view_model;

pub use form_state::OrderFormState;
pub use view::OrderForm;
pub use view_model::OrderFormViewModel;
