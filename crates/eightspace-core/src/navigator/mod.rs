//! Page selection and transient UI state.

pub mod controller;
pub mod state;

pub use controller::Navigator;
pub use state::NavigatorState;
