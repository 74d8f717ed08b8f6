//! intake-controller
//!
//! Client-side form engine: holds the live state of one form instance,
//! exposes the row-group CRUD operations, and drives the submit lifecycle
//! (`Idle → Submitting → Success | Error`) against a submission endpoint.

pub mod controller;
pub mod endpoint;
pub mod error;
pub mod state;

pub use controller::{FormController, SUCCESS_RESET_DELAY};
pub use endpoint::{HttpEndpoint, SubmissionEndpoint};
pub use state::{FormState, FormStatus};
