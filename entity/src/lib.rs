//! Employee records and the checks they must pass before a store accepts them.

pub mod employees;
pub mod error;

pub use employees::EmployeeDraft;
pub use error::{Field, ValidationError};
