//! Mutation flows: validate locally, issue exactly one write, report.
//!
//! Each flow runs its local validation before any network I/O; a failed
//! check never reaches the wire. While a flow is outstanding the caller is
//! expected to disable the triggering control.

mod auth;
mod join;
mod profile;
mod proof;

pub use auth::{login, register};
pub use join::join_tournament;
pub use profile::{ProfileEdit, save_profile};
pub use proof::upload_proof;

use std::fmt;

use crate::api::ApiError;
use crate::validate::FieldError;

/// Why a flow did not complete.
#[derive(Debug, Clone)]
pub enum FlowError {
    /// Local field validation failed; no request was issued.
    Invalid(FieldError),
    /// A local pre-check rejected the operation; no request was issued.
    Blocked(String),
    /// The request was issued and failed.
    Api(ApiError),
}

impl FlowError {
    /// Message to surface to the user.
    pub fn user_message(&self) -> String {
        match self {
            FlowError::Invalid(err) => err.message.clone(),
            FlowError::Blocked(message) => message.clone(),
            FlowError::Api(err) => err.message.clone(),
        }
    }
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for FlowError {}

impl From<FieldError> for FlowError {
    fn from(err: FieldError) -> Self {
        FlowError::Invalid(err)
    }
}

impl From<ApiError> for FlowError {
    fn from(err: ApiError) -> Self {
        FlowError::Api(err)
    }
}
