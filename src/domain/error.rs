//! Errors raised at the dispatch boundary.
//!
//! Mutations themselves never fail. These errors only cover turning an
//! externally named mutation and its untyped payload into an action.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Unknown mutation: {0}")]
    UnknownMutation(String),

    #[error("Invalid payload for {mutation}: expected {expected}")]
    InvalidPayload {
        mutation: String,
        expected: &'static str,
    },
}
