//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, field rules, notices and error types that form
//! the vocabulary of the portal.

mod errors;
mod ids;
mod notice;
pub mod rules;
mod state_machine;

pub use errors::ValidationError;
pub use ids::RequestId;
pub use notice::{Notice, NoticeKind};
pub use state_machine::StateMachine;
