//! Collection endpoint adapters.
//!
//! Implementations of the `MemberCollection` port:
//!
//! - `http` - reqwest client against the real endpoint
//! - `mock` - scripted in-memory endpoint for tests

mod http;
mod mock;

pub use http::{HttpCollectionConfig, HttpMemberCollection};
pub use mock::MockMemberCollection;
