//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the flows to external systems:
//! - `collection` - Collection endpoint (HTTP, mock)
//! - `auth` - Identity provider and credential exchange
//! - `screen` - Navigation and notification boundary

pub mod auth;
pub mod collection;
pub mod screen;
