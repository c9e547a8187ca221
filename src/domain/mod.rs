//! Domain layer containing form rules, directory state and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (field rules, notices, ids, errors)
//! - `registration` - Sign-up form and submission body
//! - `auth` - Sign-in form and federated identity types
//! - `directory` - Member records, list identity, screen state
//! - `navigation` - Screen graph and navigation events

pub mod auth;
pub mod directory;
pub mod foundation;
pub mod navigation;
pub mod registration;
