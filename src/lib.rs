//! Member Portal - Headless client core for a small member directory
//!
//! This crate implements the three client flows of the portal: account
//! sign-up, sign-in (local phone/password and federated identity), and
//! the member directory with pull-to-refresh.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
