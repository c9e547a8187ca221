//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the flows and the outside world. Adapters implement these ports.
//!
//! ## Remote Ports
//!
//! - `MemberCollection` - Collection endpoint (account creation, directory)
//! - `IdentityProvider` - Interactive identity token issuance
//! - `SessionExchange` - Credential exchange with the identity backend
//!
//! ## Screen Boundary Ports
//!
//! - `Navigator` - Hands transitions to the external router
//! - `Notifier` - Surfaces a notice to the user

mod identity_provider;
mod member_collection;
mod navigator;
mod notifier;

pub use identity_provider::{IdentityProvider, ProviderFailure, SessionExchange};
pub use member_collection::{CollectionError, MemberCollection};
pub use navigator::Navigator;
pub use notifier::Notifier;
