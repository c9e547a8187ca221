//! SubmitRegistration - Command handler for the sign-up form.

use std::sync::Arc;

use thiserror::Error;
use tracing::Instrument;

use crate::domain::foundation::{Notice, RequestId, ValidationError};
use crate::domain::navigation::NavigationEvent;
use crate::domain::registration::RegistrationForm;
use crate::ports::{CollectionError, MemberCollection, Navigator, Notifier};
use crate::telemetry::flow_span;

pub const ACCOUNT_CREATED_MESSAGE: &str = "Account created!";
pub const ACCOUNT_FAILED_MESSAGE: &str = "Failed to create account";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Why a sign-up submission did not succeed.
///
/// The display text is the message shown to the user.
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request threw before a response arrived.
    #[error("Network error")]
    Network(String),

    /// A response arrived with a non-2xx status.
    #[error("Failed to create account")]
    Http { status: u16 },
}

impl RegistrationError {
    /// True if the error came from the endpoint rather than the form.
    pub fn is_remote(&self) -> bool {
        !matches!(self, RegistrationError::Validation(_))
    }
}

/// Handler for sign-up submissions.
pub struct RegistrationHandler {
    collection: Arc<dyn MemberCollection>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl RegistrationHandler {
    pub fn new(
        collection: Arc<dyn MemberCollection>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            collection,
            navigator,
            notifier,
        }
    }

    /// Validates and submits the form.
    ///
    /// On success the fields are cleared and exactly one
    /// `RegistrationSucceeded` event is emitted. On any failure the fields
    /// are left untouched. `submitting` is reset whatever the outcome.
    pub async fn submit(&self, form: &mut RegistrationForm) -> Result<(), RegistrationError> {
        // 1. Local validation, no network I/O on failure
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!(field = ?e.field(), "Sign-up form rejected: {}", e);
                self.notifier.notify(Notice::error(e.to_string()));
                return Err(e.into());
            }
        };

        // 2. Submit
        let request_id = RequestId::new();
        form.begin_submit();
        let outcome = self
            .collection
            .create_member(&payload)
            .instrument(flow_span("registration", "submit", request_id))
            .await;
        form.finish_submit();

        // 3. Report
        match outcome {
            Ok(()) => {
                tracing::info!(request.id = %request_id, "Account created");
                form.clear();
                self.notifier.notify(Notice::success(ACCOUNT_CREATED_MESSAGE));
                self.navigator.navigate(NavigationEvent::RegistrationSucceeded);
                Ok(())
            }
            Err(CollectionError::Status(status)) => {
                tracing::warn!(request.id = %request_id, "Account creation rejected with status {}", status);
                self.notifier.notify(Notice::error(ACCOUNT_FAILED_MESSAGE));
                Err(RegistrationError::Http { status })
            }
            Err(e) => {
                tracing::error!(request.id = %request_id, "Account creation failed: {}", e);
                self.notifier.notify(Notice::error(NETWORK_ERROR_MESSAGE));
                Err(RegistrationError::Network(e.to_string()))
            }
        }
    }
}
