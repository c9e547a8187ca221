//! PasswordLogin - Command handler for the phone/password sign-in path.
//!
//! No backend verification exists for this path. After a fixed delay the
//! handler reports success; the returned outcome makes that explicit so
//! callers cannot mistake it for an authenticated session.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::auth::CredentialForm;
use crate::domain::foundation::{Notice, ValidationError};
use crate::ports::Notifier;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";

/// Result of a local sign-in that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalLoginOutcome {
    /// Success was reported but no credential was checked.
    Unverified,
}

/// Handler for the phone/password path.
pub struct PasswordLoginHandler {
    notifier: Arc<dyn Notifier>,
    delay: Duration,
}

impl PasswordLoginHandler {
    pub fn new(notifier: Arc<dyn Notifier>, delay: Duration) -> Self {
        Self { notifier, delay }
    }

    /// Validates the form, waits out the delay, then reports success.
    ///
    /// No navigation happens on this path.
    pub async fn submit(
        &self,
        form: &mut CredentialForm,
    ) -> Result<LocalLoginOutcome, ValidationError> {
        if let Err(e) = form.validate() {
            tracing::debug!(field = ?e.field(), "Sign-in form rejected: {}", e);
            self.notifier.notify(Notice::error(e.to_string()));
            return Err(e);
        }

        form.begin_submit();
        tokio::time::sleep(self.delay).await;
        form.finish_submit();

        tracing::info!("Local sign-in reported without verification");
        self.notifier.notify(Notice::success(LOGIN_SUCCESS_MESSAGE));
        Ok(LocalLoginOutcome::Unverified)
    }
}
