//! User notification port.

use crate::domain::foundation::Notice;

/// Shows a notice to the user (an alert on the current screen).
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}
