//! Notifier port.

use crate::assignment::domain::Notice;

/// Surfaces workflow notices to the operator.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Shows a notice.
    fn notify(&self, notice: &Notice);
}
