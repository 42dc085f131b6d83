//! Notifier that logs and keeps every notice for later display.

use crate::assignment::{
    domain::{Notice, NoticeKind},
    ports::Notifier,
};
use std::sync::{Mutex, PoisonError};
use tracing::{info, warn};

/// Collects notices in arrival order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Creates an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notice received so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns every notice received so far.
    #[must_use]
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.kind() {
            NoticeKind::Success => info!(message = notice.message(), "assignment notice"),
            NoticeKind::Validation | NoticeKind::Failure | NoticeKind::RefreshFailed => {
                warn!(kind = %notice.kind(), message = notice.message(), "assignment notice");
            }
        }
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice.clone());
    }
}
