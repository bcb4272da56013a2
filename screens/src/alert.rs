//! Modal alerts: the only way controllers report errors and confirmations.

use async_trait::async_trait;
use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// A fetch failed.
    LoadFailed,
    /// A create, update, or delete failed.
    ActionFailed,
    /// Local validation rejected a submission.
    Notice,
    /// A write went through.
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: String,
}

impl Alert {
    pub fn load_failed(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::LoadFailed,
            title: "Error",
            message: message.into(),
        }
    }

    pub fn action_failed(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::ActionFailed,
            title: "Failed",
            message: message.into(),
        }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Notice,
            title: "Notice",
            message: message.into(),
        }
    }

    pub fn done(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Done,
            title: "Done",
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait Alerts: Send + Sync {
    /// Presents the alert and returns immediately.
    fn show(&self, alert: Alert);

    /// Presents the alert and resolves once the user dismisses it.
    async fn acknowledge(&self, alert: Alert);
}

/// Records every alert and acknowledges immediately. Used by headless hosts
/// and tests.
#[derive(Debug, Default)]
pub struct HeadlessAlerts {
    shown: Mutex<Vec<Alert>>,
}

impl HeadlessAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<Alert> {
        self.shown.lock().clone()
    }

    pub fn last(&self) -> Option<Alert> {
        self.shown.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.shown.lock().clear();
    }
}

#[async_trait]
impl Alerts for HeadlessAlerts {
    fn show(&self, alert: Alert) {
        tracing::debug!(title = alert.title, message = %alert.message, "alert");
        self.shown.lock().push(alert);
    }

    async fn acknowledge(&self, alert: Alert) {
        self.show(alert);
    }
}
