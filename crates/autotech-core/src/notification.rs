//! Notification Banner
//!
//! Holds at most one transient message. Every message clears itself after a
//! fixed window unless it is replaced or dismissed first. The pending expiry
//! is a spawned Tokio task that is aborted on replacement, dismissal, or when
//! the center is dropped.
//!
//! Each message carries an id; an expiry only clears the message it was
//! scheduled for, so a late timer can never wipe a newer banner.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::maintenance::MaintenanceStatus;

/// How long a banner stays up
pub const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(5);

/// A visible banner message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Monotonic id, unique per center
    pub id: u64,
    /// Banner text
    pub message: String,
}

/// Owner of the banner and its expiry timer
pub struct NotificationCenter {
    timeout: Duration,
    tx: watch::Sender<Option<Notification>>,
    next_id: u64,
    expiry: Option<JoinHandle<()>>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TIMEOUT)
    }
}

impl NotificationCenter {
    /// Create a center whose banners expire after `timeout`
    pub fn new(timeout: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            timeout,
            tx,
            next_id: 0,
            expiry: None,
        }
    }

    /// Display window
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The banner currently shown, if any
    pub fn current(&self) -> Option<Notification> {
        self.tx.borrow().clone()
    }

    /// Watch banner changes (shown, replaced, expired, dismissed)
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.tx.subscribe()
    }

    /// Show a message, replacing any current one and restarting the window
    ///
    /// Outside a Tokio runtime the message is shown but never expires on its
    /// own; it stays until replaced or dismissed.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.cancel_expiry();

        self.next_id += 1;
        let id = self.next_id;
        let message = message.into();
        tracing::info!(id, %message, "showing notification");
        self.tx.send_replace(Some(Notification { id, message }));

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let tx = self.tx.clone();
                let timeout = self.timeout;
                self.expiry = Some(handle.spawn(async move {
                    tokio::time::sleep(timeout).await;
                    let cleared = tx.send_if_modified(|current| {
                        if current.as_ref().is_some_and(|n| n.id == id) {
                            *current = None;
                            true
                        } else {
                            false
                        }
                    });
                    if cleared {
                        tracing::debug!(id, "notification expired");
                    }
                }));
            }
            Err(_) => {
                tracing::warn!(id, "no async runtime, notification will not auto-expire");
            }
        }
        id
    }

    /// Clear the banner now and cancel its expiry
    pub fn dismiss(&mut self) {
        self.cancel_expiry();
        if self.tx.send_replace(None).is_some() {
            tracing::debug!("notification dismissed");
        }
    }

    /// Show the reminder for a maintenance status, or clear the banner when
    /// nothing is due
    pub fn publish_status(&mut self, status: &MaintenanceStatus) -> Option<u64> {
        match status.message() {
            Some(message) => Some(self.show(message)),
            None => {
                self.dismiss();
                None
            }
        }
    }

    fn cancel_expiry(&mut self) {
        if let Some(handle) = self.expiry.take() {
            handle.abort();
        }
    }
}

impl Drop for NotificationCenter {
    fn drop(&mut self) {
        self.cancel_expiry();
    }
}
