//! # Auth Status Notifications
//!
//! The identity provider publishes every sign-in, sign-up, profile change
//! and sign-out here. Screens subscribe; the booking gate only ever gets
//! the current value.
//!
//! ```text
//! provider ──publish──► AuthStatusChannel ──► Receiver (explore screen)
//!                              │          └─► Receiver (profile screen)
//!                              ▼
//!                         current() ──► StayRequest::decide(&status)
//! ```

use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

use stayhub_core::AuthStatus;

/// Latest-value broadcast of `AuthStatus`. Clones share the channel.
#[derive(Debug, Clone)]
pub struct AuthStatusChannel {
    sender: Arc<watch::Sender<AuthStatus>>,
}

impl AuthStatusChannel {
    /// Starts out `Anonymous`.
    pub fn new() -> Self {
        Self::with_status(AuthStatus::Anonymous)
    }

    pub fn with_status(status: AuthStatus) -> Self {
        let (sender, _) = watch::channel(status);
        AuthStatusChannel {
            sender: Arc::new(sender),
        }
    }

    /// Snapshot of the current status.
    pub fn current(&self) -> AuthStatus {
        self.sender.borrow().clone()
    }

    /// Receiver that sees every later change.
    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.sender.subscribe()
    }

    /// Publishes `status`. Subscribers are only woken when it differs from
    /// the current one. Returns whether it did.
    pub fn publish(&self, status: AuthStatus) -> bool {
        let changed = self.sender.send_if_modified(|current| {
            if *current == status {
                false
            } else {
                *current = status;
                true
            }
        });

        if changed {
            debug!(
                authenticated = self.sender.borrow().is_authenticated(),
                subscribers = self.sender.receiver_count(),
                "Auth status changed"
            );
        }

        changed
    }
}

impl Default for AuthStatusChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stayhub_core::AuthUser;

    fn signed_in() -> AuthStatus {
        AuthStatus::Authenticated(AuthUser {
            uid: "u1".to_string(),
            email: "thabo@example.com".to_string(),
            display_name: None,
        })
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let channel = AuthStatusChannel::new();
        let mut rx = channel.subscribe();

        assert!(channel.publish(signed_in()));
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_authenticated());

        assert!(channel.publish(AuthStatus::Anonymous));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), AuthStatus::Anonymous);
    }

    #[tokio::test]
    async fn test_repeated_status_is_not_a_change() {
        let channel = AuthStatusChannel::with_status(signed_in());
        let rx = channel.subscribe();

        assert!(!channel.publish(signed_in()));
        assert!(!rx.has_changed().unwrap());
        assert_eq!(channel.current(), signed_in());
    }

    #[test]
    fn test_publish_without_subscribers() {
        let channel = AuthStatusChannel::new();
        assert!(channel.publish(signed_in()));
        assert!(channel.current().is_authenticated());
    }
}
