//! Observable auth state
//!
//! A shared logged-in flag with change subscriptions, driven by the
//! gateway's provider listener and read by the session controller.

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Shared logged-in flag
///
/// Cloning yields another handle to the same flag. Subscribers receive the
/// value after every `set_logged_in`, mirroring a provider listener that
/// fires on each auth event; disconnected subscribers are dropped.
#[derive(Clone, Default)]
pub struct AuthState {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    logged_in: Mutex<bool>,
    subscribers: Mutex<Vec<Sender<bool>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        *self
            .inner
            .logged_in
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }

    /// Update the flag and notify subscribers of the new value
    pub fn set_logged_in(&self, logged_in: bool) {
        {
            let mut flag = self
                .inner
                .logged_in
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            *flag = logged_in;
        }
        let mut subs = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        subs.retain(|tx| tx.send(logged_in).is_ok());
    }

    /// Receive every subsequent change to the flag
    pub fn subscribe(&self) -> Receiver<bool> {
        let (tx, rx) = unbounded();
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(tx);
        rx
    }
}
