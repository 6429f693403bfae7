use std::{sync::Mutex, time::Duration};

use tokio::time::Instant;
use tracing::info;

use crate::surface::{Notifier, Toast};

/// How long an error banner stays up.
pub const ERROR_TOAST_TTL: Duration = Duration::from_secs(4);

struct ActiveToast {
    message: String,
    expires_at: Instant,
}

/// In-memory banner stack. Toasts disappear on their own once their ttl runs
/// out; readers only ever see live ones.
#[derive(Default)]
pub struct ToastBoard {
    toasts: Mutex<Vec<ActiveToast>>,
}

impl ToastBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> Vec<String> {
        let now = Instant::now();
        let mut toasts = self.toasts.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        toasts.retain(|toast| toast.expires_at > now);
        toasts.iter().map(|toast| toast.message.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.visible().is_empty()
    }
}

impl Notifier for ToastBoard {
    fn notify(&self, toast: Toast) {
        info!(message = %toast.message, ttl_ms = toast.ttl.as_millis() as u64, "toast shown");
        let mut toasts = self.toasts.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        toasts.push(ActiveToast {
            message: toast.message,
            expires_at: Instant::now() + toast.ttl,
        });
    }
}

#[cfg(test)]
#[path = "tests/toast_tests.rs"]
mod tests;
