//! Outbound notification boundary.
//!
//! The roster returns promoted student ids and leaves informing them to this
//! service. The demo deployment only logs; a real deployment would plug in
//! e-mail or WhatsApp delivery here.

use tracing::info;

#[derive(Clone, Default)]
pub struct NotificationService;

impl NotificationService {
    pub fn new() -> Self {
        Self
    }

    pub async fn notify(&self, title: &str, body: &str) {
        info!(title, body, "notification dispatched");
    }
}
