//! Transient user-facing messages.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    posted: Instant,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Notices that expire after a fixed time to live.
///
/// Cloning shares the board, so spawned actions can post to it.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    notices: Arc<Mutex<Vec<Notice>>>,
    ttl: Duration,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            notices: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.post(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.post(NoticeKind::Error, message.into());
    }

    fn post(&self, kind: NoticeKind, message: String) {
        let mut notices = self.notices.lock();
        prune(&mut notices, self.ttl);
        notices.push(Notice {
            kind,
            message,
            posted: Instant::now(),
        });
    }

    /// Live notices, oldest first.
    pub fn current(&self) -> Vec<Notice> {
        let mut notices = self.notices.lock();
        prune(&mut notices, self.ttl);
        notices.clone()
    }

    pub fn latest(&self) -> Option<Notice> {
        self.current().pop()
    }

    pub fn dismiss_all(&self) {
        self.notices.lock().clear();
    }
}

fn prune(notices: &mut Vec<Notice>, ttl: Duration) {
    notices.retain(|notice| notice.posted.elapsed() < ttl);
}
