//! Notification capability for the form workflow
//!
//! The form machine does not talk to the UI directly; it is handed a
//! [`Notifier`] at construction time. The production implementation is
//! [`ToastQueue`], a shared handle the status bar renders from.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// How long a toast stays visible.
const TOAST_TTL: Duration = Duration::from_millis(3000);

/// Collaborator the form machine notifies about blocked submissions.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send {
    /// A submit attempt was rejected by validation. Invoked exactly once
    /// per rejected attempt.
    fn notify_validation_blocked(&mut self);
}

/// What a toast is about; localized to text only at render time so a
/// locale switch affects toasts already on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    ValidationBlocked,
}

/// A transient notice with its raise time.
#[derive(Debug, Clone, Copy)]
pub struct Toast {
    pub kind: ToastKind,
    raised_at: Instant,
}

impl Toast {
    fn new(kind: ToastKind, now: Instant) -> Self {
        Self {
            kind,
            raised_at: now,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= TOAST_TTL
    }
}

/// Shared toast queue.
///
/// Cloned handles point at the same queue: the form machine's notifier
/// pushes, the event loop expires, the status bar reads the front.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    inner: Arc<Mutex<VecDeque<Toast>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, kind: ToastKind, now: Instant) {
        let mut queue = self.inner.lock().expect("toast queue lock");
        queue.push_back(Toast::new(kind, now));
    }

    /// Drop toasts whose TTL has elapsed. Called once per loop iteration.
    pub fn expire(&self, now: Instant) {
        let mut queue = self.inner.lock().expect("toast queue lock");
        while queue.front().is_some_and(|t| t.is_expired(now)) {
            queue.pop_front();
        }
    }

    /// The toast currently shown, oldest first.
    pub fn current(&self) -> Option<Toast> {
        let queue = self.inner.lock().expect("toast queue lock");
        queue.front().copied()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        let queue = self.inner.lock().expect("toast queue lock");
        queue.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify_validation_blocked(&mut self) {
        self.push(ToastKind::ValidationBlocked, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queue_is_empty() {
        let queue = ToastQueue::new();
        assert!(queue.is_empty());
        assert!(queue.current().is_none());
    }

    #[test]
    fn test_push_then_current() {
        let queue = ToastQueue::new();
        let now = Instant::now();
        queue.push(ToastKind::ValidationBlocked, now);
        assert!(!queue.is_empty());
        assert_eq!(queue.current().map(|t| t.kind), Some(ToastKind::ValidationBlocked));
    }

    #[test]
    fn test_expire_drops_old_toasts() {
        let queue = ToastQueue::new();
        let now = Instant::now();
        queue.push(ToastKind::ValidationBlocked, now);

        queue.expire(now + Duration::from_millis(2999));
        assert!(!queue.is_empty());

        queue.expire(now + Duration::from_millis(3000));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clones_share_the_queue() {
        let queue = ToastQueue::new();
        let mut handle = queue.clone();
        handle.notify_validation_blocked();
        assert!(!queue.is_empty());
    }

    #[test]
    fn test_expire_keeps_fresh_toasts_behind_old_ones() {
        let queue = ToastQueue::new();
        let now = Instant::now();
        queue.push(ToastKind::ValidationBlocked, now);
        queue.push(ToastKind::ValidationBlocked, now + Duration::from_millis(2000));

        queue.expire(now + Duration::from_millis(3500));
        assert!(!queue.is_empty());
        queue.expire(now + Duration::from_millis(5000));
        assert!(queue.is_empty());
    }
}
