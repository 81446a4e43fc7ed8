use serde::{Deserialize, Serialize};

/// Maximum number of simultaneously visible toast notifications.
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Auto-dismiss duration for default toasts in seconds.
pub const NOTICE_TOAST_SECS: f32 = 5.0;

/// Auto-dismiss duration for destructive toasts in seconds.
pub const DESTRUCTIVE_TOAST_SECS: f32 = 8.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// A transient notice shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: Variant,
}

impl Notification {
    pub fn notice(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }

    fn lifetime_secs(&self) -> f32 {
        match self.variant {
            Variant::Default => NOTICE_TOAST_SECS,
            Variant::Destructive => DESTRUCTIVE_TOAST_SECS,
        }
    }
}

/// A toast notification queued for display.
#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub notification: Notification,
    /// Seconds left before auto-dismiss. Only counts down while visible.
    pub remaining_secs: f32,
}

/// Queue managing toast notification display.
#[derive(Debug)]
pub struct ToastQueue {
    visible: Vec<Toast>,
    pending: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            visible: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Add a new toast to the queue.
    pub fn push(&mut self, notification: Notification) {
        let toast = Toast {
            remaining_secs: notification.lifetime_secs(),
            notification,
        };
        if self.visible.len() < MAX_VISIBLE_TOASTS {
            self.visible.push(toast);
        } else {
            self.pending.push(toast);
        }
    }

    /// Get currently visible toasts.
    pub fn visible(&self) -> &[Toast] {
        &self.visible
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.pending.is_empty()
    }

    /// Count down visible toasts, drop expired ones and promote pending.
    pub fn tick(&mut self, dt: f32) {
        for toast in &mut self.visible {
            toast.remaining_secs -= dt;
        }
        self.visible.retain(|t| t.remaining_secs > 0.0);
        self.promote();
    }

    /// Dismiss the visible toast at `index`. Returns false if out of range.
    pub fn dismiss(&mut self, index: usize) -> bool {
        if index >= self.visible.len() {
            return false;
        }
        self.visible.remove(index);
        self.promote();
        true
    }

    fn promote(&mut self) {
        while self.visible.len() < MAX_VISIBLE_TOASTS && !self.pending.is_empty() {
            let next = self.pending.remove(0);
            self.visible.push(next);
        }
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(n: usize) -> Notification {
        Notification::notice(format!("Notice {n}"), "body")
    }

    #[test]
    fn overflow_goes_to_pending() {
        let mut queue = ToastQueue::new();
        for i in 0..5 {
            queue.push(notice(i));
        }
        assert_eq!(queue.visible().len(), MAX_VISIBLE_TOASTS);
        assert_eq!(queue.pending_count(), 2);
        assert_eq!(queue.visible()[0].notification.title, "Notice 0");
    }

    #[test]
    fn notices_expire_before_destructive() {
        let mut queue = ToastQueue::new();
        queue.push(notice(0));
        queue.push(Notification::destructive("Error", "bad"));

        queue.tick(5.5);
        assert_eq!(queue.visible().len(), 1);
        assert!(queue.visible()[0].notification.is_destructive());

        queue.tick(3.0);
        assert!(queue.is_empty());
    }

    #[test]
    fn expiry_promotes_pending_with_full_lifetime() {
        let mut queue = ToastQueue::new();
        for i in 0..4 {
            queue.push(notice(i));
        }
        queue.tick(NOTICE_TOAST_SECS);
        assert_eq!(queue.visible().len(), 1);
        assert_eq!(queue.visible()[0].notification.title, "Notice 3");
        assert_eq!(queue.visible()[0].remaining_secs, NOTICE_TOAST_SECS);
    }

    #[test]
    fn dismiss_by_index() {
        let mut queue = ToastQueue::new();
        for i in 0..4 {
            queue.push(notice(i));
        }
        assert!(queue.dismiss(1));
        assert!(!queue.dismiss(7));
        let titles: Vec<_> = queue
            .visible()
            .iter()
            .map(|t| t.notification.title.as_str())
            .collect();
        assert_eq!(titles, ["Notice 0", "Notice 2", "Notice 3"]);
        assert_eq!(queue.pending_count(), 0);
    }
}
