//! Transient toast notifications.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn success(message: impl Into<String>, now: Instant, duration: Duration) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            shown_at: now,
            duration,
        }
    }

    pub fn error(message: impl Into<String>, now: Instant, duration: Duration) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
            shown_at: now,
            duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }

    /// Fade factor: quick fade-in, hold, fade-out over the last 300 ms.
    pub fn alpha(&self, now: Instant) -> f32 {
        let age = now.saturating_duration_since(self.shown_at).as_secs_f32();
        let left = self.duration.as_secs_f32() - age;
        (age / 0.2).min(left / 0.3).clamp(0.0, 1.0)
    }
}

/// Stack of live toasts, newest last.
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.items.push(toast);
    }

    /// Drop expired toasts.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|t| !t.is_expired(now));
    }

    pub fn active(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_duration() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        toasts.push(Toast::success("sent", t0, Duration::from_secs(5)));
        toasts.push(Toast::error("oops", t0 + Duration::from_secs(3), Duration::from_secs(5)));

        toasts.prune(t0 + Duration::from_secs(4));
        assert_eq!(toasts.active().len(), 2);

        toasts.prune(t0 + Duration::from_secs(5));
        assert_eq!(toasts.active().len(), 1);
        assert_eq!(toasts.active()[0].kind, ToastKind::Error);

        toasts.prune(t0 + Duration::from_secs(9));
        assert!(toasts.is_empty());
    }

    #[test]
    fn alpha_fades_in_and_out() {
        let t0 = Instant::now();
        let toast = Toast::success("x", t0, Duration::from_secs(5));
        assert_eq!(toast.alpha(t0), 0.0);
        assert_eq!(toast.alpha(t0 + Duration::from_secs(2)), 1.0);
        assert!(toast.alpha(t0 + Duration::from_millis(4_850)) < 1.0);
        assert_eq!(toast.alpha(t0 + Duration::from_secs(6)), 0.0);
    }
}
