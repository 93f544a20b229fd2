//! Transient notifications. Time is passed in as milliseconds so the queue
//! works the same under a browser clock and in tests.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub expires_at_ms: f64,
}

#[derive(Clone, Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    lifetime_ms: f64,
}

impl ToastQueue {
    pub fn new(lifetime_ms: u32) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            lifetime_ms: lifetime_ms as f64,
        }
    }

    pub fn lifetime_ms(&self) -> f64 {
        self.lifetime_ms
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            expires_at_ms: now_ms + self.lifetime_ms,
        });
        id
    }

    /// Close a toast early. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose lifetime has run out; returns how many went.
    pub fn expire(&mut self, now_ms: f64) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at_ms > now_ms);
        before - self.toasts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_lifetime() {
        let mut q = ToastQueue::new(5000);
        q.push(ToastKind::Error, "first", 0.0);
        q.push(ToastKind::Success, "second", 2000.0);
        assert_eq!(q.expire(4999.0), 0);
        assert_eq!(q.expire(5000.0), 1);
        assert_eq!(q.iter().map(|t| t.message.as_str()).collect::<Vec<_>>(), ["second"]);
        assert_eq!(q.expire(7000.0), 1);
        assert!(q.is_empty());
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut q = ToastQueue::new(5000);
        let id = q.push(ToastKind::Info, "hello", 0.0);
        assert!(q.dismiss(id));
        assert!(!q.dismiss(id));
    }

    #[test]
    fn ids_are_unique() {
        let mut q = ToastQueue::new(10);
        let a = q.push(ToastKind::Info, "a", 0.0);
        let b = q.push(ToastKind::Info, "b", 0.0);
        assert_ne!(a, b);
    }
}
