use uuid::Uuid;

use super::i18n::t;

/// A notification requested by a screen. Success notices carry a message
/// key, error notices carry text that is already user-facing.
#[derive(Clone, PartialEq, Debug)]
pub enum Notice {
    Success(&'static str),
    Error(String),
}

impl Notice {
    /// Error notice for a message key.
    pub fn error_key(key: &str) -> Self {
        Notice::Error(t(key))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

impl From<Notice> for Toast {
    fn from(notice: Notice) -> Self {
        let (kind, message) = match notice {
            Notice::Success(key) => (ToastKind::Success, t(key)),
            Notice::Error(text) => (ToastKind::Error, text),
        };
        Self {
            id: Uuid::new_v4(),
            kind,
            message,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Queues a toast and returns its id so the caller can schedule dismissal.
    pub fn push(&mut self, notice: Notice) -> Uuid {
        let toast = Toast::from(notice);
        let id = toast.id;
        match toast.kind {
            ToastKind::Success => tracing::info!(message = %toast.message, "toast"),
            ToastKind::Error => tracing::warn!(message = %toast.message, "error toast"),
        }
        self.toasts.push(toast);
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_resolves_key() {
        let mut queue = ToastQueue::default();
        queue.push(Notice::Success("tagCreationSuccess"));
        assert_eq!(queue.toasts()[0].kind, ToastKind::Success);
        assert_eq!(queue.toasts()[0].message, "New tag created successfully");
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notice::Error("boom".to_string()));
        queue.push(Notice::error_key("enterTagName"));
        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message, "Enter Tag Name");
    }
}
