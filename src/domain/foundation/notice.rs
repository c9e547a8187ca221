//! User-facing notifications.
//!
//! Every flow ends at the screen boundary with at most one notice. Errors
//! do not propagate past it.

use std::fmt;

/// Whether a notice reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// Title shown above the message.
    pub fn title(&self) -> &'static str {
        match self {
            NoticeKind::Success => "Success",
            NoticeKind::Error => "Error",
        }
    }
}

/// A single alert shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_title() {
        assert_eq!(Notice::error("Network error").to_string(), "Error: Network error");
        assert_eq!(Notice::success("Account created!").to_string(), "Success: Account created!");
    }

    #[test]
    fn is_error_follows_kind() {
        assert!(Notice::error("x").is_error());
        assert!(!Notice::success("x").is_error());
    }
}
