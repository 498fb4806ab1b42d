//! User-facing advisory messages.
//!
//! Stores return `Result`s; front ends turn them into notices and decide how
//! to show them.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    #[must_use]
    pub fn category_added(name: &str) -> Self {
        Self::success("Category added", format!("{name} has been added successfully"))
    }

    #[must_use]
    pub fn category_updated() -> Self {
        Self::success("Category updated", "The category has been updated successfully")
    }

    #[must_use]
    pub fn category_deleted() -> Self {
        Self::success("Category deleted", "The category has been deleted successfully")
    }

    #[must_use]
    pub fn login_successful() -> Self {
        Self::success("Login successful", "Welcome back to the admin panel!")
    }

    #[must_use]
    pub fn account_created() -> Self {
        Self::success("Account created", "Your account has been created successfully!")
    }

    #[must_use]
    pub fn logged_out() -> Self {
        Self::success("Logged out", "You have been logged out successfully")
    }

    /// Destructive notice carrying an error's message.
    #[must_use]
    pub fn failure(title: &str, error: &dyn fmt::Display) -> Self {
        Self::destructive(title, error.to_string())
    }

    #[must_use]
    pub const fn is_destructive(&self) -> bool {
        matches!(self.variant, NoticeVariant::Destructive)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
