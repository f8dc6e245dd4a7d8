use serde::{Deserialize, Serialize};

/// Visual role of a dialog button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionRole {
    /// A regular button.
    #[default]
    Neutral,
    /// Backs out of the dialog.
    Cancel,
    /// Performs an irreversible change.
    Destructive,
}

/// One selectable button on a dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogAction {
    /// Button title.
    pub title: String,
    /// Visual role.
    pub role: ActionRole,
    /// Whether selecting this button resolves the fields and runs the completion.
    /// Non-resolving buttons just dismiss the dialog.
    pub resolves: bool,
}

impl DialogAction {
    /// A button that resolves the dialog.
    pub fn new(title: impl Into<String>, role: ActionRole) -> Self {
        Self {
            title: title.into(),
            role,
            resolves: true,
        }
    }

    /// A neutral button that only dismisses the dialog.
    pub fn dismiss(title: impl Into<String>) -> Self {
        Self::new(title, ActionRole::Neutral).with_resolves(false)
    }

    /// A cancel-like button that only dismisses the dialog.
    pub fn cancel(title: impl Into<String>) -> Self {
        Self::new(title, ActionRole::Cancel).with_resolves(false)
    }

    /// A destructive button that resolves the dialog.
    pub fn destructive(title: impl Into<String>) -> Self {
        Self::new(title, ActionRole::Destructive)
    }

    /// Set whether this button resolves the dialog.
    #[must_use]
    pub const fn with_resolves(mut self, resolves: bool) -> Self {
        self.resolves = resolves;
        self
    }
}
