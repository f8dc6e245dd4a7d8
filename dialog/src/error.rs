use thiserror::Error;

/// Errors that can occur when building or presenting dialogs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    /// A dialog request was built without any actions.
    #[error("dialog request has no actions")]
    NoActions,

    /// The request collects fields but no action resolves them.
    #[error("dialog request has {fields} field(s) but no resolving action")]
    NoResolvingAction {
        /// Number of fields on the request.
        fields: usize,
    },

    /// The preferred action index does not name an action.
    #[error("preferred action index {index} is out of range for {len} action(s)")]
    PreferredOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of actions available.
        len: usize,
    },

    /// Another dialog is already live on this resolver.
    #[error("another dialog is already being presented")]
    PresentationConflict,

    /// The resolver went away before the dialog reached a terminal state.
    #[error("Operation cancelled")]
    Cancelled,

    /// An error occurred in the underlying rendering surface.
    #[error("Platform error: {0}")]
    PlatformError(String),

    /// The rendering surface can't display this request.
    #[error("Not supported: {0}")]
    NotSupported(String),
}
