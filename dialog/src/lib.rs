//! Modal dialogs described as data.
//!
//! A [`DialogRequest`] says what to show: a title, a message, input fields
//! and the buttons. A [`DialogResolver`] hands it to a [`RenderingSurface`]
//! supplied by the host UI, waits for the user to pick a button and turns
//! the field widgets' state into typed [`Input`] values.
//!
//! ```
//! use promptkit_dialog::{EnglishLabels, FieldDescriptor, FieldDialog, PresentationShape};
//!
//! let request = FieldDialog::new("New folder")
//!     .confirm_label("Create")
//!     .field(FieldDescriptor::text().with_placeholder("Name"))
//!     .shape(PresentationShape::Inline)
//!     .on_resolve(|inputs| println!("{inputs:?}"))
//!     .build(&EnglishLabels)
//!     .unwrap();
//!
//! assert_eq!(request.actions()[0].title, "Cancel");
//! assert_eq!(request.actions()[1].title, "Create");
//! ```

#![warn(missing_docs)]

mod action;
mod builders;
mod error;
mod field;
pub mod labels;
mod request;
pub mod resolver;

/// Platform-specific implementations.
pub mod sys;

pub use action::{ActionRole, DialogAction};
pub use builders::{
    DisplayableError, FieldDialog, alert, build_field_dialog, confirmation_dialog,
    displayable_error_dialog, error_alert, error_dialog, error_dialog_for,
};
pub use error::DialogError;
pub use field::{Autocapitalization, FieldDescriptor, FieldStyle, FieldValue, Input};
pub use labels::{EnglishLabels, LabelKey, LabelProvider, LabelTable};
pub use request::{Completion, DialogRequest, DialogRequestBuilder, PresentationShape};
pub use resolver::{
    DialogResolver, Modal, Outcome, Presentation, RenderingSurface, SelectionEvents,
    SurfaceHandle,
};

/// Types of dialogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DialogType {
    /// Information dialog.
    #[default]
    Info,
    /// Warning dialog.
    Warning,
    /// Error dialog.
    Error,
}
