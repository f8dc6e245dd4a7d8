//! Shortcuts for the common dialogs: errors, alerts, confirmations and prompts.

use crate::{
    ActionRole, DialogAction, DialogError, DialogRequest, DialogType, FieldDescriptor, Input,
    LabelKey, LabelProvider, PresentationShape,
};

/// An error that knows how it should be shown to the user.
///
/// Any `std::error::Error` can be shown through [`error_dialog_for`]; this
/// trait only lets an error pick its own title and body.
pub trait DisplayableError: std::error::Error {
    /// Title to show. `None` uses the localized "Error" label.
    fn name(&self) -> Option<String> {
        None
    }

    /// Body text to show. `None` leaves the dialog without a message.
    fn message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Build an error dialog.
///
/// Without `actions`, the dialog gets a single localized "OK" button that
/// just dismisses it. A missing title falls back to the localized "Error"
/// label.
///
/// # Errors
/// Returns a construction error if `actions` is `Some` but empty or
/// otherwise malformed.
pub fn error_dialog<L>(
    labels: &L,
    title: Option<String>,
    message: impl Into<String>,
    actions: Option<Vec<DialogAction>>,
) -> Result<DialogRequest, DialogError>
where
    L: LabelProvider + ?Sized,
{
    let actions =
        actions.unwrap_or_else(|| vec![DialogAction::dismiss(labels.lookup(LabelKey::Ok))]);
    DialogRequest::builder()
        .title(title.unwrap_or_else(|| labels.lookup(LabelKey::Error)))
        .message(message)
        .with_type(DialogType::Error)
        .actions(actions)
        .build()
}

/// Build an error dialog from any error value.
///
/// The title is the localized "Error" label and the message is the error's
/// `Display` text.
///
/// # Errors
/// Same as [`error_dialog`].
pub fn error_dialog_for<L, E>(
    labels: &L,
    error: &E,
    actions: Option<Vec<DialogAction>>,
) -> Result<DialogRequest, DialogError>
where
    L: LabelProvider + ?Sized,
    E: std::error::Error + ?Sized,
{
    error_dialog(labels, None, error.to_string(), actions)
}

/// Build an error dialog from an error that names itself.
///
/// # Errors
/// Same as [`error_dialog`].
pub fn displayable_error_dialog<L, E>(
    labels: &L,
    error: &E,
    actions: Option<Vec<DialogAction>>,
) -> Result<DialogRequest, DialogError>
where
    L: LabelProvider + ?Sized,
    E: DisplayableError + ?Sized,
{
    let title = error
        .name()
        .unwrap_or_else(|| labels.lookup(LabelKey::Error));
    let actions =
        actions.unwrap_or_else(|| vec![DialogAction::dismiss(labels.lookup(LabelKey::Ok))]);
    DialogRequest::builder()
        .title(title)
        .maybe_message(DisplayableError::message(error))
        .with_type(DialogType::Error)
        .actions(actions)
        .build()
}

/// Build an error acknowledgement whose "OK" button runs `on_dismiss`.
///
/// # Errors
/// Never fails for well-formed inputs; the `Result` mirrors the other builders.
pub fn error_alert<L, E, F>(
    labels: &L,
    error: &E,
    on_dismiss: F,
) -> Result<DialogRequest, DialogError>
where
    L: LabelProvider + ?Sized,
    E: std::error::Error + ?Sized,
    F: FnOnce() + Send + 'static,
{
    DialogRequest::builder()
        .title(labels.lookup(LabelKey::Error))
        .message(error.to_string())
        .with_type(DialogType::Error)
        .action(DialogAction::new(labels.lookup(LabelKey::Ok), ActionRole::Neutral))
        .on_confirm(on_dismiss)
        .build()
}

/// Build an acknowledgement alert whose "OK" button runs `on_dismiss`.
///
/// # Errors
/// Never fails for well-formed inputs; the `Result` mirrors the other builders.
pub fn alert<L, F>(
    labels: &L,
    title: impl Into<String>,
    message: Option<String>,
    on_dismiss: F,
) -> Result<DialogRequest, DialogError>
where
    L: LabelProvider + ?Sized,
    F: FnOnce() + Send + 'static,
{
    DialogRequest::builder()
        .title(title)
        .maybe_message(message)
        .action(DialogAction::new(labels.lookup(LabelKey::Ok), ActionRole::Neutral))
        .on_confirm(on_dismiss)
        .build()
}

/// Build a sheet asking the user to confirm `action_label`.
///
/// The destructive confirm button comes first and runs `on_confirm`; the
/// localized "Cancel" button follows and is preferred.
///
/// # Errors
/// Never fails for well-formed inputs; the `Result` mirrors the other builders.
pub fn confirmation_dialog<L, F>(
    labels: &L,
    action_label: impl Into<String>,
    context: Option<String>,
    on_confirm: F,
) -> Result<DialogRequest, DialogError>
where
    L: LabelProvider + ?Sized,
    F: FnOnce() + Send + 'static,
{
    DialogRequest::builder()
        .maybe_message(context)
        .with_type(DialogType::Warning)
        .shape(PresentationShape::Sheet)
        .action(DialogAction::destructive(action_label))
        .action(DialogAction::cancel(labels.lookup(LabelKey::Cancel)))
        .preferred(1)
        .on_confirm(on_confirm)
        .build()
}

/// Builder for a dialog that collects field values behind a confirm/cancel pair.
///
/// On a [`PresentationShape::Sheet`] the confirm button comes first; inline
/// alerts put cancel first. `preferred` indexes into that order.
pub struct FieldDialog {
    title: String,
    message: Option<String>,
    confirm_label: Option<String>,
    fields: Vec<FieldDescriptor>,
    shape: PresentationShape,
    preferred: usize,
    on_resolve: Option<crate::Completion>,
}

impl FieldDialog {
    /// Start a field dialog with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            confirm_label: None,
            fields: Vec::new(),
            shape: PresentationShape::Inline,
            preferred: 0,
            on_resolve: None,
        }
    }

    /// Set the message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Title of the confirm button. Defaults to the localized "OK".
    #[must_use]
    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    /// Append a field.
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Append several fields.
    #[must_use]
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Set the presentation shape.
    #[must_use]
    pub const fn shape(mut self, shape: PresentationShape) -> Self {
        self.shape = shape;
        self
    }

    /// Which of the two buttons, in on-screen order, is preferred.
    #[must_use]
    pub const fn preferred(mut self, index: usize) -> Self {
        self.preferred = index;
        self
    }

    /// Run `completion` with the resolved inputs when confirmed.
    #[must_use]
    pub fn on_resolve<F>(mut self, completion: F) -> Self
    where
        F: FnOnce(Vec<Input>) + Send + 'static,
    {
        self.on_resolve = Some(Box::new(completion));
        self
    }

    /// Produce the request.
    ///
    /// # Errors
    /// Returns [`DialogError::PreferredOutOfRange`] if `preferred` is not 0 or 1.
    pub fn build<L>(self, labels: &L) -> Result<DialogRequest, DialogError>
    where
        L: LabelProvider + ?Sized,
    {
        let confirm_title = self
            .confirm_label
            .unwrap_or_else(|| labels.lookup(LabelKey::Ok));
        let cancel = DialogAction::cancel(labels.lookup(LabelKey::Cancel));
        let actions = match self.shape {
            PresentationShape::Sheet => [DialogAction::destructive(confirm_title), cancel],
            PresentationShape::Inline => [
                cancel,
                DialogAction::new(confirm_title, ActionRole::Neutral),
            ],
        };

        let mut builder = DialogRequest::builder()
            .title(self.title)
            .maybe_message(self.message)
            .fields(self.fields)
            .shape(self.shape)
            .actions(actions)
            .preferred(self.preferred);
        if let Some(completion) = self.on_resolve {
            builder = builder.on_resolve(completion);
        }
        builder.build()
    }
}

impl std::fmt::Debug for FieldDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDialog")
            .field("title", &self.title)
            .field("message", &self.message)
            .field("confirm_label", &self.confirm_label)
            .field("fields", &self.fields)
            .field("shape", &self.shape)
            .field("preferred", &self.preferred)
            .finish_non_exhaustive()
    }
}

/// Build a field-collecting dialog in one call.
///
/// # Errors
/// Same as [`FieldDialog::build`].
pub fn build_field_dialog<L, F>(
    labels: &L,
    title: impl Into<String>,
    fields: Vec<FieldDescriptor>,
    shape: PresentationShape,
    on_resolve: F,
) -> Result<DialogRequest, DialogError>
where
    L: LabelProvider + ?Sized,
    F: FnOnce(Vec<Input>) + Send + 'static,
{
    FieldDialog::new(title)
        .fields(fields)
        .shape(shape)
        .on_resolve(on_resolve)
        .build(labels)
}
