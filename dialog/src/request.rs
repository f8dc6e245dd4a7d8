//! The dialog request model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DialogAction, DialogError, DialogType, FieldDescriptor, Input};

/// How the dialog is laid out on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresentationShape {
    /// A centered alert box.
    #[default]
    Inline,
    /// A sheet anchored to the bottom edge.
    Sheet,
}

/// Callback run once with the resolved inputs.
pub type Completion = Box<dyn FnOnce(Vec<Input>) + Send + 'static>;

/// An immutable description of a modal prompt.
///
/// Built through [`DialogRequest::builder`] or one of the convenience
/// builders; construction checks every invariant, so a `DialogRequest`
/// is always presentable.
pub struct DialogRequest {
    pub(crate) title: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) kind: DialogType,
    pub(crate) fields: Vec<FieldDescriptor>,
    pub(crate) actions: Vec<DialogAction>,
    pub(crate) preferred: Option<usize>,
    pub(crate) shape: PresentationShape,
    pub(crate) completion: Option<Completion>,
}

impl DialogRequest {
    /// Start building a request.
    #[must_use]
    pub fn builder() -> DialogRequestBuilder {
        DialogRequestBuilder::default()
    }

    /// Title of the dialog.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Message body of the dialog.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Tone of the dialog.
    #[must_use]
    pub const fn kind(&self) -> DialogType {
        self.kind
    }

    /// Fields in positional order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Actions in on-screen order.
    #[must_use]
    pub fn actions(&self) -> &[DialogAction] {
        &self.actions
    }

    /// Index of the default-focused action, if set.
    #[must_use]
    pub const fn preferred(&self) -> Option<usize> {
        self.preferred
    }

    /// Presentation shape.
    #[must_use]
    pub const fn shape(&self) -> PresentationShape {
        self.shape
    }

    /// Whether a completion callback is attached.
    #[must_use]
    pub const fn has_completion(&self) -> bool {
        self.completion.is_some()
    }
}

impl fmt::Debug for DialogRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogRequest")
            .field("title", &self.title)
            .field("message", &self.message)
            .field("kind", &self.kind)
            .field("fields", &self.fields)
            .field("actions", &self.actions)
            .field("preferred", &self.preferred)
            .field("shape", &self.shape)
            .field("completion", &self.completion.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Builder for [`DialogRequest`].
#[derive(Default)]
pub struct DialogRequestBuilder {
    title: Option<String>,
    message: Option<String>,
    kind: DialogType,
    fields: Vec<FieldDescriptor>,
    actions: Vec<DialogAction>,
    preferred: Option<usize>,
    shape: PresentationShape,
    completion: Option<Completion>,
}

impl DialogRequestBuilder {
    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set or clear the title.
    #[must_use]
    pub fn maybe_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Set the message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set or clear the message.
    #[must_use]
    pub fn maybe_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    /// Set the dialog tone.
    #[must_use]
    pub fn with_type(mut self, kind: DialogType) -> Self {
        self.kind = kind;
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

    /// Append an action.
    #[must_use]
    pub fn action(mut self, action: DialogAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Append several actions.
    #[must_use]
    pub fn actions(mut self, actions: impl IntoIterator<Item = DialogAction>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Mark the action at `index` as preferred.
    #[must_use]
    pub fn preferred(mut self, index: usize) -> Self {
        self.preferred = Some(index);
        self
    }

    /// Set the presentation shape.
    #[must_use]
    pub fn shape(mut self, shape: PresentationShape) -> Self {
        self.shape = shape;
        self
    }

    /// Run `completion` with the resolved inputs when a resolving action is picked.
    #[must_use]
    pub fn on_resolve<F>(mut self, completion: F) -> Self
    where
        F: FnOnce(Vec<Input>) + Send + 'static,
    {
        self.completion = Some(Box::new(completion));
        self
    }

    /// Run `handler` when a resolving action is picked, ignoring inputs.
    #[must_use]
    pub fn on_confirm<F>(self, handler: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_resolve(move |_| handler())
    }

    /// Check the invariants and produce the request.
    ///
    /// # Errors
    /// - [`DialogError::NoActions`] if no action was added.
    /// - [`DialogError::NoResolvingAction`] if fields are collected but no
    ///   action resolves them.
    /// - [`DialogError::PreferredOutOfRange`] if the preferred index names
    ///   no action.
    pub fn build(self) -> Result<DialogRequest, DialogError> {
        let request = DialogRequest {
            title: self.title,
            message: self.message,
            kind: self.kind,
            fields: self.fields,
            actions: self.actions,
            preferred: self.preferred,
            shape: self.shape,
            completion: self.completion,
        };

        if request.actions.is_empty() {
            return Err(DialogError::NoActions);
        }
        if !request.fields.is_empty() && !request.actions.iter().any(|a| a.resolves) {
            return Err(DialogError::NoResolvingAction {
                fields: request.fields.len(),
            });
        }
        if let Some(index) = request.preferred {
            if index >= request.actions.len() {
                return Err(DialogError::PreferredOutOfRange {
                    index,
                    len: request.actions.len(),
                });
            }
        }
        Ok(request)
    }
}

impl fmt::Debug for DialogRequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogRequestBuilder")
            .field("title", &self.title)
            .field("message", &self.message)
            .field("fields", &self.fields.len())
            .field("actions", &self.actions)
            .finish_non_exhaustive()
    }
}
