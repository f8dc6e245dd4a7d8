//! Input fields and the values they resolve to.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Automatic capitalization applied to a text field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Autocapitalization {
    /// Leave input as typed.
    None,
    /// Capitalize the first letter of each word.
    Words,
    /// Capitalize the first letter of each sentence.
    #[default]
    Sentences,
    /// Capitalize every character.
    AllCharacters,
}

/// What kind of control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldStyle {
    /// Free text entry.
    TextInput(Autocapitalization),
    /// A date picker paired with a text display of the picked value.
    DateInput,
}

/// One input collected by a dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Control style.
    pub style: FieldStyle,
    /// Pre-filled text. Ignored for date fields.
    pub initial_text: Option<String>,
    /// Hint shown while the field is empty.
    pub placeholder: Option<String>,
    /// Mask the entered text.
    pub is_secure: bool,
}

impl FieldDescriptor {
    /// A text field with sentence capitalization.
    #[must_use]
    pub fn text() -> Self {
        Self {
            style: FieldStyle::TextInput(Autocapitalization::default()),
            initial_text: None,
            placeholder: None,
            is_secure: false,
        }
    }

    /// A masked text field with no capitalization.
    #[must_use]
    pub fn secure() -> Self {
        Self {
            style: FieldStyle::TextInput(Autocapitalization::None),
            is_secure: true,
            ..Self::text()
        }
    }

    /// A date picker field.
    #[must_use]
    pub fn date() -> Self {
        Self {
            style: FieldStyle::DateInput,
            ..Self::text()
        }
    }

    /// Set the capitalization policy. Has no effect on date fields.
    #[must_use]
    pub fn with_autocapitalization(mut self, policy: Autocapitalization) -> Self {
        if let FieldStyle::TextInput(current) = &mut self.style {
            *current = policy;
        }
        self
    }

    /// Set the pre-filled text.
    #[must_use]
    pub fn with_initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = Some(text.into());
        self
    }

    /// Set the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Mask or unmask the entered text.
    #[must_use]
    pub const fn with_secure(mut self, secure: bool) -> Self {
        self.is_secure = secure;
        self
    }

    /// Text the surface should pre-fill, honoring the style.
    #[must_use]
    pub fn rendered_initial_text(&self) -> Option<&str> {
        match self.style {
            FieldStyle::TextInput(_) => self.initial_text.as_deref(),
            FieldStyle::DateInput => None,
        }
    }

    /// Turn the widget's current value into an [`Input`].
    ///
    /// A date field only yields a date once its display text is non-empty,
    /// i.e. once the user has touched the picker.
    #[must_use]
    pub fn resolve(&self, value: FieldValue) -> Input {
        match self.style {
            FieldStyle::TextInput(_) => Input::Text(value.text),
            FieldStyle::DateInput => {
                let touched = value.text.as_deref().is_some_and(|text| !text.is_empty());
                Input::Date(value.selected_date.filter(|_| touched))
            }
        }
    }
}

/// The raw state of a rendered field, as reported by the surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValue {
    /// Current text. For date fields, the text display of the picked date.
    pub text: Option<String>,
    /// Current picker value, if the widget is a date picker.
    pub selected_date: Option<NaiveDateTime>,
}

impl FieldValue {
    /// A text widget holding `text`.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            selected_date: None,
        }
    }

    /// A date widget whose picker holds `date`, displayed as `display`.
    #[must_use]
    pub fn date(date: NaiveDateTime, display: impl Into<String>) -> Self {
        Self {
            text: Some(display.into()),
            selected_date: Some(date),
        }
    }
}

/// A resolved field value, one per [`FieldDescriptor`] in request order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// Value of a text field.
    Text(Option<String>),
    /// Value of a date field; `None` if the picker was never used.
    Date(Option<NaiveDateTime>),
}

impl Input {
    /// The text, if this is a text input with a value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => text.as_deref(),
            Self::Date(_) => None,
        }
    }

    /// The date, if this is a date input with a value.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(date) => *date,
            Self::Text(_) => None,
        }
    }
}
