use crate::{
    ActionRole, DialogError, DialogRequest, DialogResolver, DialogType, FieldValue, Modal, Outcome,
    RenderingSurface, SelectionEvents, SurfaceHandle,
};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Renders requests as native message boxes.
///
/// Message boxes have no input widgets, at most three buttons, and report
/// the pressed button by its title, so requests with fields, more actions
/// or repeated button titles are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeSurface;

impl RenderingSurface for NativeSurface {
    fn present_modal(
        &self,
        _handle: SurfaceHandle,
        modal: &Modal<'_>,
        events: SelectionEvents,
    ) -> Result<(), DialogError> {
        if !modal.fields.is_empty() {
            return Err(DialogError::NotSupported(
                "native message boxes can't collect fields".into(),
            ));
        }

        let titles: Vec<String> = modal.actions.iter().map(|a| a.title.clone()).collect();
        if titles
            .iter()
            .enumerate()
            .any(|(i, title)| titles[..i].contains(title))
        {
            return Err(DialogError::NotSupported(
                "native message boxes report buttons by title, so titles must be unique".into(),
            ));
        }
        let buttons = match titles.as_slice() {
            [only] => MessageButtons::OkCustom(only.clone()),
            [first, second] => MessageButtons::OkCancelCustom(first.clone(), second.clone()),
            [first, second, third] => {
                MessageButtons::YesNoCancelCustom(first.clone(), second.clone(), third.clone())
            }
            _ => {
                return Err(DialogError::NotSupported(format!(
                    "native message boxes show 1 to 3 buttons, got {}",
                    titles.len()
                )));
            }
        };
        let level = match modal.kind {
            DialogType::Info => MessageLevel::Info,
            DialogType::Warning => MessageLevel::Warning,
            DialogType::Error => MessageLevel::Error,
        };
        let cancel_index = modal
            .actions
            .iter()
            .rposition(|a| a.role == ActionRole::Cancel);
        let title = modal.title.unwrap_or_default().to_string();
        let description = modal.message.unwrap_or_default().to_string();

        std::thread::spawn(move || {
            let result = MessageDialog::new()
                .set_level(level)
                .set_title(&title)
                .set_description(&description)
                .set_buttons(buttons)
                .show();

            match pick_index(&result, &titles, cancel_index) {
                Some(index) => {
                    events.action_selected(index);
                }
                None => {
                    events.dismissed();
                }
            }
        });

        Ok(())
    }

    fn field_value(&self, _handle: SurfaceHandle, _field_index: usize) -> FieldValue {
        FieldValue::default()
    }
}

/// Map a message box result back to an action index.
fn pick_index(
    result: &MessageDialogResult,
    titles: &[String],
    cancel_index: Option<usize>,
) -> Option<usize> {
    match result {
        MessageDialogResult::Custom(label) => titles.iter().position(|t| t == label),
        MessageDialogResult::Ok | MessageDialogResult::Yes => Some(0),
        MessageDialogResult::No if titles.len() > 1 => Some(1),
        MessageDialogResult::Cancel => cancel_index,
        MessageDialogResult::No => None,
    }
}

/// Show `request` as a native message box and wait for the outcome.
///
/// # Errors
/// Returns an error if the request can't be shown natively or the dialog
/// thread goes away.
pub async fn show(request: DialogRequest) -> Result<Outcome, DialogError> {
    let resolver = DialogResolver::new(NativeSurface);
    let presentation = resolver.present(request)?;
    presentation.outcome().await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> Vec<String> {
        vec!["Delete".into(), "Cancel".into()]
    }

    #[test]
    fn custom_label_maps_to_its_position() {
        let result = MessageDialogResult::Custom("Cancel".into());
        assert_eq!(pick_index(&result, &titles(), Some(1)), Some(1));
        let result = MessageDialogResult::Custom("Other".into());
        assert_eq!(pick_index(&result, &titles(), Some(1)), None);
    }

    #[test]
    fn standard_results_map_by_slot() {
        assert_eq!(pick_index(&MessageDialogResult::Ok, &titles(), None), Some(0));
        assert_eq!(pick_index(&MessageDialogResult::No, &titles(), None), Some(1));
        assert_eq!(pick_index(&MessageDialogResult::Cancel, &titles(), Some(1)), Some(1));
        assert_eq!(pick_index(&MessageDialogResult::Cancel, &titles(), None), None);
    }

    #[test]
    fn fields_are_not_supported() {
        let resolver = DialogResolver::new(NativeSurface);
        let request = crate::FieldDialog::new("Name")
            .field(crate::FieldDescriptor::text())
            .build(&crate::EnglishLabels)
            .unwrap();
        let err = resolver.present(request).unwrap_err();
        assert!(matches!(err, DialogError::NotSupported(_)));
        assert!(!resolver.is_presenting());
    }

    #[test]
    fn duplicate_titles_are_not_supported() {
        let resolver = DialogResolver::new(NativeSurface);
        let request = DialogRequest::builder()
            .action(crate::DialogAction::new("OK", ActionRole::Neutral))
            .action(crate::DialogAction::dismiss("OK"))
            .build()
            .unwrap();
        let err = resolver.present(request).unwrap_err();
        assert!(matches!(err, DialogError::NotSupported(_)));
        assert!(!resolver.is_presenting());
    }
}
