//! Presenting requests on a rendering surface and resolving the user's choice.
//!
//! A [`DialogResolver`] owns one [`RenderingSurface`] and allows a single live
//! dialog on it at a time. Each presented request moves through
//!
//! ```text
//! Unresolved --(resolving action)--> Resolving --> Resolved
//!     \
//!      `--(non-resolving action / host dismissal)--> Dismissed
//! ```
//!
//! The completion runs only on the way to `Resolved`, and at most once.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use futures::channel::oneshot;

use crate::{
    DialogAction, DialogError, DialogRequest, DialogType, FieldDescriptor, FieldValue, Input,
    PresentationShape, request::Completion,
};

/// Identifies one presentation on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(u64);

impl SurfaceHandle {
    /// Raw id, unique per resolver.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Everything a surface needs to draw a request.
#[derive(Debug, Clone, Copy)]
pub struct Modal<'a> {
    /// Title, if any.
    pub title: Option<&'a str>,
    /// Message, if any.
    pub message: Option<&'a str>,
    /// Tone, for picking an icon or level.
    pub kind: DialogType,
    /// Layout.
    pub shape: PresentationShape,
    /// Buttons in on-screen order.
    pub actions: &'a [DialogAction],
    /// Input widgets in positional order.
    pub fields: &'a [FieldDescriptor],
    /// Default-focused button.
    pub preferred: Option<usize>,
}

impl<'a> Modal<'a> {
    fn new(request: &'a DialogRequest) -> Self {
        Self {
            title: request.title(),
            message: request.message(),
            kind: request.kind(),
            shape: request.shape(),
            actions: request.actions(),
            fields: request.fields(),
            preferred: request.preferred(),
        }
    }
}

/// A host UI layer that can show a modal dialog.
///
/// The surface reports what the user does through the [`SelectionEvents`]
/// it was given, from whatever thread its UI runs on.
pub trait RenderingSurface: Send + Sync {
    /// Show `modal` on top of the current UI.
    ///
    /// # Errors
    /// Returns an error if the modal can't be shown; the resolver then
    /// forgets the request.
    fn present_modal(
        &self,
        handle: SurfaceHandle,
        modal: &Modal<'_>,
        events: SelectionEvents,
    ) -> Result<(), DialogError>;

    /// Current state of the field widget at `field_index`.
    fn field_value(&self, handle: SurfaceHandle, field_index: usize) -> FieldValue;

    /// Tear the modal down once it reached a terminal state.
    fn dismiss(&self, _handle: SurfaceHandle) {}
}

/// How a presented dialog ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A resolving action was picked.
    Resolved {
        /// Index of the picked action.
        action: usize,
        /// One input per field, in field order.
        inputs: Vec<Input>,
    },
    /// The dialog went away without resolving.
    Dismissed {
        /// Index of the picked action, or `None` if the host dismissed it.
        action: Option<usize>,
    },
}

/// Result channel for one presentation.
///
/// Dropping it is fine; the completion callback still runs.
#[derive(Debug)]
pub struct Presentation {
    handle: SurfaceHandle,
    rx: oneshot::Receiver<Outcome>,
}

impl Presentation {
    /// Handle the surface was given.
    #[must_use]
    pub const fn handle(&self) -> SurfaceHandle {
        self.handle
    }

    /// Wait for the dialog to reach a terminal state.
    ///
    /// # Errors
    /// Returns [`DialogError::Cancelled`] if the resolver was dropped first.
    pub async fn outcome(self) -> Result<Outcome, DialogError> {
        self.rx.await.map_err(|_| DialogError::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Unresolved,
    Resolving,
}

struct LiveDialog {
    handle: SurfaceHandle,
    phase: Phase,
    resolves: Vec<bool>,
    fields: Arc<[FieldDescriptor]>,
    completion: Option<Completion>,
    tx: oneshot::Sender<Outcome>,
}

#[derive(Default)]
struct Slot {
    next_id: u64,
    live: Option<LiveDialog>,
}

struct Shared {
    surface: Arc<dyn RenderingSurface>,
    slot: Mutex<Slot>,
}

impl Shared {
    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn select(&self, handle: SurfaceHandle, index: usize) -> bool {
        let mut slot = self.slot();
        let Some(live) = slot.live.as_mut() else {
            log::debug!("ignoring selection of action {index}: no live dialog");
            return false;
        };
        if live.handle != handle || live.phase != Phase::Unresolved {
            log::debug!("ignoring stale selection of action {index} on {handle:?}");
            return false;
        }
        let Some(&resolves) = live.resolves.get(index) else {
            log::warn!(
                "surface selected action {index} but only {} exist",
                live.resolves.len()
            );
            return false;
        };

        if !resolves {
            let Some(live) = slot.live.take() else {
                return false;
            };
            drop(slot);
            log::debug!("dialog {handle:?} dismissed by action {index}");
            self.surface.dismiss(handle);
            let _ = live.tx.send(Outcome::Dismissed { action: Some(index) });
            return true;
        }

        live.phase = Phase::Resolving;
        let fields = Arc::clone(&live.fields);
        drop(slot);

        let guard = ResolvingGuard {
            shared: self,
            handle,
            action: index,
        };
        let inputs: Vec<Input> = fields
            .iter()
            .enumerate()
            .map(|(i, field)| field.resolve(self.surface.field_value(handle, i)))
            .collect();
        std::mem::forget(guard);

        let Some(mut live) = self.slot().live.take() else {
            return false;
        };
        log::debug!(
            "dialog {handle:?} resolved by action {index} with {} input(s)",
            inputs.len()
        );
        self.surface.dismiss(handle);
        if let Some(completion) = live.completion.take() {
            completion(inputs.clone());
        }
        let _ = live.tx.send(Outcome::Resolved {
            action: index,
            inputs,
        });
        true
    }

    fn dismiss(&self, handle: Option<SurfaceHandle>) -> bool {
        let mut slot = self.slot();
        let matches = slot.live.as_ref().is_some_and(|live| {
            live.phase == Phase::Unresolved && handle.is_none_or(|h| h == live.handle)
        });
        if !matches {
            return false;
        }
        let Some(live) = slot.live.take() else {
            return false;
        };
        drop(slot);
        log::debug!("dialog {:?} dismissed by host", live.handle);
        self.surface.dismiss(live.handle);
        let _ = live.tx.send(Outcome::Dismissed { action: None });
        true
    }
}

/// Frees the slot if reading field values unwinds, so a panicking surface
/// can't leave the dialog stuck in `Resolving`.
struct ResolvingGuard<'a> {
    shared: &'a Shared,
    handle: SurfaceHandle,
    action: usize,
}

impl Drop for ResolvingGuard<'_> {
    fn drop(&mut self) {
        let live = {
            let mut slot = self.shared.slot();
            match slot.live.as_ref() {
                Some(live) if live.handle == self.handle && live.phase == Phase::Resolving => {
                    slot.live.take()
                }
                _ => None,
            }
        };
        if let Some(live) = live {
            log::warn!(
                "dialog {:?} dismissed: reading fields failed during resolution",
                self.handle
            );
            let _ = live.tx.send(Outcome::Dismissed {
                action: Some(self.action),
            });
        }
    }
}

/// Callback side of a presentation, handed to the surface.
///
/// Events for a dialog that already reached a terminal state are ignored,
/// so a surface may report as many selections as it likes.
#[derive(Clone)]
pub struct SelectionEvents {
    handle: SurfaceHandle,
    shared: Weak<Shared>,
}

impl SelectionEvents {
    /// Handle of the presentation these events belong to.
    #[must_use]
    pub const fn handle(&self) -> SurfaceHandle {
        self.handle
    }

    /// The user picked the action at `index`.
    ///
    /// Returns `true` if this moved the dialog to a terminal state.
    pub fn action_selected(&self, index: usize) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|shared| shared.select(self.handle, index))
    }

    /// The dialog was closed without picking an action.
    ///
    /// Returns `true` if this moved the dialog to a terminal state.
    pub fn dismissed(&self) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|shared| shared.dismiss(Some(self.handle)))
    }
}

impl std::fmt::Debug for SelectionEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionEvents")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

/// Presents dialog requests on a surface, one at a time.
#[derive(Clone)]
pub struct DialogResolver {
    shared: Arc<Shared>,
}

impl DialogResolver {
    /// Create a resolver drawing on `surface`.
    pub fn new<S>(surface: S) -> Self
    where
        S: RenderingSurface + 'static,
    {
        Self::with_surface(Arc::new(surface))
    }

    /// Create a resolver over a shared surface.
    #[must_use]
    pub fn with_surface(surface: Arc<dyn RenderingSurface>) -> Self {
        Self {
            shared: Arc::new(Shared {
                surface,
                slot: Mutex::new(Slot::default()),
            }),
        }
    }

    /// Show `request` and return immediately.
    ///
    /// The completion attached to the request runs once a resolving action
    /// is picked; the returned [`Presentation`] reports the outcome either way.
    ///
    /// # Errors
    /// - [`DialogError::PresentationConflict`] if another dialog is still live.
    ///   The live dialog is left untouched.
    /// - Any error from [`RenderingSurface::present_modal`].
    pub fn present(&self, mut request: DialogRequest) -> Result<Presentation, DialogError> {
        let completion = request.completion.take();
        let (tx, rx) = oneshot::channel();

        let handle = {
            let mut slot = self.shared.slot();
            if slot.live.is_some() {
                log::warn!("rejecting present: a dialog is already live");
                return Err(DialogError::PresentationConflict);
            }
            slot.next_id += 1;
            let handle = SurfaceHandle(slot.next_id);
            slot.live = Some(LiveDialog {
                handle,
                phase: Phase::Unresolved,
                resolves: request.actions().iter().map(|a| a.resolves).collect(),
                fields: request.fields().into(),
                completion,
                tx,
            });
            handle
        };

        let events = SelectionEvents {
            handle,
            shared: Arc::downgrade(&self.shared),
        };
        log::debug!(
            "presenting {handle:?} with {} action(s) and {} field(s)",
            request.actions().len(),
            request.fields().len()
        );
        if let Err(err) = self
            .shared
            .surface
            .present_modal(handle, &Modal::new(&request), events)
        {
            let mut slot = self.shared.slot();
            if slot.live.as_ref().is_some_and(|live| live.handle == handle) {
                slot.live = None;
            }
            return Err(err);
        }

        Ok(Presentation { handle, rx })
    }

    /// Whether a dialog is currently live.
    #[must_use]
    pub fn is_presenting(&self) -> bool {
        self.shared.slot().live.is_some()
    }

    /// Dismiss the live dialog without resolving it.
    ///
    /// Returns `false` if nothing was live or it is already resolving.
    pub fn dismiss(&self) -> bool {
        self.shared.dismiss(None)
    }
}

impl std::fmt::Debug for DialogResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogResolver")
            .field("presenting", &self.is_presenting())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActionRole, EnglishLabels, confirmation_dialog};

    #[derive(Default)]
    struct Recorder {
        shown: Mutex<Vec<(SurfaceHandle, usize)>>,
        dismissed: Mutex<Vec<SurfaceHandle>>,
        events: Mutex<Option<SelectionEvents>>,
    }

    impl RenderingSurface for Recorder {
        fn present_modal(
            &self,
            handle: SurfaceHandle,
            modal: &Modal<'_>,
            events: SelectionEvents,
        ) -> Result<(), DialogError> {
            self.shown.lock().unwrap().push((handle, modal.actions.len()));
            *self.events.lock().unwrap() = Some(events);
            Ok(())
        }

        fn field_value(&self, _: SurfaceHandle, _: usize) -> FieldValue {
            FieldValue::default()
        }

        fn dismiss(&self, handle: SurfaceHandle) {
            self.dismissed.lock().unwrap().push(handle);
        }
    }

    struct Faulty;

    impl RenderingSurface for Faulty {
        fn present_modal(
            &self,
            _: SurfaceHandle,
            _: &Modal<'_>,
            _: SelectionEvents,
        ) -> Result<(), DialogError> {
            Ok(())
        }

        fn field_value(&self, _: SurfaceHandle, _: usize) -> FieldValue {
            panic!("widget went away");
        }
    }

    struct Broken;

    impl RenderingSurface for Broken {
        fn present_modal(
            &self,
            _: SurfaceHandle,
            _: &Modal<'_>,
            _: SelectionEvents,
        ) -> Result<(), DialogError> {
            Err(DialogError::PlatformError("no window".into()))
        }

        fn field_value(&self, _: SurfaceHandle, _: usize) -> FieldValue {
            FieldValue::default()
        }
    }

    fn ok_request() -> DialogRequest {
        DialogRequest::builder()
            .action(DialogAction::new("OK", ActionRole::Neutral))
            .build()
            .unwrap()
    }

    #[test]
    fn handles_are_unique() {
        let surface = Arc::new(Recorder::default());
        let resolver = DialogResolver::with_surface(surface.clone());
        let first = resolver.present(ok_request()).unwrap();
        surface.events.lock().unwrap().as_ref().unwrap().action_selected(0);
        let second = resolver.present(ok_request()).unwrap();
        assert_ne!(first.handle(), second.handle());
        assert_eq!(surface.dismissed.lock().unwrap().as_slice(), &[first.handle()]);
    }

    #[test]
    fn surface_failure_frees_the_slot() {
        let resolver = DialogResolver::new(Broken);
        let err = resolver.present(ok_request()).unwrap_err();
        assert_eq!(err, DialogError::PlatformError("no window".into()));
        assert!(!resolver.is_presenting());
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let surface = Arc::new(Recorder::default());
        let resolver = DialogResolver::with_surface(surface.clone());
        resolver.present(ok_request()).unwrap();
        let events = surface.events.lock().unwrap().clone().unwrap();
        assert!(!events.action_selected(3));
        assert!(resolver.is_presenting());
        assert!(events.action_selected(0));
        assert!(!resolver.is_presenting());
    }

    #[test]
    fn host_dismissal_skips_completion() {
        let surface = Arc::new(Recorder::default());
        let resolver = DialogResolver::with_surface(surface.clone());
        let called = Arc::new(Mutex::new(false));
        let flag = called.clone();
        let request =
            confirmation_dialog(&EnglishLabels, "Delete", None, move || *flag.lock().unwrap() = true)
                .unwrap();
        let presentation = resolver.present(request).unwrap();
        assert!(resolver.dismiss());
        assert!(!resolver.dismiss());
        let outcome = futures::executor::block_on(presentation.outcome()).unwrap();
        assert_eq!(outcome, Outcome::Dismissed { action: None });
        assert!(!*called.lock().unwrap());
    }

    #[test]
    fn dropped_resolver_cancels_presentation() {
        let surface = Arc::new(Recorder::default());
        let resolver = DialogResolver::with_surface(surface.clone());
        let presentation = resolver.present(ok_request()).unwrap();
        drop(resolver);
        let events = surface.events.lock().unwrap().take().unwrap();
        assert!(!events.action_selected(0));
        let err = futures::executor::block_on(presentation.outcome()).unwrap_err();
        assert_eq!(err, DialogError::Cancelled);
    }

    #[test]
    fn panicking_field_read_frees_the_slot() {
        let resolver = DialogResolver::new(Faulty);
        let called = Arc::new(Mutex::new(false));
        let flag = called.clone();
        let request = DialogRequest::builder()
            .field(crate::FieldDescriptor::text())
            .action(DialogAction::new("Save", ActionRole::Neutral))
            .on_confirm(move || *flag.lock().unwrap() = true)
            .build()
            .unwrap();
        let presentation = resolver.present(request).unwrap();
        let events = SelectionEvents {
            handle: presentation.handle(),
            shared: Arc::downgrade(&resolver.shared),
        };

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            events.action_selected(0)
        }));
        assert!(result.is_err());
        assert!(!resolver.is_presenting());
        assert!(!*called.lock().unwrap());
        let outcome = futures::executor::block_on(presentation.outcome()).unwrap();
        assert_eq!(outcome, Outcome::Dismissed { action: Some(0) });

        assert!(resolver.present(ok_request()).is_ok());
    }
}
