//! Walks through an alert, a confirmation and a follow-up result dialog.

use promptkit_dialog::{
    EnglishLabels, Outcome, alert, confirmation_dialog, error_dialog, sys::show,
};

/// Run the demo on the native desktop surface.
pub async fn run() {
    println!("Running Dialog Demo...");

    let hello = Some("Hello from shared crate!".to_string());
    if let Ok(request) = alert(&EnglishLabels, "Demo", hello, || {}) {
        let _ = show(request).await;
    }

    let context = Some("Do you accept?".to_string());
    let confirmed = match confirmation_dialog(&EnglishLabels, "Accept", context, || {
        println!("Confirmed");
    }) {
        Ok(request) => matches!(show(request).await, Ok(Outcome::Resolved { .. })),
        Err(_) => false,
    };

    let result = if confirmed {
        alert(&EnglishLabels, "Result", Some("Accepted!".into()), || {})
    } else {
        error_dialog(&EnglishLabels, Some("Result".into()), "Declined!", None)
    };
    if let Ok(request) = result {
        let _ = show(request).await;
    }
}
