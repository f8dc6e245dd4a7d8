//! # Promptkit
//!
//! Alerts, confirmations and field prompts described as plain data, plus the
//! protocol that resolves the user's choice into typed values. The host UI
//! supplies the rendering surface; a native desktop surface ships with the
//! `dialog` crate.
//!
//! ## Features
//!
//! - `dialog`: Dialog requests, convenience builders and the resolver.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! promptkit = { version = "0.1", features = ["dialog"] }
//! ```
//!
//! ```rust
//! # #[cfg(feature = "dialog")]
//! # fn demo() {
//! use promptkit::dialog::{EnglishLabels, confirmation_dialog};
//!
//! let request = confirmation_dialog(&EnglishLabels, "Delete", Some("This item".into()), || {
//!     println!("Deleted");
//! })
//! .unwrap();
//! assert_eq!(request.actions().len(), 2);
//! # }
//! ```

#[cfg(feature = "dialog")]
pub use promptkit_dialog as dialog;
