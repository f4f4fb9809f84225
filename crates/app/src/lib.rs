//! Navigation controller for the catalogue client
//!
//! Drives the gateway, the list pipeline and the view renderer. Front ends
//! (terminal, web) supply a [`Prompter`] and render whatever screen the
//! controller ends up on.

#![allow(clippy::missing_errors_doc, reason = "Errors surface as status messages")]
#![allow(missing_debug_implementations, reason = "Controller wraps a client")]

mod controller;
mod prompter;

pub use controller::Controller;
pub use prompter::{PresetPrompter, Prompter};
