// Library crate: exposes the panel logic for integration tests and scripting.
// egui painting (app, ui) stays in the binary crate.

pub mod bus;
pub mod command;
pub mod format;
pub mod harness;
pub mod i18n;
pub mod report;
pub mod snapshot;
pub mod state;
pub mod view;
