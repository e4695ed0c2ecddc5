//! egui front end: the editor view, menus, status bar, and native dialogs.

pub mod app;
pub mod dialogs;
pub mod editor;

pub use app::{App, StartupArgs};
pub use dialogs::Dialogs;
