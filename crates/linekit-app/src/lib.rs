//! LineKit Application
//!
//! The native application shell: windowing, input translation and
//! presentation of the editor's scene.

mod app;
mod shortcuts;

pub use app::{App, AppConfig, AppError};
pub use shortcuts::{Shortcut, ShortcutRegistry};
