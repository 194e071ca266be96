mod error_panel;
mod loader;
mod modal;
mod toasts;

pub use error_panel::ErrorPanel;
pub use loader::Loader;
pub use modal::Modal;
pub use toasts::{push_toast, Toasts};
