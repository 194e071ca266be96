mod chat;
mod common;
mod header;
mod tags;

pub use chat::Contacts;
pub use common::Toasts;
pub use header::{Header, Home};
pub use tags::{ExternalScreen, SubTags};
