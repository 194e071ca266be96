mod contacts;
mod create_direct_chat;

pub use contacts::Contacts;
pub use create_direct_chat::CreateDirectChat;
