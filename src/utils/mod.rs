mod error;
mod graphql;
mod i18n;
mod inflight;
mod routes;
mod search;
mod session;
mod settings;
mod toast;
mod types;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, AppResult};
pub use graphql::{DataApi, GraphQlClient};
pub use i18n::t;
pub use inflight::InFlight;
pub use routes::AppRoute;
pub use search::UserFilter;
pub use session::Session;
pub use settings::Settings;
pub use toast::{Notice, ToastKind, ToastQueue};
pub use types::{DirectChat, PageInfo, Tag, TagAncestor, TagPage, UserListItem};
