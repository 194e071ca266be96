mod direct_chat;
mod sub_tags;

pub use direct_chat::{creation_refused, DirectChatController, DirectChatCreator, UsersState};
pub use sub_tags::{breadcrumbs, AddSubTagForm, SubTagsController, SubTagsScreen, SubTagsState};

use crate::utils::{DataApi, InFlight, Settings};
use std::sync::Arc;

/// Shared handles every screen needs, provided once as context.
#[derive(Clone)]
pub struct Services {
    pub api: Arc<dyn DataApi>,
    pub inflight: InFlight,
    pub settings: Settings,
}

impl Services {
    pub fn new(api: Arc<dyn DataApi>, settings: Settings) -> Self {
        Self {
            api,
            inflight: InFlight::new(),
            settings,
        }
    }

    pub fn sub_tags(&self) -> SubTagsController {
        SubTagsController::new(self.api.clone(), self.inflight.clone(), self.settings.tags_page_size)
    }

    pub fn direct_chat(&self) -> DirectChatController {
        DirectChatController::new(self.api.clone(), self.inflight.clone())
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.api, &other.api) && self.inflight == other.inflight && self.settings == other.settings
    }
}
