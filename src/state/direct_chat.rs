use std::sync::Arc;

use crate::utils::{AppError, AppResult, DataApi, DirectChat, InFlight, Notice, Session, UserFilter, UserListItem};

#[derive(Clone, PartialEq, Debug)]
pub enum UsersState {
    Loading,
    Loaded(Vec<UserListItem>),
    Errored(AppError),
}

/// What the modal should do once a create-chat request has settled.
#[derive(Clone, PartialEq, Debug)]
pub struct ChatCreation {
    pub close_modal: bool,
    pub refetch_contacts: bool,
    pub notice: Option<Notice>,
}

/// User picker behind the "new chat" modal.
#[derive(Clone, PartialEq, Debug)]
pub struct DirectChatCreator {
    search: String,
    filter: UserFilter,
    users: UsersState,
    generation: u64,
    pending_user: Option<String>,
}

impl Default for DirectChatCreator {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: UserFilter::default(),
            users: UsersState::Loading,
            generation: 0,
            pending_user: None,
        }
    }
}

impl DirectChatCreator {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn users(&self) -> &UsersState {
        &self.users
    }

    pub fn pending_user(&self) -> Option<&str> {
        self.pending_user.as_deref()
    }

    /// The modal cannot be dismissed while a chat is being created.
    pub fn is_closable(&self) -> bool {
        self.pending_user.is_none()
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Turns the typed text into a new filter and starts a reload.
    pub fn submit_search(&mut self) -> (u64, UserFilter) {
        self.filter = UserFilter::from_search(&self.search);
        self.users = UsersState::Loading;
        self.generation += 1;
        (self.generation, self.filter.clone())
    }

    /// Takes a user list for the current search. A list for an older
    /// generation is still accepted while loading the same filter, since
    /// the newer request may have been deduplicated against it.
    pub fn apply_users(
        &mut self,
        generation: u64,
        filter: &UserFilter,
        result: AppResult<Vec<UserListItem>>,
    ) -> bool {
        let current = generation == self.generation
            || (self.users == UsersState::Loading && *filter == self.filter);
        if !current {
            return false;
        }
        self.users = match result {
            Ok(users) => UsersState::Loaded(users),
            Err(e) => UsersState::Errored(e),
        };
        true
    }

    /// Participant ids for a chat with `user_id`, current user first.
    pub fn begin_create(&mut self, session: &Session, user_id: &str) -> AppResult<Vec<String>> {
        let me = session.current_user_id().ok_or(AppError::MissingCurrentUser)?;
        if self.pending_user.is_some() {
            return Err(AppError::Busy("Chat creation"));
        }
        self.pending_user = Some(user_id.to_string());
        Ok(vec![me.to_string(), user_id.to_string()])
    }

    pub fn finish_create(&mut self, result: &AppResult<String>) -> ChatCreation {
        self.pending_user = None;
        match result {
            Ok(_) => ChatCreation {
                close_modal: true,
                refetch_contacts: true,
                notice: None,
            },
            Err(e) => ChatCreation {
                close_modal: false,
                refetch_contacts: false,
                notice: Some(Notice::Error(e.to_string())),
            },
        }
    }
}

/// Error notice for a refused `begin_create`.
pub fn creation_refused(err: &AppError) -> Notice {
    match err {
        AppError::MissingCurrentUser => Notice::error_key("noSignedInUser"),
        other => Notice::Error(other.to_string()),
    }
}

#[derive(Clone)]
pub struct DirectChatController {
    api: Arc<dyn DataApi>,
    inflight: InFlight,
}

impl DirectChatController {
    pub fn new(api: Arc<dyn DataApi>, inflight: InFlight) -> Self {
        Self { api, inflight }
    }

    pub async fn users(&self, filter: &UserFilter) -> Option<AppResult<Vec<UserListItem>>> {
        let _guard = self.inflight.try_acquire(filter.cache_key())?;
        let result = self.api.users(filter).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "user list query failed");
        }
        Some(result)
    }

    pub async fn contacts(&self, session: &Session) -> AppResult<Vec<DirectChat>> {
        let me = session.current_user_id().ok_or(AppError::MissingCurrentUser)?;
        self.api.direct_chats_by_user(me).await
    }

    /// `None` when a chat with the same user is already being created.
    pub async fn create_chat(&self, organization_id: &str, user_ids: &[String]) -> Option<AppResult<String>> {
        let other = user_ids.last().map(String::as_str).unwrap_or("");
        let _guard = self.inflight.try_acquire(format!("createDirectChat:{}", other))?;
        let result = self.api.create_direct_chat(organization_id, user_ids).await;
        match &result {
            Ok(chat_id) => {
                tracing::info!("direct chat created");
                tracing::debug!(%chat_id, organization_id, "direct chat details");
            }
            Err(e) => tracing::warn!(error = %e, "direct chat creation failed"),
        }
        Some(result)
    }
}
