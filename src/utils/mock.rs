//! In-memory `DataApi` used by the state tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use super::error::{AppError, AppResult};
use super::graphql::DataApi;
use super::search::UserFilter;
use super::types::{DirectChat, PageInfo, Tag, TagAncestor, TagPage, TagRef, TotalCount, User, UserListItem};

#[derive(Clone, PartialEq, Debug)]
pub enum Call {
    Users(UserFilter),
    DirectChats(String),
    SubTags { tag_id: String, after: Option<String> },
    Ancestors(String),
    CreateDirectChat { organization_id: String, user_ids: Vec<String> },
    CreateUserTag { name: String, organization_id: String, parent_tag_id: Option<String> },
}

#[derive(Default)]
pub struct MockApi {
    pub users: Vec<UserListItem>,
    pub chats: Vec<DirectChat>,
    pub names: HashMap<String, String>,
    pub children: HashMap<String, Vec<Tag>>,
    pub parents: HashMap<String, String>,
    pub fail_sub_tags: bool,
    pub fail_ancestors: bool,
    pub fail_more: bool,
    pub fail_create_tag: bool,
    pub fail_create_chat: bool,
    pub fail_users: bool,
    pub delay: Option<Duration>,
    pub calls: Mutex<Vec<Call>>,
}

pub fn user(id: &str, first: &str, last: &str) -> UserListItem {
    UserListItem {
        user: User {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            image: None,
        },
    }
}

pub fn tag(id: &str, name: &str, parent: &str, children: u64) -> Tag {
    Tag {
        id: id.to_string(),
        name: name.to_string(),
        parent_tag: Some(TagRef { id: parent.to_string() }),
        child_tags: TotalCount { total_count: children },
        users_assigned_to: TotalCount { total_count: 5 },
    }
}

fn mock_error() -> AppError {
    AppError::GraphQl("Mock Graphql Error".to_string())
}

impl MockApi {
    /// Organization `123`: tag `1` ("tag1") has fifteen sub tags; `subTag1`
    /// has two sub tags of its own.
    pub fn fixture() -> Self {
        let mut api = MockApi {
            users: vec![
                user("u1", "Ada", "Lovelace"),
                user("u2", "Grace", "Hopper"),
                user("u3", "Alan", "Turing"),
            ],
            ..Default::default()
        };
        api.names.insert("1".to_string(), "tag1".to_string());
        let tags = (1..=15)
            .map(|i| tag(&format!("subTag{}", i), &format!("subTag {}", i), "1", if i == 1 { 2 } else { 0 }))
            .collect::<Vec<_>>();
        for t in &tags {
            api.names.insert(t.id.clone(), t.name.clone());
            api.parents.insert(t.id.clone(), "1".to_string());
        }
        api.children.insert("1".to_string(), tags);
        let grandchildren = vec![
            tag("subTag1.1", "subTag 1.1", "subTag1", 0),
            tag("subTag1.2", "subTag 1.2", "subTag1", 0),
        ];
        for t in &grandchildren {
            api.names.insert(t.id.clone(), t.name.clone());
            api.parents.insert(t.id.clone(), "subTag1".to_string());
        }
        api.children.insert("subTag1".to_string(), grandchildren);
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(*c)).count()
    }

    async fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl DataApi for MockApi {
    async fn users(&self, filter: &UserFilter) -> AppResult<Vec<UserListItem>> {
        self.record(Call::Users(filter.clone())).await;
        if self.fail_users {
            return Err(mock_error());
        }
        let matches = |value: &str, fragment: &Option<String>| {
            fragment
                .as_ref()
                .map(|f| value.to_lowercase().contains(&f.to_lowercase()))
                .unwrap_or(true)
        };
        Ok(self
            .users
            .iter()
            .filter(|u| {
                matches(&u.user.first_name, &filter.first_name_contains)
                    && matches(&u.user.last_name, &filter.last_name_contains)
            })
            .cloned()
            .collect())
    }

    async fn direct_chats_by_user(&self, user_id: &str) -> AppResult<Vec<DirectChat>> {
        self.record(Call::DirectChats(user_id.to_string())).await;
        Ok(self.chats.clone())
    }

    async fn sub_tags(&self, tag_id: &str, first: u32, after: Option<&str>) -> AppResult<TagPage> {
        self.record(Call::SubTags {
            tag_id: tag_id.to_string(),
            after: after.map(str::to_string),
        })
        .await;
        if self.fail_sub_tags || (self.fail_more && after.is_some()) {
            return Err(mock_error());
        }
        let tag_name = self
            .names
            .get(tag_id)
            .cloned()
            .ok_or_else(|| AppError::GraphQl("Tag not found".to_string()))?;
        let all = self.children.get(tag_id).cloned().unwrap_or_default();
        let start = match after {
            Some(cursor) => all.iter().position(|t| t.id == cursor).map(|p| p + 1).unwrap_or(all.len()),
            None => 0,
        };
        let tags = all.iter().skip(start).take(first as usize).cloned().collect::<Vec<_>>();
        let has_next_page = start + tags.len() < all.len();
        Ok(TagPage {
            tag_name,
            page_info: PageInfo {
                start_cursor: tags.first().map(|t| t.id.clone()),
                end_cursor: tags.last().map(|t| t.id.clone()),
                has_next_page,
                has_previous_page: start > 0,
            },
            tags,
            total_count: all.len() as u64,
        })
    }

    async fn tag_ancestors(&self, tag_id: &str) -> AppResult<Vec<TagAncestor>> {
        self.record(Call::Ancestors(tag_id.to_string())).await;
        if self.fail_ancestors {
            return Err(mock_error());
        }
        let mut chain = Vec::new();
        let mut current = Some(tag_id.to_string());
        while let Some(id) = current {
            let name = self
                .names
                .get(&id)
                .cloned()
                .ok_or_else(|| AppError::GraphQl("Tag not found".to_string()))?;
            current = self.parents.get(&id).cloned();
            chain.push(TagAncestor { id, name });
        }
        chain.reverse();
        Ok(chain)
    }

    async fn create_direct_chat(&self, organization_id: &str, user_ids: &[String]) -> AppResult<String> {
        self.record(Call::CreateDirectChat {
            organization_id: organization_id.to_string(),
            user_ids: user_ids.to_vec(),
        })
        .await;
        if self.fail_create_chat {
            return Err(mock_error());
        }
        Ok("chat1".to_string())
    }

    async fn create_user_tag(
        &self,
        name: &str,
        organization_id: &str,
        parent_tag_id: Option<&str>,
    ) -> AppResult<String> {
        self.record(Call::CreateUserTag {
            name: name.to_string(),
            organization_id: organization_id.to_string(),
            parent_tag_id: parent_tag_id.map(str::to_string),
        })
        .await;
        if self.fail_create_tag {
            return Err(mock_error());
        }
        Ok("newTag".to_string())
    }
}
