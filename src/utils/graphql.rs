use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use super::error::{AppError, AppResult};
use super::search::UserFilter;
use super::types::{DirectChat, PageInfo, Tag, TagAncestor, TagPage, UserListItem};

// ============================================================================
// Operations
// ============================================================================

pub const USERS_CONNECTION_LIST: &str = r#"
query UsersConnectionList($firstName_contains: String, $lastName_contains: String) {
  users(where: { firstName_contains: $firstName_contains, lastName_contains: $lastName_contains }) {
    user {
      _id
      firstName
      lastName
      email
      image
    }
  }
}"#;

pub const DIRECT_CHATS_BY_USER_ID: &str = r#"
query DirectChatsByUserID($id: ID!) {
  directChatsByUserID(id: $id) {
    _id
    users {
      _id
      firstName
      lastName
      email
      image
    }
  }
}"#;

pub const USER_TAG_SUB_TAGS: &str = r#"
query GetUserTagSubTags($id: ID!, $after: String, $first: PositiveInt) {
  getUserTag(id: $id) {
    name
    childTags(after: $after, first: $first) {
      edges {
        node {
          _id
          name
          parentTag { _id }
          usersAssignedTo(first: $first) { totalCount }
          childTags(first: $first) { totalCount }
        }
        cursor
      }
      pageInfo {
        startCursor
        endCursor
        hasNextPage
        hasPreviousPage
      }
      totalCount
    }
  }
}"#;

pub const USER_TAG_ANCESTORS: &str = r#"
query GetUserTagAncestors($id: ID!) {
  getUserTagAncestors(id: $id) {
    _id
    name
  }
}"#;

pub const CREATE_DIRECT_CHAT: &str = r#"
mutation CreateDirectChat($userIds: [ID!]!, $organizationId: ID) {
  createDirectChat(data: { userIds: $userIds, organizationId: $organizationId }) {
    _id
  }
}"#;

pub const CREATE_USER_TAG: &str = r#"
mutation CreateUserTag($name: String!, $organizationId: ID!, $parentTagId: ID) {
  createUserTag(input: { name: $name, organizationId: $organizationId, parentTagId: $parentTagId }) {
    _id
  }
}"#;

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct UsersData {
    users: Vec<UserListItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DirectChatsData {
    #[serde(rename = "directChatsByUserID")]
    direct_chats: Vec<DirectChat>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubTagsData {
    get_user_tag: Option<UserTagNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserTagNode {
    name: String,
    child_tags: TagConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TagConnection {
    edges: Vec<TagEdge>,
    page_info: PageInfo,
    #[serde(default)]
    total_count: u64,
}

#[derive(Debug, Deserialize)]
struct TagEdge {
    node: Tag,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AncestorsData {
    get_user_tag_ancestors: Vec<TagAncestor>,
}

#[derive(Debug, Deserialize)]
struct IdOnly {
    #[serde(rename = "_id")]
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateDirectChatData {
    create_direct_chat: IdOnly,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateUserTagData {
    create_user_tag: Option<IdOnly>,
}

// ============================================================================
// Data API
// ============================================================================

/// The remote operations the screens depend on.
#[async_trait]
pub trait DataApi: Send + Sync {
    async fn users(&self, filter: &UserFilter) -> AppResult<Vec<UserListItem>>;

    async fn direct_chats_by_user(&self, user_id: &str) -> AppResult<Vec<DirectChat>>;

    async fn sub_tags(&self, tag_id: &str, first: u32, after: Option<&str>) -> AppResult<TagPage>;

    async fn tag_ancestors(&self, tag_id: &str) -> AppResult<Vec<TagAncestor>>;

    /// Returns the id of the new chat.
    async fn create_direct_chat(&self, organization_id: &str, user_ids: &[String]) -> AppResult<String>;

    /// Returns the id of the new tag.
    async fn create_user_tag(
        &self,
        name: &str,
        organization_id: &str,
        parent_tag_id: Option<&str>,
    ) -> AppResult<String>;
}

// ============================================================================
// GraphQL Client
// ============================================================================

#[derive(Clone)]
pub struct GraphQlClient {
    client: Client,
    endpoint: Arc<String>,
    token: Option<Arc<String>>,
}

impl PartialEq for GraphQlClient {
    fn eq(&self, other: &Self) -> bool {
        self.endpoint == other.endpoint && self.token == other.token
    }
}

impl GraphQlClient {
    pub fn new(endpoint: String, token: Option<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| AppError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: Arc::new(endpoint),
            token: token.map(Arc::new),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute<T: DeserializeOwned>(&self, operation: &str, query: &str, variables: Value) -> AppResult<T> {
        tracing::debug!(operation, endpoint = %self.endpoint, "sending graphql request");

        let mut request = self
            .client
            .post(self.endpoint.as_str())
            .json(&GraphQlRequest { query, variables });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.as_str());
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(operation, %status, "graphql request rejected");
            return Err(AppError::Status {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body: GraphQlResponse<T> = response.json().await?;
        decode_response(operation, body)
    }
}

fn decode_response<T>(operation: &str, body: GraphQlResponse<T>) -> AppResult<T> {
    if !body.errors.is_empty() {
        let message = body
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        tracing::warn!(operation, %message, "graphql operation returned errors");
        return Err(AppError::GraphQl(message));
    }
    body.data
        .ok_or_else(|| AppError::Decode(format!("{} returned no data", operation)))
}

#[async_trait]
impl DataApi for GraphQlClient {
    async fn users(&self, filter: &UserFilter) -> AppResult<Vec<UserListItem>> {
        let variables = serde_json::to_value(filter)?;
        let data: UsersData = self.execute("users", USERS_CONNECTION_LIST, variables).await?;
        Ok(data.users)
    }

    async fn direct_chats_by_user(&self, user_id: &str) -> AppResult<Vec<DirectChat>> {
        let data: DirectChatsData = self
            .execute("directChatsByUserID", DIRECT_CHATS_BY_USER_ID, json!({ "id": user_id }))
            .await?;
        Ok(data.direct_chats)
    }

    async fn sub_tags(&self, tag_id: &str, first: u32, after: Option<&str>) -> AppResult<TagPage> {
        let variables = json!({ "id": tag_id, "first": first, "after": after });
        let data: SubTagsData = self.execute("getUserTag", USER_TAG_SUB_TAGS, variables).await?;
        into_tag_page(data)
    }

    async fn tag_ancestors(&self, tag_id: &str) -> AppResult<Vec<TagAncestor>> {
        let data: AncestorsData = self
            .execute("getUserTagAncestors", USER_TAG_ANCESTORS, json!({ "id": tag_id }))
            .await?;
        Ok(data.get_user_tag_ancestors)
    }

    async fn create_direct_chat(&self, organization_id: &str, user_ids: &[String]) -> AppResult<String> {
        let variables = json!({ "organizationId": organization_id, "userIds": user_ids });
        let data: CreateDirectChatData = self
            .execute("createDirectChat", CREATE_DIRECT_CHAT, variables)
            .await?;
        Ok(data.create_direct_chat.id)
    }

    async fn create_user_tag(
        &self,
        name: &str,
        organization_id: &str,
        parent_tag_id: Option<&str>,
    ) -> AppResult<String> {
        let variables = json!({
            "name": name,
            "organizationId": organization_id,
            "parentTagId": parent_tag_id,
        });
        let data: CreateUserTagData = self
            .execute("createUserTag", CREATE_USER_TAG, variables)
            .await?;
        data.create_user_tag
            .map(|tag| tag.id)
            .ok_or_else(|| AppError::Decode("createUserTag returned no tag".to_string()))
    }
}

fn into_tag_page(data: SubTagsData) -> AppResult<TagPage> {
    let tag = data
        .get_user_tag
        .ok_or_else(|| AppError::GraphQl("Tag not found".to_string()))?;
    Ok(TagPage {
        tag_name: tag.name,
        tags: tag.child_tags.edges.into_iter().map(|edge| edge.node).collect(),
        page_info: tag.child_tags.page_info,
        total_count: tag.child_tags.total_count,
    })
}
