use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Row shape of the `users` connection query.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserListItem {
    pub user: User,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DirectChat {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub users: Vec<User>,
}

impl DirectChat {
    /// The participant that is not `me`, falling back to the first user.
    pub fn counterpart(&self, me: Option<&str>) -> Option<&User> {
        self.users
            .iter()
            .find(|u| Some(u.id.as_str()) != me)
            .or_else(|| self.users.first())
    }
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    #[serde(default)]
    pub total_count: u64,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TagRef {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_tag: Option<TagRef>,
    #[serde(default)]
    pub child_tags: TotalCount,
    #[serde(default)]
    pub users_assigned_to: TotalCount,
}

impl Tag {
    pub fn child_tag_count(&self) -> u64 {
        self.child_tags.total_count
    }

    pub fn assigned_user_count(&self) -> u64 {
        self.users_assigned_to.total_count
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TagAncestor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub start_cursor: Option<String>,
    #[serde(default)]
    pub end_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub has_previous_page: bool,
}

/// One page of child tags plus the name of the tag they belong to.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TagPage {
    pub tag_name: String,
    pub tags: Vec<Tag>,
    pub page_info: PageInfo,
    pub total_count: u64,
}
