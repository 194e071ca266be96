use serde::Serialize;

/// Name filter for the `users` query. A `None` field is left out of the
/// request entirely, so it never restricts the result.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct UserFilter {
    #[serde(rename = "firstName_contains", skip_serializing_if = "Option::is_none")]
    pub first_name_contains: Option<String>,
    #[serde(rename = "lastName_contains", skip_serializing_if = "Option::is_none")]
    pub last_name_contains: Option<String>,
}

impl UserFilter {
    /// Splits free search text into first/last name fragments.
    /// Words past the second are ignored.
    pub fn from_search(text: &str) -> Self {
        let mut words = text.split_whitespace();
        let first = words.next().map(str::to_string);
        let last = words.next().map(str::to_string);
        Self {
            first_name_contains: first,
            last_name_contains: last,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_name_contains.is_none() && self.last_name_contains.is_none()
    }

    /// Stable key for the in-flight registry.
    pub fn cache_key(&self) -> String {
        format!(
            "users:{}:{}",
            self.first_name_contains.as_deref().unwrap_or(""),
            self.last_name_contains.as_deref().unwrap_or("")
        )
    }
}
