use regex::Regex;

/// Screens reachable inside the app. Each one is addressed by a path that
/// carries the organization id and, where relevant, the tag id.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AppRoute {
    Home,
    OrgTags { org_id: String },
    SubTags { org_id: String, tag_id: String },
    ManageTag { org_id: String, tag_id: String },
    Chat { org_id: String },
}

impl AppRoute {
    pub fn org_id(&self) -> Option<&str> {
        match self {
            AppRoute::Home => None,
            AppRoute::OrgTags { org_id }
            | AppRoute::SubTags { org_id, .. }
            | AppRoute::ManageTag { org_id, .. }
            | AppRoute::Chat { org_id } => Some(org_id.as_str()),
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::OrgTags { org_id } => format!("/orgtags/{}", org_id),
            AppRoute::SubTags { org_id, tag_id } => format!("/orgtags/{}/subTags/{}", org_id, tag_id),
            AppRoute::ManageTag { org_id, tag_id } => {
                format!("/orgtags/{}/manageTag/{}", org_id, tag_id)
            }
            AppRoute::Chat { org_id } => format!("/user/chat/{}", org_id),
        }
    }

    /// Parses a path. Segment names are matched case-insensitively and a
    /// trailing slash is accepted.
    pub fn parse(path: &str) -> Option<Self> {
        if path.trim() == "/" {
            return Some(AppRoute::Home);
        }
        let re = Regex::new(
            r"(?i)^/(?:orgtags/(?P<org>[^/]+)(?:/(?P<kind>subtags|managetag)/(?P<tag>[^/]+))?|user/chat/(?P<chat_org>[^/]+))/?$",
        )
        .ok()?;
        let captures = re.captures(path.trim())?;

        if let Some(org) = captures.name("chat_org") {
            return Some(AppRoute::Chat {
                org_id: org.as_str().to_string(),
            });
        }

        let org_id = captures.name("org")?.as_str().to_string();
        match (captures.name("kind"), captures.name("tag")) {
            (Some(kind), Some(tag)) => {
                let tag_id = tag.as_str().to_string();
                if kind.as_str().eq_ignore_ascii_case("subtags") {
                    Some(AppRoute::SubTags { org_id, tag_id })
                } else {
                    Some(AppRoute::ManageTag { org_id, tag_id })
                }
            }
            _ => Some(AppRoute::OrgTags { org_id }),
        }
    }
}
