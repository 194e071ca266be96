use std::sync::Arc;

use crate::utils::{
    AppError, AppResult, AppRoute, DataApi, InFlight, Notice, PageInfo, Tag, TagAncestor, TagPage,
};

// ============================================================================
// Screen State
// ============================================================================

#[derive(Clone, PartialEq, Debug)]
pub struct LoadedSubTags {
    pub tag_name: String,
    pub tags: Vec<Tag>,
    pub ancestors: Vec<TagAncestor>,
    pub page_info: PageInfo,
    pub total_count: u64,
}

impl LoadedSubTags {
    /// A next page exists and the server gave a cursor to ask for it.
    pub fn has_more(&self) -> bool {
        self.page_info.has_next_page && self.page_info.end_cursor.is_some()
    }

    /// Appends a page after the rows already shown. Existing rows keep
    /// their order.
    pub fn append_page(&mut self, page: TagPage) {
        self.tags.extend(page.tags);
        self.page_info.end_cursor = page.page_info.end_cursor.or(self.page_info.end_cursor.take());
        self.page_info.has_next_page = page.page_info.has_next_page;
        self.total_count = page.total_count;
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum SubTagsState {
    Loading,
    Loaded(LoadedSubTags),
    ErroredSubTags(AppError),
    ErroredAncestors(AppError),
}

impl SubTagsState {
    /// Combines the two initial queries. A failed children query wins over
    /// a failed ancestors query; no partial data is kept.
    pub fn from_results(children: AppResult<TagPage>, ancestors: AppResult<Vec<TagAncestor>>) -> Self {
        match (children, ancestors) {
            (Err(e), _) => SubTagsState::ErroredSubTags(e),
            (Ok(_), Err(e)) => SubTagsState::ErroredAncestors(e),
            (Ok(page), Ok(ancestors)) => SubTagsState::Loaded(LoadedSubTags {
                tag_name: page.tag_name,
                tags: page.tags,
                ancestors,
                page_info: page.page_info,
                total_count: page.total_count,
            }),
        }
    }

    pub fn loaded(&self) -> Option<&LoadedSubTags> {
        match self {
            SubTagsState::Loaded(loaded) => Some(loaded),
            _ => None,
        }
    }
}

/// Ticket for a scroll-triggered page fetch.
#[derive(Clone, PartialEq, Debug)]
pub struct FetchMore {
    pub generation: u64,
    pub tag_id: String,
    pub after: String,
}

/// Sub-tags screen for one tag at a time.
///
/// Every navigation or refresh bumps `generation`; results carrying an
/// older generation belong to a superseded request and are dropped.
#[derive(Clone, PartialEq, Debug)]
pub struct SubTagsScreen {
    tag_id: String,
    generation: u64,
    state: SubTagsState,
    fetching_more: bool,
}

impl SubTagsScreen {
    pub fn new(tag_id: impl Into<String>) -> Self {
        Self {
            tag_id: tag_id.into(),
            generation: 0,
            state: SubTagsState::Loading,
            fetching_more: false,
        }
    }

    pub fn tag_id(&self) -> &str {
        &self.tag_id
    }

    pub fn state(&self) -> &SubTagsState {
        &self.state
    }

    pub fn is_fetching_more(&self) -> bool {
        self.fetching_more
    }

    /// Switches to another tag, discarding the current page.
    pub fn navigate(&mut self, tag_id: impl Into<String>) -> u64 {
        self.tag_id = tag_id.into();
        self.state = SubTagsState::Loading;
        self.fetching_more = false;
        self.generation += 1;
        self.generation
    }

    /// Starts a reload of `tag_id` without blanking the list. `None` when
    /// the screen has moved on to another tag.
    pub fn refresh(&mut self, tag_id: &str) -> Option<u64> {
        if tag_id != self.tag_id {
            return None;
        }
        self.fetching_more = false;
        self.generation += 1;
        Some(self.generation)
    }

    /// Returns false when the result was stale and ignored. Results for
    /// another tag are always dropped. A result for the current tag is
    /// still taken while the screen is loading, since the request that
    /// carried the newer generation may have been deduplicated against it.
    pub fn apply_load(&mut self, tag_id: &str, generation: u64, state: SubTagsState) -> bool {
        let current = tag_id == self.tag_id
            && (generation == self.generation || self.state == SubTagsState::Loading);
        if !current {
            tracing::debug!(tag_id, generation, current = self.generation, "dropping stale sub tags load");
            return false;
        }
        self.state = state;
        true
    }

    /// Whether another page can be requested right now.
    pub fn can_fetch_more(&self) -> bool {
        !self.fetching_more && self.state.loaded().is_some_and(LoadedSubTags::has_more)
    }

    /// `None` unless the list is loaded, more pages exist and no page
    /// fetch is already running.
    pub fn begin_fetch_more(&mut self) -> Option<FetchMore> {
        if !self.can_fetch_more() {
            return None;
        }
        let after = self.state.loaded()?.page_info.end_cursor.clone()?;
        let ticket = FetchMore {
            generation: self.generation,
            tag_id: self.tag_id.clone(),
            after,
        };
        self.fetching_more = true;
        Some(ticket)
    }

    /// Clears the fetching flag when the page request was skipped.
    pub fn release_fetch_more(&mut self, ticket: &FetchMore) {
        if ticket.generation == self.generation {
            self.fetching_more = false;
        }
    }

    /// Applies a fetched page. A failed page keeps the rows already shown
    /// and yields an error notice.
    pub fn apply_more(&mut self, ticket: &FetchMore, result: AppResult<TagPage>) -> Option<Notice> {
        if ticket.generation != self.generation {
            return None;
        }
        self.fetching_more = false;
        match (result, &mut self.state) {
            (Ok(page), SubTagsState::Loaded(loaded)) => {
                loaded.append_page(page);
                None
            }
            (Ok(_), _) => None,
            (Err(e), _) => Some(Notice::Error(e.to_string())),
        }
    }
}

// ============================================================================
// Breadcrumbs
// ============================================================================

#[derive(Clone, PartialEq, Debug)]
pub struct Crumb {
    pub label: String,
    pub route: AppRoute,
    pub is_current: bool,
}

/// "All tags" root link followed by the ancestor chain, root first. The
/// last ancestor is the current tag.
pub fn breadcrumbs(org_id: &str, ancestors: &[TagAncestor]) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: crate::utils::t("allTags"),
        route: AppRoute::OrgTags {
            org_id: org_id.to_string(),
        },
        is_current: false,
    }];
    let last = ancestors.len().saturating_sub(1);
    crumbs.extend(ancestors.iter().enumerate().map(|(i, ancestor)| Crumb {
        label: ancestor.name.clone(),
        route: AppRoute::SubTags {
            org_id: org_id.to_string(),
            tag_id: ancestor.id.clone(),
        },
        is_current: i == last,
    }));
    crumbs
}

// ============================================================================
// Add Sub Tag Modal
// ============================================================================

#[derive(Clone, PartialEq, Debug, Default)]
pub struct AddSubTagForm {
    open: bool,
    name: String,
    submitting: bool,
}

impl AddSubTagForm {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_closable(&self) -> bool {
        self.open && !self.submitting
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the modal unless a submission is still running.
    pub fn close(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.open = false;
        self.name.clear();
        true
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Validates the name and marks the form as submitting. Returns the
    /// trimmed name to send.
    pub fn begin_submit(&mut self) -> AppResult<String> {
        if self.submitting {
            return Err(AppError::Busy("Tag creation"));
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyTagName);
        }
        self.submitting = true;
        Ok(name.to_string())
    }

    /// Ends a submission that never reached the server.
    pub fn abort_submit(&mut self) {
        self.submitting = false;
    }

    /// Ends a submission. The modal stays open either way; a success
    /// clears the typed name.
    pub fn finish_submit(&mut self, result: &AppResult<String>) -> Notice {
        self.submitting = false;
        match result {
            Ok(_) => {
                self.name.clear();
                Notice::Success("tagCreationSuccess")
            }
            Err(e) => Notice::Error(e.to_string()),
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Runs the sub-tags queries and mutations, one in-flight request per key.
#[derive(Clone)]
pub struct SubTagsController {
    api: Arc<dyn DataApi>,
    inflight: InFlight,
    page_size: u32,
}

impl SubTagsController {
    pub fn new(api: Arc<dyn DataApi>, inflight: InFlight, page_size: u32) -> Self {
        Self {
            api,
            inflight,
            page_size,
        }
    }

    /// Fetches the first page of children and the ancestor chain together.
    /// `None` when the same load is already running.
    pub async fn load(&self, tag_id: &str) -> Option<SubTagsState> {
        let _children_guard = self.inflight.try_acquire(format!("subTags:{}:", tag_id))?;
        let _ancestors_guard = self.inflight.try_acquire(format!("ancestors:{}", tag_id))?;

        tracing::debug!(tag_id, "loading sub tags");
        let (children, ancestors) = futures::join!(
            self.api.sub_tags(tag_id, self.page_size, None),
            self.api.tag_ancestors(tag_id),
        );
        if let Err(e) = &children {
            tracing::warn!(tag_id, error = %e, "sub tags query failed");
        }
        if let Err(e) = &ancestors {
            tracing::warn!(tag_id, error = %e, "tag ancestors query failed");
        }
        Some(SubTagsState::from_results(children, ancestors))
    }

    /// `None` when a fetch for the same cursor is already running.
    pub async fn fetch_more(&self, ticket: &FetchMore) -> Option<AppResult<TagPage>> {
        let key = format!("subTags:{}:{}", ticket.tag_id, ticket.after);
        let _guard = self.inflight.try_acquire(key)?;
        Some(
            self.api
                .sub_tags(&ticket.tag_id, self.page_size, Some(&ticket.after))
                .await,
        )
    }

    /// `None` when a tag is already being created under this parent.
    pub async fn create_sub_tag(&self, org_id: &str, parent_tag_id: &str, name: &str) -> Option<AppResult<String>> {
        let _guard = self.inflight.try_acquire(format!("createTag:{}", parent_tag_id))?;
        let result = self.api.create_user_tag(name, org_id, Some(parent_tag_id)).await;
        match &result {
            Ok(id) => tracing::info!(parent_tag_id, tag_id = %id, "sub tag created"),
            Err(e) => tracing::warn!(parent_tag_id, error = %e, "sub tag creation failed"),
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::mock::{Call, MockApi};
    use std::time::Duration;

    fn controller(api: &Arc<MockApi>) -> SubTagsController {
        SubTagsController::new(api.clone(), InFlight::new(), 10)
    }

    async fn loaded_screen(ctrl: &SubTagsController, tag_id: &str) -> SubTagsScreen {
        let mut screen = SubTagsScreen::new(tag_id);
        let generation = screen.refresh(tag_id).unwrap();
        let state = ctrl.load(tag_id).await.unwrap();
        assert!(screen.apply_load(tag_id, generation, state));
        screen
    }

    fn ids(screen: &SubTagsScreen) -> Vec<String> {
        screen.state().loaded().unwrap().tags.iter().map(|t| t.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_load_shows_children_and_ancestors() {
        let api = Arc::new(MockApi::fixture());
        let screen = loaded_screen(&controller(&api), "1").await;

        let loaded = screen.state().loaded().unwrap();
        assert_eq!(loaded.tag_name, "tag1");
        assert_eq!(loaded.tags.len(), 10);
        assert_eq!(loaded.total_count, 15);
        assert!(loaded.has_more());
        assert_eq!(loaded.ancestors.len(), 1);
    }

    #[tokio::test]
    async fn test_sub_tags_failure_renders_error_state() {
        let api = Arc::new(MockApi {
            fail_sub_tags: true,
            ..MockApi::fixture()
        });
        let state = controller(&api).load("1").await.unwrap();
        assert!(matches!(state, SubTagsState::ErroredSubTags(_)));
    }

    #[tokio::test]
    async fn test_ancestors_failure_renders_error_state() {
        let api = Arc::new(MockApi {
            fail_ancestors: true,
            ..MockApi::fixture()
        });
        let state = controller(&api).load("1").await.unwrap();
        assert!(matches!(state, SubTagsState::ErroredAncestors(_)));
        assert!(state.loaded().is_none());
    }

    #[test]
    fn test_children_error_wins_when_both_fail() {
        let err = AppError::GraphQl("x".to_string());
        let state = SubTagsState::from_results(Err(err.clone()), Err(err.clone()));
        assert_eq!(state, SubTagsState::ErroredSubTags(err));
    }

    #[tokio::test]
    async fn test_fetch_more_appends_without_reordering() {
        let api = Arc::new(MockApi::fixture());
        let ctrl = controller(&api);
        let mut screen = loaded_screen(&ctrl, "1").await;
        let before = ids(&screen);

        let ticket = screen.begin_fetch_more().unwrap();
        assert_eq!(ticket.after, "subTag10");
        let result = ctrl.fetch_more(&ticket).await.unwrap();
        assert_eq!(screen.apply_more(&ticket, result), None);

        let after = ids(&screen);
        assert!(after.len() > before.len());
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.len(), 15);
        assert!(!screen.state().loaded().unwrap().has_more());
        assert!(screen.begin_fetch_more().is_none());
    }

    #[tokio::test]
    async fn test_repeated_scroll_issues_one_fetch() {
        let api = Arc::new(MockApi::fixture());
        let ctrl = controller(&api);
        let mut screen = loaded_screen(&ctrl, "1").await;

        let ticket = screen.begin_fetch_more().unwrap();
        assert!(screen.begin_fetch_more().is_none());
        assert!(screen.is_fetching_more());

        // Two callers racing on the same ticket reach the API once.
        let slow = Arc::new(MockApi {
            delay: Some(Duration::from_millis(50)),
            ..MockApi::fixture()
        });
        let slow_ctrl = controller(&slow);
        let (a, b) = futures::join!(slow_ctrl.fetch_more(&ticket), slow_ctrl.fetch_more(&ticket));
        assert_eq!(a.is_some() as u8 + b.is_some() as u8, 1);
        assert_eq!(slow.count(|c| matches!(c, Call::SubTags { after: Some(_), .. })), 1);
    }

    #[tokio::test]
    async fn test_failed_page_keeps_rows() {
        let api = Arc::new(MockApi {
            fail_more: true,
            ..MockApi::fixture()
        });
        let ctrl = controller(&api);
        let mut screen = loaded_screen(&ctrl, "1").await;

        let ticket = screen.begin_fetch_more().unwrap();
        let result = ctrl.fetch_more(&ticket).await.unwrap();
        let notice = screen.apply_more(&ticket, result);

        assert!(matches!(notice, Some(Notice::Error(_))));
        assert_eq!(ids(&screen).len(), 10);
        assert!(!screen.is_fetching_more());
    }

    #[tokio::test]
    async fn test_navigation_discards_page_and_refetches_both_queries() {
        let api = Arc::new(MockApi::fixture());
        let ctrl = controller(&api);
        let mut screen = loaded_screen(&ctrl, "1").await;
        let ticket = screen.begin_fetch_more().unwrap();

        let generation = screen.navigate("subTag1");
        assert_eq!(screen.state(), &SubTagsState::Loading);

        // The page fetched for the old tag arrives late and is dropped.
        let late = ctrl.fetch_more(&ticket).await.unwrap();
        assert_eq!(screen.apply_more(&ticket, late), None);
        assert_eq!(screen.state(), &SubTagsState::Loading);

        let state = ctrl.load("subTag1").await.unwrap();
        assert!(screen.apply_load("subTag1", generation, state));
        let loaded = screen.state().loaded().unwrap();
        assert_eq!(loaded.tags.len(), 2);
        assert_eq!(
            loaded.ancestors.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "subTag1"]
        );
        assert_eq!(api.count(|c| *c == Call::Ancestors("subTag1".to_string())), 1);
        assert_eq!(
            api.count(|c| *c == Call::SubTags { tag_id: "subTag1".to_string(), after: None }),
            1
        );
    }

    #[test]
    fn test_stale_load_is_ignored() {
        let mut screen = SubTagsScreen::new("1");
        let old = screen.navigate("1");
        screen.navigate("2");
        assert!(!screen.apply_load("1", old, SubTagsState::ErroredSubTags(AppError::EmptyTagName)));
        assert_eq!(screen.state(), &SubTagsState::Loading);
        assert_eq!(screen.tag_id(), "2");
    }

    #[tokio::test]
    async fn test_deduplicated_load_still_fills_screen() {
        let api = Arc::new(MockApi {
            delay: Some(Duration::from_millis(50)),
            ..MockApi::fixture()
        });
        let ctrl = controller(&api);
        let mut screen = SubTagsScreen::new("1");
        let first = screen.navigate("1");
        let second = screen.navigate("1");

        let (a, b) = futures::join!(ctrl.load("1"), ctrl.load("1"));
        assert!(b.is_none());
        assert!(screen.apply_load("1", first, a.unwrap()));
        assert!(screen.state().loaded().is_some());
        assert_ne!(first, second);
        assert_eq!(api.count(|c| *c == Call::Ancestors("1".to_string())), 1);
    }

    #[test]
    fn test_refreshed_screen_rejects_older_result() {
        let mut screen = SubTagsScreen::new("1");
        let first = screen.navigate("1");
        let loaded = SubTagsState::from_results(Ok(TagPage::default()), Ok(vec![]));
        assert!(screen.apply_load("1", first, loaded.clone()));
        let _second = screen.refresh("1").unwrap();
        assert!(!screen.apply_load("1", first, SubTagsState::ErroredSubTags(AppError::EmptyTagName)));
        assert_eq!(screen.state(), &loaded);
    }

    #[test]
    fn test_breadcrumbs_link_to_ancestors_and_all_tags() {
        let ancestors = vec![
            TagAncestor { id: "1".to_string(), name: "tag1".to_string() },
            TagAncestor { id: "subTag1".to_string(), name: "subTag 1".to_string() },
        ];
        let crumbs = breadcrumbs("123", &ancestors);

        assert_eq!(crumbs.len(), 3);
        assert_eq!(crumbs[0].label, "All Tags");
        assert_eq!(crumbs[0].route, AppRoute::OrgTags { org_id: "123".to_string() });
        assert_eq!(
            crumbs[1].route,
            AppRoute::SubTags { org_id: "123".to_string(), tag_id: "1".to_string() }
        );
        assert!(!crumbs[1].is_current);
        assert!(crumbs[2].is_current);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut form = AddSubTagForm::default();
        form.open();
        form.set_name("   ");
        assert_eq!(form.begin_submit(), Err(AppError::EmptyTagName));
        assert!(!form.is_submitting());
        assert!(form.is_closable());
    }

    #[test]
    fn test_form_cannot_close_while_submitting() {
        let mut form = AddSubTagForm::default();
        form.open();
        form.set_name("tag");
        form.begin_submit().unwrap();
        assert!(!form.close());
        assert!(form.is_open());
        form.finish_submit(&Err(AppError::GraphQl("failed".to_string())));
        assert_eq!(form.name(), "tag");
        assert!(form.close());
        assert!(!form.is_open());
    }

    #[tokio::test]
    async fn test_create_failure_keeps_modal_open() {
        let api = Arc::new(MockApi {
            fail_create_tag: true,
            ..MockApi::fixture()
        });
        let ctrl = controller(&api);
        let mut form = AddSubTagForm::default();
        form.open();
        form.set_name("subTag 12");
        let name = form.begin_submit().unwrap();
        let result = ctrl.create_sub_tag("123", "1", &name).await.unwrap();
        let notice = form.finish_submit(&result);

        assert_eq!(notice, Notice::Error("Mock Graphql Error".to_string()));
        assert!(form.is_open());
        assert_eq!(form.name(), "subTag 12");
    }

    #[tokio::test]
    async fn test_add_sub_tag_end_to_end() {
        let api = Arc::new(MockApi::fixture());
        let ctrl = controller(&api);
        let mut screen = loaded_screen(&ctrl, "1").await;
        assert!(!screen.state().loaded().unwrap().tags.is_empty());

        let mut form = AddSubTagForm::default();
        form.open();
        form.set_name("subTag 12");
        let name = form.begin_submit().unwrap();
        let result = ctrl.create_sub_tag("123", screen.tag_id(), &name).await.unwrap();
        let notice = form.finish_submit(&result);

        assert_eq!(notice, Notice::Success("tagCreationSuccess"));
        assert!(form.is_open());
        assert!(form.is_closable());
        assert_eq!(form.name(), "");
        assert_eq!(
            api.count(|c| *c
                == Call::CreateUserTag {
                    name: "subTag 12".to_string(),
                    organization_id: "123".to_string(),
                    parent_tag_id: Some("1".to_string()),
                }),
            1
        );

        let generation = screen.refresh("1").unwrap();
        let state = ctrl.load("1").await.unwrap();
        assert!(screen.apply_load("1", generation, state));
        assert!(screen.state().loaded().is_some());
    }

    #[tokio::test]
    async fn test_refresh_after_navigating_away_leaves_new_tag_alone() {
        let api = Arc::new(MockApi::fixture());
        let ctrl = controller(&api);
        let mut screen = loaded_screen(&ctrl, "1").await;

        // A tag is created under "1", then the user opens "subTag1" before
        // the post-create refresh starts.
        let generation = screen.navigate("subTag1");
        let state = ctrl.load("subTag1").await.unwrap();
        assert!(screen.apply_load("subTag1", generation, state));

        assert_eq!(screen.refresh("1"), None);
        let parent_state = ctrl.load("1").await.unwrap();
        assert!(!screen.apply_load("1", generation, parent_state.clone()));
        assert!(!screen.apply_load("1", generation + 1, parent_state));

        let loaded = screen.state().loaded().unwrap();
        assert_eq!(screen.tag_id(), "subTag1");
        assert_eq!(loaded.tag_name, "subTag 1");
        assert_eq!(loaded.tags.len(), 2);
    }

    #[tokio::test]
    async fn test_next_page_is_offered_without_scrolling() {
        let api = Arc::new(MockApi::fixture());
        let ctrl = controller(&api);
        let mut screen = loaded_screen(&ctrl, "1").await;
        assert!(screen.can_fetch_more());

        let ticket = screen.begin_fetch_more().unwrap();
        assert!(!screen.can_fetch_more());
        let result = ctrl.fetch_more(&ticket).await.unwrap();
        screen.apply_more(&ticket, result);
        assert!(!screen.can_fetch_more());
        assert_eq!(ids(&screen).len(), 15);
    }

    #[test]
    fn test_missing_cursor_means_no_more_pages() {
        let mut screen = SubTagsScreen::new("1");
        let generation = screen.navigate("1");
        let page = TagPage {
            tag_name: "tag1".to_string(),
            tags: vec![],
            page_info: PageInfo {
                has_next_page: true,
                end_cursor: None,
                ..PageInfo::default()
            },
            total_count: 15,
        };
        assert!(screen.apply_load("1", generation, SubTagsState::from_results(Ok(page), Ok(vec![]))));

        assert!(!screen.state().loaded().unwrap().has_more());
        assert!(!screen.can_fetch_more());
        assert_eq!(screen.begin_fetch_more(), None);
    }

    #[test]
    fn test_retry_after_error_reloads_same_tag() {
        let mut screen = SubTagsScreen::new("1");
        let first = screen.navigate("1");
        screen.apply_load("1", first, SubTagsState::ErroredSubTags(AppError::Http("down".to_string())));

        let retry = screen.navigate("1");
        assert_ne!(retry, first);
        assert_eq!(screen.state(), &SubTagsState::Loading);
        let loaded = SubTagsState::from_results(Ok(TagPage::default()), Ok(vec![]));
        assert!(screen.apply_load("1", retry, loaded));
        assert!(screen.state().loaded().is_some());
    }

    #[test]
    fn test_second_submit_is_busy() {
        let mut form = AddSubTagForm::default();
        form.open();
        form.set_name("tag");
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(AppError::Busy("Tag creation")));
    }
}
