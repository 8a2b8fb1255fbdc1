use shared::{
    domain::{SortKey, Story},
    error::DomainError,
    protocol::{RequestTarget, SEARCH_TERM_KEY},
};
use tracing::info;

use crate::{
    orchestration::fetch_stories,
    search_client::StorySource,
    sort::sort_stories,
    stories::{StoriesController, StoriesState},
    term_store::{SemiPersistentTerm, TermStore},
};

/// One search screen: persisted input term, committed request target, the
/// stories controller and the list's sort key.
pub struct SearchSession<T, S> {
    term: SemiPersistentTerm<T>,
    endpoint: String,
    request_target: RequestTarget,
    controller: StoriesController,
    sort: SortKey,
    source: S,
}

impl<T: TermStore, S: StorySource> SearchSession<T, S> {
    pub async fn load(
        store: T,
        source: S,
        endpoint: impl Into<String>,
        default_term: &str,
    ) -> Self {
        let endpoint = endpoint.into();
        let term = SemiPersistentTerm::load(store, SEARCH_TERM_KEY, default_term).await;
        let request_target = RequestTarget::new(&endpoint, term.value());

        Self {
            term,
            endpoint,
            request_target,
            controller: StoriesController::new(),
            sort: SortKey::default(),
            source,
        }
    }

    /// Fetches the initial target. Later calls are no-ops until the target changes.
    pub async fn start(&mut self) -> bool {
        let target = self.request_target.clone();
        self.on_target_changed(target).await
    }

    pub async fn on_search_input(&mut self, text: impl Into<String>) {
        self.term.set(text).await;
    }

    pub fn can_submit(&self) -> bool {
        !self.term.value().is_empty()
    }

    /// Commits the current term. Returns whether a fetch ran.
    pub async fn submit(&mut self) -> Result<bool, DomainError> {
        let target = RequestTarget::for_submit(&self.endpoint, self.term.value())?;
        info!(term = self.term.value(), "search submitted");
        self.request_target = target.clone();
        Ok(self.on_target_changed(target).await)
    }

    pub async fn on_target_changed(&mut self, target: RequestTarget) -> bool {
        let Some(ticket) = self.controller.on_target_changed(target) else {
            return false;
        };

        let controller = &mut self.controller;
        fetch_stories(&self.source, &ticket.target, |action| {
            controller.dispatch_for(ticket.generation, action)
        })
        .await;
        true
    }

    pub fn remove_story(&mut self, story: &Story) {
        self.controller.remove_story(story);
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn visible_stories(&self) -> Vec<Story> {
        sort_stories(self.controller.state().data(), self.sort)
    }

    pub fn state(&self) -> &StoriesState {
        self.controller.state()
    }

    pub fn search_term(&self) -> &str {
        self.term.value()
    }

    pub fn request_target(&self) -> &RequestTarget {
        &self.request_target
    }

    pub fn store(&self) -> &T {
        self.term.store()
    }
}
