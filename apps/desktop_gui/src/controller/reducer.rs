//! Screen state for the search window and its transitions.
//!
//! Every handler returns the backend commands it wants queued, so the egui
//! layer only renders and forwards.

use client_core::{sort_stories, StoriesController, StoriesState};
use shared::{
    domain::{SortKey, Story},
    protocol::RequestTarget,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub struct SearchScreen {
    pub search_input: String,
    endpoint: String,
    request_target: Option<RequestTarget>,
    stories: StoriesController,
    sort: SortKey,
    pub status: String,
}

impl SearchScreen {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            search_input: String::new(),
            endpoint: endpoint.into(),
            request_target: None,
            stories: StoriesController::new(),
            sort: SortKey::default(),
            status: String::new(),
        }
    }

    pub fn startup_commands(&self) -> Vec<BackendCommand> {
        vec![BackendCommand::LoadTerm]
    }

    pub fn apply_ui_event(&mut self, event: UiEvent) -> Vec<BackendCommand> {
        match event {
            UiEvent::Info(message) => {
                tracing::info!("{message}");
                Vec::new()
            }
            UiEvent::TermLoaded(term) => {
                self.search_input = term;
                // Initial fetch fires without a manual submit.
                let target = RequestTarget::new(&self.endpoint, &self.search_input);
                self.commit(target).into_iter().collect()
            }
            UiEvent::Stories { generation, action } => {
                self.stories.dispatch_for(generation, action);
                Vec::new()
            }
            UiEvent::Error(err) => {
                tracing::warn!(context = ?err.context(), "{}", err.message());
                self.status = format!("{}: {}", err.context().label(), err.message());
                Vec::new()
            }
        }
    }

    /// Called after every edit of the input; the term is written through.
    pub fn on_search_input(&mut self) -> BackendCommand {
        BackendCommand::SaveTerm {
            value: self.search_input.clone(),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.search_input.is_empty()
    }

    pub fn submit(&mut self) -> Option<BackendCommand> {
        let target = RequestTarget::for_submit(&self.endpoint, &self.search_input).ok()?;
        self.commit(target)
    }

    fn commit(&mut self, target: RequestTarget) -> Option<BackendCommand> {
        self.request_target = Some(target.clone());
        self.stories
            .on_target_changed(target)
            .map(|ticket| BackendCommand::FetchStories { ticket })
    }

    pub fn dismiss(&mut self, story: &Story) {
        self.stories.remove_story(story);
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = key;
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn stories(&self) -> &StoriesState {
        self.stories.state()
    }

    pub fn visible_stories(&self) -> Vec<Story> {
        sort_stories(self.stories.state().data(), self.sort)
    }

    pub fn request_target(&self) -> Option<&RequestTarget> {
        self.request_target.as_ref()
    }
}
