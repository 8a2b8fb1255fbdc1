//! Stories state machine: the reducer and the controller that owns its state.

use serde::{Deserialize, Serialize};
use shared::{domain::Story, error::FetchOutcome, protocol::RequestTarget};
use thiserror::Error;
use tracing::{debug, warn};

use crate::orchestration::{FetchTicket, FetchTrigger};

const KNOWN_ACTION_TAGS: [&str; 4] = [
    "STORIES_FETCH_INIT",
    "STORIES_FETCH_SUCCESS",
    "STORIES_FETCH_FAILURE",
    "REMOVE_STORY",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum StoriesAction {
    #[serde(rename = "STORIES_FETCH_INIT")]
    FetchInit,
    #[serde(rename = "STORIES_FETCH_SUCCESS")]
    FetchSuccess(Vec<Story>),
    #[serde(rename = "STORIES_FETCH_FAILURE")]
    FetchFailure,
    #[serde(rename = "REMOVE_STORY")]
    RemoveStory(Story),
}

impl StoriesAction {
    pub fn name(&self) -> &'static str {
        match self {
            StoriesAction::FetchInit => "fetch_init",
            StoriesAction::FetchSuccess(_) => "fetch_success",
            StoriesAction::FetchFailure => "fetch_failure",
            StoriesAction::RemoveStory(_) => "remove_story",
        }
    }

    /// Decodes the `{"type": ..., "payload": ...}` form of an action.
    pub fn decode(raw: &str) -> Result<Self, ControllerError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(ControllerError::MalformedAction)?;
        let tag = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or(ControllerError::MissingActionType)?;
        if !KNOWN_ACTION_TAGS.contains(&tag) {
            return Err(ControllerError::UnknownAction(tag.to_string()));
        }
        serde_json::from_value(value).map_err(ControllerError::MalformedAction)
    }
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("unknown stories action '{0}'")]
    UnknownAction(String),
    #[error("stories action is missing its 'type' tag")]
    MissingActionType,
    #[error("malformed stories action: {0}")]
    MalformedAction(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoriesState {
    data: Vec<Story>,
    is_loading: bool,
    is_error: bool,
}

impl StoriesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &[Story] {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn outcome(&self) -> FetchOutcome {
        if self.is_loading {
            FetchOutcome::Loading
        } else if self.is_error {
            FetchOutcome::Failed
        } else {
            FetchOutcome::Loaded
        }
    }
}

/// Applies one transition. Removal only touches `data`; the fetch actions never
/// leave `is_loading` and `is_error` both set.
pub fn reduce(mut state: StoriesState, action: StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit => {
            state.is_loading = true;
            state.is_error = false;
        }
        StoriesAction::FetchSuccess(stories) => {
            state.is_loading = false;
            state.is_error = false;
            state.data = stories;
        }
        StoriesAction::FetchFailure => {
            state.is_loading = false;
            state.is_error = true;
        }
        StoriesAction::RemoveStory(item) => {
            state.data.retain(|story| story.object_id != item.object_id);
        }
    }
    state
}

#[derive(Debug, Default)]
pub struct StoriesController {
    state: StoriesState,
    trigger: FetchTrigger,
}

impl StoriesController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &StoriesState {
        &self.state
    }

    pub fn dispatch(&mut self, action: StoriesAction) {
        debug!(action = action.name(), "dispatching stories action");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Decodes and applies a serialized action. State is untouched on error.
    pub fn dispatch_encoded(&mut self, raw: &str) -> Result<(), ControllerError> {
        let action = StoriesAction::decode(raw)?;
        self.dispatch(action);
        Ok(())
    }

    /// Applies an action produced by the fetch identified by `generation`.
    /// Results of superseded fetches still apply (last resolved wins).
    pub fn dispatch_for(&mut self, generation: u64, action: StoriesAction) {
        if !self.trigger.is_current(generation) {
            warn!(
                generation,
                latest = self.trigger.generation(),
                action = action.name(),
                "applying result of a superseded fetch"
            );
        }
        self.dispatch(action);
    }

    pub fn remove_story(&mut self, story: &Story) {
        self.dispatch(StoriesAction::RemoveStory(story.clone()));
    }

    /// Returns a ticket when `target` differs from the last triggered one.
    pub fn on_target_changed(&mut self, target: RequestTarget) -> Option<FetchTicket> {
        self.trigger.on_target_changed(target)
    }

    pub fn current_target(&self) -> Option<&RequestTarget> {
        self.trigger.current_target()
    }
}

#[cfg(test)]
#[path = "tests/stories_tests.rs"]
mod tests;
