//! Fetch orchestration: which target to fetch and how a fetch maps onto actions.

use shared::protocol::RequestTarget;
use tracing::{debug, info, warn};

use crate::{search_client::StorySource, stories::StoriesAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub target: RequestTarget,
    pub generation: u64,
}

/// Tracks the last triggered target so each change fetches exactly once.
#[derive(Debug, Default)]
pub struct FetchTrigger {
    last_target: Option<RequestTarget>,
    generation: u64,
}

impl FetchTrigger {
    pub fn on_target_changed(&mut self, target: RequestTarget) -> Option<FetchTicket> {
        if self.last_target.as_ref() == Some(&target) {
            debug!(target = %target, "request target unchanged; not refetching");
            return None;
        }

        self.generation += 1;
        self.last_target = Some(target.clone());
        Some(FetchTicket {
            target,
            generation: self.generation,
        })
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current_target(&self) -> Option<&RequestTarget> {
        self.last_target.as_ref()
    }
}

/// Emits `FetchInit`, queries `source`, then emits exactly one of
/// `FetchSuccess` or `FetchFailure`. Failure causes are logged and dropped.
pub async fn fetch_stories<S, F>(source: &S, target: &RequestTarget, mut dispatch: F)
where
    S: StorySource + ?Sized,
    F: FnMut(StoriesAction),
{
    dispatch(StoriesAction::FetchInit);

    match source.search(target).await {
        Ok(stories) => {
            info!(target = %target, count = stories.len(), "fetched stories");
            dispatch(StoriesAction::FetchSuccess(stories));
        }
        Err(err) => {
            warn!(target = %target, error = %err, "story fetch failed");
            dispatch(StoriesAction::FetchFailure);
        }
    }
}
