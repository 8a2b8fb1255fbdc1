//! Client core for the Hacker News story search: stories state machine, sort
//! table, remote search client, persisted term port and the search session that
//! composes them.

pub mod config;
pub mod orchestration;
pub mod search_client;
pub mod session;
pub mod sort;
pub mod stories;
pub mod term_store;

pub use config::{load_settings, load_settings_from, Settings};
pub use orchestration::{fetch_stories, FetchTicket, FetchTrigger};
pub use search_client::{HnSearchClient, SearchError, StorySource};
pub use session::SearchSession;
pub use sort::{sort_fn, sort_stories, SortFn};
pub use stories::{reduce, ControllerError, StoriesAction, StoriesController, StoriesState};
pub use term_store::{MemoryTermStore, SemiPersistentTerm, TermStore};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
