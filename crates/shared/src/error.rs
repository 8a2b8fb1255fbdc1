use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown sort key '{0}' (expected none, title, author, comments or points)")]
    InvalidSortKey(String),
    #[error("search term must not be empty")]
    EmptySearchTerm,
}

pub const LOADING_MESSAGE: &str = "Loading ...";
/// Shown for every fetch failure; the cause is never surfaced.
pub const FETCH_FAILED_MESSAGE: &str = "Something went wrong ...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchOutcome {
    Loading,
    Failed,
    Loaded,
}
