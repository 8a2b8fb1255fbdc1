//! Backend commands queued from UI to backend worker.

use client_core::FetchTicket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// Read the persisted term (or the default) and report it back.
    LoadTerm,
    SaveTerm { value: String },
    FetchStories { ticket: FetchTicket },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadTerm => "load_term",
            BackendCommand::SaveTerm { .. } => "save_term",
            BackendCommand::FetchStories { .. } => "fetch_stories",
        }
    }
}
