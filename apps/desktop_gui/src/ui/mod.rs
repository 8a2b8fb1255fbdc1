//! UI layer for desktop GUI: the search window.

pub mod app;

pub use app::SearchApp;
