//! Plain-text rendering of the search screen.

use std::fmt::Write as _;

use client_core::StoriesState;
use shared::{
    domain::{SortKey, Story},
    error::{FetchOutcome, FETCH_FAILED_MESSAGE, LOADING_MESSAGE},
};

const HEADLINE: &str = "For Geeks Only";
const TITLE_WIDTH: usize = 48;
const AUTHOR_WIDTH: usize = 16;
const COUNT_WIDTH: usize = 9;

pub fn render_screen(
    term: &str,
    state: &StoriesState,
    visible: &[Story],
    sort: SortKey,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADLINE}");
    let _ = writeln!(out, "Search: {term}");
    let _ = writeln!(out);

    match state.outcome() {
        FetchOutcome::Loading => {
            let _ = writeln!(out, "{LOADING_MESSAGE}");
        }
        FetchOutcome::Failed => {
            let _ = writeln!(out, "{FETCH_FAILED_MESSAGE}");
            out.push_str(&render_list(visible, sort));
        }
        FetchOutcome::Loaded => out.push_str(&render_list(visible, sort)),
    }
    out
}

pub fn render_list(stories: &[Story], sort: SortKey) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<tw$} {:<aw$} {:>cw$} {:>cw$}  {}",
        header_cell(SortKey::Title, sort),
        header_cell(SortKey::Author, sort),
        header_cell(SortKey::CommentCount, sort),
        header_cell(SortKey::Points, sort),
        "Actions",
        tw = TITLE_WIDTH,
        aw = AUTHOR_WIDTH,
        cw = COUNT_WIDTH,
    );

    for story in stories {
        let _ = writeln!(
            out,
            "{:<tw$} {:<aw$} {:>cw$} {:>cw$}  dismiss {}",
            truncate(&story.title, TITLE_WIDTH),
            truncate(&story.author, AUTHOR_WIDTH),
            story.num_comments,
            story.points,
            story.object_id,
            tw = TITLE_WIDTH,
            aw = AUTHOR_WIDTH,
            cw = COUNT_WIDTH,
        );
        if let Some(url) = &story.url {
            let _ = writeln!(out, "  {url}");
        }
    }
    out
}

fn header_cell(column: SortKey, active: SortKey) -> String {
    if column == active {
        format!("[{}]", column.label())
    } else {
        column.label().to_string()
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
