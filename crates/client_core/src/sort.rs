//! Display ordering for story lists. Never writes back into controller state.

use shared::domain::{SortKey, Story};

pub type SortFn = fn(&[Story]) -> Vec<Story>;

pub fn sort_fn(key: SortKey) -> SortFn {
    match key {
        SortKey::None => unsorted,
        SortKey::Title => by_title,
        SortKey::Author => by_author,
        SortKey::CommentCount => by_comments_desc,
        SortKey::Points => by_points_desc,
    }
}

pub fn sort_stories(stories: &[Story], key: SortKey) -> Vec<Story> {
    sort_fn(key)(stories)
}

fn unsorted(stories: &[Story]) -> Vec<Story> {
    stories.to_vec()
}

// `sort_by` is stable: equal titles and authors keep their fetched order.
fn by_title(stories: &[Story]) -> Vec<Story> {
    let mut sorted = stories.to_vec();
    sorted.sort_by(|a, b| a.title.cmp(&b.title));
    sorted
}

fn by_author(stories: &[Story]) -> Vec<Story> {
    let mut sorted = stories.to_vec();
    sorted.sort_by(|a, b| a.author.cmp(&b.author));
    sorted
}

// Counts sort ascending and then flip, so equal counts come out in reverse
// fetched order.
fn by_comments_desc(stories: &[Story]) -> Vec<Story> {
    let mut sorted = stories.to_vec();
    sorted.sort_by_key(|story| story.num_comments);
    sorted.reverse();
    sorted
}

fn by_points_desc(stories: &[Story]) -> Vec<Story> {
    let mut sorted = stories.to_vec();
    sorted.sort_by_key(|story| story.points);
    sorted.reverse();
    sorted
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;
