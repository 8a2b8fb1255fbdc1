use super::*;

fn sample() -> Vec<Story> {
    vec![
        Story::new("1", "Rust 2.0")
            .with_author("steve")
            .with_num_comments(10)
            .with_points(3),
        Story::new("2", "Async in depth")
            .with_author("alice")
            .with_num_comments(42)
            .with_points(9),
        Story::new("3", "Zig vs C")
            .with_author("bob")
            .with_num_comments(7)
            .with_points(1),
    ]
}

fn ids(stories: &[Story]) -> Vec<&str> {
    stories.iter().map(|story| story.object_id.as_str()).collect()
}

#[test]
fn none_keeps_fetched_order() {
    let stories = sample();
    assert_eq!(sort_stories(&stories, SortKey::None), stories);
}

#[test]
fn title_and_author_sort_ascending() {
    let stories = sample();
    let by_title = sort_stories(&stories, SortKey::Title);
    assert!(by_title.windows(2).all(|w| w[0].title <= w[1].title));
    assert_eq!(ids(&by_title), vec!["2", "1", "3"]);

    let by_author = sort_stories(&stories, SortKey::Author);
    assert_eq!(ids(&by_author), vec!["2", "3", "1"]);
}

#[test]
fn counts_sort_descending() {
    let stories = sample();
    let by_comments = sort_stories(&stories, SortKey::CommentCount);
    assert!(by_comments
        .windows(2)
        .all(|w| w[0].num_comments >= w[1].num_comments));

    let points: Vec<u64> = sort_stories(&stories, SortKey::Points)
        .iter()
        .map(|story| story.points)
        .collect();
    assert_eq!(points, vec![9, 3, 1]);
}

#[test]
fn sorting_leaves_input_untouched() {
    let stories = sample();
    let snapshot = stories.clone();
    for key in SortKey::ALL {
        let _ = sort_fn(key)(&stories);
    }
    assert_eq!(stories, snapshot);
}

#[test]
fn equal_text_keys_keep_fetched_order() {
    let stories = vec![
        Story::new("a", "same").with_author("x"),
        Story::new("b", "same").with_author("x"),
        Story::new("c", "other").with_author("w"),
    ];
    assert_eq!(ids(&sort_stories(&stories, SortKey::Title)), vec!["c", "a", "b"]);
    assert_eq!(ids(&sort_stories(&stories, SortKey::Author)), vec!["c", "a", "b"]);
}

#[test]
fn equal_counts_come_out_in_reverse_fetched_order() {
    let stories = vec![
        Story::new("a", "first").with_points(5).with_num_comments(2),
        Story::new("b", "second").with_points(5).with_num_comments(2),
        Story::new("c", "third").with_points(7).with_num_comments(9),
    ];
    assert_eq!(ids(&sort_stories(&stories, SortKey::Points)), vec!["c", "b", "a"]);
    assert_eq!(
        ids(&sort_stories(&stories, SortKey::CommentCount)),
        vec!["c", "b", "a"]
    );
}
