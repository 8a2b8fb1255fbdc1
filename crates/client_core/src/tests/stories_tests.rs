use super::*;
use shared::domain::Story;

fn story(id: &str, title: &str) -> Story {
    Story::new(id, title).with_author("pg")
}

fn all_actions(sample: &[Story]) -> Vec<StoriesAction> {
    vec![
        StoriesAction::FetchInit,
        StoriesAction::FetchSuccess(sample.to_vec()),
        StoriesAction::FetchFailure,
        StoriesAction::RemoveStory(sample[0].clone()),
    ]
}

#[test]
fn scenario_a_fetch_init_from_initial_state() {
    let state = reduce(StoriesState::new(), StoriesAction::FetchInit);
    assert!(state.data().is_empty());
    assert!(state.is_loading());
    assert!(!state.is_error());
}

#[test]
fn scenario_b_fetch_success_replaces_data() {
    let loading = reduce(StoriesState::new(), StoriesAction::FetchInit);
    let payload = vec![story("1", "A"), story("2", "B")];
    let state = reduce(loading, StoriesAction::FetchSuccess(payload.clone()));
    assert_eq!(state.data(), payload.as_slice());
    assert!(!state.is_loading());
    assert!(!state.is_error());
}

#[test]
fn scenario_c_remove_story_drops_matching_id() {
    let loading = reduce(StoriesState::new(), StoriesAction::FetchInit);
    let loaded = reduce(
        loading,
        StoriesAction::FetchSuccess(vec![story("1", "A"), story("2", "B")]),
    );
    let state = reduce(loaded, StoriesAction::RemoveStory(story("1", "A")));
    assert_eq!(state.data(), &[story("2", "B")]);
    assert!(!state.is_loading());
    assert!(!state.is_error());
}

#[test]
fn scenario_d_fetch_failure_after_init() {
    let loading = reduce(StoriesState::new(), StoriesAction::FetchInit);
    let state = reduce(loading, StoriesAction::FetchFailure);
    assert!(state.data().is_empty());
    assert!(!state.is_loading());
    assert!(state.is_error());
}

#[test]
fn loading_and_error_are_never_both_set() {
    let sample = vec![story("1", "A"), story("2", "B")];
    let mut frontier = vec![StoriesState::new()];
    for _depth in 0..4 {
        let mut next = Vec::new();
        for state in &frontier {
            for action in all_actions(&sample) {
                let reduced = reduce(state.clone(), action);
                assert!(
                    !(reduced.is_loading() && reduced.is_error()),
                    "loading and error both set: {reduced:?}"
                );
                next.push(reduced);
            }
        }
        frontier = next;
    }
}

#[test]
fn fetch_init_and_failure_keep_stale_data() {
    let loaded = reduce(
        StoriesState::new(),
        StoriesAction::FetchSuccess(vec![story("1", "A")]),
    );
    let reloading = reduce(loaded.clone(), StoriesAction::FetchInit);
    assert_eq!(reloading.data(), loaded.data());
    let failed = reduce(reloading, StoriesAction::FetchFailure);
    assert_eq!(failed.data(), loaded.data());
}

#[test]
fn fetch_success_does_not_merge_with_previous_data() {
    let loaded = reduce(
        StoriesState::new(),
        StoriesAction::FetchSuccess(vec![story("1", "A"), story("2", "B")]),
    );
    let replaced = reduce(loaded, StoriesAction::FetchSuccess(vec![story("3", "C")]));
    assert_eq!(replaced.data(), &[story("3", "C")]);
}

#[test]
fn removing_unknown_story_is_a_no_op() {
    let loaded = reduce(
        StoriesState::new(),
        StoriesAction::FetchSuccess(vec![story("1", "A"), story("2", "B")]),
    );
    let after = reduce(loaded.clone(), StoriesAction::RemoveStory(story("9", "Z")));
    assert_eq!(after, loaded);
}

#[test]
fn removal_keeps_relative_order_and_flags() {
    let loading = reduce(
        reduce(
            StoriesState::new(),
            StoriesAction::FetchSuccess(vec![story("1", "A"), story("2", "B"), story("3", "C")]),
        ),
        StoriesAction::FetchInit,
    );
    let after = reduce(loading, StoriesAction::RemoveStory(story("2", "ignored title")));
    assert_eq!(after.data(), &[story("1", "A"), story("3", "C")]);
    assert!(after.is_loading());
}

#[test]
fn decodes_tagged_actions() {
    let init = StoriesAction::decode(r#"{"type":"STORIES_FETCH_INIT"}"#).expect("init");
    assert_eq!(init, StoriesAction::FetchInit);

    let remove = StoriesAction::decode(
        r#"{"type":"REMOVE_STORY","payload":{"objectID":"7","title":"Seven"}}"#,
    )
    .expect("remove");
    assert_eq!(remove, StoriesAction::RemoveStory(Story::new("7", "Seven")));
}

#[test]
fn unknown_action_is_reported_and_state_untouched() {
    let mut controller = StoriesController::new();
    controller.dispatch(StoriesAction::FetchSuccess(vec![story("1", "A")]));
    let before = controller.state().clone();

    let err = controller
        .dispatch_encoded(r#"{"type":"STORIES_SHUFFLE"}"#)
        .expect_err("unknown tag");
    assert!(matches!(err, ControllerError::UnknownAction(tag) if tag == "STORIES_SHUFFLE"));
    assert_eq!(controller.state(), &before);

    let err = controller
        .dispatch_encoded(r#"{"payload":[]}"#)
        .expect_err("missing tag");
    assert!(matches!(err, ControllerError::MissingActionType));
}

#[test]
fn controller_triggers_once_per_target_change() {
    let mut controller = StoriesController::new();
    let react = RequestTarget::new("https://example.test/?q=", "React");
    let rust = RequestTarget::new("https://example.test/?q=", "Rust");

    let first = controller.on_target_changed(react.clone()).expect("first");
    assert_eq!(first.generation, 1);
    assert!(controller.on_target_changed(react.clone()).is_none());

    let second = controller.on_target_changed(rust.clone()).expect("second");
    assert_eq!(second.generation, 2);
    assert_eq!(controller.current_target(), Some(&rust));
}

#[test]
fn superseded_fetch_result_still_applies() {
    let mut controller = StoriesController::new();
    let old = controller
        .on_target_changed(RequestTarget::new("e?q=", "old"))
        .expect("old");
    let _new = controller
        .on_target_changed(RequestTarget::new("e?q=", "new"))
        .expect("new");

    controller.dispatch_for(old.generation, StoriesAction::FetchSuccess(vec![story("1", "A")]));
    assert_eq!(controller.state().data(), &[story("1", "A")]);
}

#[test]
fn outcome_follows_flags() {
    use shared::error::FetchOutcome;

    let loading = reduce(StoriesState::new(), StoriesAction::FetchInit);
    assert_eq!(loading.outcome(), FetchOutcome::Loading);
    let failed = reduce(loading, StoriesAction::FetchFailure);
    assert_eq!(failed.outcome(), FetchOutcome::Failed);
    let loaded = reduce(failed, StoriesAction::FetchSuccess(Vec::new()));
    assert_eq!(loaded.outcome(), FetchOutcome::Loaded);
}
