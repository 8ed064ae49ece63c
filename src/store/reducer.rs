use crate::mvi::Reducer;
use crate::store::intent::PostsIntent;
use crate::store::state::{OpStatus, PostsState};

pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsState;
    type Intent = PostsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::FetchStarted => {
                state.fetch = OpStatus::Loading;
                state.error = None;
            }
            PostsIntent::FetchSucceeded { posts } => {
                state.fetch = OpStatus::Succeeded(posts.len());
                state.items = posts;
            }
            PostsIntent::FetchFailed { error } => {
                state.fetch = OpStatus::Failed(error);
                state.error = Some(error);
            }
            PostsIntent::AddStarted => {
                state.add = OpStatus::Loading;
                state.error = None;
            }
            PostsIntent::AddSucceeded { post } => {
                state.items.insert(0, post.clone());
                state.add = OpStatus::Succeeded(post);
            }
            PostsIntent::AddFailed { error } => {
                state.add = OpStatus::Failed(error);
                state.error = Some(error);
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Post;
    use crate::store::error::PostsError;
    use crate::store::state::StatusFlag;

    fn post(id: u64) -> Post {
        Post {
            id: Some(id),
            user_id: 1,
            title: format!("title {id}"),
            body: format!("body {id}"),
        }
    }

    fn reduce_all(intents: Vec<PostsIntent>) -> PostsState {
        intents
            .into_iter()
            .fold(PostsState::default(), PostsReducer::reduce)
    }

    #[test]
    fn fetch_start_sets_loading_and_clears_error() {
        let state = reduce_all(vec![
            PostsIntent::AddStarted,
            PostsIntent::AddFailed {
                error: PostsError::AddFailed,
            },
            PostsIntent::FetchStarted,
        ]);
        assert_eq!(state.fetch_status(), StatusFlag::Loading);
        assert_eq!(state.error(), None);
        assert_eq!(state.add_status(), StatusFlag::Failed);
    }

    #[test]
    fn fetch_success_replaces_items() {
        let state = reduce_all(vec![
            PostsIntent::FetchStarted,
            PostsIntent::FetchSucceeded {
                posts: vec![post(1), post(2)],
            },
            PostsIntent::FetchStarted,
            PostsIntent::FetchSucceeded {
                posts: vec![post(3)],
            },
        ]);
        assert_eq!(state.items(), &[post(3)]);
        assert_eq!(state.fetch(), &OpStatus::Succeeded(1));
    }

    #[test]
    fn fetch_failure_keeps_items() {
        let state = reduce_all(vec![
            PostsIntent::FetchStarted,
            PostsIntent::FetchSucceeded {
                posts: vec![post(1)],
            },
            PostsIntent::FetchStarted,
            PostsIntent::FetchFailed {
                error: PostsError::FetchFailed,
            },
        ]);
        assert_eq!(state.items(), &[post(1)]);
        assert_eq!(state.fetch_status(), StatusFlag::Failed);
        assert_eq!(state.error().map(ToString::to_string).as_deref(), Some("failed to fetch posts"));
    }

    #[test]
    fn add_success_prepends() {
        let state = reduce_all(vec![
            PostsIntent::FetchSucceeded {
                posts: vec![post(1), post(2)],
            },
            PostsIntent::AddStarted,
            PostsIntent::AddSucceeded { post: post(101) },
        ]);
        assert_eq!(state.items(), &[post(101), post(1), post(2)]);
        assert_eq!(state.add(), &OpStatus::Succeeded(post(101)));
    }

    #[test]
    fn identical_adds_are_not_deduplicated() {
        let state = reduce_all(vec![
            PostsIntent::AddStarted,
            PostsIntent::AddSucceeded { post: post(101) },
            PostsIntent::AddStarted,
            PostsIntent::AddSucceeded { post: post(101) },
        ]);
        assert_eq!(state.items(), &[post(101), post(101)]);
    }

    #[test]
    fn add_transitions_leave_fetch_untouched() {
        let base = reduce_all(vec![PostsIntent::FetchStarted]);
        for intent in [
            PostsIntent::AddStarted,
            PostsIntent::AddSucceeded { post: post(5) },
            PostsIntent::AddFailed {
                error: PostsError::AddFailed,
            },
        ] {
            let next = PostsReducer::reduce(base.clone(), intent);
            assert_eq!(next.fetch_status(), StatusFlag::Loading);
        }
    }

    #[test]
    fn fetch_transitions_leave_add_untouched() {
        let base = reduce_all(vec![PostsIntent::AddStarted]);
        for intent in [
            PostsIntent::FetchStarted,
            PostsIntent::FetchSucceeded { posts: vec![] },
            PostsIntent::FetchFailed {
                error: PostsError::FetchFailed,
            },
        ] {
            let next = PostsReducer::reduce(base.clone(), intent);
            assert_eq!(next.add_status(), StatusFlag::Loading);
        }
    }

    #[test]
    fn latest_failure_wins_the_error_slot() {
        let state = reduce_all(vec![
            PostsIntent::FetchStarted,
            PostsIntent::AddStarted,
            PostsIntent::FetchFailed {
                error: PostsError::FetchFailed,
            },
            PostsIntent::AddFailed {
                error: PostsError::AddFailed,
            },
        ]);
        assert_eq!(state.error(), Some(&PostsError::AddFailed));
    }

    #[test]
    fn success_does_not_clear_an_error_from_the_other_operation() {
        // The add starts first, so the fetch failure lands after it and stays.
        let state = reduce_all(vec![
            PostsIntent::AddStarted,
            PostsIntent::FetchStarted,
            PostsIntent::FetchFailed {
                error: PostsError::FetchFailed,
            },
            PostsIntent::AddSucceeded { post: post(1) },
        ]);
        assert_eq!(state.error(), Some(&PostsError::FetchFailed));
    }

    #[test]
    fn overlapping_adds_keep_the_earlier_failure() {
        let state = reduce_all(vec![
            PostsIntent::AddStarted,
            PostsIntent::AddStarted,
            PostsIntent::AddFailed {
                error: PostsError::AddFailed,
            },
            PostsIntent::AddSucceeded { post: post(101) },
        ]);
        assert_eq!(state.add_status(), StatusFlag::Succeeded);
        assert_eq!(state.items(), &[post(101)]);
        assert_eq!(state.error(), Some(&PostsError::AddFailed));
    }

    #[test]
    fn overlapping_fetches_keep_the_earlier_failure() {
        let state = reduce_all(vec![
            PostsIntent::FetchStarted,
            PostsIntent::FetchStarted,
            PostsIntent::FetchFailed {
                error: PostsError::FetchFailed,
            },
            PostsIntent::FetchSucceeded {
                posts: vec![post(1)],
            },
        ]);
        assert_eq!(state.fetch(), &OpStatus::Succeeded(1));
        assert_eq!(state.error(), Some(&PostsError::FetchFailed));
    }
}
