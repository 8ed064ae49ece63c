use crate::api::Post;
use crate::mvi::Intent;
use crate::store::error::PostsError;

/// Start, success and failure of the two store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PostsIntent {
    FetchStarted,
    FetchSucceeded { posts: Vec<Post> },
    FetchFailed { error: PostsError },
    AddStarted,
    AddSucceeded { post: Post },
    AddFailed { error: PostsError },
}

impl Intent for PostsIntent {}
