use thiserror::Error;

/// Failure surfaced to the screen.
///
/// Network failures and non-2xx responses collapse into the same variant;
/// the detail only goes to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PostsError {
    #[error("failed to fetch posts")]
    FetchFailed,

    #[error("failed to create post")]
    AddFailed,
}
