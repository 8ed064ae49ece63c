use crate::api::Post;
use crate::mvi::UiState;
use crate::store::error::PostsError;

/// Plain lifecycle flag of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFlag {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Lifecycle of one operation, carrying its outcome.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OpStatus<T> {
    #[default]
    Idle,
    Loading,
    Succeeded(T),
    Failed(PostsError),
}

impl<T> OpStatus<T> {
    pub fn flag(&self) -> StatusFlag {
        match self {
            OpStatus::Idle => StatusFlag::Idle,
            OpStatus::Loading => StatusFlag::Loading,
            OpStatus::Succeeded(_) => StatusFlag::Succeeded,
            OpStatus::Failed(_) => StatusFlag::Failed,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, OpStatus::Loading)
    }

    pub fn error(&self) -> Option<&PostsError> {
        match self {
            OpStatus::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Everything the posts screen renders from.
///
/// Fields are only written by the reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostsState {
    pub(super) items: Vec<Post>,
    /// Succeeds with the number of posts received.
    pub(super) fetch: OpStatus<usize>,
    /// Succeeds with the post echoed by the server.
    pub(super) add: OpStatus<Post>,
    /// Set by the most recent failure, cleared by any start. Successes
    /// leave it alone.
    pub(super) error: Option<PostsError>,
}

impl UiState for PostsState {}

impl PostsState {
    /// Posts in display order, most recently added first.
    pub fn items(&self) -> &[Post] {
        &self.items
    }

    pub fn fetch(&self) -> &OpStatus<usize> {
        &self.fetch
    }

    pub fn add(&self) -> &OpStatus<Post> {
        &self.add
    }

    pub fn fetch_status(&self) -> StatusFlag {
        self.fetch.flag()
    }

    pub fn add_status(&self) -> StatusFlag {
        self.add.flag()
    }

    /// The error of whichever operation most recently failed, unless an
    /// operation has started since. A later success does not clear it.
    pub fn error(&self) -> Option<&PostsError> {
        self.error.as_ref()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.is_loading()
    }

    pub fn is_adding(&self) -> bool {
        self.add.is_loading()
    }
}
