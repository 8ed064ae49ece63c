use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::{PostDraft, PostsClient};
use crate::mvi::Reducer;
use crate::store::error::PostsError;
use crate::store::intent::PostsIntent;
use crate::store::reducer::PostsReducer;
use crate::store::state::PostsState;

/// Shared handle to the posts state and its two operations.
///
/// Clones observe and mutate the same state. Observers get change
/// notifications through [`PostsStore::subscribe`].
#[derive(Clone)]
pub struct PostsStore {
    client: PostsClient,
    state: Arc<watch::Sender<PostsState>>,
    runtime: Handle,
}

impl PostsStore {
    pub fn new(client: PostsClient, runtime: Handle) -> Self {
        let (state, _) = watch::channel(PostsState::default());
        Self {
            client,
            state: Arc::new(state),
            runtime,
        }
    }

    pub fn snapshot(&self) -> PostsState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PostsState> {
        self.state.subscribe()
    }

    /// Applies one intent. Mutations are serialized by the channel lock, so
    /// completions landing together are applied one after the other.
    pub fn dispatch(&self, intent: PostsIntent) {
        self.state.send_modify(|state| {
            *state = PostsReducer::reduce(std::mem::take(state), intent);
        });
    }

    /// Replaces the list with the first page of posts from the backend.
    ///
    /// The returned handle may be dropped; the request still completes.
    pub fn fetch_posts(&self) -> JoinHandle<()> {
        self.dispatch(PostsIntent::FetchStarted);

        let store = self.clone();
        self.runtime.spawn(async move {
            match store.client.fetch_posts().await {
                Ok(posts) => {
                    tracing::info!(count = posts.len(), "Fetched posts");
                    store.dispatch(PostsIntent::FetchSucceeded { posts });
                }
                Err(err) => {
                    tracing::warn!(error = %err, status = ?err.status(), "Fetching posts failed");
                    store.dispatch(PostsIntent::FetchFailed {
                        error: PostsError::FetchFailed,
                    });
                }
            }
        })
    }

    /// Submits a draft and prepends the server's echo on success.
    ///
    /// Performs no validation and no de-duplication.
    pub fn add_post(&self, draft: PostDraft) -> JoinHandle<()> {
        self.dispatch(PostsIntent::AddStarted);

        let store = self.clone();
        self.runtime.spawn(async move {
            match store.client.create_post(&draft).await {
                Ok(post) => {
                    tracing::info!(id = ?post.id, "Created post");
                    store.dispatch(PostsIntent::AddSucceeded { post });
                }
                Err(err) => {
                    tracing::warn!(error = %err, status = ?err.status(), "Creating post failed");
                    store.dispatch(PostsIntent::AddFailed {
                        error: PostsError::AddFailed,
                    });
                }
            }
        })
    }
}
