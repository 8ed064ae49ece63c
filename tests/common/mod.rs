//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use miniblog::api::{Post, PostsClient};
use miniblog::config::ApiConfig;
use miniblog::store::{PostsState, PostsStore};
use miniblog::ui::app::App;
use std::time::Duration;

/// Client pointed at `base_url` with the default page size.
pub fn client_for(base_url: &str) -> PostsClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    };
    PostsClient::new(&config).expect("Failed to build client")
}

/// Store on the current tokio runtime.
pub fn store_for(base_url: &str) -> PostsStore {
    PostsStore::new(client_for(base_url), tokio::runtime::Handle::current())
}

pub fn make_app(base_url: &str) -> (App, PostsStore) {
    let store = store_for(base_url);
    (App::new(store.clone()), store)
}

pub fn post(id: u64) -> Post {
    Post {
        id: Some(id),
        user_id: 1,
        title: format!("title {id}"),
        body: format!("body {id}"),
    }
}

/// JSON array of posts with ids `1..=count`, as the backend serves them.
pub fn posts_json(count: u64) -> String {
    let posts: Vec<Post> = (1..=count).map(post).collect();
    serde_json::to_string(&posts).unwrap()
}

/// Waits until the store state satisfies `predicate`.
pub async fn wait_for_state(
    store: &PostsStore,
    predicate: impl FnMut(&PostsState) -> bool,
) -> PostsState {
    let mut updates = store.subscribe();
    let state = tokio::time::timeout(Duration::from_secs(5), updates.wait_for(predicate))
        .await
        .expect("timed out waiting for store state")
        .expect("store dropped");
    state.clone()
}
