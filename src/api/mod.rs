//! HTTP/JSON access to the posts collection of the mock REST backend.

mod client;
mod error;
mod types;

pub use client::PostsClient;
pub use error::ApiError;
pub use types::{Post, PostDraft};
