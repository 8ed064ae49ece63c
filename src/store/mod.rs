//! Posts store: the single writer of [`PostsState`].
//!
//! Operations apply a start intent synchronously, run the request on the
//! tokio runtime and apply the success or failure intent on completion.
//! Every mutation goes through [`PostsReducer`].

mod error;
mod handle;
mod intent;
mod reducer;
mod state;

pub use error::PostsError;
pub use handle::PostsStore;
pub use intent::PostsIntent;
pub use reducer::PostsReducer;
pub use state::{OpStatus, PostsState, StatusFlag};
