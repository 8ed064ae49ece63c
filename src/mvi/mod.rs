//! Model-View-Intent primitives shared by the posts store and the screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: snapshot the view renders from
//! - **Intent**: user action or network completion
//! - **Reducer**: pure `(State, Intent) -> State` transition

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
