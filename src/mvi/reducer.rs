use super::intent::Intent;
use super::state::UiState;

/// Applies intents to a state.
///
/// Reducers are the only place a state changes and must not perform I/O.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
