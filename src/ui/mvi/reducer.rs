//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Transforms a page state based on an intent.
///
/// `(State, Intent) -> State`, with no side effects. Inventory
/// transitions inside a reducer go through the value-returning
/// [`crate::inventory::Inventory`] methods.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
