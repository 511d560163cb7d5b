//! Model-View-Intent (MVI) primitives shared by every page.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Each page (catalog, dashboard, assistant) owns one state value,
//! including its own inventory copy. Reducers are pure; side effects such
//! as scheduling an assistant reply happen in [`crate::ui::app::App`]
//! after a dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
