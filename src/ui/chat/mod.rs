mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ChatIntent;
pub use reducer::ChatReducer;
pub use state::ChatState;
pub use view::{render_chat, scroll_limit};
