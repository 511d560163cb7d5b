mod form;
mod intent;
mod reducer;
mod state;
mod view;

pub use form::{FormField, ItemForm};
pub use intent::DashboardIntent;
pub use reducer::{DashboardReducer, INCOMPLETE_FORM_NOTICE};
pub use state::{DashboardMode, DashboardState};
pub use view::render_dashboard;
