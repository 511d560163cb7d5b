mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::CatalogState;
pub use view::render_catalog;
