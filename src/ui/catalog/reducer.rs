use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::state::CatalogState;
use crate::ui::mvi::Reducer;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::Type(text) => {
                state.query.search.extend(text.chars().filter(|c| !c.is_control()));
            }
            CatalogIntent::Backspace => {
                state.query.search.pop();
            }
            CatalogIntent::ClearSearch => state.query.search.clear(),
            CatalogIntent::CycleStatus => state.query.status = state.query.status.next(),
            CatalogIntent::CycleSort => state.query.sort = state.query.sort.next(),
            CatalogIntent::SetStatus(status) => state.query.status = status,
            CatalogIntent::SetSort(sort) => state.query.sort = sort,
            CatalogIntent::MoveUp => {
                state.selected = state.selected.saturating_sub(1);
                return state;
            }
            CatalogIntent::MoveDown => {
                state.selected = state.selected.saturating_add(1);
            }
        }

        // Any change to the view can shrink it under the cursor
        let rows = state.visible().len();
        state.selected = state.selected.min(rows.saturating_sub(1));
        state
    }
}
