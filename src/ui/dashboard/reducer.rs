use crate::inventory::ItemDraft;
use crate::ui::dashboard::form::ItemForm;
use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::state::{DashboardMode, DashboardState};
use crate::ui::mvi::Reducer;

pub const INCOMPLETE_FORM_NOTICE: &str = "Fill in every field to add an item.";

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::MoveUp if state.is_browsing() => {
                state.selected = state.selected.saturating_sub(1);
            }
            DashboardIntent::MoveDown if state.is_browsing() => {
                let last = state.inventory.len().saturating_sub(1);
                state.selected = (state.selected + 1).min(last);
            }
            DashboardIntent::ToggleAddForm => {
                state.notice = None;
                state.mode = match state.mode {
                    DashboardMode::Adding(_) => DashboardMode::Browse,
                    _ => DashboardMode::Adding(ItemForm::default()),
                };
            }
            DashboardIntent::BeginEdit if state.is_browsing() => {
                if let Some(item) = state.selected_item() {
                    state.mode = DashboardMode::Editing {
                        id: item.id,
                        form: ItemForm::new(ItemDraft::from_item(item)),
                    };
                    state.notice = None;
                }
            }
            DashboardIntent::RequestDelete if state.is_browsing() => {
                if let Some(item) = state.selected_item() {
                    state.mode = DashboardMode::ConfirmDelete { id: item.id };
                }
            }
            DashboardIntent::ConfirmDelete => {
                if let DashboardMode::ConfirmDelete { id } = state.mode {
                    state.inventory = state.inventory.delete(id);
                    state.mode = DashboardMode::Browse;
                    clamp_selection(&mut state);
                }
            }
            DashboardIntent::CancelDelete => {
                if matches!(state.mode, DashboardMode::ConfirmDelete { .. }) {
                    state.mode = DashboardMode::Browse;
                }
            }
            DashboardIntent::Type(text) => {
                if let Some(form) = form_mut(&mut state.mode) {
                    form.type_text(&text);
                }
            }
            DashboardIntent::Backspace => {
                if let Some(form) = form_mut(&mut state.mode) {
                    form.backspace();
                }
            }
            DashboardIntent::NextField => {
                if let Some(form) = form_mut(&mut state.mode) {
                    form.focus = form.focus.next();
                }
            }
            DashboardIntent::PrevField => {
                if let Some(form) = form_mut(&mut state.mode) {
                    form.focus = form.focus.prev();
                }
            }
            DashboardIntent::CycleCategory { forward } => {
                let known = state.categories();
                if let Some(form) = form_mut(&mut state.mode) {
                    form.cycle_category(&known, forward);
                }
            }
            DashboardIntent::Submit => return submit(state),
            DashboardIntent::Cancel => {
                state.mode = DashboardMode::Browse;
                state.notice = None;
            }
            _ => {}
        }
        state
    }
}

fn submit(mut state: DashboardState) -> DashboardState {
    match std::mem::take(&mut state.mode) {
        DashboardMode::Adding(form) => {
            if form.draft.is_complete() {
                state.inventory = state.inventory.add(&form.draft);
                state.selected = state.inventory.len().saturating_sub(1);
                state.notice = None;
            } else {
                state.notice = Some(INCOMPLETE_FORM_NOTICE.to_string());
                state.mode = DashboardMode::Adding(form);
            }
        }
        DashboardMode::Editing { id, form } => {
            state.inventory = state.inventory.update(id, &form.draft);
            state.notice = None;
        }
        other => state.mode = other,
    }
    state
}

fn form_mut(mode: &mut DashboardMode) -> Option<&mut ItemForm> {
    match mode {
        DashboardMode::Adding(form) | DashboardMode::Editing { form, .. } => Some(form),
        _ => None,
    }
}

fn clamp_selection(state: &mut DashboardState) {
    state.selected = state.selected.min(state.inventory.len().saturating_sub(1));
}
