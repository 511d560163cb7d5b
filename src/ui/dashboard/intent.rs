use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DashboardIntent {
    MoveUp,
    MoveDown,
    /// Opens the add form, or closes it when already open.
    ToggleAddForm,
    BeginEdit,
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
    Type(String),
    Backspace,
    NextField,
    PrevField,
    /// Steps the category field through the categories already in use.
    CycleCategory { forward: bool },
    /// Adds or saves, depending on the open form.
    Submit,
    Cancel,
}

impl Intent for DashboardIntent {}
