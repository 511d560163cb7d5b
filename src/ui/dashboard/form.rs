//! Text form backing the add and edit dialogs.

use crate::inventory::ItemDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Category,
    Quantity,
    Threshold,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Category,
        FormField::Quantity,
        FormField::Threshold,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Item Name",
            FormField::Category => "Category",
            FormField::Quantity => "Quantity",
            FormField::Threshold => "Threshold",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, FormField::Quantity | FormField::Threshold)
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Category,
            FormField::Category => FormField::Quantity,
            FormField::Quantity => FormField::Threshold,
            FormField::Threshold => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Threshold,
            FormField::Category => FormField::Name,
            FormField::Quantity => FormField::Category,
            FormField::Threshold => FormField::Quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemForm {
    pub draft: ItemDraft,
    pub focus: FormField,
}

impl ItemForm {
    pub fn new(draft: ItemDraft) -> Self {
        Self {
            draft,
            focus: FormField::Name,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.draft.name,
            FormField::Category => &self.draft.category,
            FormField::Quantity => &self.draft.quantity,
            FormField::Threshold => &self.draft.threshold,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.draft.name,
            FormField::Category => &mut self.draft.category,
            FormField::Quantity => &mut self.draft.quantity,
            FormField::Threshold => &mut self.draft.threshold,
        }
    }

    /// Numeric fields only accept digits, like a number input.
    pub fn type_text(&mut self, text: &str) {
        let field = self.focus;
        let accepted = text
            .chars()
            .filter(|c| !c.is_control())
            .filter(|c| !field.is_numeric() || c.is_ascii_digit());
        self.value_mut(field).extend(accepted);
    }

    pub fn backspace(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
    }

    /// Steps the category through `known`; unknown values jump to the first entry.
    pub fn cycle_category(&mut self, known: &[String], forward: bool) {
        if known.is_empty() {
            return;
        }
        let next = match known.iter().position(|c| *c == self.draft.category) {
            Some(index) if forward => (index + 1) % known.len(),
            Some(index) => (index + known.len() - 1) % known.len(),
            None => 0,
        };
        self.draft.category = known[next].clone();
    }
}
