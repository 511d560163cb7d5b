use supplysoul::assistant::{AssistantReply, Speaker};
use supplysoul::inventory::{seed_items, Inventory, SortKey, StatusFilter, StockStatus};
use supplysoul::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use supplysoul::ui::chat::{ChatIntent, ChatReducer, ChatState};
use supplysoul::ui::dashboard::{DashboardIntent, DashboardMode, DashboardReducer, DashboardState};
use supplysoul::ui::mvi::Reducer;

fn catalog(intents: Vec<CatalogIntent>) -> CatalogState {
    intents.into_iter().fold(
        CatalogState::new(Inventory::new(seed_items())),
        CatalogReducer::reduce,
    )
}

fn dashboard(intents: Vec<DashboardIntent>) -> DashboardState {
    intents.into_iter().fold(
        DashboardState::new(Inventory::new(seed_items())),
        DashboardReducer::reduce,
    )
}

fn chat(state: ChatState, intents: Vec<ChatIntent>) -> ChatState {
    intents.into_iter().fold(state, ChatReducer::reduce)
}

fn typed(text: &str) -> CatalogIntent {
    CatalogIntent::Type(text.to_string())
}

/// Status filter cycles All → In Stock → Low Stock → Out of Stock → All.
#[test]
fn test_catalog_status_cycle() {
    let state = catalog(vec![CatalogIntent::CycleStatus]);
    assert_eq!(state.query.status, StatusFilter::Only(StockStatus::InStock));
    assert_eq!(state.visible().len(), 10);

    let state = catalog(vec![CatalogIntent::CycleStatus; 3]);
    assert_eq!(state.query.status, StatusFilter::Only(StockStatus::OutOfStock));
    assert_eq!(state.visible()[0].name, "Amoxicillin 250mg");

    let state = catalog(vec![CatalogIntent::CycleStatus; 4]);
    assert_eq!(state.query.status, StatusFilter::All);
}

#[test]
fn test_catalog_sort_cycle() {
    let state = catalog(vec![CatalogIntent::CycleSort]);
    assert_eq!(state.query.sort, SortKey::Quantity);
    assert_eq!(state.visible()[0].name, "Face Masks (Box)");

    let state = catalog(vec![CatalogIntent::CycleSort; 4]);
    assert_eq!(state.query.sort, SortKey::Name);
}

#[test]
fn test_catalog_search_narrows_and_clears() {
    let state = catalog(vec![typed("box")]);
    let names: Vec<String> = state.visible().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Face Masks (Box)", "Gloves (Box)"]);

    let state = catalog(vec![typed("box"), CatalogIntent::ClearSearch]);
    assert_eq!(state.visible().len(), 15);

    let state = catalog(vec![typed("boxx"), CatalogIntent::Backspace]);
    assert_eq!(state.query.search, "box");
}

/// A search with no hits leaves an empty view and the cursor at 0.
#[test]
fn test_catalog_search_without_hits() {
    let state = catalog(vec![typed("zzz")]);
    assert!(state.visible().is_empty());
    assert_eq!(state.selected, 0);
}

#[test]
fn test_catalog_selection_clamps_when_view_shrinks() {
    let mut intents = vec![CatalogIntent::MoveDown; 20];
    let state = catalog(intents.clone());
    assert_eq!(state.selected, 14);

    intents.push(CatalogIntent::SetStatus(StatusFilter::Only(StockStatus::LowStock)));
    let state = catalog(intents);
    assert_eq!(state.selected, 3);
}

#[test]
fn test_catalog_set_sort() {
    let state = catalog(vec![CatalogIntent::SetSort(SortKey::Status)]);
    assert_eq!(state.visible()[0].status(), StockStatus::OutOfStock);
}

/// Adding through the form walks every field in tab order.
#[test]
fn test_dashboard_add_through_form() {
    let state = dashboard(vec![
        DashboardIntent::ToggleAddForm,
        DashboardIntent::Type("Gauze Rolls".into()),
        DashboardIntent::NextField,
        DashboardIntent::Type("First Aid".into()),
        DashboardIntent::NextField,
        DashboardIntent::Type("4x0".into()),
        DashboardIntent::NextField,
        DashboardIntent::Type("10".into()),
        DashboardIntent::Submit,
    ]);
    assert!(state.is_browsing());
    assert_eq!(state.inventory.len(), 16);
    let added = state.selected_item().cloned().expect("new row is selected");
    assert_eq!(added.id, 16);
    assert_eq!(added.name, "Gauze Rolls");
    // Letters are dropped from numeric fields.
    assert_eq!(added.quantity, 40);
    assert_eq!(added.status(), StockStatus::InStock);
}

#[test]
fn test_dashboard_incomplete_add_keeps_form_open() {
    let state = dashboard(vec![
        DashboardIntent::ToggleAddForm,
        DashboardIntent::Type("Gauze Rolls".into()),
        DashboardIntent::Submit,
    ]);
    assert!(matches!(state.mode, DashboardMode::Adding(_)));
    assert_eq!(state.inventory.len(), 15);
    assert!(state.notice.is_some());

    let state = DashboardReducer::reduce(state, DashboardIntent::Cancel);
    assert!(state.is_browsing());
    assert_eq!(state.inventory.len(), 15);
}

#[test]
fn test_dashboard_edit_prefills_and_saves() {
    let state = dashboard(vec![DashboardIntent::MoveDown, DashboardIntent::BeginEdit]);
    let form = state.form().cloned().expect("edit form");
    assert_eq!(form.draft.name, "Ibuprofen 400mg");
    assert_eq!(form.draft.quantity, "25");

    let state = [
        DashboardIntent::NextField,
        DashboardIntent::NextField,
        DashboardIntent::Backspace,
        DashboardIntent::Backspace,
        DashboardIntent::Type("90".into()),
        DashboardIntent::Submit,
    ]
    .into_iter()
    .fold(state, DashboardReducer::reduce);
    assert!(state.is_browsing());
    let item = state.inventory.get(2).cloned().expect("item 2");
    assert_eq!(item.quantity, 90);
    assert_eq!(item.status(), StockStatus::InStock);
}

#[test]
fn test_dashboard_delete_can_be_cancelled() {
    let state = dashboard(vec![
        DashboardIntent::RequestDelete,
        DashboardIntent::CancelDelete,
    ]);
    assert!(state.is_browsing());
    assert_eq!(state.inventory.len(), 15);

    let state = dashboard(vec![
        DashboardIntent::RequestDelete,
        DashboardIntent::ConfirmDelete,
    ]);
    assert!(state.inventory.get(1).is_none());
    assert_eq!(state.stats().total, 14);
}

#[test]
fn test_dashboard_confirm_without_request_does_nothing() {
    let state = dashboard(vec![DashboardIntent::ConfirmDelete]);
    assert_eq!(state.inventory.len(), 15);
}

#[test]
fn test_dashboard_category_picker_cycles_known_categories() {
    let state = dashboard(vec![
        DashboardIntent::ToggleAddForm,
        DashboardIntent::NextField,
        DashboardIntent::CycleCategory { forward: true },
    ]);
    let form = state.form().cloned().expect("add form");
    assert_eq!(form.draft.category, "Pain Relief");
}

#[test]
fn test_chat_round_trip() {
    let state = chat(
        ChatState::default(),
        vec![ChatIntent::Type("total".into()), ChatIntent::Submit],
    );
    assert_eq!(state.pending, Some(2));

    let state = ChatReducer::reduce(
        state,
        ChatIntent::ReplyArrived(AssistantReply {
            turn: 2,
            text: "Total items: 0. In stock: 0, Low stock: 0, Out of stock: 0".into(),
        }),
    );
    assert!(state.pending.is_none());
    let speakers: Vec<Speaker> = state
        .conversation
        .messages()
        .iter()
        .map(|m| m.speaker)
        .collect();
    assert_eq!(speakers, vec![Speaker::Bot, Speaker::User, Speaker::Bot]);
}

#[test]
fn test_chat_ignores_sends_while_thinking() {
    let state = chat(
        ChatState::default(),
        vec![
            ChatIntent::Ask("total".into()),
            ChatIntent::Type("help".into()),
            ChatIntent::Submit,
        ],
    );
    assert_eq!(state.conversation.messages().len(), 2);
    assert_eq!(state.input, "help");
}

#[test]
fn test_chat_transcript_is_sent_like_typed_text() {
    let state = chat(
        ChatState::default(),
        vec![
            ChatIntent::ListeningStarted,
            ChatIntent::Transcript("low stock".into()),
        ],
    );
    assert!(!state.listening);
    assert_eq!(state.pending_query().map(|m| m.text.as_str()), Some("low stock"));
    assert!(state.input.is_empty());
}
