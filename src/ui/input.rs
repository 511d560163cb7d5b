use crate::ui::app::App;
use crate::ui::catalog::CatalogIntent;
use crate::ui::chat::ChatIntent;
use crate::ui::dashboard::{DashboardIntent, DashboardMode};
use crate::ui::page::Page;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'n') {
        app.next_page();
        return;
    }
    if is_ctrl_char(key, 'p') {
        app.prev_page();
        return;
    }

    match app.page() {
        Page::Catalog => handle_catalog_key(app, key),
        Page::Dashboard => handle_dashboard_key(app, key),
        Page::Assistant => handle_chat_key(app, key),
    }
}

fn handle_catalog_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Up => CatalogIntent::MoveUp,
        KeyCode::Down => CatalogIntent::MoveDown,
        KeyCode::Tab => CatalogIntent::CycleStatus,
        KeyCode::BackTab => CatalogIntent::CycleSort,
        KeyCode::Esc => CatalogIntent::ClearSearch,
        KeyCode::Backspace => CatalogIntent::Backspace,
        KeyCode::Char(ch) if is_plain(key) => CatalogIntent::Type(ch.to_string()),
        _ => return,
    };
    app.dispatch_catalog(intent);
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    let intent = match &app.dashboard().mode {
        DashboardMode::Browse => match key.code {
            KeyCode::Up | KeyCode::Char('k') => DashboardIntent::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => DashboardIntent::MoveDown,
            KeyCode::Char('a') => DashboardIntent::ToggleAddForm,
            KeyCode::Char('e') | KeyCode::Enter => DashboardIntent::BeginEdit,
            KeyCode::Char('d') | KeyCode::Delete => DashboardIntent::RequestDelete,
            _ => return,
        },
        DashboardMode::ConfirmDelete { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => DashboardIntent::ConfirmDelete,
            KeyCode::Char('n') | KeyCode::Esc => DashboardIntent::CancelDelete,
            _ => return,
        },
        DashboardMode::Adding(_) | DashboardMode::Editing { .. } => match key.code {
            KeyCode::Enter => DashboardIntent::Submit,
            KeyCode::Esc => DashboardIntent::Cancel,
            KeyCode::Tab | KeyCode::Down => DashboardIntent::NextField,
            KeyCode::BackTab | KeyCode::Up => DashboardIntent::PrevField,
            KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => {
                DashboardIntent::CycleCategory { forward: true }
            }
            KeyCode::Left if key.modifiers.contains(KeyModifiers::CONTROL) => {
                DashboardIntent::CycleCategory { forward: false }
            }
            KeyCode::Backspace => DashboardIntent::Backspace,
            KeyCode::Char(ch) if is_plain(key) => DashboardIntent::Type(ch.to_string()),
            _ => return,
        },
    };
    app.dispatch_dashboard(intent);
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'v') {
        app.toggle_voice();
        return;
    }
    let intent = match key.code {
        KeyCode::F(n @ 1..=4) => {
            app.ask_quick_question(usize::from(n - 1));
            return;
        }
        KeyCode::Enter => ChatIntent::Submit,
        KeyCode::Esc if app.chat().notice.is_some() => ChatIntent::DismissNotice,
        KeyCode::Esc => ChatIntent::ClearInput,
        KeyCode::PageUp | KeyCode::Up => {
            app.scroll_chat_up();
            return;
        }
        KeyCode::PageDown | KeyCode::Down => ChatIntent::ScrollDown,
        KeyCode::Backspace => ChatIntent::Backspace,
        KeyCode::Char(ch) if is_plain(key) => ChatIntent::Type(ch.to_string()),
        _ => return,
    };
    app.dispatch_chat(intent);
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::new(&Config::default(), Page::Catalog);
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_n_and_p_cycle_pages() {
        let mut app = App::new(&Config::default(), Page::Catalog);
        handle_key(&mut app, ctrl('n'));
        assert_eq!(app.page(), Page::Dashboard);
        handle_key(&mut app, ctrl('p'));
        handle_key(&mut app, ctrl('p'));
        assert_eq!(app.page(), Page::Assistant);
    }

    #[test]
    fn typing_on_catalog_edits_search() {
        let mut app = App::new(&Config::default(), Page::Catalog);
        for ch in "gauze".chars() {
            handle_key(&mut app, press(KeyCode::Char(ch)));
        }
        assert_eq!(app.catalog().visible().len(), 1);
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.catalog().query.search.is_empty());
    }

    #[test]
    fn dashboard_letters_are_commands_until_a_form_opens() {
        let mut app = App::new(&Config::default(), Page::Dashboard);
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Char('d')));
        assert_eq!(
            app.dashboard().form().map(|f| f.draft.name.as_str()),
            Some("d")
        );
        assert_eq!(app.dashboard().inventory.len(), 15);
    }

    #[test]
    fn enter_sends_chat_message() {
        let mut app = App::new(&Config::default(), Page::Assistant);
        for ch in "help".chars() {
            handle_key(&mut app, press(KeyCode::Char(ch)));
        }
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.chat().conversation.messages().len(), 3);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(&Config::default(), Page::Catalog);
        let mut key = ctrl('q');
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }
}
