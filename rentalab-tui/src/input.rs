//! Keyboard input dispatch — overlay → global keys → panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Panel, FILTER_SECTIONS};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. The editor overlay consumes input first.
    if matches!(app.overlay, Overlay::EditPrice { .. }) {
        handle_edit_overlay(app, key);
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.active_panel = Panel::Detail;
            return;
        }
        KeyCode::Char('2') => {
            app.active_panel = Panel::Ranking;
            return;
        }
        KeyCode::Char('3') => {
            app.active_panel = Panel::Filters;
            return;
        }
        KeyCode::Char('4') => {
            app.active_panel = Panel::Help;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('R') => {
            app.reset_data();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Detail => handle_detail_key(app, key),
        Panel::Ranking => handle_ranking_key(app, key),
        Panel::Filters => handle_filter_key(app, key),
        Panel::Help => {} // display only
    }
}

fn handle_edit_overlay(app: &mut AppState, key: KeyEvent) {
    let Overlay::EditPrice { input, .. } = &mut app.overlay else {
        return;
    };
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
        }
        KeyCode::Enter => {
            app.commit_price_edit();
        }
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == ',' || c == '.' || c == '-' => {
            input.push(c);
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.detail_scroll = app.detail_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.detail_scroll = app.detail_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.detail_scroll = 0;
        }
        _ => {}
    }
}

fn handle_ranking_key(app: &mut AppState, key: KeyEvent) {
    let entries = app.board.entries.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if entries > 0 && app.ranking_cursor + 1 < entries {
                app.ranking_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.ranking_cursor = app.ranking_cursor.saturating_sub(1);
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            app.open_price_editor();
        }
        _ => {}
    }
}

fn handle_filter_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => {
            app.filter_section = (app.filter_section + FILTER_SECTIONS - 1) % FILTER_SECTIONS;
            app.filter_cursor = 0;
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.filter_section = (app.filter_section + 1) % FILTER_SECTIONS;
            app.filter_cursor = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let rows = app.filter_rows().len();
            if rows > 0 && app.filter_cursor + 1 < rows {
                app.filter_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.filter_cursor = app.filter_cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_filter_at_cursor();
        }
        KeyCode::Char('c') => {
            app.clear_filters();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentalab_core::data::{FeedClient, FeedSnapshot};
    use rentalab_core::{AppConfig, SessionStore};

    const FEED: &str = "\
Escandallo,Código,Nombre,Cantidad(kg),Coste_despiece,Coste_congelación,Precio EXW,Familia
E1,1,Lomo,60,0,0,\"5,0\",Porcino
E2,2,Solomillo,10,0,0,\"9,0\",Vacuno
";

    fn app() -> AppState {
        let store =
            SessionStore::from_snapshot(FeedSnapshot::from_bytes(FEED.as_bytes().to_vec()))
                .unwrap();
        AppState::new(store, AppConfig::default(), FeedClient::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_switch_panels() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.active_panel, Panel::Ranking);
        handle_key(&mut app, press(KeyCode::Char('4')));
        assert_eq!(app.active_panel, Panel::Help);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_panel, Panel::Detail);
    }

    #[test]
    fn q_quits_outside_the_editor() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn ranking_cursor_is_bounded() {
        let mut app = app();
        app.active_panel = Panel::Ranking;
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.ranking_cursor, 1);
        handle_key(&mut app, press(KeyCode::Char('k')));
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.ranking_cursor, 0);
    }

    #[test]
    fn editor_collects_digits_and_separators() {
        let mut app = app();
        app.active_panel = Panel::Ranking;
        handle_key(&mut app, press(KeyCode::Enter));
        // Prefilled with the current price; clear it first.
        for _ in 0..8 {
            handle_key(&mut app, press(KeyCode::Backspace));
        }
        for c in "12,75x".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        let Overlay::EditPrice { input, .. } = &app.overlay else {
            panic!("editor should be open");
        };
        assert_eq!(input, "12,75"); // the stray 'x' is ignored
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn editor_enter_commits_the_price() {
        let mut app = app();
        app.active_panel = Panel::Ranking;
        app.ranking_cursor = 1; // E1, the trailing entry
        handle_key(&mut app, press(KeyCode::Enter));
        for _ in 0..8 {
            handle_key(&mut app, press(KeyCode::Backspace));
        }
        for c in "40".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.board.entries[0].escandallo, "E1");
    }

    #[test]
    fn filter_space_toggles_selection() {
        let mut app = app();
        app.active_panel = Panel::Filters;
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert_eq!(app.board.entries.len(), 1);
        handle_key(&mut app, press(KeyCode::Char('c')));
        assert_eq!(app.board.entries.len(), 2);
    }
}
