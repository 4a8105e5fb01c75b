//! Input handling: maps key/mouse events to state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;
use crate::ui::hero::search_box;
use crate::ui::layout::point_in_rect;
use crate::ui::menu_overlay::{entry_count, MenuHit, MenuLayout};
use crate::ui::navbar::{NavHit, NavbarLayout};

use super::state::{ActiveView, AppState};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }
    // Any key dismisses the last status message.
    state.status_message = None;

    match state.active_view {
        ActiveView::Page => handle_page_key(state, key),
        ActiveView::Booking => handle_booking_key(state, key),
    }
}

// ── Page view (configurable bindings) ───────────────────────────

fn handle_page_key(state: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        state.menu.close();
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    let step = i64::from(state.config.tuning.scroll_step_rows);
    let entries = entry_count(state.page);

    match action {
        Action::Quit => state.should_quit = true,
        Action::ScrollUp => state.scroll_rows(-step),
        Action::ScrollDown => state.scroll_rows(step),
        Action::PageUp => state.scroll_rows(-state.page_rows()),
        Action::PageDown => state.scroll_rows(state.page_rows()),
        Action::Top => state.scroll_to_top(),
        Action::Bottom => state.scroll_to_bottom(),
        Action::ToggleMenu => {
            state.menu.toggle();
        }
        Action::NextLink if state.menu.is_open() => state.menu.move_cursor(1, entries),
        Action::PrevLink if state.menu.is_open() => state.menu.move_cursor(-1, entries),
        Action::Activate if state.menu.is_open() => {
            let index = state.menu.cursor();
            state.activate_menu_entry(index);
        }
        Action::Book => state.open_booking(),
        Action::NextLink | Action::PrevLink | Action::Activate => {}
    }
}

// ── Booking popup ───────────────────────────────────────────────

fn handle_booking_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => state.active_view = ActiveView::Page,
        KeyCode::Enter => state.confirm_booking(),
        _ => {}
    }
}

// ── Mouse ───────────────────────────────────────────────────────

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view != ActiveView::Page {
        return;
    }
    let step = i64::from(state.config.tuning.scroll_step_rows);

    match mouse.kind {
        // The open full-screen menu swallows wheel input.
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp if menu_covers_page(state) => {}
        MouseEventKind::ScrollDown => state.scroll_rows(step),
        MouseEventKind::ScrollUp => state.scroll_rows(-step),
        MouseEventKind::Down(MouseButton::Left) => handle_click(state, mouse.column, mouse.row),
        _ => {}
    }
}

fn menu_covers_page(state: &AppState) -> bool {
    state.menu.is_open() && !state.page.traits().solid_nav_when_menu_open
}

fn handle_click(state: &mut AppState, col: u16, row: u16) {
    let layout = state.layout();

    // The navbar is drawn above the overlay, so it wins.
    if let Some(hit) = NavbarLayout::compute(state.page, layout.navbar_area).hit(col, row) {
        match hit {
            NavHit::Hamburger => {
                state.menu.toggle();
            }
            NavHit::Brand => state.follow_brand(),
            NavHit::Link(i) => state.activate_menu_entry(i),
            NavHit::Cta => state.open_booking(),
        }
        return;
    }

    if !state.menu.is_open() {
        let search = search_box(
            state.page,
            &state.stay,
            layout.page_area,
            state.document.hero_rows,
            state.scroll_row(),
        );
        if search.is_some_and(|r| point_in_rect(r, col, row)) {
            state.open_booking();
        }
        return;
    }
    match MenuLayout::compute(state.page, layout.page_area).hit(col, row) {
        Some(MenuHit::Link(i)) => state.activate_menu_entry(i),
        Some(MenuHit::Cta) => state.activate_menu_entry(state.page.nav_links().len()),
        Some(MenuHit::Backdrop) => {}
        // Clicking the page below a dropdown dismisses it.
        None => state.menu.close(),
    }
}
