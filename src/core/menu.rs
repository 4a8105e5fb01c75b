//! Mobile navigation overlay latch.
//!
//! Only explicit user actions move the state: the hamburger toggles it,
//! a link or the booking call-to-action closes it.  Closing always happens
//! before the secondary action runs so both land in the same frame.

/// Visibility of the navigation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Owner of [`MenuState`] plus the overlay's link cursor.
#[derive(Debug, Default)]
pub struct MenuController {
    state: MenuState,
    /// Highlighted entry while open (links, then the booking button).
    cursor: usize,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Hamburger activation.
    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Closed => {
                self.cursor = 0;
                MenuState::Open
            }
            MenuState::Open => MenuState::Closed,
        };
        tracing::debug!(state = ?self.state, "menu toggled");
        self.state
    }

    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Navigation link activation: close first, then hand the link back so
    /// the caller navigates within the same update.
    pub fn activate_link<L>(&mut self, link: L) -> L {
        self.close();
        link
    }

    /// Booking call-to-action: close, then run the opaque booking trigger.
    pub fn activate_booking<F: FnOnce()>(&mut self, trigger: F) {
        self.close();
        trigger();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the highlight among `entries` items, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize, entries: usize) {
        if entries == 0 {
            self.cursor = 0;
            return;
        }
        let n = entries as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(n) as usize;
    }

    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuController::new().state(), MenuState::Closed);
    }

    #[test]
    fn hamburger_opens() {
        let mut menu = MenuController::new();
        assert_eq!(menu.toggle(), MenuState::Open);
        assert!(menu.is_open());
    }

    #[test]
    fn two_toggles_round_trip() {
        let mut menu = MenuController::new();
        menu.toggle();
        menu.toggle();
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn link_closes_and_returns_link() {
        let mut menu = MenuController::new();
        menu.toggle();
        let link = menu.activate_link("#rooms");
        assert_eq!(link, "#rooms");
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn link_from_closed_stays_closed() {
        let mut menu = MenuController::new();
        menu.activate_link(3_usize);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn booking_closes_and_fires_trigger() {
        let mut menu = MenuController::new();
        menu.toggle();
        let calls = Cell::new(0);
        menu.activate_booking(|| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 1);
        assert!(!menu.is_open());
    }

    #[test]
    fn cursor_wraps() {
        let mut menu = MenuController::new();
        menu.toggle();
        menu.move_cursor(-1, 5);
        assert_eq!(menu.cursor(), 4);
        menu.move_cursor(2, 5);
        assert_eq!(menu.cursor(), 1);
        menu.move_cursor(1, 0);
        assert_eq!(menu.cursor(), 0);
    }

    #[test]
    fn reopening_resets_cursor() {
        let mut menu = MenuController::new();
        menu.toggle();
        menu.move_cursor(2, 5);
        menu.toggle();
        menu.toggle();
        assert_eq!(menu.cursor(), 0);
    }
}
