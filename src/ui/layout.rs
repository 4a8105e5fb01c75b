//! Layout helpers: split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by the fixed navbar at the top of the page area.
pub const NAVBAR_HEIGHT: u16 = 3;

/// Width from which the navbar shows inline links instead of only the
/// hamburger.
pub const WIDE_NAV_MIN_WIDTH: u16 = 84;

/// Primary screen layout: the scrolling page and a bottom status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub page_area: Rect,
    pub navbar_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // page (navbar floats over it)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let page_area = chunks[0];
        let navbar_area = Rect {
            height: NAVBAR_HEIGHT.min(page_area.height),
            ..page_area
        };
        Self {
            page_area,
            navbar_area,
            status_area: chunks[1],
        }
    }
}

/// Centered rectangle with fixed dimensions, clamped to the available area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

pub fn point_in_rect(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_bar_is_last_row() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.status_area, Rect::new(0, 39, 100, 1));
        assert_eq!(layout.page_area.height, 39);
        assert_eq!(layout.navbar_area.height, NAVBAR_HEIGHT);
    }

    #[test]
    fn centered_is_clamped() {
        let r = centered_fixed(50, 20, Rect::new(0, 0, 30, 10));
        assert_eq!(r, Rect::new(0, 0, 30, 10));
        let r = centered_fixed(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(r, Rect::new(10, 3, 10, 4));
    }
}
