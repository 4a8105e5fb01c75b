//! Navigation menu overlay shown while the menu latch is open.
//!
//! The heritage page covers the whole page area with a dark full-screen
//! menu; the marketplace page drops a panel down from under the navbar.
//! Entries are the page's nav links followed by the booking call-to-action.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::core::content::Page;

use super::layout::{point_in_rect, NAVBAR_HEIGHT};
use super::text::width;
use super::theme::{rgb, Theme};

/// What a click inside the overlay landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuHit {
    Link(usize),
    Cta,
    /// Inside the overlay but not on an entry.
    Backdrop,
}

/// Number of selectable entries: links plus the call-to-action.
pub fn entry_count(page: Page) -> usize {
    page.nav_links().len() + 1
}

/// Screen geometry of the overlay and each of its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    pub panel: Rect,
    /// One rect per entry, the call-to-action last.
    pub entries: Vec<Rect>,
}

/// One-row entry, or an empty rect at `y` when the row is at or past `limit`.
fn entry_rect(x: u16, y: u16, w: u16, limit: u16) -> Rect {
    let height = u16::from(y < limit);
    Rect::new(x, y.min(limit), w, height)
}

impl MenuLayout {
    pub fn compute(page: Page, page_area: Rect) -> Self {
        let labels: Vec<&str> = page
            .nav_links()
            .iter()
            .map(|l| l.label)
            .chain(std::iter::once(page.menu_cta()))
            .collect();

        match page {
            Page::Ananta => {
                let panel = page_area;
                let gap = 2;
                let used = labels.len() as u16 * gap;
                let mut y = panel.y + panel.height.saturating_sub(used) / 2;
                let entries = labels
                    .iter()
                    .map(|label| {
                        let w = (width(label) as u16 + 4).min(panel.width);
                        let x = panel.x + panel.width.saturating_sub(w) / 2;
                        let r = entry_rect(x, y, w, panel.bottom());
                        y += gap;
                        r
                    })
                    .collect();
                Self { panel, entries }
            }
            Page::Luxe => {
                let top = page_area.y + NAVBAR_HEIGHT.min(page_area.height);
                let height = (labels.len() as u16 + 3).min(page_area.bottom().saturating_sub(top));
                let panel = Rect::new(page_area.x, top, page_area.width, height);
                let entries = labels
                    .iter()
                    .enumerate()
                    .map(|(i, label)| {
                        // Blank line between the links and the button.
                        let extra = u16::from(i + 1 == labels.len());
                        let w = (width(label) as u16 + 4).min(panel.width.saturating_sub(4));
                        let y = panel.y + 1 + i as u16 + extra;
                        // The bottom row holds the border.
                        entry_rect(panel.x + 2, y, w, panel.bottom().saturating_sub(1))
                    })
                    .collect();
                Self { panel, entries }
            }
        }
    }

    /// Entries that fit inside the panel.
    pub fn visible_entries(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        self.entries
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, r)| !r.is_empty())
    }

    pub fn hit(&self, col: u16, row: u16) -> Option<MenuHit> {
        let last = self.entries.len().checked_sub(1)?;
        if let Some(i) = self.entries.iter().position(|&r| point_in_rect(r, col, row)) {
            return Some(if i == last { MenuHit::Cta } else { MenuHit::Link(i) });
        }
        point_in_rect(self.panel, col, row).then_some(MenuHit::Backdrop)
    }
}

pub struct MenuOverlay<'a> {
    pub page: Page,
    pub theme: &'a Theme,
    /// Highlighted entry.
    pub cursor: usize,
}

impl Widget for MenuOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = MenuLayout::compute(self.page, area);
        let panel = layout.panel;
        if panel.width == 0 || panel.height == 0 {
            return;
        }
        let t = self.theme;
        Clear.render(panel, buf);
        buf.set_style(panel, t.overlay_style());

        if self.page == Page::Luxe {
            Block::default()
                .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(rgb(t.muted)).bg(rgb(t.overlay_bg)))
                .render(panel, buf);
        }

        let last = layout.entries.len().saturating_sub(1);
        for (i, rect) in layout.visible_entries() {
            let label = self
                .page
                .nav_links()
                .get(i)
                .map_or(self.page.menu_cta(), |l| l.label);
            let selected = i == self.cursor;
            let (text, style) = if i == last {
                let style = Style::default()
                    .fg(rgb(t.overlay_bg))
                    .bg(rgb(t.accent))
                    .add_modifier(Modifier::BOLD);
                let style = if selected {
                    style.add_modifier(Modifier::UNDERLINED)
                } else {
                    style
                };
                (format!("  {label}  "), style)
            } else if selected {
                (format!("▸ {label}"), t.overlay_selected_style())
            } else {
                (format!("  {label}"), t.overlay_style())
            };
            let style = if self.page == Page::Ananta && i != last {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            };
            buf.set_line(rect.x, rect.y, &Line::styled(text, style), rect.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(page: Page, cursor: usize) -> (Buffer, MenuLayout) {
        let theme = Theme::for_page(page);
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        MenuOverlay {
            page,
            theme: &theme,
            cursor,
        }
        .render(area, &mut buf);
        (buf, MenuLayout::compute(page, area))
    }

    fn text_at(buf: &Buffer, r: Rect) -> String {
        (r.x..r.right()).map(|x| buf[(x, r.y)].symbol().to_string()).collect()
    }

    #[test]
    fn full_screen_menu_covers_page() {
        let (buf, layout) = screen(Page::Ananta, 0);
        assert_eq!(layout.panel, Rect::new(0, 0, 80, 30));
        assert_eq!(layout.entries.len(), entry_count(Page::Ananta));
        let theme = Theme::for_page(Page::Ananta);
        assert_eq!(buf[(0, 0)].bg, rgb(theme.overlay_bg));
        assert!(text_at(&buf, layout.entries[4]).contains("Reserve Your Stay"));
    }

    #[test]
    fn dropdown_sits_below_navbar() {
        let (buf, layout) = screen(Page::Luxe, 1);
        assert_eq!(layout.panel.y, NAVBAR_HEIGHT);
        assert!(layout.panel.height < 30);
        assert!(text_at(&buf, layout.entries[1]).contains("▸ Hotels"));
        assert!(text_at(&buf, layout.entries[4]).contains("Sign In"));
    }

    #[test]
    fn short_terminal_clips_dropdown_entries() {
        let page = Page::Luxe;
        let theme = Theme::for_page(page);
        let screen = Rect::new(0, 0, 80, 7);
        let area = crate::ui::layout::AppLayout::from_area(screen).page_area;
        let mut buf = Buffer::empty(screen);
        MenuOverlay {
            page,
            theme: &theme,
            cursor: entry_count(page) - 1,
        }
        .render(area, &mut buf);

        let layout = MenuLayout::compute(page, area);
        assert_eq!(layout.entries.len(), entry_count(page));
        for (_, r) in layout.visible_entries() {
            assert!(r.bottom() < layout.panel.bottom());
        }
        assert_eq!(layout.visible_entries().count(), 1);
        let hidden = layout.entries[entry_count(page) - 1];
        assert!(hidden.is_empty());
        assert_eq!(layout.hit(hidden.x, hidden.y), Some(MenuHit::Backdrop));
    }

    #[test]
    fn tiny_full_screen_menu_stays_in_bounds() {
        let page = Page::Ananta;
        let theme = Theme::for_page(page);
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        MenuOverlay {
            page,
            theme: &theme,
            cursor: 0,
        }
        .render(area, &mut buf);
        let layout = MenuLayout::compute(page, area);
        assert!(layout.visible_entries().all(|(_, r)| r.bottom() <= area.bottom()));
    }

    #[test]
    fn hit_test_distinguishes_entries() {
        let (_, layout) = screen(Page::Luxe, 0);
        let link = layout.entries[2];
        assert_eq!(layout.hit(link.x, link.y), Some(MenuHit::Link(2)));
        let cta = layout.entries[4];
        assert_eq!(layout.hit(cta.x, cta.y), Some(MenuHit::Cta));
        assert_eq!(layout.hit(79, layout.panel.y + 1), Some(MenuHit::Backdrop));
        assert_eq!(layout.hit(0, 29), None);
    }
}
