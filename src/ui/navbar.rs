//! Fixed navigation bar drawn over the top of the page.
//!
//! Transparent over the hero until the scroll threshold is crossed, then a
//! solid bar with an underline.  Hit regions are computed once by
//! [`NavbarLayout`] so the mouse handler and the widget agree on positions.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::core::content::Page;

use super::layout::{point_in_rect, WIDE_NAV_MIN_WIDTH};
use super::text::width;
use super::theme::{rgb, Theme};

const HAMBURGER_OPEN: &str = " ✕ ";
const HAMBURGER_CLOSED: &str = " ☰ ";

/// What a click on the navbar landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    Brand,
    Link(usize),
    Cta,
    Hamburger,
}

/// Screen positions of everything clickable in the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarLayout {
    pub brand: Rect,
    /// Inline links; empty on narrow terminals.
    pub links: Vec<Rect>,
    pub cta: Option<Rect>,
    pub hamburger: Rect,
}

impl NavbarLayout {
    pub fn compute(page: Page, area: Rect) -> Self {
        let row = area.y + area.height.min(3) / 2;
        let mut x = area.x + 2;
        let brand_w = width(page.brand()) as u16;
        let brand = Rect::new(x, row, brand_w.min(area.width), 1);

        let hamburger_w = width(HAMBURGER_CLOSED) as u16;
        let right = area.x + area.width;
        let hamburger = Rect::new(right.saturating_sub(hamburger_w + 1).max(area.x), row, hamburger_w, 1);

        let mut links = Vec::new();
        let mut cta = None;
        if area.width >= WIDE_NAV_MIN_WIDTH {
            let cta_w = width(page.nav_cta()) as u16 + 2;
            let cta_x = hamburger.x.saturating_sub(cta_w + 2);
            cta = Some(Rect::new(cta_x, row, cta_w, 1));

            x += brand_w + 4;
            for link in page.nav_links() {
                let w = width(link.label) as u16;
                if x + w >= cta_x {
                    break;
                }
                links.push(Rect::new(x, row, w, 1));
                x += w + 3;
            }
        }
        Self {
            brand,
            links,
            cta,
            hamburger,
        }
    }

    pub fn hit(&self, col: u16, row: u16) -> Option<NavHit> {
        if point_in_rect(self.hamburger, col, row) {
            return Some(NavHit::Hamburger);
        }
        if self.cta.is_some_and(|r| point_in_rect(r, col, row)) {
            return Some(NavHit::Cta);
        }
        if let Some(i) = self.links.iter().position(|&r| point_in_rect(r, col, row)) {
            return Some(NavHit::Link(i));
        }
        point_in_rect(self.brand, col, row).then_some(NavHit::Brand)
    }
}

pub struct NavbarWidget<'a> {
    pub page: Page,
    pub theme: &'a Theme,
    pub solid: bool,
    pub menu_open: bool,
}

impl Widget for NavbarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let t = self.theme;
        let style = t.nav_style(self.solid);
        if self.solid {
            buf.set_style(area, style);
            if area.height >= 3 {
                let y = area.y + area.height - 1;
                let rule = Style::default().fg(rgb(t.muted)).bg(rgb(t.nav_bg));
                buf.set_stringn(area.x, y, "─".repeat(usize::from(area.width)), usize::from(area.width), rule);
            }
        }

        let layout = NavbarLayout::compute(self.page, area);
        let brand_style = if self.solid {
            style.fg(rgb(t.accent))
        } else {
            style
        };
        buf.set_stringn(
            layout.brand.x,
            layout.brand.y,
            self.page.brand(),
            usize::from(layout.brand.width),
            brand_style.add_modifier(Modifier::BOLD),
        );

        for (rect, link) in layout.links.iter().zip(self.page.nav_links()) {
            buf.set_stringn(rect.x, rect.y, link.label, usize::from(rect.width), style);
        }
        if let Some(rect) = layout.cta {
            let label = format!(" {} ", self.page.nav_cta());
            buf.set_stringn(rect.x, rect.y, label, usize::from(rect.width), t.nav_cta_style(self.solid));
        }

        let glyph = if self.menu_open {
            HAMBURGER_OPEN
        } else {
            HAMBURGER_CLOSED
        };
        let h = layout.hamburger;
        buf.set_stringn(h.x, h.y, glyph, usize::from(h.width), style.add_modifier(Modifier::BOLD));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    fn render(page: Page, w: u16, solid: bool, menu_open: bool) -> Buffer {
        let theme = Theme::for_page(page);
        let area = Rect::new(0, 0, w, 3);
        let mut buf = Buffer::empty(area);
        NavbarWidget {
            page,
            theme: &theme,
            solid,
            menu_open,
        }
        .render(area, &mut buf);
        buf
    }

    #[test]
    fn wide_layout_has_links_and_cta() {
        let layout = NavbarLayout::compute(Page::Ananta, Rect::new(0, 0, 120, 3));
        assert_eq!(layout.links.len(), Page::Ananta.nav_links().len());
        assert!(layout.cta.is_some());
        let text = row_text(&render(Page::Ananta, 120, false, false), 1);
        assert!(text.contains("Suites"));
        assert!(text.contains("Book Stay"));
        assert!(text.contains('☰'));
    }

    #[test]
    fn narrow_layout_keeps_only_brand_and_hamburger() {
        let layout = NavbarLayout::compute(Page::Luxe, Rect::new(0, 0, 40, 3));
        assert!(layout.links.is_empty());
        assert!(layout.cta.is_none());
        assert_eq!(layout.hit(layout.hamburger.x, 1), Some(NavHit::Hamburger));
    }

    #[test]
    fn hit_test_matches_drawn_positions() {
        let layout = NavbarLayout::compute(Page::Luxe, Rect::new(0, 0, 120, 3));
        let second = layout.links[1];
        assert_eq!(layout.hit(second.x, second.y), Some(NavHit::Link(1)));
        let cta = layout.cta.expect("wide navbar has a cta");
        assert_eq!(layout.hit(cta.x + 1, cta.y), Some(NavHit::Cta));
        assert_eq!(layout.hit(layout.brand.x, layout.brand.y), Some(NavHit::Brand));
        assert_eq!(layout.hit(0, 0), None);
    }

    #[test]
    fn solid_bar_fills_background_and_rules_bottom() {
        let theme = Theme::for_page(Page::Luxe);
        let buf = render(Page::Luxe, 100, true, false);
        assert_eq!(buf[(50, 0)].bg, rgb(theme.nav_bg));
        assert!(row_text(&buf, 2).starts_with("───"));

        let clear = render(Page::Luxe, 100, false, false);
        assert_eq!(clear[(50, 0)].bg, ratatui::style::Color::Reset);
    }

    #[test]
    fn open_menu_shows_close_glyph() {
        let text = row_text(&render(Page::Luxe, 60, true, true), 1);
        assert!(text.contains('✕'));
        assert!(!text.contains('☰'));
    }
}
