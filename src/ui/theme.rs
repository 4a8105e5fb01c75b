//! Colour palettes and text styles, one palette per brand.

use ratatui::style::{Color, Modifier, Style};

use crate::core::content::Page;

/// Central theme: change colours here and they propagate everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Document background.
    pub page_bg: (u8, u8, u8),
    /// Body text.
    pub text: (u8, u8, u8),
    pub muted: (u8, u8, u8),
    /// Brand accent (links, prices, progress bar).
    pub accent: (u8, u8, u8),
    /// Dark sections (features on Ananta, footer).
    pub dark_bg: (u8, u8, u8),
    pub dark_text: (u8, u8, u8),
    /// Solid navbar background.
    pub nav_bg: (u8, u8, u8),
    /// Hero gradient, top → bottom.
    pub hero_top: (u8, u8, u8),
    pub hero_bottom: (u8, u8, u8),
    /// Text drawn on top of the hero.
    pub hero_text: (u8, u8, u8),
    /// Menu overlay background.
    pub overlay_bg: (u8, u8, u8),
    pub overlay_text: (u8, u8, u8),
}

pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Mix `fg` over `bg` with coverage `alpha` (clamped to `[0, 1]`).
pub fn blend(fg: (u8, u8, u8), bg: (u8, u8, u8), alpha: f64) -> (u8, u8, u8) {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (f64::from(f) * a + f64::from(b) * (1.0 - a)).round() as u8;
    (mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}

impl Theme {
    pub fn for_page(page: Page) -> Self {
        match page {
            // slate / blue
            Page::Luxe => Self {
                page_bg: (248, 250, 252),
                text: (15, 23, 42),
                muted: (100, 116, 139),
                accent: (37, 99, 235),
                dark_bg: (15, 23, 42),
                dark_text: (203, 213, 225),
                nav_bg: (255, 255, 255),
                hero_top: (30, 58, 95),
                hero_bottom: (12, 18, 30),
                hero_text: (255, 255, 255),
                overlay_bg: (255, 255, 255),
                overlay_text: (51, 65, 85),
            },
            // cream / gold / near-black
            Page::Ananta => Self {
                page_bg: (250, 247, 240),
                text: (26, 26, 26),
                muted: (107, 114, 128),
                accent: (212, 175, 55),
                dark_bg: (26, 26, 26),
                dark_text: (229, 231, 235),
                nav_bg: (255, 255, 255),
                hero_top: (92, 64, 51),
                hero_bottom: (26, 20, 16),
                hero_text: (255, 255, 255),
                overlay_bg: (26, 26, 26),
                overlay_text: (255, 255, 255),
            },
        }
    }

    // ── document ───────────────────────────────────────────────
    pub fn body_style(&self) -> Style {
        Style::default().fg(rgb(self.text)).bg(rgb(self.page_bg))
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(rgb(self.muted)).bg(rgb(self.page_bg))
    }

    pub fn heading_style(&self) -> Style {
        self.body_style().add_modifier(Modifier::BOLD)
    }

    pub fn eyebrow_style(&self) -> Style {
        Style::default()
            .fg(rgb(self.accent))
            .bg(rgb(self.page_bg))
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(rgb(self.accent)).bg(rgb(self.page_bg))
    }

    pub fn dark_style(&self) -> Style {
        Style::default().fg(rgb(self.dark_text)).bg(rgb(self.dark_bg))
    }

    pub fn dark_accent_style(&self) -> Style {
        Style::default()
            .fg(rgb(self.accent))
            .bg(rgb(self.dark_bg))
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn nav_style(&self, solid: bool) -> Style {
        if solid {
            Style::default().fg(rgb(self.text)).bg(rgb(self.nav_bg))
        } else {
            Style::default().fg(rgb(self.hero_text))
        }
    }

    pub fn nav_cta_style(&self, solid: bool) -> Style {
        let base = Style::default().add_modifier(Modifier::BOLD);
        if solid {
            base.fg(rgb(self.nav_bg)).bg(rgb(self.text))
        } else {
            base.fg(rgb(self.text)).bg(rgb(self.hero_text))
        }
    }

    pub fn progress_style(&self) -> Style {
        Style::default().fg(rgb(self.accent))
    }

    pub fn overlay_style(&self) -> Style {
        Style::default().fg(rgb(self.overlay_text)).bg(rgb(self.overlay_bg))
    }

    pub fn overlay_selected_style(&self) -> Style {
        Style::default()
            .fg(rgb(self.accent))
            .bg(rgb(self.overlay_bg))
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let fg = (200, 100, 0);
        let bg = (0, 0, 100);
        assert_eq!(blend(fg, bg, 1.0), fg);
        assert_eq!(blend(fg, bg, 0.0), bg);
        assert_eq!(blend(fg, bg, 0.5), (100, 50, 50));
    }

    #[test]
    fn blend_clamps_alpha() {
        assert_eq!(blend((10, 10, 10), (0, 0, 0), 7.0), (10, 10, 10));
        assert_eq!(blend((10, 10, 10), (0, 0, 0), -1.0), (0, 0, 0));
    }
}
