//! Full-screen hero banner with parallax background, timed intro copy and
//! the search / availability widget pinned near its bottom edge.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::core::booking::StaySummary;
use crate::core::content::{Page, Timings};
use crate::core::parallax::Parallax;
use crate::core::reveal::Reveal;

use super::text::{center_pad, width, wrap};
use super::theme::{blend, rgb, Theme};

/// Rows the intro copy drifts upward while fading in.
const INTRO_RISE_ROWS: f64 = 2.0;

pub struct HeroWidget<'a> {
    pub page: Page,
    pub theme: &'a Theme,
    /// Current parallax pair; `Parallax::REST` for pages without it.
    pub parallax: Parallax,
    pub px_per_row: u32,
    pub timings: &'a Timings,
    /// Time since the page mounted.
    pub elapsed: Duration,
    pub stay: &'a StaySummary,
    /// Height of the hero in rows.
    pub hero_rows: usize,
    /// Hero rows already scrolled above the viewport.
    pub scrolled_rows: usize,
}

impl HeroWidget<'_> {
    /// Background colour of hero row `src` (in un-shifted hero coordinates).
    fn background(&self, src: i64) -> (u8, u8, u8) {
        let t = if self.hero_rows <= 1 {
            0.0
        } else {
            (src.max(0) as f64 / (self.hero_rows - 1) as f64).clamp(0.0, 1.0)
        };
        let gradient = blend(self.theme.hero_bottom, self.theme.hero_top, t);
        blend(gradient, self.theme.page_bg, self.parallax.opacity)
    }

    /// Skyline glyph at column `x`, hero row `src`.
    fn texture(&self, x: u16, src: i64) -> char {
        let rows = self.hero_rows as i64;
        let from_bottom = rows - src;
        // Towers and domes along the lower third.
        let tower = i64::from((u32::from(x / 5) * 37 + 11) % 9) + rows / 6;
        if from_bottom <= tower && from_bottom > 0 {
            return if (x % 5) == 0 && from_bottom == tower { '▲' } else { '█' };
        }
        if (i64::from(x) * 7 + src * 13) % 29 == 0 {
            '·'
        } else {
            ' '
        }
    }

    fn paint_background(&self, area: Rect, visible: u16, shift: i64, buf: &mut Buffer) {
        for y in 0..visible {
            let hero_row = (self.scrolled_rows + usize::from(y)) as i64;
            let src = hero_row - shift;
            let bg = self.background(src);
            let fg = blend(self.theme.hero_bottom, (0, 0, 0), 0.6);
            let fg = blend(fg, self.theme.page_bg, self.parallax.opacity);
            for x in 0..area.width {
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_char(self.texture(x, src))
                        .set_fg(rgb(fg))
                        .set_bg(rgb(bg));
                }
            }
        }
    }

    /// Draw one intro line at hero row `row`, faded by `reveal`.
    fn paint_intro(&self, area: Rect, row: i64, text: &str, style: Style, reveal: Reveal, buf: &mut Buffer) {
        let p = reveal.progress(self.elapsed);
        if p <= 0.0 {
            return;
        }
        let row = row + ((1.0 - p) * INTRO_RISE_ROWS).round() as i64;
        let Some(y) = self.screen_row(area, row) else {
            return;
        };
        let bg = self.background(row - self.shift());
        let fg = blend(self.theme.hero_text, bg, p);
        let x = area.x + center_pad(text, usize::from(area.width)) as u16;
        buf.set_stringn(x, y, text, usize::from(area.width), style.fg(rgb(fg)));
    }

    fn shift(&self) -> i64 {
        (self.parallax.translate_y / f64::from(self.px_per_row.max(1))).round() as i64
    }

    /// Hero row → screen row, if visible.
    fn screen_row(&self, area: Rect, row: i64) -> Option<u16> {
        let y = row - self.scrolled_rows as i64;
        if y < 0 || y >= i64::from(area.height) || row >= self.hero_rows as i64 {
            return None;
        }
        Some(area.y + y as u16)
    }

    fn paint_search(&self, area: Rect, buf: &mut Buffer) {
        let p = self.timings.search.progress(self.elapsed);
        if p <= 0.0 {
            return;
        }
        let line = search_line(self.page, self.theme, self.stay);
        // Rises from three rows below its resting place.
        let rise = ((1.0 - p) * 3.0).round() as i64;
        let Some(rect) = search_rect(line.width(), area, self.hero_rows, self.scrolled_rows, rise) else {
            return;
        };
        let top = self.hero_rows as i64 - 5 + rise;
        let border = blend(self.theme.hero_text, self.background(top), p * 0.6);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(rgb(border)));
        Paragraph::new(line).block(block).render(rect, buf);
    }
}

fn search_line(page: Page, t: &Theme, stay: &StaySummary) -> Line<'static> {
    let label = Style::default().fg(rgb(t.accent)).add_modifier(Modifier::BOLD);
    let value = Style::default().fg(rgb(t.hero_text));
    let sep = Span::styled("  │  ", Style::default().fg(rgb(t.muted)));
    let check_in = StaySummary::fmt_date(stay.check_in);
    let check_out = StaySummary::fmt_date(stay.check_out);
    let cta = Span::styled(
        format!(" {} ", page.search_cta().to_uppercase()),
        Style::default()
            .fg(rgb(t.text))
            .bg(rgb(t.accent))
            .add_modifier(Modifier::BOLD),
    );
    match page {
        Page::Luxe => Line::from(vec![
            Span::styled("⌖ ", label),
            Span::styled("Where are you going?", value.add_modifier(Modifier::DIM)),
            sep.clone(),
            Span::styled("▦ ", label),
            Span::styled(format!("{check_in} – {check_out}"), value),
            sep,
            Span::styled("☺ ", label),
            Span::styled("Add guests  ", value.add_modifier(Modifier::DIM)),
            cta,
        ]),
        Page::Ananta => Line::from(vec![
            Span::styled("CHECK IN ", label),
            Span::styled(check_in, value),
            sep.clone(),
            Span::styled("CHECK OUT ", label),
            Span::styled(check_out, value),
            sep,
            Span::styled("GUESTS ", label),
            Span::styled(format!("{}  ", stay.guests_label()), value),
            cta,
        ]),
    }
}

/// Visible part of the three-row search box, `rise` rows below rest.
fn search_rect(line_width: usize, area: Rect, hero_rows: usize, scrolled_rows: usize, rise: i64) -> Option<Rect> {
    if hero_rows < 6 {
        return None;
    }
    let w = (line_width as u16 + 4).min(area.width);
    let top = hero_rows as i64 - 5 + rise;
    let visible: Vec<u16> = (top..top + 3)
        .filter_map(|r| {
            let y = r - scrolled_rows as i64;
            (y >= 0 && y < i64::from(area.height) && r < hero_rows as i64).then(|| area.y + y as u16)
        })
        .collect();
    let (&y0, &y1) = (visible.first()?, visible.last()?);
    Some(Rect::new(area.x + (area.width - w) / 2, y0, w, y1 - y0 + 1))
}

/// Resting position of the search box on screen, for click hit-testing.
pub fn search_box(page: Page, stay: &StaySummary, area: Rect, hero_rows: usize, scrolled_rows: usize) -> Option<Rect> {
    let width = search_line(page, &Theme::for_page(page), stay).width();
    search_rect(width, area, hero_rows, scrolled_rows, 0)
}

impl Widget for HeroWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.scrolled_rows >= self.hero_rows {
            return;
        }
        let visible = (self.hero_rows - self.scrolled_rows).min(usize::from(area.height)) as u16;
        let shift = self.shift();
        self.paint_background(area, visible, shift, buf);

        // Intro copy, vertically centered a little above the middle.
        let copy = self.page.hero();
        let heading = Style::default().add_modifier(Modifier::BOLD);
        let eyebrow = Style::default().add_modifier(Modifier::BOLD);
        let subtitle = Style::default().add_modifier(Modifier::ITALIC);
        let sub_lines = wrap(copy.subtitle, usize::from(area.width.saturating_sub(8)).min(64));
        let total = copy.eyebrow.map_or(0, |_| 2) + copy.title.len() + 1 + sub_lines.len();
        let mut row = (self.hero_rows.saturating_sub(total) / 2) as i64 - 2;
        row = row.max(i64::from(super::layout::NAVBAR_HEIGHT));

        if let Some(text) = copy.eyebrow {
            let framed = format!("──── {text} ────");
            self.paint_intro(area, row, &framed, eyebrow, self.timings.eyebrow, buf);
            row += 2;
        }
        for title in copy.title {
            self.paint_intro(area, row, title, heading, self.timings.title, buf);
            row += 1;
        }
        row += 1;
        for line in &sub_lines {
            self.paint_intro(area, row, line, subtitle, self.timings.subtitle, buf);
            row += 1;
        }

        let caption = format!("▨ {}", copy.image);
        if let Some(y) = self.screen_row(area, self.hero_rows as i64 - 1) {
            let x = area.x + area.width.saturating_sub(width(&caption) as u16 + 1);
            let dim = blend(self.theme.hero_text, self.background(self.hero_rows as i64), 0.35);
            buf.set_stringn(x, y, &caption, usize::from(area.width), Style::default().fg(rgb(dim)));
        }

        self.paint_search(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stay() -> StaySummary {
        let day = chrono::NaiveDate::from_ymd_opt(2026, 1, 29).expect("valid date");
        StaySummary::starting_from(day, 14, 3)
    }

    fn render(parallax: Parallax, elapsed: Duration, scrolled_rows: usize) -> Buffer {
        let page = Page::Ananta;
        let theme = Theme::for_page(page);
        let timings = page.timings();
        let stay = stay();
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        HeroWidget {
            page,
            theme: &theme,
            parallax,
            px_per_row: 20,
            timings: &timings,
            elapsed,
            stay: &stay,
            hero_rows: 30,
            scrolled_rows,
        }
        .render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    fn contains(buf: &Buffer, needle: &str) -> bool {
        (0..buf.area.height).any(|y| row_text(buf, y).contains(needle))
    }

    #[test]
    fn intro_hidden_before_its_delay() {
        let buf = render(Parallax::REST, Duration::from_millis(500), 0);
        assert!(!contains(&buf, "Royal Heritage"));
        assert!(!contains(&buf, "CHECK IN"));
    }

    #[test]
    fn intro_and_search_after_sequence() {
        let buf = render(Parallax::REST, Duration::from_secs(10), 0);
        assert!(contains(&buf, "Royal Heritage"));
        assert!(contains(&buf, "ESTD. 1920"));
        assert!(contains(&buf, "12 Feb 2026"));
        assert!(contains(&buf, "CHECK AVAILABILITY"));
    }

    #[test]
    fn faded_background_moves_toward_page_colour() {
        let rest = render(Parallax::REST, Duration::ZERO, 0);
        let faded = render(Parallax::at(500.0), Duration::ZERO, 0);
        let theme = Theme::for_page(Page::Ananta);
        let distance = |c: ratatui::style::Color| match c {
            ratatui::style::Color::Rgb(r, g, b) => {
                let (pr, pg, pb) = theme.page_bg;
                (i32::from(r) - i32::from(pr)).abs()
                    + (i32::from(g) - i32::from(pg)).abs()
                    + (i32::from(b) - i32::from(pb)).abs()
            }
            _ => i32::MAX,
        };
        assert!(distance(faded[(0, 0)].bg) < distance(rest[(0, 0)].bg));
    }

    #[test]
    fn search_box_follows_scroll() {
        let stay = stay();
        let area = Rect::new(0, 0, 100, 30);
        let rest = search_box(Page::Ananta, &stay, area, 30, 0).expect("visible");
        assert_eq!((rest.y, rest.height), (25, 3));
        let scrolled = search_box(Page::Ananta, &stay, area, 30, 10).expect("visible");
        assert_eq!(scrolled.y, 15);
        assert!(search_box(Page::Ananta, &stay, area, 30, 30).is_none());
    }

    #[test]
    fn fully_scrolled_hero_draws_nothing() {
        let buf = render(Parallax::REST, Duration::from_secs(10), 30);
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 100, 30)));
    }
}
