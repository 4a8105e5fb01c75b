//! The scrolling page body, laid out as terminal rows.
//!
//! The hero occupies the first `hero_rows` rows as blank placeholders; the
//! [`HeroWidget`](super::hero::HeroWidget) paints it separately because it
//! depends on parallax and time.  Everything below the hero is static text
//! grouped into [`Block`]s so sections can be found by anchor and revealed
//! when they scroll into view.

use std::ops::Range;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::core::content::{Listing, Page};

use super::text::{center_pad, pad_right, width, wrap};
use super::theme::Theme;

/// Which stagger sequence a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stagger {
    None,
    Card(usize),
    Feature(usize),
}

/// A contiguous run of rows that reveals as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub anchor: Option<&'static str>,
    pub rows: Range<usize>,
    pub stagger: Stagger,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub blocks: Vec<Block>,
    pub hero_rows: usize,
}

impl Document {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// First row of the section named by `anchor`.  `"#"` is the top.
    pub fn anchor_row(&self, anchor: &str) -> Option<usize> {
        if anchor == "#" || anchor.is_empty() {
            return Some(0);
        }
        self.blocks
            .iter()
            .find(|b| b.anchor == Some(anchor))
            .map(|b| b.rows.start)
    }

    /// Lay out `page` for a terminal `width` columns wide whose hero fills
    /// `hero_rows` rows.
    pub fn build(page: Page, theme: &Theme, width: u16, hero_rows: u16) -> Self {
        let mut b = Builder::new(usize::from(width), *theme);
        b.hero(usize::from(hero_rows));
        match page {
            Page::Luxe => {
                b.listings(page, theme.body_style(), "View All Hotels →");
                b.features_light(page);
                b.footer(page);
            }
            Page::Ananta => {
                b.story(page);
                b.listings(page, theme.body_style(), "View All Rooms →");
                b.features_dark(page);
                b.footer(page);
            }
        }
        b.finish(usize::from(hero_rows))
    }
}

// ───────────────────────────────────────── builder ───────────

struct Builder {
    lines: Vec<Line<'static>>,
    blocks: Vec<Block>,
    width: usize,
    theme: Theme,
}

impl Builder {
    fn new(width: usize, theme: Theme) -> Self {
        Self {
            lines: Vec::new(),
            blocks: Vec::new(),
            width: width.max(1),
            theme,
        }
    }

    fn finish(self, hero_rows: usize) -> Document {
        Document {
            lines: self.lines,
            blocks: self.blocks,
            hero_rows,
        }
    }

    /// Content column: `(left margin, column width)`.
    fn column(&self, max: usize) -> (usize, usize) {
        let col = self.width.saturating_sub(4).min(max).max(1);
        ((self.width - col.min(self.width)) / 2, col)
    }

    fn row(&mut self, spans: Vec<Span<'static>>, bg: Style) {
        self.lines.push(Line::from(spans).style(bg));
    }

    fn blank(&mut self, bg: Style) {
        self.row(Vec::new(), bg);
    }

    fn left(&mut self, text: impl Into<String>, style: Style, bg: Style, margin: usize) {
        self.row(
            vec![Span::raw(" ".repeat(margin)), Span::styled(text.into(), style)],
            bg,
        );
    }

    fn centered(&mut self, text: impl Into<String>, style: Style, bg: Style) {
        let text = text.into();
        let pad = center_pad(&text, self.width);
        self.left(text, style, bg, pad);
    }

    fn wrapped_centered(&mut self, text: &str, style: Style, bg: Style, max: usize) {
        let (_, col) = self.column(max);
        for line in wrap(text, col) {
            self.centered(line, style, bg);
        }
    }

    fn wrapped_left(&mut self, text: &str, style: Style, bg: Style, max: usize) {
        let (margin, col) = self.column(max);
        for line in wrap(text, col) {
            self.left(line, style, bg, margin);
        }
    }

    fn open(&self) -> usize {
        self.lines.len()
    }

    fn close(&mut self, start: usize, anchor: Option<&'static str>, stagger: Stagger) {
        self.blocks.push(Block {
            anchor,
            rows: start..self.lines.len(),
            stagger,
        });
    }

    // ── sections ───────────────────────────────────────────────

    fn hero(&mut self, rows: usize) {
        let bg = self.theme.dark_style();
        for _ in 0..rows {
            self.blank(bg);
        }
    }

    fn story(&mut self, page: Page) {
        let Some(story) = page.story() else {
            return;
        };
        let t = self.theme;
        let bg = t.body_style();
        let start = self.open();
        let (margin, _) = self.column(72);

        self.blank(bg);
        self.blank(bg);
        self.left(format!("──── {}", story.eyebrow), t.heading_style(), bg, margin);
        self.blank(bg);
        self.wrapped_left(story.title, t.heading_style().add_modifier(Modifier::ITALIC), bg, 72);
        self.blank(bg);
        for p in story.paragraphs {
            self.wrapped_left(p, t.muted_style(), bg, 72);
            self.blank(bg);
        }

        let stats: Vec<Span<'static>> = std::iter::once(Span::raw(" ".repeat(margin)))
            .chain(story.stats.iter().flat_map(|s| {
                [
                    Span::styled(s.value.to_string(), t.eyebrow_style()),
                    Span::styled(format!(" {}    ", s.label.to_uppercase()), t.body_style()),
                ]
            }))
            .collect();
        self.row(stats, bg);
        self.blank(bg);

        if let Some(quote) = story.quote {
            let dark = t.dark_style();
            let box_w = width(quote) + 4;
            self.left(format!("★{}", " ".repeat(box_w - 1)), t.dark_accent_style(), bg, margin);
            self.left(format!("  {quote}  "), dark.add_modifier(Modifier::ITALIC), bg, margin);
            self.left(pad_right("  ANANTA HERITAGE", box_w), dark, bg, margin);
        }
        self.blank(bg);
        self.close(start, Some(story.anchor), Stagger::None);
    }

    fn listings(&mut self, page: Page, bg: Style, view_all: &'static str) {
        let t = self.theme;
        let (anchor, eyebrow, title, blurb) = page.listings_heading();

        let start = self.open();
        self.blank(bg);
        self.blank(bg);
        self.centered(eyebrow, t.eyebrow_style(), bg);
        self.centered(title, t.heading_style(), bg);
        if let Some(blurb) = blurb {
            self.wrapped_centered(blurb, t.muted_style(), bg, 60);
        }
        self.blank(bg);
        self.close(start, Some(anchor), Stagger::None);

        for (i, listing) in page.listings().iter().enumerate() {
            let start = self.open();
            for line in card_lines(listing, &t, self.column(56)) {
                self.lines.push(line);
            }
            self.blank(bg);
            self.close(start, None, Stagger::Card(i));
        }

        let start = self.open();
        self.centered(view_all, t.accent_style().add_modifier(Modifier::BOLD), bg);
        self.blank(bg);
        self.close(start, None, Stagger::None);
    }

    fn features_light(&mut self, page: Page) {
        let t = self.theme;
        let bg = t.body_style();
        let (anchor, ..) = page.features_heading();
        let start = self.open();
        self.blank(bg);
        self.close(start, Some(anchor), Stagger::None);

        for (i, f) in page.features().iter().enumerate() {
            let start = self.open();
            self.centered(format!("[ {} ]", f.glyph), t.accent_style(), bg);
            self.centered(f.title, t.heading_style(), bg);
            self.wrapped_centered(f.desc, t.muted_style(), bg, 48);
            self.blank(bg);
            self.close(start, None, Stagger::Feature(i));
        }
        self.blank(bg);
    }

    fn features_dark(&mut self, page: Page) {
        let t = self.theme;
        let bg = t.dark_style();
        let (anchor, eyebrow, title, blurb) = page.features_heading();
        let (margin, _) = self.column(72);

        let start = self.open();
        self.blank(bg);
        self.blank(bg);
        if let Some(eyebrow) = eyebrow {
            self.left(eyebrow, t.dark_accent_style(), bg, margin);
        }
        if let Some(title) = title {
            self.left(title, bg.add_modifier(Modifier::BOLD), bg, margin);
        }
        self.blank(bg);
        if let Some(blurb) = blurb {
            self.wrapped_left(blurb, bg, bg, 72);
        }
        self.blank(bg);
        self.left("[ EXPLORE EXPERIENCES ]", bg.add_modifier(Modifier::BOLD), bg, margin);
        self.blank(bg);
        self.close(start, Some(anchor), Stagger::None);

        for (i, f) in page.features().iter().enumerate() {
            let start = self.open();
            self.left(format!("{}  {}", f.glyph, f.title), t.dark_accent_style(), bg, margin + 2);
            self.wrapped_left(f.desc, bg, bg, 68);
            self.blank(bg);
            self.close(start, None, Stagger::Feature(i));
        }
        self.blank(bg);
    }

    fn footer(&mut self, page: Page) {
        let t = self.theme;
        let bg = t.dark_style();
        let head = t.dark_accent_style();
        let (margin, _) = self.column(72);

        let start = self.open();
        self.blank(bg);
        self.left(page.brand(), bg.add_modifier(Modifier::BOLD), bg, margin);
        if let Some(tagline) = page.brand_tagline() {
            self.left(tagline, bg, bg, margin);
        }
        self.wrapped_left(page.footer_blurb(), bg, bg, 72);
        self.blank(bg);
        for col in page.footer_columns() {
            self.left(col.title.to_uppercase(), head, bg, margin);
            for item in col.items {
                self.left(*item, bg, bg, margin + 2);
            }
            self.blank(bg);
        }
        self.left("─".repeat(self.column(72).1), bg, bg, margin);
        self.left(page.copyright(), bg.add_modifier(Modifier::DIM), bg, margin);
        self.blank(bg);
        self.close(start, Some("#footer"), Stagger::None);
    }
}

/// A bordered listing card.  `(margin, column)` comes from the builder.
fn card_lines(listing: &Listing, t: &Theme, (margin, col): (usize, usize)) -> Vec<Line<'static>> {
    let bg = t.body_style();
    let frame = t.muted_style();
    let inner = col.saturating_sub(4).max(1);
    let pad = " ".repeat(margin);

    let boxed = |content: Vec<Span<'static>>| -> Line<'static> {
        let used: usize = content.iter().map(|s| s.width()).sum();
        let mut spans = vec![Span::raw(pad.clone()), Span::styled("│ ", frame)];
        spans.extend(content);
        spans.push(Span::raw(" ".repeat(inner.saturating_sub(used))));
        spans.push(Span::styled(" │", frame));
        Line::from(spans).style(bg)
    };

    let mut out = Vec::new();
    out.push(Line::from(vec![Span::raw(pad.clone()), Span::styled(format!("┌{}┐", "─".repeat(inner + 2)), frame)]).style(bg));
    out.push(boxed(vec![Span::styled(format!("▨ {}", listing.image), t.muted_style().add_modifier(Modifier::DIM))]));

    let mut title = vec![Span::styled(listing.name.to_string(), t.heading_style())];
    if let Some(rating) = listing.rating {
        let tag = format!("★ {rating:.1}");
        let gap = inner.saturating_sub(width(listing.name) + width(&tag)).max(1);
        title.push(Span::raw(" ".repeat(gap)));
        title.push(Span::styled(tag, t.accent_style()));
    }
    out.push(boxed(title));

    if let Some(location) = listing.location {
        out.push(boxed(vec![Span::styled(format!("⌖ {location}"), t.muted_style())]));
    }
    if let Some(desc) = listing.description {
        for line in wrap(desc, inner) {
            out.push(boxed(vec![Span::styled(line, t.muted_style())]));
        }
    }
    if !listing.amenities.is_empty() {
        out.push(boxed(vec![Span::styled(listing.amenities.join(" · "), t.muted_style())]));
    }

    let price = format!("{} {}", listing.price, listing.per);
    let action = format!("[ {} ]", listing.action);
    let gap = inner.saturating_sub(width(&price) + width(&action)).max(1);
    out.push(boxed(vec![
        Span::styled(price, t.heading_style()),
        Span::raw(" ".repeat(gap)),
        Span::styled(action, t.accent_style()),
    ]));
    out.push(Line::from(vec![Span::raw(pad), Span::styled(format!("└{}┘", "─".repeat(inner + 2)), frame)]).style(bg));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(page: Page) -> Document {
        Document::build(page, &Theme::for_page(page), 100, 30)
    }

    #[test]
    fn hero_rows_come_first() {
        let d = doc(Page::Ananta);
        assert_eq!(d.hero_rows, 30);
        assert!(d.height() > 30);
        assert!(d.blocks.iter().all(|b| b.rows.start >= 30));
    }

    #[test]
    fn anchors_resolve_to_their_sections() {
        let d = doc(Page::Ananta);
        assert_eq!(d.anchor_row("#"), Some(0));
        let rooms = d.anchor_row("#rooms").expect("rooms section");
        let heritage = d.anchor_row("#heritage").expect("story section");
        assert!(heritage < rooms);
        // Linked from the navbar but never defined on the page.
        assert_eq!(d.anchor_row("#dining"), None);
    }

    #[test]
    fn one_block_per_card_and_feature() {
        let d = doc(Page::Luxe);
        let cards = d.blocks.iter().filter(|b| matches!(b.stagger, Stagger::Card(_))).count();
        let features = d.blocks.iter().filter(|b| matches!(b.stagger, Stagger::Feature(_))).count();
        assert_eq!(cards, Page::Luxe.listings().len());
        assert_eq!(features, Page::Luxe.features().len());
    }

    #[test]
    fn blocks_do_not_overlap() {
        let d = doc(Page::Ananta);
        for pair in d.blocks.windows(2) {
            assert!(pair[0].rows.end <= pair[1].rows.start);
        }
        assert!(d.blocks.iter().all(|b| b.rows.end <= d.height()));
    }

    #[test]
    fn card_rows_fit_their_column() {
        let t = Theme::for_page(Page::Luxe);
        let lines = card_lines(&Page::Luxe.listings()[0], &t, (2, 40));
        for line in &lines {
            assert_eq!(line.width(), 42, "{line:?}");
        }
    }

    #[test]
    fn narrow_terminal_still_builds() {
        let d = Document::build(Page::Ananta, &Theme::for_page(Page::Ananta), 12, 8);
        assert!(d.height() > 8);
    }
}
