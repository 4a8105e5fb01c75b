//! Renders the visible window of a [`Document`], fading each block in by
//! its reveal alpha.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use super::document::Document;
use super::theme::blend;

pub struct PageView<'a> {
    pub document: &'a Document,
    /// First document row shown at the top of the area.
    pub scroll_row: usize,
    /// Reveal alpha per block, parallel to `document.blocks`.  Missing
    /// entries count as fully shown.
    pub block_alpha: &'a [f64],
}

impl PageView<'_> {
    fn alpha_for_row(&self, row: usize) -> f64 {
        self.document
            .blocks
            .iter()
            .position(|b| b.rows.contains(&row))
            .and_then(|i| self.block_alpha.get(i).copied())
            .unwrap_or(1.0)
    }
}

/// Pull every foreground in `row` toward its background.  Alpha 0 blanks
/// the glyphs entirely.
fn fade_row(buf: &mut Buffer, area: Rect, y: u16, alpha: f64) {
    for x in area.left()..area.right() {
        let Some(cell) = buf.cell_mut((x, y)) else {
            continue;
        };
        if alpha <= 0.0 {
            cell.set_symbol(" ");
            continue;
        }
        if let (Color::Rgb(fr, fg, fb), Color::Rgb(br, bg, bb)) = (cell.fg, cell.bg) {
            let (r, g, b) = blend((fr, fg, fb), (br, bg, bb), alpha);
            cell.set_fg(Color::Rgb(r, g, b));
        }
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in 0..area.height {
            let row = self.scroll_row + usize::from(y);
            let Some(line) = self.document.lines.get(row) else {
                break;
            };
            let target = Rect::new(area.x, area.y + y, area.width, 1);
            buf.set_style(target, line.style);
            buf.set_line(area.x, area.y + y, line, area.width);

            let alpha = self.alpha_for_row(row);
            if alpha < 1.0 {
                fade_row(buf, target, area.y + y, alpha);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::Page;
    use crate::ui::document::Stagger;
    use crate::ui::theme::Theme;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn scroll_row_selects_window() {
        let theme = Theme::for_page(Page::Luxe);
        let doc = Document::build(Page::Luxe, &theme, 80, 10);
        let heading = doc.anchor_row("#featured").expect("listings section");
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        PageView {
            document: &doc,
            scroll_row: heading,
            block_alpha: &[],
        }
        .render(area, &mut buf);
        let all: String = (0..12).map(|y| row_text(&buf, y)).collect();
        assert!(all.contains("Featured"), "{all}");
    }

    #[test]
    fn unrevealed_block_is_blank_but_keeps_background() {
        let theme = Theme::for_page(Page::Luxe);
        let doc = Document::build(Page::Luxe, &theme, 80, 0);
        let card = doc
            .blocks
            .iter()
            .position(|b| b.stagger == Stagger::Card(0))
            .expect("first card");
        let rows = doc.blocks[card].rows.clone();
        let mut alpha = vec![1.0; doc.blocks.len()];
        alpha[card] = 0.0;

        let area = Rect::new(0, 0, 80, rows.len() as u16);
        let mut buf = Buffer::empty(area);
        PageView {
            document: &doc,
            scroll_row: rows.start,
            block_alpha: &alpha,
        }
        .render(area, &mut buf);
        for y in 0..area.height {
            assert!(row_text(&buf, y).trim().is_empty());
        }
        assert_eq!(buf[(0, 0)].bg, crate::ui::theme::rgb(theme.page_bg));
    }

    #[test]
    fn partial_alpha_dims_foreground() {
        let theme = Theme::for_page(Page::Luxe);
        let doc = Document::build(Page::Luxe, &theme, 80, 0);
        let first = doc.blocks[0].rows.start;
        let render = |a: f64| {
            let area = Rect::new(0, 0, 80, 6);
            let mut buf = Buffer::empty(area);
            let alpha = vec![a; doc.blocks.len()];
            PageView {
                document: &doc,
                scroll_row: first,
                block_alpha: &alpha,
            }
            .render(area, &mut buf);
            buf
        };
        let full = render(1.0);
        let half = render(0.5);
        let (x, y) = (0..6u16)
            .flat_map(|y| (0..80u16).map(move |x| (x, y)))
            .find(|&(x, y)| full[(x, y)].symbol() != " ")
            .expect("some visible glyph");
        assert_eq!(half[(x, y)].symbol(), full[(x, y)].symbol());
        assert_ne!(half[(x, y)].fg, full[(x, y)].fg);
    }
}
