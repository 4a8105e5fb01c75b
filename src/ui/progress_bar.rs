//! One-row reading progress indicator pinned to the top edge.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::theme::Theme;

/// Eighth-block glyphs for the partially filled trailing cell.
const PARTIAL: [&str; 8] = [" ", "▏", "▎", "▍", "▌", "▋", "▊", "▉"];

pub struct ProgressBar<'a> {
    /// Smoothed ratio in `[0, 1]`.
    pub value: f64,
    pub theme: &'a Theme,
}

impl ProgressBar<'_> {
    /// `(full cells, eighths in the next cell)` for a bar `width` wide.
    fn fill(value: f64, width: u16) -> (u16, usize) {
        let eighths = (value.clamp(0.0, 1.0) * f64::from(width) * 8.0).round() as u32;
        ((eighths / 8) as u16, (eighths % 8) as usize)
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = self.theme.progress_style();
        let (full, rem) = Self::fill(self.value, area.width);
        for x in 0..full.min(area.width) {
            if let Some(cell) = buf.cell_mut((area.x + x, area.y)) {
                cell.set_symbol("█").set_style(style);
            }
        }
        if rem > 0 && full < area.width {
            if let Some(cell) = buf.cell_mut((area.x + full, area.y)) {
                cell.set_symbol(PARTIAL[rem]).set_style(style);
            }
        }
    }
}
