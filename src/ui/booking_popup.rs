//! Reservation summary popup opened by the booking call-to-action.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::core::booking::StaySummary;
use crate::core::content::Page;

use super::layout::centered_fixed;
use super::theme::{rgb, Theme};

pub struct BookingPopup<'a> {
    pub page: Page,
    pub theme: &'a Theme,
    pub stay: &'a StaySummary,
}

impl Widget for BookingPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_fixed(48, 12, area);
        Clear.render(popup, buf);

        let t = self.theme;
        let block = Block::default()
            .title(format!(" {} ", self.page.menu_cta()))
            .title_style(
                Style::default()
                    .fg(rgb(t.accent))
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(rgb(t.muted)));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let label = Style::default().fg(rgb(t.muted));
        let value = Style::default().add_modifier(Modifier::BOLD);
        let field = |name: &'static str, v: String| {
            Line::from(vec![
                Span::styled(format!("  {name:<12}"), label),
                Span::styled(v, value),
            ])
        };
        let nights = self.stay.nights();
        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                format!("  {}", self.page.brand()),
                value.fg(rgb(t.accent)),
            )),
            Line::raw(""),
            field("Check in", StaySummary::fmt_date(self.stay.check_in)),
            field("Check out", StaySummary::fmt_date(self.stay.check_out)),
            field(
                "Nights",
                format!("{nights} night{}", if nights == 1 { "" } else { "s" }),
            ),
            field("Guests", self.stay.guests_label()),
            Line::raw(""),
            Line::from(Span::styled("  Enter: confirm  Esc: close", label)),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_stay_dates_and_page_cta() {
        let stay = StaySummary::starting_from(
            chrono::NaiveDate::from_ymd_opt(2026, 1, 29).expect("valid date"),
            14,
            3,
        );
        let theme = Theme::for_page(Page::Ananta);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        BookingPopup {
            page: Page::Ananta,
            theme: &theme,
            stay: &stay,
        }
        .render(area, &mut buf);

        let text: String = (0..24)
            .map(|y| {
                (0..80)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Reserve Your Stay"));
        assert!(text.contains("12 Feb 2026"));
        assert!(text.contains("15 Feb 2026"));
        assert!(text.contains("3 nights"));
    }
}
