//! Stay summary shown by the search widget and the booking popup.
//!
//! There is no booking logic: the call-to-action only triggers an opaque
//! callback, and this summary is what the popup displays.

use chrono::{Days, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaySummary {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u8,
}

impl StaySummary {
    /// Default stay: arrive `lead_days` after `today`, stay `nights` nights.
    pub fn starting_from(today: NaiveDate, lead_days: u32, nights: u32) -> Self {
        let check_in = today
            .checked_add_days(Days::new(u64::from(lead_days)))
            .unwrap_or(today);
        let check_out = check_in
            .checked_add_days(Days::new(u64::from(nights.max(1))))
            .unwrap_or(check_in);
        Self {
            check_in,
            check_out,
            adults: 2,
        }
    }

    pub fn today(lead_days: u32, nights: u32) -> Self {
        Self::starting_from(chrono::Local::now().date_naive(), lead_days, nights)
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// `12 Feb 2026`.
    pub fn fmt_date(date: NaiveDate) -> String {
        date.format("%d %b %Y").to_string()
    }

    pub fn guests_label(&self) -> String {
        match self.adults {
            1 => "1 Adult".to_string(),
            n => format!("{n} Adults"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn reference_stay() {
        let stay = StaySummary::starting_from(date(2026, 1, 29), 14, 3);
        assert_eq!(StaySummary::fmt_date(stay.check_in), "12 Feb 2026");
        assert_eq!(StaySummary::fmt_date(stay.check_out), "15 Feb 2026");
        assert_eq!(stay.nights(), 3);
        assert_eq!(stay.guests_label(), "2 Adults");
    }

    #[test]
    fn at_least_one_night() {
        let stay = StaySummary::starting_from(date(2026, 3, 1), 0, 0);
        assert_eq!(stay.nights(), 1);
    }

    #[test]
    fn crosses_month_and_year() {
        let stay = StaySummary::starting_from(date(2026, 12, 30), 1, 3);
        assert_eq!(stay.check_out, date(2027, 1, 3));
    }
}
