//! Today's date and the title of the today list.

use chrono::{Local, NaiveDate};

/// Display format of the today list title, e.g. "Monday, January 1".
pub const TITLE_FORMAT: &str = "%A, %B %-d";

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    /// Title of the today list, which doubles as its lookup key in forms.
    fn today_title(&self) -> String {
        title_for(self.today())
    }
}

/// Format a date the way the today list is titled.
pub fn title_for(date: NaiveDate) -> String {
    date.format(TITLE_FORMAT).to_string()
}

/// The machine's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_uses_long_weekday_and_month_without_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(title_for(date), "Monday, January 1");
    }

    #[test]
    fn fixed_clock_reports_its_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        let clock = FixedClock(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.today_title(), "Thursday, December 25");
    }

    #[test]
    fn system_clock_title_matches_its_date() {
        let clock = SystemClock;
        let title = clock.today_title();
        // Tolerate a midnight rollover between the two reads.
        let now = clock.today();
        assert!(title == title_for(now) || title == title_for(now.pred_opt().unwrap()));
    }
}
