use chrono::{Datelike, NaiveDate};

/// Indian financial year, running April 1 to March 31.
///
/// Bill numbers on Indian invoices are usually suffixed with the financial
/// year in short form, e.g. "101/25-26" for FY 2025-26.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FinancialYear {
    start_year: i32,
}

impl FinancialYear {
    /// The financial year that begins on April 1 of `start_year`.
    pub fn starting(start_year: i32) -> Self {
        Self { start_year }
    }

    /// The financial year a given date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        if date.month() >= 4 {
            Self::starting(date.year())
        } else {
            Self::starting(date.year() - 1)
        }
    }

    /// Calendar year in which this financial year starts.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// First day (April 1).
    pub fn start(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.start_year, 4, 1)
    }

    /// Last day (March 31 of the following year).
    pub fn end(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.start_year + 1, 3, 31)
    }

    pub fn next(&self) -> Self {
        Self::starting(self.start_year + 1)
    }

    /// Short label, e.g. "25-26".
    pub fn label(&self) -> String {
        format!(
            "{:02}-{:02}",
            self.start_year.rem_euclid(100),
            (self.start_year + 1).rem_euclid(100)
        )
    }
}

impl std::fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn april_starts_new_year() {
        assert_eq!(FinancialYear::containing(date(2025, 4, 1)).label(), "25-26");
        assert_eq!(FinancialYear::containing(date(2025, 3, 31)).label(), "24-25");
        assert_eq!(FinancialYear::containing(date(2026, 1, 15)).label(), "25-26");
    }

    #[test]
    fn century_wrap() {
        assert_eq!(FinancialYear::starting(2099).label(), "99-00");
        assert_eq!(FinancialYear::starting(2009).label(), "09-10");
    }

    #[test]
    fn bounds_and_next() {
        let fy = FinancialYear::starting(2025);
        assert_eq!(fy.start(), Some(date(2025, 4, 1)));
        assert_eq!(fy.end(), Some(date(2026, 3, 31)));
        assert_eq!(fy.next().label(), "26-27");
        assert_eq!(fy.to_string(), "25-26");
        assert_eq!(fy.start_year(), 2025);
    }

    #[test]
    fn every_day_of_year_maps_back() {
        let fy = FinancialYear::starting(2024);
        let mut day = fy.start().unwrap();
        let end = fy.end().unwrap();
        while day <= end {
            assert_eq!(FinancialYear::containing(day), fy);
            day = day.succ_opt().unwrap();
        }
    }
}
