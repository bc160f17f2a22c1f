use chrono::{Datelike, NaiveDate};

/// A selected calendar month, navigated one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Parses the `MM/YYYY` form used by the shell's `month` command.
    pub fn parse(raw: &str) -> Option<Self> {
        let (month_part, year_part) = raw.trim().split_once('/')?;
        let month = month_part.parse::<u32>().ok()?;
        let year = year_part.parse::<i32>().ok()?;
        Self::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_rolls_over_december() {
        let december = MonthRef::new(2023, 12).unwrap();
        assert_eq!(december.next(), MonthRef::new(2024, 1).unwrap());
    }

    #[test]
    fn previous_rolls_back_january() {
        let january = MonthRef::new(2024, 1).unwrap();
        assert_eq!(january.previous(), MonthRef::new(2023, 12).unwrap());
    }

    #[test]
    fn next_then_previous_is_identity() {
        let month = MonthRef::new(2023, 6).unwrap();
        assert_eq!(month.next().previous(), month);
    }

    #[test]
    fn contains_checks_both_fields() {
        let month = MonthRef::new(2023, 1).unwrap();
        assert!(month.contains(NaiveDate::from_ymd_opt(2023, 1, 31).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2022, 1, 15).unwrap()));
    }

    #[test]
    fn parse_accepts_month_slash_year() {
        assert_eq!(MonthRef::parse("01/2023"), MonthRef::new(2023, 1));
        assert_eq!(MonthRef::parse(" 12/1999 "), MonthRef::new(1999, 12));
        assert_eq!(MonthRef::parse("13/2023"), None);
        assert_eq!(MonthRef::parse("2023-01"), None);
    }
}
