//! Calendar helpers behind the period pickers

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Zero-pad to two digits: `3` -> `"03"`, `12` -> `"12"`
pub fn pad2(n: u32) -> String {
    format!("{:02}", n)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Today {
    pub year: i32,
    pub month: u32,
    pub date: u32,
}

/// Date helpers evaluated against a fixed "today"
#[derive(Debug, Clone, Copy)]
pub struct Calendar {
    today: NaiveDate,
}

impl Calendar {
    /// Calendar for the local wall clock
    pub fn local() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    pub fn fixed(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> Today {
        Today {
            year: self.today.year(),
            month: self.today.month(),
            date: self.today.day(),
        }
    }

    /// `Y-M-D` without padding, e.g. `2024-3-5`
    pub fn today_unpadded(&self) -> String {
        let t = self.today();
        format!("{}-{}-{}", t.year, t.month, t.date)
    }

    /// `YYYY-MM-DD`
    pub fn today_string(&self) -> String {
        let t = self.today();
        format!("{}-{}-{}", t.year, pad2(t.month), pad2(t.date))
    }

    /// Without a day, matches the current year and month only
    pub fn is_today(&self, year: i32, month: u32, date: Option<u32>) -> bool {
        let t = self.today();
        match date {
            None => year == t.year && month == t.month,
            Some(d) => year == t.year && month == t.month && d == t.date,
        }
    }

    /// Current year followed by the three before it
    pub fn selectable_years(&self) -> Vec<i32> {
        let year = self.today().year;
        (0..=3).map(|i| year - i).collect()
    }

    // Runs one past the current month; the picker has always offered it.
    pub fn selectable_months(&self) -> Vec<u32> {
        (1..=self.today().month + 1).collect()
    }

    /// Days offered for a month: up to today in the current month, else 1..=30
    ///
    /// Only the month is compared with today. Non-current months are assumed
    /// to have 30 days.
    pub fn selectable_dates(&self, year: Option<i32>, month: Option<u32>) -> Vec<u32> {
        let (Some(_), Some(month)) = (year, month) else {
            return Vec::new();
        };

        let t = self.today();
        let last = if month == t.month { t.date } else { 30 };
        (1..=last).collect()
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::local()
    }
}
