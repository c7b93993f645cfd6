//! Date presentation for schedule rows.

use chrono::{Datelike, NaiveDate, Weekday};

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Formats dates with a user-chosen pattern such as `MM/dd/yyyy`.
///
/// Letter runs are interpreted as fields (`yyyy`, `yy`, `MMMM`, `MMM`, `MM`,
/// `M`, `dd`, `d`, `EEEE`, `EEE`); text inside single quotes and any other
/// character is copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDateFormatter {
    pattern: String,
}

impl PatternDateFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for PatternDateFormatter {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DATE_FORMAT)
    }
}

impl DateFormatter for PatternDateFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        format_with_pattern(date, &self.pattern)
    }
}

pub fn format_with_pattern(date: NaiveDate, pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut idx = 0;

    while idx < chars.len() {
        let ch = chars[idx];
        if ch == '\'' {
            idx += 1;
            while idx < chars.len() && chars[idx] != '\'' {
                out.push(chars[idx]);
                idx += 1;
            }
            idx += 1;
            continue;
        }
        if !ch.is_ascii_alphabetic() {
            out.push(ch);
            idx += 1;
            continue;
        }
        let start = idx;
        while idx < chars.len() && chars[idx] == ch {
            idx += 1;
        }
        render_field(&mut out, date, ch, idx - start);
    }

    out
}

fn render_field(out: &mut String, date: NaiveDate, letter: char, width: usize) {
    match (letter, width) {
        ('y', 2) => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
        ('y', n) => out.push_str(&format!("{:0n$}", date.year(), n = n)),
        ('M', 1) => out.push_str(&date.month().to_string()),
        ('M', 2) => out.push_str(&format!("{:02}", date.month())),
        ('M', 3) => out.push_str(&month_label(date.month())[..3]),
        ('M', _) => out.push_str(month_label(date.month())),
        ('d', 1) => out.push_str(&date.day().to_string()),
        ('d', _) => out.push_str(&format!("{:02}", date.day())),
        ('E', n) if n >= 4 => out.push_str(weekday_label(date.weekday())),
        ('E', _) => out.push_str(&weekday_label(date.weekday())[..3]),
        (other, n) => {
            for _ in 0..n {
                out.push(other);
            }
        }
    }
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
