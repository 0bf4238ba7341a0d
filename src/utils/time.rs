use chrono::NaiveDate;

/// Long form used for archive headers, e.g. `January 1, 2024`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `MM:SS` as shown by the pomodoro display.
pub fn format_countdown(minutes: u32, seconds: u32) -> String {
    format!("{minutes:02}:{seconds:02}")
}
