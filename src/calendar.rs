use chrono::{Datelike, Days, Months, NaiveDate};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Grid of the month containing `today`. Weeks start on Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first_day: NaiveDate,
    today: NaiveDate,
    days_in_month: u32,
}

impl MonthView {
    pub fn for_date(today: NaiveDate) -> Self {
        let first_day = today - Days::new(today.day0() as u64);
        let next_month = first_day + Months::new(1);
        Self {
            first_day,
            today,
            days_in_month: (next_month - first_day).num_days() as u32,
        }
    }

    /// Heading such as `January 2024`.
    pub fn title(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// Empty cells before the 1st.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day.weekday().num_days_from_sunday()
    }

    pub fn today(&self) -> u32 {
        self.today.day()
    }

    /// Cells row by row, `None` for the blanks before the 1st.
    pub fn cells(&self) -> impl Iterator<Item = Option<u32>> {
        (0..self.leading_blanks())
            .map(|_| None)
            .chain((1..=self.days_in_month).map(Some))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::MonthView;

    fn view(y: i32, m: u32, d: u32) -> MonthView {
        MonthView::for_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_month_starting_wednesday() {
        // May 2024 starts on a Wednesday.
        let may = view(2024, 5, 17);
        assert_eq!(may.leading_blanks(), 3);
        assert_eq!(may.days_in_month(), 31);
        assert_eq!(may.today(), 17);
        assert_eq!(may.title(), "May 2024");
    }

    #[test]
    fn test_february_lengths() {
        assert_eq!(view(2024, 2, 29).days_in_month(), 29);
        assert_eq!(view(2023, 2, 1).days_in_month(), 28);
    }

    #[test]
    fn test_december_wraps_year() {
        let december = view(2023, 12, 31);
        assert_eq!(december.days_in_month(), 31);
        assert_eq!(december.title(), "December 2023");
    }

    #[test]
    fn test_cells() {
        // September 2024 starts on a Sunday.
        let september = view(2024, 9, 1);
        let cells = september.cells().collect::<Vec<_>>();
        assert_eq!(cells.len(), 30);
        assert_eq!(cells[0], Some(1));

        let june = view(2024, 6, 10);
        let cells = june.cells().collect::<Vec<_>>();
        assert_eq!(&cells[..7], &[None, None, None, None, None, None, Some(1)]);
        assert_eq!(cells.last(), Some(&Some(30)));
    }
}
