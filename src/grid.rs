//! Month-grid layout for calendar views.
//!
//! Computes the cell layout a calendar UI needs to draw one Jalali month:
//! Saturday-first weeks of day numbers with blank leading and trailing
//! cells. The grid carries no rendering concerns; consumers map cells to
//! whatever table or widget markup they use.

use crate::convert::DateError;
use crate::{normalize_month, JalaliDate};

/// Cell layout of a single Jalali month.
///
/// Weeks run Saturday through Friday; `None` cells pad the first and
/// last week so every week holds exactly 7 entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    first: JalaliDate,
    weeks: Vec<[Option<u8>; 7]>,
}

impl MonthGrid {
    /// Lays out the given month. An out-of-range `month` rolls the year,
    /// so `MonthGrid::new(1393, 13)` is Farvardin 1394.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] when the (rolled) year is
    /// outside the supported span.
    pub fn new(year: i32, month: i32) -> Result<Self, DateError> {
        let (year, month) = normalize_month(year, month);
        let first = JalaliDate::new(year, month, 1)?;
        let days = JalaliDate::days_in_month(year, month)?;

        // Column of the month's first day in a Saturday-first week.
        let leading = usize::from((first.weekday() + 1) % 7);

        let mut weeks = Vec::with_capacity(6);
        let mut week = [None; 7];
        let mut column = leading;
        for day in 1..=days {
            week[column] = Some(day);
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }

        Ok(Self { first, weeks })
    }

    /// Returns the Jalali year of the month on display.
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Returns the Jalali month number, 1 to 12.
    pub fn month(&self) -> u8 {
        self.first.month()
    }

    /// Returns the first day of the month as a date.
    pub const fn first_day(&self) -> JalaliDate {
        self.first
    }

    /// Returns the laid-out weeks, Saturday first.
    pub fn weeks(&self) -> &[[Option<u8>; 7]] {
        &self.weeks
    }

    /// Renders the month caption, e.g. `"شهریور 1393"`.
    pub fn title(&self) -> String {
        self.first.format("MMMM YYYY")
    }

    /// Lays out the previous month, rolling the year at Farvardin.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] at the edge of the
    /// supported span.
    pub fn prev(&self) -> Result<Self, DateError> {
        Self::new(self.year(), i32::from(self.month()) - 1)
    }

    /// Lays out the next month, rolling the year at Esfand.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] at the edge of the
    /// supported span.
    pub fn next(&self) -> Result<Self, DateError> {
        Self::new(self.year(), i32::from(self.month()) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shahrivar_1393_layout() {
        // 1393-06-01 was a Saturday, so the grid starts flush.
        let grid = MonthGrid::new(1393, 6).unwrap();
        assert_eq!(grid.year(), 1393);
        assert_eq!(grid.month(), 6);
        assert_eq!(grid.weeks().len(), 5);

        let first_week = grid.weeks()[0];
        assert_eq!(first_week[0], Some(1));
        assert_eq!(first_week[6], Some(7));

        // 31 days: the last week holds days 29..=31 and four blanks.
        let last_week = grid.weeks()[4];
        assert_eq!(last_week[0], Some(29));
        assert_eq!(last_week[2], Some(31));
        assert_eq!(last_week[3], None);
        assert_eq!(last_week[6], None);
    }

    #[test]
    fn farvardin_1404_leading_blanks() {
        // 1404-01-01 = 2025-03-21, a Friday: six leading blanks.
        let grid = MonthGrid::new(1404, 1).unwrap();
        let first_week = grid.weeks()[0];
        assert_eq!(&first_week[..6], &[None; 6]);
        assert_eq!(first_week[6], Some(1));
    }

    #[test]
    fn cell_count_matches_month_length() {
        for (year, month) in [(1393, 6), (1393, 12), (1403, 12), (1404, 1)] {
            let grid = MonthGrid::new(year, month).unwrap();
            let days: usize = grid
                .weeks()
                .iter()
                .flatten()
                .filter(|cell| cell.is_some())
                .count();
            let expected = JalaliDate::days_in_month(year, month).unwrap();
            assert_eq!(days, usize::from(expected), "{year}-{month}");
        }
    }

    #[test]
    fn every_week_has_seven_cells() {
        let grid = MonthGrid::new(1393, 7).unwrap();
        for week in grid.weeks() {
            assert_eq!(week.len(), 7);
        }
    }

    #[test]
    fn days_are_consecutive_across_weeks() {
        let grid = MonthGrid::new(1403, 12).unwrap();
        let days: Vec<u8> = grid.weeks().iter().flatten().flatten().copied().collect();
        let expected: Vec<u8> = (1..=30).collect();
        assert_eq!(days, expected);
    }

    #[test]
    fn title_uses_month_name_and_year() {
        let grid = MonthGrid::new(1393, 6).unwrap();
        assert_eq!(grid.title(), "شهریور 1393");
    }

    #[test]
    fn navigation_rolls_the_year() {
        let grid = MonthGrid::new(1393, 12).unwrap();
        let next = grid.next().unwrap();
        assert_eq!((next.year(), next.month()), (1394, 1));

        let grid = MonthGrid::new(1393, 1).unwrap();
        let prev = grid.prev().unwrap();
        assert_eq!((prev.year(), prev.month()), (1392, 12));
    }

    #[test]
    fn month_overflow_rolls_on_construction() {
        let grid = MonthGrid::new(1393, 13).unwrap();
        assert_eq!((grid.year(), grid.month()), (1394, 1));

        let grid = MonthGrid::new(1393, 0).unwrap();
        assert_eq!((grid.year(), grid.month()), (1392, 12));
    }
}
