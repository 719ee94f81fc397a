mod consts;
mod convert;
mod format;
mod grid;
mod prelude;
mod types;

pub use consts::*;
pub use convert::{
    gregorian_to_jdn, jalali_to_jdn, jdn_to_gregorian, jdn_to_jalali, jdn_weekday, leap_info,
    DateError,
};
pub use grid::MonthGrid;
pub use types::{GregorianDate, LeapInfo};

use crate::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;

/// A single date in the Jalali (Persian) calendar.
///
/// The canonical representation is the Jalali `(year, month, day)` triple;
/// the Julian Day Number is carried alongside for ordering and weekday
/// lookup. Every constructor derives both from the same conversion, so the
/// two can never disagree. The type is immutable; the `with_*` methods
/// return new values instead of mutating in place.
///
/// Construction is lenient the way the underlying day arithmetic is: a day
/// or month outside its nominal range is not rejected but normalized into
/// the adjacent month or year, so `JalaliDate::new(1393, 6, 35)` is
/// `1393-07-04`. Only the Jalali year range is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct JalaliDate {
    year: i32,
    month: u8,
    day: u8,
    jdn: i64,
}

impl JalaliDate {
    /// Creates a date from a Jalali `(year, month, day)` triple.
    ///
    /// Out-of-range day or month values float through the day arithmetic
    /// into the adjacent month or year.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] when the year (after any
    /// overflow) is outside the supported span.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        Self::from_jdn(convert::jalali_to_jdn(year, month, day)?)
    }

    /// Creates a date from a Julian Day Number.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] when the JDN falls outside
    /// the supported Jalali year span.
    pub fn from_jdn(jdn: i64) -> Result<Self, DateError> {
        let (year, month, day) = convert::jdn_to_jalali(jdn)?;
        Ok(Self {
            year,
            month,
            day,
            jdn,
        })
    }

    /// Creates a date from a proleptic Gregorian `(year, month, day)`.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] when the date falls outside
    /// the supported Jalali year span.
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        Self::from_jdn(convert::gregorian_to_jdn(year, month, day))
    }

    /// Creates a date for the current day on the local wall clock.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] if the system clock is set
    /// outside the supported span.
    #[cfg(feature = "now")]
    pub fn today() -> Result<Self, DateError> {
        let date = jiff::Zoned::now().date();
        Self::from_gregorian(
            i32::from(date.year()),
            i32::from(date.month()),
            i32::from(date.day()),
        )
    }

    /// Returns the Jalali year.
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the Jalali month number, 1 to 12.
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of the month, 1 to 31.
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns the Julian Day Number.
    #[inline]
    pub const fn jdn(self) -> i64 {
        self.jdn
    }

    /// Returns the weekday, Sunday = 0 through Saturday = 6.
    pub fn weekday(self) -> u8 {
        convert::jdn_weekday(self.jdn)
    }

    /// Returns the Persian name of the month.
    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[usize::from(self.month) - 1]
    }

    /// Returns the full Persian name of the weekday.
    pub fn weekday_name(self) -> &'static str {
        WEEKDAY_NAMES[usize::from(self.weekday())]
    }

    /// Returns the abbreviated Persian name of the weekday.
    pub fn weekday_name_abbr(self) -> &'static str {
        WEEKDAY_NAMES_ABBR[usize::from(self.weekday())]
    }

    /// Returns the equivalent proleptic Gregorian date.
    pub fn to_gregorian(self) -> GregorianDate {
        convert::jdn_to_gregorian(self.jdn)
    }

    /// Returns the same month and day in another year.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] when `year` is outside the
    /// supported span.
    pub fn with_year(self, year: i32) -> Result<Self, DateError> {
        Self::new(year, i32::from(self.month), i32::from(self.day))
    }

    /// Returns the same day in another month. A month outside 1..=12
    /// rolls the year in either direction: month 13 is Farvardin of the
    /// next year, month 0 is Esfand of the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] when the rolled year is
    /// outside the supported span.
    pub fn with_month(self, month: i32) -> Result<Self, DateError> {
        let (year, month) = normalize_month(self.year, month);
        Self::new(year, month, i32::from(self.day))
    }

    /// Returns another day of the same month.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] when the resulting date is
    /// outside the supported span.
    pub fn with_day(self, day: i32) -> Result<Self, DateError> {
        Self::new(self.year, i32::from(self.month), day)
    }

    /// Returns this day one month later, rolling the year at Esfand.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] at the edge of the
    /// supported span.
    pub fn next_month(self) -> Result<Self, DateError> {
        self.with_month(i32::from(self.month) + 1)
    }

    /// Returns this day one month earlier, rolling the year at Farvardin.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] at the edge of the
    /// supported span.
    pub fn prev_month(self) -> Result<Self, DateError> {
        self.with_month(i32::from(self.month) - 1)
    }

    /// Renders the date through a format pattern.
    ///
    /// Runs of `Y` (two-digit year, `YYY`/`YYYY` full year), `M` (month
    /// number, `MMM`/`MMMM` Persian month name), `D` (day number) and `d`
    /// (abbreviated weekday, `ddd`/`dddd` full Persian weekday name) are
    /// substituted; numeric tokens are unpadded. Everything else passes
    /// through unchanged, so an unknown token is never an error.
    ///
    /// ```
    /// use jcal::JalaliDate;
    ///
    /// let date = JalaliDate::new(1393, 6, 1)?;
    /// assert_eq!(date.format("YYYY/MM/DD"), "1393/6/1");
    /// assert_eq!(date.format("dddd D MMMM YYYY"), "شنبه 1 شهریور 1393");
    /// # Ok::<(), jcal::DateError>(())
    /// ```
    pub fn format(&self, pattern: &str) -> String {
        format::render(self, pattern)
    }

    /// Reports whether the given Jalali year is a leap year.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] when `year` is outside the
    /// supported span.
    pub fn is_leap_year(year: i32) -> Result<bool, DateError> {
        Ok(convert::leap_info(year)?.leap == 0)
    }

    /// Returns the number of days in the given Jalali month: 31 for
    /// months 1-6, 30 for months 7-11, and 29 or 30 for Esfand depending
    /// on the leap year. A month outside 1..=12 rolls the year first,
    /// like [`JalaliDate::with_month`].
    ///
    /// # Errors
    ///
    /// Returns [`DateError::YearOutOfRange`] when the rolled year is
    /// outside the supported span.
    pub fn days_in_month(year: i32, month: i32) -> Result<u8, DateError> {
        let (year, month) = normalize_month(year, month);
        match month {
            1..=6 => Ok(31),
            7..=11 => Ok(30),
            _ => {
                if Self::is_leap_year(year)? {
                    Ok(ESFAND_DAYS_LEAP)
                } else {
                    Ok(DAYS_IN_MONTH[usize::from(ESFAND)])
                }
            }
        }
    }
}

/// Rolls an out-of-range month into the year: month 13 becomes month 1 of
/// the next year, month 0 becomes month 12 of the previous year, and so on
/// for both directions of overflow.
pub(crate) fn normalize_month(year: i32, month: i32) -> (i32, i32) {
    let year_diff = (month - 1).div_euclid(12);
    (year + year_diff, month - year_diff * 12)
}

impl PartialOrd for JalaliDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JalaliDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.jdn.cmp(&other.jdn)
    }
}

impl FromStr for JalaliDate {
    type Err = DateError;

    /// Parses a Jalali date in the `YYYY-MM-DD` shape produced by
    /// `Display`. A leading `-` marks a negative year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let invalid = || DateError::InvalidFormat(s.to_owned());
        let mut parts = body.split('-');
        let (year, month, day) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d), None) => (
                y.parse::<i32>().map_err(|_| invalid())?,
                m.parse::<i32>().map_err(|_| invalid())?,
                d.parse::<i32>().map_err(|_| invalid())?,
            ),
            _ => return Err(invalid()),
        };
        let year = if negative { -year } else { year };
        Self::new(year, month, day)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "now")]
impl TryFrom<jiff::civil::Date> for JalaliDate {
    type Error = DateError;

    fn try_from(date: jiff::civil::Date) -> Result<Self, Self::Error> {
        Self::from_gregorian(
            i32::from(date.year()),
            i32::from(date.month()),
            i32::from(date.day()),
        )
    }
}
