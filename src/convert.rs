//! Conversions among Julian Day Numbers, proleptic Gregorian dates and
//! Jalali dates.
//!
//! The Jalali leap rule follows the true solar year and cannot be reduced
//! to a fixed arithmetic cycle the way the Gregorian 4/100/400 rule can.
//! The algorithm here is the arithmetic approximation of Borkowski
//! ("The Persian calendar for 3000 years"): a table of break years where
//! the 33-year leap cycle shifts phase, covering Jalali years -61 to 3177.
//!
//! All functions are pure and allocation-free. Only the Jalali year is
//! validated; month and day values outside their nominal ranges are not
//! rejected and simply flow through the day arithmetic into an adjacent
//! month or year.
//!
//! The closed forms below are defined over truncate-toward-zero division,
//! which is what Rust's native `/` and `%` compute. Every operand they see
//! is non-negative within the supported range, with one exception in
//! [`leap_info`] that is corrected explicitly.

use crate::consts::{BREAK_YEARS, MAX_YEAR, MIN_YEAR};
use crate::types::{GregorianDate, LeapInfo};

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The Jalali year is outside the span of the break-point table.
    #[error("Jalali year {0} is outside the supported range {MIN_YEAR} to {MAX_YEAR}")]
    YearOutOfRange(i32),

    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("invalid date string: {0}")]
    InvalidFormat(String),
}

/// Classifies a Jalali year: how many years have passed since the last
/// leap year (0 means the year itself is leap), and where its first day
/// (Nowruz) falls in the Gregorian calendar.
///
/// # Errors
///
/// Returns [`DateError::YearOutOfRange`] when `year` is outside
/// `MIN_YEAR..=MAX_YEAR`.
pub fn leap_info(year: i32) -> Result<LeapInfo, DateError> {
    let last = BREAK_YEARS[BREAK_YEARS.len() - 1];
    let mut jp = BREAK_YEARS[0];
    if year < jp || year >= last {
        return Err(DateError::YearOutOfRange(year));
    }

    let gregorian_year = year + 621;
    let mut leap_j: i32 = -14;
    let mut jump = 0;

    // Find the break-point interval containing `year`, accumulating the
    // Jalali leap-day count over the intervals before it.
    for &jm in &BREAK_YEARS[1..] {
        jump = jm - jp;
        if year < jm {
            break;
        }
        leap_j += jump / 33 * 8 + jump % 33 / 4;
        jp = jm;
    }
    let mut n = year - jp;

    // Leap days from AD 621 to the beginning of this Jalali year.
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // Gregorian leap days over the same span.
    let leap_g = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;

    let march_day = 20 + leap_j - leap_g;

    // Years since the last leap year. When fewer than 6 years remain
    // before the next break point the cycle wraps early.
    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Ok(LeapInfo {
        leap: leap as u8,
        gregorian_year,
        march_day: march_day as u8,
    })
}

/// Converts a Jalali date to its Julian Day Number.
///
/// The month offset is the closed form of the 31/30-day month pattern:
/// months 1-6 have 31 days and months 7 onward have 30 (Esfand's missing
/// 30th day never enters the sum).
///
/// # Errors
///
/// Returns [`DateError::YearOutOfRange`] when `year` is outside the
/// break-point table. Month and day are not validated.
pub fn jalali_to_jdn(year: i32, month: i32, day: i32) -> Result<i64, DateError> {
    let info = leap_info(year)?;
    let nowruz = gregorian_to_jdn(info.gregorian_year, 3, i32::from(info.march_day));
    Ok(nowruz + i64::from((month - 1) * 31 - month / 7 * (month - 7) + day - 1))
}

/// Converts a Julian Day Number to a Jalali `(year, month, day)` triple.
///
/// # Errors
///
/// Returns [`DateError::YearOutOfRange`] when the JDN falls outside the
/// supported Jalali year span.
pub fn jdn_to_jalali(jdn: i64) -> Result<(i32, u8, u8), DateError> {
    let gregorian_year = jdn_to_gregorian(jdn).year;
    let mut year = gregorian_year - 621;
    let info = leap_info(year)?;
    let nowruz = gregorian_to_jdn(info.gregorian_year, 3, i32::from(info.march_day));

    // Days passed since Farvardin the 1st.
    let mut k = (jdn - nowruz) as i32;
    if k >= 0 {
        if k <= 185 {
            // The first 6 months, 31 days each.
            let month = 1 + k / 31;
            let day = k % 31 + 1;
            return Ok((year, month as u8, day as u8));
        }
        k -= 186;
    } else {
        // Previous Jalali year: offset from the start of Mehr, one day
        // longer when the stepped-back year is leap.
        year -= 1;
        k += 179;
        if info.leap == 1 {
            k += 1;
        }
    }
    let month = 7 + k / 30;
    let day = k % 30 + 1;
    Ok((year, month as u8, day as u8))
}

/// Calculates the Julian Day Number of a proleptic Gregorian date.
///
/// Years BC are numbered 0, -1, -2, ... The procedure is valid from
/// 1 March of year -100100 up to a few million years ahead.
pub fn gregorian_to_jdn(year: i32, month: i32, day: i32) -> i64 {
    let (gy, gm, gd) = (i64::from(year), i64::from(month), i64::from(day));
    let d = (gy + (gm - 8) / 6 + 100_100) * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd
        - 34_840_408;
    d - (gy + 100_100 + (gm - 8) / 6) / 100 * 3 / 4 + 752
}

/// Calculates the proleptic Gregorian date of a Julian Day Number.
///
/// Inverse of [`gregorian_to_jdn`] over the same span.
pub fn jdn_to_gregorian(jdn: i64) -> GregorianDate {
    let mut j = 4 * jdn + 139_361_631;
    j += (4 * jdn + 183_187_720) / 146_097 * 3 / 4 * 4 - 3908;
    let i = j % 1461 / 4 * 5 + 308;
    let day = i % 153 / 5 + 1;
    let month = i / 153 % 12 + 1;
    let year = j / 1461 - 100_100 + (8 - month) / 6;
    GregorianDate {
        year: year as i32,
        month: month as u8,
        day: day as u8,
    }
}

/// Weekday of a Julian Day Number, Sunday = 0 through Saturday = 6.
pub fn jdn_weekday(jdn: i64) -> u8 {
    ((jdn + 1).rem_euclid(7)) as u8
}
