use crate::prelude::*;

/// A proleptic Gregorian calendar date.
///
/// Produced and consumed by the conversion functions; day-in-month
/// correctness is the caller's responsibility. Years BC are numbered
/// 0, -1, -2, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct GregorianDate {
    /// Calendar year (may be zero or negative)
    pub year: i32,
    /// Calendar month, 1 to 12
    pub month: u8,
    /// Day of the month, 1 to 31
    pub day: u8,
}

/// Leap classification of a single Jalali year, derived from the
/// break-point table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeapInfo {
    /// Years since the last leap year, 0 to 4. Zero means the year
    /// itself is leap.
    pub leap: u8,
    /// Gregorian year in which this Jalali year begins
    pub gregorian_year: i32,
    /// Gregorian day in March on which Nowruz falls
    pub march_day: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_display() {
        let date = GregorianDate {
            year: 2014,
            month: 8,
            day: 23,
        };
        assert_eq!(date.to_string(), "2014-08-23");
    }

    #[test]
    fn gregorian_display_pads_components() {
        let date = GregorianDate {
            year: 622,
            month: 3,
            day: 2,
        };
        assert_eq!(date.to_string(), "0622-03-02");
    }
}
