/// First Jalali year covered by the break-point table (inclusive)
pub const MIN_YEAR: i32 = -61;

/// Last Jalali year covered by the break-point table (inclusive)
pub const MAX_YEAR: i32 = 3177;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for Farvardin (the Jalali new year month)
pub const FARVARDIN: u8 = 1;
/// Month number for Esfand (the 29/30-day final month)
pub const ESFAND: u8 = 12;

/// Days in Esfand when the year is leap
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in each Jalali month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (common year default, adjusted by `is_leap_year`)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (common year, adjusted by is_leap_year check)
];

/// Persian month names, indexed by month number minus one
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "امرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Persian weekday names, indexed by the Sunday = 0 weekday number
pub const WEEKDAY_NAMES: [&str; 7] = [
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنج‌شنبه",
    "جمعه",
    "شنبه",
];

/// Abbreviated Persian weekday names, same indexing as [`WEEKDAY_NAMES`]
pub const WEEKDAY_NAMES_ABBR: [&str; 7] = ["۱ش", "۲ش", "۳ش", "۴ش", "۵ش", "ج", "ش"];

/// Jalali years starting the 33-year leap rule, after Borkowski. The leap
/// cycle is not a fixed arithmetic rule; it shifts phase at each of these
/// empirically-fitted years. The first and last entries bound the supported
/// year range.
pub(crate) const BREAK_YEARS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];
