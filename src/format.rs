//! Rendering of format patterns like `"dddd D MMMM YYYY"`.
//!
//! The pattern is consumed in a single left-to-right pass over runs of
//! identical characters, so substituted text is never re-scanned. Runs of
//! `Y`, `M`, `D` and `d` are replaced; everything else passes through
//! verbatim:
//!
//! | token | output |
//! |-------|--------|
//! | `Y`, `YY` | two-digit year |
//! | `YYY`, `YYYY` | full year |
//! | `M`, `MM` | month number, unpadded |
//! | `MMM`, `MMMM` | Persian month name |
//! | `D`, `DD` | day number, unpadded |
//! | `d`, `dd` | abbreviated Persian weekday name |
//! | `ddd`, `dddd` | full Persian weekday name |

use std::fmt::Write;

use crate::JalaliDate;

pub(crate) fn render(date: &JalaliDate, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        match c {
            'Y' if run >= 3 => {
                let _ = write!(out, "{}", date.year());
            }
            'Y' => {
                let _ = write!(out, "{:02}", date.year().rem_euclid(100));
            }
            'M' if run >= 3 => out.push_str(date.month_name()),
            'M' => {
                let _ = write!(out, "{}", date.month());
            }
            'D' => {
                let _ = write!(out, "{}", date.day());
            }
            'd' if run >= 3 => out.push_str(date.weekday_name()),
            'd' => out.push_str(date.weekday_name_abbr()),
            _ => {
                for _ in 0..run {
                    out.push(c);
                }
            }
        }
    }
    out
}
