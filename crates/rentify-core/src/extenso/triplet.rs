//! Rendering of a single 0-999 group.

use super::lexicon::{HUNDREDS, HUNDRED_EXACT, TENS, UNITS};

/// Writes out a group of up to three digits.
///
/// `0` yields an empty string; callers skip zero groups.
pub(crate) fn render_triplet(n: u16) -> String {
    debug_assert!(n < 1000, "triplet out of range: {n}");

    match n {
        0..=19 => UNITS[n as usize].to_string(),
        100 => HUNDRED_EXACT.to_string(),
        20..=99 => render_pair(n),
        _ => {
            let hundreds = HUNDREDS[(n / 100) as usize];
            match n % 100 {
                0 => hundreds.to_string(),
                rest => format!("{} e {}", hundreds, render_pair(rest)),
            }
        }
    }
}

/// 1-99.
fn render_pair(n: u16) -> String {
    if n < 20 {
        return UNITS[n as usize].to_string();
    }

    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        unit => format!("{} e {}", tens, UNITS[unit as usize]),
    }
}
