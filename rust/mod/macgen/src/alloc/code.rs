//! Work-order codes: `{prefix}{month letter}{yy}{ordinal:02}`.

use chrono::Datelike;

/// Month letters, January = A … December = L.
const MONTH_CODES: [char; 12] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L'];

/// Letter for a 1-based month number.
pub fn month_code(month: u32) -> char {
    MONTH_CODES[month.saturating_sub(1) as usize % 12]
}

/// Build the code for `ordinal` issued at `now`.
///
/// Ordinals above 99 are rendered in full; the code then grows by a digit.
pub fn build_code<D: Datelike>(prefix: &str, ordinal: u64, now: &D) -> String {
    format!(
        "{}{}{:02}{:02}",
        prefix,
        month_code(now.month()),
        now.year().rem_euclid(100),
        ordinal
    )
}
