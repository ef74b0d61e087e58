//! Bus timing normalization.
//!
//! Timings are entered by hand, so a listing may carry either a 12-hour
//! `"H:MM AM"` string or a 24-hour `"HH:MM"` string. This module converts
//! between the two for display and reduces both to minutes since midnight
//! for sorting.
//!
//! Parsing is lenient on purpose: a field that cannot be read counts as
//! zero and nothing here ever fails. Empty input is the only "no value"
//! case, reported as an empty string or `None`. Schedules are assumed to
//! fit in a single day; there is no rollover handling.

/// Minutes in one hour.
const MINUTES_PER_HOUR: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Format a timing for display in 12-hour form.
///
/// Input that already contains `AM` or `PM` (uppercase) is returned
/// unchanged. Anything else is read as 24-hour `HH:MM`: the hour is
/// reduced modulo 12 (with 0 shown as 12) and the suffix comes from
/// whether the original hour was 12 or later. The minute text is kept
/// as written, or `00` if absent.
///
/// Returns an empty string for empty input.
///
/// # Examples
///
/// ```
/// use evidebus::domain::to_display;
///
/// assert_eq!(to_display("14:30"), "2:30 PM");
/// assert_eq!(to_display("00:05"), "12:05 AM");
/// assert_eq!(to_display("7:15 AM"), "7:15 AM");
/// assert_eq!(to_display(""), "");
/// ```
pub fn to_display(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }
    if time.contains("AM") || time.contains("PM") {
        return time.to_string();
    }

    let mut parts = time.split(':');
    let hour = lenient_number(parts.next().unwrap_or_default());
    let minute = parts.next().map(str::trim).unwrap_or("00");

    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    format!("{hour}:{minute} {suffix}")
}

/// Convert a timing to minutes since midnight.
///
/// Strings containing `AM` or `PM` (any case) are read as `H:MM AM|PM`
/// and converted with the usual rules: 12 AM is hour 0, 12 PM stays 12,
/// any other PM hour gains 12. Other strings are split on `:` and read as
/// 24-hour hour and minute. Unreadable fields count as zero.
///
/// Returns `None` for empty input.
///
/// # Examples
///
/// ```
/// use evidebus::domain::to_minutes;
///
/// assert_eq!(to_minutes("2:30 PM"), Some(870));
/// assert_eq!(to_minutes("14:30"), Some(870));
/// assert_eq!(to_minutes("12:10 am"), Some(10));
/// assert_eq!(to_minutes("garbage"), Some(0));
/// assert_eq!(to_minutes(""), None);
/// ```
pub fn to_minutes(time: &str) -> Option<u32> {
    if time.is_empty() {
        return None;
    }

    let upper = time.to_ascii_uppercase();
    let (hour, minute) = match find_meridiem(&upper) {
        Some((pos, meridiem)) => {
            let (hour, minute) = split_hour_minute(&upper[..pos]);
            let hour = match (meridiem, hour) {
                (Meridiem::Am, 12) => 0,
                (Meridiem::Pm, h) if h != 12 => h.saturating_add(12),
                (_, h) => h,
            };
            (hour, minute)
        }
        None => split_hour_minute(time),
    };

    Some(
        hour.saturating_mul(MINUTES_PER_HOUR)
            .saturating_add(minute),
    )
}

/// Sort schedule rows chronologically by their timing text.
///
/// Rows whose timing is empty sort after every timed row. The sort is
/// stable, so rows with equal times keep their relative order.
///
/// # Examples
///
/// ```
/// use evidebus::domain::sort_by_time;
///
/// let mut rows = vec!["6:45 PM", "", "09:10", "7:00 AM"];
/// sort_by_time(&mut rows, |row| *row);
/// assert_eq!(rows, vec!["7:00 AM", "09:10", "6:45 PM", ""]);
/// ```
pub fn sort_by_time<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| match to_minutes(key(item)) {
        Some(minutes) => (false, minutes),
        None => (true, 0),
    });
}

/// Find the first `AM`/`PM` marker in an uppercased string.
fn find_meridiem(upper: &str) -> Option<(usize, Meridiem)> {
    let am = upper.find("AM").map(|pos| (pos, Meridiem::Am));
    let pm = upper.find("PM").map(|pos| (pos, Meridiem::Pm));
    match (am, pm) {
        (Some(a), Some(p)) => Some(if a.0 < p.0 { a } else { p }),
        (a, p) => a.or(p),
    }
}

/// Split `H:MM` into hour and minute, reading each leniently.
fn split_hour_minute(s: &str) -> (u32, u32) {
    let mut parts = s.split(':');
    let hour = lenient_number(parts.next().unwrap_or_default());
    let minute = lenient_number(parts.next().unwrap_or_default());
    (hour, minute)
}

/// Read the leading decimal digits of a field, ignoring leading whitespace.
///
/// Returns 0 when there are no digits or the value does not fit.
fn lenient_number(s: &str) -> u32 {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_converts_24_hour() {
        assert_eq!(to_display("14:30"), "2:30 PM");
        assert_eq!(to_display("09:05"), "9:05 AM");
        assert_eq!(to_display("23:59"), "11:59 PM");
    }

    #[test]
    fn display_midnight_and_noon() {
        assert_eq!(to_display("00:00"), "12:00 AM");
        assert_eq!(to_display("12:00"), "12:00 PM");
    }

    #[test]
    fn display_passes_through_12_hour() {
        assert_eq!(to_display("2:30 PM"), "2:30 PM");
        assert_eq!(to_display("10:00 AM"), "10:00 AM");
    }

    #[test]
    fn display_check_is_case_sensitive() {
        // Lowercase markers are not recognised, so the hour is re-read.
        assert_eq!(to_display("2:30 pm"), "2:30 pm AM");
    }

    #[test]
    fn display_empty_is_empty() {
        assert_eq!(to_display(""), "");
    }

    #[test]
    fn display_missing_minutes() {
        assert_eq!(to_display("18"), "6:00 PM");
    }

    #[test]
    fn display_unreadable_hour_is_midnight() {
        assert_eq!(to_display("xx:15"), "12:15 AM");
    }

    #[test]
    fn minutes_from_12_hour() {
        assert_eq!(to_minutes("2:30 PM"), Some(870));
        assert_eq!(to_minutes("12:00 PM"), Some(720));
        assert_eq!(to_minutes("12:00 AM"), Some(0));
        assert_eq!(to_minutes("12:45 AM"), Some(45));
        assert_eq!(to_minutes("11:59 PM"), Some(1439));
        assert_eq!(to_minutes("6:05 AM"), Some(365));
    }

    #[test]
    fn minutes_meridiem_is_case_insensitive() {
        assert_eq!(to_minutes("2:30 pm"), Some(870));
        assert_eq!(to_minutes("2:30pm"), Some(870));
        assert_eq!(to_minutes("9:00 Am"), Some(540));
    }

    #[test]
    fn minutes_from_24_hour() {
        assert_eq!(to_minutes("14:30"), Some(870));
        assert_eq!(to_minutes("00:00"), Some(0));
        assert_eq!(to_minutes("23:59"), Some(1439));
    }

    #[test]
    fn minutes_empty_is_none() {
        assert_eq!(to_minutes(""), None);
    }

    #[test]
    fn minutes_malformed_is_lenient() {
        assert_eq!(to_minutes("abc"), Some(0));
        assert_eq!(to_minutes("7"), Some(420));
        assert_eq!(to_minutes(":30"), Some(30));
        assert_eq!(to_minutes("PM"), Some(720));
        assert_eq!(to_minutes("7 PM"), Some(1140));
    }

    #[test]
    fn minutes_overflowing_field_is_zero() {
        assert_eq!(to_minutes("99999999999:10"), Some(10));
    }

    #[test]
    fn sort_puts_untimed_rows_last() {
        let mut rows = vec![("b", ""), ("c", "13:00"), ("a", "8:00 AM"), ("d", "")];
        sort_by_time(&mut rows, |row| row.1);
        let order: Vec<_> = rows.iter().map(|r| r.0).collect();
        assert_eq!(order, vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn sort_is_stable_for_equal_times() {
        let mut rows = vec![("first", "14:30"), ("second", "2:30 PM")];
        sort_by_time(&mut rows, |row| row.1);
        assert_eq!(rows[0].0, "first");
        assert_eq!(rows[1].0, "second");
    }

    #[test]
    fn lenient_number_reads_leading_digits() {
        assert_eq!(lenient_number("  42abc"), 42);
        assert_eq!(lenient_number("abc"), 0);
        assert_eq!(lenient_number(""), 0);
        assert_eq!(lenient_number("-5"), 0);
    }
}
