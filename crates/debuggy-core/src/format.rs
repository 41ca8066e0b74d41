//! Timestamp and delay rendering.

use chrono::{DateTime, FixedOffset};

const SECOND: u64 = 1000;
const MINUTE: u64 = SECOND * 60;
const HOUR: u64 = MINUTE * 60;

/// Renders a millisecond duration in its shortest human unit.
///
/// Hours, minutes and seconds are rounded half-up; anything under a second
/// is printed as raw milliseconds.
///
/// ```
/// use debuggy_core::short_duration;
///
/// assert_eq!(short_duration(0), "0ms");
/// assert_eq!(short_duration(1500), "2s");
/// assert_eq!(short_duration(86_400_000), "24h");
/// ```
#[must_use]
pub fn short_duration(ms: u64) -> String {
    if ms >= HOUR {
        format!("{}h", round_div(ms, HOUR))
    } else if ms >= MINUTE {
        format!("{}m", round_div(ms, MINUTE))
    } else if ms >= SECOND {
        format!("{}s", round_div(ms, SECOND))
    } else {
        format!("{ms}ms")
    }
}

/// Renders the delay column of a log line: `+` and the short duration.
#[must_use]
pub fn delay(ms: u64) -> String {
    format!("+{}", short_duration(ms))
}

/// Renders `YYYY-MM-DDTHH:mm:ss.mmm±HH:MM` in the timestamp's own offset.
///
/// The sign is `+` for a zero or positive offset and `-` for a negative one;
/// offset hours and minutes are the absolute parts of the offset.
#[must_use]
pub fn iso_date(date: &DateTime<FixedOffset>) -> String {
    let offset_minutes = date.offset().local_minus_utc() / 60;
    let sign = if offset_minutes >= 0 { '+' } else { '-' };
    let abs = offset_minutes.abs();

    format!(
        "{}{}{:02}:{:02}",
        date.format("%Y-%m-%dT%H:%M:%S%.3f"),
        sign,
        abs / 60,
        abs % 60
    )
}

// Half-up rounding of a non-negative quotient, without overflow near u64::MAX.
fn round_div(value: u64, unit: u64) -> u64 {
    value / unit + u64::from(value % unit >= unit - unit / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[allow(clippy::too_many_arguments)]
    fn at(
        offset_secs: i32,
        y: i32,
        mo: u32,
        d: u32,
        h: u32,
        mi: u32,
        s: u32,
        ms: u32,
    ) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_secs)
            .unwrap()
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
            + chrono::Duration::milliseconds(i64::from(ms))
    }

    #[test]
    fn short_duration_table() {
        assert_eq!(delay(0), "+0ms");
        assert_eq!(delay(1500), "+2s");
        assert_eq!(delay(60_000), "+1m");
        assert_eq!(delay(3_600_000), "+1h");
        assert_eq!(delay(86_400_000), "+24h");
    }

    #[test]
    fn short_duration_boundaries() {
        assert_eq!(short_duration(999), "999ms");
        assert_eq!(short_duration(1000), "1s");
        assert_eq!(short_duration(1499), "1s");
        assert_eq!(short_duration(59_999), "60s");
        assert_eq!(short_duration(90_000), "2m");
        assert_eq!(short_duration(89_999), "1m");
        assert_eq!(short_duration(5_400_000), "2h");
    }

    #[test]
    fn short_duration_handles_largest_delays() {
        assert_eq!(short_duration(u64::MAX), "5124095576030h");
        assert_eq!(delay(u64::MAX - 1000), "+5124095576030h");
        assert_eq!(round_div(u64::MAX, SECOND), u64::MAX / SECOND + 1);
        assert_eq!(round_div(u64::MAX, 1), u64::MAX);
    }

    #[test]
    fn iso_date_pads_every_field() {
        let date = at(0, 2024, 1, 2, 3, 4, 5, 6);
        assert_eq!(iso_date(&date), "2024-01-02T03:04:05.006+00:00");
    }

    #[test]
    fn iso_date_positive_offset() {
        let date = at(5 * 3600 + 30 * 60, 2023, 11, 25, 18, 45, 59, 120);
        assert_eq!(iso_date(&date), "2023-11-25T18:45:59.120+05:30");
    }

    #[test]
    fn iso_date_negative_offset() {
        let date = at(-(3 * 3600 + 30 * 60), 2023, 7, 9, 23, 0, 0, 999);
        assert_eq!(iso_date(&date), "2023-07-09T23:00:00.999-03:30");

        let date = at(-8 * 3600, 2020, 2, 29, 0, 0, 0, 0);
        assert_eq!(iso_date(&date), "2020-02-29T00:00:00.000-08:00");
    }

    #[test]
    fn iso_date_uses_local_wall_clock() {
        // Same instant, two offsets: the wall-clock fields follow the offset
        let utc = at(0, 2024, 6, 1, 12, 0, 0, 0);
        let tokyo = utc.with_timezone(&FixedOffset::east_opt(9 * 3600).unwrap());
        assert_eq!(iso_date(&tokyo), "2024-06-01T21:00:00.000+09:00");
    }
}
