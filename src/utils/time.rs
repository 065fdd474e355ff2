//! Time utilities

use chrono::NaiveTime;

/// Duration of a booking slot in fractional hours.
///
/// Returns `None` when the end does not come after the start.
pub fn booking_hours(start: NaiveTime, end: NaiveTime) -> Option<f64> {
    let minutes = (end - start).num_minutes();
    if minutes <= 0 {
        return None;
    }
    Some(minutes as f64 / 60.0)
}

/// Parse an `HH:MM` (or `HH:MM:SS`) time-of-day string
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_hours() {
        let six = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
        let seven = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
        let half = NaiveTime::from_hms_opt(18, 30, 0).unwrap();

        assert_eq!(booking_hours(six, seven), Some(1.0));
        assert_eq!(booking_hours(six, half), Some(0.5));
        assert_eq!(booking_hours(seven, six), None);
        assert_eq!(booking_hours(six, six), None);
    }

    #[test]
    fn test_parse_time() {
        assert!(parse_time("18:00").is_some());
        assert!(parse_time("18:00:30").is_some());
        assert!(parse_time("6pm").is_none());
    }
}
