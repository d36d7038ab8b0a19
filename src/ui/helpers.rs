//! Output helper functions

/// Format an hour/minute pair as a 12-hour clock string, e.g. "3:05 PM"
pub fn format_clock(hour: u32, minute: u32) -> String {
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, minute, meridiem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock_midnight() {
        assert_eq!(format_clock(0, 0), "12:00 AM");
    }

    #[test]
    fn test_format_clock_morning() {
        assert_eq!(format_clock(9, 5), "9:05 AM");
    }

    #[test]
    fn test_format_clock_noon() {
        assert_eq!(format_clock(12, 0), "12:00 PM");
    }

    #[test]
    fn test_format_clock_afternoon() {
        assert_eq!(format_clock(15, 30), "3:30 PM");
    }

    #[test]
    fn test_format_clock_last_minute() {
        assert_eq!(format_clock(23, 59), "11:59 PM");
    }
}
