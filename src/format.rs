//! Display formatting helpers for hours and visitor counts.
//!
//! Pure and stateless; consumed by the list badges, popups, and the hourly
//! popularity chart.

/// Formats an hour of day (0-23, wrapped) as a 12-hour label: 0 -> "12AM",
/// 13 -> "1PM".
pub fn hour_label(hour: u32) -> String {
    let hour = hour % 24;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!("{display}{suffix}")
}

/// Formats a count with thousands grouping and no fractional digits:
/// 1280 -> "1,280".
pub fn count_label(count: u32) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_label_boundaries() {
        assert_eq!(hour_label(0), "12AM");
        assert_eq!(hour_label(1), "1AM");
        assert_eq!(hour_label(11), "11AM");
        assert_eq!(hour_label(12), "12PM");
        assert_eq!(hour_label(13), "1PM");
        assert_eq!(hour_label(23), "11PM");
        // Out-of-range hours wrap
        assert_eq!(hour_label(24), "12AM");
        assert_eq!(hour_label(37), "1PM");
    }

    #[test]
    fn count_label_groups_thousands() {
        assert_eq!(count_label(0), "0");
        assert_eq!(count_label(999), "999");
        assert_eq!(count_label(1000), "1,000");
        assert_eq!(count_label(1280), "1,280");
        assert_eq!(count_label(1_234_567), "1,234,567");
    }

    #[test]
    fn formatters_are_idempotent() {
        assert_eq!(hour_label(13), hour_label(13));
        assert_eq!(count_label(2100), count_label(2100));
    }
}
