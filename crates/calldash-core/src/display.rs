//! Display helpers
//!
//! Pure functions that derive display values from call record fields:
//! status/sentiment color classes, duration strings, and normalized
//! disconnect reasons. Kept free of I/O so they are trivially testable.

/// Map a call status to a badge color class
pub fn status_color(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "ended" | "completed" => "bg-green-100 text-green-800",
        "ongoing" | "in-progress" => "bg-blue-100 text-blue-800",
        "registered" => "bg-yellow-100 text-yellow-800",
        "error" | "failed" => "bg-red-100 text-red-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

/// Map a detected sentiment to a text color class
pub fn sentiment_color(sentiment: &str) -> &'static str {
    match sentiment.to_ascii_lowercase().as_str() {
        "positive" => "text-green-600",
        "negative" => "text-red-600",
        "neutral" => "text-yellow-600",
        _ => "text-gray-500",
    }
}

/// Format a duration in milliseconds as "Xh Ym Zs"
///
/// Largest nonzero unit first; seconds are always shown. Sub-second and
/// negative durations collapse to "0s".
pub fn format_duration_ms(ms: i64) -> String {
    let total_secs = ms.max(0) / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Normalize a provider disconnect-reason token for display
///
/// Separators become spaces and the token is lowercased, so
/// "USER_HANGUP" renders as "user hangup".
pub fn humanize_disconnect_reason(reason: &str) -> String {
    reason
        .chars()
        .map(|c| match c {
            '_' | '-' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration_ms(0), "0s");
        assert_eq!(format_duration_ms(999), "0s");
        assert_eq!(format_duration_ms(-5_000), "0s");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration_ms(61_000), "1m 1s");
        assert_eq!(format_duration_ms(60_000), "1m 0s");
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration_ms(3_661_000), "1h 1m 1s");
        assert_eq!(format_duration_ms(3_600_000), "1h 0m 0s");
        assert_eq!(format_duration_ms(7_322_000), "2h 2m 2s");
    }

    #[test]
    fn test_humanize_disconnect_reason() {
        assert_eq!(humanize_disconnect_reason("USER_HANGUP"), "user hangup");
        assert_eq!(
            humanize_disconnect_reason("agent-hangup"),
            "agent hangup"
        );
        assert_eq!(
            humanize_disconnect_reason("DIAL_NO_ANSWER"),
            "dial no answer"
        );
    }

    #[test]
    fn test_status_color() {
        assert_eq!(status_color("ended"), "bg-green-100 text-green-800");
        assert_eq!(status_color("ERROR"), "bg-red-100 text-red-800");
        assert_eq!(status_color("ongoing"), "bg-blue-100 text-blue-800");
        assert_eq!(status_color("something-else"), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn test_sentiment_color() {
        assert_eq!(sentiment_color("Positive"), "text-green-600");
        assert_eq!(sentiment_color("negative"), "text-red-600");
        assert_eq!(sentiment_color("unknown"), "text-gray-500");
    }
}
