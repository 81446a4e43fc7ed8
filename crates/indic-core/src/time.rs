/// Returns a simple ISO 8601 timestamp (Unix epoch seconds with Z suffix).
pub fn timestamp_now() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}Z", dur.as_secs())
}

/// Render whole seconds as `m:ss`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(600), "10:00");
    }

    #[test]
    fn timestamp_has_z_suffix() {
        let ts = timestamp_now();
        assert!(ts.ends_with('Z'));
        assert!(ts.trim_end_matches('Z').parse::<u64>().is_ok());
    }
}
