use chrono::Duration;

/// Compact elapsed-time label, e.g. `"45s"` or `"3m 07s"`.
#[must_use]
pub fn format_elapsed(value: Duration) -> String {
    let secs = value.num_seconds().max(0);
    if secs < 60 {
        format!("{secs}s")
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_seconds_and_minutes() {
        assert_eq!(format_elapsed(Duration::seconds(45)), "45s");
        assert_eq!(format_elapsed(Duration::seconds(187)), "3m 07s");
        assert_eq!(format_elapsed(Duration::seconds(-3)), "0s");
    }
}
