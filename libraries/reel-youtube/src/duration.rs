//! ISO-8601 duration normalization.
//!
//! The Data API reports durations like `PT1H2M10S`; playlists store the
//! zero-padded display form `HH:MM:SS`.

/// Normalize an ISO-8601 duration (`PT#H#M#S`) to `HH:MM:SS`.
///
/// Every component is optional and zero-padded to two digits. Anything
/// unparseable, including the empty string, collapses to `"00:00:00"`
/// so a missing duration never blocks an append.
pub fn normalize(duration: &str) -> String {
    parse(duration).unwrap_or_else(|| "00:00:00".to_string())
}

fn parse(duration: &str) -> Option<String> {
    let rest = duration.strip_prefix("PT")?;

    let mut hours: u64 = 0;
    let mut minutes: u64 = 0;
    let mut seconds: u64 = 0;
    let mut value = String::new();

    for c in rest.chars() {
        if c.is_ascii_digit() {
            value.push(c);
            continue;
        }
        let parsed = value.parse::<u64>().ok()?;
        match c {
            'H' => hours = parsed,
            'M' => minutes = parsed,
            'S' => seconds = parsed,
            _ => return None,
        }
        value.clear();
    }

    // Trailing digits without a unit designator
    if !value.is_empty() {
        return None;
    }

    Some(format!("{hours:02}:{minutes:02}:{seconds:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_duration() {
        assert_eq!(normalize("PT1H2M10S"), "01:02:10");
    }

    #[test]
    fn seconds_only() {
        assert_eq!(normalize("PT45S"), "00:00:45");
    }

    #[test]
    fn minutes_only() {
        assert_eq!(normalize("PT5M"), "00:05:00");
    }

    #[test]
    fn hours_and_seconds_without_minutes() {
        assert_eq!(normalize("PT2H7S"), "02:00:07");
    }

    #[test]
    fn zero_duration() {
        assert_eq!(normalize("PT0S"), "00:00:00");
    }

    #[test]
    fn empty_and_garbage_collapse_to_zero() {
        assert_eq!(normalize(""), "00:00:00");
        assert_eq!(normalize("PT"), "00:00:00");
        assert_eq!(normalize("3 minutes"), "00:00:00");
        assert_eq!(normalize("PT1X"), "00:00:00");
        assert_eq!(normalize("PT90"), "00:00:00");
    }

    #[test]
    fn long_form_stays_zero_padded() {
        assert_eq!(normalize("PT11H59M59S"), "11:59:59");
    }
}
