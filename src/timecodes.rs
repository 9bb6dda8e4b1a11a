/*!
 * Timecode parsing and formatting for ASS scripts.
 *
 * ASS timecodes use the form `H:MM:SS.CC` (hours, minutes, seconds and
 * hundredths). Parsing is lenient about the fractional part (absent means
 * zero) but strict about the component count: anything other than three
 * colon-separated components fails.
 */

/// Parse an ASS timecode (`H:MM:SS.CC`) into floating-point seconds.
///
/// Returns `f64::NAN` as the fail sentinel when the component count is wrong
/// or any component is non-numeric. Callers must check with `.is_nan()` and
/// drop the surrounding record rather than storing the sentinel.
pub fn parse_timecode(timecode: &str) -> f64 {
    parse_timecode_checked(timecode).unwrap_or(f64::NAN)
}

fn parse_timecode_checked(timecode: &str) -> Option<f64> {
    let parts: Vec<&str> = timecode.trim().split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let hours: u32 = parts[0].trim().parse().ok()?;
    let minutes: u32 = parts[1].trim().parse().ok()?;

    // Third component is seconds with an optional hundredths fraction
    let mut seconds_parts = parts[2].trim().split('.');
    let seconds: u32 = seconds_parts.next()?.parse().ok()?;
    let centiseconds: u32 = match seconds_parts.next() {
        Some(fraction) if !fraction.is_empty() => fraction.parse().ok()?,
        _ => 0,
    };

    Some(
        f64::from(hours) * 3600.0
            + f64::from(minutes) * 60.0
            + f64::from(seconds)
            + f64::from(centiseconds) / 100.0,
    )
}

/// Format a position in seconds back to the `H:MM:SS.CC` form
pub fn format_timecode(seconds: f64) -> String {
    let total_centis = (seconds.max(0.0) * 100.0).round() as u64;
    let hours = total_centis / 360_000;
    let minutes = (total_centis % 360_000) / 6_000;
    let secs = (total_centis % 6_000) / 100;
    let centis = total_centis % 100;

    format!("{}:{:02}:{:02}.{:02}", hours, minutes, secs, centis)
}
