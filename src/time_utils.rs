use log::debug;

// @module: Timestamp parsing and rounding

/// Parse a subtitle timestamp into seconds.
///
/// Accepts `HH:MM:SS,mmm` / `HH:MM:SS.mmm` (comma and dot are equivalent
/// sub-second separators), `MM:SS`, or a bare number of seconds. Malformed
/// input degrades to `0.0` rather than failing; callers should treat a zero
/// from a non-zero-looking source as a data-quality signal, not a true
/// timestamp.
pub fn parse_timestamp(input: &str) -> f64 {
    let normalized = input.trim().replace(',', ".");

    let component = |part: &str| -> f64 {
        part.trim().parse::<f64>().unwrap_or_else(|_| {
            debug!("Unparsable timestamp component '{}' in '{}', using 0", part, input);
            0.0
        })
    };

    let parts: Vec<&str> = normalized.split(':').collect();
    match parts.as_slice() {
        [hours, minutes, seconds] => {
            component(hours) * 3600.0 + component(minutes) * 60.0 + component(seconds)
        }
        [minutes, seconds] => component(minutes) * 60.0 + component(seconds),
        _ => component(&normalized),
    }
}

/// Round a seconds value to millisecond precision.
///
/// Applied on every parse path so that the live loader and the batch
/// converter emit identical values for the same source.
pub fn round_to_millis(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}
