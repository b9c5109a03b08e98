const UNITS: [&str; 6] = ["b", "kb", "mb", "gb", "tb", "pb"];

/// Renders a byte count in the fixed-width human form used by the index
/// table. Decimal units (steps of 1000, not 1024). Plain bytes occupy a
/// six-wide integer column; scaled values a five-wide column with one
/// decimal, where an exact `.0` is dropped and the integer re-padded so
/// the overall width never changes. `None` renders as the empty string.
pub fn format_bytes(bytes: Option<i64>) -> String {
    let Some(bytes) = bytes else {
        return String::new();
    };

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit + 1 < UNITS.len() {
        value /= 1000.0;
        unit += 1;
    }

    if unit == 0 {
        return format!("{bytes:>6}b");
    }

    let scaled = format!("{value:>5.1}");
    match scaled.strip_suffix(".0") {
        Some(whole) => format!("{:>5}{}", whole.trim_start(), UNITS[unit]),
        None => format!("{}{}", scaled, UNITS[unit]),
    }
}

#[cfg(test)]
#[path = "../tests/snapshot/bytes_tests.rs"]
mod tests;
