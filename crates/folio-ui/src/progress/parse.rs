//! Lenient numeric attribute parsing
//!
//! Attribute values are read the way the page markup is authored: a leading
//! number followed by anything (`"73%"`, `"54px"`). Text with no leading
//! number yields NaN, which then flows through the ring arithmetic unchanged.

/// Parse a leading base-10 integer, e.g. `"73%"` -> 73
pub fn parse_percent(text: &str) -> f64 {
    let text = text.trim_start();
    let (sign, digits) = split_sign(text);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return f64::NAN;
    }
    digits[..end]
        .parse::<f64>()
        .map(|v| sign * v)
        .unwrap_or(f64::NAN)
}

/// Parse a leading decimal number, e.g. `"54.5"` -> 54.5
pub fn parse_length(text: &str) -> f64 {
    let text = text.trim_start();
    let (sign, rest) = split_sign(text);
    let bytes = rest.as_bytes();

    let mut end = 0;
    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
            mantissa_digits += 1;
        }
        end = frac;
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when digits follow it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let digits_start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > digits_start {
            end = exp;
        }
    }

    rest[..end]
        .parse::<f64>()
        .map(|v| sign * v)
        .unwrap_or(f64::NAN)
}

fn split_sign(text: &str) -> (f64, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent() {
        assert!((parse_percent("73") - 73.0).abs() < 0.001);
        assert!((parse_percent(" 85%") - 85.0).abs() < 0.001);
        assert!((parse_percent("-4") + 4.0).abs() < 0.001);
        assert!((parse_percent("90.9") - 90.0).abs() < 0.001);
    }

    #[test]
    fn test_parse_percent_nan() {
        assert!(parse_percent("").is_nan());
        assert!(parse_percent("abc").is_nan());
        assert!(parse_percent("%50").is_nan());
        assert!(parse_percent("-").is_nan());
    }

    #[test]
    fn test_parse_length() {
        assert!((parse_length("54") - 54.0).abs() < 0.001);
        assert!((parse_length("54.5px") - 54.5).abs() < 0.001);
        assert!((parse_length(".5") - 0.5).abs() < 0.001);
        assert!((parse_length("1e2") - 100.0).abs() < 0.001);
        assert!((parse_length("3e") - 3.0).abs() < 0.001);
        assert!((parse_length("7.") - 7.0).abs() < 0.001);
    }

    #[test]
    fn test_parse_length_nan() {
        assert!(parse_length("r").is_nan());
        assert!(parse_length(".").is_nan());
        assert!(parse_length("").is_nan());
    }
}
