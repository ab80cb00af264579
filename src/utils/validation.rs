use crate::utils::error::{ReportError, Result};

pub fn validate_field_count(
    line_number: usize,
    line: &str,
    found: usize,
    expected: usize,
) -> Result<()> {
    if found != expected {
        return Err(ReportError::malformed(
            line_number,
            line,
            format!("expected {} comma-separated fields, found {}", expected, found),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_field(
    line_number: usize,
    line: &str,
    field_name: &str,
    value: &str,
) -> Result<()> {
    if value.is_empty() {
        return Err(ReportError::malformed(
            line_number,
            line,
            format!("{} cannot be empty", field_name),
        ));
    }
    Ok(())
}

/// Parses `<digits><suffix>`, e.g. `3445s`.
pub fn parse_suffixed_integer(
    line_number: usize,
    line: &str,
    field_name: &str,
    value: &str,
    suffix: char,
) -> Result<u64> {
    let digits = value.strip_suffix(suffix).ok_or_else(|| {
        ReportError::malformed(
            line_number,
            line,
            format!("{} {:?} is missing the '{}' unit suffix", field_name, value, suffix),
        )
    })?;

    // u64::from_str accepts a leading '+'
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReportError::malformed(
            line_number,
            line,
            format!("{} {:?} is not a whole number of seconds", field_name, value),
        ));
    }

    digits.parse::<u64>().map_err(|e| {
        ReportError::malformed(
            line_number,
            line,
            format!("{} {:?} is out of range: {}", field_name, value, e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_field_count() {
        assert!(validate_field_count(1, "a,b", 2, 2).is_ok());
        assert!(validate_field_count(1, "a,b", 2, 6).is_err());
    }

    #[test]
    fn test_validate_non_empty_field() {
        assert!(validate_non_empty_field(1, "x", "geozone", "us_east").is_ok());
        assert!(validate_non_empty_field(1, "x", "geozone", "").is_err());
    }

    #[test]
    fn test_parse_suffixed_integer() {
        assert_eq!(parse_suffixed_integer(1, "", "d", "3445s", 's').unwrap(), 3445);
        assert_eq!(parse_suffixed_integer(1, "", "d", "0s", 's').unwrap(), 0);
        assert!(parse_suffixed_integer(1, "", "d", "3445", 's').is_err());
        assert!(parse_suffixed_integer(1, "", "d", "s", 's').is_err());
        assert!(parse_suffixed_integer(1, "", "d", "-5s", 's').is_err());
        assert!(parse_suffixed_integer(1, "", "d", "+5s", 's').is_err());
        assert!(parse_suffixed_integer(1, "", "d", "12a4s", 's').is_err());
        assert!(parse_suffixed_integer(1, "", "d", "99999999999999999999999s", 's').is_err());
    }
}
