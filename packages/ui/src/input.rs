//! Form-input parsing helpers.

/// Parse a year text input into an explicit optional bound. Blank input means
/// "no bound", which stays distinct from an actual zero; anything else must be
/// a whole number or the input is rejected with a message.
pub fn parse_year_bound(text: &str) -> Result<Option<i32>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<i32>()
        .map(Some)
        .map_err(|_| format!("{text:?} is not a valid year"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_means_no_bound() {
        assert_eq!(parse_year_bound(""), Ok(None));
        assert_eq!(parse_year_bound("   "), Ok(None));
    }

    #[test]
    fn zero_is_a_real_bound() {
        assert_eq!(parse_year_bound("0"), Ok(Some(0)));
    }

    #[test]
    fn numbers_parse_with_surrounding_whitespace() {
        assert_eq!(parse_year_bound(" 1965 "), Ok(Some(1965)));
        assert_eq!(parse_year_bound("-50"), Ok(Some(-50)));
    }

    #[test]
    fn non_numeric_input_is_rejected_not_coerced() {
        assert!(parse_year_bound("196x").is_err());
        assert!(parse_year_bound("next year").is_err());
    }
}
