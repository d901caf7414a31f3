/// Longest city name accepted, in characters after trimming.
pub const MAX_CITY_LEN: usize = 100;

/// Accepts any non-blank city name up to [`MAX_CITY_LEN`] characters.
///
/// Only emptiness and length are checked; digits and punctuation pass.
pub fn is_valid_city(input: Option<&str>) -> bool {
    let Some(city) = input else {
        return false;
    };

    let len = city.trim().chars().count();
    (1..=MAX_CITY_LEN).contains(&len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_and_blank() {
        assert!(!is_valid_city(None));
        assert!(!is_valid_city(Some("")));
        assert!(!is_valid_city(Some("   \t ")));
    }

    #[test]
    fn accepts_ordinary_names() {
        assert!(is_valid_city(Some("Paris")));
        assert!(is_valid_city(Some("  New York  ")));
        assert!(is_valid_city(Some("St. John's")));
        assert!(is_valid_city(Some("12345")));
    }

    #[test]
    fn length_ceiling_applies_after_trim() {
        let exact = "a".repeat(MAX_CITY_LEN);
        assert!(is_valid_city(Some(exact.as_str())));
        assert!(is_valid_city(Some(format!("   {exact}   ").as_str())));
        assert!(!is_valid_city(Some("a".repeat(MAX_CITY_LEN + 1).as_str())));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(is_valid_city(Some("é".repeat(MAX_CITY_LEN).as_str())));
    }
}
