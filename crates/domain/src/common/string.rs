//! Case-insensitive string comparison used by collection searches.

/// Returns true if `haystack` contains `needle`, ignoring case.
///
/// An empty needle matches everything.
///
/// # Examples
///
/// ```
/// use menagerie_domain::common::contains_ignore_case;
///
/// assert!(contains_ignore_case("Smaug the Golden", "GOLD"));
/// assert!(!contains_ignore_case("Smaug", "draco"));
/// ```
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns true if both strings are equal, ignoring case.
///
/// # Examples
///
/// ```
/// use menagerie_domain::common::eq_ignore_case;
///
/// assert!(eq_ignore_case("Draco", "dRACO"));
/// assert!(!eq_ignore_case("Draco", "Drac"));
/// ```
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Phoenix", "nix"));
        assert!(contains_ignore_case("Phoenix", "PHOE"));
        assert!(contains_ignore_case("Phoenix", ""));
        assert!(!contains_ignore_case("Phoenix", "dragon"));
    }

    #[test]
    fn test_contains_ignore_case_non_ascii() {
        assert!(contains_ignore_case("Жар-Птица", "птица"));
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("draco", "DRACO"));
        assert!(eq_ignore_case("", ""));
        assert!(!eq_ignore_case("draco", "draco "));
    }
}
