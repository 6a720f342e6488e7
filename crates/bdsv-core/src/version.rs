//! Version segment validation and the prefix-match comparator.

/// True iff `s` is non-empty and contains only digits and dots.
pub fn is_valid_version(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b == b'.' || b.is_ascii_digit())
}

/// Component-count-then-numeric comparison used to pick among prefix
/// matches.
///
/// Not a strict less-than: when both sides split into the same number of
/// numerically equal components the result is `true`, so during a scan a
/// later tied candidate replaces an earlier one. The resolver depends on
/// that (last-scanned tied key wins); do not tighten the equal case.
///
/// Components that fail to parse as integers count as 0. The only such
/// component in practice is the resolver's initial `""` best key, which
/// splits into one empty component.
pub fn version_less_than(x: &str, y: &str) -> bool {
    let a: Vec<&str> = x.split('.').collect();
    let b: Vec<&str> = y.split('.').collect();
    if a.len() < b.len() {
        return true;
    }
    if a.len() > b.len() {
        return false;
    }
    for (xc, yc) in a.iter().zip(b.iter()) {
        let xv = xc.parse::<u64>().unwrap_or(0);
        let yv = yc.parse::<u64>().unwrap_or(0);
        if xv < yv {
            return true;
        }
        if xv > yv {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_versions() {
        assert!(is_valid_version("1"));
        assert!(is_valid_version("1.2.10"));
        assert!(is_valid_version("1.2."));
        assert!(is_valid_version("..."));
        assert!(is_valid_version("007"));
    }

    #[test]
    fn invalid_versions() {
        assert!(!is_valid_version(""));
        assert!(!is_valid_version("1.x"));
        assert!(!is_valid_version("1.2-rc1"));
        assert!(!is_valid_version("v1.2"));
        assert!(!is_valid_version("1.2 "));
    }

    #[test]
    fn fewer_components_is_less() {
        assert!(version_less_than("1.2", "1.2.3"));
        assert!(!version_less_than("1.2.3", "1.2"));
    }

    #[test]
    fn numeric_comparison_at_first_difference() {
        assert!(version_less_than("1.2.3", "1.2.4"));
        assert!(!version_less_than("1.2.4", "1.2.3"));
        assert!(version_less_than("1.2.9", "1.10.0"));
        assert!(!version_less_than("1.10.0", "1.2.9"));
    }

    #[test]
    fn equal_versions_compare_less() {
        // The asymmetric quirk: an equal value is "less than" itself.
        assert!(version_less_than("1.2.3", "1.2.3"));
        assert!(version_less_than("0", "0"));
    }

    #[test]
    fn leading_zeros_compare_numerically() {
        assert!(version_less_than("1.02.3", "1.3.0"));
        // "07" and "7" are numerically equal, so the equal case applies.
        assert!(version_less_than("1.07", "1.7"));
        assert!(version_less_than("1.7", "1.07"));
    }

    #[test]
    fn empty_best_key_loses_to_real_keys() {
        // "" splits into one empty component coerced to 0: longer keys
        // win on component count, single-component keys win on the
        // numeric compare (or the equal case for "0").
        assert!(version_less_than("", "5"));
        assert!(version_less_than("", "0"));
        assert!(version_less_than("", "1.2.3"));
    }
}
