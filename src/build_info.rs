//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_populated() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_commit_is_short_hash_or_unknown() {
        let is_hash =
            BUILD_COMMIT.len() >= 7 && BUILD_COMMIT.chars().all(|c| c.is_ascii_hexdigit());
        assert!(BUILD_COMMIT == "unknown" || is_hash);
    }

    #[test]
    fn test_build_date_is_iso_day() {
        // YYYY-MM-DD
        assert_eq!(BUILD_DATE.len(), 10);
        assert_eq!(BUILD_DATE.as_bytes()[4], b'-');
        assert_eq!(BUILD_DATE.as_bytes()[7], b'-');
    }
}
