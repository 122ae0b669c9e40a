/// Recognized campaign parameter names, in canonical order.
pub const CAMPAIGN_KEYS: [&str; 5] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
];

/// Exact, case-sensitive membership test against [`CAMPAIGN_KEYS`].
pub fn is_campaign_key(key: &str) -> bool {
    matches!(
        key,
        "utm_source" | "utm_medium" | "utm_campaign" | "utm_term" | "utm_content"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_key_is_recognized() {
        for key in CAMPAIGN_KEYS {
            assert!(is_campaign_key(key), "{key} should be a campaign key");
        }
    }

    #[test]
    fn is_campaign_key_cases() {
        assert!(is_campaign_key("utm_source"));
        assert!(is_campaign_key("utm_content"));
        assert!(!is_campaign_key("UTM_SOURCE")); // case sensitive
        assert!(!is_campaign_key("utm_id"));
        assert!(!is_campaign_key("fbclid"));
        assert!(!is_campaign_key(""));
    }
}
