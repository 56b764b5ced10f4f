pub mod account_service;
pub mod catalog_service;
pub mod gift_code_service;
pub mod milestone_service;
pub mod shop_service;

pub use account_service::*;
pub use catalog_service::*;
pub use gift_code_service::*;
pub use milestone_service::*;
pub use shop_service::*;

/// Numeric filter param: empty or "all" means no filter; garbage and
/// out-of-range values are ignored rather than wrapped.
pub(crate) fn numeric_filter(raw: Option<&str>) -> Option<i32> {
    let raw = raw?.trim();
    if raw.is_empty() || raw == "all" {
        return None;
    }
    raw.parse().ok()
}

/// Boolean filter param with the same "all"/empty passthrough.
pub(crate) fn bool_filter(raw: Option<&str>) -> Option<bool> {
    match raw?.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Comma-separated id list; non-numeric segments are dropped.
pub(crate) fn parse_id_list(raw: &str) -> Vec<i32> {
    raw.split(',')
        .filter_map(|s| s.trim().parse::<i32>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_filter_passthrough_values() {
        assert_eq!(numeric_filter(None), None);
        assert_eq!(numeric_filter(Some("")), None);
        assert_eq!(numeric_filter(Some("all")), None);
        assert_eq!(numeric_filter(Some("nonsense")), None);
        assert_eq!(numeric_filter(Some("1")), Some(1));
        assert_eq!(numeric_filter(Some(" 0 ")), Some(0));
    }

    #[test]
    fn numeric_filter_rejects_out_of_range_values() {
        // Must not wrap to 0 and match unintended rows.
        assert_eq!(numeric_filter(Some("4294967296")), None);
        assert_eq!(numeric_filter(Some("-4294967296")), None);
    }

    #[test]
    fn bool_filter_values() {
        assert_eq!(bool_filter(Some("true")), Some(true));
        assert_eq!(bool_filter(Some("false")), Some(false));
        assert_eq!(bool_filter(Some("all")), None);
        assert_eq!(bool_filter(None), None);
    }

    #[test]
    fn id_list_drops_garbage() {
        assert_eq!(parse_id_list("1,2, 3,x,"), vec![1, 2, 3]);
        assert!(parse_id_list("").is_empty());
    }
}
