//! Business-rule checks for gift-code and milestone payloads.
//!
//! All functions are pure: they evaluate every applicable rule (no
//! short-circuiting, so the caller sees every violated field at once) and
//! return the violations as a list. Checks that need the store — duplicate
//! codes, duplicate thresholds — live in the services.

use crate::error::FieldError;
use crate::models::{
    CreateGiftCodeRequest, CreateMilestoneRequest, RewardLine, UpdateGiftCodeRequest,
    UpdateMilestoneRequest,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

const CODE_MIN_LEN: usize = 6;
const CODE_MAX_LEN: usize = 20;

fn code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap())
}

/// Canonical stored form of a gift code. Idempotent.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Accepts RFC 3339 plus the naive forms the admin forms submit
/// (`datetime-local` input and the classic space-separated format); naive
/// timestamps are read as UTC.
pub fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    None
}

pub fn has_reward(gold: i32, gem: i32, ruby: i32, has_items: bool) -> bool {
    gold > 0 || gem > 0 || ruby > 0 || has_items
}

fn check_code(code: &str, empty_message: &str, errors: &mut Vec<FieldError>) {
    let trimmed = code.trim();
    // Length is counted in characters, not bytes, so a multi-byte char still
    // trips the length gate before the pattern check.
    let char_len = trimmed.chars().count();
    if trimmed.is_empty() {
        errors.push(FieldError::new("code", empty_message));
    } else if char_len < CODE_MIN_LEN || char_len > CODE_MAX_LEN {
        errors.push(FieldError::new(
            "code",
            "Code must be between 6 and 20 characters",
        ));
    } else if !code_pattern().is_match(trimmed) {
        errors.push(FieldError::new("code", "Code must be alphanumeric only"));
    }
}

fn check_expiry(raw: &str, now: DateTime<Utc>, errors: &mut Vec<FieldError>) {
    match parse_expiry(raw) {
        None => errors.push(FieldError::new("expires_at", "Invalid expiry date format")),
        // Strictly in the future: equal-to-now is already expired.
        Some(ts) if ts <= now => errors.push(FieldError::new(
            "expires_at",
            "Expiry date must be in the future",
        )),
        Some(_) => {}
    }
}

fn check_reward_lines<T: RewardLine>(
    field: &'static str,
    lines: &[T],
    errors: &mut Vec<FieldError>,
) {
    for line in lines {
        // Sentinel lines (unset item selects) get dropped by the codec.
        if line.item_id() <= 0 {
            continue;
        }
        if line.quantity() < 1 {
            errors.push(FieldError::new(
                field,
                format!("Item #{}: quantity must be at least 1", line.item_id()),
            ));
        }
        for (option_id, _param) in line.options() {
            if option_id < 0 {
                errors.push(FieldError::new(
                    field,
                    format!("Item #{}: option id must be non-negative", line.item_id()),
                ));
            }
        }
    }
}

pub fn validate_gift_code(req: &CreateGiftCodeRequest, now: DateTime<Utc>) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_code(&req.code, "Code is required", &mut errors);

    if req.code_type != 0 && req.code_type != 1 {
        errors.push(FieldError::new(
            "type",
            "Type must be 0 (single-use) or 1 (multi-use)",
        ));
    }

    let items_present = req
        .items
        .as_deref()
        .is_some_and(|lines| lines.iter().any(|l| l.item_id() > 0));
    if !has_reward(req.gold, req.gem, req.ruby, items_present) {
        errors.push(FieldError::new(
            "rewards",
            "At least one reward (gold, gem, ruby, or items) must be greater than 0",
        ));
    }

    if req.gold < 0 {
        errors.push(FieldError::new("gold", "Gold must be non-negative"));
    }
    if req.gem < 0 {
        errors.push(FieldError::new("gem", "Gem must be non-negative"));
    }
    if req.ruby < 0 {
        errors.push(FieldError::new("ruby", "Ruby must be non-negative"));
    }

    if req.status != 0 && req.status != 1 {
        errors.push(FieldError::new(
            "status",
            "Status must be 0 (unused) or 1 (used)",
        ));
    }

    if let Some(raw) = &req.expires_at {
        check_expiry(raw, now, &mut errors);
    }

    if let Some(lines) = &req.items {
        check_reward_lines("items", lines, &mut errors);
    }

    errors
}

/// Field-local rules for a partial update; each rule runs only when its field
/// is supplied. Reward presence is cross-field and needs the stored row, so
/// it is checked separately via [`validate_merged_rewards`].
pub fn validate_gift_code_update(req: &UpdateGiftCodeRequest, now: DateTime<Utc>) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Some(code) = &req.code {
        check_code(code, "Code cannot be empty", &mut errors);
    }

    if let Some(code_type) = req.code_type
        && code_type != 0
        && code_type != 1
    {
        errors.push(FieldError::new(
            "type",
            "Type must be 0 (single-use) or 1 (multi-use)",
        ));
    }

    if let Some(gold) = req.gold
        && gold < 0
    {
        errors.push(FieldError::new("gold", "Gold must be non-negative"));
    }
    if let Some(gem) = req.gem
        && gem < 0
    {
        errors.push(FieldError::new("gem", "Gem must be non-negative"));
    }
    if let Some(ruby) = req.ruby
        && ruby < 0
    {
        errors.push(FieldError::new("ruby", "Ruby must be non-negative"));
    }

    if let Some(status) = req.status
        && status != 0
        && status != 1
    {
        errors.push(FieldError::new(
            "status",
            "Status must be 0 (unused) or 1 (used)",
        ));
    }

    if let Some(Some(raw)) = &req.expires_at {
        check_expiry(raw, now, &mut errors);
    }

    if let Some(Some(lines)) = &req.items {
        check_reward_lines("items", lines, &mut errors);
    }

    errors
}

/// Reward presence against the merged view of a partial update: existing
/// values stand in for fields the patch leaves out, so an update can never
/// slip a code into a zero-reward state just because the payload was partial.
pub fn validate_merged_rewards(gold: i32, gem: i32, ruby: i32, has_items: bool) -> Vec<FieldError> {
    if has_reward(gold, gem, ruby, has_items) {
        Vec::new()
    } else {
        vec![FieldError::new(
            "rewards",
            "At least one reward (gold, gem, ruby, or items) must be greater than 0",
        )]
    }
}

pub fn validate_milestone(req: &CreateMilestoneRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match req.required {
        Some(required) if required > 0 => {}
        _ => errors.push(FieldError::new(
            "required",
            "Required amount must be greater than 0",
        )),
    }

    match &req.rewards {
        Some(lines) if lines.iter().any(|l| l.item_id() > 0) => {
            check_reward_lines("rewards", lines, &mut errors);
        }
        _ => errors.push(FieldError::new(
            "rewards",
            "At least one reward item must be selected",
        )),
    }

    errors
}

pub fn validate_milestone_update(req: &UpdateMilestoneRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Some(required) = req.required
        && required <= 0
    {
        errors.push(FieldError::new(
            "required",
            "Required amount must be greater than 0",
        ));
    }

    // Explicit null clears the rewards column; a supplied list must still
    // carry at least one real line.
    if let Some(Some(lines)) = &req.rewards {
        if !lines.iter().any(|l| l.item_id() > 0) {
            errors.push(FieldError::new(
                "rewards",
                "At least one reward item must be selected",
            ));
        }
        check_reward_lines("rewards", lines, &mut errors);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GiftItem, GiftItemOption, RewardItem};
    use chrono::Duration;

    fn base_create() -> CreateGiftCodeRequest {
        CreateGiftCodeRequest {
            code: "NEWBIE2026".to_string(),
            code_type: 0,
            gold: 1000,
            gem: 0,
            ruby: 0,
            items: None,
            status: 0,
            expires_at: None,
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_code("  abc123zz ");
        assert_eq!(once, "ABC123ZZ");
        assert_eq!(normalize_code(&once), once);
    }

    #[test]
    fn valid_create_passes() {
        assert!(validate_gift_code(&base_create(), Utc::now()).is_empty());
    }

    #[test]
    fn code_length_boundaries() {
        for (code, ok) in [
            ("ABC12", false),
            ("ABC123", true),
            ("A2345678901234567890", true),
            ("A23456789012345678901", false),
        ] {
            let mut req = base_create();
            req.code = code.to_string();
            let errors = validate_gift_code(&req, Utc::now());
            assert_eq!(errors.is_empty(), ok, "code {code:?}");
        }
    }

    #[test]
    fn code_length_counts_characters_not_bytes() {
        // Five characters, six bytes: must fail on length, not fall through
        // to the pattern rule.
        let mut req = base_create();
        req.code = "ABCД1".to_string();
        let errors = validate_gift_code(&req, Utc::now());
        assert_eq!(
            errors[0].message,
            "Code must be between 6 and 20 characters"
        );
    }

    #[test]
    fn code_rejects_symbols_and_whitespace() {
        for code in ["ABC-123", "ABC 123", "ABC_123", "ABCÐ12"] {
            let mut req = base_create();
            req.code = code.to_string();
            assert_eq!(fields(&validate_gift_code(&req, Utc::now())), ["code"]);
        }
    }

    #[test]
    fn missing_code_is_required() {
        let mut req = base_create();
        req.code = "   ".to_string();
        let errors = validate_gift_code(&req, Utc::now());
        assert_eq!(errors[0].message, "Code is required");
    }

    #[test]
    fn type_must_be_zero_or_one() {
        let mut req = base_create();
        req.code_type = 2;
        assert_eq!(fields(&validate_gift_code(&req, Utc::now())), ["type"]);
    }

    #[test]
    fn zero_reward_bundle_is_rejected() {
        let mut req = base_create();
        req.gold = 0;
        let errors = validate_gift_code(&req, Utc::now());
        assert_eq!(fields(&errors), ["rewards"]);
    }

    #[test]
    fn any_single_positive_reward_is_accepted() {
        for (gold, gem, ruby) in [(1, 0, 0), (0, 1, 0), (0, 0, 1)] {
            let mut req = base_create();
            req.gold = gold;
            req.gem = gem;
            req.ruby = ruby;
            assert!(validate_gift_code(&req, Utc::now()).is_empty());
        }
    }

    #[test]
    fn item_list_alone_satisfies_reward_presence() {
        let mut req = base_create();
        req.gold = 0;
        req.items = Some(vec![GiftItem {
            id: 14,
            quantity: 1,
            options: vec![],
        }]);
        assert!(validate_gift_code(&req, Utc::now()).is_empty());
    }

    #[test]
    fn sentinel_only_item_list_does_not_count_as_reward() {
        let mut req = base_create();
        req.gold = 0;
        req.items = Some(vec![GiftItem {
            id: 0,
            quantity: 1,
            options: vec![],
        }]);
        assert_eq!(fields(&validate_gift_code(&req, Utc::now())), ["rewards"]);
    }

    #[test]
    fn negative_currencies_each_reported() {
        let mut req = base_create();
        req.gold = -1;
        req.gem = -2;
        req.ruby = -3;
        let errors = validate_gift_code(&req, Utc::now());
        // No short-circuit: every violated field shows up at once. Negative
        // currencies also zero out reward presence, so that fires too.
        assert_eq!(fields(&errors), ["rewards", "gold", "gem", "ruby"]);
    }

    #[test]
    fn expiry_equal_to_now_is_rejected() {
        let now = Utc::now();
        let mut req = base_create();
        req.expires_at = Some(now.to_rfc3339());
        assert_eq!(fields(&validate_gift_code(&req, now)), ["expires_at"]);
    }

    #[test]
    fn expiry_one_millisecond_ahead_is_accepted() {
        let now = Utc::now();
        let mut req = base_create();
        req.expires_at = Some((now + Duration::milliseconds(1)).to_rfc3339());
        assert!(validate_gift_code(&req, now).is_empty());
    }

    #[test]
    fn unparseable_expiry_is_a_format_error() {
        let mut req = base_create();
        req.expires_at = Some("next tuesday".to_string());
        let errors = validate_gift_code(&req, Utc::now());
        assert_eq!(errors[0].message, "Invalid expiry date format");
    }

    #[test]
    fn parse_expiry_accepts_form_formats() {
        assert!(parse_expiry("2030-01-02T03:04").is_some());
        assert!(parse_expiry("2030-01-02T03:04:05").is_some());
        assert!(parse_expiry("2030-01-02 03:04:05").is_some());
        assert!(parse_expiry("2030-01-02T03:04:05+07:00").is_some());
        assert!(parse_expiry("02/01/2030").is_none());
    }

    #[test]
    fn item_line_quantity_and_option_rules() {
        let mut req = base_create();
        req.items = Some(vec![GiftItem {
            id: 14,
            quantity: 0,
            options: vec![GiftItemOption { id: -1, param: 5 }],
        }]);
        let errors = validate_gift_code(&req, Utc::now());
        assert_eq!(fields(&errors), ["items", "items"]);
    }

    #[test]
    fn update_validates_only_supplied_fields() {
        let req = UpdateGiftCodeRequest {
            gold: Some(500),
            ..Default::default()
        };
        assert!(validate_gift_code_update(&req, Utc::now()).is_empty());

        let req = UpdateGiftCodeRequest {
            code: Some("x".to_string()),
            gem: Some(-1),
            ..Default::default()
        };
        let errors = validate_gift_code_update(&req, Utc::now());
        assert_eq!(fields(&errors), ["code", "gem"]);
    }

    #[test]
    fn update_null_expiry_clears_without_error() {
        let req = UpdateGiftCodeRequest {
            expires_at: Some(None),
            ..Default::default()
        };
        assert!(validate_gift_code_update(&req, Utc::now()).is_empty());
    }

    #[test]
    fn merged_rewards_catch_zeroing_update() {
        // Patch zeroes the only positive currency while the stored items
        // column is empty: the merged view must reject it.
        assert_eq!(fields(&validate_merged_rewards(0, 0, 0, false)), ["rewards"]);
        assert!(validate_merged_rewards(0, 0, 0, true).is_empty());
        assert!(validate_merged_rewards(0, 5, 0, false).is_empty());
    }

    fn milestone_reward() -> Vec<RewardItem> {
        vec![RewardItem {
            item_id: 992,
            item_quantity: 1,
            item_options: vec![],
        }]
    }

    #[test]
    fn milestone_requires_positive_threshold() {
        let req = CreateMilestoneRequest {
            required: Some(0),
            descriptor: None,
            rewards: Some(milestone_reward()),
        };
        assert_eq!(fields(&validate_milestone(&req)), ["required"]);

        let req = CreateMilestoneRequest {
            required: None,
            descriptor: None,
            rewards: Some(milestone_reward()),
        };
        assert_eq!(fields(&validate_milestone(&req)), ["required"]);
    }

    #[test]
    fn milestone_requires_at_least_one_reward_line() {
        let req = CreateMilestoneRequest {
            required: Some(100_000),
            descriptor: None,
            rewards: Some(vec![]),
        };
        assert_eq!(fields(&validate_milestone(&req)), ["rewards"]);

        let req = CreateMilestoneRequest {
            required: Some(100_000),
            descriptor: None,
            rewards: None,
        };
        assert_eq!(fields(&validate_milestone(&req)), ["rewards"]);
    }

    #[test]
    fn milestone_update_allows_clearing_rewards() {
        let req = UpdateMilestoneRequest {
            rewards: Some(None),
            ..Default::default()
        };
        assert!(validate_milestone_update(&req).is_empty());
    }

    #[test]
    fn milestone_update_rejects_empty_reward_list() {
        let req = UpdateMilestoneRequest {
            rewards: Some(Some(vec![])),
            ..Default::default()
        };
        assert_eq!(fields(&validate_milestone_update(&req)), ["rewards"]);
    }
}
