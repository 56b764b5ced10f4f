//! Converts between the form representation of a reward bundle (a list of
//! item lines, each with an options sub-list) and the stored representation
//! (one JSON text column on the parent row).

use crate::models::RewardLine;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serializes reward lines for storage. Lines whose item reference is the
/// sentinel "unset" value (0, or negative) are dropped; when nothing is left
/// the column stores SQL NULL, never the text `"[]"`.
pub fn encode<T>(lines: &[T]) -> serde_json::Result<Option<String>>
where
    T: RewardLine + Serialize,
{
    let kept: Vec<&T> = lines.iter().filter(|l| l.item_id() > 0).collect();
    if kept.is_empty() {
        return Ok(None);
    }
    serde_json::to_string(&kept).map(Some)
}

/// Parses a stored reward column. `None`, blank, or malformed text all decode
/// to an empty list: display code falls back to showing the raw string, so a
/// corrupt row must never turn into an error here.
pub fn decode<T>(raw: Option<&str>) -> Vec<T>
where
    T: DeserializeOwned,
{
    let Some(text) = raw else {
        return Vec::new();
    };
    if text.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GiftItem, GiftItemOption, RewardItem, RewardItemOption};

    fn sample_gift_items() -> Vec<GiftItem> {
        vec![
            GiftItem {
                id: 14,
                quantity: 2,
                options: vec![
                    GiftItemOption { id: 50, param: 120 },
                    GiftItemOption { id: 7, param: -5 },
                ],
            },
            GiftItem {
                id: 561,
                quantity: 1,
                options: vec![],
            },
        ]
    }

    #[test]
    fn round_trip_preserves_ids_quantities_and_option_order() {
        let items = sample_gift_items();
        let encoded = encode(&items).unwrap().unwrap();
        let decoded: Vec<GiftItem> = decode(Some(&encoded));
        assert_eq!(decoded, items);
    }

    #[test]
    fn round_trip_milestone_rewards() {
        let rewards = vec![RewardItem {
            item_id: 992,
            item_quantity: 10,
            item_options: vec![RewardItemOption {
                item_option_id: 3,
                item_option_param: 25,
            }],
        }];
        let encoded = encode(&rewards).unwrap().unwrap();
        let decoded: Vec<RewardItem> = decode(Some(&encoded));
        assert_eq!(decoded, rewards);
    }

    #[test]
    fn encode_drops_sentinel_lines() {
        let mut items = sample_gift_items();
        items.insert(
            0,
            GiftItem {
                id: 0,
                quantity: 1,
                options: vec![],
            },
        );
        let encoded = encode(&items).unwrap().unwrap();
        let decoded: Vec<GiftItem> = decode(Some(&encoded));
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].id, 14);
    }

    #[test]
    fn encode_of_only_sentinels_stores_absence() {
        let items = vec![GiftItem {
            id: 0,
            quantity: 1,
            options: vec![],
        }];
        assert_eq!(encode(&items).unwrap(), None);
        assert_eq!(encode::<GiftItem>(&[]).unwrap(), None);
    }

    #[test]
    fn decode_of_malformed_text_is_empty_not_an_error() {
        assert!(decode::<GiftItem>(Some("{not json")).is_empty());
        assert!(decode::<GiftItem>(Some(r#"{"id": 1}"#)).is_empty());
        assert!(decode::<GiftItem>(Some("")).is_empty());
        assert!(decode::<GiftItem>(None).is_empty());
    }

    #[test]
    fn decode_accepts_missing_options_field() {
        let decoded: Vec<GiftItem> = decode(Some(r#"[{"id": 5, "quantity": 3}]"#));
        assert_eq!(decoded.len(), 1);
        assert!(decoded[0].options.is_empty());
    }

    #[test]
    fn gift_and_reward_field_names_stay_distinct() {
        // The game server reads both columns; the namings must not drift.
        let gift = encode(&sample_gift_items()).unwrap().unwrap();
        assert!(gift.contains(r#""id":"#) && gift.contains(r#""quantity":"#));

        let reward = encode(&[RewardItem {
            item_id: 1,
            item_quantity: 1,
            item_options: vec![],
        }])
        .unwrap()
        .unwrap();
        assert!(reward.contains(r#""item_id":"#) && reward.contains(r#""item_quantity":"#));
    }
}
