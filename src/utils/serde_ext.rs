use serde::{Deserialize, Deserializer};

/// Deserializer for patch fields on nullable columns.
///
/// Plain `Option<Option<T>>` collapses an explicit JSON `null` into the outer
/// `None`, which makes "clear this column" indistinguishable from "leave it
/// alone". Pairing this with `#[serde(default)]` keeps the three states:
/// missing -> `None`, `null` -> `Some(None)`, value -> `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::double_option")]
        descriptor: Option<Option<String>>,
    }

    #[test]
    fn missing_field_is_outer_none() {
        let p: Patch = serde_json::from_str("{}").unwrap();
        assert!(p.descriptor.is_none());
    }

    #[test]
    fn explicit_null_is_some_none() {
        let p: Patch = serde_json::from_str(r#"{"descriptor": null}"#).unwrap();
        assert_eq!(p.descriptor, Some(None));
    }

    #[test]
    fn value_is_some_some() {
        let p: Patch = serde_json::from_str(r#"{"descriptor": "vip"}"#).unwrap();
        assert_eq!(p.descriptor, Some(Some("vip".to_string())));
    }
}
