use serde::{Deserialize, Deserializer};

/// Deserializer for nullable columns in partial-update payloads.
///
/// Combined with `#[serde(default)]` the three payload shapes stay apart:
/// key absent => `None` (leave the column untouched), key present with
/// `null` => `Some(None)` (clear the column), key present with a value =>
/// `Some(Some(v))`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

#[cfg(test)]
mod tests {
    use super::double_option;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct Patch {
        name: Option<String>,
        #[serde(default, deserialize_with = "double_option")]
        image_url: Option<Option<String>>,
        active: Option<bool>,
    }

    #[test]
    fn absent_keys_deserialize_to_none() {
        let p: Patch = serde_json::from_str("{}").unwrap();
        assert!(p.name.is_none());
        assert!(p.image_url.is_none());
        assert!(p.active.is_none());
    }

    #[test]
    fn null_clears_nullable_field() {
        let p: Patch = serde_json::from_str(r#"{"image_url": null}"#).unwrap();
        assert_eq!(p.image_url, Some(None));
    }

    #[test]
    fn present_value_is_kept() {
        let p: Patch = serde_json::from_str(r#"{"image_url": "https://utfs.io/f/x"}"#).unwrap();
        assert_eq!(p.image_url, Some(Some("https://utfs.io/f/x".into())));
    }

    // The original dashboard had revisions using truthy checks that silently
    // dropped `active: false`; presence semantics must keep the value.
    #[test]
    fn false_is_present_not_absent() {
        let p: Patch = serde_json::from_str(r#"{"active": false}"#).unwrap();
        assert_eq!(p.active, Some(false));
    }
}
