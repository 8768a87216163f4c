use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Open-ended entity type tag, e.g. "location" or "event". The service adds
/// new types without notice, so no closed variant list is kept client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityType(String);

impl EntityType {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Read-only identity view over a remote record.
///
/// Both accessors are total: absent or malformed backing metadata yields
/// empty values, never an error.
pub trait Entity {
    fn entity_id(&self) -> String;
    fn entity_type(&self) -> EntityType;
}

/// String list with order-insensitive equality, used for label ids where the
/// service returns members in no particular order.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnorderedStrings(Vec<String>);

impl UnorderedStrings {
    /// Drops duplicates, keeping first-occurrence order for the rest.
    pub fn new(values: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        Self(unique)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl PartialEq for UnorderedStrings {
    fn eq(&self, other: &Self) -> bool {
        if self.0.len() != other.0.len() {
            return false;
        }
        let mut left = self.0.clone();
        let mut right = other.0.clone();
        left.sort();
        right.sort();
        left == right
    }
}

impl From<Vec<String>> for UnorderedStrings {
    fn from(values: Vec<String>) -> Self {
        Self::new(values)
    }
}

/// Metadata attached to every entity record.
///
/// `None` means the field was not set, which is distinct from an explicitly
/// empty value; omitted fields stay omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "EntityType::is_empty")]
    pub entity_type: EntityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<UnorderedStrings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Typed entity record: identity and type are read from the embedded
/// metadata, falling back to empty values when it is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<EntityMeta>,
    #[serde(skip)]
    nil_is_empty: bool,
}

impl BaseEntity {
    pub fn new(meta: EntityMeta) -> Self {
        Self {
            meta: Some(meta),
            nil_is_empty: false,
        }
    }

    /// When set, consumers treat unset metadata fields on this record as
    /// explicitly empty instead of "not provided".
    pub fn nil_is_empty(&self) -> bool {
        self.nil_is_empty
    }

    pub fn set_nil_is_empty(&mut self, value: bool) {
        self.nil_is_empty = value;
    }
}

impl Entity for BaseEntity {
    fn entity_id(&self) -> String {
        self.meta
            .as_ref()
            .and_then(|meta| meta.id.clone())
            .unwrap_or_default()
    }

    fn entity_type(&self) -> EntityType {
        self.meta
            .as_ref()
            .map(|meta| meta.entity_type.clone())
            .unwrap_or_default()
    }
}

/// Schema-unknown entity record: an arbitrary JSON object as returned by the
/// service. Identity lookups dig through the nested "meta" object at runtime
/// and return empty values on any shape mismatch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawEntity(pub Map<String, Value>);

impl RawEntity {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    fn meta_str(&self, key: &str) -> &str {
        self.0
            .get("meta")
            .and_then(Value::as_object)
            .and_then(|meta| meta.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

impl Entity for RawEntity {
    fn entity_id(&self) -> String {
        self.meta_str("id").to_string()
    }

    fn entity_type(&self) -> EntityType {
        EntityType::from(self.meta_str("entityType"))
    }
}

impl From<Map<String, Value>> for RawEntity {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_entity_reads_meta() {
        let entity = BaseEntity::new(EntityMeta {
            id: Some("loc-001".to_string()),
            entity_type: EntityType::from("location"),
            ..Default::default()
        });
        assert_eq!(entity.entity_id(), "loc-001");
        assert_eq!(entity.entity_type(), EntityType::from("location"));
    }

    #[test]
    fn test_base_entity_without_meta_is_empty() {
        let entity = BaseEntity::default();
        assert_eq!(entity.entity_id(), "");
        assert!(entity.entity_type().is_empty());

        let entity = BaseEntity::new(EntityMeta::default());
        assert_eq!(entity.entity_id(), "");
        assert!(entity.entity_type().is_empty());
    }

    #[test]
    fn test_nil_is_empty_flag() {
        let mut entity = BaseEntity::default();
        assert!(!entity.nil_is_empty());
        entity.set_nil_is_empty(true);
        assert!(entity.nil_is_empty());
    }

    #[test]
    fn test_raw_entity_reads_nested_meta() {
        let entity: RawEntity = serde_json::from_value(json!({
            "meta": { "id": "loc-001", "entityType": "location" },
            "name": "Main Street Store"
        }))
        .unwrap();
        assert_eq!(entity.entity_id(), "loc-001");
        assert_eq!(entity.entity_type(), EntityType::from("location"));
    }

    #[test]
    fn test_raw_entity_malformed_meta_is_empty() {
        let payloads = [
            json!({}),
            json!({ "meta": 5 }),
            json!({ "meta": "not an object" }),
            json!({ "meta": {} }),
            json!({ "meta": { "id": 7, "entityType": ["location"] } }),
        ];
        for payload in payloads {
            let entity: RawEntity = serde_json::from_value(payload).unwrap();
            assert_eq!(entity.entity_id(), "");
            assert!(entity.entity_type().is_empty());
        }
    }

    #[test]
    fn test_entity_meta_json_shape() {
        let meta = EntityMeta {
            id: Some("loc-001".to_string()),
            account_id: Some("acct-9".to_string()),
            entity_type: EntityType::from("location"),
            label_ids: Some(UnorderedStrings::new(vec![
                "label-a".to_string(),
                "label-b".to_string(),
            ])),
            category_ids: Some(vec!["cat-1".to_string(), "cat-2".to_string()]),
            country_code: Some("US".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "loc-001",
                "accountId": "acct-9",
                "entityType": "location",
                "labelIds": ["label-a", "label-b"],
                "categoryIds": ["cat-1", "cat-2"],
                "countryCode": "US"
            })
        );

        let back: EntityMeta = serde_json::from_value(value).unwrap();
        assert_eq!(back, meta);
    }

    #[test]
    fn test_entity_meta_unset_fields_stay_unset() {
        let meta: EntityMeta = serde_json::from_value(json!({ "id": "loc-001" })).unwrap();
        assert_eq!(meta.id.as_deref(), Some("loc-001"));
        assert_eq!(meta.account_id, None);
        assert_eq!(meta.label_ids, None);
        assert!(meta.entity_type.is_empty());

        // An explicitly empty list is not the same as an absent one.
        let meta: EntityMeta =
            serde_json::from_value(json!({ "labelIds": [] })).unwrap();
        assert_eq!(meta.label_ids, Some(UnorderedStrings::default()));
    }

    #[test]
    fn test_unordered_strings_ignore_order() {
        let left = UnorderedStrings::new(vec!["a".to_string(), "b".to_string()]);
        let right = UnorderedStrings::new(vec!["b".to_string(), "a".to_string()]);
        assert_eq!(left, right);

        let other = UnorderedStrings::new(vec!["a".to_string(), "c".to_string()]);
        assert_ne!(left, other);
    }

    #[test]
    fn test_unordered_strings_dedup() {
        let labels = UnorderedStrings::new(vec![
            "a".to_string(),
            "b".to_string(),
            "a".to_string(),
        ]);
        assert_eq!(labels.len(), 2);
        assert!(labels.contains("a"));
        assert!(labels.contains("b"));
    }
}
