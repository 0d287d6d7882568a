//! User-content records: items and content versions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An item in a user-defined collection.
///
/// Items are schema-dependent; `id` is the only field guaranteed to exist.
/// Every other field is kept in the flattened `fields` map under its
/// collection-defined name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for the item, always presented as a string.
    pub id: String,
    /// The collection-defined fields of the item.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A content version of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentVersion {
    /// Primary key of the content version.
    pub id: String,
    /// Key of the version; the value used for the `version` query parameter.
    pub key: Option<String>,
    /// Descriptive name of the version.
    pub name: Option<String>,
    /// Collection the version is created on (`Collection.collection`).
    pub collection: Option<String>,
    /// The item the version is created on (`Item.id`).
    pub item: Option<String>,
    /// Hash of the version content.
    pub hash: Option<String>,
    /// When the version was created (ISO-8601).
    pub date_created: Option<String>,
    /// When the version was last updated (ISO-8601).
    pub date_updated: Option<String>,
    /// User that created the version (`User.id`).
    pub user_created: Option<String>,
    /// User that last updated the version (`User.id`).
    pub user_updated: Option<String>,
    /// Changes of this version relative to the main version.
    pub delta: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_flattens_collection_defined_fields() {
        let item: Item = serde_json::from_value(json!({
            "id": "168",
            "title": "Hello, World!",
            "featured_image": 15
        }))
        .unwrap();
        assert_eq!(item.id, "168");
        assert_eq!(item.fields["title"], json!("Hello, World!"));
        assert_eq!(item.fields["featured_image"], json!(15));

        let round_trip = serde_json::to_value(&item).unwrap();
        assert_eq!(round_trip["title"], json!("Hello, World!"));
    }

    #[test]
    fn content_version_exposes_the_query_key() {
        let version: ContentVersion = serde_json::from_value(json!({
            "id": "21a7ed5f-eb19-42ae-8ee2-61f25b8c4eb6",
            "key": "draft",
            "collection": "articles",
            "delta": {"title": "Draft title"}
        }))
        .unwrap();
        assert_eq!(version.key.as_deref(), Some("draft"));
        assert_eq!(version.delta, Some(json!({"title": "Draft title"})));
    }
}
