//! Data-model records: collections, fields, relations, and schema snapshots.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What data a collection tracks for accountability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accountability {
    /// Track full activity and revisions.
    All,
    /// Track activity only.
    Activity,
}

/// Default behavior of a folder collection with nested collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollapseBehavior {
    /// Nested collections start expanded.
    Open,
    /// Nested collections start collapsed.
    Closed,
    /// Nested collections cannot be toggled.
    Locked,
}

/// A collection; matches a table in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Name of the collection, identical to the table name.
    pub collection: String,
    /// Icon shown for this collection in the admin app.
    pub icon: Option<String>,
    /// Short description shown in the admin app.
    pub note: Option<String>,
    /// Template for displaying items of this collection relationally.
    pub display_template: Option<String>,
    /// Whether the collection is hidden in the admin app.
    pub hidden: Option<bool>,
    /// Whether the collection is treated as a singleton.
    pub singleton: Option<bool>,
    /// Display names of this collection per language.
    pub translations: Option<Vec<String>>,
    /// Field that holds the archived state (`Field.field`).
    pub archive_field: Option<String>,
    /// Whether the archive filter is applied by default in the admin app.
    pub archive_app_filter: Option<bool>,
    /// Value the archive field is set to when archiving an item.
    pub archive_value: Option<String>,
    /// Value the archive field is set to when unarchiving an item.
    pub unarchive_value: Option<String>,
    /// Field that holds the manual sort value (`Field.field`).
    pub sort_field: Option<String>,
    /// What data is tracked for this collection.
    pub accountability: Option<Accountability>,
    /// Fields duplicated by the "save as copy" action.
    pub item_duplication_fields: Option<Vec<String>>,
    /// Sort order relative to sibling collections.
    pub sort: Option<i64>,
    /// Name of the parent collection (`Collection.collection`).
    pub group: Option<String>,
    /// Folder behavior when this collection has nested collections.
    pub collapse: Option<CollapseBehavior>,
    /// Whether content versioning is enabled for this collection.
    pub versioning: Option<bool>,
}

/// How wide a field's interface renders on the item edit page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldWidth {
    /// Half of the form width.
    Half,
    /// Half width, pinned left.
    HalfLeft,
    /// Half width, pinned right.
    HalfRight,
    /// Half width with trailing space.
    HalfSpace,
    /// Full form width.
    Full,
    /// Full width including the page margins.
    Fill,
}

/// A field within a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Unique identifier of the field.
    pub id: i64,
    /// Collection this field lives in (`Collection.collection`).
    pub collection: Option<String>,
    /// Field name, unique within its collection.
    pub field: Option<String>,
    /// Special transform flags that apply to this field.
    pub special: Option<Vec<String>>,
    /// Interface used to edit this field.
    pub interface: Option<String>,
    /// Interface options; shape depends on the interface used.
    pub options: Option<Value>,
    /// Display used to render this field.
    pub display: Option<String>,
    /// Configured options for the display in use.
    pub display_options: Option<String>,
    /// Whether the field is read-only in the admin app.
    pub readonly: Option<bool>,
    /// Whether the field is hidden on the edit page.
    pub hidden: Option<bool>,
    /// Position of the field on the edit page.
    pub sort: Option<i64>,
    /// Rendered width of the interface on the edit page.
    pub width: Option<FieldWidth>,
    /// Display names of this field per language.
    pub translations: Option<Vec<String>>,
    /// Short description shown in the admin app.
    pub note: Option<String>,
    /// Whether a value is required for this field.
    pub required: Option<bool>,
    /// Field group this field belongs to (`Field.id` of the group field).
    pub group: Option<i64>,
    /// Validation message shown to the user on failure.
    pub validation_message: Option<String>,
}

/// A relation between two collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    /// Unique identifier for the relation.
    pub id: i64,
    /// Collection holding the foreign key (`Collection.collection`).
    pub many_collection: Option<String>,
    /// Field that holds the related primary key (`Field.field`).
    pub many_field: Option<String>,
    /// Collection on the one side of the relationship.
    pub one_collection: Option<String>,
    /// Alias column serving as the one side (`Field.field`).
    pub one_field: Option<String>,
    /// Alias column serving as the many side (`Field.field`).
    pub one_collection_field: Option<String>,
    /// Collections allowed on the one side of a many-to-any relation.
    pub one_allowed_collections: Option<Vec<String>>,
    /// Junction-table field holding the many field of the related relation.
    pub junction_field: Option<String>,
    /// Field the relationship is sorted by (`Field.field`).
    pub sort_field: Option<String>,
    /// What happens to the one side when the many side is deselected.
    pub one_deselect_action: Option<String>,
}

/// A snapshot of the full data model, as produced by the schema endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    /// Snapshot format version.
    pub version: i64,
    /// Base URL of the instance the snapshot was taken from.
    pub directus: Option<String>,
    /// Database vendor identifier.
    pub vendor: Option<String>,
    /// Collections in the snapshot.
    pub collections: Option<Vec<Collection>>,
    /// Fields in the snapshot.
    pub fields: Option<Vec<Field>>,
    /// Relations in the snapshot.
    pub relations: Option<Vec<Relation>>,
}

/// The difference between a schema snapshot and the live data model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diff {
    /// Hash of the diff, passed back when applying it.
    pub hash: String,
    /// The diff object (collections, fields, relations).
    pub diff: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collection_deserializes_with_enum_fields() {
        let collection: Collection = serde_json::from_value(json!({
            "collection": "articles",
            "hidden": false,
            "accountability": "all",
            "collapse": "open",
            "versioning": true
        }))
        .unwrap();
        assert_eq!(collection.collection, "articles");
        assert_eq!(collection.accountability, Some(Accountability::All));
        assert_eq!(collection.collapse, Some(CollapseBehavior::Open));
        assert_eq!(collection.group, None);
    }

    #[test]
    fn field_width_uses_kebab_case() {
        assert_eq!(
            serde_json::to_value(FieldWidth::HalfLeft).unwrap(),
            json!("half-left")
        );
        let width: FieldWidth = serde_json::from_value(json!("half-space")).unwrap();
        assert_eq!(width, FieldWidth::HalfSpace);
    }

    #[test]
    fn snapshot_nests_the_model_records() {
        let snapshot: SchemaSnapshot = serde_json::from_value(json!({
            "version": 1,
            "vendor": "postgres",
            "collections": [{"collection": "articles"}],
            "fields": [{"id": 5, "field": "title", "width": "full"}]
        }))
        .unwrap();
        assert_eq!(snapshot.collections.as_ref().map(Vec::len), Some(1));
        assert_eq!(
            snapshot.fields.as_ref().unwrap()[0].width,
            Some(FieldWidth::Full)
        );
        assert_eq!(snapshot.relations, None);
    }
}
