//! Typed resource records mirroring a Directus-style headless CMS REST API.
//!
//! These are pure data contracts: plain serde structs that type the JSON
//! payloads the API returns, with no behavior attached. Identifiers are
//! strings (uuid) or integers exactly as the API presents them, timestamps
//! are ISO-8601 strings, closed string-literal unions are enums with their
//! wire spellings, and configuration-shaped payloads (`options`, `metadata`,
//! `delta`, ...) stay opaque [`serde_json::Value`]s.
//!
//! Partial payloads are the norm (field selection trims responses), so every
//! field except the primary identifier is optional.

pub mod access;
pub mod activity;
pub mod collection;
pub mod content;
pub mod files;
pub mod flows;
pub mod insights;
pub mod settings;

pub use access::{Permission, PermissionAction, Policy, Role, Share, User, UserStatus};
pub use activity::{
    Activity, ActivityAction, Comment, Notification, NotificationStatus, Revision,
};
pub use collection::{
    Accountability, CollapseBehavior, Collection, Diff, Field, FieldWidth, Relation,
    SchemaSnapshot,
};
pub use content::{ContentVersion, Item};
pub use files::{AssetFit, AssetFormat, File, Folder, StorageAsset};
pub use flows::{Flow, FlowStatus, FlowTrigger, Operation};
pub use insights::{Dashboard, Panel};
pub use settings::{
    Appearance, AssetTransformMode, Extension, ExtensionType, Preset, Setting, Translation,
};
