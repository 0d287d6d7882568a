//! Instance configuration records: settings, presets, translations, extensions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::files::StorageAsset;

/// Color scheme preference for the admin app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Follow the system preference.
    Auto,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

/// Whether arbitrary transforms are allowed on the assets endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetTransformMode {
    /// Any requested transform is allowed.
    All,
    /// No transforms are allowed.
    None,
    /// Only the configured presets are allowed.
    Presets,
}

/// The singleton settings record for the instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    /// Unique identifier for the settings record.
    pub id: i64,
    /// Name of the project, shown in the admin app.
    pub project_name: Option<String>,
    /// Public website that goes with this project.
    pub project_url: Option<String>,
    /// Brand color of the project (hex code).
    pub project_color: Option<String>,
    /// Logo of the project (`File.id`).
    pub project_logo: Option<String>,
    /// Foreground image on the public pages (`File.id`).
    pub public_foreground: Option<String>,
    /// Background image on the public pages (`File.id`).
    pub public_background: Option<String>,
    /// Note rendered on the public pages of the app.
    pub public_note: Option<String>,
    /// Login attempts allowed before an account is blocked.
    pub auth_login_attempts: Option<i64>,
    /// Regex that passwords must match to be valid.
    pub auth_password_policy: Option<String>,
    /// Which transforms the assets endpoint accepts.
    pub storage_asset_transform: Option<AssetTransformMode>,
    /// Transformation presets available on the assets endpoint.
    pub storage_asset_presets: Option<Vec<StorageAsset>>,
    /// CSS rules overriding the app's default styling.
    pub custom_css: Option<String>,
    /// Default folder for uploaded files (`Folder.id`).
    pub storage_default_folder: Option<String>,
    /// Custom map tile URLs overriding the defaults.
    pub basemaps: Option<Vec<String>>,
    /// Mapbox access token.
    pub mapbox_key: Option<String>,
    /// Modules enabled globally in the admin app.
    pub module_bar: Option<Vec<String>>,
    /// Descriptor of the project, shown in the admin app.
    pub project_descriptor: Option<String>,
    /// Custom aspect ratios offered in the image editor.
    pub custom_aspect_ratios: Option<Vec<f64>>,
    /// Favicon for the admin app (`File.id`).
    pub public_favicon: Option<String>,
    /// Default color scheme of the admin app.
    pub default_appearance: Option<Appearance>,
    /// Default theme in light mode.
    pub default_theme_light: Option<String>,
    /// Customizations of the light theme.
    pub theme_light_overrides: Option<Value>,
    /// Default theme in dark mode.
    pub default_theme_dark: Option<String>,
    /// Customizations of the dark theme.
    pub theme_dark_overrides: Option<Value>,
    /// Link to the error report page.
    pub report_error_url: Option<String>,
    /// Link to the bug report page.
    pub report_bug_url: Option<String>,
    /// Link to the feature request page.
    pub report_feature_url: Option<String>,
}

/// A saved collection view, optionally bookmarked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Unique identifier for the preset.
    pub id: i64,
    /// Bookmark name; presence makes the preset a bookmark.
    pub bookmark: Option<String>,
    /// User the preset applies to (`User.id`).
    pub user: Option<String>,
    /// Role the preset applies to when no user is set (`Role.id`).
    pub role: Option<String>,
    /// Collection the preset is used for (`Collection.collection`).
    pub collection: Option<String>,
    /// Saved search query.
    pub search: Option<String>,
    /// Key of the layout in use.
    pub layout: Option<String>,
    /// Per-layout query controlling what data is fetched on load.
    pub layout_query: Option<Value>,
    /// Per-layout view options.
    pub layout_options: Option<Value>,
    /// Filters applied by the preset.
    pub filters: Option<Vec<String>>,
}

/// A custom translation string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    /// Primary key of the translation.
    pub id: String,
    /// The translation key.
    pub key: Option<String>,
    /// Language code of the translation (e.g. `en-US`).
    pub language: Option<String>,
    /// The translated value.
    pub string: Option<String>,
}

/// The kind of an installed [`Extension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionType {
    /// Field editing interface.
    Interface,
    /// Field display.
    Display,
    /// Collection layout.
    Layout,
    /// Admin app module.
    Module,
    /// Insights panel.
    Panel,
    /// Event hook.
    Hook,
    /// Custom API endpoint.
    Endpoint,
    /// Flow operation.
    Operation,
    /// Bundle of extensions.
    Bundle,
}

/// An installed extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    /// Unique identifier of the extension (uuid).
    pub id: String,
    /// Whether the extension is enabled.
    pub enabled: Option<bool>,
    /// Name of the bundle the extension is part of.
    pub bundle: Option<String>,
    /// Kind of the extension.
    #[serde(rename = "type")]
    pub extension_type: Option<ExtensionType>,
    /// Whether the extension is loaded from the local extensions folder.
    pub local: Option<bool>,
    /// Loaded version of the extension.
    pub version: Option<String>,
    /// Whether a bundle's entries can be disabled individually.
    pub partial: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn settings_nest_asset_presets() {
        let setting: Setting = serde_json::from_value(json!({
            "id": 1,
            "project_name": "rectus",
            "storage_asset_transform": "presets",
            "storage_asset_presets": [{"key": "card", "fit": "contain"}],
            "default_appearance": "auto",
            "custom_aspect_ratios": [1.85]
        }))
        .unwrap();
        assert_eq!(
            setting.storage_asset_transform,
            Some(AssetTransformMode::Presets)
        );
        assert_eq!(
            setting.storage_asset_presets.as_ref().unwrap()[0].key,
            "card"
        );
        assert_eq!(setting.default_appearance, Some(Appearance::Auto));
    }

    #[test]
    fn extension_type_round_trips() {
        let extension: Extension = serde_json::from_value(json!({
            "id": "9f2b2c5a-6f3e-4e27-a1c5-8d7b9b1a2c3d",
            "enabled": true,
            "type": "endpoint"
        }))
        .unwrap();
        assert_eq!(extension.extension_type, Some(ExtensionType::Endpoint));
        let round_trip = serde_json::to_value(&extension).unwrap();
        assert_eq!(round_trip["type"], json!("endpoint"));
    }

    #[test]
    fn preset_layout_query_is_opaque() {
        let preset: Preset = serde_json::from_value(json!({
            "id": 7,
            "collection": "articles",
            "layout": "tabular",
            "layout_query": {"tabular": {"sort": ["-date_created"]}}
        }))
        .unwrap();
        assert_eq!(
            preset.layout_query,
            Some(json!({"tabular": {"sort": ["-date_created"]}}))
        );
    }
}
