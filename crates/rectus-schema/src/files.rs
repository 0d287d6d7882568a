//! File library records: files, folders, and storage asset presets.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A file managed by the platform's file library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Unique identifier for the file (uuid).
    pub id: String,
    /// Storage adapter holding the file (`local`, `s3`, ...).
    pub storage: Option<String>,
    /// Name of the file on disk; a random hash by default.
    pub filename_disk: Option<String>,
    /// Filename used when the file is downloaded.
    pub filename_download: Option<String>,
    /// Title, extracted from the filename on upload and user-editable.
    pub title: Option<String>,
    /// MIME type of the file.
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    /// Virtual folder the file resides in (`Folder.id`).
    pub folder: Option<String>,
    /// Who uploaded the file (`User.id`).
    pub uploaded_by: Option<String>,
    /// When the file was created (ISO-8601).
    pub created_on: Option<String>,
    /// Who last modified the file (`User.id`).
    pub modified_by: Option<String>,
    /// When the file was last modified (ISO-8601).
    pub modified_on: Option<String>,
    /// Character set of the file.
    pub charset: Option<String>,
    /// Size of the file in bytes.
    pub filesize: Option<i64>,
    /// Width in pixels; images only.
    pub width: Option<i64>,
    /// Height in pixels; images only.
    pub height: Option<i64>,
    /// Duration in seconds; audio and video only.
    pub duration: Option<i64>,
    /// URL the file was embedded from.
    pub embed: Option<String>,
    /// Description for the file.
    pub description: Option<String>,
    /// Where the file was created; populated from Exif data for images.
    pub location: Option<String>,
    /// Tags for the file; populated from Exif data for images.
    pub tags: Option<Vec<String>>,
    /// IPTC, Exif, and ICC metadata extracted from the file.
    pub metadata: Option<Value>,
    /// X component of the image focal point.
    pub focal_point_x: Option<i64>,
    /// Y component of the image focal point.
    pub focal_point_y: Option<i64>,
    /// When the file was last uploaded or replaced (ISO-8601).
    pub uploaded_on: Option<String>,
}

/// A virtual folder in the file library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique identifier for the folder (uuid).
    pub id: String,
    /// Name of the folder.
    pub name: Option<String>,
    /// Parent folder, for nesting (`Folder.id`).
    pub parent: Option<String>,
}

/// How a thumbnail is fitted to the requested dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetFit {
    /// Crop to fill the exact dimensions.
    Cover,
    /// Fit within the dimensions, preserving aspect ratio.
    Contain,
    /// Shrink to fit inside the dimensions.
    Inside,
    /// Grow to cover the dimensions.
    Outside,
}

/// Output format of a transformed asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetFormat {
    /// JPEG image.
    Jpeg,
    /// PNG image.
    Png,
    /// WebP image.
    Webp,
    /// TIFF image.
    Tiff,
    /// AVIF image.
    Avif,
}

/// A named transformation preset for the assets endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageAsset {
    /// Key of the preset, used in asset URLs.
    pub key: String,
    /// Whether to crop to size or maintain the aspect ratio.
    pub fit: Option<AssetFit>,
    /// Width of the thumbnail.
    pub width: Option<i64>,
    /// Height of the thumbnail.
    pub height: Option<i64>,
    /// Whether upscaling is suppressed.
    #[serde(rename = "withoutEnlargement")]
    pub without_enlargement: Option<bool>,
    /// Compression quality.
    pub quality: Option<i64>,
    /// Output image format.
    pub format: Option<AssetFormat>,
    /// Additional transformations to apply, as opaque parameters.
    pub transforms: Option<Vec<Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_maps_the_type_field() {
        let file: File = serde_json::from_value(json!({
            "id": "8cbb43fe-4cdf-4991-8352-c461779cec02",
            "storage": "local",
            "type": "image/jpeg",
            "filesize": 3442
        }))
        .unwrap();
        assert_eq!(file.mime_type.as_deref(), Some("image/jpeg"));
        assert_eq!(file.filesize, Some(3442));

        let round_trip = serde_json::to_value(&file).unwrap();
        assert_eq!(round_trip["type"], json!("image/jpeg"));
    }

    #[test]
    fn storage_asset_keeps_the_camel_case_flag() {
        let asset: StorageAsset = serde_json::from_value(json!({
            "key": "card",
            "fit": "cover",
            "width": 200,
            "withoutEnlargement": true,
            "format": "webp"
        }))
        .unwrap();
        assert_eq!(asset.without_enlargement, Some(true));
        assert_eq!(asset.fit, Some(AssetFit::Cover));
        assert_eq!(asset.format, Some(AssetFormat::Webp));
    }
}
