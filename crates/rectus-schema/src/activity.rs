//! Accountability records: activity, revisions, comments, notifications.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of action an [`Activity`] entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    /// An item was created.
    Create,
    /// An item was updated.
    Update,
    /// An item was deleted.
    Delete,
    /// A user logged in.
    Login,
}

/// One entry in the platform's activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier for the entry.
    pub id: i64,
    /// Action that was performed.
    pub action: Option<ActivityAction>,
    /// The user who performed the action (`User.id`).
    pub user: Option<String>,
    /// When the action happened (ISO-8601).
    pub timestamp: Option<String>,
    /// IP address of the user at the time of the action.
    pub ip: Option<String>,
    /// User agent string of the browser used for the action.
    pub user_agent: Option<String>,
    /// Collection identifier in which the item resides.
    pub collection: Option<String>,
    /// Primary key of the affected item, always a string.
    pub item: Option<String>,
    /// User comment attached to the entry.
    pub comment: Option<String>,
    /// Origin URL of the request.
    pub origin: Option<String>,
    /// Revisions made in this activity (`Revision.id`).
    pub revisions: Option<Vec<i64>>,
}

/// A snapshot of an item at one point in its edit history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    /// Unique identifier for the revision.
    pub id: i64,
    /// Activity record this revision belongs to (`Activity.id`).
    pub activity: Option<i64>,
    /// Collection of the updated item.
    pub collection: Option<String>,
    /// Primary key of the updated item, as a string.
    pub item: Option<String>,
    /// Copy of the item state at the time of the update.
    pub data: Option<Value>,
    /// Changes between the previous and this revision.
    pub delta: Option<Value>,
    /// Parent revision when the update happened relationally (`Revision.id`).
    pub parent: Option<i64>,
    /// Associated content version (`ContentVersion.key`).
    pub version: Option<String>,
}

/// A comment left on an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier for the comment (uuid).
    pub id: String,
    /// Collection identifier in which the item resides.
    pub collection: Option<String>,
    /// The item the comment was created for.
    pub item: Option<String>,
    /// The comment body.
    pub comment: Option<String>,
    /// When the comment was created (ISO-8601).
    pub date_created: Option<String>,
    /// When the comment was last updated (ISO-8601).
    pub date_updated: Option<String>,
    /// The user who created the comment (`User.id`).
    pub user_created: Option<String>,
    /// The user who last updated the comment (`User.id`).
    pub user_updated: Option<String>,
}

/// Current status of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    /// Unread, sitting in the inbox.
    Inbox,
    /// Archived by the recipient.
    Archived,
}

/// An in-app notification sent to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Primary key of the notification.
    pub id: i64,
    /// When the notification was created (ISO-8601).
    pub timestamp: Option<String>,
    /// Current status of the notification.
    pub status: Option<NotificationStatus>,
    /// User that received the notification (`User.id`).
    pub recipient: Option<String>,
    /// User that sent the notification, if any (`User.id`).
    pub sender: Option<String>,
    /// Subject line of the message.
    pub subject: Option<String>,
    /// Body of the message.
    pub message: Option<String>,
    /// Collection this notification references.
    pub collection: Option<String>,
    /// Primary key of the referenced item, as a string.
    pub item: Option<String>,
}
