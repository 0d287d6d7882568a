//! Access control records: users, roles, policies, permissions, and shares.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::settings::Appearance;

/// Lifecycle status of a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Active account.
    Active,
    /// Invitation sent, not yet accepted.
    Invited,
    /// Created but not activated.
    Draft,
    /// Temporarily blocked.
    Suspended,
    /// Soft-deleted.
    Deleted,
}

/// A platform user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user (uuid).
    pub id: String,
    /// First name of the user.
    pub first_name: Option<String>,
    /// Last name of the user.
    pub last_name: Option<String>,
    /// Unique email address of the user.
    pub email: Option<String>,
    /// Password of the user, hashed server-side.
    pub password: Option<String>,
    /// Location of the user.
    pub location: Option<String>,
    /// Title of the user.
    pub title: Option<String>,
    /// Description of the user.
    pub description: Option<String>,
    /// Tags for the user.
    pub tags: Option<Vec<String>>,
    /// Avatar file (`File.id`).
    pub avatar: Option<String>,
    /// Language the admin app renders in for this user.
    pub language: Option<String>,
    /// 2FA secret used to generate one-time passwords.
    pub tfa_secret: Option<String>,
    /// Lifecycle status of the user.
    pub status: Option<UserStatus>,
    /// Role of the user (`Role.id`).
    pub role: Option<String>,
    /// Static API token for the user.
    pub token: Option<String>,
    /// Policies attached directly to this user (`Policy.id`).
    pub policies: Option<String>,
    /// When the user last used the API (ISO-8601).
    pub last_access: Option<String>,
    /// Last admin app page the user visited, relative to the base URL.
    pub last_page: Option<String>,
    /// Auth provider the user registered through.
    pub provider: Option<String>,
    /// Primary key of the user at the third-party auth provider.
    pub external_identifier: Option<String>,
    /// Provider-supplied data about the user.
    pub auth_data: Option<Value>,
    /// Whether the user receives notification emails.
    pub email_notifications: Option<bool>,
    /// Preferred color scheme of the admin app.
    pub appearance: Option<Appearance>,
    /// Theme to use in dark mode.
    pub theme_dark: Option<String>,
    /// Theme to use in light mode.
    pub theme_light: Option<String>,
    /// Customizations of the light theme in use.
    pub theme_light_overrides: Option<Value>,
    /// Customizations of the dark theme in use.
    pub theme_dark_overrides: Option<Value>,
}

/// A role users can belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier for the role (uuid).
    pub id: String,
    /// Name of the role.
    pub name: Option<String>,
    /// Icon for the role.
    pub icon: Option<String>,
    /// Description of the role.
    pub description: Option<String>,
    /// Parent role this role inherits permissions from (`Role.id`).
    pub parent: Option<String>,
    /// Child roles inheriting this role's permissions (`Role.id`).
    pub children: Option<Vec<String>>,
    /// Policies attached to this role (`Policy.id`).
    pub policies: Option<Vec<String>>,
    /// Users in this role (`User.id`).
    pub users: Option<Vec<String>>,
}

/// A policy bundling permissions and access flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Primary key of the policy (uuid).
    pub id: String,
    /// Name of the policy.
    pub name: Option<String>,
    /// Icon for the policy.
    pub icon: Option<String>,
    /// Description of the policy.
    pub description: Option<String>,
    /// IP allowlist this policy applies to; empty means no restriction.
    pub ip_access: Option<Vec<String>>,
    /// Whether two-factor authentication is required under this policy.
    pub enforce_tfa: Option<bool>,
    /// Whether the policy grants full admin access.
    pub admin_access: Option<bool>,
    /// Whether the policy grants access to the admin app.
    pub app_access: Option<bool>,
    /// Users the policy is assigned to directly (`User.id`).
    pub users: Option<Vec<String>>,
    /// Roles the policy is assigned to (`Role.id`).
    pub roles: Option<Vec<String>>,
    /// Permissions attached to the policy (`Permission.id`).
    pub permissions: Option<Vec<i64>>,
}

/// The CRUD action a [`Permission`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionAction {
    /// Creating items.
    Create,
    /// Reading items.
    Read,
    /// Updating items.
    Update,
    /// Deleting items.
    Delete,
}

/// One permission rule within a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    /// Unique identifier for the permission.
    pub id: i64,
    /// Collection the permission applies to (`Collection.collection`).
    pub collection: Option<String>,
    /// Action the permission applies to.
    pub action: Option<PermissionAction>,
    /// Permission checks, as a filter-rule structure.
    pub permissions: Option<Value>,
    /// Validation checks applied to written values.
    pub validation: Option<Value>,
    /// Preset values for created or updated items.
    pub presets: Option<Value>,
    /// Fields the user is allowed to interact with (`Field.field`).
    pub fields: Option<Vec<String>>,
    /// Policy the permission belongs to (`Policy.id`).
    pub policy: Option<String>,
}

/// A share link granting scoped access to a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    /// Primary key of the share (uuid).
    pub id: String,
    /// Optional custom name for the share.
    pub name: Option<String>,
    /// Collection of the shared item (`Collection.collection`).
    pub collection: Option<String>,
    /// Primary key of the shared item, as a string.
    pub item: Option<String>,
    /// Role whose permissions the share inherits (`Role.id`).
    pub role: Option<String>,
    /// Optional password required to view the shared item.
    pub password: Option<String>,
    /// User who created the share (`User.id`).
    pub user_created: Option<String>,
    /// When the share was created (ISO-8601).
    pub date_created: Option<String>,
    /// Earliest moment the shared item can be viewed (ISO-8601).
    pub date_start: Option<String>,
    /// Latest moment the shared item can be viewed (ISO-8601).
    pub date_end: Option<String>,
    /// How many times the shared item has been viewed.
    pub times_used: Option<i64>,
    /// Maximum number of times the shared item can be viewed.
    pub max_uses: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_deserializes_with_status_and_appearance() {
        let user: User = serde_json::from_value(json!({
            "id": "0bc7b36a-9ba9-4ce0-83f0-0a526f354e07",
            "email": "admin@example.com",
            "status": "active",
            "appearance": "dark",
            "tags": ["ops"]
        }))
        .unwrap();
        assert_eq!(user.status, Some(UserStatus::Active));
        assert_eq!(user.appearance, Some(Appearance::Dark));
        assert_eq!(user.tfa_secret, None);
    }

    #[test]
    fn permission_rules_stay_opaque() {
        let permission: Permission = serde_json::from_value(json!({
            "id": 34,
            "collection": "articles",
            "action": "read",
            "permissions": {"status": {"_eq": "published"}},
            "fields": ["*"]
        }))
        .unwrap();
        assert_eq!(permission.action, Some(PermissionAction::Read));
        assert_eq!(
            permission.permissions,
            Some(json!({"status": {"_eq": "published"}}))
        );
    }

    #[test]
    fn policy_links_by_scalar_keys() {
        let policy: Policy = serde_json::from_value(json!({
            "id": "f23b4636-60a0-4b2a-94f5-7d7a0d1b3e43",
            "admin_access": false,
            "roles": ["2f24211d-d928-469a-aea3-3c8f53d4e426"],
            "permissions": [34, 35]
        }))
        .unwrap();
        assert_eq!(policy.permissions.as_deref(), Some(&[34, 35][..]));
    }
}
