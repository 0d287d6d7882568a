//! Insights records: dashboards and their panels.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dashboard grouping a set of panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Primary key of the dashboard (uuid).
    pub id: String,
    /// Name of the dashboard.
    pub name: Option<String>,
    /// Material icon for the dashboard.
    pub icon: Option<String>,
    /// Descriptive text about the dashboard.
    pub note: Option<String>,
    /// When the dashboard was created (ISO-8601).
    pub date_created: Option<String>,
    /// User that created the dashboard (`User.id`).
    pub user_created: Option<String>,
    /// Accent color for the dashboard (hex code).
    pub color: Option<String>,
    /// Panels on this dashboard (`Panel.id`).
    pub panels: Option<Vec<String>>,
}

/// A single visualization on a [`Dashboard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Primary key of the panel (uuid).
    pub id: String,
    /// Dashboard the panel is shown on (`Dashboard.id`).
    pub dashboard: Option<String>,
    /// Name of the panel.
    pub name: Option<String>,
    /// Material icon for the panel.
    pub icon: Option<String>,
    /// Accent color of the panel (hex code).
    pub color: Option<String>,
    /// Whether the panel header is rendered.
    pub show_header: Option<bool>,
    /// Description for the panel.
    pub note: Option<String>,
    /// Panel type: `bar-chart`, `metric`, `time-series`, ... or a custom
    /// extension type.
    #[serde(rename = "type")]
    pub panel_type: Option<String>,
    /// X position on the workspace grid.
    pub position_x: Option<i64>,
    /// Y position on the workspace grid.
    pub position_y: Option<i64>,
    /// Width of the panel in workspace dots.
    pub width: Option<i64>,
    /// Height of the panel in workspace dots.
    pub height: Option<i64>,
    /// Options controlled by the panel type.
    pub options: Option<Value>,
    /// When the panel was created (ISO-8601).
    pub date_created: Option<String>,
    /// User that created the panel (`User.id`).
    pub user_created: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn panel_keeps_its_open_ended_type() {
        let panel: Panel = serde_json::from_value(json!({
            "id": "22640672-eef0-4ee9-ab04-591f3afb2883",
            "dashboard": "a79bd1b2-beb2-49fc-8a26-0b3eec0e2697",
            "type": "time-series",
            "width": 28,
            "height": 10,
            "options": {"collection": "orders"}
        }))
        .unwrap();
        assert_eq!(panel.panel_type.as_deref(), Some("time-series"));
        assert_eq!(panel.options, Some(json!({"collection": "orders"})));
        assert_eq!(panel.show_header, None);
    }
}
