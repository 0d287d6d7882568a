//! Automation records: flows and their operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a flow is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowStatus {
    /// The flow runs when triggered.
    Active,
    /// The flow is paused.
    Inactive,
}

/// What starts a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowTrigger {
    /// Platform event hook.
    Hook,
    /// Incoming webhook.
    Webhook,
    /// Called by another flow's operation.
    Operation,
    /// Cron schedule.
    Schedule,
    /// Started manually from the admin app.
    Manual,
}

/// An automation flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    /// Unique identifier for the flow (uuid).
    pub id: String,
    /// Name of the flow.
    pub name: Option<String>,
    /// Icon shown for the flow in the admin app.
    pub icon: Option<String>,
    /// Color of the flow's icon.
    pub color: Option<String>,
    /// User-defined description of the flow.
    pub description: Option<String>,
    /// Current status of the flow.
    pub status: Option<FlowStatus>,
    /// What triggers the flow.
    pub trigger: Option<FlowTrigger>,
    /// Permission context the flow runs under: `$public`, `$trigger`,
    /// `$full`, or a role uuid.
    pub accountability: Option<String>,
    /// Options of the selected trigger.
    pub options: Option<Value>,
    /// Operation connected to the trigger (`Operation.id`).
    pub operation: Option<String>,
    /// When the flow was created (ISO-8601).
    pub date_created: Option<String>,
    /// The user who created the flow (`User.id`).
    pub user_created: Option<String>,
    /// All operations that belong to the flow (`Operation.id`).
    pub operations: Option<Vec<String>>,
}

/// A single step inside a [`Flow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Unique identifier for the operation (uuid).
    pub id: String,
    /// Name of the operation.
    pub name: Option<String>,
    /// Key of the operation, unique within its flow.
    pub key: Option<String>,
    /// Operation type: `log`, `mail`, `request`, ... or a custom
    /// extension type.
    #[serde(rename = "type")]
    pub operation_type: Option<String>,
    /// X position in the flow workspace.
    pub position_x: Option<i64>,
    /// Y position in the flow workspace.
    pub position_y: Option<i64>,
    /// Options depending on the operation type.
    pub options: Option<Value>,
    /// Operation run when this one succeeds (`Operation.id`).
    pub resolve: Option<String>,
    /// Operation run when this one fails (`Operation.id`).
    pub reject: Option<String>,
    /// Parent flow of the operation (`Flow.id`).
    pub flow: Option<String>,
    /// When the operation was created (ISO-8601).
    pub date_created: Option<String>,
    /// The user who created the operation (`User.id`).
    pub user_created: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flow_deserializes_with_status_and_trigger() {
        let flow: Flow = serde_json::from_value(json!({
            "id": "287e2c8b-0b30-4d52-9fa0-b78a48e62331",
            "name": "Publish notifier",
            "status": "active",
            "trigger": "hook",
            "accountability": "$trigger",
            "operations": []
        }))
        .unwrap();
        assert_eq!(flow.status, Some(FlowStatus::Active));
        assert_eq!(flow.trigger, Some(FlowTrigger::Hook));
        assert_eq!(flow.accountability.as_deref(), Some("$trigger"));
    }

    #[test]
    fn operation_type_stays_open_ended() {
        let operation: Operation = serde_json::from_value(json!({
            "id": "4a1c9b0e-31d7-4b2f-a6d0-7f5e4b8a99cd",
            "type": "custom-slack-message",
            "options": {"channel": "#general"}
        }))
        .unwrap();
        assert_eq!(operation.operation_type.as_deref(), Some("custom-slack-message"));
    }
}
