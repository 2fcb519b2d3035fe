//! JSON command protocol for scripting the panel headlessly.

use serde::{Deserialize, Serialize};

use crate::harness::PanelHarness;
use crate::state::PanelButton;

/// A command that drives the panel harness.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PanelCommand {
    /// Deliver a named bus event from the tool side
    Deliver {
        name: String,
        #[serde(default)]
        payload: serde_json::Value,
    },
    /// Press a panel button; `index` is the point for per-point buttons
    Press {
        button: String,
        #[serde(default)]
        index: Option<usize>,
    },
    /// Move the pointer into or out of the panel
    Hover { inside: bool },
    /// Take the events the panel emitted so far
    Emitted,
    /// Describe the panel state
    Inspect,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut PanelHarness, cmd: PanelCommand) -> CommandResponse {
    match cmd {
        PanelCommand::Deliver { name, payload } => {
            match harness.deliver_value(&name, payload) {
                Ok(()) => CommandResponse::ok(),
                Err(e) => CommandResponse::err(e),
            }
        }

        PanelCommand::Press { button, index } => {
            let button = match PanelButton::from_name(&button, index) {
                Ok(b) => b,
                Err(e) => return CommandResponse::err(e),
            };
            let before = harness.emitted_names().len();
            harness.press(button);
            let emitted = harness.emitted_names().split_off(before);
            CommandResponse::ok_with_data(serde_json::json!({ "emitted": emitted }))
        }

        PanelCommand::Hover { inside } => {
            harness.hover(inside);
            CommandResponse::ok()
        }

        PanelCommand::Emitted => {
            let events: Vec<_> = harness
                .take_emitted()
                .iter()
                .map(|e| e.to_message())
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({ "events": events }))
        }

        PanelCommand::Inspect => {
            let view = harness.view();
            CommandResponse::ok_with_data(serde_json::json!({
                "visible": harness.is_visible(),
                "split_mode": harness.is_split_mode(),
                "phase": format!("{:?}", harness.phase()),
                "point_count": view.points.len(),
                "edge_count": view.edges.len(),
                "area": view.area,
                "ridges": view.ridges,
                "selection": view.selection,
            }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut PanelHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: PanelCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut PanelHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<PanelCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
