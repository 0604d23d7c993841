use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Running,
    Stopped,
    Error,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Running => "running",
            AgentStatus::Stopped => "stopped",
            AgentStatus::Error => "error",
        }
    }
}

/// Automated strategy runner managed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub status: AgentStatus,
    pub strategy: String,
    /// Number of open positions
    pub positions: u32,
    pub total_value: f64,
    pub pnl: f64,
    pub last_activity: String,
}

impl Agent {
    pub fn is_running(&self) -> bool {
        self.status == AgentStatus::Running
    }
}

/// Reply to `POST /agents/:id/start` and `/stop`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgentActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
