use tracing::{error, info, warn};

use crate::api::ApiClient;
use crate::loadable::Loadable;
use crate::models::Agent;

/// Agent list with a detail pane and start/stop control
#[derive(Debug, Default)]
pub struct AgentsPage {
    agents: Loadable<Vec<Agent>>,
    /// Selection is kept by id so it follows reloads
    selected_id: Option<String>,
}

impl AgentsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.agents.load(api.get_agents()).await;

        if let Some(e) = self.agents.error() {
            error!("Failed to load agents: {}", e);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.agents.is_loading()
    }

    pub fn agents(&self) -> &[Agent] {
        self.agents.items()
    }

    pub fn select(&mut self, id: &str) -> bool {
        if self.agents().iter().any(|a| a.id == id) {
            self.selected_id = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<&Agent> {
        let id = self.selected_id.as_deref()?;
        self.agents().iter().find(|a| a.id == id)
    }

    /// Stop the agent if it is running, otherwise start it, then reload
    ///
    /// On failure the returned error is the message to show the user.
    pub async fn toggle(&mut self, api: &ApiClient, id: &str) -> Result<(), String> {
        let running = self
            .agents()
            .iter()
            .find(|a| a.id == id)
            .map(Agent::is_running)
            .ok_or_else(|| format!("Failed to toggle agent: unknown agent {}", id))?;

        let result = if running {
            api.stop_agent(id).await
        } else {
            api.start_agent(id).await
        };

        match result {
            Ok(resp) => {
                if !resp.success {
                    warn!("Backend did not confirm toggle of agent {}", id);
                } else {
                    info!("Agent {} {}", id, if running { "stopped" } else { "started" });
                }
            }
            Err(e) => {
                let notice = format!("Failed to toggle agent: {}", e);
                error!("{}", notice);
                return Err(notice);
            }
        }

        self.load(api).await;
        Ok(())
    }

    /// Toggle whichever agent is selected
    pub async fn toggle_selected(&mut self, api: &ApiClient) -> Result<(), String> {
        let id = self
            .selected_id
            .clone()
            .ok_or_else(|| "Failed to toggle agent: no agent selected".to_string())?;
        self.toggle(api, &id).await
    }
}
