//! The fixed table of actions operators may trigger.

use log::warn;

use crate::models::ActionDefinition;

/// Default minimum time between two runs of the same action.
pub const DEFAULT_COOLDOWN_SECONDS: u64 = 60;

/// Ordered, immutable set of allowed actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRegistry {
    actions: Vec<ActionDefinition>,
}

impl ActionRegistry {
    /// Builds a registry; later definitions reusing an id are ignored.
    pub fn new(definitions: Vec<ActionDefinition>) -> Self {
        let mut actions: Vec<ActionDefinition> = Vec::with_capacity(definitions.len());
        for definition in definitions {
            if actions.iter().any(|a| a.id == definition.id) {
                warn!("Ignoring duplicate action id '{}'", definition.id);
                continue;
            }
            actions.push(definition);
        }
        Self { actions }
    }

    /// Gateway and dashboard service controls.
    pub fn builtin() -> Self {
        Self::new(vec![
            ActionDefinition::new(
                "restart_openclaw_gateway",
                "Restart Gateway",
                &["systemctl", "--user", "restart", "openclaw-gateway.service"],
                30,
            ),
            ActionDefinition::new(
                "restart_homie_dashboard",
                "Restart Dashboard",
                &["systemctl", "--user", "restart", "homie-dashboard.service"],
                30,
            ),
            ActionDefinition::new(
                "check_gateway_health",
                "Gateway Health",
                &[
                    "systemctl",
                    "--user",
                    "status",
                    "openclaw-gateway.service",
                    "--no-pager",
                ],
                15,
            ),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&ActionDefinition> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActionDefinition> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a ActionRegistry {
    type Item = &'a ActionDefinition;
    type IntoIter = std::slice::Iter<'a, ActionDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
