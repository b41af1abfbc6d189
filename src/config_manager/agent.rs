use serde::{Deserialize, Serialize};

/// User-editable descriptor of the chat agent.
///
/// Every field is echoed into reply templates except `temperature`, which is
/// carried round-trip to the UI and never read by the responder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_personality")]
    pub personality: String,

    #[serde(default = "default_expertise")]
    pub expertise: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_name() -> String {
    "Assistant IA".to_string()
}

fn default_personality() -> String {
    "professionnel et amical".to_string()
}

fn default_expertise() -> String {
    "assistance générale".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            personality: default_personality(),
            expertise: default_expertise(),
            temperature: default_temperature(),
        }
    }
}
