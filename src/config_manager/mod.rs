pub mod agent;
pub mod main;
pub mod system;
pub mod utils;

pub use agent::AgentConfig;
pub use main::Config;
pub use system::SystemConfig;
