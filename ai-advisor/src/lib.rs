pub mod advisor;
pub mod config;
pub mod prompts;

pub use advisor::Advisor;
pub use config::AdvisorConfig;
