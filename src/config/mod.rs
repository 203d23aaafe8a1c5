//! Configuration module for stdeploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STDEPLOY_*)
//! 3. Project config (./stdeploy.toml)
//! 4. User config (~/.config/stdeploy/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load, load_with_warnings, user_config_path, with_env_overrides, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{default_secrets, Config, ProjectConfig, RemoteConfig, SecretsSections};
