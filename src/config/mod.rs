mod keybinding;
mod loader;
mod types;

pub use keybinding::{parse_key, parse_modifiers};
pub use loader::{load_config, load_local_config, ConfigError};
pub use types::{
    default_bindings, Config, KeyBinding, LogConfig, NamingConfig, StorageConfig, StorageKind,
};
