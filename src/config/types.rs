use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::palette::DEFAULT_FALLBACK_NAME;
use crate::service::DEFAULT_NAMING_ENDPOINT;

/// Default request timeout for both collaborators
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub bindings: Vec<KeyBinding>,
}

/// Color name lookup settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NamingConfig {
    /// Search endpoint; the hex is sent as the `hex` query parameter
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Name used when the service returns none
    #[serde(default)]
    pub fallback_name: Option<String>,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl NamingConfig {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_NAMING_ENDPOINT)
    }

    pub fn fallback_name(&self) -> &str {
        self.fallback_name.as_deref().unwrap_or(DEFAULT_FALLBACK_NAME)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Storage backend kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    #[default]
    File,
    Supabase,
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageKind::File => write!(f, "file"),
            StorageKind::Supabase => write!(f, "supabase"),
        }
    }
}

/// Where the palette is persisted
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: Option<StorageKind>,

    /// JSON file for the `file` backend
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Project URL for the `supabase` backend
    #[serde(default)]
    pub url: Option<String>,

    /// Table name for the `supabase` backend
    #[serde(default)]
    pub table: Option<String>,

    /// Environment variable holding the Supabase API key
    #[serde(default)]
    pub key_env: Option<String>,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl StorageConfig {
    pub fn backend(&self) -> StorageKind {
        self.backend.unwrap_or_default()
    }

    /// Palette file, defaulting to the platform data directory
    pub fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join("swatchbook").join("palette.json"))
                .unwrap_or_else(|| PathBuf::from("palette.json"))
        })
    }

    pub fn table(&self) -> &str {
        self.table.as_deref().unwrap_or("Palette")
    }

    pub fn key_env(&self) -> &str {
        self.key_env.as_deref().unwrap_or("SUPABASE_KEY")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// Filter directive such as "info" or "swatchbook=debug"
    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    /// Log file, defaulting next to the palette data
    pub fn file(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join("swatchbook").join("swatchbook.log"))
                .unwrap_or_else(|| PathBuf::from("swatchbook.log"))
        })
    }
}

/// Key binding configuration (Alacritty-style)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key to bind (e.g., "j", "Enter", "Esc", "F1")
    pub key: String,

    /// Modifier keys (e.g., "Control", "Shift", "Control|Shift")
    #[serde(default)]
    pub mods: Option<String>,

    /// Mode restriction (e.g., "Normal", "Insert", "~Normal", "Normal|Grab")
    #[serde(default)]
    pub mode: Option<String>,

    /// Built-in action to execute
    #[serde(default)]
    pub action: Option<String>,
}

impl KeyBinding {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            mods: None,
            mode: None,
            action: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_mods(mut self, mods: impl Into<String>) -> Self {
        self.mods = Some(mods.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }
}

/// Built-in bindings, consulted after user bindings
pub fn default_bindings() -> Vec<KeyBinding> {
    let bind = |key: &str, mode: &str, action: &str| {
        KeyBinding::new(key).with_mode(mode).with_action(action)
    };

    vec![
        // Navigation (list and grab target)
        bind("j", "Normal|Grab", "MoveDown"),
        bind("Down", "Normal|Grab", "MoveDown"),
        bind("k", "Normal|Grab", "MoveUp"),
        bind("Up", "Normal|Grab", "MoveUp"),
        bind("g", "Normal|Grab", "MoveTop"),
        bind("G", "Normal|Grab", "MoveBottom"),
        KeyBinding::new("G")
            .with_mods("Shift")
            .with_mode("Normal|Grab")
            .with_action("MoveBottom"),
        // Palette operations
        bind("a", "Normal", "AddColor"),
        bind("e", "Normal", "EditColor"),
        bind("Enter", "Normal", "EditColor"),
        bind("d", "Normal", "DeleteColor"),
        bind("m", "Normal", "GrabColor"),
        bind("r", "Normal", "Reload"),
        bind("q", "Normal", "Quit"),
        // Editing, grabbing and dialogs
        bind("Enter", "Insert|Grab", "Confirm"),
        bind("Esc", "~Normal", "Cancel"),
        bind("y", "Dialog", "Confirm"),
        bind("Enter", "Dialog", "Confirm"),
        bind("n", "Dialog", "Cancel"),
        KeyBinding::new("c")
            .with_mods("Control")
            .with_action("ForceQuit"),
    ]
}
