mod dispatch;
mod naming;
mod storage;

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::{ConfigError, Config, StorageKind};
use crate::error::Result;

pub use dispatch::{Completion, Dispatcher};
pub use naming::{ColorNamer, ColorNamesClient, DEFAULT_NAMING_ENDPOINT};
pub use storage::{
    Backend, FileRepository, PaletteRepository, SupabaseRepository, SupabaseSettings,
};

/// Effect sink used by the running application
pub type LiveDispatcher = Dispatcher<ColorNamesClient, Backend>;

/// Build the storage backend selected by configuration
pub fn backend(config: &Config) -> Result<Backend> {
    let storage = &config.storage;

    match storage.backend() {
        StorageKind::File => Ok(Backend::File(FileRepository::new(storage.path()))),
        StorageKind::Supabase => {
            let url = storage
                .url
                .clone()
                .ok_or_else(|| ConfigError::Missing("storage.url".to_string()))?;
            let api_key = std::env::var(storage.key_env())
                .map_err(|_| ConfigError::Missing(format!("environment variable {}", storage.key_env())))?;

            let repository = SupabaseRepository::new(SupabaseSettings {
                url,
                table: storage.table().to_string(),
                api_key,
                timeout: storage.timeout(),
            })?;
            Ok(Backend::Supabase(repository))
        }
    }
}

/// Connect the naming client and storage backend behind one dispatcher
pub fn connect(config: &Config) -> Result<(LiveDispatcher, UnboundedReceiver<Completion>)> {
    let namer = ColorNamesClient::new(config.naming.endpoint(), config.naming.timeout())?;
    let backend = backend(config)?;

    tracing::info!(
        backend = %config.storage.backend(),
        naming = config.naming.endpoint(),
        "connected collaborators"
    );

    Ok(Dispatcher::new(Arc::new(namer), Arc::new(backend)))
}
