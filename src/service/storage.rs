//! Durable storage for palettes
//!
//! Both backends are idempotent: repeating an upsert or a delete leaves the
//! stored palette as it was after the first call.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::palette::{ColorId, ColorRecord};

/// Durable home of a palette
pub trait PaletteRepository: Send + Sync + 'static {
    /// Full snapshot, in no particular order
    fn load(&self) -> impl Future<Output = Result<Vec<ColorRecord>>> + Send;

    /// Insert the record or replace the stored record with the same id
    fn upsert(&self, record: &ColorRecord) -> impl Future<Output = Result<()>> + Send;

    /// Remove the record with this id, if stored
    fn delete(&self, id: ColorId) -> impl Future<Output = Result<()>> + Send;
}

/// Palette stored as a JSON array in a local file
#[derive(Debug)]
pub struct FileRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<ColorRecord>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write(&self, records: &[ColorRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }

    async fn modify<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<ColorRecord>) + Send,
    {
        let _guard = self.lock.lock().await;
        let mut records = self.read().await?;
        f(&mut records);
        self.write(&records).await
    }
}

impl PaletteRepository for FileRepository {
    async fn load(&self) -> Result<Vec<ColorRecord>> {
        let _guard = self.lock.lock().await;
        self.read().await.map_err(persistence)
    }

    async fn upsert(&self, record: &ColorRecord) -> Result<()> {
        let record = record.clone();
        self.modify(move |records| {
            match records.iter_mut().find(|r| r.id == record.id) {
                Some(existing) => *existing = record,
                None => records.push(record),
            }
        })
        .await
        .map_err(persistence)
    }

    async fn delete(&self, id: ColorId) -> Result<()> {
        self.modify(move |records| records.retain(|r| r.id != id))
            .await
            .map_err(persistence)
    }
}

/// Connection settings for a PostgREST (Supabase) table
#[derive(Debug, Clone)]
pub struct SupabaseSettings {
    pub url: String,
    pub table: String,
    pub api_key: String,
    pub timeout: Duration,
}

/// Palette stored in a Supabase table via its REST interface
#[derive(Debug, Clone)]
pub struct SupabaseRepository {
    client: Client,
    table_url: String,
    api_key: String,
}

impl SupabaseRepository {
    pub fn new(settings: SupabaseSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::PersistenceFailed(e.to_string()))?;

        let table_url = format!(
            "{}/rest/v1/{}",
            settings.url.trim_end_matches('/'),
            settings.table
        );

        Ok(Self {
            client,
            table_url,
            api_key: settings.api_key,
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn send(request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::PersistenceFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::PersistenceFailed(format!("{}: {}", status, body.trim())));
        }

        Ok(response)
    }
}

impl PaletteRepository for SupabaseRepository {
    async fn load(&self) -> Result<Vec<ColorRecord>> {
        let request = self
            .authorized(self.client.get(&self.table_url))
            .query(&[("select", "*")]);

        Self::send(request)
            .await?
            .json()
            .await
            .map_err(|e| Error::PersistenceFailed(e.to_string()))
    }

    async fn upsert(&self, record: &ColorRecord) -> Result<()> {
        let request = self
            .authorized(self.client.post(&self.table_url))
            .header("Prefer", "resolution=merge-duplicates")
            .json(&[record]);

        Self::send(request).await.map(|_| ())
    }

    async fn delete(&self, id: ColorId) -> Result<()> {
        let request = self
            .authorized(self.client.delete(&self.table_url))
            .query(&[("id", format!("eq.{}", id))]);

        Self::send(request).await.map(|_| ())
    }
}

/// Storage selected by configuration
#[derive(Debug)]
pub enum Backend {
    File(FileRepository),
    Supabase(SupabaseRepository),
}

impl PaletteRepository for Backend {
    async fn load(&self) -> Result<Vec<ColorRecord>> {
        match self {
            Backend::File(repo) => repo.load().await,
            Backend::Supabase(repo) => repo.load().await,
        }
    }

    async fn upsert(&self, record: &ColorRecord) -> Result<()> {
        match self {
            Backend::File(repo) => repo.upsert(record).await,
            Backend::Supabase(repo) => repo.upsert(record).await,
        }
    }

    async fn delete(&self, id: ColorId) -> Result<()> {
        match self {
            Backend::File(repo) => repo.delete(id).await,
            Backend::Supabase(repo) => repo.delete(id).await,
        }
    }
}

/// Every storage failure reaches the user as a persistence failure
fn persistence(err: Error) -> Error {
    match err {
        Error::PersistenceFailed(_) => err,
        other => Error::PersistenceFailed(other.to_string()),
    }
}
