use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::Error;
use crate::palette::{ColorId, Effect, EffectSink, Hex};

use super::naming::ColorNamer;
use super::storage::PaletteRepository;

/// Outcome of a background effect, delivered back to the session
#[derive(Debug)]
pub enum Completion {
    /// A name lookup answered; `name` is `None` when the service had none
    NameResolved {
        id: ColorId,
        hex: Hex,
        name: Option<String>,
    },
    /// A lookup or a storage call failed
    Failed(Error),
}

/// Runs effects as detached tokio tasks
///
/// Must be used from within a tokio runtime. Tasks are never cancelled, and
/// their completion order is not related to dispatch order.
pub struct Dispatcher<N, R> {
    namer: Arc<N>,
    repository: Arc<R>,
    completions: UnboundedSender<Completion>,
}

impl<N: ColorNamer, R: PaletteRepository> Dispatcher<N, R> {
    /// Create a dispatcher and the receiving end of its completions
    pub fn new(namer: Arc<N>, repository: Arc<R>) -> (Self, UnboundedReceiver<Completion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Self {
            namer,
            repository,
            completions: tx,
        };
        (dispatcher, rx)
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    fn report(tx: &UnboundedSender<Completion>, completion: Completion) {
        // The session may already be gone on shutdown
        let _ = tx.send(completion);
    }
}

impl<N: ColorNamer, R: PaletteRepository> EffectSink for Dispatcher<N, R> {
    fn dispatch(&self, effect: Effect) {
        let tx = self.completions.clone();

        match effect {
            Effect::Upsert(record) => {
                let repository = Arc::clone(&self.repository);
                tokio::spawn(async move {
                    if let Err(err) = repository.upsert(&record).await {
                        tracing::warn!(id = %record.id, %err, "upsert failed");
                        Self::report(&tx, Completion::Failed(err));
                    }
                });
            }
            Effect::Delete(id) => {
                let repository = Arc::clone(&self.repository);
                tokio::spawn(async move {
                    if let Err(err) = repository.delete(id).await {
                        tracing::warn!(%id, %err, "delete failed");
                        Self::report(&tx, Completion::Failed(err));
                    }
                });
            }
            Effect::LookupName { id, hex } => {
                let namer = Arc::clone(&self.namer);
                tokio::spawn(async move {
                    match namer.lookup(&hex).await {
                        Ok(name) => Self::report(&tx, Completion::NameResolved { id, hex, name }),
                        Err(err) => {
                            tracing::warn!(%id, %hex, %err, "name lookup failed");
                            Self::report(&tx, Completion::Failed(err));
                        }
                    }
                });
            }
        }
    }
}
