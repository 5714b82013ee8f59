//! JSON File Definition Store
//!
//! Keeps every definition of one kind in a single JSON document:
//!
//! ```json
//! { "next_id": 3, "definitions": [ { "id": 1, "name": "...", ... } ] }
//! ```
//!
//! The document is loaded once on open and rewritten after every change by
//! writing a sibling temp file and renaming it over the original, so a crash
//! never leaves a half-written store behind. Writers are serialized by a
//! single async mutex.

use super::{ensure_saved, ensure_unsaved, following_id, missing};
use async_trait::async_trait;
use plugrack_domain::entities::{ProviderDefinition, ProviderId};
use plugrack_domain::error::{Error, Result};
use plugrack_domain::ports::ProviderSettings;
use plugrack_domain::repositories::ProviderRepository;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, trace};

#[derive(Serialize, Deserialize)]
struct StoreDocument<S> {
    next_id: ProviderId,
    definitions: Vec<ProviderDefinition<S>>,
}

struct StoreState<S> {
    next_id: ProviderId,
    definitions: BTreeMap<ProviderId, ProviderDefinition<S>>,
}

/// Definitions persisted to a JSON document on disk
pub struct JsonFileProviderRepository<S: ProviderSettings> {
    path: PathBuf,
    state: Mutex<StoreState<S>>,
}

impl<S: ProviderSettings> JsonFileProviderRepository<S> {
    /// Open the store at `path`, starting empty when the file does not exist
    ///
    /// The parent directory is created on first write, not here.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let state = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let document: StoreDocument<S> = serde_json::from_slice(&bytes).map_err(|e| {
                    Error::database_with_source(
                        format!("Corrupt definition store {}", path.display()),
                        e,
                    )
                })?;
                Self::state_from(document)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreState {
                next_id: 1,
                definitions: BTreeMap::new(),
            },
            Err(e) => {
                return Err(Error::io_with_source(
                    format!("Failed to read definition store {}", path.display()),
                    e,
                ));
            }
        };

        debug!(
            path = %path.display(),
            definitions = state.definitions.len(),
            "Opened definition store"
        );

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    /// Location of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Id the next insert will receive
    pub async fn next_id(&self) -> ProviderId {
        self.state.lock().await.next_id
    }

    fn state_from(document: StoreDocument<S>) -> Result<StoreState<S>> {
        let definitions: BTreeMap<_, _> = document
            .definitions
            .into_iter()
            .map(|definition| (definition.id, definition))
            .collect();
        let highest = definitions.keys().next_back().copied().unwrap_or(0);
        Ok(StoreState {
            next_id: document.next_id.max(following_id(highest)?).max(1),
            definitions,
        })
    }

    async fn persist(&self, state: &StoreState<S>) -> Result<()> {
        let document = StoreDocument {
            next_id: state.next_id,
            definitions: state.definitions.values().cloned().collect(),
        };
        let bytes = serde_json::to_vec_pretty(&document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io_with_source(format!("Failed to create {}", parent.display()), e)
            })?;
        }

        let temp = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp, &bytes).await.map_err(|e| {
            Error::io_with_source(format!("Failed to write {}", temp.display()), e)
        })?;
        tokio::fs::rename(&temp, &self.path).await.map_err(|e| {
            Error::io_with_source(format!("Failed to replace {}", self.path.display()), e)
        })?;

        trace!(path = %self.path.display(), "Persisted definition store");
        Ok(())
    }
}

impl<S: ProviderSettings> std::fmt::Debug for JsonFileProviderRepository<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileProviderRepository")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<S: ProviderSettings> ProviderRepository<S> for JsonFileProviderRepository<S> {
    async fn all(&self) -> Result<Vec<ProviderDefinition<S>>> {
        let state = self.state.lock().await;
        Ok(state.definitions.values().cloned().collect())
    }

    async fn get(&self, id: ProviderId) -> Result<ProviderDefinition<S>> {
        let state = self.state.lock().await;
        state.definitions.get(&id).cloned().ok_or_else(|| missing(id))
    }

    async fn insert(&self, definition: ProviderDefinition<S>) -> Result<ProviderDefinition<S>> {
        ensure_unsaved(&definition)?;

        let mut state = self.state.lock().await;
        let id = state.next_id;
        let stored = definition.with_id(id);
        state.next_id = following_id(id)?;
        state.definitions.insert(id, stored.clone());

        if let Err(e) = self.persist(&state).await {
            state.definitions.remove(&id);
            state.next_id = id;
            return Err(e);
        }
        Ok(stored)
    }

    async fn update(&self, definition: &ProviderDefinition<S>) -> Result<()> {
        ensure_saved(definition)?;

        let mut state = self.state.lock().await;
        let previous = match state.definitions.get_mut(&definition.id) {
            Some(slot) => std::mem::replace(slot, definition.clone()),
            None => return Err(missing(definition.id)),
        };

        if let Err(e) = self.persist(&state).await {
            state.definitions.insert(previous.id, previous);
            return Err(e);
        }
        Ok(())
    }

    async fn delete(&self, id: ProviderId) -> Result<()> {
        let mut state = self.state.lock().await;
        let Some(previous) = state.definitions.remove(&id) else {
            trace!(id, "Delete of unknown definition ignored");
            return Ok(());
        };

        if let Err(e) = self.persist(&state).await {
            state.definitions.insert(id, previous);
            return Err(e);
        }
        Ok(())
    }
}
