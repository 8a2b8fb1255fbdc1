//! Backend worker: owns the tokio runtime, the term store and the search client.

use std::{sync::Arc, thread, time::Duration};

use client_core::{
    fetch_stories, HnSearchClient, MemoryTermStore, SemiPersistentTerm, TermStore,
};
use crossbeam_channel::{Receiver, Sender};
use shared::protocol::SEARCH_TERM_KEY;
use storage::Storage;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// `None` keeps the term in memory for this run only.
    pub database_url: Option<String>,
    pub default_term: String,
    pub request_timeout: Duration,
}

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    config: BackendConfig,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.send(UiEvent::Error(UiError::new(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(run_worker(cmd_rx, ui_tx, config));
    })
}

async fn open_store(config: &BackendConfig, ui_tx: &Sender<UiEvent>) -> Arc<dyn TermStore> {
    let Some(database_url) = &config.database_url else {
        return Arc::new(MemoryTermStore::new());
    };

    match Storage::new(database_url).await {
        Ok(storage) => Arc::new(storage),
        Err(err) => {
            tracing::error!(database_url, "failed to open term store: {err:#}");
            let _ = ui_tx.send(UiEvent::Error(UiError::new(
                UiErrorContext::TermStore,
                format!("term storage unavailable, the search term will not be saved: {err}"),
            )));
            Arc::new(MemoryTermStore::new())
        }
    }
}

async fn run_worker(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, config: BackendConfig) {
    let store = open_store(&config, &ui_tx).await;
    let client = match HnSearchClient::new(config.request_timeout) {
        Ok(client) => client,
        Err(err) => {
            let _ = ui_tx.send(UiEvent::Error(UiError::new(
                UiErrorContext::BackendStartup,
                format!("backend worker startup failure: {err}"),
            )));
            tracing::error!("failed to build search client: {err}");
            return;
        }
    };
    let _ = ui_tx.send(UiEvent::Info("Backend worker ready".to_string()));

    let mut term: Option<SemiPersistentTerm<Arc<dyn TermStore>>> = None;
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::LoadTerm => {
                let loaded =
                    SemiPersistentTerm::load(store.clone(), SEARCH_TERM_KEY, &config.default_term)
                        .await;
                let _ = ui_tx.send(UiEvent::TermLoaded(loaded.value().to_string()));
                term = Some(loaded);
            }
            BackendCommand::SaveTerm { value } => match term.as_mut() {
                Some(term) => term.set(value).await,
                None => {
                    if let Err(err) = store.set(SEARCH_TERM_KEY, &value).await {
                        tracing::warn!(error = %err, "failed to persist search term");
                    }
                }
            },
            BackendCommand::FetchStories { ticket } => {
                let client = client.clone();
                let ui_tx = ui_tx.clone();
                // Fetches run detached; results apply in the order they resolve.
                tokio::spawn(async move {
                    let generation = ticket.generation;
                    fetch_stories(&client, &ticket.target, |action| {
                        let _ = ui_tx.send(UiEvent::Stories { generation, action });
                    })
                    .await;
                });
            }
        }
    }

    tracing::debug!("ui command channel closed; backend worker exiting");
}
