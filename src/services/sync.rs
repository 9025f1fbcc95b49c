use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::api::{map_posts, QuoteClient};
use crate::error::SyncError;
use crate::logic::errors::{classify_error, format_error_message, ErrorType};
use crate::model::quote::Quote;
use crate::store::QuoteStore;

/// Number of remote records considered per sync
pub const DEFAULT_FETCH_LIMIT: usize = 5;

/// Category assigned to every quote that came from the remote source
pub const DEFAULT_SERVER_CATEGORY: &str = "Server";

/// Outcome of one successful sync cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncReport {
    /// Quotes mapped from the remote response
    pub fetched: usize,
    /// Quotes actually appended to the store
    pub added: usize,
}

/// Commands accepted by the sync service
#[derive(Debug, Clone)]
pub enum SyncCommand {
    /// Run a sync cycle now instead of waiting for the next tick
    RunNow,
    /// Best-effort send of one quote to the remote source
    Publish(Quote),
}

/// Progress reported by the sync service
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    Started,
    Finished(SyncReport),
    Failed {
        error_type: ErrorType,
        message: String,
    },
}

/// Fetch-then-merge against the remote quote source
#[derive(Clone)]
pub struct SyncEngine {
    client: QuoteClient,
    store: QuoteStore,
    fetch_limit: usize,
    server_category: String,
}

impl SyncEngine {
    pub fn new(client: QuoteClient, store: QuoteStore) -> Self {
        Self {
            client,
            store,
            fetch_limit: DEFAULT_FETCH_LIMIT,
            server_category: DEFAULT_SERVER_CATEGORY.to_string(),
        }
    }

    pub fn with_fetch_limit(mut self, fetch_limit: usize) -> Self {
        self.fetch_limit = fetch_limit;
        self
    }

    pub fn with_server_category(mut self, category: impl Into<String>) -> Self {
        self.server_category = category.into();
        self
    }

    /// Fetch the remote list and map it into quotes
    pub async fn fetch_remote(&self) -> Result<Vec<Quote>, SyncError> {
        let posts = self.client.fetch_posts().await.map_err(|e| {
            warn!(
                "Fetch from {} failed: {}",
                self.client.endpoint(),
                format_error_message(&e)
            );
            SyncError::FetchFailed(e)
        })?;

        Ok(map_posts(posts, self.fetch_limit, &self.server_category))
    }

    /// One sync cycle: remote quotes whose text is new locally are appended
    pub async fn sync(&self) -> Result<SyncReport, SyncError> {
        let remote = self.fetch_remote().await?;
        let fetched = remote.len();
        let added = self.store.merge_unique(remote)?;

        info!("Sync fetched {} quotes, added {}", fetched, added);
        Ok(SyncReport { fetched, added })
    }

    /// Send one quote to the remote source
    ///
    /// Failures are logged and returned, but the local store is never
    /// rolled back and nothing is retried.
    pub async fn publish(&self, quote: &Quote) -> Result<(), SyncError> {
        match self.client.publish_quote(quote).await {
            Ok(()) => {
                debug!("Published quote in category '{}'", quote.category);
                Ok(())
            }
            Err(e) => {
                warn!("Publish failed: {}", format_error_message(&e));
                Err(SyncError::PublishFailed(e))
            }
        }
    }
}

fn failure_event(error: &SyncError) -> SyncEvent {
    match error {
        SyncError::FetchFailed(e) | SyncError::PublishFailed(e) => SyncEvent::Failed {
            error_type: classify_error(e),
            message: format_error_message(e),
        },
        SyncError::Store(e) => SyncEvent::Failed {
            error_type: ErrorType::Other,
            message: e.to_string(),
        },
    }
}

async fn run_cycle(engine: &SyncEngine, event_tx: &mpsc::UnboundedSender<SyncEvent>) {
    let _ = event_tx.send(SyncEvent::Started);

    let event = match engine.sync().await {
        Ok(report) => SyncEvent::Finished(report),
        Err(e) => failure_event(&e),
    };

    let _ = event_tx.send(event);
}

/// Spawn the sync service worker
///
/// Runs a cycle immediately, then every `period`, and on every
/// `SyncCommand::RunNow`. Cycles run one at a time on this task, so they
/// never overlap. Dropping the command sender stops the worker.
pub fn spawn_sync_service(
    engine: SyncEngine,
    period: Duration,
) -> (
    mpsc::UnboundedSender<SyncCommand>,
    mpsc::UnboundedReceiver<SyncEvent>,
) {
    let (command_tx, mut command_rx) = mpsc::unbounded_channel::<SyncCommand>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<SyncEvent>();

    tokio::spawn(async move {
        // First tick completes immediately, which gives the startup sync
        let mut tick = interval(period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    run_cycle(&engine, &event_tx).await;
                }

                command = command_rx.recv() => match command {
                    Some(SyncCommand::RunNow) => {
                        run_cycle(&engine, &event_tx).await;
                        tick.reset();
                    }
                    Some(SyncCommand::Publish(quote)) => {
                        let engine = engine.clone();
                        tokio::spawn(async move {
                            let _ = engine.publish(&quote).await;
                        });
                    }
                    None => {
                        debug!("Sync service command channel closed, stopping");
                        break;
                    }
                },
            }
        }
    });

    (command_tx, event_rx)
}
