/// Hosting scope for the trending page
///
/// Owns the background tasks spawned for a trending page: the initial seed
/// submission and every fetch cycle. Closing (or dropping) the session
/// cancels whatever is still running, so abandoned cycles never post a
/// terminal state.
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use super::aggregator::TrendingAggregator;
use crate::{log_debug, log_info};

pub struct TrendingSession {
    aggregator: Arc<TrendingAggregator>,
    token: CancellationToken,
    current_cycle: Mutex<Option<CancellationToken>>,
    tracker: TaskTracker,
}

impl TrendingSession {
    /// Launch the page: submit seed search terms and run the first cycle
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(aggregator: Arc<TrendingAggregator>) -> Self {
        let session = Self {
            aggregator,
            token: CancellationToken::new(),
            current_cycle: Mutex::new(None),
            tracker: TaskTracker::new(),
        };

        let aggregator = Arc::clone(&session.aggregator);
        session.spawn_cancellable(session.token.clone(), "seed search terms", async move {
            aggregator.seed_search_terms().await;
        });
        session.refresh();

        log_info!("Trending session started");
        session
    }

    /// Start a new fetch cycle, abandoning the one still in flight
    ///
    /// Returns false once the session is closed.
    pub fn refresh(&self) -> bool {
        if self.token.is_cancelled() {
            return false;
        }

        let cycle_token = self.token.child_token();
        {
            let mut current = self
                .current_cycle
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(previous) = current.replace(cycle_token.clone()) {
                previous.cancel();
            }
        }

        let aggregator = Arc::clone(&self.aggregator);
        self.spawn_cancellable(cycle_token, "trending cycle", async move {
            aggregator.run_cycle().await;
        });
        true
    }

    /// Cancel every running task; later refreshes are ignored
    pub fn close(&self) {
        if !self.token.is_cancelled() {
            log_info!("Trending session closed");
        }
        self.token.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait until every task spawned so far has finished or been cancelled
    pub async fn wait(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }

    fn spawn_cancellable<F>(&self, token: CancellationToken, name: &'static str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tracker.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    log_debug!("Cancelled {}", name);
                }
                _ = task => {}
            }
        });
    }
}

impl Drop for TrendingSession {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
