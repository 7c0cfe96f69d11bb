use super::*;

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// How long a parked snapshot survives without the view coming back.
const CACHE_IDLE: Duration = Duration::from_secs(60);

/// `StatusPoller` drives the cluster-status view: a timer-driven loop that
/// fetches member status, replaces the published snapshot wholesale and
/// recomputes the topology layout on every successful tick.
///
/// Idle until `start` is called; dropping the returned scope goes back to
/// Idle and parks the current snapshot so an immediate re-activation does
/// not flash an empty view.
#[derive(shrinkwraprs::Shrinkwrap, Clone)]
pub struct StatusPoller(pub Arc<Inner>);

pub struct Inner {
    api: ClusterApi,
    period: Duration,
    /// Issue counter for fetches.
    seq: AtomicU64,
    /// Sequence of the last applied reply. Guarded so that compare and
    /// publish happen atomically.
    applied: spin::Mutex<u64>,
    snapshot_tx: watch::Sender<ClusterSnapshot>,
    error_tx: watch::Sender<Option<String>>,
    cache: moka::sync::Cache<String, ClusterSnapshot>,
}

impl StatusPoller {
    pub fn new(api: ClusterApi, period: Duration) -> Self {
        let (snapshot_tx, _) = watch::channel(ClusterSnapshot::default());
        let (error_tx, _) = watch::channel(None);
        let cache = moka::sync::Cache::builder()
            .initial_capacity(1)
            .time_to_idle(CACHE_IDLE)
            .build();
        Self(Arc::new(Inner {
            api,
            period,
            seq: AtomicU64::new(0),
            applied: spin::Mutex::new(0),
            snapshot_tx,
            error_tx,
            cache,
        }))
    }

    /// Latest published snapshot. The receiver only ever sees wholesale
    /// replacements, never the poller's internal buffer.
    pub fn snapshot(&self) -> watch::Receiver<ClusterSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Side channel for fetch failures. Cleared on the next success;
    /// a failure never unpublishes the previous snapshot.
    pub fn last_error(&self) -> watch::Receiver<Option<String>> {
        self.error_tx.subscribe()
    }

    /// Transition Idle -> Polling for the given view. The first fetch goes
    /// out immediately; a parked snapshot, if any, is restored before it
    /// lands.
    pub fn start(&self, view_key: &str) -> PollScope {
        let view_key = view_key.to_owned();
        if let Some(parked) = self.cache.get(&view_key) {
            self.snapshot_tx.send_replace(parked);
        }
        info!("cluster status polling started (view={view_key})");

        let token = CancellationToken::new();
        let task_token = token.clone();
        let this = self.clone();
        let key = view_key.clone();
        tokio::spawn(async move {
            let mut tick = tokio::time::interval(this.period);
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => break,
                    _ = tick.tick() => this.spawn_fetch(key.clone()),
                }
            }
        });

        PollScope {
            poller: self.clone(),
            view_key,
            token,
        }
    }

    /// Fetches run detached from the timer, so a slow reply can overlap a
    /// newer one; `apply` sorts that out by sequence number.
    fn spawn_fetch(&self, view_key: String) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let this = self.clone();
        tokio::spawn(async move {
            match this.api.fetch_status().await {
                Ok(members) => this.apply(seq, &view_key, members),
                Err(err) => {
                    warn!("cluster status fetch failed: {err}");
                    this.error_tx.send_replace(Some(err.to_string()));
                }
            }
        });
    }

    /// Publish a fetched member set unless a fresher reply already landed.
    pub(crate) fn apply(&self, seq: u64, view_key: &str, members: Vec<MemberStatus>) {
        let mut applied = self.applied.lock();
        if seq <= *applied {
            debug!("discarding stale status reply (seq={seq})");
            return;
        }
        *applied = seq;
        self.snapshot_tx
            .send_replace(ClusterSnapshot::from_members(members));
        self.error_tx.send_replace(None);
        // The parked copy is superseded the moment a fresh poll lands.
        self.cache.invalidate(view_key);
    }
}

/// Scope guard for one activation of the status view.
/// Dropping it stops the timer and parks the current snapshot under the
/// view key for `CACHE_IDLE`.
#[must_use = "dropping the scope stops the poll"]
pub struct PollScope {
    poller: StatusPoller,
    view_key: String,
    token: CancellationToken,
}

impl Drop for PollScope {
    fn drop(&mut self) {
        self.token.cancel();
        let last = self.poller.snapshot_tx.borrow().clone();
        if !last.is_empty() {
            self.poller.cache.insert(self.view_key.clone(), last);
        }
        info!("cluster status polling stopped (view={})", self.view_key);
    }
}
