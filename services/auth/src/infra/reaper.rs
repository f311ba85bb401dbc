use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::clock::Clock;
use crate::domain::repository::LoginSessionStore;
use crate::infra::memory::InMemoryLoginSessionStore;

/// Spawn a task that purges expired login sessions every `interval`.
///
/// Expiry is otherwise lazy: sessions are only removed when a verify touches
/// them after they expire, so abandoned logins accumulate without this task.
pub fn spawn_session_reaper<C>(
    store: InMemoryLoginSessionStore,
    clock: C,
    interval: Duration,
) -> JoinHandle<()>
where
    C: Clock + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately; skip it so the first sweep runs one interval in.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match store.purge_expired(clock.now()).await {
                Ok(0) => {}
                Ok(purged) => debug!(purged, "purged expired login sessions"),
                Err(e) => warn!(error = %e, "login session sweep failed"),
            }
        }
    })
}
