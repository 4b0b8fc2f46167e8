use std::sync::Arc;
use std::time::Duration;

use time::OffsetDateTime;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::message::StoredMessage;
use crate::store::Store;

/// Periodically deletes messages that have outlived retention plus the
/// deletion buffer.
///
/// The buffer is the grace window past nominal retention in which a
/// subscriber can still attach and pull missed messages. Retention is purely
/// time-based: delivery receipts never gate deletion.
pub struct RetentionSweeper {
    store: Store<StoredMessage>,
    retention: Duration,
    buffer: Duration,
    interval: Duration,
    in_flight: Arc<Mutex<()>>,
}

impl RetentionSweeper {
    pub fn new(store: Store<StoredMessage>, config: &StorageConfig) -> Self {
        const DAY: u64 = 24 * 60 * 60;
        Self {
            store,
            retention: Duration::from_secs(config.retention_days as u64 * DAY),
            buffer: Duration::from_secs(config.deletion_buffer_days as u64 * DAY),
            interval: Duration::from_secs(config.deletion_interval_hours as u64 * 60 * 60),
            in_flight: Arc::new(Mutex::new(())),
        }
    }

    /// Runs the sweep ticker until `shutdown` fires. A tick that finds a
    /// sweep still in progress is skipped entirely, not queued.
    pub async fn run(self: Arc<Self>, shutdown: CancellationToken) {
        let start = tokio::time::Instant::now() + self.interval;
        let mut ticker = tokio::time::interval_at(start, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    tracing::debug!("trying to clean messages");
                    let Ok(guard) = Arc::clone(&self.in_flight).try_lock_owned() else {
                        tracing::debug!("message cleanup still in progress");
                        continue;
                    };
                    let sweeper = Arc::clone(&self);
                    tokio::spawn(async move {
                        let _guard = guard;
                        match sweeper.sweep_once(OffsetDateTime::now_utc()).await {
                            Ok(count) => tracing::info!(count, "cleaned up messages"),
                            Err(err) => tracing::error!(error = %err, "message cleanup failed"),
                        }
                    });
                }
            }
        }
    }

    /// One pass of the retention policy. Returns how many messages were
    /// deleted.
    pub async fn sweep_once(&self, now: OffsetDateTime) -> Result<usize, StorageError> {
        tracing::debug!("starting message cleanup");
        let mut count = 0;
        for message in self.store.get_all().await? {
            let cutoff = message.received_at + self.retention + self.buffer;
            if now > cutoff {
                self.store.delete(&message.id).await?;
                count += 1;
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &std::path::Path) -> StorageConfig {
        StorageConfig {
            directory: dir.to_path_buf(),
            retention_days: 2,
            deletion_buffer_days: 2,
            deletion_interval_hours: 2,
            inbox_capacity: 16,
        }
    }

    fn aged_message(age: Duration) -> StoredMessage {
        StoredMessage::new(
            "x".to_string(),
            String::new(),
            "c".to_string(),
            OffsetDateTime::now_utc() - age,
        )
    }

    #[tokio::test]
    async fn sweep_deletes_only_expired_messages() {
        const DAY: Duration = Duration::from_secs(24 * 60 * 60);
        let dir = tempfile::tempdir().unwrap();
        let store: Store<StoredMessage> = Store::open(dir.path().join("messages")).await.unwrap();

        let expired = aged_message(5 * DAY);
        let fresh = aged_message(3 * DAY);
        store.put(&expired.id, &expired).await.unwrap();
        store.put(&fresh.id, &fresh).await.unwrap();

        let sweeper = RetentionSweeper::new(store.clone(), &config(dir.path()));
        assert_eq!(
            sweeper.sweep_once(OffsetDateTime::now_utc()).await.unwrap(),
            1
        );

        assert!(store.get(&expired.id).await.unwrap().is_none());
        assert!(store.get(&fresh.id).await.unwrap().is_some());

        // A second pass finds nothing further to delete.
        assert_eq!(
            sweeper.sweep_once(OffsetDateTime::now_utc()).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn sweep_keeps_messages_inside_the_buffer_window() {
        const DAY: Duration = Duration::from_secs(24 * 60 * 60);
        let dir = tempfile::tempdir().unwrap();
        let store: Store<StoredMessage> = Store::open(dir.path().join("messages")).await.unwrap();

        // Past retention but inside retention + buffer: must survive, even
        // though nothing has ever received it.
        let in_grace = aged_message(3 * DAY);
        store.put(&in_grace.id, &in_grace).await.unwrap();

        let sweeper = RetentionSweeper::new(store.clone(), &config(dir.path()));
        sweeper.sweep_once(OffsetDateTime::now_utc()).await.unwrap();
        assert!(store.get(&in_grace.id).await.unwrap().is_some());
    }
}
