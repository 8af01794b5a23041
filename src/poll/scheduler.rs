use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct PollConfig {
    pub interval: Duration,
    pub error_backoff_base: Duration,
    pub error_backoff_max: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(4_000),
            error_backoff_base: Duration::from_millis(15_000),
            error_backoff_max: Duration::from_millis(60_000),
        }
    }
}

/// Delay before the next run: the fixed interval while healthy, otherwise
/// `min(max, base * 2^(failures-1))`.
pub fn retry_delay(config: &PollConfig, consecutive_failures: u32) -> Duration {
    if consecutive_failures == 0 {
        return config.interval;
    }
    // Exponent capped at 16; the ceiling applies long before the shift
    // could overflow.
    let exp = consecutive_failures.saturating_sub(1).min(16);
    let backoff = config.error_backoff_base.saturating_mul(1u32 << exp);
    backoff.min(config.error_backoff_max)
}

/// Repeatedly drives a refresh task: run immediately, then reschedule from
/// the completion handler so at most one execution is ever in flight. Task
/// failures are logged and converted into backoff, never fatal to the loop.
pub struct PollScheduler {
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl PollScheduler {
    pub fn start<F, Fut>(config: PollConfig, mut task: F) -> PollScheduler
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send,
    {
        let (stop_tx, mut stop_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut consecutive_failures: u32 = 0;
            loop {
                if *stop_rx.borrow() {
                    break;
                }

                match task().await {
                    Ok(()) => {
                        consecutive_failures = 0;
                    }
                    Err(e) => {
                        consecutive_failures += 1;
                        tracing::warn!(
                            failures = consecutive_failures,
                            error = %e,
                            "poll task failed, backing off"
                        );
                    }
                }

                let delay = retry_delay(&config, consecutive_failures);
                tokio::select! {
                    _ = tokio::time::sleep(delay) => {}
                    _ = stop_rx.changed() => {}
                }
            }
        });

        PollScheduler { stop_tx, handle }
    }

    /// Idempotent. Once this returns, no new task execution starts; an
    /// already-running execution finishes and its result is discarded.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    /// Stop and wait for the loop to wind down.
    pub async fn shutdown(self) {
        self.stop();
        let _ = self.handle.await;
    }
}
