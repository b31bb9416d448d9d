use crate::constant::DEFAULT_LATENCY_MILLISECONDS;
use std::time::Duration;

/// Stands in for the network round trip of a real auth backend.
///
/// Once started a wait always completes: there is no timeout and no
/// abort path.
#[async_trait::async_trait]
pub trait Latency: Send + Sync {
    async fn wait(&self);
}

/// Suspends on the tokio timer for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    pub fn duration(&self) -> Duration {
        self.0
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self(Duration::from_millis(DEFAULT_LATENCY_MILLISECONDS))
    }
}

#[async_trait::async_trait]
impl Latency for SimulatedLatency {
    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// Resolves immediately, for tests that don't care about timing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait::async_trait]
impl Latency for NoLatency {
    async fn wait(&self) {}
}
