use std::time::Duration;

use async_trait::async_trait;

/// Suspends the caller between status polls.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
