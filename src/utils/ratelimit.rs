//! Fixed-delay rate limiting between provider requests

use std::time::Duration;

/// Sleep for `delay`, skipping the timer entirely when it is zero
pub async fn pause(delay: Duration) {
    if delay.is_zero() {
        return;
    }

    tracing::debug!("Rate limit: waiting {}ms", delay.as_millis());
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let started = Instant::now();
        pause(Duration::ZERO).await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_delay() {
        let started = tokio::time::Instant::now();
        pause(Duration::from_millis(500)).await;
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
