//! Timeout and retry policy for remote completion calls

use std::future::Future;
use std::time::Duration;
use log::{debug, warn};

/// Retry policy for failed requests
#[derive(Debug, Clone)]
pub struct RetryPolicy
{   pub max_retries: usize
  , pub backoff_multiplier: f32
  , pub initial_backoff: Duration
  , pub timeout: Duration
}

impl RetryPolicy
{   /// Create a new retry policy
    pub fn new(
      max_retries: usize
    , backoff_multiplier: f32
    , initial_backoff_ms: u64
    , timeout_secs: u64
    ) -> Self
    {   RetryPolicy
        {   max_retries
          , backoff_multiplier
          , initial_backoff: Duration::from_millis(
              initial_backoff_ms
            )
          , timeout: Duration::from_secs(timeout_secs)
        }
    }

    /// Calculate backoff duration for attempt number
    pub fn backoff_for_attempt(
      &self
    , attempt: usize
    ) -> Duration
    {   debug!("Calculating backoff for attempt {}", attempt);
        let multiplier
          = self.backoff_multiplier.powi(attempt as i32);
        Duration::from_millis(
          (self.initial_backoff.as_millis() as f32
            * multiplier) as u64
        )
    }

    /// Run `call` under the per-attempt timeout, retrying
    /// transient failures up to `max_retries` times.
    pub async fn run<F, Fut, T>(
      &self
    , mut call: F
    ) -> Result<T, crate::error::Error>
    where F: FnMut() -> Fut
        , Fut: Future<Output = Result<T, crate::error::Error>>
    {   let mut attempt = 0;
        loop
        {   let outcome
              = match tokio::time::timeout(self.timeout, call()).await
              {   Ok(result) => result
                , Err(_) => Err(crate::error::Error::Timeout)
              };

            match outcome
            {   Ok(value) => return Ok(value)
              , Err(e) if e.is_transient()
                  && attempt < self.max_retries => {
                  let backoff = self.backoff_for_attempt(attempt);
                  warn!(
                    "Attempt {} failed ({}), retrying in {:?}",
                    attempt + 1, e, backoff
                  );
                  tokio::time::sleep(backoff).await;
                  attempt += 1;
                }
              , Err(e) => return Err(e)
            }
        }
    }
}

impl Default for RetryPolicy
{   fn default() -> Self
    {   RetryPolicy::from(&crate::config::FailoverConfig::default())
    }
}

impl From<&crate::config::FailoverConfig> for RetryPolicy
{   fn from(config: &crate::config::FailoverConfig) -> Self
    {   RetryPolicy::new(
          config.max_retries
        , config.backoff_multiplier
        , config.initial_backoff_ms
        , config.timeout_secs
        )
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fast_policy(max_retries: usize) -> RetryPolicy
    {   RetryPolicy
        {   max_retries
          , backoff_multiplier: 2.0
          , initial_backoff: Duration::from_millis(1)
          , timeout: Duration::from_millis(200)
        }
    }

    #[test]
    fn backoff_grows_geometrically()
    {   let policy = RetryPolicy::new(3, 2.0, 100, 30);
        assert_eq!(policy.backoff_for_attempt(0), Duration::from_millis(100));
        assert_eq!(policy.backoff_for_attempt(2), Duration::from_millis(400));
    }

    #[test]
    fn default_allows_exactly_one_retry()
    {   let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 1);
        assert_eq!(policy.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn transient_failure_is_retried_once()
    {   let calls = AtomicUsize::new(0);
        let result = fast_policy(1).run(|| {
          let n = calls.fetch_add(1, Ordering::SeqCst);
          async move {
            if n == 0
            {   Err(Error::HttpError("connection reset".into()))
            } else
            {   Ok("second time lucky")
            }
          }
        }).await;
        assert_eq!(result, Ok("second time lucky"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn retries_are_bounded()
    {   let calls = AtomicUsize::new(0);
        let result: Result<(), Error> = fast_policy(1).run(|| {
          calls.fetch_add(1, Ordering::SeqCst);
          async { Err(Error::RateLimitExceeded) }
        }).await;
        assert_eq!(result, Err(Error::RateLimitExceeded));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn permanent_failure_is_not_retried()
    {   let calls = AtomicUsize::new(0);
        let result: Result<(), Error> = fast_policy(1).run(|| {
          calls.fetch_add(1, Ordering::SeqCst);
          async {
            Err(Error::ApiError
            {   status: 401
              , message: "invalid key".into()
            })
          }
        }).await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn slow_call_times_out()
    {   let result: Result<(), Error> = fast_policy(0).run(|| async {
          tokio::time::sleep(Duration::from_secs(5)).await;
          Ok(())
        }).await;
        assert_eq!(result, Err(Error::Timeout));
    }
}
