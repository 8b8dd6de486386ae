//! Retry logic with exponential backoff for service operations.
//!
//! Service methods run each unit of work, usually one database transaction, through a
//! [`RetryContext`]. Errors are classified with [`Error::to_retry_strategy`]: a dropped
//! connection or exhausted pool is retried after a backoff, anything else is returned
//! to the caller on the first attempt.

use std::{future::Future, pin::Pin, time::Duration};

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Boxed future returned by a retried operation.
pub type RetryFuture<R> = Pin<Box<dyn Future<Output = Result<R, Error>> + Send>>;

/// Context for executing operations with automatic retry logic.
///
/// # Retry Behavior
///
/// - **Max attempts**: 3 (default)
/// - **Backoff strategy**: Exponential starting at 500 milliseconds (0.5s, 1s, 2s, ...)
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
/// - **Permanent failures**: Errors with `ErrorRetryStrategy::Fail` return immediately
///
/// # Example
///
/// ```ignore
/// let ctx = RetryContext::new();
/// let db = self.db.clone();
///
/// ctx.execute_with_retry(&format!("get save ID {}", id), || {
///     let db = db.clone();
///
///     Box::pin(async move {
///         let save_repo = SaveRepository::new(&db);
///
///         Ok(save_repo.get_by_id(id).await?)
///     })
/// })
/// .await?;
/// ```
pub struct RetryContext {
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Backoff before the first retry, doubles with each retry
    initial_backoff: Duration,
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(500);

    /// Creates a new retry context with 3 attempts and a 500ms initial backoff.
    pub fn new() -> Self {
        Self::with_backoff(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_INITIAL_BACKOFF)
    }

    /// Creates a retry context with a custom attempt limit and initial backoff.
    ///
    /// `max_attempts` is raised to 1 if 0 is given.
    pub fn with_backoff(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
        }
    }

    /// Executes an operation, retrying transient failures with exponential backoff.
    ///
    /// The operation is called once per attempt and must build a fresh future each
    /// time, so any transaction it opens is rolled back before the next attempt.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "update save ID ...")
    /// - `operation` - Function returning the boxed future for one attempt
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error)` - Operation failed permanently or exhausted all retry attempts
    pub async fn execute_with_retry<R, F>(&self, description: &str, operation: F) -> Result<R, Error>
    where
        F: Fn() -> RetryFuture<R>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        match e {
                            // Client mistakes, returned as 4xx
                            Error::TrackerError(_) | Error::RequestError(_) => {
                                tracing::debug!("Rejected {}: {}", description, e)
                            }
                            _ => tracing::error!("Permanent error for {}: {:?}", description, e),
                        }
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.initial_backoff * 2_u32.pow(attempt_count - 1);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}
