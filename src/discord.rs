use std::time::Duration;

use tracing::{error, info, warn};

use crate::error::ReportError;

/// Discord rejects webhook messages longer than this many characters.
pub const DISCORD_MAX_LEN: usize = 2000;

/// Retries per message after a rate limit or server error.
pub const MAX_RETRIES: u32 = 5;

/// First wait when the webhook gives no `Retry-After`; doubled on every retry.
pub const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

// Longest wait taken from a `Retry-After` header.
const MAX_RETRY_AFTER_SECS: f64 = 300.0;

/// Simple Discord webhook client encapsulating the hook URL.
#[derive(Debug, Clone)]
pub struct Discord {
    hook_url: String,
}

impl Discord {
    /// Create a new Discord client with the provided webhook URL.
    pub fn new(hook_url: String) -> Self {
        Self { hook_url }
    }

    /// Post a simple text message to the webhook URL, retrying on 429 and 5xx.
    pub fn post(&self, content: &str) -> Result<(), ReportError> {
        let payload = serde_json::json!({ "content": content });
        let mut attempt = 0u32;
        let mut backoff = INITIAL_BACKOFF;
        loop {
            let resp = ureq::post(&self.hook_url)
                .config()
                .http_status_as_error(false)
                .build()
                .send_json(&payload)
                .inspect_err(|e| error!(error = %e, "Failed to post to Discord webhook"))?;
            let status = resp.status().as_u16();
            if resp.status().is_success() {
                info!(status, "Posted message to Discord webhook");
                return Ok(());
            }

            let retry_after = resp.headers().get("retry-after").and_then(|h| h.to_str().ok());
            match retry_delay(status, retry_after, attempt, backoff) {
                Some(wait) => {
                    warn!(status, ?wait, attempt = attempt + 1, max_retries = MAX_RETRIES, "Transient webhook status; retrying");
                    std::thread::sleep(wait);
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                }
                None => {
                    error!(status, attempt, "Discord webhook rejected the message");
                    return Err(ReportError::Webhook { status });
                }
            }
        }
    }

    /// Post messages in order, stopping at the first failure. Returns how many were posted.
    pub fn post_all(&self, posts: &[String]) -> Result<usize, ReportError> {
        for (posted, content) in posts.iter().enumerate() {
            if let Err(e) = self.post(content) {
                error!(posted, total = posts.len(), "Stopped posting after a failure");
                return Err(e);
            }
        }
        Ok(posts.len())
    }
}

/// Wait before retrying a response with `status`, or `None` when it should not be retried.
///
/// Only 429 and 5xx are retried, at most `MAX_RETRIES` times. A parseable `Retry-After`
/// (seconds, fractional allowed) wins over the exponential `backoff`.
pub fn retry_delay(status: u16, retry_after: Option<&str>, attempt: u32, backoff: Duration) -> Option<Duration> {
    let transient = status == 429 || (500..600).contains(&status);
    if !transient || attempt >= MAX_RETRIES {
        return None;
    }
    let header_wait = retry_after
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .map(|secs| Duration::from_secs_f64(secs.min(MAX_RETRY_AFTER_SECS)));
    Some(header_wait.unwrap_or(backoff))
}
